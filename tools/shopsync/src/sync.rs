//! Client for the remote sell/buy totals service.
//!
//! One probe, one concurrent pair of GETs per sync, one POST per transaction.
//! No retries, no polling and no timeouts: a failed call leaves the last good
//! totals in place and emits exactly one notification.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};
use shopsync_common::currency::format_taka;
use shopsync_common::transaction::Transaction;
use tracing::{debug, info, warn};

pub const DEFAULT_API_URL: &str = "https://fastworking.onrender.com";

const SELLS_PATH: &str = "/api/sells";
const BUYS_PATH: &str = "/api/buys";
const TRANSACTION_PATH: &str = "/api/transaction";

#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Idle,
    Checking,
    Online,
    Offline,
}

impl SyncStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncStatus::Idle => "idle",
            SyncStatus::Checking => "checking",
            SyncStatus::Online => "online",
            SyncStatus::Offline => "offline",
        }
    }
}

/// Displayed aggregate totals, in taka.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub sells: u64,
    pub buys: u64,
}

impl Default for Totals {
    fn default() -> Self {
        Self {
            sells: 7250,
            buys: 4500,
        }
    }
}

/// Totals as reported by the server. A field the server left out is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteTotals {
    pub sells: Option<u64>,
    pub buys: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Failure,
}

/// A transient, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    fn success(title: &str, description: String) -> Self {
        Self {
            level: NotificationLevel::Success,
            title: title.to_string(),
            description,
        }
    }

    fn failure(title: &str, description: String) -> Self {
        Self {
            level: NotificationLevel::Failure,
            title: title.to_string(),
            description,
        }
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in order.
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}

/// Reads a numeric total, accepting integer or float JSON numbers.
fn total_field(body: &Value, field: &str) -> Option<u64> {
    let value = body.get(field)?;
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
}

/// Thin HTTP wrapper around the three endpoints.
#[derive(Debug, Clone)]
pub struct RemoteApi {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Succeeds on any 2xx from the sells endpoint.
    pub async fn probe(&self) -> Result<(), SyncError> {
        let url = self.url(SELLS_PATH);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| SyncError::Network {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(SyncError::Status { url, status, body })
        }
    }

    async fn fetch_json(&self, path: &str) -> Result<Value, SyncError> {
        let url = self.url(path);
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| SyncError::Network {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Status { url, status, body });
        }
        resp.json().await.map_err(|source| SyncError::Decode { url, source })
    }

    /// Issues both GETs concurrently and waits for both.
    pub async fn fetch_totals(&self) -> Result<RemoteTotals, SyncError> {
        let (sells, buys) =
            futures::future::join(self.fetch_json(SELLS_PATH), self.fetch_json(BUYS_PATH)).await;
        if let Err(SyncError::Status { url, body, .. }) = &sells {
            debug!(%url, %body, "sells error body");
        }
        if let Err(SyncError::Status { url, body, .. }) = &buys {
            debug!(%url, %body, "buys error body");
        }
        let (sells, buys) = (sells?, buys?);
        Ok(RemoteTotals {
            sells: total_field(&sells, "total_sells"),
            buys: total_field(&buys, "total_buys"),
        })
    }

    pub async fn submit_transaction(&self, encoded: &str) -> Result<(), SyncError> {
        let url = self.url(TRANSACTION_PATH);
        let resp = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&json!({ "data": encoded }))
            .send()
            .await
            .map_err(|source| SyncError::Network {
                url: url.clone(),
                source,
            })?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(SyncError::Status { url, status, body })
        }
    }
}

/// Sync state plus the displayed totals.
pub struct SyncAdapter<N> {
    api: RemoteApi,
    notifier: N,
    status: SyncStatus,
    totals: Totals,
    last_synced: Option<DateTime<Utc>>,
}

impl<N: Notifier> SyncAdapter<N> {
    pub fn new(api: RemoteApi, notifier: N) -> Self {
        Self {
            api,
            notifier,
            status: SyncStatus::Idle,
            totals: Totals::default(),
            last_synced: None,
        }
    }

    pub fn status(&self) -> SyncStatus {
        self.status
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.last_synced
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }

    fn transition(&mut self, next: SyncStatus) {
        if self.status != next {
            debug!(from = self.status.as_str(), to = next.as_str(), "sync status");
        }
        self.status = next;
    }

    /// Checks reachability without touching totals or notifying.
    pub async fn probe(&mut self) -> SyncStatus {
        self.transition(SyncStatus::Checking);
        match self.api.probe().await {
            Ok(()) => {
                info!(url = self.api.base_url(), "API online");
                self.transition(SyncStatus::Online);
            }
            Err(e) => {
                warn!("API probe failed: {e}");
                self.transition(SyncStatus::Offline);
            }
        }
        self.status
    }

    /// Fetches both totals. On failure the previous totals are kept.
    pub async fn sync(&mut self) -> Result<Totals, SyncError> {
        self.transition(SyncStatus::Checking);
        info!(url = self.api.base_url(), "syncing totals");
        match self.api.fetch_totals().await {
            Ok(remote) => {
                if remote.sells.is_none() || remote.buys.is_none() {
                    warn!(?remote, "response missing a total, keeping previous value");
                }
                self.totals = Totals {
                    sells: remote.sells.unwrap_or(self.totals.sells),
                    buys: remote.buys.unwrap_or(self.totals.buys),
                };
                self.last_synced = Some(Utc::now());
                self.transition(SyncStatus::Online);
                info!(sells = self.totals.sells, buys = self.totals.buys, "sync complete");
                self.notifier.notify(Notification::success(
                    "Data Synced!",
                    format!(
                        "Sales: {} | Buys: {}",
                        format_taka(self.totals.sells),
                        format_taka(self.totals.buys)
                    ),
                ));
                Ok(self.totals)
            }
            Err(e) => {
                warn!("sync failed: {e}");
                self.transition(SyncStatus::Offline);
                let notification = match &e {
                    SyncError::Status { status, .. } => {
                        Notification::failure("Sync Failed", format!("Server response: {status}"))
                    }
                    SyncError::Network { .. } | SyncError::Decode { .. } => {
                        Notification::failure("Connection Error", e.to_string())
                    }
                };
                self.notifier.notify(notification);
                Err(e)
            }
        }
    }

    /// Posts one encoded transaction. Sync status and totals are not changed.
    pub async fn send_transaction(&mut self, tx: &Transaction) -> Result<(), SyncError> {
        let encoded = tx.encode();
        info!(data = %encoded, "sending transaction");
        match self.api.submit_transaction(&encoded).await {
            Ok(()) => {
                self.notifier.notify(Notification::success(
                    "Transaction Sent!",
                    format!("Data: {encoded} recorded successfully"),
                ));
                Ok(())
            }
            Err(e) => {
                warn!("transaction {encoded} failed: {e}");
                let notification = match &e {
                    SyncError::Status { status, .. } => Notification::failure(
                        "Transaction Failed",
                        format!("Server response: {status}"),
                    ),
                    SyncError::Network { .. } | SyncError::Decode { .. } => {
                        Notification::failure("Send Failed", e.to_string())
                    }
                };
                self.notifier.notify(notification);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopsync_common::transaction::{PaymentType, TransactionKind};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Nothing listens on port 1, so connects fail immediately.
    const DEAD_URL: &str = "http://127.0.0.1:1";

    async fn mock_get(server: &MockServer, route: &str, code: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(code).set_body_json(body))
            .mount(server)
            .await;
    }

    fn adapter(url: &str) -> SyncAdapter<Vec<Notification>> {
        SyncAdapter::new(RemoteApi::new(url), Vec::new())
    }

    #[tokio::test]
    async fn test_sync_updates_totals() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 200, json!({ "total_sells": 12000 })).await;
        mock_get(&server, BUYS_PATH, 200, json!({ "total_buys": 8300 })).await;

        let mut adapter = adapter(&server.uri());
        let totals = adapter.sync().await.unwrap();
        assert_eq!(totals, Totals { sells: 12000, buys: 8300 });
        assert_eq!(adapter.totals(), totals);
        assert_eq!(adapter.status(), SyncStatus::Online);
        assert!(adapter.last_synced().is_some());

        let notes = adapter.notifier();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].level, NotificationLevel::Success);
        assert_eq!(notes[0].title, "Data Synced!");
        assert_eq!(notes[0].description, "Sales: ৳12,000 | Buys: ৳8,300");
    }

    #[tokio::test]
    async fn test_sync_non_2xx_keeps_totals() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 200, json!({ "total_sells": 12000 })).await;
        mock_get(&server, BUYS_PATH, 500, json!({ "error": "boom" })).await;

        let mut adapter = adapter(&server.uri());
        let err = adapter.sync().await.unwrap_err();
        assert!(matches!(err, SyncError::Status { status, .. } if status == StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(adapter.totals(), Totals::default());
        assert_eq!(adapter.status(), SyncStatus::Offline);
        assert!(adapter.last_synced().is_none());

        let notes = adapter.notifier();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Sync Failed");
        assert_eq!(notes[0].level, NotificationLevel::Failure);
    }

    #[tokio::test]
    async fn test_sells_failure_with_buys_ok_keeps_totals() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 502, json!({ "error": "bad gateway" })).await;
        mock_get(&server, BUYS_PATH, 200, json!({ "total_buys": 8300 })).await;

        let mut adapter = adapter(&server.uri());
        assert!(adapter.sync().await.is_err());
        assert_eq!(adapter.totals(), Totals::default());
        assert_eq!(adapter.status(), SyncStatus::Offline);

        let notes = adapter.notifier();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Sync Failed");
        assert_eq!(notes[0].description, "Server response: 502 Bad Gateway");
    }

    #[tokio::test]
    async fn test_sync_network_failure_keeps_totals() {
        let mut adapter = adapter(DEAD_URL);
        assert!(adapter.sync().await.is_err());
        assert_eq!(adapter.totals(), Totals::default());
        assert_eq!(adapter.status(), SyncStatus::Offline);

        let notes = adapter.into_notifier();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Connection Error");
    }

    #[tokio::test]
    async fn test_failed_sync_after_success_keeps_last_good() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 200, json!({ "total_sells": 100 })).await;
        mock_get(&server, BUYS_PATH, 200, json!({ "total_buys": 50 })).await;
        let mut adapter = adapter(&server.uri());
        adapter.sync().await.unwrap();

        server.reset().await;
        mock_get(&server, SELLS_PATH, 503, json!({})).await;
        mock_get(&server, BUYS_PATH, 503, json!({})).await;
        assert!(adapter.sync().await.is_err());
        assert_eq!(adapter.totals(), Totals { sells: 100, buys: 50 });
        assert_eq!(adapter.notifier().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_field_keeps_prior_total() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 200, json!({ "total_sells": 9000.4 })).await;
        mock_get(&server, BUYS_PATH, 200, json!({ "unexpected": true })).await;

        let mut adapter = adapter(&server.uri());
        let totals = adapter.sync().await.unwrap();
        assert_eq!(totals, Totals { sells: 9000, buys: 4500 });
    }

    #[tokio::test]
    async fn test_probe() {
        let server = MockServer::start().await;
        mock_get(&server, SELLS_PATH, 200, json!({ "total_sells": 1 })).await;
        let mut online = adapter(&server.uri());
        assert_eq!(online.status(), SyncStatus::Idle);
        assert_eq!(online.probe().await, SyncStatus::Online);
        assert!(online.notifier().is_empty());

        let mut offline = adapter(DEAD_URL);
        assert_eq!(offline.probe().await, SyncStatus::Offline);
    }

    #[tokio::test]
    async fn test_send_transaction_posts_encoded_string() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TRANSACTION_PATH))
            .and(body_json(json!({ "data": "*105250" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let tx = Transaction::new(TransactionKind::Sell, PaymentType::Cash, "05", "250").unwrap();
        let mut adapter = adapter(&server.uri());
        adapter.send_transaction(&tx).await.unwrap();

        let notes = adapter.notifier();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Transaction Sent!");
        assert_eq!(notes[0].description, "Data: *105250 recorded successfully");
        assert_eq!(adapter.status(), SyncStatus::Idle);
    }

    #[tokio::test]
    async fn test_send_transaction_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TRANSACTION_PATH))
            .respond_with(ResponseTemplate::new(400))
            .mount(&server)
            .await;
        let tx = Transaction::new(TransactionKind::Buy, PaymentType::Due, "02", "1500").unwrap();

        let mut rejected = adapter(&server.uri());
        assert!(rejected.send_transaction(&tx).await.is_err());
        assert_eq!(rejected.notifier()[0].title, "Transaction Failed");

        let mut unreachable = adapter(DEAD_URL);
        assert!(unreachable.send_transaction(&tx).await.is_err());
        assert_eq!(unreachable.notifier()[0].title, "Send Failed");
        assert_eq!(unreachable.notifier().len(), 1);
    }
}
