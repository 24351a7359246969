//! ShopSync command-line dashboard.
//!
//! Reads the shop catalog (built-in seed data or a JSON file), renders the
//! customer, shopkeeper and brand views as text, and talks to the remote
//! sell/buy totals API for `sync` and `send`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use shopsync::settings::{default_prefs_path, FileStore};
use shopsync::sync::{
    Notification, NotificationLevel, Notifier, RemoteApi, SyncAdapter, SyncStatus,
    DEFAULT_API_URL,
};
use shopsync::views;
use shopsync_common::aggregator::DealAggregator;
use shopsync_common::cart::Cart;
use shopsync_common::catalog::{Catalog, CatalogSource, JsonCatalog, SeedCatalog};
use shopsync_common::deal::DealId;
use shopsync_common::filter::{apply, customers_with_dues, FilterSpec, FilteredView};
use shopsync_common::i18n::Language;
use shopsync_common::location::{GeoLocation, DHAKA};
use shopsync_common::marker::{MapProjection, DEFAULT_RADIUS_KM, RADIUS_OPTIONS_KM};
use shopsync_common::preferences::{Preferences, Theme};
use shopsync_common::shop::ShopId;
use shopsync_common::transaction::{PaymentType, Transaction, TransactionKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shopsync", about = "Small-shop discovery for Bangladesh")]
struct Cli {
    /// Base URL of the sell/buy totals API.
    #[arg(long, env = "SHOPSYNC_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    /// JSON catalog file (default: built-in seed data).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Preferences file (default: <config dir>/shopsync/preferences.json).
    #[arg(long, env = "SHOPSYNC_PREFS", global = true)]
    prefs: Option<PathBuf>,

    /// Display language for this run only (en or bn).
    #[arg(long, global = true)]
    lang: Option<Language>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ShopQuery {
    /// Shop category, or "all".
    #[arg(long, default_value = "all")]
    category: String,

    /// Case-insensitive match on shop name or id.
    #[arg(long, default_value = "")]
    search: String,

    /// Search radius in km (1, 3, 5 or 10).
    #[arg(long, default_value_t = DEFAULT_RADIUS_KM, value_parser = parse_radius)]
    radius: f64,

    /// Only keep shops inside the radius.
    #[arg(long)]
    nearby: bool,

    /// Center latitude.
    #[arg(long, default_value_t = DHAKA.lat, allow_hyphen_values = true)]
    lat: f64,

    /// Center longitude.
    #[arg(long, default_value_t = DHAKA.lng, allow_hyphen_values = true)]
    lng: f64,
}

impl ShopQuery {
    fn center(&self) -> GeoLocation {
        GeoLocation::new(self.lat, self.lng)
    }

    fn spec(&self) -> FilterSpec {
        let spec = FilterSpec::new()
            .with_category(self.category.as_str())
            .with_search(self.search.as_str());
        if self.nearby {
            spec.within(self.center(), self.radius)
        } else {
            spec
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// List shops matching a category and search text.
    Shops(ShopQuery),
    /// Show one shop in detail.
    Shop { id: ShopId },
    /// Marker table for the shop map.
    Map(ShopQuery),
    /// Deals on offer, with the shops that carry them.
    Deals {
        /// Customer's division; deals offered there or nationwide are shown.
        #[arg(long, default_value = "Dhaka")]
        division: String,

        /// Every active deal regardless of region (shopkeeper view).
        #[arg(long)]
        all: bool,

        /// Date used for "days left" (default: today, UTC).
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Shops carrying one deal.
    Sellers { deal_id: DealId },
    /// Customers with outstanding dues.
    Dues {
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Supplier price lists, optionally building an order.
    Suppliers {
        #[arg(long, default_value = "")]
        search: String,

        /// Add "<supplier>:<product>" to the order (repeatable).
        #[arg(long = "order")]
        orders: Vec<String>,
    },
    /// Brand dashboard summary.
    Brand,
    /// Check whether the totals API is reachable.
    Status,
    /// Fetch sell/buy totals from the API.
    Sync,
    /// Record one transaction with the API, then re-sync.
    Send {
        /// sell or buy.
        #[arg(long)]
        kind: TransactionKind,

        /// cash or due.
        #[arg(long, default_value = "cash")]
        payment: PaymentType,

        /// Two-digit entity id.
        #[arg(long)]
        entity: String,

        /// Amount in whole taka.
        amount: String,
    },
    /// Show or change stored preferences.
    Prefs {
        #[arg(long)]
        language: Option<Language>,

        #[arg(long)]
        theme: Option<Theme>,

        #[arg(long, conflicts_with = "theme")]
        toggle_theme: bool,
    },
}

fn parse_radius(s: &str) -> Result<f64, String> {
    let radius: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if RADIUS_OPTIONS_KM.contains(&radius) {
        Ok(radius)
    } else {
        Err(format!("radius must be one of {RADIUS_OPTIONS_KM:?}"))
    }
}

/// Prints notifications as they arrive.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: Notification) {
        let mark = match notification.level {
            NotificationLevel::Success => "✓",
            NotificationLevel::Failure => "✗",
        };
        println!("{mark} {}: {}", notification.title, notification.description);
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => JsonCatalog::new(path)
            .load()
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => SeedCatalog.load().context("loading seed catalog")?,
    };
    info!(
        shops = catalog.shops().len(),
        deals = catalog.deals().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shopsync=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let prefs_path = cli.prefs.clone().unwrap_or_else(default_prefs_path);
    let mut store = FileStore::open(&prefs_path);
    let mut prefs = Preferences::load(&store);
    let lang = cli.lang.unwrap_or(prefs.language);

    let mut out = String::new();
    match cli.command {
        Command::Shops(query) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let view = FilteredView::new(catalog.shops(), query.spec());
            views::shop_list(&mut out, lang, &view.to_vec(), query.radius)?;
        }
        Command::Shop { id } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let shop = catalog
                .shop(id)
                .ok_or_else(|| anyhow!("no shop with id {id}"))?;
            views::shop_card(&mut out, lang, shop)?;
        }
        Command::Map(query) => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let shops = apply(catalog.shops(), &query.spec());
            let matched = shops.len();
            let projection = MapProjection::new(shops, query.center(), query.radius);
            if projection.markers.len() < matched {
                info!(
                    skipped = matched - projection.markers.len(),
                    "shops without a usable coordinate left off the map"
                );
            }
            views::map_table(&mut out, lang, &projection)?;
        }
        Command::Deals {
            division,
            all,
            today,
        } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let spec = if all {
                FilterSpec::active_deals()
            } else {
                FilterSpec::deals_for_customer(division)
            };
            let deals = apply(catalog.deals(), &spec);
            let listings = DealAggregator::from_catalog(&catalog).listings(deals);
            let today = today.unwrap_or_else(|| Utc::now().date_naive());
            views::deal_list(&mut out, lang, &listings, today)?;
        }
        Command::Sellers { deal_id } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let sellers = DealAggregator::from_catalog(&catalog).sellers_for(deal_id);
            match catalog.deal(deal_id) {
                Some(deal) => writeln!(out, "{} {}", deal.brand_name, deal.product_name)?,
                None => warn!(deal_id, "unknown deal, showing generic sellers"),
            }
            views::seller_list(&mut out, lang, &sellers)?;
        }
        Command::Dues { search } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let customers = customers_with_dues(catalog.customers(), &search);
            views::dues(&mut out, lang, &customers)?;
        }
        Command::Suppliers { search, orders } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let suppliers = apply(catalog.suppliers(), &FilterSpec::new().with_search(search));
            views::supplier_list(&mut out, &suppliers)?;
            if !orders.is_empty() {
                let mut cart = Cart::new();
                for order in &orders {
                    let (supplier, product) = order
                        .split_once(':')
                        .ok_or_else(|| anyhow!("order {order:?} is not <supplier>:<product>"))?;
                    let supplier = catalog
                        .suppliers()
                        .iter()
                        .find(|s| s.name == supplier)
                        .ok_or_else(|| anyhow!("no supplier named {supplier:?}"))?;
                    cart.add(supplier, product)?;
                }
                views::cart(&mut out, lang, &cart)?;
            }
        }
        Command::Brand => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            views::brand_overview(&mut out, lang, &catalog)?;
        }
        Command::Status => {
            let mut adapter = SyncAdapter::new(RemoteApi::new(&cli.api_url), ConsoleNotifier);
            let status = adapter.probe().await;
            views::sync_panel(
                &mut out,
                lang,
                status,
                adapter.totals(),
                adapter.last_synced(),
            )?;
            print!("{out}");
            if status == SyncStatus::Offline {
                return Err(anyhow!("{} is unreachable", cli.api_url));
            }
            return Ok(());
        }
        Command::Sync => {
            let mut adapter = SyncAdapter::new(RemoteApi::new(&cli.api_url), ConsoleNotifier);
            let result = adapter.sync().await;
            views::sync_panel(
                &mut out,
                lang,
                adapter.status(),
                adapter.totals(),
                adapter.last_synced(),
            )?;
            print!("{out}");
            result.with_context(|| format!("syncing with {}", cli.api_url))?;
            return Ok(());
        }
        Command::Send {
            kind,
            payment,
            entity,
            amount,
        } => {
            let tx = Transaction::new(kind, payment, &entity, &amount)
                .context("building transaction")?;
            let mut adapter = SyncAdapter::new(RemoteApi::new(&cli.api_url), ConsoleNotifier);
            adapter
                .send_transaction(&tx)
                .await
                .with_context(|| format!("sending {} to {}", tx.encode(), cli.api_url))?;
            if let Err(e) = adapter.sync().await {
                warn!("re-sync after send failed: {e}");
            }
            views::sync_panel(
                &mut out,
                lang,
                adapter.status(),
                adapter.totals(),
                adapter.last_synced(),
            )?;
        }
        Command::Prefs {
            language,
            theme,
            toggle_theme,
        } => {
            if let Some(language) = language {
                prefs
                    .set_language(&mut store, language)
                    .context("saving language")?;
            }
            if let Some(theme) = theme {
                prefs.set_theme(&mut store, theme).context("saving theme")?;
            }
            if toggle_theme {
                prefs.toggle_theme(&mut store).context("saving theme")?;
            }
            views::settings(&mut out, &prefs, store.path())?;
        }
    }
    print!("{out}");
    Ok(())
}
