//! Compact transaction strings posted to the totals service.
//!
//! Layout, no delimiters: `[kind][payment][entity id: 2 digits][amount digits]`
//! where kind is `*` (sell) or `#` (buy) and payment is `1` (cash) or `0` (due).
//! For example `*105250` is a cash sale of 250 taka to entity `05`.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    #[error("invalid amount {0:?}: expected digits only")]
    InvalidAmount(String),
    #[error("invalid entity id {0:?}: expected exactly two digits")]
    InvalidEntityId(String),
    #[error("invalid transaction kind {0:?}: expected '*' or '#'")]
    InvalidKind(char),
    #[error("invalid payment flag {0:?}: expected '1' or '0'")]
    InvalidPayment(char),
    #[error("transaction string {0:?} is too short")]
    TooShort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Sell,
    Buy,
}

impl TransactionKind {
    pub fn marker(self) -> char {
        match self {
            TransactionKind::Sell => '*',
            TransactionKind::Buy => '#',
        }
    }

    fn from_marker(c: char) -> Result<Self, TransactionError> {
        match c {
            '*' => Ok(TransactionKind::Sell),
            '#' => Ok(TransactionKind::Buy),
            other => Err(TransactionError::InvalidKind(other)),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sell" => Ok(TransactionKind::Sell),
            "buy" => Ok(TransactionKind::Buy),
            other => Err(format!("unknown transaction kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Cash,
    Due,
}

impl PaymentType {
    pub fn marker(self) -> char {
        match self {
            PaymentType::Cash => '1',
            PaymentType::Due => '0',
        }
    }

    fn from_marker(c: char) -> Result<Self, TransactionError> {
        match c {
            '1' => Ok(PaymentType::Cash),
            '0' => Ok(PaymentType::Due),
            other => Err(TransactionError::InvalidPayment(other)),
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentType::Cash),
            "due" => Ok(PaymentType::Due),
            other => Err(format!("unknown payment type: {other}")),
        }
    }
}

/// A validated transaction ready to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub payment: PaymentType,
    entity_id: String,
    amount: String,
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl Transaction {
    /// Validates the form fields. `entity_id` must be two digits ("00" when
    /// unassigned); `amount` must be a non-empty digit string and is kept as
    /// typed.
    pub fn new(
        kind: TransactionKind,
        payment: PaymentType,
        entity_id: &str,
        amount: &str,
    ) -> Result<Self, TransactionError> {
        if entity_id.len() != 2 || !all_digits(entity_id) {
            return Err(TransactionError::InvalidEntityId(entity_id.to_string()));
        }
        if !all_digits(amount) {
            return Err(TransactionError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            kind,
            payment,
            entity_id: entity_id.to_string(),
            amount: amount.to_string(),
        })
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Numeric amount in taka, if it fits in a `u64`.
    pub fn amount_value(&self) -> Option<u64> {
        self.amount.parse().ok()
    }

    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(4 + self.amount.len());
        out.push(self.kind.marker());
        out.push(self.payment.marker());
        out.push_str(&self.entity_id);
        out.push_str(&self.amount);
        out
    }

    pub fn decode(encoded: &str) -> Result<Self, TransactionError> {
        let mut chars = encoded.chars();
        let (Some(kind), Some(payment)) = (chars.next(), chars.next()) else {
            return Err(TransactionError::TooShort(encoded.to_string()));
        };
        let kind = TransactionKind::from_marker(kind)?;
        let payment = PaymentType::from_marker(payment)?;
        let rest = chars.as_str();
        if rest.len() < 3 || !rest.is_char_boundary(2) {
            return Err(TransactionError::TooShort(encoded.to_string()));
        }
        let (entity_id, amount) = rest.split_at(2);
        Self::new(kind, payment, entity_id, amount)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}
