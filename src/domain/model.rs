use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_price_range, Validate};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::time::Duration;
use thiserror::Error;

/// A merchant endpoint the hub can send a product request to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub api_url: String,
}

impl Merchant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            api_url: api_url.into(),
        }
    }
}

// Equality by identity + address: duplicate endpoints collapse to one call.
impl PartialEq for Merchant {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.api_url == other.api_url
    }
}

impl Eq for Merchant {}

impl Hash for Merchant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.api_url.hash(state);
    }
}

/// A product sold by a merchant at a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub merchant: Merchant,
    pub price: f64,
}

/// A merchant's priced reply to a product request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub product: Product,
}

impl Offer {
    pub fn price(&self) -> f64 {
        self.product.price
    }

    pub fn merchant_id(&self) -> &str {
        &self.product.merchant.id
    }
}

/// A client's product search: free-text term plus an inclusive price range.
///
/// Immutable once handed to the dispatcher; concurrent callers share it
/// read-only. Target merchants are resolved separately and passed alongside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub id: String,
    pub search_term: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl Validate for ProductRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("searchTerm", &self.search_term)?;
        validate_price_range(self.min_price, self.max_price)?;
        Ok(())
    }
}

/// Why a single merchant call produced no offer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CallFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("undecodable offer payload: {0}")]
    Decode(String),

    #[error("invalid offer: {reason}")]
    InvalidOffer { reason: String },

    #[error("call timed out after {0:?}")]
    Timeout(Duration),

    #[error("rejected: dispatch queue full")]
    Rejected,
}

/// The result of one offer call. `Absent` and `Failed` are both non-fatal;
/// the aggregator drops them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Offer(Offer),
    Absent,
    Failed(CallFailure),
}

impl Outcome {
    pub fn offer(&self) -> Option<&Offer> {
        match self {
            Outcome::Offer(offer) => Some(offer),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}
