pub mod aggregator;
pub mod dispatcher;

pub use crate::domain::model::{CallFailure, Merchant, Offer, Outcome, Product, ProductRequest};
pub use crate::domain::ports::{ConfigProvider, MerchantResolver, OfferCaller};
pub use crate::utils::error::Result;
