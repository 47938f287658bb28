use crate::domain::model::{Merchant, Outcome, ProductRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

/// One outbound offer call to one merchant.
///
/// Implementations never return an error: every failure mode (transport,
/// decode, timeout) is captured as a `Failed` outcome so one bad merchant
/// cannot abort a batch. Must be safe to invoke concurrently; calls share
/// no mutable state.
#[async_trait]
pub trait OfferCaller: Send + Sync {
    async fn call(&self, request: &ProductRequest, merchant: &Merchant) -> Outcome;
}

/// Resolves which merchants a request should be sent to.
///
/// The selection rule is a business concern outside the dispatch core;
/// keeping it behind a port lets tests and future real logic swap in
/// without touching the dispatcher or aggregator.
#[async_trait]
pub trait MerchantResolver: Send + Sync {
    async fn resolve(&self, request: &ProductRequest) -> Result<Vec<Merchant>>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> SocketAddr;
    fn merchant_urls(&self) -> &[String];
    fn max_in_flight(&self) -> usize;
    fn queue_capacity(&self) -> usize;
    fn call_timeout(&self) -> Duration;
}
