use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "offer-hub")]
#[command(about = "Aggregates merchant price offers and serves the cheapest one")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind_address: SocketAddr,

    /// Merchant endpoints to fan product requests out to.
    // Placeholder defaults until merchant selection becomes a real rule.
    #[arg(
        long = "merchant",
        value_delimiter = ',',
        default_values_t = vec![
            "http://merchant-1.com/api/product".to_string(),
            "http://merchant-2.com/api/product".to_string(),
            "http://merchant-3.com/api/product".to_string(),
        ]
    )]
    pub merchants: Vec<String>,

    #[arg(long, default_value = "8")]
    pub max_in_flight: usize,

    #[arg(long, default_value = "32")]
    pub queue_capacity: usize,

    #[arg(long, default_value = "10")]
    pub call_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    fn merchant_urls(&self) -> &[String] {
        &self.merchants
    }

    fn max_in_flight(&self) -> usize {
        self.max_in_flight
    }

    fn queue_capacity(&self) -> usize {
        self.queue_capacity
    }

    fn call_timeout(&self) -> Duration {
        Duration::from_secs(self.call_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        for merchant in &self.merchants {
            validate_url("merchants", merchant)?;
        }
        validate_positive_number("max_in_flight", self.max_in_flight, 1)?;
        validate_range("max_in_flight", self.max_in_flight, 1, 100)?;
        validate_range("queue_capacity", self.queue_capacity, 0, 10_000)?;
        validate_positive_number("call_timeout_secs", self.call_timeout_secs as usize, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            bind_address: "127.0.0.1:8080".parse().unwrap(),
            merchants: vec!["http://merchant-1.com/api/product".to_string()],
            max_in_flight: 8,
            queue_capacity: 32,
            call_timeout_secs: 10,
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn test_invalid_merchant_url_fails() {
        let mut cfg = config();
        cfg.merchants.push("ftp://merchant.com".to_string());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_max_in_flight_fails() {
        let mut cfg = config();
        cfg.max_in_flight = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_zero_call_timeout_fails() {
        let mut cfg = config();
        cfg.call_timeout_secs = 0;
        assert!(cfg.validate().is_err());
    }
}
