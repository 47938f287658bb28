pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use adapters::http::HttpOfferCaller;
pub use adapters::resolver::StaticMerchantResolver;
pub use config::CliConfig;
pub use core::aggregator::select_winner;
pub use core::dispatcher::{Dispatcher, DispatcherConfig};
pub use server::AppState;
pub use utils::error::{HubError, Result};
