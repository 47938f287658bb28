use clap::Parser;
use offer_hub::domain::ports::ConfigProvider;
use offer_hub::utils::{logger, validation::Validate};
use offer_hub::{
    AppState, CliConfig, Dispatcher, DispatcherConfig, HttpOfferCaller, StaticMerchantResolver,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting offer-hub");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let resolver = StaticMerchantResolver::from_urls(config.merchant_urls())?;
    let dispatcher = Dispatcher::new(
        HttpOfferCaller::new(),
        DispatcherConfig {
            max_in_flight: config.max_in_flight(),
            queue_capacity: config.queue_capacity(),
            call_timeout: config.call_timeout(),
        },
    );

    let state = Arc::new(AppState {
        dispatcher,
        resolver,
    });

    offer_hub::server::serve(state, config.bind_address()).await?;

    Ok(())
}
