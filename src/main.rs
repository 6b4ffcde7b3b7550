use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use sweet_shop::app_system::{setup_tracing, ShopConfig, ShopSystem};
use sweet_shop::console::Console;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::parse();
    setup_tracing(&config.log_level);

    info!(?config, "Starting sweet shop");

    let system = ShopSystem::start(&config);

    let mut console = Console::new(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        system.catalog_client.clone(),
    );
    console.run().await?;
    drop(console);

    system.shutdown().await?;

    info!("Sweet shop closed");
    Ok(())
}
