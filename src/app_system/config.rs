use clap::Parser;

/// Sweet shop inventory manager
#[derive(Debug, Clone, Parser)]
#[command(name = "sweet_shop")]
#[command(version, about = "Interactive inventory manager for a sweet shop")]
pub struct ShopConfig {
    /// Capacity of the catalog service request channel
    #[arg(long, default_value_t = 32, value_parser = parse_buffer_size)]
    pub buffer_size: usize,

    /// Start with an empty catalog instead of the demo sweets
    #[arg(long)]
    pub no_seed: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            no_seed: false,
            log_level: "warn".to_string(),
        }
    }
}

fn parse_buffer_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
