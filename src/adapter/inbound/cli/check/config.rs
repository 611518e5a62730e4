use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Validate the configuration file without starting the server.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    output::field("Listen", config.server.address());
    if config.server.allowed_origins.is_empty() {
        output::field("CORS", "any origin");
    } else {
        output::field("CORS", config.server.allowed_origins.join(", "));
    }
    output::field("CoinGecko", &config.upstream.coingecko_url);
    output::field("Blockscout", &config.upstream.blockscout_url);
    output::field("1inch", &config.upstream.oneinch_url);
    output::field("Chain ID", config.upstream.chain_id);
    output::field("Seed tokens", config.storage.seed_default_tokens);
    output::field("Log format", &config.logging.format);

    if config.upstream.oneinch_api_key.is_some() {
        output::success("1inch API key detected");
    } else {
        output::warning("ONEINCH_API_KEY not set; swap quotes will use fallback rates");
    }

    output::success("Configuration check complete");
    Ok(())
}
