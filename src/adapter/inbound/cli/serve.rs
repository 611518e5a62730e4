//! Handler for the `serve` command.

use tracing::info;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Load configuration, apply flag overrides, and run the API until shutdown.
pub async fn execute(args: &ServeArgs) -> Result<()> {
    let mut config = Config::load_or_default(&args.config)?;
    apply_overrides(&mut config, args);
    config.init_logging();

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", args.config.display());
    output::field("Listen", config.server.address());

    info!(
        config = %args.config.display(),
        address = %config.server.address(),
        "nexus-portfolio starting"
    );

    let state = bootstrap::build_state(&config);
    http::serve(state, &config.server).await
}

fn apply_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs || output::is_json() {
        config.logging.format = "json".to_string();
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn flags_override_file_values() {
        let mut config = Config::default();
        let args = ServeArgs {
            config: PathBuf::from("config.toml"),
            port: Some(8081),
            log_level: Some("debug".into()),
            json_logs: true,
        };

        apply_overrides(&mut config, &args);

        assert_eq!(config.server.port, 8081);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }
}
