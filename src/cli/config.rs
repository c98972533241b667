//! Handler for the `config` command.

use crate::config::Config;
use crate::error::Result;

use super::ConfigPathArg;

/// Load and validate the configuration file, reporting what was resolved.
pub fn validate(args: &ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    println!("Configuration OK: {}", args.config.display());
    println!("  api_url: {}", config.network.api_url);
    println!("  request_timeout_secs: {}", config.network.request_timeout_secs);
    println!("  week_start: {}", config.week_start());
    println!("  visible_per_day: {}", config.calendar.visible_per_day);
    println!(
        "  auth token: {}",
        if config.session().is_authenticated() {
            "present (from PROMOCAL_API_TOKEN)"
        } else {
            "not set"
        }
    );

    Ok(())
}
