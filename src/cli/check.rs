//! Handler for the `check` command.

use owo_colors::OwoColorize;

use crate::calendar::{parse_iso_date, DateSpan};
use crate::config::Config;
use crate::domain::error::DomainError;
use crate::domain::Availability;
use crate::error::Result;

use super::CheckArgs;

/// Execute the availability check.
///
/// An `Undetermined` outcome is reported as its own state; it is neither a
/// usage error nor an answer, so the exit code stays zero and the user is
/// told to retry.
pub async fn execute(args: &CheckArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    let start = parse_iso_date(&args.start).ok_or(DomainError::InvalidDate {
        field: "start",
        value: args.start.clone(),
    })?;
    let end = parse_iso_date(&args.end).ok_or(DomainError::InvalidDate {
        field: "end",
        value: args.end.clone(),
    })?;
    if end < start {
        return Err(DomainError::EndBeforeStart { start, end }.into());
    }
    let span = DateSpan::new(start, end);

    let client = config.client()?;
    let availability = client.availability(args.package, span).await;

    match availability {
        Availability::Available => {
            println!(
                "{} package {} is available for {}",
                "✓".green().bold(),
                args.package,
                span
            );
        }
        Availability::Unavailable => {
            println!(
                "{} package {} is not available for {}",
                "✗".red().bold(),
                args.package,
                span
            );
        }
        Availability::Undetermined => {
            println!(
                "{} availability of package {} could not be determined - try again",
                "?".yellow().bold(),
                args.package
            );
        }
    }

    Ok(())
}
