//! Handler for the `book` command.

use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::config::Config;
use crate::domain::BookingRequest;
use crate::error::Result;

use super::BookArgs;

/// Execute the booking submission.
///
/// Server rejection messages (conflicting reservation, invalid range) are
/// propagated verbatim in the error the user sees.
pub async fn execute(args: &BookArgs) -> Result<()> {
    let config = Config::load(&args.config)?;
    config.init_logging();

    let request = BookingRequest {
        package_id: args.package,
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        start_date: args.start.clone(),
        end_date: args.end.clone(),
        amount: args.amount,
    };
    request.validate()?;

    if let Some(span) = request.span() {
        println!(
            "Booking package {} for {} ({} day(s), amount {})",
            args.package,
            span,
            span.len_days(),
            args.amount
        );
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Submit booking for package {} as {} {}?",
                args.package, args.first_name, args.last_name
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    let client = config.client()?;
    let confirmation = client.create_booking(&request).await?;

    println!(
        "{} booking created: {}",
        "✓".green().bold(),
        confirmation.reference()
    );
    if let Some(status) = &confirmation.status {
        println!("  status: {status}");
    }

    Ok(())
}
