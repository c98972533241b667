//! Handler for the `calendar` command.

use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::calendar::{format_day, MonthGrid};
use crate::config::Config;
use crate::domain::{Color, Promotion};
use crate::error::{ConfigError, Result};
use crate::projector;

use super::CalendarArgs;

/// Execute the calendar command.
pub async fn execute(args: &CalendarArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if let Some(ref week_start) = args.week_start {
        if week_start.parse::<chrono::Weekday>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "week_start",
                reason: format!("unrecognized weekday '{week_start}'"),
            }
            .into());
        }
        config.calendar.week_start = week_start.clone();
    }
    config.init_logging();

    let today = chrono::Local::now().date_naive();
    let anchor = match &args.month {
        Some(month) => parse_month(month)?,
        None => today,
    };

    let client = config.client()?;
    let promotions = if args.active_only {
        client.fetch_active_promotions().await?
    } else {
        client.fetch_promotions().await?
    };

    let grid = MonthGrid::with_week_start(anchor, today, config.week_start());
    render(&grid, &promotions, today, config.calendar.visible_per_day);

    Ok(())
}

fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").map_err(|_| {
        ConfigError::InvalidValue {
            field: "month",
            reason: format!("expected yyyy-MM, got '{month}'"),
        }
        .into()
    })
}

fn render(grid: &MonthGrid, promotions: &[Promotion], today: NaiveDate, visible_per_day: usize) {
    println!();
    println!("  {}", grid.month_label().bold());
    println!();

    let header: Vec<String> = grid
        .header()
        .iter()
        .map(|name| format!("{name:>7}"))
        .collect();
    println!("  {}", header.join(" ").dimmed());

    for week in grid.weeks() {
        let mut row = String::from("  ");
        for cell in week {
            let view = projector::visible_on(cell.date(), promotions, 1);
            let day = format_day(cell.date());
            let badge = match view.total() {
                0 => String::new(),
                n => format!("({n})"),
            };
            let text = format!("{day:>3} {badge:<3}");

            let painted = if !cell.in_month() {
                text.dimmed().to_string()
            } else if cell.is_today() {
                text.bold().underline().to_string()
            } else {
                match view.accent() {
                    Some(promotion) => paint(promotion.color, &text),
                    None => text,
                }
            };
            row.push_str(&painted);
            row.push(' ');
        }
        println!("{row}");
    }

    println!();
    let active_total = promotions.iter().filter(|p| p.is_active).count();
    println!(
        "  {} promotions loaded, {} active",
        promotions.len(),
        active_total
    );

    // Day detail for today when it is on the displayed grid, truncated the
    // way a day cell truncates its preview list.
    if grid.cells().iter().any(|c| c.is_today()) {
        let view = projector::visible_on(today, promotions, visible_per_day);
        if view.total() > 0 {
            println!();
            println!("  Today:");
            for promotion in view.visible() {
                println!(
                    "    {} {}",
                    paint(promotion.color, "●"),
                    promotion.title
                );
            }
            if view.hidden() > 0 {
                println!("    +{} more", view.hidden());
            }
        }
    }
    println!();
}

/// Terminal rendition of a promotion accent color; unknown tags use the
/// default accent.
fn paint(color: Color, text: &str) -> String {
    match color.effective() {
        Color::Green => text.green().to_string(),
        Color::Purple => text.purple().to_string(),
        Color::Orange => text.yellow().to_string(),
        Color::Red => text.red().to_string(),
        Color::Pink => text.bright_magenta().to_string(),
        Color::Blue | Color::Unknown => text.blue().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_month_accepts_year_dash_month() {
        let anchor = parse_month("2025-09").expect("parse");
        assert_eq!(anchor, NaiveDate::from_ymd_opt(2025, 9, 1).expect("date"));
    }

    #[test]
    fn parse_month_rejects_garbage() {
        assert!(parse_month("september").is_err());
        assert!(parse_month("2025-13").is_err());
    }
}
