//! Handler for the `promotions` command.

use tabled::{Table, Tabled};

use crate::calendar::parse_iso_date;
use crate::config::Config;
use crate::domain::Promotion;
use crate::error::{ConfigError, Result};
use crate::projector;

use super::PromotionsArgs;

#[derive(Tabled)]
struct PromotionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Dates")]
    dates: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Price")]
    price: String,
}

impl PromotionRow {
    fn from_promotion(promotion: &Promotion) -> Self {
        let dates = match promotion.span() {
            Some(span) => span.to_string(),
            // Malformed bounds shown raw so the admin can spot the bad record
            None => format!("{} - {}", promotion.start_date, promotion.end_date),
        };
        Self {
            id: promotion.id.to_string(),
            title: promotion.title.clone(),
            dates,
            color: promotion.color.to_string(),
            active: if promotion.is_active { "yes" } else { "no" }.to_string(),
            price: promotion.price.clone(),
        }
    }
}

/// Execute the promotions command.
pub async fn execute(args: &PromotionsArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    config.init_logging();

    let client = config.client()?;
    let promotions = client.fetch_promotions().await?;

    let rows: Vec<PromotionRow> = match &args.on {
        Some(day) => {
            let day = parse_iso_date(day).ok_or(ConfigError::InvalidValue {
                field: "on",
                reason: format!("expected yyyy-MM-dd, got '{day}'"),
            })?;
            projector::active_on(day, &promotions)
                .into_iter()
                .map(PromotionRow::from_promotion)
                .collect()
        }
        None => promotions.iter().map(PromotionRow::from_promotion).collect(),
    };

    if rows.is_empty() {
        println!("No promotions to show.");
        return Ok(());
    }

    let count = rows.len();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();
    println!("  {count} promotion(s)");

    Ok(())
}
