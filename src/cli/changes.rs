//! `changes` command: month-over-month percentage variation of a series.

use super::ui;
use crate::core::Indicator;
use crate::resolver::{ResolveMode, Resolver};
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;

pub async fn run(
    resolver: &Resolver,
    indicator: Indicator,
    mode: ResolveMode,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let spinner = ui::new_spinner("Fetching series...");
    let series = resolver.series_for(indicator, mode).await;
    spinner.finish_and_clear();

    let series = series?.clip(from, to);
    let changes = series.monthly_changes();

    let spec = indicator.spec();
    println!(
        "{}",
        ui::style_text(
            &format!("{}: monthly variation", spec.name),
            ui::StyleType::Title
        )
    );
    println!();

    if changes.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "Not enough observations to compute variations.",
                ui::StyleType::Error
            )
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Month"), ui::header_cell("Δ%")]);
    for (date, change) in &changes {
        table.add_row(vec![
            Cell::new(date.format("%Y-%m").to_string()),
            ui::change_cell(*change),
        ]);
    }
    println!("{table}");

    if let Some((date, change)) = changes
        .iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    {
        println!(
            "\nLargest monthly increase: {:+.2}% in {}",
            change,
            date.format("%Y-%m")
        );
    }
    Ok(())
}
