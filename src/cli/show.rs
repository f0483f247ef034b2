//! `show` command: render an indicator series as a table.

use super::ui;
use crate::core::{Indicator, Series};
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
    println!("{}", render(indicator, &series));
    Ok(())
}

fn render(indicator: Indicator, series: &Series) -> String {
    let spec = indicator.spec();
    let mut output = format!(
        "{}\n{}\n\n",
        ui::style_text(spec.name, ui::StyleType::Title),
        ui::style_text(spec.definition, ui::StyleType::Subtle),
    );

    if series.is_empty() {
        output.push_str(&ui::style_text(
            "No observations in the selected range.",
            ui::StyleType::Error,
        ));
        return output;
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Month"), ui::header_cell("Value")]);
    for obs in series.observations() {
        table.add_row(vec![
            Cell::new(obs.date.format("%Y-%m").to_string()),
            ui::value_cell(obs.value),
        ]);
    }
    output.push_str(&table.to_string());

    let min = series
        .observations()
        .iter()
        .map(|o| o.value)
        .fold(f64::INFINITY, f64::min);
    let max = series
        .observations()
        .iter()
        .map(|o| o.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let first = series.first().expect("non-empty series");
    let last = series.last().expect("non-empty series");

    output.push_str(&format!(
        "\n\n{} observations, {} to {} (min {:.2}, max {:.2})",
        series.len(),
        first.date.format("%Y-%m"),
        last.date.format("%Y-%m"),
        min,
        max,
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;

    #[test]
    fn test_render_contains_values_and_summary() {
        let series = Series::from_observations(vec![
            Observation {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                value: 100.0,
            },
            Observation {
                date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                value: 110.5,
            },
        ]);
        let rendered = render(Indicator::Activity, &series);
        assert!(rendered.contains("2023-01"));
        assert!(rendered.contains("110.50"));
        assert!(rendered.contains("2 observations"));
    }

    #[test]
    fn test_render_empty_range() {
        let series = Series::from_observations(vec![]);
        let rendered = render(Indicator::Inflation, &series);
        assert!(rendered.contains("No observations"));
    }
}
