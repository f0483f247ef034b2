//! `export` command: write a (range-clipped) series to a CSV file.

use super::ui;
use crate::core::{Indicator, Series};
use crate::resolver::{ResolveMode, Resolver};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;

pub async fn run(
    resolver: &Resolver,
    indicator: Indicator,
    mode: ResolveMode,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    output: &Path,
) -> Result<()> {
    let spinner = ui::new_spinner("Fetching series...");
    let series = resolver.series_for(indicator, mode).await;
    spinner.finish_and_clear();

    let series = series?.clip(from, to);
    anyhow::ensure!(
        !series.is_empty(),
        "No observations in the selected range; nothing to export"
    );

    write_csv(&series, output)
        .with_context(|| format!("Failed to write CSV to {}", output.display()))?;

    println!(
        "Exported {} observations of {} to {}",
        series.len(),
        indicator.spec().name,
        output.display()
    );
    Ok(())
}

fn write_csv(series: &Series, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["fecha", "valor"])?;
    for obs in series.observations() {
        writer.write_record([
            obs.date.format("%Y-%m-%d").to_string(),
            obs.value.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Observation;

    #[test]
    fn test_write_csv() {
        let series = Series::from_observations(vec![
            Observation {
                date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
                value: 100.5,
            },
            Observation {
                date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
                value: 101.0,
            },
        ]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("serie.csv");
        write_csv(&series, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "fecha,valor\n2023-01-01,100.5\n2023-02-01,101\n");
    }
}
