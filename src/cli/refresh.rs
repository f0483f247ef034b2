//! `refresh` command: re-resolve every known indicator in Automatic mode,
//! warming the snapshot cache.

use super::ui;
use crate::core::Indicator;
use crate::resolver::{ResolveMode, Resolver};
use anyhow::Result;
use comfy_table::Cell;
use futures::future::join_all;

pub async fn run(resolver: &Resolver) -> Result<()> {
    let pb = ui::new_progress_bar(Indicator::ALL.len() as u64, true);
    pb.set_message("Refreshing series...");

    let refresh_futures = Indicator::ALL.iter().map(|indicator| {
        let pb_clone = pb.clone();
        async move {
            let result = resolver
                .resolve(indicator.spec(), ResolveMode::Automatic)
                .await;
            pb_clone.inc(1);
            (*indicator, result)
        }
    });

    let results = join_all(refresh_futures).await;
    pb.finish_and_clear();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Indicator"),
        ui::header_cell("Rows"),
        ui::header_cell("Status"),
    ]);

    let mut failures = 0;
    for (indicator, result) in results {
        match result {
            Ok(rows) => {
                table.add_row(vec![
                    Cell::new(indicator.spec().name),
                    Cell::new(rows.len().to_string()),
                    Cell::new("ok"),
                ]);
            }
            Err(e) => {
                failures += 1;
                table.add_row(vec![
                    Cell::new(indicator.spec().name),
                    Cell::new("-"),
                    Cell::new(ui::style_text(&e.to_string(), ui::StyleType::Error)),
                ]);
            }
        }
    }

    println!("{table}");
    if failures > 0 {
        println!(
            "\n{}",
            ui::style_text(
                &format!("{failures} indicator(s) could not be refreshed"),
                ui::StyleType::Error
            )
        );
    }
    Ok(())
}
