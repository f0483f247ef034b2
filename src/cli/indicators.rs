//! `indicators` command: list the supported indicator table.

use super::ui;
use crate::core::Indicator;
use comfy_table::Cell;

pub fn run() {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Indicator"),
        ui::header_cell("Series id"),
        ui::header_cell("Frequency"),
        ui::header_cell("Definition"),
    ]);

    for indicator in Indicator::ALL {
        let spec = indicator.spec();
        table.add_row(vec![
            Cell::new(spec.name),
            Cell::new(spec.source_id),
            Cell::new(format!("{:?}", spec.frequency)),
            Cell::new(spec.definition),
        ]);
    }

    println!("{table}");
}
