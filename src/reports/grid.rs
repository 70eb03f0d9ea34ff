use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use keycraft::geometry::{get_keys_by_row, KeyboardLayout};

pub fn print_layout(layout: &KeyboardLayout) {
    println!(
        "\nLayout: {} ({}, {} keys, {}x{}u)",
        layout.name,
        layout.category,
        layout.key_count(),
        layout.dimensions.width,
        layout.dimensions.height
    );
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let Some(max_row) = layout.max_row() else {
        println!("{}", table);
        return;
    };

    for row in 0..=max_row {
        let mut keys = get_keys_by_row(layout, row);
        keys.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));
        let cells: Vec<Cell> = keys
            .iter()
            .map(|k| Cell::new(&k.default_label).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}
