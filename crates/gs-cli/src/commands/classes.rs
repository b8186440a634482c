use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(classes: Option<&Path>) -> Result<(), String> {
    let registry = super::load_registry(classes)?;

    if registry.is_empty() {
        println!("  No classes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Stats", "Gear"]);

    for (id, class) in registry.list() {
        table.add_row(vec![
            id.to_string(),
            class.name().to_string(),
            class.stats().signed(),
            class.gear().len().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} classes", registry.len());

    Ok(())
}
