use comfy_table::{ContentArrangement, Table};

use wp_core::selector;

pub fn run(options: &[String]) -> Result<(), String> {
    let registry = super::registry_from_args(options)?;

    if registry.is_empty() {
        println!("  No options given. Use -o NAME=WEIGHT.");
        return Ok(());
    }

    let probabilities = selector::odds(registry.as_slice());

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Name", "Weight", "Chance"]);

    for (i, (option, p)) in registry.iter().zip(probabilities).enumerate() {
        table.add_row(vec![
            i.to_string(),
            option.name.clone(),
            option.weight.to_string(),
            format!("{:.1}%", p * 100.0),
        ]);
    }

    println!("{table}");
    println!();
    println!("  total weight {}", registry.total_weight());

    Ok(())
}
