use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use wp_session::PickSession;

#[derive(Serialize)]
struct TallyRow<'a> {
    name: &'a str,
    weight: i64,
    wins: u64,
}

pub fn run(
    options: &[String],
    draws: Option<u64>,
    seed: Option<u64>,
    uniform: bool,
    json: bool,
) -> Result<(), String> {
    let registry = super::registry_from_args(options)?;
    let config = super::session_config(seed, uniform);
    let mut session = PickSession::with_registry(registry, config);

    let Some(draws) = draws else {
        let picked = session.pick().map_err(|e| e.to_string())?;
        if json {
            let out = serde_json::to_string_pretty(&picked).map_err(|e| e.to_string())?;
            println!("{out}");
        } else {
            println!("  {} {}", "Picked:".bold(), picked.name.green().bold());
        }
        return Ok(());
    };

    let counts = session.pick_many(draws).map_err(|e| e.to_string())?;
    let rows: Vec<TallyRow<'_>> = session
        .registry()
        .iter()
        .zip(counts)
        .map(|(o, wins)| TallyRow {
            name: &o.name,
            weight: o.weight,
            wins,
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Weight", "Wins", "Share"]);
    for row in &rows {
        let share = row.wins as f64 / draws as f64 * 100.0;
        table.add_row(vec![
            row.name.to_string(),
            row.weight.to_string(),
            row.wins.to_string(),
            format!("{share:.1}%"),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {draws} draws ({})", session.mode());

    Ok(())
}
