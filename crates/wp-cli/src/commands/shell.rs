use std::io::{self, BufRead, Write};

use colored::Colorize;

use wp_session::PickSession;

pub fn run(options: &[String], seed: Option<u64>, uniform: bool) -> Result<(), String> {
    let registry = super::registry_from_args(options)?;
    let config = super::session_config(seed, uniform);
    let mut session = PickSession::with_registry(registry, config);

    println!("  {} Weighted Picker", "Starting".bold());
    println!(
        "  Options: {} | Mode: {}",
        session.registry().len(),
        session.mode()
    );
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if PickSession::is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
