pub mod odds;
pub mod pick;
pub mod shell;

use log::debug;
use wp_core::OptionRegistry;
use wp_session::{SelectionMode, SessionConfig};

/// Build a registry from `NAME=WEIGHT` arguments, in the order given.
fn registry_from_args(args: &[String]) -> Result<OptionRegistry, String> {
    let mut registry = OptionRegistry::new();
    for arg in args {
        let (name, weight) = arg
            .rsplit_once('=')
            .ok_or_else(|| format!("expected NAME=WEIGHT, got '{arg}'"))?;
        registry
            .add_parsed(name, weight)
            .map_err(|e| format!("option '{arg}': {e}"))?;
    }
    debug!("built registry with {} options from arguments", registry.len());
    Ok(registry)
}

fn session_config(seed: Option<u64>, uniform: bool) -> SessionConfig {
    let mode = if uniform {
        SelectionMode::Uniform
    } else {
        SelectionMode::Weighted
    };
    let config = SessionConfig::default().with_mode(mode);
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}
