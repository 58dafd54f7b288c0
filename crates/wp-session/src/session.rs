//! Picking session management.
//!
//! `PickSession` wraps an [`OptionRegistry`] with a seeded RNG and a
//! small command language so front ends only have to shuttle lines of
//! text back and forth.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wp_core::{OptionRegistry, PickError, WeightedOption, selector};

use crate::config::{SelectionMode, SessionConfig};
use crate::error::{SessionError, SessionResult};

const HELP: &str = "\
Commands:
  add <name> <weight>    Add an option (weight is a positive whole number)
  remove <i> [j ...]     Remove options by index (alias: rm)
  list                   Show all options (alias: ls)
  odds                   Show each option's chance of being picked
  pick [n]               Pick one option, or tally n picks
  last                   Show the most recent pick
  mode weighted|uniform  Switch how picks are made
  clear                  Remove every option
  help                   Show this help
  quit                   Leave the session (alias: q)";

/// An interactive picking session.
pub struct PickSession {
    registry: OptionRegistry,
    mode: SelectionMode,
    last_pick: Option<WeightedOption>,
    rng: StdRng,
}

impl PickSession {
    /// Create a session with an empty registry.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_registry(OptionRegistry::new(), config)
    }

    /// Create a session around an existing registry.
    pub fn with_registry(registry: OptionRegistry, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            registry,
            mode: config.mode,
            last_pick: None,
            rng,
        }
    }

    /// Get the option registry.
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Get the most recent pick, if any.
    pub fn last_pick(&self) -> Option<&WeightedOption> {
        self.last_pick.as_ref()
    }

    /// Get the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns true if `input` is a command that ends the session.
    pub fn is_quit(input: &str) -> bool {
        let (cmd, _) = split_command(input.trim());
        matches!(cmd.as_str(), "quit" | "q")
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let (cmd, rest) = split_command(trimmed);
        debug!("session command '{cmd}' args '{rest}'");

        match cmd.as_str() {
            "add" => self.do_add(rest),
            "remove" | "rm" => self.do_remove(rest),
            "list" | "ls" => Ok(self.do_list()),
            "odds" => Ok(self.do_odds()),
            "pick" => self.do_pick(rest),
            "last" => Ok(self.do_last()),
            "mode" => self.do_mode(rest),
            "clear" => Ok(self.do_clear()),
            "help" | "?" => Ok(HELP.to_string()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_add(&mut self, rest: &str) -> SessionResult<String> {
        // The weight is the last word so names may contain spaces.
        let (name, weight) = match rest.rsplit_once(char::is_whitespace) {
            Some(pair) => pair,
            // A lone number is a weight with an empty name.
            None if rest.parse::<i64>().is_ok() => ("", rest),
            None => return Err(SessionError::Usage("add <name> <weight>".into())),
        };

        let option = self.registry.add_parsed(name, weight)?;
        let index = self.registry.len() - 1;
        Ok(format!("Added #{index}: {option}"))
    }

    fn do_remove(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage("remove <index> [index ...]".into()));
        }
        let indices = rest
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<usize>()
                    .map_err(|_| SessionError::Usage(format!("'{s}' is not an index")))
            })
            .collect::<SessionResult<Vec<usize>>>()?;

        let removed = self.registry.remove_many(indices)?;
        let names: Vec<String> = removed.iter().map(|o| format!("'{}'", o.name)).collect();
        Ok(format!("Removed {}.", names.join(", ")))
    }

    fn do_list(&self) -> String {
        if self.registry.is_empty() {
            return "No options yet. Add one with: add <name> <weight>".to_string();
        }
        let lines: Vec<String> = self
            .registry
            .iter()
            .enumerate()
            .map(|(i, o)| format!("  {i}. {}  weight {}  [{}]", o.name, o.weight, o.id))
            .collect();
        lines.join("\n")
    }

    fn do_odds(&self) -> String {
        if self.registry.is_empty() {
            return "No options yet.".to_string();
        }
        let probabilities = selector::odds(self.registry.as_slice());
        let lines: Vec<String> = self
            .registry
            .iter()
            .zip(probabilities)
            .map(|(o, p)| format!("  {}  {:.1}%", o.name, p * 100.0))
            .collect();
        lines.join("\n")
    }

    /// Pick one option using the current mode.
    pub fn pick(&mut self) -> SessionResult<WeightedOption> {
        // Selection works on a snapshot, never on the live list.
        let options = self.registry.snapshot();
        let index = self.draw_index(&options)?;
        let picked = options[index].clone();
        self.last_pick = Some(picked.clone());
        Ok(picked)
    }

    /// Pick `draws` times and count the wins of each option, in list order.
    pub fn pick_many(&mut self, draws: u64) -> SessionResult<Vec<u64>> {
        if draws == 0 {
            return Err(SessionError::Usage("pick [count > 0]".into()));
        }
        let options = self.registry.snapshot();
        // The final draw is taken on its own so it can be kept as the last pick.
        let mut counts = match self.mode {
            SelectionMode::Weighted => selector::tally(&options, draws - 1, &mut self.rng)?,
            SelectionMode::Uniform => {
                let mut counts = vec![0u64; options.len()];
                for _ in 1..draws {
                    counts[self.draw_index(&options)?] += 1;
                }
                counts
            }
        };
        let last = self.draw_index(&options)?;
        counts[last] += 1;
        self.last_pick = Some(options[last].clone());
        Ok(counts)
    }

    fn do_pick(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            let picked = self.pick()?;
            return Ok(format!("Picked: {}", picked.name));
        }

        let draws: u64 = rest
            .parse()
            .map_err(|_| SessionError::Usage("pick [count > 0]".into()))?;
        let counts = self.pick_many(draws)?;
        let lines: Vec<String> = self
            .registry
            .iter()
            .zip(&counts)
            .map(|(o, c)| format!("  {}  {c}/{draws}", o.name))
            .collect();
        let last = self.do_last();
        Ok(format!("{}\n{last}", lines.join("\n")))
    }

    fn draw_index(&mut self, options: &[WeightedOption]) -> SessionResult<usize> {
        match self.mode {
            SelectionMode::Weighted => {
                selector::select_index(options, &mut self.rng).map_err(SessionError::from)
            }
            SelectionMode::Uniform => {
                let picked = selector::select_uniform(options, &mut self.rng)?;
                options
                    .iter()
                    .position(|o| o.id == picked.id)
                    .ok_or_else(|| {
                        PickError::InternalSelection("uniform pick not in input".into()).into()
                    })
            }
        }
    }

    fn do_last(&self) -> String {
        match &self.last_pick {
            Some(option) => format!("Last pick: {}", option.name),
            None => "Nothing picked yet.".to_string(),
        }
    }

    fn do_mode(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Ok(format!("Mode: {}", self.mode));
        }
        self.mode = SelectionMode::parse(rest)
            .ok_or_else(|| SessionError::Usage("mode weighted|uniform".into()))?;
        Ok(format!("Mode: {}", self.mode))
    }

    fn do_clear(&mut self) -> String {
        let removed = self.registry.clear();
        format!("Cleared {} options.", removed.len())
    }
}

/// Split a trimmed line into its lowercased verb and the remaining arguments.
fn split_command(trimmed: &str) -> (String, &str) {
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_lowercase();
    let rest = parts.next().map(|s| s.trim()).unwrap_or("");
    (cmd, rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PickSession {
        PickSession::new(SessionConfig::default().with_seed(42))
    }

    fn stocked() -> PickSession {
        let mut s = session();
        s.process("add Tacos 3").unwrap();
        s.process("add Thai curry 1").unwrap();
        s.process("add Pizza 2").unwrap();
        s
    }

    #[test]
    fn empty_input_is_silent() {
        assert_eq!(session().process("   ").unwrap(), "");
    }

    #[test]
    fn add_with_multi_word_name() {
        let mut s = session();
        let out = s.process("add Thai curry 4").unwrap();
        assert!(out.contains("Thai curry"));
        assert_eq!(s.registry().get(0).unwrap().name, "Thai curry");
        assert_eq!(s.registry().get(0).unwrap().weight, 4);
    }

    #[test]
    fn add_without_weight_is_usage_error() {
        let mut s = session();
        assert!(matches!(s.process("add Tacos"), Err(SessionError::Usage(_))));
        assert!(s.registry().is_empty());
    }

    #[test]
    fn add_weight_only_is_validation_error() {
        let mut s = session();
        assert!(matches!(
            s.process("add 5"),
            Err(SessionError::Pick(PickError::Validation(_)))
        ));
        assert!(s.registry().is_empty());
    }

    #[test]
    fn add_bad_weight_is_validation_error() {
        let mut s = session();
        assert!(matches!(
            s.process("add Tacos zero"),
            Err(SessionError::Pick(PickError::Validation(_)))
        ));
        assert!(matches!(
            s.process("add Tacos 0"),
            Err(SessionError::Pick(PickError::Validation(_)))
        ));
        assert!(s.registry().is_empty());
    }

    #[test]
    fn remove_several() {
        let mut s = stocked();
        let out = s.process("rm 0, 2").unwrap();
        assert_eq!(out, "Removed 'Tacos', 'Pizza'.");
        assert_eq!(s.registry().len(), 1);
    }

    #[test]
    fn remove_out_of_range_keeps_list() {
        let mut s = stocked();
        assert!(matches!(
            s.process("remove 1 9"),
            Err(SessionError::Pick(PickError::IndexOutOfRange { index: 9, len: 3 }))
        ));
        assert_eq!(s.registry().len(), 3);
    }

    #[test]
    fn remove_requires_numbers() {
        let mut s = stocked();
        assert!(matches!(s.process("remove"), Err(SessionError::Usage(_))));
        assert!(matches!(s.process("remove x"), Err(SessionError::Usage(_))));
    }

    #[test]
    fn list_shows_indices() {
        let out = stocked().process("list").unwrap();
        assert!(out.contains("0. Tacos"));
        assert!(out.contains("2. Pizza"));
        assert!(session().process("ls").unwrap().contains("No options"));
    }

    #[test]
    fn odds_show_percentages() {
        let out = stocked().process("odds").unwrap();
        assert!(out.contains("Tacos  50.0%"));
        assert!(out.contains("Thai curry  16.7%"));
    }

    #[test]
    fn pick_on_empty_registry_fails() {
        let mut s = session();
        assert!(matches!(
            s.process("pick"),
            Err(SessionError::Pick(PickError::EmptySelection))
        ));
        assert!(s.last_pick().is_none());
    }

    #[test]
    fn pick_records_last_pick() {
        let mut s = stocked();
        let out = s.process("pick").unwrap();
        let last = s.last_pick().unwrap().name.clone();
        assert_eq!(out, format!("Picked: {last}"));
        assert!(s.process("last").unwrap().contains(&last));
    }

    #[test]
    fn pick_is_reproducible_with_seed() {
        let mut a = stocked();
        let mut b = stocked();
        for _ in 0..10 {
            assert_eq!(a.process("pick").unwrap(), b.process("pick").unwrap());
        }
    }

    #[test]
    fn pick_many_tallies() {
        let mut s = stocked();
        let out = s.process("pick 60").unwrap();
        assert!(out.contains("/60"));
        assert!(out.contains("Last pick:"));
        assert!(matches!(s.process("pick 0"), Err(SessionError::Usage(_))));
    }

    #[test]
    fn pick_many_counts_every_draw() {
        let mut s = stocked();
        let counts = s.pick_many(500).unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.iter().sum::<u64>(), 500);
        assert!(counts[0] > counts[1]);
        assert!(s.last_pick().is_some());
    }

    #[test]
    fn uniform_mode_switch() {
        let mut s = stocked();
        assert_eq!(s.process("mode uniform").unwrap(), "Mode: uniform");
        assert_eq!(s.mode(), SelectionMode::Uniform);
        assert!(s.process("pick 30").is_ok());
        assert!(matches!(s.process("mode chaotic"), Err(SessionError::Usage(_))));
    }

    #[test]
    fn clear_empties_registry() {
        let mut s = stocked();
        assert_eq!(s.process("clear").unwrap(), "Cleared 3 options.");
        assert!(s.registry().is_empty());
    }

    #[test]
    fn unknown_command() {
        assert!(matches!(
            session().process("spin"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn with_registry_keeps_initial_options() {
        let reg = OptionRegistry::with_options([("A", 1), ("B", 1)]).unwrap();
        let s = PickSession::with_registry(reg, SessionConfig::default());
        assert_eq!(s.registry().len(), 2);
    }

    #[test]
    fn quit_is_detected_by_verb() {
        assert!(PickSession::is_quit("quit"));
        assert!(PickSession::is_quit("  Q  "));
        assert!(PickSession::is_quit("quit now"));
        assert!(PickSession::is_quit("q later"));
        assert!(!PickSession::is_quit("quiet"));
        assert!(!PickSession::is_quit("add quit 1"));
        assert!(!PickSession::is_quit(""));
    }

    #[test]
    fn pick_many_uniform_counts_every_draw() {
        let mut s = stocked();
        s.process("mode uniform").unwrap();
        let counts = s.pick_many(90).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 90);
        assert!(s.last_pick().is_some());
    }

    #[test]
    fn pick_many_single_draw_sets_last_pick() {
        let mut s = stocked();
        let counts = s.pick_many(1).unwrap();
        assert_eq!(counts.iter().sum::<u64>(), 1);
        let winner = counts.iter().position(|c| *c == 1).unwrap();
        assert_eq!(s.last_pick(), s.registry().get(winner));
    }

    #[test]
    fn pick_many_on_empty_registry_fails() {
        let mut s = session();
        assert!(matches!(
            s.pick_many(5),
            Err(SessionError::Pick(PickError::EmptySelection))
        ));
    }

    #[test]
    fn help_and_quit() {
        let mut s = session();
        assert!(s.process("help").unwrap().contains("add <name> <weight>"));
        assert_eq!(s.process("QUIT").unwrap(), "Goodbye!");
    }
}
