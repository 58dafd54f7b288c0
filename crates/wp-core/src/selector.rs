//! Weighted-random selection over a sequence of options.
//!
//! Selection uses cumulative-weight sampling: draw `r` uniformly from
//! `[0, total)` and walk the sequence, returning the first option whose
//! running total exceeds `r`. Option *i* is picked with probability
//! `weight_i / total`.
//!
//! Options with a non-positive weight stay in the input but are
//! ineligible: they add nothing to the total and are skipped by the walk.
//! None of these functions mutate their input.

use log::{debug, trace, warn};

use crate::error::{PickError, PickResult};
use crate::option::WeightedOption;
use crate::random::RandomSource;

/// Sum of all positive weights.
pub fn total_weight(options: &[WeightedOption]) -> u128 {
    options
        .iter()
        .filter(|o| o.is_eligible())
        .map(|o| u128::from(o.weight.unsigned_abs()))
        .sum()
}

/// The total weight, or the error explaining why nothing can be drawn.
fn eligible_total(options: &[WeightedOption]) -> PickResult<u128> {
    if options.is_empty() {
        return Err(PickError::EmptySelection);
    }
    match total_weight(options) {
        0 => Err(PickError::NoEligibleOption),
        total => Ok(total),
    }
}

/// Pick one option with probability proportional to its weight.
pub fn select<'a, R>(options: &'a [WeightedOption], source: &mut R) -> PickResult<&'a WeightedOption>
where
    R: RandomSource + ?Sized,
{
    let index = select_index(options, source)?;
    Ok(&options[index])
}

/// Like [`select`], but returns the position of the pick.
pub fn select_index<R>(options: &[WeightedOption], source: &mut R) -> PickResult<usize>
where
    R: RandomSource + ?Sized,
{
    let total = eligible_total(options)?;
    let draw = source.next_int(0, total);
    walk(options, total, draw)
}

fn walk(options: &[WeightedOption], total: u128, draw: u128) -> PickResult<usize> {
    let mut running: u128 = 0;
    for (index, option) in options.iter().enumerate() {
        if !option.is_eligible() {
            continue;
        }
        running += u128::from(option.weight.unsigned_abs());
        trace!("walk: '{}' brings running total to {running}", option.name);
        if running > draw {
            debug!("picked '{}' (draw {draw} of {total})", option.name);
            return Ok(index);
        }
    }

    warn!("cumulative walk ended without a pick: draw {draw}, total {total}");
    Err(PickError::InternalSelection(format!(
        "draw {draw} is not below total weight {total}"
    )))
}

/// Pick uniformly among eligible options, ignoring their weights.
pub fn select_uniform<'a, R>(
    options: &'a [WeightedOption],
    source: &mut R,
) -> PickResult<&'a WeightedOption>
where
    R: RandomSource + ?Sized,
{
    eligible_total(options)?;
    let eligible: Vec<&WeightedOption> = options.iter().filter(|o| o.is_eligible()).collect();
    let count = eligible.len() as u128;
    let draw = source.next_int(0, count);

    let picked = usize::try_from(draw)
        .ok()
        .and_then(|i| eligible.get(i).copied())
        .ok_or_else(|| {
            warn!("uniform draw {draw} outside {count} eligible options");
            PickError::InternalSelection(format!(
                "draw {draw} is not below option count {count}"
            ))
        })?;
    debug!("picked '{}' uniformly (draw {draw} of {count})", picked.name);
    Ok(picked)
}

/// Selection probability of each option, in input order.
///
/// Ineligible options get 0.0. If nothing is eligible every entry is 0.0.
pub fn odds(options: &[WeightedOption]) -> Vec<f64> {
    let total = total_weight(options);
    options
        .iter()
        .map(|o| {
            if total == 0 || !o.is_eligible() {
                0.0
            } else {
                o.weight as f64 / total as f64
            }
        })
        .collect()
}

/// Draw `draws` times and count how often each option won.
pub fn tally<R>(options: &[WeightedOption], draws: u64, source: &mut R) -> PickResult<Vec<u64>>
where
    R: RandomSource + ?Sized,
{
    eligible_total(options)?;
    let mut counts = vec![0u64; options.len()];
    for _ in 0..draws {
        counts[select_index(options, source)?] += 1;
    }
    debug!("tallied {draws} draws over {} options", options.len());
    Ok(counts)
}
