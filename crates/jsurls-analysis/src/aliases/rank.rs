//! Alias ranking.

use crate::tables::AliasCandidate;

const TEMPORARY_SUBSTRINGS: &[&str] = &["temp", "tmp", "val", "test", "dummy", "placeholder"];

const SINGLE_LETTERS: &[&str] = &["x", "y", "z", "i", "j", "k", "n", "a", "b", "c", "d", "e"];

const VERY_GENERIC: &[&str] = &["id", "key", "name", "title", "value", "data", "item", "type"];

/// Preference tier of a candidate name, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AliasTier {
    /// Compound name around a generic root: `contentId`, `spaceKey`.
    Specific,
    /// Any other non-generic, non-temporary name.
    Acceptable,
    /// Bare generic name: `id`, `key`, `value`.
    VeryGeneric,
    /// Temporary or single-letter name: `tmp`, `tempValue`, `x`.
    Temporary,
}

/// Tier rules in evaluation order; the first match decides.
static TIER_RULES: &[(fn(&str) -> bool, AliasTier)] = &[
    (is_temporary, AliasTier::Temporary),
    (is_very_generic, AliasTier::VeryGeneric),
    (is_specific, AliasTier::Specific),
];

impl AliasTier {
    pub fn of(name: &str) -> Self {
        let lower = name.to_lowercase();
        TIER_RULES
            .iter()
            .find(|(check, _)| check(&lower))
            .map(|(_, tier)| *tier)
            .unwrap_or(AliasTier::Acceptable)
    }
}

fn is_temporary(lower: &str) -> bool {
    SINGLE_LETTERS.iter().any(|l| *l == lower) || TEMPORARY_SUBSTRINGS.iter().any(|t| lower.contains(t))
}

fn is_very_generic(lower: &str) -> bool {
    VERY_GENERIC.iter().any(|g| *g == lower)
}

fn is_specific(lower: &str) -> bool {
    lower.chars().count() > 4 && VERY_GENERIC.iter().any(|g| lower.contains(g))
}

/// The preferred display name for `var` among `candidates`, or `var` itself.
///
/// Best tier wins; within a tier, higher confidence, then shorter name,
/// then the earliest recorded.
pub fn best_alias<'a>(var: &'a str, candidates: &'a [AliasCandidate]) -> &'a str {
    let mut best: Option<(&AliasCandidate, AliasTier)> = None;
    for candidate in candidates {
        let tier = AliasTier::of(&candidate.name);
        let better = match best {
            None => true,
            Some((current, current_tier)) => {
                (tier, std::cmp::Reverse(candidate.confidence), candidate.name.len())
                    < (current_tier, std::cmp::Reverse(current.confidence), current.name.len())
            }
        };
        if better {
            best = Some((candidate, tier));
        }
    }
    best.map(|(candidate, _)| candidate.name.as_str()).unwrap_or(var)
}
