//! Cartesian expansion of multi-valued positions.

use crate::tables::Values;

/// Every concatenation taking one value from each position, in order.
///
/// The first position varies slowest. This is the only place value lists
/// multiply; growth is bounded by the node-visit budget alone.
pub fn cartesian_concat(positions: &[Values]) -> Values {
    let mut acc: Vec<String> = vec![String::new()];
    for position in positions {
        if position.is_empty() {
            continue;
        }
        let mut next = Vec::with_capacity(acc.len() * position.len());
        for prefix in &acc {
            for value in position.iter() {
                let mut joined = String::with_capacity(prefix.len() + value.len());
                joined.push_str(prefix);
                joined.push_str(value);
                next.push(joined);
            }
        }
        acc = next;
    }
    acc.into_iter().collect()
}
