//! Competition ranking over point totals.

use serde::{Deserialize, Serialize};

/// One ranked entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing<K> {
    pub key: K,
    pub points: i64,
    /// 1-based; tied entries share a rank and the next distinct total
    /// resumes at its position (1, 2, 2, 4).
    pub rank: usize,
}

/// Rank entries by points, highest first.
///
/// The sort is stable, so tied entries keep their input order.
pub fn standings_from_points<K: Clone>(points: &[(K, i64)]) -> Vec<Standing<K>> {
    let mut sorted: Vec<&(K, i64)> = points.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));

    let mut standings: Vec<Standing<K>> = Vec::with_capacity(sorted.len());
    for (key, pts) in sorted {
        let rank = match standings.last() {
            Some(prev) if prev.points == *pts => prev.rank,
            _ => standings.len() + 1,
        };
        standings.push(Standing {
            key: key.clone(),
            points: *pts,
            rank,
        });
    }
    standings
}

/// Rank of `key`, if present.
pub fn rank_of<K: PartialEq>(standings: &[Standing<K>], key: &K) -> Option<usize> {
    standings.iter().find(|s| &s.key == key).map(|s| s.rank)
}
