use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::season_data::Outcome;

/// Shortest run of wins that counts as a streak.
pub const MIN_STREAK_LEN: usize = 5;

/// A maximal run of wins, 0-based and inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakRange {
    pub start: usize,
    pub end: usize,
    pub length: usize,
}

/// Per-cell marker for a matchweek that sits inside a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakMarker {
    pub is_start: bool,
    pub is_end: bool,
}

pub fn find_streak_ranges(results: &[Outcome]) -> Vec<StreakRange> {
    let mut out = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut run_len = 0usize;

    // One step past the end flushes a run that reaches the last matchweek.
    for i in 0..=results.len() {
        if results.get(i) == Some(&Outcome::Win) {
            if run_start.is_none() {
                run_start = Some(i);
            }
            run_len += 1;
            continue;
        }
        if let Some(start) = run_start
            && run_len >= MIN_STREAK_LEN
        {
            out.push(StreakRange {
                start,
                end: start + run_len - 1,
                length: run_len,
            });
        }
        run_start = None;
        run_len = 0;
    }
    out
}

pub fn count_streaks(results: &[Outcome]) -> usize {
    find_streak_ranges(results).len()
}

/// Matchweek index -> marker, for every index inside a streak.
pub fn streak_markers(results: &[Outcome]) -> BTreeMap<usize, StreakMarker> {
    let mut out = BTreeMap::new();
    for range in find_streak_ranges(results) {
        for i in range.start..=range.end {
            out.insert(
                i,
                StreakMarker {
                    is_start: i == range.start,
                    is_end: i == range.end,
                },
            );
        }
    }
    out
}
