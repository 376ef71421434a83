use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::score::format_display_score;
use crate::season_data::{SeasonData, Venue};
use crate::seasons::SeasonCatalog;
use crate::streaks::find_streak_ranges;

/// One win inside a streak, with whatever match detail was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakMatch {
    /// 1-based.
    pub matchweek: usize,
    pub opponent: String,
    pub venue: Venue,
    pub score: String,
    pub display_score: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub season: String,
    /// 1-based, inclusive.
    pub start_week: usize,
    /// 1-based, inclusive.
    pub end_week: usize,
    pub length: usize,
    /// Matchweeks without a match record are left out, so this can be
    /// shorter than `length`.
    pub matches: Vec<StreakMatch>,
}

/// Every team's streaks across all loaded seasons, most recent season first
/// and longest first within a season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStreakIndex {
    teams: BTreeMap<String, Vec<Streak>>,
}

impl TeamStreakIndex {
    /// Teams never seen in any season get an empty slice.
    pub fn streaks_for(&self, team: &str) -> &[Streak] {
        self.teams.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_team(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }

    pub fn teams(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.keys().map(|t| t.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Streak])> + '_ {
        self.teams.iter().map(|(t, s)| (t.as_str(), s.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn total_streaks(&self) -> usize {
        self.teams.values().map(Vec::len).sum()
    }
}

/// Streaks for every listed team of one season, in `season.teams` order.
pub fn season_streaks(season_name: &str, season: &SeasonData) -> Vec<(String, Vec<Streak>)> {
    season
        .teams
        .iter()
        .map(|team| {
            let streaks = find_streak_ranges(season.results_for(team))
                .into_iter()
                .map(|range| {
                    let matches = (range.start..=range.end)
                        .filter_map(|i| {
                            let m = season.match_at(team, i)?;
                            Some(StreakMatch {
                                matchweek: i + 1,
                                opponent: m.opponent.clone(),
                                venue: m.venue,
                                score: m.score.clone(),
                                display_score: format_display_score(&m.score, m.venue),
                            })
                        })
                        .collect();
                    Streak {
                        season: season_name.to_string(),
                        start_week: range.start + 1,
                        end_week: range.end + 1,
                        length: range.length,
                        matches,
                    }
                })
                .collect();
            (team.clone(), streaks)
        })
        .collect()
}

/// Build the cross-season index. Catalog seasons missing from `seasons` are
/// skipped; seasons outside the catalog are ignored.
pub fn build_team_streak_index(
    catalog: &SeasonCatalog,
    seasons: &HashMap<String, SeasonData>,
) -> TeamStreakIndex {
    let present: Vec<(&str, &SeasonData)> = catalog
        .iter()
        .filter_map(|name| seasons.get(name).map(|data| (name, data)))
        .collect();
    for name in seasons.keys().filter(|name| !catalog.contains(name)) {
        debug!(season = %name, "season outside catalog ignored");
    }

    // Collect keeps catalog order, so the merge below matches a sequential scan.
    let per_season: Vec<Vec<(String, Vec<Streak>)>> = present
        .par_iter()
        .map(|(name, data)| season_streaks(name, data))
        .collect();

    let mut teams: BTreeMap<String, Vec<Streak>> = BTreeMap::new();
    for season in per_season {
        for (team, streaks) in season {
            teams.entry(team).or_default().extend(streaks);
        }
    }

    for streaks in teams.values_mut() {
        sort_team_streaks(catalog, streaks);
    }

    TeamStreakIndex { teams }
}

/// Most recent season first, then longest first. Stable on remaining ties.
pub fn sort_team_streaks(catalog: &SeasonCatalog, streaks: &mut [Streak]) {
    streaks.sort_by_key(|s| {
        (
            catalog.position(&s.season).unwrap_or(usize::MAX),
            Reverse(s.length),
        )
    });
}

/// Streak count per catalog season, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonFrequency {
    counts: Vec<(String, usize)>,
}

impl SeasonFrequency {
    pub fn get(&self, season: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|(s, _)| s == season)
            .map(|(_, n)| *n)
    }

    /// Catalog order, most recent first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(s, n)| (s.as_str(), *n))
    }

    /// Oldest season first, the order chart axes use.
    pub fn chronological(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.iter().rev()
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().map(|(_, n)| *n).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

pub fn season_frequency(catalog: &SeasonCatalog, streaks: &[Streak]) -> SeasonFrequency {
    let mut counts: Vec<(String, usize)> = catalog.iter().map(|s| (s.to_string(), 0)).collect();
    for streak in streaks {
        if let Some(pos) = catalog.position(&streak.season) {
            counts[pos].1 += 1;
        }
    }
    SeasonFrequency { counts }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStreakSummary {
    pub team: String,
    pub streaks: usize,
    pub seasons: usize,
    pub wins_in_streaks: usize,
}

pub fn team_summary(index: &TeamStreakIndex, team: &str) -> TeamStreakSummary {
    let streaks = index.streaks_for(team);
    let seasons: BTreeSet<&str> = streaks.iter().map(|s| s.season.as_str()).collect();
    TeamStreakSummary {
        team: team.to_string(),
        streaks: streaks.len(),
        seasons: seasons.len(),
        wins_in_streaks: streaks.iter().map(|s| s.length).sum(),
    }
}

/// Team names by streak count (most first), then alphabetically.
pub fn teams_by_streak_count(index: &TeamStreakIndex) -> Vec<String> {
    let mut teams: Vec<(&str, usize)> = index.iter().map(|(t, s)| (t, s.len())).collect();
    teams.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    teams.into_iter().map(|(t, _)| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::season_data::{MatchRecord, parse_outcomes};

    fn season(results: &[(&str, &str)]) -> SeasonData {
        let mut data = SeasonData::default();
        for (team, raw) in results {
            data.teams.push(team.to_string());
            data.results
                .insert(team.to_string(), parse_outcomes(raw).expect("valid outcomes"));
        }
        data
    }

    fn streak(season: &str, length: usize) -> Streak {
        Streak {
            season: season.to_string(),
            start_week: 1,
            end_week: length,
            length,
            matches: Vec::new(),
        }
    }

    #[test]
    fn enrichment_skips_missing_records() {
        let mut data = season(&[("A", "WWWWW")]);
        data.matches.insert(
            "A".to_string(),
            vec![
                Some(MatchRecord {
                    opponent: "B".to_string(),
                    venue: Venue::Away,
                    score: "2-0".to_string(),
                }),
                None,
                Some(MatchRecord {
                    opponent: "C".to_string(),
                    venue: Venue::Home,
                    score: "1-0".to_string(),
                }),
            ],
        );
        let rows = season_streaks("2024-25", &data);
        let streaks = &rows[0].1;
        assert_eq!(streaks.len(), 1);
        assert_eq!(streaks[0].length, 5);
        assert_eq!((streaks[0].start_week, streaks[0].end_week), (1, 5));
        let weeks: Vec<usize> = streaks[0].matches.iter().map(|m| m.matchweek).collect();
        assert_eq!(weeks, vec![1, 3]);
        assert_eq!(streaks[0].matches[0].display_score, "0-2");
        assert_eq!(streaks[0].matches[1].display_score, "1-0");
    }

    #[test]
    fn sort_prefers_recent_then_longer() {
        let catalog = SeasonCatalog::default();
        let mut streaks = vec![
            streak("2019-20", 5),
            streak("2024-25", 5),
            streak("2019-20", 9),
            streak("2024-25", 7),
        ];
        sort_team_streaks(&catalog, &mut streaks);
        let keys: Vec<(&str, usize)> = streaks.iter().map(|s| (s.season.as_str(), s.length)).collect();
        assert_eq!(
            keys,
            vec![("2024-25", 7), ("2024-25", 5), ("2019-20", 9), ("2019-20", 5)]
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let catalog = SeasonCatalog::default();
        let mut first = streak("2020-21", 6);
        first.start_week = 3;
        let mut second = streak("2020-21", 6);
        second.start_week = 20;
        let mut streaks = vec![first, second];
        sort_team_streaks(&catalog, &mut streaks);
        assert_eq!(streaks[0].start_week, 3);
        assert_eq!(streaks[1].start_week, 20);
    }

    #[test]
    fn frequency_is_zero_filled() {
        let catalog = SeasonCatalog::default();
        let freq = season_frequency(&catalog, &[streak("2022-23", 5), streak("2022-23", 6)]);
        assert_eq!(freq.len(), catalog.len());
        assert_eq!(freq.get("2022-23"), Some(2));
        assert_eq!(freq.get("2005-06"), Some(0));
        assert_eq!(freq.max_count(), 2);
        assert_eq!(freq.chronological().next(), Some(("2005-06", 0)));
    }

    #[test]
    fn teams_without_streaks_are_listed() {
        let catalog = SeasonCatalog::default();
        let seasons = HashMap::from([(
            "2023-24".to_string(),
            season(&[("A", "WWWWWW"), ("B", "LLLL"), ("C", "WWWWWLWWWWW")]),
        )]);
        let index = build_team_streak_index(&catalog, &seasons);
        assert_eq!(index.len(), 3);
        assert!(index.streaks_for("B").is_empty());
        assert!(index.contains_team("B"));
        assert_eq!(teams_by_streak_count(&index), vec!["C", "A", "B"]);

        let summary = team_summary(&index, "C");
        assert_eq!(summary.streaks, 2);
        assert_eq!(summary.seasons, 1);
        assert_eq!(summary.wins_in_streaks, 10);
    }
}
