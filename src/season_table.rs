use serde::{Deserialize, Serialize};

use crate::score::format_display_score;
use crate::season_data::{MatchRecord, Outcome, SeasonData};
use crate::standings::{Standing, calculate_standings};
use crate::streaks::{StreakMarker, streak_markers};

/// One matchweek cell of the season grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultCell {
    pub result: Option<Outcome>,
    /// Only set when both a result and a match record exist.
    pub detail: Option<MatchRecord>,
    pub display_score: Option<String>,
    pub streak: Option<StreakMarker>,
}

impl ResultCell {
    /// Score when known, else the result symbol, else "-".
    pub fn text(&self) -> String {
        match (&self.display_score, self.result) {
            (Some(score), _) => score.clone(),
            (None, Some(result)) => result.symbol().to_string(),
            (None, None) => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// 1-based league position.
    pub position: usize,
    pub standing: Standing,
    pub cells: Vec<ResultCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonTable {
    pub max_matchweeks: usize,
    pub rows: Vec<TableRow>,
}

pub fn build_season_table(season: &SeasonData) -> SeasonTable {
    let max_matchweeks = season.max_matchweeks();
    let rows = calculate_standings(season)
        .into_iter()
        .enumerate()
        .map(|(idx, standing)| {
            let cells = team_cells(season, &standing.team, max_matchweeks);
            TableRow {
                position: idx + 1,
                standing,
                cells,
            }
        })
        .collect();
    SeasonTable {
        max_matchweeks,
        rows,
    }
}

fn team_cells(season: &SeasonData, team: &str, width: usize) -> Vec<ResultCell> {
    let results = season.results_for(team);
    let markers = streak_markers(results);
    (0..width)
        .map(|i| {
            let result = results.get(i).copied();
            let detail = result.and(season.match_at(team, i)).cloned();
            let display_score = detail
                .as_ref()
                .map(|m| format_display_score(&m.score, m.venue));
            // Highlighting follows the score cells only.
            let streak = detail.as_ref().and(markers.get(&i).copied());
            ResultCell {
                result,
                detail,
                display_score,
                streak,
            }
        })
        .collect()
}
