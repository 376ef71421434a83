use serde::{Deserialize, Serialize};

use crate::score::parse_goals;
use crate::season_data::{Outcome, SeasonData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: String,
    pub played: usize,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

/// Fold one team's season into totals. Goals only come from matchweeks that
/// have a recorded score; the result symbol counts either way.
pub fn team_standing(season: &SeasonData, team: &str) -> Standing {
    let results = season.results_for(team);
    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut losses = 0u32;
    let mut goals_for = 0u32;
    let mut goals_against = 0u32;

    for (i, result) in results.iter().enumerate() {
        match result {
            Outcome::Win => wins += 1,
            Outcome::Draw => draws += 1,
            Outcome::Loss => losses += 1,
        }
        if let Some(m) = season.match_at(team, i) {
            let (gf, ga) = parse_goals(&m.score);
            goals_for += gf;
            goals_against += ga;
        }
    }

    Standing {
        team: team.to_string(),
        played: results.len(),
        wins,
        draws,
        losses,
        goals_for,
        goals_against,
        goal_difference: i64::from(goals_for) - i64::from(goals_against),
        points: wins * 3 + draws,
    }
}

/// League table for a season: points, then goal difference, then goals for.
/// Teams level on all three keep their order from `season.teams`.
pub fn calculate_standings(season: &SeasonData) -> Vec<Standing> {
    let mut table: Vec<Standing> = season
        .teams
        .iter()
        .map(|team| team_standing(season, team))
        .collect();
    sort_standings(&mut table);
    table
}

pub fn sort_standings(table: &mut [Standing]) {
    // sort_by is stable, which the missing fourth tie-break relies on.
    table.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    });
}
