use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::season_data::{MatchRecord, Outcome, SeasonData, Venue};
use crate::seasons::SeasonCatalog;

pub const DEMO_TEAMS: &[&str] = &[
    "Arsenal",
    "Aston Villa",
    "AFC Bournemouth",
    "Brentford",
    "Brighton & Hove Albion",
    "Chelsea",
    "Crystal Palace",
    "Everton",
    "Fulham",
    "Ipswich Town",
    "Leicester City",
    "Liverpool",
    "Manchester City",
    "Manchester United",
    "Newcastle United",
    "Nottingham Forest",
    "Southampton",
    "Tottenham Hotspur",
    "West Ham United",
    "Wolverhampton",
];

#[derive(Debug, Clone, Copy)]
pub struct FakeSeasonConfig {
    pub seed: u64,
    /// Chance that a played match keeps its detail record.
    pub detail_coverage: f64,
    /// Extra expected goals for the home side.
    pub home_edge: f64,
}

impl Default for FakeSeasonConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            detail_coverage: 0.95,
            home_edge: 0.3,
        }
    }
}

/// Double round-robin season with random scores. The same config always
/// yields the same season.
pub fn generate_season(teams: &[&str], cfg: FakeSeasonConfig) -> SeasonData {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut data = SeasonData {
        teams: teams.iter().map(|t| t.to_string()).collect(),
        ..SeasonData::default()
    };
    for team in teams {
        data.results.insert(team.to_string(), Vec::new());
        data.matches.insert(team.to_string(), Vec::new());
    }

    for round in round_robin_rounds(teams.len()) {
        for (home, away) in round {
            let home_goals = sample_goals(&mut rng, 1.4 + cfg.home_edge);
            let away_goals = sample_goals(&mut rng, 1.4);
            let keep_detail = rng.gen_bool(detail_chance(cfg.detail_coverage));
            let fixture = Fixture {
                home: teams[home],
                away: teams[away],
                home_goals,
                away_goals,
                keep_detail,
            };
            record_side(&mut data, &fixture, Venue::Home);
            record_side(&mut data, &fixture, Venue::Away);
        }
    }
    data
}

/// One generated season per catalog entry, each with its own seed.
pub fn generate_catalog(
    catalog: &SeasonCatalog,
    teams: &[&str],
    cfg: FakeSeasonConfig,
) -> HashMap<String, SeasonData> {
    catalog
        .iter()
        .enumerate()
        .map(|(idx, season)| {
            let season_cfg = FakeSeasonConfig {
                seed: cfg.seed.wrapping_add(idx as u64),
                ..cfg
            };
            (season.to_string(), generate_season(teams, season_cfg))
        })
        .collect()
}

// NaN reads as "never"; gen_bool panics outside 0..=1.
fn detail_chance(coverage: f64) -> f64 {
    if coverage.is_nan() {
        0.0
    } else {
        coverage.clamp(0.0, 1.0)
    }
}

struct Fixture<'a> {
    home: &'a str,
    away: &'a str,
    home_goals: u32,
    away_goals: u32,
    keep_detail: bool,
}

fn record_side(data: &mut SeasonData, fixture: &Fixture<'_>, venue: Venue) {
    let (team, opponent, own, against) = match venue {
        Venue::Home => (fixture.home, fixture.away, fixture.home_goals, fixture.away_goals),
        Venue::Away => (fixture.away, fixture.home, fixture.away_goals, fixture.home_goals),
    };
    let outcome = if own > against {
        Outcome::Win
    } else if own < against {
        Outcome::Loss
    } else {
        Outcome::Draw
    };
    if let Some(results) = data.results.get_mut(team) {
        results.push(outcome);
    }
    if let Some(matches) = data.matches.get_mut(team) {
        matches.push(fixture.keep_detail.then(|| MatchRecord {
            opponent: opponent.to_string(),
            venue,
            score: format!("{own}-{against}"),
        }));
    }
}

// Knuth's Poisson sampler; plenty for goal counts.
fn sample_goals(rng: &mut StdRng, lambda: f64) -> u32 {
    let limit = (-lambda).exp();
    let mut k = 0u32;
    let mut p = 1.0;
    loop {
        p *= rng.r#gen::<f64>();
        if p <= limit || k >= 9 {
            return k;
        }
        k += 1;
    }
}

/// Circle-method pairings by team index; the second half mirrors the first
/// with venues swapped. An odd team count gets a bye each round.
fn round_robin_rounds(n: usize) -> Vec<Vec<(usize, usize)>> {
    if n < 2 {
        return Vec::new();
    }
    let slots = if n % 2 == 0 { n } else { n + 1 };
    let mut order: Vec<usize> = (0..slots).collect();
    let mut first_half = Vec::with_capacity(slots - 1);
    for round in 0..slots - 1 {
        let mut pairs = Vec::new();
        for i in 0..slots / 2 {
            let a = order[i];
            let b = order[slots - 1 - i];
            if a >= n || b >= n {
                continue;
            }
            if (round + i) % 2 == 0 {
                pairs.push((a, b));
            } else {
                pairs.push((b, a));
            }
        }
        first_half.push(pairs);
        order[1..].rotate_right(1);
    }
    let second_half: Vec<Vec<(usize, usize)>> = first_half
        .iter()
        .map(|pairs| pairs.iter().map(|(h, a)| (*a, *h)).collect())
        .collect();
    first_half.extend(second_half);
    first_half
}
