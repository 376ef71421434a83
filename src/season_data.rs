use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::seasons::SeasonCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl Outcome {
    pub fn symbol(self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Draw => 'D',
            Outcome::Loss => 'L',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'W' => Some(Outcome::Win),
            'D' => Some(Outcome::Draw),
            'L' => Some(Outcome::Loss),
            _ => None,
        }
    }
}

/// Parse a compact result string such as "WWDLW". Unknown symbols yield `None`.
pub fn parse_outcomes(raw: &str) -> Option<Vec<Outcome>> {
    raw.chars()
        .filter(|ch| !ch.is_whitespace())
        .map(Outcome::from_symbol)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    #[serde(rename = "H", alias = "Home")]
    Home,
    #[serde(rename = "A", alias = "Away")]
    Away,
}

impl Venue {
    /// "vs" for home fixtures, "@" for away ones.
    pub fn prefix(self) -> &'static str {
        match self {
            Venue::Home => "vs",
            Venue::Away => "@",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Venue::Home => "Home",
            Venue::Away => "Away",
        }
    }
}

/// One fixture as seen from the owning team. `score` is "own-opponent".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub opponent: String,
    pub venue: Venue,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub teams: Vec<String>,
    #[serde(default, deserialize_with = "null_lists_as_empty")]
    pub results: HashMap<String, Vec<Outcome>>,
    // Entries may be null for matchweeks without detail.
    #[serde(default, deserialize_with = "null_lists_as_empty")]
    pub matches: HashMap<String, Vec<Option<MatchRecord>>>,
}

fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}

/// A null per-team list reads as an empty one.
fn null_lists_as_empty<'de, D, T>(de: D) -> Result<HashMap<String, Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = Option::<HashMap<String, Option<Vec<T>>>>::deserialize(de)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(team, list)| (team, list.unwrap_or_default()))
        .collect())
}

impl SeasonData {
    pub fn results_for(&self, team: &str) -> &[Outcome] {
        self.results.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn matches_for(&self, team: &str) -> &[Option<MatchRecord>] {
        self.matches.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn match_at(&self, team: &str, index: usize) -> Option<&MatchRecord> {
        self.matches_for(team).get(index).and_then(Option::as_ref)
    }

    /// Length of the longest result sequence in the season.
    pub fn max_matchweeks(&self) -> usize {
        self.results.values().map(Vec::len).max().unwrap_or(0)
    }
}

pub fn parse_season_json(raw: &str) -> Result<SeasonData> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow!("empty season file"));
    }
    serde_json::from_str::<SeasonData>(trimmed).context("invalid season json")
}

pub fn season_file_path(dir: &Path, season: &str) -> PathBuf {
    dir.join(format!("{season}.json"))
}

pub fn load_season_file(dir: &Path, season: &str) -> Result<SeasonData> {
    let path = season_file_path(dir, season);
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("read season file {}", path.display()))?;
    parse_season_json(&raw).with_context(|| format!("parse season {season}"))
}

#[derive(Debug, Clone, Default)]
pub struct LoadedSeasons {
    pub seasons: HashMap<String, SeasonData>,
    pub errors: Vec<String>,
}

/// Read every catalog season from `dir`. Seasons that fail to load are
/// recorded in `errors` and left out of `seasons`.
pub fn load_all_seasons(dir: &Path, catalog: &SeasonCatalog, parallelism: usize) -> LoadedSeasons {
    let names: Vec<&str> = catalog.iter().collect();
    let results: Vec<(String, Result<SeasonData>)> = with_load_pool(parallelism, || {
        names
            .par_iter()
            .map(|season| (season.to_string(), load_season_file(dir, season)))
            .collect()
    });

    let mut out = LoadedSeasons::default();
    for (season, result) in results {
        match result {
            Ok(data) => {
                debug!(season = %season, teams = data.teams.len(), "season loaded");
                out.seasons.insert(season, data);
            }
            Err(err) => {
                warn!(season = %season, "season skipped: {err:#}");
                out.errors.push(format!("{season}: {err:#}"));
            }
        }
    }
    out
}

fn with_load_pool<T>(threads: usize, action: impl FnOnce() -> T + Send) -> T
where
    T: Send,
{
    match rayon::ThreadPoolBuilder::new()
        .num_threads(threads.clamp(1, 32))
        .build()
    {
        Ok(pool) => pool.install(action),
        Err(_) => action(),
    }
}
