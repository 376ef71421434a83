use std::collections::HashMap;

use tracing::info;

use crate::season_data::{LoadedSeasons, SeasonData};
use crate::season_table::{SeasonTable, build_season_table};
use crate::seasons::SeasonCatalog;
use crate::standings::{Standing, calculate_standings};
use crate::streak_index::{
    SeasonFrequency, Streak, TeamStreakIndex, TeamStreakSummary, build_team_streak_index,
    season_frequency, team_summary, teams_by_streak_count,
};
use crate::streaks::count_streaks;

/// Everything derived from one set of loaded seasons.
///
/// Built once and never mutated; a reload builds a new context.
#[derive(Debug, Clone)]
pub struct DataContext {
    catalog: SeasonCatalog,
    seasons: HashMap<String, SeasonData>,
    index: TeamStreakIndex,
    standings: HashMap<String, Vec<Standing>>,
    season_streak_counts: HashMap<String, usize>,
    load_errors: Vec<String>,
}

impl DataContext {
    pub fn build(catalog: SeasonCatalog, seasons: HashMap<String, SeasonData>) -> Self {
        let index = build_team_streak_index(&catalog, &seasons);
        let standings: HashMap<String, Vec<Standing>> = seasons
            .iter()
            .filter(|(name, _)| catalog.contains(name))
            .map(|(name, data)| (name.clone(), calculate_standings(data)))
            .collect();
        let season_streak_counts: HashMap<String, usize> = seasons
            .iter()
            .map(|(name, data)| {
                let total = data.results.values().map(|r| count_streaks(r)).sum::<usize>();
                (name.clone(), total)
            })
            .collect();
        info!(
            seasons = seasons.len(),
            teams = index.len(),
            streaks = index.total_streaks(),
            "data context built"
        );
        Self {
            catalog,
            seasons,
            index,
            standings,
            season_streak_counts,
            load_errors: Vec::new(),
        }
    }

    pub fn from_loaded(catalog: SeasonCatalog, loaded: LoadedSeasons) -> Self {
        let mut ctx = Self::build(catalog, loaded.seasons);
        ctx.load_errors = loaded.errors;
        ctx
    }

    pub fn catalog(&self) -> &SeasonCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &TeamStreakIndex {
        &self.index
    }

    pub fn season(&self, season: &str) -> Option<&SeasonData> {
        self.seasons.get(season)
    }

    pub fn is_loaded(&self, season: &str) -> bool {
        self.seasons.contains_key(season)
    }

    /// Loaded seasons in catalog order.
    pub fn loaded_seasons(&self) -> Vec<&str> {
        self.catalog.iter().filter(|s| self.is_loaded(s)).collect()
    }

    pub fn load_errors(&self) -> &[String] {
        &self.load_errors
    }

    pub fn streaks_for(&self, team: &str) -> &[Streak] {
        self.index.streaks_for(team)
    }

    /// `None` when the season was not loaded.
    pub fn standings_for(&self, season: &str) -> Option<&[Standing]> {
        self.standings.get(season).map(Vec::as_slice)
    }

    pub fn season_table(&self, season: &str) -> Option<SeasonTable> {
        self.season(season).map(build_season_table)
    }

    /// Number of streaks across all teams; zero for seasons not loaded.
    pub fn season_streak_count(&self, season: &str) -> usize {
        self.season_streak_counts.get(season).copied().unwrap_or(0)
    }

    pub fn frequency_for(&self, team: &str) -> SeasonFrequency {
        season_frequency(&self.catalog, self.streaks_for(team))
    }

    pub fn team_summary(&self, team: &str) -> TeamStreakSummary {
        team_summary(&self.index, team)
    }

    pub fn teams_by_streak_count(&self) -> Vec<String> {
        teams_by_streak_count(&self.index)
    }
}
