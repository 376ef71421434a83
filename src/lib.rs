//! Five-game win streaks and league tables from season result files.

pub mod config;
pub mod context;
pub mod fake_season;
pub mod score;
pub mod season_data;
pub mod season_table;
pub mod seasons;
pub mod standings;
pub mod streak_index;
pub mod streaks;
pub mod team_names;

pub use context::DataContext;
pub use season_data::{MatchRecord, Outcome, SeasonData, Venue};
pub use seasons::SeasonCatalog;
pub use standings::Standing;
pub use streak_index::{Streak, TeamStreakIndex};
pub use streaks::{StreakMarker, StreakRange};
