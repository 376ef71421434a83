use std::path::PathBuf;

use pl_streaks::context::DataContext;
use pl_streaks::season_data::{load_all_seasons, load_season_file};
use pl_streaks::seasons::SeasonCatalog;

fn fixtures_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("seasons");
    path
}

#[test]
fn loads_present_seasons_and_skips_the_rest() {
    let catalog = SeasonCatalog::default();
    let loaded = load_all_seasons(&fixtures_dir(), &catalog, 4);

    let mut names: Vec<&str> = loaded.seasons.keys().map(|s| s.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["2023-24", "2024-25"]);
    assert_eq!(loaded.errors.len(), catalog.len() - 2);
    assert!(loaded.errors.iter().any(|e| e.starts_with("2022-23:")));
    assert!(loaded.errors.iter().any(|e| e.starts_with("2025-26:")));
}

#[test]
fn broken_season_file_is_an_error() {
    let err = load_season_file(&fixtures_dir(), "2022-23").expect_err("truncated json");
    assert!(format!("{err:#}").contains("2022-23"));
    assert!(load_season_file(&fixtures_dir(), "1999-00").is_err());
}

#[test]
fn context_from_loaded_keeps_errors_and_counts_every_result_row() {
    let catalog = SeasonCatalog::default();
    let loaded = load_all_seasons(&fixtures_dir(), &catalog, 2);
    let ctx = DataContext::from_loaded(catalog, loaded);

    assert_eq!(ctx.loaded_seasons(), vec!["2024-25", "2023-24"]);
    assert_eq!(ctx.load_errors().len(), 19);
    assert_eq!(ctx.season_streak_count("2024-25"), 2);
    // "Ghost Town" has results but is not listed in `teams`.
    assert_eq!(ctx.season_streak_count("2023-24"), 4);
    assert_eq!(ctx.season_streak_count("2022-23"), 0);
    assert!(!ctx.index().contains_team("Ghost Town"));
}
