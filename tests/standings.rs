use std::fs;
use std::path::PathBuf;

use pl_streaks::season_data::{MatchRecord, SeasonData, Venue, parse_outcomes, parse_season_json};
use pl_streaks::season_table::build_season_table;
use pl_streaks::standings::calculate_standings;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("seasons");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn team_season(rows: &[(&str, &str, &[&str])]) -> SeasonData {
    let mut data = SeasonData::default();
    for (team, results, scores) in rows {
        data.teams.push(team.to_string());
        data.results
            .insert(team.to_string(), parse_outcomes(results).expect("valid outcomes"));
        data.matches.insert(
            team.to_string(),
            scores
                .iter()
                .map(|score| {
                    Some(MatchRecord {
                        opponent: "Opponent".to_string(),
                        venue: Venue::Home,
                        score: score.to_string(),
                    })
                })
                .collect(),
        );
    }
    data
}

#[test]
fn fixture_table_totals_and_order() {
    let season = parse_season_json(&read_fixture("2024-25.json")).expect("fixture should parse");
    let table = calculate_standings(&season);
    let order: Vec<&str> = table.iter().map(|s| s.team.as_str()).collect();
    assert_eq!(order, vec!["Liverpool", "Arsenal", "Chelsea", "Everton"]);

    let liverpool = &table[0];
    assert_eq!(liverpool.played, 8);
    assert_eq!((liverpool.wins, liverpool.draws, liverpool.losses), (7, 1, 0));
    assert_eq!(liverpool.points, 22);
    assert_eq!((liverpool.goals_for, liverpool.goals_against), (15, 4));
    assert_eq!(liverpool.goal_difference, 11);

    // Match detail stops after five weeks; results still count.
    let arsenal = &table[1];
    assert_eq!(arsenal.played, 8);
    assert_eq!(arsenal.points, 21);
    assert_eq!((arsenal.goals_for, arsenal.goals_against), (8, 2));

    // No match detail at all.
    let chelsea = &table[2];
    assert_eq!(chelsea.points, 14);
    assert_eq!((chelsea.goals_for, chelsea.goals_against), (0, 0));

    let everton = &table[3];
    assert_eq!(everton.points, 5);
    assert_eq!(everton.goal_difference, -10);
}

#[test]
fn goal_difference_decides_level_points() {
    let a = ("A", "WWWD", &["1-0", "1-0", "1-0", "0-0"][..]);
    let b = ("B", "WWWD", &["2-0", "1-0", "2-0", "0-0"][..]);

    for rows in [vec![a, b], vec![b, a]] {
        let table = calculate_standings(&team_season(&rows));
        assert_eq!(table[0].team, "B");
        assert_eq!(table[0].points, 10);
        assert_eq!(table[0].goal_difference, 5);
        assert_eq!(table[1].goal_difference, 3);
    }
}

#[test]
fn identical_records_keep_listing_order() {
    let x = ("X", "WDL", &["2-1", "1-1", "0-1"][..]);
    let y = ("Y", "WDL", &["2-1", "1-1", "0-1"][..]);

    let table = calculate_standings(&team_season(&[x, y]));
    assert_eq!(table[0].team, "X");
    let table = calculate_standings(&team_season(&[y, x]));
    assert_eq!(table[0].team, "Y");
}

#[test]
fn malformed_scores_add_no_goals() {
    let table = calculate_standings(&team_season(&[("M", "WL", &["three-1", "0-x"][..])]));
    assert_eq!(table[0].goals_for, 0);
    assert_eq!(table[0].goals_against, 1);
    assert_eq!(table[0].points, 3);
}

#[test]
fn season_table_marks_streak_cells_with_detail() {
    let season = parse_season_json(&read_fixture("2024-25.json")).expect("fixture should parse");
    let table = build_season_table(&season);
    assert_eq!(table.max_matchweeks, 8);

    let arsenal = &table.rows[1];
    assert_eq!(arsenal.position, 2);
    assert_eq!(arsenal.standing.team, "Arsenal");
    assert_eq!(arsenal.cells[0].text(), "1-0");
    assert!(arsenal.cells[0].streak.is_none());
    assert!(arsenal.cells[1].streak.is_some_and(|m| m.is_start && !m.is_end));
    assert_eq!(arsenal.cells[2].text(), "0-2");
    // Weeks 6-8 have results but no detail.
    assert_eq!(arsenal.cells[6].text(), "W");
    assert!(arsenal.cells[6].streak.is_none());
    assert!(arsenal.cells[6].detail.is_none());
}
