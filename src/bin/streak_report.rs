use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pl_streaks::config::AppConfig;
use pl_streaks::context::DataContext;
use pl_streaks::fake_season::{self, DEMO_TEAMS, FakeSeasonConfig};
use pl_streaks::season_data::{self, LoadedSeasons};
use pl_streaks::season_table::SeasonTable;
use pl_streaks::seasons::{SeasonCatalog, short_season_label};
use pl_streaks::standings::Standing;
use pl_streaks::streak_index::{SeasonFrequency, Streak, TeamStreakSummary};
use pl_streaks::team_names::short_name;

#[derive(Debug, Serialize)]
struct SeasonReport<'a> {
    season: &'a str,
    streaks: usize,
    standings: &'a [Standing],
}

#[derive(Debug, Serialize)]
struct TeamReport<'a> {
    summary: TeamStreakSummary,
    frequency: SeasonFrequency,
    streaks: &'a [Streak],
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    init_logging();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut cfg = AppConfig::from_env();
    if let Some(dir) = arg_value(&args, "--data-dir") {
        cfg.data_dir = PathBuf::from(dir);
    }
    let json = args.iter().any(|a| a == "--json");
    let demo = args.iter().any(|a| a == "--demo");

    let catalog = SeasonCatalog::default();
    let loaded = if demo {
        LoadedSeasons {
            seasons: fake_season::generate_catalog(&catalog, DEMO_TEAMS, FakeSeasonConfig::default()),
            errors: Vec::new(),
        }
    } else {
        info!(dir = %cfg.data_dir.display(), "loading seasons");
        season_data::load_all_seasons(&cfg.data_dir, &catalog, cfg.load_parallelism)
    };
    let ctx = DataContext::from_loaded(catalog, loaded);
    if ctx.loaded_seasons().is_empty() {
        return Err(anyhow!(
            "no seasons loaded from {}",
            cfg.data_dir.display()
        ));
    }

    let season = match arg_value(&args, "--season") {
        Some(s) => s,
        None => ctx
            .loaded_seasons()
            .first()
            .map(|s| s.to_string())
            .context("no loaded season to report")?,
    };
    let standings = ctx
        .standings_for(&season)
        .with_context(|| format!("season {season} not loaded"))?;
    let team = arg_value(&args, "--team");

    if json {
        let season_report = SeasonReport {
            season: &season,
            streaks: ctx.season_streak_count(&season),
            standings,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&season_report).context("serialize season report")?
        );
        if let Some(team) = team.as_deref() {
            let team_report = TeamReport {
                summary: ctx.team_summary(team),
                frequency: ctx.frequency_for(team),
                streaks: ctx.streaks_for(team),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&team_report).context("serialize team report")?
            );
        }
        return Ok(());
    }

    print_overview(&ctx);
    if let Some(table) = ctx.season_table(&season) {
        print_season(&season, ctx.season_streak_count(&season), &table);
    }
    match team.as_deref() {
        Some(team) => print_team(&ctx, team)?,
        None => print_team_leaders(&ctx),
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pl_streaks=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_overview(ctx: &DataContext) {
    println!("Seasons loaded: {}/{}", ctx.loaded_seasons().len(), ctx.catalog().len());
    if !ctx.load_errors().is_empty() {
        println!("Skipped: {}", ctx.load_errors().len());
        for err in ctx.load_errors().iter().take(6) {
            println!(" - {err}");
        }
    }
    for season in ctx.catalog().iter() {
        if ctx.is_loaded(season) {
            println!("{season}  {:>3}", ctx.season_streak_count(season));
        }
    }
    println!();
}

fn print_season(season: &str, streaks: usize, table: &SeasonTable) {
    let plural = if streaks == 1 { "" } else { "s" };
    println!("{season} Season - {streaks} five-game win streak{plural}");
    println!(
        "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>4} {:>4}  form",
        "#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "Pts"
    );
    for row in &table.rows {
        let s = &row.standing;
        // Streak cells are upper-case, everything else lower-case.
        let form: String = row
            .cells
            .iter()
            .map(|cell| match (cell.result, cell.streak.is_some()) {
                (Some(r), true) => r.symbol(),
                (Some(r), false) => r.symbol().to_ascii_lowercase(),
                (None, _) => '.',
            })
            .collect();
        println!(
            "{:>3} {:<24} {:>3} {:>3} {:>3} {:>3} {:>4} {:>4} {:>+4} {:>4}  {}",
            row.position,
            s.team,
            s.played,
            s.wins,
            s.draws,
            s.losses,
            s.goals_for,
            s.goals_against,
            s.goal_difference,
            s.points,
            form
        );
    }
    println!();
}

fn print_team(ctx: &DataContext, team: &str) -> Result<()> {
    if !ctx.index().contains_team(team) {
        return Err(anyhow!("unknown team: {team}"));
    }
    let summary = ctx.team_summary(team);
    println!(
        "{team} - {} streak(s) across {} season(s) ({} wins in streaks)",
        summary.streaks, summary.seasons, summary.wins_in_streaks
    );
    let freq = ctx.frequency_for(team);
    let axis: Vec<String> = freq
        .chronological()
        .map(|(season, n)| format!("{}:{n}", short_season_label(season)))
        .collect();
    println!("{}", axis.join(" "));

    for streak in ctx.streaks_for(team) {
        println!(
            "{} (MW {}-{})  {} wins",
            streak.season, streak.start_week, streak.end_week, streak.length
        );
        for m in &streak.matches {
            println!(
                "   {:>2}  {} {:<14} {}",
                m.matchweek,
                m.venue.prefix(),
                short_name(&m.opponent),
                m.display_score
            );
        }
    }
    Ok(())
}

fn print_team_leaders(ctx: &DataContext) {
    println!("Teams by streak count:");
    for team in ctx.teams_by_streak_count().iter().take(10) {
        println!("{:>3}  {}", ctx.streaks_for(team).len(), team);
    }
}

fn arg_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.trim().to_string());
        }
    }
    None
}
