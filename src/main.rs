use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shot_chart::chart::{chart_title, compose_chart};
use shot_chart::court::build_court;
use shot_chart::data::{self, Dataset};
use shot_chart::shots::{partition_shots, UnknownEventPolicy};
use shot_chart::{render, report, session, stats};

#[derive(Parser)]
#[command(name = "shot-chart")]
#[command(about = "NBA player shot charts and per-game stats from season CSV files", long_about = None)]
struct Cli {
    /// Shot event log (TEAM_NAME, PLAYER_NAME, EVENT_TYPE, LOC_X, LOC_Y)
    #[arg(long, env = "SHOT_CHART_SHOTS", default_value = "21-22.csv", global = true)]
    shots: PathBuf,
    /// Player season statistics table
    #[arg(long, env = "SHOT_CHART_STATS", default_value = "playerstats.csv", global = true)]
    stats: PathBuf,
    /// Fail instead of skipping shots whose EVENT_TYPE is not recognized
    #[arg(long, env = "SHOT_CHART_STRICT_EVENTS", global = true)]
    strict_events: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    #[arg(long)]
    player: String,
    /// Require the player to have shots for this team
    #[arg(long)]
    team: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page
    Intro,
    /// List teams in the shot log
    Teams,
    /// List players with shots for a team
    Players {
        #[arg(long)]
        team: String,
    },
    /// Print a player's per-game stat panel
    Stats {
        #[command(flatten)]
        selection: Selection,
    },
    /// Render a player's shot chart as SVG
    Chart {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, default_value = "chart.svg")]
        out: PathBuf,
        /// Also write the composed scene as JSON
        #[arg(long)]
        scene: Option<PathBuf>,
        #[arg(long)]
        no_outer_lines: bool,
    },
    /// Generate a markdown report for a player
    Report {
        #[command(flatten)]
        selection: Selection,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shot_chart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn check_team(dataset: &Dataset, selection: &Selection) -> anyhow::Result<()> {
    let Some(team) = selection.team.as_deref() else {
        return Ok(());
    };
    let events = dataset.load_shot_events()?;
    if !data::players_on_team(events, team).contains(selection.player.as_str()) {
        bail!("{} has no recorded shots for {}", selection.player, team);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let dataset = Dataset::new(&cli.shots, &cli.stats);
    let policy = if cli.strict_events {
        UnknownEventPolicy::Reject
    } else {
        UnknownEventPolicy::Skip
    };

    match cli.command {
        Commands::Intro => {
            print!("{}", session::landing_text());
        }
        Commands::Teams => {
            let events = dataset.load_shot_events()?;
            for team in data::distinct_teams(events) {
                println!("{team}");
            }
        }
        Commands::Players { team } => {
            let events = dataset.load_shot_events()?;
            let players = data::players_on_team(events, &team);
            if players.is_empty() {
                println!("No players found for {team}.");
                return Ok(());
            }
            for player in players {
                println!("{player}");
            }
        }
        Commands::Stats { selection } => {
            check_team(&dataset, &selection)?;
            let row = data::stats_for(dataset.load_player_stats()?, &selection.player)?;
            let normalized = stats::normalize(row)?;

            println!("{}'s Traditional Stats", selection.player);
            for (label, value) in stats::stat_panel(&normalized) {
                println!("{label}: {value}");
            }
        }
        Commands::Chart {
            selection,
            out,
            scene,
            no_outer_lines,
        } => {
            check_team(&dataset, &selection)?;
            let events = dataset.load_shot_events()?;
            let partition = partition_shots(events, &selection.player, policy)?;
            let court = build_court(!no_outer_lines);
            let composed = compose_chart(
                &court,
                &partition.made,
                &partition.missed,
                &chart_title(&selection.player),
            );

            if let Some(scene_path) = scene {
                let json = serde_json::to_string_pretty(&composed)?;
                std::fs::write(&scene_path, json)
                    .with_context(|| format!("failed to write {}", scene_path.display()))?;
                println!("Scene written to {}.", scene_path.display());
            }

            render::render_svg(&composed, &out)?;
            println!(
                "Chart written to {} ({} made, {} missed).",
                out.display(),
                partition.made.len(),
                partition.missed.len()
            );
        }
        Commands::Report { selection, out } => {
            check_team(&dataset, &selection)?;
            let row = data::stats_for(dataset.load_player_stats()?, &selection.player)?;
            let normalized = stats::normalize(row)?;
            let partition =
                partition_shots(dataset.load_shot_events()?, &selection.player, policy)?;
            let report = report::build_report(
                selection.team.as_deref(),
                Utc::now().date_naive(),
                &normalized,
                &partition,
            );
            std::fs::write(&out, report)?;
            println!("Report written to {}.", out.display());
        }
    }

    Ok(())
}
