//! LineupLab CLI — batting-order search commands.
//!
//! Commands:
//! - `search` — enumerate every lineup for a policy, score each over a
//!   simulated series, and report the best
//! - `evaluate` — score one explicit batting order
//! - `policies` — list the available lineup policies

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use lineuplab_core::domain::{Player, PlayerGroup, Roster};
use lineuplab_core::lineup::{BattingLineup, LineupDescription};
use lineuplab_core::rng::RngHierarchy;
use lineuplab_core::sim::{GameSimulator, SimConfig};
use lineuplab_runner::{
    load_roster, run_search_with_progress, save_report, LineupPolicy, SearchConfig, SearchReport,
};

#[derive(Parser)]
#[command(name = "lineuplab", about = "LineupLab — batting-order optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every lineup for a policy and keep the best.
    Search {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Player stats file or directory (CSV/JSON).
        #[arg(long)]
        stats: Option<PathBuf>,

        /// Lineup policy, by name or ordinal (see `policies`).
        #[arg(long, default_value = "standard")]
        policy: String,

        /// Games simulated per lineup.
        #[arg(long, default_value_t = 10_000)]
        games: u32,

        /// Innings per game.
        #[arg(long, default_value_t = 6)]
        innings: u32,

        /// Master seed for reproducible runs.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Score lineups on a single thread.
        #[arg(long, default_value_t = false)]
        serial: bool,

        /// How many top lineups to keep in the report.
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Output directory for the report JSON.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,
    },
    /// Score one explicit batting order.
    Evaluate {
        /// Player stats file or directory (CSV/JSON).
        #[arg(long)]
        stats: PathBuf,

        /// Lineup policy, by name or ordinal (see `policies`).
        #[arg(long, default_value = "standard")]
        policy: String,

        /// Player names, in batting order.
        #[arg(required = true)]
        order: Vec<String>,

        /// Games simulated.
        #[arg(long, default_value_t = 10_000)]
        games: u32,

        /// Innings per game.
        #[arg(long, default_value_t = 6)]
        innings: u32,

        /// Master seed for reproducible runs.
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// List the available lineup policies.
    Policies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            config,
            stats,
            policy,
            games,
            innings,
            seed,
            serial,
            top,
            output_dir,
        } => run_search_cmd(
            config, stats, &policy, games, innings, seed, serial, top, output_dir,
        ),
        Commands::Evaluate {
            stats,
            policy,
            order,
            games,
            innings,
            seed,
        } => run_evaluate_cmd(&stats, &policy, &order, games, innings, seed),
        Commands::Policies => {
            print_policies();
            Ok(())
        }
    }
}

fn parse_policy(selector: &str) -> Result<LineupPolicy> {
    match LineupPolicy::from_selector(selector) {
        Ok(policy) => Ok(policy),
        Err(err) => {
            print_policies();
            bail!("{err}");
        }
    }
}

fn print_policies() {
    println!("Available lineup policies:");
    for policy in LineupPolicy::ALL {
        println!("  {} — {}", policy.ordinal(), policy.name());
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search_cmd(
    config_path: Option<PathBuf>,
    stats: Option<PathBuf>,
    policy: &str,
    games: u32,
    innings: u32,
    seed: u64,
    serial: bool,
    top: usize,
    output_dir: PathBuf,
) -> Result<()> {
    if config_path.is_some() && stats.is_some() {
        bail!("--config and --stats are mutually exclusive");
    }

    let search_config = if let Some(path) = config_path {
        SearchConfig::from_toml_path(&path)?
    } else {
        let Some(stats_path) = stats else {
            bail!("one of --config or --stats is required");
        };
        let mut config = SearchConfig::new(stats_path);
        config.policy = parse_policy(policy)?;
        config.games_per_lineup = games;
        config.innings_per_game = innings;
        config.seed = seed;
        config.parallel = !serial;
        config.leaderboard_size = top;
        config
    };

    let report = run_search_with_progress(&search_config, |evaluated, total| {
        match total {
            Some(total) => print!("\rEvaluated {evaluated}/{total} lineups"),
            None => print!("\rEvaluated {evaluated} lineups"),
        }
        let _ = std::io::stdout().flush();
    })?;
    println!();

    print_summary(&report);

    let path = save_report(&report, &output_dir)?;
    println!("Report saved to: {}", path.display());
    Ok(())
}

fn run_evaluate_cmd(
    stats: &PathBuf,
    policy: &str,
    order: &[String],
    games: u32,
    innings: u32,
    seed: u64,
) -> Result<()> {
    let policy = parse_policy(policy)?;
    let roster = load_roster(stats)?;

    let players = order
        .iter()
        .map(|name| lookup_player(&roster, name))
        .collect::<Result<Vec<Player>>>()?;

    let mut lineup = match policy {
        LineupPolicy::Standard => BattingLineup::standard(players)?,
        LineupPolicy::Alternating => {
            let (group_a, group_b): (Vec<Player>, Vec<Player>) = players
                .into_iter()
                .partition(|p| p.group() == PlayerGroup::A);
            BattingLineup::alternating(group_a, group_b)?
        }
    };

    let simulator = GameSimulator::new(SimConfig {
        innings_per_game: innings,
        ..SimConfig::default()
    });
    let mut rng = RngHierarchy::new(seed).rng_for_lineup(0);
    let mean_runs = simulator.run_series(&mut lineup, games, &mut rng);

    println!("Lineup:    {}", format_description(&lineup.describe()));
    println!("Games:     {games}");
    println!("Mean runs: {mean_runs:.4}");
    Ok(())
}

fn lookup_player(roster: &Roster, name: &str) -> Result<Player> {
    roster
        .players()
        .iter()
        .find(|p| p.name() == name)
        .cloned()
        .with_context(|| format!("player '{name}' not found in the loaded stats"))
}

fn print_summary(report: &SearchReport) {
    println!();
    println!("Policy:            {}", report.policy.name());
    println!("Lineups evaluated: {}", report.lineups_evaluated);
    println!("Best mean runs:    {:.4}", report.best_mean_runs);
    println!("Best lineup:       {}", format_description(&report.best_lineup));
    println!("Elapsed:           {:.2}s", report.elapsed_secs);

    if !report.leaderboard.is_empty() {
        println!();
        println!("Top {} lineups:", report.leaderboard.len());
        for (rank, entry) in report.leaderboard.iter().enumerate() {
            println!(
                "  {:>2}. {:.4}  {}",
                rank + 1,
                entry.mean_runs,
                format_description(&entry.description)
            );
        }
    }
}

fn format_description(description: &LineupDescription) -> String {
    match description {
        LineupDescription::Ordered { order } => order.join(", "),
        LineupDescription::Grouped { group_a, group_b } => {
            format!("A[{}] / B[{}]", group_a.join(", "), group_b.join(", "))
        }
    }
}
