//! Sabermetrics report CLI
//!
//! Renders the embedded sample dataset through the metrics engine:
//! individual batter analysis, head-to-head comparison, pitcher analysis
//! and a team summary table.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use sabr_core::{
    get_sample_data, player_metrics_json, BatterRating, FipVerdict, PitcherRating,
    SabermetricsEngine, SampleBatter, SamplePitcher, SCHEMA_VERSION,
};

#[derive(Parser)]
#[command(name = "sabr")]
#[command(about = "Sabermetrics analysis over the embedded sample dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis report over the sample dataset
    Report,

    /// Derived metrics for one sample batter
    Player {
        /// Batter name as it appears in the sample data
        #[arg(long)]
        name: String,

        /// Park factor (1.0 = neutral)
        #[arg(long, default_value = "1.0")]
        park_factor: f64,

        /// Emit raw JSON through the API facade instead of a table
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Compare two sample batters across the default metric set
    Compare {
        /// First batter name
        #[arg(long)]
        a: String,

        /// Second batter name
        #[arg(long)]
        b: String,
    },

    /// Derived metrics for the sample pitchers
    Pitchers,

    /// Team-level aggregation table
    Teams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = SabermetricsEngine::new();
    let data = get_sample_data();

    match cli.command {
        Commands::Report => {
            println!("=============================================================");
            println!("SABERMETRICS ANALYSIS REPORT ({} sample season)", data.season);
            println!("Generated: {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
            println!("=============================================================");
            println!();

            println!("📊 INDIVIDUAL BATTER ANALYSIS");
            println!("-------------------------------------------------------------");
            for batter in &data.batters {
                print_batter_analysis(&engine, batter)?;
            }

            println!("⚾ PITCHER ANALYSIS");
            println!("-------------------------------------------------------------");
            for pitcher in &data.pitchers {
                print_pitcher_analysis(&engine, pitcher);
            }

            print_team_table(&engine);
        }
        Commands::Player { name, park_factor, json } => {
            let batter = find_batter(&name)?;
            if json {
                let request = json!({
                    "schema_version": SCHEMA_VERSION,
                    "line": serde_json::to_value(&batter.line)?,
                    "park_factor": park_factor,
                });
                println!("{}", player_metrics_json(&request.to_string())?);
            } else {
                print_batter_analysis_at(&engine, batter, park_factor)?;
            }
        }
        Commands::Compare { a, b } => {
            let batter_a = find_batter(&a)?;
            let batter_b = find_batter(&b)?;
            print_comparison(&engine, batter_a, batter_b);
        }
        Commands::Pitchers => {
            for pitcher in &data.pitchers {
                print_pitcher_analysis(&engine, pitcher);
            }
        }
        Commands::Teams => {
            print_team_table(&engine);
        }
    }

    Ok(())
}

fn find_batter(name: &str) -> Result<&'static SampleBatter> {
    get_sample_data()
        .batter(name)
        .ok_or_else(|| anyhow!("no sample batter named '{}'", name))
}

fn print_batter_analysis(engine: &SabermetricsEngine, batter: &SampleBatter) -> Result<()> {
    print_batter_analysis_at(engine, batter, 1.0)
}

fn print_batter_analysis_at(
    engine: &SabermetricsEngine,
    batter: &SampleBatter,
    park_factor: f64,
) -> Result<()> {
    let metrics = engine.player_metrics(&batter.line, park_factor)?;
    let war = engine.war_approximation(&batter.line, batter.position);
    let rating = BatterRating::from_metrics(&metrics);

    println!("{} ({}) - {}", batter.name, batter.team, batter.position.code());
    println!("  AVG: {:.3}   OBP: {:.3}   SLG: {:.3}   OPS: {:.3}", metrics.avg, metrics.obp, metrics.slg, metrics.ops);
    println!("  wOBA: {:.3}  wRC+: {:.0}  BABIP: {:.3}  ISO: {:.3}", metrics.woba, metrics.wrc_plus, metrics.babip, metrics.iso);
    println!("  BB%: {:.1}   K%: {:.1}", metrics.bb_rate * 100.0, metrics.k_rate * 100.0);
    println!("  WAR (approx): {:.1}", war);
    println!("  RATING: {}", rating.label());
    println!();
    Ok(())
}

fn print_pitcher_analysis(engine: &SabermetricsEngine, pitcher: &SamplePitcher) {
    let metrics = engine.pitcher_metrics(&pitcher.line);
    let rating = PitcherRating::from_metrics(&metrics);
    let verdict = FipVerdict::from_metrics(&metrics);

    println!("{} ({})", pitcher.name, pitcher.team);
    println!("  ERA: {:.2}   WHIP: {:.2}   FIP: {:.2}", metrics.era, metrics.whip, metrics.fip);
    println!("  K/9: {:.1}   BB/9: {:.1}   K/BB: {:.2}", metrics.k_per_9, metrics.bb_per_9, metrics.k_bb_ratio);
    println!("  RATING: {}", rating.label());
    println!("  {}", verdict.description());
    println!();
}

fn print_comparison(engine: &SabermetricsEngine, a: &SampleBatter, b: &SampleBatter) {
    let comparison = engine.compare_players_default(&a.line, &b.line);

    println!("🆚 {} ({}) vs {} ({})", a.name, a.team, b.name, b.team);
    println!("-------------------------------------------------------------");
    println!("{:<8} {:>10} {:>10} {:>10}  {}", "METRIC", a.team, b.team, "DIFF", "EDGE");
    for row in &comparison.rows {
        let edge = if row.a_is_better {
            a.name.as_str()
        } else if row.difference < 0.0 {
            b.name.as_str()
        } else {
            "tied"
        };
        println!(
            "{:<8} {:>10.3} {:>10.3} {:>+10.3}  {}",
            row.metric, row.value_a, row.value_b, row.difference, edge
        );
    }
    println!();
    println!(
        "Overall: {} leads {} of {} metrics",
        if comparison.wins_for_a() >= comparison.wins_for_b() { &a.name } else { &b.name },
        comparison.wins_for_a().max(comparison.wins_for_b()),
        comparison.rows.len()
    );
    println!();
}

fn print_team_table(engine: &SabermetricsEngine) {
    let data = get_sample_data();
    let summary = engine.team_summary(data.batters.iter().map(|b| (b.team.as_str(), &b.line)));

    println!("🏟️ TEAM PERFORMANCE ANALYSIS");
    println!("-------------------------------------------------------------");
    println!(
        "{:<6} {:<8} {:<10} {:<9} {:<9} {:<9}",
        "TEAM", "PLAYERS", "AVG wRC+", "AVG OPS", "TOTAL HR", "TOTAL RBI"
    );
    for team in &summary {
        println!(
            "{:<6} {:<8} {:<10.0} {:<9.3} {:<9} {:<9}",
            team.team, team.player_count, team.avg_wrc_plus, team.avg_ops, team.total_hr,
            team.total_rbi
        );
    }
    println!();
}
