//! VIX Explainer CLI
//!
//! Command-line front end for the expected-value model and the simulators.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vix_lib::models::replay::{find_event, replay_event};
use vix_lib::simulation::export::{write_bands_csv, write_path_csv, write_replay_csv};
use vix_lib::{
    analyze, historical_events, project_vix_path, run_monte_carlo,
    simulate_market_scenario, MarketTrend, ModelInputs, RegimeConfig, ScenarioPreset,
    SimulationConfig, VixLevelBand, VolRegime,
};

#[derive(Parser)]
#[command(name = "vix-explainer", about = "Explore expected VIX and simulated volatility paths")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed (overrides the configuration)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate the expected-value model
    Analyze(InputArgs),
    /// Evaluate the model and project one VIX / volatility path
    Simulate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Write the path as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Simulate a market-regime scenario
    Regime {
        /// bull, bear, sideways or crash
        #[arg(long)]
        trend: Option<MarketTrend>,
        /// low, normal, high or extreme
        #[arg(long)]
        regime: Option<VolRegime>,
        /// Daily event probability in percent
        #[arg(long)]
        event_prob: Option<f64>,
        #[arg(long)]
        days: Option<usize>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Replay a historical stress event
    Replay {
        /// Event name or unique fragment (e.g. "covid"); omit to list events
        #[arg(long)]
        event: Option<String>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Monte Carlo confidence bands of the projection
    Ensemble {
        #[command(flatten)]
        inputs: InputArgs,
        #[arg(long)]
        paths: Option<usize>,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct InputArgs {
    /// default, low-vol, high-vol, fear or complacency
    #[arg(long)]
    preset: Option<ScenarioPreset>,
    #[arg(long)]
    recent_vol: Option<f64>,
    #[arg(long)]
    vix: Option<f64>,
    #[arg(long)]
    speed: Option<f64>,
    #[arg(long)]
    level: Option<f64>,
    #[arg(long)]
    premium: Option<f64>,
    #[arg(long)]
    horizon: Option<usize>,
}

impl InputArgs {
    /// Preset first, then individual flags on top of `base`.
    fn apply(&self, base: ModelInputs) -> ModelInputs {
        let mut inputs = self.preset.map(|p| p.inputs()).unwrap_or(base);
        if let Some(v) = self.recent_vol {
            inputs.recent_vol = v;
        }
        if let Some(v) = self.vix {
            inputs.vix = v;
        }
        if let Some(v) = self.speed {
            inputs.mean_rev_speed = v;
        }
        if let Some(v) = self.level {
            inputs.mean_rev_level = v;
        }
        if let Some(v) = self.premium {
            inputs.premium_factor = v;
        }
        if let Some(v) = self.horizon {
            inputs.horizon_days = v;
        }
        inputs
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("failed to create {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SimulationConfig::from_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
        config.monte_carlo.base_seed = seed;
    }
    init_tracing(cli.verbose.max(config.verbosity));

    match cli.command {
        Command::Analyze(args) => {
            config.inputs = args.apply(config.inputs);
            let inputs = config.prepared_inputs()?;
            let outputs = analyze(&inputs)?;
            print_analysis(&inputs, &outputs);
        }
        Command::Simulate { inputs: args, csv } => {
            config.inputs = args.apply(config.inputs);
            let inputs = config.prepared_inputs()?;
            let mut rng = config.rng();
            let (outputs, path) = project_vix_path(&inputs, config.noise_level, &mut rng)?;
            print_analysis(&inputs, &outputs);

            let summary = path.summary();
            println!("\nProjected path ({} days):", path.len());
            println!("  Final VIX:        {:.2}", path.vix.last().copied().unwrap_or(f64::NAN));
            println!("  Final volatility: {:.2}%", path.vol.last().copied().unwrap_or(f64::NAN));
            println!("  VIX range:        {:.2} - {:.2}", summary.vix.min, summary.vix.max);

            if let Some(file) = csv {
                write_path_csv(&path, create_output(&file)?)?;
                println!("Path written to {}", file.display());
            }
        }
        Command::Regime {
            trend,
            regime,
            event_prob,
            days,
            csv,
        } => {
            let base = config.regime;
            let scenario = RegimeConfig {
                trend: trend.unwrap_or(base.trend),
                regime: regime.unwrap_or(base.regime),
                event_probability_pct: event_prob.unwrap_or(base.event_probability_pct),
                days: days.unwrap_or(base.days),
            };
            let mut rng = config.rng();
            let (path, summary) = simulate_market_scenario(&scenario, &mut rng)?;

            println!("{} with {} Volatility ({} days)", scenario.trend, scenario.regime, path.len());
            println!("  Average VIX:     {:.2}%", summary.vix.mean);
            println!("  Average Vol:     {:.2}%", summary.vol.mean);
            println!("  Average Premium: {:.2}%", summary.mean_premium);
            println!("  Max VIX:         {:.2}%", summary.vix.max);
            println!("  Min VIX:         {:.2}%", summary.vix.min);
            println!("  VIX Range:       {:.2}%", summary.vix.range);
            println!("\n{}", scenario.trend.insight());

            if let Some(file) = csv {
                write_path_csv(&path, create_output(&file)?)?;
                println!("Path written to {}", file.display());
            }
        }
        Command::Replay { event, csv } => {
            let Some(name) = event else {
                println!("Available events:");
                for e in historical_events() {
                    println!("  {} ({})", e.name, e.date);
                }
                return Ok(());
            };
            let record = find_event(&name)?;
            let mut rng = config.rng();
            let replay = replay_event(&record, &mut rng)?;
            let profile = record.profile();

            println!("{} ({})", record.name, record.date);
            println!("{}\n", record.description);
            println!("  Pre-Event VIX:  {} - {}", record.pre_vix, profile.pre_event);
            println!("  Peak VIX:       {} - {}", record.peak_vix, profile.peak);
            println!("  Days to Peak:   {} - {}", record.days_to_peak, profile.buildup);
            println!(
                "  Normalization:  {} days - {}",
                record.days_to_normalize, profile.normalization
            );
            if let Some((day, vix)) = replay.realized_peak() {
                println!("  Replayed peak:  {:.2} on day {}", vix, day);
            }

            if let Some(file) = csv {
                write_replay_csv(&replay, create_output(&file)?)?;
                println!("Replay written to {}", file.display());
            }
        }
        Command::Ensemble {
            inputs: args,
            paths,
            csv,
        } => {
            config.inputs = args.apply(config.inputs);
            if let Some(paths) = paths {
                config.monte_carlo.paths = paths;
            }
            let (outputs, bands) = run_monte_carlo(&config)?;

            println!(
                "Expected VIX {:.2}, sentiment {}",
                outputs.expected_vix, outputs.sentiment
            );
            println!("{} paths over {} days", bands.paths, bands.horizon());
            println!(
                "  Terminal VIX: mean {:.2}, min {:.2}, max {:.2}",
                bands.terminal_vix.mean, bands.terminal_vix.min, bands.terminal_vix.max
            );
            for (level, band) in bands.quantile_levels.iter().zip(bands.vix_quantiles.iter()) {
                if let Some(last) = band.last() {
                    println!("  Terminal VIX q{:.2}: {:.2}", level, last);
                }
            }

            if let Some(file) = csv {
                write_bands_csv(&bands, create_output(&file)?)?;
                println!("Bands written to {}", file.display());
            }
        }
    }

    Ok(())
}

fn print_analysis(inputs: &ModelInputs, outputs: &vix_lib::ModelOutputs) {
    println!("VIX Status: {}", outputs.sentiment);
    println!("  Recent Volatility:    {:.1}%", inputs.recent_vol);
    println!(
        "  Current VIX:          {:.1} ({:?})",
        inputs.vix,
        VixLevelBand::classify(inputs.vix)
    );
    println!("  Expected VIX:         {:.1}", outputs.expected_vix);
    println!("  VIX Deviation:        {:.1}", outputs.vix_deviation);
    println!("  Predicted Vol Change: {:.1}%", outputs.predicted_change);
    println!("  Future Volatility:    {:.1}%", outputs.future_vol);
    println!("\n{}", outputs.interpretation());
}
