use rand::rngs::StdRng;
use rand::SeedableRng;
use vix_lib::{
    analyze, default_configs, simulate_market_scenario, MarketTrend, RegimeConfig,
    ScenarioPreset, VolRegime,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("vix-lib Default Configuration Examples\n");

    // 1. Interactive configuration
    println!("1. Interactive Configuration (exploration):");
    let interactive = default_configs::interactive();
    println!("   Seed: {:?}", interactive.seed);
    println!("   Noise level: {}", interactive.noise_level);
    println!("   Clamp to slider ranges: {}", interactive.clamp_to_ui_bounds);
    println!("   Use case: trying out parameters by hand\n");

    // 2. Reproducible configuration
    println!("2. Reproducible Configuration:");
    let reproducible = default_configs::reproducible();
    println!("   Seed: {:?}", reproducible.seed);
    println!("   Use case: tests, documentation, sharing a scenario\n");

    // 3. Monte Carlo configuration
    println!("3. Monte Carlo Configuration (confidence bands):");
    let mc = default_configs::monte_carlo();
    println!("   Paths: {}", mc.monte_carlo.paths);
    println!("   Quantiles: {:?}", mc.monte_carlo.quantiles);
    println!("   Base seed: {}\n", mc.monte_carlo.base_seed);

    // 4. Minimal configuration
    println!("4. Minimal Configuration (quick validation):");
    let minimal = default_configs::minimal();
    println!("   Paths: {}", minimal.monte_carlo.paths);
    println!("   Quantiles: {:?}\n", minimal.monte_carlo.quantiles);

    // Scenario presets through the expected-value model
    println!("Scenario presets:");
    for preset in ScenarioPreset::ALL {
        let outputs = analyze(&preset.inputs())?;
        println!(
            "   {:<12} expected VIX {:>5.1}  deviation {:>+5.1}  {}",
            preset.name(),
            outputs.expected_vix,
            outputs.vix_deviation,
            outputs.sentiment
        );
    }

    // One regime scenario with the reproducible seed
    println!("\nRunning a crash scenario with the reproducible config...");
    let mut rng = StdRng::seed_from_u64(reproducible.seed.unwrap_or(42));
    let scenario = RegimeConfig::new(MarketTrend::Crash, VolRegime::Normal, 10.0, 60);
    let (_, summary) = simulate_market_scenario(&scenario, &mut rng)?;
    println!("   Average VIX: {:.2}%", summary.vix.mean);
    println!("   Average Premium: {:.2}%", summary.mean_premium);
    println!("   VIX Range: {:.2}%", summary.vix.range);

    Ok(())
}
