
use std::fs;

use vix_lib::simulation::export::{write_bands_csv, write_replay_csv};
use vix_lib::simulation::pipeline::{simulate_ensemble, summarize_ensemble, MonteCarloProcess};
use vix_lib::{
    default_configs, replay_historical_event, run_monte_carlo, MarketTrend, MonteCarloConfig,
    RegimeConfig, RegimeSimulator, SimulatedPath, SimulationConfig, VixError, VolRegime,
};
use test_utils::{create_test_config, create_verbose_test_config, seeded_rng};

#[test]
fn test_monte_carlo_is_reproducible() {
    let config = create_test_config();
    let (out_a, bands_a) = run_monte_carlo(&config).unwrap();
    let (out_b, bands_b) = run_monte_carlo(&config).unwrap();
    assert_eq!(out_a, out_b);
    assert_eq!(bands_a, bands_b);

    let mut shifted = config.clone();
    shifted.monte_carlo.base_seed += 1;
    let (_, bands_c) = run_monte_carlo(&shifted).unwrap();
    assert_ne!(bands_a.vix_mean, bands_c.vix_mean);
}

#[test]
fn test_band_shapes_and_ordering() {
    let config = create_verbose_test_config();
    let (_, bands) = run_monte_carlo(&config).unwrap();

    assert_eq!(bands.model, "mean_reversion");
    assert_eq!(bands.paths, 200);
    assert_eq!(bands.horizon(), config.inputs.horizon_days);
    assert_eq!(bands.vix_quantiles.len(), 3);

    let lo = bands.vix_band(0.1).unwrap();
    let mid = bands.vix_band(0.5).unwrap();
    let hi = bands.vix_band(0.9).unwrap();
    for day in 0..bands.horizon() {
        assert!(lo[day] <= mid[day] && mid[day] <= hi[day], "day {}", day);
        assert!(bands.vix_mean[day].is_finite());
    }
    // Every path shares the seed values
    assert_eq!(lo[0], hi[0]);
    assert!(bands.vol_band(0.5).is_some());
    assert!(bands.vix_band(0.99).is_none());
    assert!(bands.terminal_vix.min <= bands.terminal_vix.max);
}

#[test]
fn test_ensemble_paths_match_individual_seeds() {
    let sim = RegimeSimulator::new(RegimeConfig::new(MarketTrend::Crash, VolRegime::High, 10.0, 30));
    let paths = simulate_ensemble(&sim, 5, 1000).unwrap();
    assert_eq!(paths.len(), 5);

    let third = vix_lib::models::regime::simulate_regime(&sim.config, &mut seeded_rng(1002)).unwrap();
    assert_eq!(paths[2], third);
}

#[test]
fn test_process_with_regime_model() {
    let config = MonteCarloConfig {
        paths: 100,
        quantiles: vec![0.05, 0.95],
        base_seed: 9,
    };
    let sim = RegimeSimulator::new(RegimeConfig::default());
    let bands = MonteCarloProcess::new(Box::new(sim), config).with_paths(40).run().unwrap();
    assert_eq!(bands.model, "regime");
    assert_eq!(bands.paths, 40);
    assert_eq!(bands.horizon(), 60);
}

#[test]
fn test_summarize_rejects_bad_ensembles() {
    assert!(matches!(
        summarize_ensemble("m", &[], &[0.5]),
        Err(VixError::InvalidParameter(_))
    ));

    let a = SimulatedPath::new(vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();
    let b = SimulatedPath::new(vec![1.0], vec![1.0]).unwrap();
    assert!(matches!(
        summarize_ensemble("m", &[a, b], &[0.5]),
        Err(VixError::LengthMismatch { axis: 2, values: 1 })
    ));
}

#[test]
fn test_invalid_monte_carlo_settings() {
    let mut zero_paths = create_test_config();
    zero_paths.monte_carlo.paths = 0;
    assert!(run_monte_carlo(&zero_paths).is_err());

    let mut bad_quantile = create_test_config();
    bad_quantile.monte_carlo.quantiles = vec![0.5, 1.5];
    assert!(run_monte_carlo(&bad_quantile).is_err());

    let mut bad_noise = create_test_config();
    bad_noise.noise_level = -1.0;
    assert!(matches!(run_monte_carlo(&bad_noise), Err(VixError::Config(_))));
}

#[test]
fn test_presets() {
    assert!(default_configs::interactive().seed.is_none());
    assert!(default_configs::interactive().clamp_to_ui_bounds);
    assert_eq!(default_configs::reproducible().seed, Some(42));
    assert_eq!(default_configs::monte_carlo().monte_carlo.paths, 5000);
    assert_eq!(default_configs::minimal().monte_carlo.quantiles, vec![0.1, 0.5, 0.9]);

    for config in [
        default_configs::interactive(),
        default_configs::reproducible(),
        default_configs::monte_carlo(),
        default_configs::minimal(),
    ] {
        config.validate().unwrap();
    }
}

#[test]
fn test_clamping_config_accepts_out_of_range_inputs() {
    let mut config = default_configs::interactive();
    config.inputs.vix = 500.0;
    config.inputs.mean_rev_speed = 0.0;
    let inputs = config.prepared_inputs().unwrap();
    assert_eq!(inputs.vix, 50.0);
    assert_eq!(inputs.mean_rev_speed, 0.1);

    config.clamp_to_ui_bounds = false;
    assert!(config.prepared_inputs().is_err());
}

#[test]
fn test_toml_config() {
    let config = SimulationConfig::from_toml_str(
        r#"
        seed = 7
        noise_level = 0.2

        [inputs]
        vix = 28.0

        [regime]
        trend = "crash"
        regime = "extreme"

        [monte_carlo]
        paths = 25
        "#,
    )
    .unwrap();

    assert_eq!(config.seed, Some(7));
    assert_eq!(config.noise_level, 0.2);
    assert_eq!(config.inputs.vix, 28.0);
    assert_eq!(config.inputs.recent_vol, 12.0);
    assert_eq!(config.regime.trend, MarketTrend::Crash);
    assert_eq!(config.regime.regime, VolRegime::Extreme);
    assert_eq!(config.regime.days, 60);
    assert_eq!(config.monte_carlo.paths, 25);
    assert_eq!(config.monte_carlo.quantiles, vec![0.05, 0.5, 0.95]);

    let empty = SimulationConfig::from_toml_str("").unwrap();
    assert_eq!(empty, SimulationConfig::default());

    assert!(SimulationConfig::from_toml_str("[monte_carlo]\npaths = 0").is_err());
    assert!(SimulationConfig::from_toml_str("[inputs]\nmean_rev_speed = 2.0").is_err());
    assert!(SimulationConfig::from_toml_str("seed = \"abc\"").is_err());
}

#[test]
fn test_config_file_roundtrip() {
    let dir = std::env::temp_dir().join("vix_lib_pipeline_tests");
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("config.toml");
    fs::write(&file, "seed = 3\n[monte_carlo]\npaths = 10\n").unwrap();

    let config = SimulationConfig::from_file(&file).unwrap();
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.monte_carlo.paths, 10);

    assert!(SimulationConfig::from_file(dir.join("missing.toml")).is_err());
}

#[test]
fn test_csv_exports_parse_back() {
    let (_, bands) = run_monte_carlo(&create_test_config()).unwrap();
    let mut buf = Vec::new();
    write_bands_csv(&bands, &mut buf).unwrap();

    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["day", "vix_mean", "vol_mean", "vix_q10", "vix_q50", "vix_q90", "vol_q10", "vol_q50", "vol_q90"]
    );
    assert_eq!(reader.records().count(), bands.horizon());

    let replay = replay_historical_event("flash", &mut seeded_rng(1)).unwrap();
    let mut buf = Vec::new();
    write_replay_csv(&replay, &mut buf).unwrap();
    let mut reader = csv::Reader::from_reader(buf.as_slice());
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[0], "-20");
    let vix: f64 = first[1].parse().unwrap();
    assert_eq!(vix, replay.vix[0]);
}
