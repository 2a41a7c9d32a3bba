
use rand::distributions::Distribution;
use rand::RngCore;
use rand_distr::StandardNormal;
use vix_lib::models::mean_reversion::{simulate_vix_path, vix_step, vol_step, MeanReversionSimulator};
use vix_lib::{
    analyze, project_vix_path, MeanReversionParams, ModelInputs, PathSimulator, VixError,
    DEFAULT_NOISE_LEVEL, VOL_FLOOR,
};
use test_utils::{assert_finite, assert_floored, sample_inputs, seeded_rng};

fn params(horizon_days: usize) -> MeanReversionParams {
    MeanReversionParams {
        current_vix: 25.0,
        future_vol: 17.25,
        horizon_days,
        mean_rev_level: 16.0,
        mean_rev_speed: 0.25,
        noise_level: DEFAULT_NOISE_LEVEL,
    }
}

#[test]
fn test_path_length_and_seed_values() {
    let mut rng = seeded_rng(1);
    let path = simulate_vix_path(&params(30), &mut rng).unwrap();

    assert_eq!(path.len(), 30);
    assert_eq!(path.vix.len(), path.vol.len());
    assert_eq!(path.vix[0], 25.0);
    assert_eq!(path.vol[0], 17.25);
    assert_finite(&path);
    assert_floored(&path);
}

#[test]
fn test_projection_seeds_from_model() {
    let inputs = sample_inputs(25.0);
    let mut rng = seeded_rng(2);
    let (outputs, path) = project_vix_path(&inputs, DEFAULT_NOISE_LEVEL, &mut rng).unwrap();

    assert_eq!(outputs, analyze(&inputs).unwrap());
    assert_eq!(path.len(), inputs.horizon_days);
    assert_eq!(path.vix[0], inputs.vix);
    assert_eq!(path.vol[0], outputs.future_vol);
}

#[test]
fn test_same_seed_same_path() {
    let a = simulate_vix_path(&params(60), &mut seeded_rng(99)).unwrap();
    let b = simulate_vix_path(&params(60), &mut seeded_rng(99)).unwrap();
    let c = simulate_vix_path(&params(60), &mut seeded_rng(100)).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

/// High noise over many seeds: nothing ever drops below the floor
#[test]
fn test_floor_holds_under_heavy_noise() {
    let mut p = params(90);
    p.current_vix = 6.0;
    p.future_vol = 5.5;
    p.mean_rev_level = 6.0;
    p.noise_level = 2.0;

    for seed in 0..200 {
        let path = simulate_vix_path(&p, &mut seeded_rng(seed)).unwrap();
        assert_floored(&path);
        assert_finite(&path);
    }
}

#[test]
fn test_step_functions_clamp_adversarial_shocks() {
    assert_eq!(vol_step(20.0, 16.0, 0.25, 0.15, -1e6), VOL_FLOOR);
    assert_eq!(vix_step(VOL_FLOOR, 20.0, 0.15, -1e6, -1e6), VOL_FLOOR);
    // No noise: pure mean reversion towards the level
    assert!((vol_step(12.0, 16.0, 0.5, 0.15, 0.0) - 14.0).abs() < 1e-12);
}

#[test]
fn test_single_day_horizon_returns_seed_only() {
    let path = simulate_vix_path(&params(1), &mut seeded_rng(3)).unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.vix, vec![25.0]);
    assert_eq!(path.vol, vec![17.25]);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let mut rng = seeded_rng(4);

    let err = simulate_vix_path(&params(0), &mut rng).unwrap_err();
    assert!(matches!(err, VixError::InvalidParameter(_)));

    let mut nan_vix = params(10);
    nan_vix.current_vix = f64::NAN;
    assert!(simulate_vix_path(&nan_vix, &mut rng).is_err());

    let mut negative_noise = params(10);
    negative_noise.noise_level = -0.1;
    assert!(simulate_vix_path(&negative_noise, &mut rng).is_err());

    let mut slow = params(10);
    slow.mean_rev_speed = 0.0;
    assert!(simulate_vix_path(&slow, &mut rng).is_err());

    let inputs = ModelInputs { horizon_days: 0, ..ModelInputs::default() };
    assert!(project_vix_path(&inputs, DEFAULT_NOISE_LEVEL, &mut rng).is_err());
}

/// A negative volatility forecast is a valid seed; later days are floored
#[test]
fn test_negative_forecast_seed_is_kept() {
    let mut p = params(5);
    p.future_vol = -3.0;
    let path = simulate_vix_path(&p, &mut seeded_rng(5)).unwrap();
    assert_eq!(path.vol[0], -3.0);
    assert_floored(&path);
}

#[test]
fn test_simulator_trait_object() {
    let sim: Box<dyn PathSimulator> = Box::new(MeanReversionSimulator::new(params(20)));
    assert_eq!(sim.name(), "mean_reversion");
    assert_eq!(sim.horizon(), 20);
    sim.validate().unwrap();

    let via_trait = sim.simulate(&mut seeded_rng(6)).unwrap();
    let direct = simulate_vix_path(&params(20), &mut seeded_rng(6)).unwrap();
    assert_eq!(via_trait, direct);
}

/// Rebuilds the recurrence by hand from a clone of the generator: per day
/// the draws are z_vol, z_premium, z_vix, and the VIX uses the new vol.
#[test]
fn test_path_matches_hand_computed_recurrence() {
    let p = params(40);
    let mut rng = seeded_rng(7);
    let mut reference = rng.clone();
    let path = simulate_vix_path(&p, &mut rng).unwrap();

    let mut prev_vol = p.future_vol;
    let mut prev_vix = p.current_vix;
    for day in 1..p.horizon_days {
        let z_vol: f64 = StandardNormal.sample(&mut reference);
        let z_premium: f64 = StandardNormal.sample(&mut reference);
        let z_vix: f64 = StandardNormal.sample(&mut reference);

        let vol = (prev_vol + (p.mean_rev_level - prev_vol) * p.mean_rev_speed
            + p.noise_level * prev_vol * z_vol)
            .max(5.0);
        let vix = (vol + 3.5 + 0.2 * z_premium + p.noise_level * prev_vix * z_vix).max(5.0);

        assert!((path.vol[day] - vol).abs() < 1e-9, "vol differs on day {}", day);
        assert!((path.vix[day] - vix).abs() < 1e-9, "vix differs on day {}", day);
        prev_vol = vol;
        prev_vix = vix;
    }

    // Exactly three draws per day were consumed
    assert_eq!(rng.next_u64(), reference.next_u64());
}
