
use vix_lib::{
    analyze, expected_vix, mean_reversion_adjustment, predict_future_volatility, InputBounds,
    ModelInputs, ScenarioPreset, Sentiment, VixError, VixLevelBand, SENTIMENT_THRESHOLD,
};
use test_utils::{approx_eq, sample_inputs, EPS};

/// Worked example: 12 / 16 / 0.25 / 3.5 with VIX 25
#[test]
fn test_worked_example() {
    let outputs = analyze(&sample_inputs(25.0)).expect("valid inputs");

    assert!(approx_eq(outputs.mean_rev_adjustment, 1.0, EPS));
    assert!(approx_eq(outputs.expected_vix, 16.5, EPS));
    assert!(approx_eq(outputs.vix_deviation, 8.5, EPS));
    assert_eq!(outputs.sentiment, Sentiment::Fear);
    // 1.0 + 0.5 * 8.5
    assert!(approx_eq(outputs.predicted_change, 5.25, EPS));
    assert!(approx_eq(outputs.future_vol, 17.25, EPS));
}

#[test]
fn test_component_formulas() {
    assert!(approx_eq(mean_reversion_adjustment(12.0, 16.0, 0.25), 1.0, EPS));
    assert!(approx_eq(mean_reversion_adjustment(20.0, 16.0, 0.5), -2.0, EPS));
    assert!(approx_eq(expected_vix(12.0, 1.0, 3.5), 16.5, EPS));

    // deviation 12.5 - 16.5 = -4, change = 1.0 + 0.5 * -4
    let (future_vol, change) = predict_future_volatility(12.0, 12.5, 16.5, 1.0);
    assert!(approx_eq(change, -1.0, EPS));
    assert!(approx_eq(future_vol, 11.0, EPS));
}

/// expected_vix + deviation reproduces the VIX for a sweep of inputs
#[test]
fn test_deviation_identity() {
    for recent_vol in [5.0, 12.0, 27.5, 50.0] {
        for vix in [5.0, 16.0, 33.3, 50.0] {
            for speed in [0.1, 0.25, 0.5, 1.0] {
                let inputs = ModelInputs {
                    recent_vol,
                    vix,
                    mean_rev_speed: speed,
                    ..ModelInputs::default()
                };
                let out = analyze(&inputs).unwrap();
                assert!(approx_eq(out.expected_vix + out.vix_deviation, vix, EPS));
                assert!(approx_eq(
                    out.future_vol,
                    recent_vol + out.predicted_change,
                    EPS
                ));
            }
        }
    }
}

#[test]
fn test_sentiment_boundaries_are_strict() {
    assert_eq!(Sentiment::classify(SENTIMENT_THRESHOLD), Sentiment::Normal);
    assert_eq!(Sentiment::classify(-SENTIMENT_THRESHOLD), Sentiment::Normal);
    assert_eq!(Sentiment::classify(5.0 + 1e-9), Sentiment::Fear);
    assert_eq!(Sentiment::classify(-5.0 - 1e-9), Sentiment::Complacency);
    assert_eq!(Sentiment::classify(0.0), Sentiment::Normal);

    // Expected VIX is 16.5 for the sample inputs
    assert_eq!(analyze(&sample_inputs(21.5)).unwrap().sentiment, Sentiment::Normal);
    assert_eq!(analyze(&sample_inputs(11.5)).unwrap().sentiment, Sentiment::Normal);
    assert_eq!(analyze(&sample_inputs(10.0)).unwrap().sentiment, Sentiment::Complacency);
}

#[test]
fn test_sentiment_labels() {
    assert_eq!(Sentiment::Fear.to_string(), "HIGH (Market Fear)");
    assert_eq!(Sentiment::Normal.to_string(), "NORMAL");
    assert_eq!(Sentiment::Complacency.to_string(), "LOW (Market Complacency)");
}

#[test]
fn test_vix_level_bands() {
    assert_eq!(VixLevelBand::classify(11.9), VixLevelBand::Low);
    assert_eq!(VixLevelBand::classify(12.0), VixLevelBand::Normal);
    assert_eq!(VixLevelBand::classify(20.0), VixLevelBand::Elevated);
    assert_eq!(VixLevelBand::classify(30.0), VixLevelBand::High);
}

#[test]
fn test_presets_produce_expected_sentiment() {
    let sentiment = |p: ScenarioPreset| analyze(&p.inputs()).unwrap().sentiment;

    assert_eq!(sentiment(ScenarioPreset::Default), Sentiment::Normal);
    assert_eq!(sentiment(ScenarioPreset::Fear), Sentiment::Fear);
    assert_eq!(sentiment(ScenarioPreset::Complacency), Sentiment::Complacency);

    for preset in ScenarioPreset::ALL {
        let parsed: ScenarioPreset = preset.name().parse().unwrap();
        assert_eq!(parsed, preset);
    }
    assert!("panic".parse::<ScenarioPreset>().is_err());
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let cases = [
        ModelInputs { recent_vol: f64::NAN, ..ModelInputs::default() },
        ModelInputs { vix: 0.0, ..ModelInputs::default() },
        ModelInputs { vix: f64::INFINITY, ..ModelInputs::default() },
        ModelInputs { mean_rev_speed: 0.0, ..ModelInputs::default() },
        ModelInputs { mean_rev_speed: 1.5, ..ModelInputs::default() },
        ModelInputs { mean_rev_level: -1.0, ..ModelInputs::default() },
        ModelInputs { premium_factor: f64::NAN, ..ModelInputs::default() },
        ModelInputs { horizon_days: 0, ..ModelInputs::default() },
    ];
    for inputs in cases {
        let err = analyze(&inputs).unwrap_err();
        assert!(
            matches!(err, VixError::InvalidParameter(_)),
            "expected InvalidParameter for {:?}, got {:?}",
            inputs,
            err
        );
    }
}

#[test]
fn test_input_bounds_clamp() {
    let bounds = InputBounds::ui();
    let wild = ModelInputs {
        recent_vol: 120.0,
        vix: f64::NAN,
        mean_rev_speed: 0.9,
        mean_rev_level: 3.0,
        premium_factor: 3.5,
        horizon_days: 365,
    };
    assert!(!bounds.contains(&wild));

    let clamped = bounds.clamp(&wild);
    assert!(bounds.contains(&clamped));
    assert_eq!(clamped.recent_vol, 50.0);
    assert_eq!(clamped.vix, 5.0);
    assert_eq!(clamped.mean_rev_speed, 0.5);
    assert_eq!(clamped.mean_rev_level, 10.0);
    assert_eq!(clamped.horizon_days, 90);
    assert!(bounds.contains(&ModelInputs::default()));
}

#[test]
fn test_interpretation_mentions_sentiment() {
    let fear = analyze(&sample_inputs(25.0)).unwrap();
    let normal = analyze(&sample_inputs(16.5)).unwrap();
    assert_ne!(fear.interpretation(), normal.interpretation());
    assert!(!fear.interpretation().is_empty());
}
