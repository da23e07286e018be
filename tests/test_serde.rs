#![cfg(feature = "serde")]

use std::time::Duration;

use genepool::{
    crossover::Crossover,
    evolution::{LogLevel, RunnerOptions},
    replacement::{ElitistSurvivorReplacement, Replacement},
    selection::{CoupleSelection, TournamentSelection},
    termination::Termination,
};

#[test]
fn test_selection_from_json() {
    let json = r#"{ "Tournament": { "tournament_size": 4, "stochastic": true } }"#;
    let selection: CoupleSelection = serde_json::from_str(json).unwrap();

    assert_eq!(
        selection,
        CoupleSelection::Tournament(TournamentSelection::new(4, true).unwrap())
    );
}

#[test]
fn test_invalid_configs_are_rejected() {
    let selections = [
        r#"{ "Tournament": { "tournament_size": 1, "stochastic": false } }"#,
        r#"{ "Elitist": { "elite_percentage": -0.2, "non_elite_percentage": 0.5 } }"#,
        r#"{ "Boltzmann": { "schedule": {
            "initial_temperature": 0.0,
            "decay_rate": 0.5,
            "decay": "Exponential"
        } } }"#,
    ];
    for json in selections {
        assert!(serde_json::from_str::<CoupleSelection>(json).is_err(), "{}", json);
    }

    let replacements = [
        r#"{ "Tournament": { "tournament_size": 0, "stochastic": true } }"#,
        r#"{ "ElitistSurvivor": { "elite_percentage": 1.5 } }"#,
    ];
    for json in replacements {
        assert!(serde_json::from_str::<Replacement>(json).is_err(), "{}", json);
    }

    let crossover = r#"{ "Uniform": { "mix_probability": 2.0 } }"#;
    assert!(serde_json::from_str::<Crossover>(crossover).is_err());

    let terminations = [
        r#"{ "EpochLength": 0 }"#,
        r#"{ "Duration": { "secs": 0, "nanos": 0 } }"#,
        r#"{ "Stagnation": { "window": 0, "min_improvement": 0.1 } }"#,
    ];
    for json in terminations {
        assert!(serde_json::from_str::<Termination>(json).is_err(), "{}", json);
    }
}

#[test]
fn test_replacement_from_json() {
    let json = r#"[
        { "ElitistSurvivor": { "elite_percentage": 0.1 } },
        { "Boltzmann": { "schedule": {
            "initial_temperature": 2.0,
            "decay_rate": 0.5,
            "decay": "Linear"
        } } }
    ]"#;
    let replacements: Vec<Replacement> = serde_json::from_str(json).unwrap();

    assert_eq!(
        replacements[0],
        Replacement::ElitistSurvivor(ElitistSurvivorReplacement::new(0.1).unwrap())
    );
    match &replacements[1] {
        Replacement::Boltzmann(boltzmann) => {
            assert_eq!(boltzmann.schedule().temperature(2), 1.0);
        }
        other => panic!("unexpected replacement {:?}", other),
    }
}

#[test]
fn test_options_and_termination_round_trip() {
    let options = RunnerOptions::new(Some(12), LogLevel::Verbose);
    let json = serde_json::to_string(&options).unwrap();
    assert_eq!(serde_json::from_str::<RunnerOptions>(&json).unwrap(), options);

    let terminations = vec![
        Termination::epoch_length(50).unwrap(),
        Termination::duration(Duration::from_secs(3)).unwrap(),
        Termination::stagnation(10, 0.01).unwrap(),
    ];
    let json = serde_json::to_string(&terminations).unwrap();
    let restored: Vec<Termination> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, terminations);
}
