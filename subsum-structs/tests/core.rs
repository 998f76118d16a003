use serde_json::json;
use subsum_structs::core::{BenchmarkSettings, OutputData};
use subsum_utils::{dejsonify, jsonify};

fn settings() -> BenchmarkSettings {
    BenchmarkSettings {
        challenge_id: "c001".to_string(),
        algorithm_id: "memo_branch_bound".to_string(),
        difficulty: vec![40, 100, 50],
        hyperparameters: None,
    }
}

#[test]
fn test_calc_seed() {
    let settings = settings();
    let rand_hash = "random_hash".to_string();

    assert_eq!(
        settings.calc_seed(&rand_hash, 1337),
        settings.calc_seed(&rand_hash, 1337)
    );
    assert_ne!(
        settings.calc_seed(&rand_hash, 1337),
        settings.calc_seed(&rand_hash, 1338)
    );
    assert_ne!(
        settings.calc_seed(&rand_hash, 1337),
        settings.calc_seed(&"other_hash".to_string(), 1337)
    );

    let mut harder = settings.clone();
    harder.difficulty = vec![41, 100, 50];
    assert_ne!(
        settings.calc_seed(&rand_hash, 1337),
        harder.calc_seed(&rand_hash, 1337)
    );
}

#[test]
fn test_settings_hyperparameters_default_to_none() {
    let settings: BenchmarkSettings = dejsonify(
        r#"{"challenge_id":"c001","algorithm_id":"memo_branch_bound","difficulty":[10,50,60]}"#,
    )
    .unwrap();
    assert_eq!(settings.hyperparameters(), None);
    assert_eq!(settings.difficulty, vec![10, 50, 60]);
}

#[test]
fn test_output_data_jsonify() {
    let output_data = OutputData {
        nonce: 7,
        total_weight: 5,
        solution: json!({"items": [0, 2]}).as_object().unwrap().clone(),
    };
    assert_eq!(
        jsonify(&output_data),
        r#"{"nonce":7,"solution":{"items":[0,2]},"total_weight":5}"#
    );
}
