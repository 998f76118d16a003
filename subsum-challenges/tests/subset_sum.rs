use serde_json::json;
use subsum_challenges::subset_sum::{Challenge, Difficulty, Solution};

fn difficulty() -> Difficulty {
    Difficulty {
        num_items: 50,
        max_item_weight: 100,
        fill_percent: 40,
    }
}

#[test]
fn test_difficulty_from_vec() {
    let d = Difficulty::try_from(vec![50, 100, 40]).unwrap();
    assert_eq!(d, difficulty());
    assert_eq!(Vec::<i32>::from(d), vec![50, 100, 40]);
    assert!(Difficulty::try_from(vec![50, 100]).is_err());
    assert!(Difficulty::try_from(vec![50, -1, 40]).is_err());
}

#[test]
fn test_new_rejects_unsorted_weights() {
    assert!(Challenge::new(10, vec![1, 2, 2, 7]).is_ok());
    assert!(Challenge::new(10, vec![]).is_ok());
    let err = Challenge::new(10, vec![1, 5, 3]).unwrap_err();
    assert!(err.to_string().contains("weight 1 (5)"));
}

#[test]
fn test_generate_instance() {
    let seed = [7u8; 32];
    let a = Challenge::generate_instance(&seed, &difficulty()).unwrap();
    let b = Challenge::generate_instance(&seed, &difficulty()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.num_items(), 50);
    assert!(a.weights.windows(2).all(|w| w[0] <= w[1]));
    assert!(a.weights.iter().all(|&w| (1..=100).contains(&w)));
    let total: u32 = a.weights.iter().sum();
    assert_eq!(a.capacity, total * 40 / 100);

    let c = Challenge::generate_instance(&[8u8; 32], &difficulty()).unwrap();
    assert_ne!(a.weights, c.weights);
}

#[test]
fn test_generate_instance_rejects_bad_difficulty() {
    let seed = [0u8; 32];
    let mut d = difficulty();
    d.num_items = 0;
    assert!(Challenge::generate_instance(&seed, &d).is_err());
    let mut d = difficulty();
    d.max_item_weight = 0;
    assert!(Challenge::generate_instance(&seed, &d).is_err());
    let mut d = difficulty();
    d.fill_percent = 101;
    assert!(Challenge::generate_instance(&seed, &d).is_err());
}

#[test]
fn test_evaluate_total_weight() {
    let challenge = Challenge::new(5, vec![1, 2, 4]).unwrap();
    assert_eq!(
        challenge
            .evaluate_total_weight(&Solution { items: vec![0, 2] })
            .unwrap(),
        5
    );
    assert_eq!(
        challenge.evaluate_total_weight(&Solution::new()).unwrap(),
        0
    );
    assert!(challenge
        .evaluate_total_weight(&Solution { items: vec![0, 0] })
        .is_err());
    assert!(challenge
        .evaluate_total_weight(&Solution { items: vec![3] })
        .is_err());
    assert!(challenge
        .evaluate_total_weight(&Solution { items: vec![1, 2] })
        .is_err());
}

#[test]
fn test_greedy_baseline() {
    // heaviest first: 4 fits, 2 does not, 1 does
    let challenge = Challenge::new(5, vec![1, 2, 4]).unwrap();
    assert_eq!(
        challenge.compute_greedy_baseline().unwrap(),
        Solution { items: vec![0, 2] }
    );
    // greedy takes 5 and misses 3 + 3
    let challenge = Challenge::new(6, vec![3, 3, 5]).unwrap();
    assert_eq!(
        challenge.compute_greedy_baseline().unwrap(),
        Solution { items: vec![2] }
    );
}

#[test]
fn test_verify_solution() {
    let challenge = Challenge::new(6, vec![3, 3, 5]).unwrap();
    assert!(challenge
        .verify_solution(&Solution { items: vec![0, 1] })
        .is_ok());
    assert!(challenge
        .verify_solution(&Solution { items: vec![2] })
        .is_ok());
    assert!(challenge
        .verify_solution(&Solution { items: vec![1, 0] })
        .is_err());
    assert!(challenge
        .verify_solution(&Solution { items: vec![0] })
        .is_err());
    assert!(challenge
        .verify_solution(&Solution {
            items: vec![0, 1, 2]
        })
        .is_err());
}

#[test]
fn test_solution_from_map() {
    let map = json!({"items": [1, 4]}).as_object().unwrap().clone();
    assert_eq!(
        Solution::try_from(map).unwrap(),
        Solution { items: vec![1, 4] }
    );
    let map = json!({"items": "nope"}).as_object().unwrap().clone();
    assert!(Solution::try_from(map).is_err());
}
