use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use stumpboost::prelude::*;


/// Tests for `DecisionStump`.
#[cfg(test)]
pub mod dstump_tests {
    use super::*;

    fn separable() -> (Sample, Vec<i64>) {
        let sample = Sample::from_rows(vec![
            vec![ 0.0],
            vec![ 1.0],
            vec![10.0],
            vec![11.0],
        ]).unwrap();
        (sample, vec![-1, -1, 1, 1])
    }

    fn alternating() -> (Sample, Vec<i64>) {
        let sample = Sample::from_rows(vec![
            vec![0.0],
            vec![1.0],
            vec![2.0],
            vec![3.0],
        ]).unwrap();
        (sample, vec![-1, 1, -1, 1])
    }

    fn random_sample(seed: u64, n_sample: usize, n_feature: usize)
        -> (Sample, Vec<i64>)
    {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = (0..n_sample)
            .map(|_| {
                (0..n_feature).map(|_| rng.gen_range(-5.0..5.0))
                    .collect::<Vec<f64>>()
            })
            .collect::<Vec<_>>();
        let target = (0..n_sample)
            .map(|_| if rng.gen_bool(0.5) { 1 } else { -1 })
            .collect::<Vec<i64>>();
        (Sample::from_rows(rows).unwrap(), target)
    }

    #[test]
    fn separable_sample() {
        let (sample, target) = separable();
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();

        assert_eq!(h.predict_all(&sample), target);
        assert_eq!(h.feature_index, 0);
        assert_eq!(h.positive_side, PositiveSide::RHS);
    }

    #[test]
    fn last_minimal_threshold_wins() {
        // Thresholds 1.1, 2.2, ..., 9.9 all separate the sample.
        let (sample, target) = separable();
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .n_steps(10)
            .fit(&sample, &target, &weights)
            .unwrap();

        assert!(
            (h.threshold - 9.9).abs() < 1e-9,
            "expected threshold 9.9, got {}", h.threshold
        );
    }

    #[test]
    fn last_minimal_feature_wins() {
        let sample = Sample::from_rows(vec![
            vec![ 0.0,  0.0],
            vec![ 1.0,  1.0],
            vec![10.0, 10.0],
            vec![11.0, 11.0],
        ]).unwrap();
        let target = vec![-1, -1, 1, 1];
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();
        assert_eq!(h.feature_index, 1);
    }

    #[test]
    fn selects_informative_feature() {
        let sample = Sample::from_rows(vec![
            vec![5.0,  0.0],
            vec![1.0,  1.0],
            vec![4.0, 10.0],
            vec![2.0, 11.0],
        ]).unwrap();
        let target = vec![-1, -1, 1, 1];
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();

        assert_eq!(h.feature_index, 1);
        assert_eq!(h.predict_all(&sample), target);
    }

    #[test]
    fn uniform_weights() {
        let (sample, target) = alternating();
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();

        let predictions = h.predict_all(&sample);
        assert_eq!(predictions, vec![-1, -1, -1, 1]);
        assert_eq!(h.positive_side, PositiveSide::RHS);

        let error = weighted_error_rate(&target, &predictions, &weights);
        assert_eq!(error, 0.25);
    }

    #[test]
    fn weights_change_the_stump() {
        let (sample, target) = alternating();
        let weights = vec![1.0, 10.0, 1.0, 1.0];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();

        let predictions = h.predict_all(&sample);
        assert_eq!(predictions, vec![-1, 1, 1, 1]);

        let error = weighted_error_rate(&target, &predictions, &weights);
        assert!((error - 1.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn produce_equals_fit() {
        let (sample, target) = random_sample(1234, 50, 3);
        let weights = vec![1.0; 50];

        let wl = DecisionStump::init();
        let h1 = wl.fit(&sample, &target, &weights).unwrap();
        let h2 = wl.produce(&sample, &target, &weights).unwrap();
        assert_eq!(h1, h2);
    }

    #[test]
    fn predictions_are_binary() {
        let (sample, target) = random_sample(42, 100, 5);
        let weights = vec![1.0; 100];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();

        let (test, _) = random_sample(7, 30, 5);
        let predictions = h.predict_all(&test);

        assert_eq!(predictions.len(), 30);
        assert!(predictions.iter().all(|&p| p == 1 || p == -1));
    }

    #[test]
    fn target_length_mismatch() {
        let (sample, _) = separable();
        let err = DecisionStump::init()
            .fit(&sample, &[1, -1, 1], &[1.0; 4])
            .unwrap_err();
        assert!(matches!(
            err,
            BoostError::TargetLengthMismatch { n_sample: 4, n_target: 3 }
        ));
    }

    #[test]
    fn weight_length_mismatch() {
        let (sample, target) = separable();
        let err = DecisionStump::init()
            .fit(&sample, &target, &[1.0; 5])
            .unwrap_err();
        assert!(matches!(
            err,
            BoostError::WeightLengthMismatch { n_sample: 4, n_weight: 5 }
        ));
    }

    #[test]
    fn empty_sample() {
        let sample = Sample::from_rows(Vec::new()).unwrap();
        let err = DecisionStump::init()
            .fit(&sample, &[], &[])
            .unwrap_err();
        assert!(matches!(err, BoostError::EmptySample));
    }

    #[test]
    fn constant_feature() {
        let sample = Sample::from_rows(vec![vec![3.0]; 4]).unwrap();
        let target = vec![1, 1, -1, 1];
        let weights = vec![1.0; 4];

        let h = DecisionStump::init()
            .fit(&sample, &target, &weights)
            .unwrap();
        assert_eq!(h.predict_all(&sample), vec![1; 4]);
    }

    #[test]
    fn steps_setting() {
        assert_eq!(DecisionStump::init().steps(), 10);
        assert_eq!(DecisionStump::init().n_steps(4).steps(), 4);
    }

    #[test]
    #[should_panic]
    fn zero_steps() {
        let _ = DecisionStump::init().n_steps(0);
    }
}
