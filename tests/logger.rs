use stumpboost::prelude::*;
use stumpboost::research::{
    Logger,
    ExponentialLoss,
    ObjectiveFunction,
    zero_one_loss,
};


/// Tests for `Logger`.
#[cfg(test)]
pub mod logger_tests {
    use super::*;

    fn train() -> (Sample, Vec<i64>) {
        let sample = Sample::from_rows(vec![
            vec![0.0, 3.0],
            vec![1.0, 1.0],
            vec![2.0, 2.0],
            vec![3.0, 0.0],
            vec![4.0, 4.0],
            vec![5.0, 5.0],
        ]).unwrap();
        (sample, vec![-1, 1, -1, 1, -1, 1])
    }

    fn log_file(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir()
            .join(format!("stumpboost-{tag}-{}.csv", std::process::id()))
    }

    #[test]
    fn writes_one_line_per_round() {
        let (sample, target) = train();
        let path = log_file("quiet");

        let booster = AdaBoost::init(&sample, &target)
            .n_estimators(4);
        let mut logger = Logger::new(
            booster,
            DecisionStump::init(),
            ExponentialLoss::new(),
            zero_one_loss,
            (&sample, &target),
            (&sample, &target),
        )
        .print_every(usize::MAX);
        let f = logger.run(&path).unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(f.len(), 4);

        let mut lines = log.lines();
        assert_eq!(
            lines.next(),
            Some("ObjectiveValue,TrainLoss,TestLoss,Time")
        );
        let rows = lines.collect::<Vec<_>>();
        assert_eq!(rows.len(), 4);
        for row in rows {
            let values = row.split(',').collect::<Vec<_>>();
            assert_eq!(values.len(), 4);
            let train = values[1].parse::<f64>().unwrap();
            let test = values[2].parse::<f64>().unwrap();
            assert!((0.0..=1.0).contains(&train));
            assert_eq!(train, test);
        }
    }

    #[test]
    fn verbose_run_matches_booster_run() {
        let (sample, target) = train();
        let path = log_file("verbose");

        let booster = AdaBoost::init(&sample, &target)
            .n_estimators(3);
        let mut logger = Logger::new(
            booster,
            DecisionStump::init(),
            ExponentialLoss::new(),
            zero_one_loss,
            (&sample, &target),
            (&sample, &target),
        )
        .print_every(1);
        let f = logger.run(&path).unwrap();

        let log = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(log.lines().count(), 1 + 3);
        assert_eq!(logger.booster().ensemble().len(), 3);

        let mut clf = AdaBoostClassifier::new(3);
        clf.fit(&sample, &target).unwrap();
        assert_eq!(&f, clf.ensemble());
    }

    #[test]
    fn invalid_labels_are_reported() {
        let (sample, _) = train();
        let target = vec![-1, 1, -1, 1, 2, 1];
        let path = log_file("invalid");

        let booster = AdaBoost::init(&sample, &target);
        let mut logger = Logger::new(
            booster,
            DecisionStump::init(),
            ExponentialLoss::new(),
            zero_one_loss,
            (&sample, &target),
            (&sample, &target),
        );
        let err = logger.run(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);

        assert!(matches!(err, BoostError::InvalidLabel { index: 4, .. }));
    }

    #[test]
    fn exponential_loss() {
        let (sample, target) = train();
        let f = WeightedMajority::<StumpClassifier>::new();

        // An empty ensemble has margin 0 on every example.
        let loss = ExponentialLoss::new();
        assert_eq!(loss.objective_value(&sample, &target, &f), 1.0);
        assert_eq!(zero_one_loss(&sample, &target, &f), 0.5);
    }
}
