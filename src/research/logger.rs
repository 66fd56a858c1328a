use colored::{ColoredString, Colorize};

use crate::{
    Sample,
    Booster,
    WeakLearner,
    Classifier,
    Result,
};
use super::objective_functions::ObjectiveFunction;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

const DEFAULT_ROUND: usize = 100;
const DEFAULT_TIMELIMIT_MILLIS: u128 = u128::MAX;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "ObjectiveValue,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use [`Logger`] to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The combined hypothesis type.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each step of boosting.
///
/// # Example
/// ```no_run
/// use stumpboost::prelude::*;
/// use stumpboost::research::{Logger, ExponentialLoss, zero_one_loss};
///
/// let (train, train_target) = SampleReader::new()
///     .file("/path/to/train.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// let (test, test_target) = SampleReader::new()
///     .file("/path/to/test.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let booster = AdaBoost::init(&train, &train_target)
///     .n_estimators(100);
/// let weak_learner = DecisionStump::init();
///
/// let mut logger = Logger::new(
///     booster,
///     weak_learner,
///     ExponentialLoss::new(),
///     zero_one_loss,
///     (&train, &train_target),
///     (&test, &test_target),
/// )
/// .print_every(10);
/// let f = logger.run("adaboost.csv").unwrap();
/// ```
pub struct Logger<'a, B, W, F, G> {
    booster: B,
    weak_learner: W,
    objective_func: F,
    loss_func: G,
    train: (&'a Sample, &'a [i64]),
    test: (&'a Sample, &'a [i64]),
    time_limit: u128,
    round: usize,
}


impl<'a, B, W, F, G> Logger<'a, B, W, F, G> {
    /// Create a new instance of `Logger`.
    /// `train` and `test` are pairs of a sample and its labels.
    pub fn new(
        booster: B,
        weak_learner: W,
        objective_func: F,
        loss_func: G,
        train: (&'a Sample, &'a [i64]),
        test: (&'a Sample, &'a [i64]),
    ) -> Self
    {
        Self {
            booster,
            weak_learner,
            objective_func,
            loss_func,
            train,
            test,
            time_limit: DEFAULT_TIMELIMIT_MILLIS,
            round: DEFAULT_ROUND,
        }
    }


    /// Returns the booster this logger runs.
    pub fn booster(&self) -> &B {
        &self.booster
    }
}


impl<H, B, W, F, G, O, S> Logger<'_, B, W, F, G>
    where B: Booster<H, Output = O> + CurrentHypothesis<Output = S>,
          S: Classifier,
          W: WeakLearner<Hypothesis = H>,
          F: ObjectiveFunction,
          G: Fn(&Sample, &[i64], &S) -> f64,
{
    /// Set the time limit for boosting algorithm as milliseconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_millis(mut self, time_limit: u128) -> Self {
        self.time_limit = time_limit;
        self
    }


    /// Set the time limit for boosting algorithm as seconds.
    /// If the boosting algorithm reaches this limit,
    /// breaks immediately.
    #[inline(always)]
    pub fn time_limit_as_secs(mut self, time_limit: u64) -> Self {
        self.time_limit = (time_limit as u128) * 1_000_u128;
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "OBJ.".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "VALUE".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    #[inline(always)]
    fn print_info(key: &str, info: Option<Vec<(&str, String)>>) {
        println!("+ {:<STAT_WIDTH$}", key.bold());
        if let Some(info) = info {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let limit = if self.time_limit != u128::MAX {
            time_format(self.time_limit)
        } else {
            "Nothing".into()
        };
        println!(
            "\n{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );
        Self::print_info("Booster params", self.booster.info());

        println!(
            "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Weak Learner".bold(),
            self.weak_learner.name().bold().green(),
        );
        Self::print_info("Weak Learner params", self.weak_learner.info());

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Objective".bold(),
            self.objective_func.name().bold().green(),
            "Time Limit".bold(),
            limit.bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::run`.
    /// This method measures running time per iteration
    /// and writes one CSV line per round to `filename`.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<O> {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess()?;
        let verbose = self.round != usize::MAX;
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // The round and the values logged most recently.
        let mut last_log = None;

        // ---------------------------------------------------------------------
        // Boosting step
        let flow = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(&self.weak_learner, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            // Update the cumulative time
            time_acc += time;

            // No hypothesis was added in this iteration.
            if flow.is_break() {
                if let (true, ControlFlow::Break(Ok(_)), Some((round, values)))
                    = (verbose, &flow, last_log)
                {
                    let tag = "[FIN]".bold().bright_green();
                    print_round(tag, round, values, time_acc);
                }
                return flow;
            }

            let f = self.booster.current_hypothesis();
            let (train, train_target) = self.train;
            let (test, test_target) = self.test;
            let obj = self.objective_func
                .objective_value(train, train_target, &f);
            let train = (self.loss_func)(train, train_target, &f);
            let test = (self.loss_func)(test, test_target, &f);

            // Write the results to `file`.
            let line = format!("{obj},{train},{test},{time_acc}\n");
            if let Err(e) = file.write_all(line.as_bytes()) {
                return ControlFlow::Break(Err(e.into()));
            }

            let values = (obj, train, test);
            last_log = Some((iter, values));
            if time_acc > self.time_limit {
                if verbose {
                    let tag = "[TLE]".bold().bright_red();
                    print_round(tag, iter, values, time_acc);
                }
                return ControlFlow::Break(Ok(iter));
            }

            if verbose && iter % self.round == 0 {
                let tag = "[LOG]".bold().magenta();
                print_round(tag, iter, values, time_acc);
            }
            flow
        });

        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        let f = self.booster.postprocess();
        Ok(f)
    }
}


fn print_round(
    tag: ColoredString,
    iter: usize,
    values: (f64, f64, f64),
    time_acc: u128,
)
{
    let (obj, train, test) = values;
    println!(
        "{} {}\t\t{}\t{}\t{}\t{}",
        tag,
        format!("{:>WIDTH$}", iter).red(),
        format!("{:>WIDTH$.PREC_WIDTH$}", obj).blue(),
        format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
        format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
        time_format(time_acc).bold().cyan(),
    );
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format() {
        assert_eq!(time_format(12), "  0.012s");
        assert_eq!(time_format(3_456), " 03.456s");
        assert_eq!(time_format(125_000), " 02m 05s");
        assert_eq!(time_format(7_380_000), " 02h 03m");
    }
}
