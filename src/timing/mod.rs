//! Stack vs heap allocation timing
//!
//! Each run creates `count` values twice: once as plain locals, once as
//! individually boxed values collected into a `Vec` and then dropped. The
//! wall-clock time of both passes is recorded per run.
//!
//! Timings depend on CPU load, allocator state and optimization level, so
//! small fluctuations between runs are expected.

use std::hint::black_box;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Default number of repetitions
pub const DEFAULT_RUNS: u32 = 5;

/// Default number of values per pass
pub const DEFAULT_COUNT: usize = 1_000_000;

/// Value written in both passes
const SAMPLE_VALUE: i32 = 42;

/// How many runs and how many values per pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub runs: u32,
    pub count: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig {
            runs: DEFAULT_RUNS,
            count: DEFAULT_COUNT,
        }
    }
}

impl TimingConfig {
    /// Parse optional `[runs] [count]` positional arguments
    pub fn from_args<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = TimingConfig::default();
        let mut args = args.into_iter();

        if let Some(runs) = args.next() {
            config.runs = parse_positive("runs", runs.as_ref())?;
        }
        if let Some(count) = args.next() {
            config.count = parse_positive("count", count.as_ref())?;
        }
        if let Some(extra) = args.next() {
            return Err(format!("Unexpected argument '{}'", extra.as_ref()));
        }

        Ok(config)
    }
}

fn parse_positive<T>(name: &str, text: &str) -> Result<T, String>
where
    T: FromStr + Default + PartialEq,
{
    match text.replace('_', "").parse::<T>() {
        Ok(n) if n == T::default() => Err(format!("{} must be greater than zero", name)),
        Ok(n) => Ok(n),
        Err(_) => Err(format!(
            "Invalid {} '{}': expected a positive integer that fits in {}",
            name,
            text,
            std::any::type_name::<T>()
        )),
    }
}

/// Create and discard `count` locals
pub fn measure_stack(count: usize) -> Duration {
    let start = Instant::now();
    for _ in 0..count {
        let x = black_box(SAMPLE_VALUE);
        black_box(&x);
    }
    start.elapsed()
}

/// Box `count` values, keep them alive together, then drop them all
pub fn measure_heap(count: usize) -> Duration {
    let start = Instant::now();
    let mut values: Vec<Box<i32>> = Vec::new();
    for _ in 0..count {
        values.push(Box::new(black_box(SAMPLE_VALUE)));
    }
    black_box(&values);
    drop(values);
    start.elapsed()
}

/// Per-run timings for both passes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingReport {
    pub stack: Vec<Duration>,
    pub heap: Vec<Duration>,
}

impl TimingReport {
    pub fn runs(&self) -> usize {
        self.stack.len().min(self.heap.len())
    }

    pub fn mean_stack(&self) -> Duration {
        mean(&self.stack)
    }

    pub fn mean_heap(&self) -> Duration {
        mean(&self.heap)
    }

    /// How much slower the heap pass was, in percent of the stack mean
    ///
    /// `None` when the stack mean is zero.
    pub fn percent_difference(&self) -> Option<f64> {
        percent_difference(self.mean_stack(), self.mean_heap())
    }
}

fn mean(samples: &[Duration]) -> Duration {
    if samples.is_empty() {
        return Duration::ZERO;
    }
    // Averaged in nanoseconds so no sample count can truncate the divisor
    let total: u128 = samples.iter().map(Duration::as_nanos).sum();
    let nanos = total / samples.len() as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// `(heap - stack) / stack * 100`
pub fn percent_difference(stack: Duration, heap: Duration) -> Option<f64> {
    let stack = stack.as_secs_f64();
    if stack == 0.0 {
        return None;
    }
    Some((heap.as_secs_f64() - stack) / stack * 100.0)
}

/// Run both passes `config.runs` times
///
/// `on_run` is called after each run with the run number (from 1) and the two
/// timings, so callers can print progress.
pub fn run_timing(
    config: TimingConfig,
    mut on_run: impl FnMut(u32, Duration, Duration),
) -> TimingReport {
    let mut report = TimingReport::default();
    for run in 1..=config.runs {
        let stack = measure_stack(config.count);
        let heap = measure_heap(config.count);
        on_run(run, stack, heap);
        report.stack.push(stack);
        report.heap.push(heap);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = TimingConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, TimingConfig::default());
        assert_eq!(config.runs, 5);
        assert_eq!(config.count, 1_000_000);
    }

    #[test]
    fn test_config_parses_positionals() {
        let config = TimingConfig::from_args(["3", "10_000"]).unwrap();
        assert_eq!(config.runs, 3);
        assert_eq!(config.count, 10_000);
    }

    #[test]
    fn test_config_rejects_bad_input() {
        assert!(TimingConfig::from_args(["0"]).is_err());
        assert!(TimingConfig::from_args(["abc"]).is_err());
        assert!(TimingConfig::from_args(["1", "2", "3"]).is_err());
    }

    #[test]
    fn test_config_rejects_run_count_beyond_u32() {
        let err = TimingConfig::from_args(["4294967296"]).unwrap_err();
        assert!(err.contains("runs"));
        let config = TimingConfig::from_args(["4294967295", "1"]).unwrap();
        assert_eq!(config.runs, u32::MAX);
    }

    #[test]
    fn test_mean_of_many_samples() {
        let samples = vec![Duration::from_nanos(3); 1000];
        assert_eq!(mean(&samples), Duration::from_nanos(3));
        let uneven = [Duration::from_nanos(1), Duration::from_nanos(2)];
        assert_eq!(mean(&uneven), Duration::from_nanos(1));
    }

    #[test]
    fn test_mean_and_percent() {
        let report = TimingReport {
            stack: vec![Duration::from_millis(10), Duration::from_millis(30)],
            heap: vec![Duration::from_millis(30), Duration::from_millis(50)],
        };
        assert_eq!(report.runs(), 2);
        assert_eq!(report.mean_stack(), Duration::from_millis(20));
        assert_eq!(report.mean_heap(), Duration::from_millis(40));

        let pct = report.percent_difference().unwrap();
        assert!((pct - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_undefined_for_zero_stack() {
        assert_eq!(percent_difference(Duration::ZERO, Duration::from_millis(1)), None);
        assert_eq!(TimingReport::default().mean_stack(), Duration::ZERO);
    }

    #[test]
    fn test_run_timing_reports_every_run() {
        let mut seen = Vec::new();
        let report = run_timing(TimingConfig { runs: 3, count: 100 }, |run, _, _| {
            seen.push(run)
        });
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(report.runs(), 3);
    }
}
