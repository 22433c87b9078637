use core::fmt;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, OutputEq, OutputKind, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default bench period in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

#[derive(Default)]
pub struct Bencher {}

impl Bencher {
    /// Construct a new bencher.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bench the given fn.
    #[inline]
    pub fn iter<T, O, C>(&mut self, opts: &Opts, expected: Option<C>, iter: T) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let stdout = std::io::stdout();

        let mut o = Output::new(
            stdout.lock(),
            if opts.json {
                OutputKind::Json
            } else {
                OutputKind::Normal
            },
        );

        if let Err(error) = self.inner_iter(&mut o, opts, expected, iter) {
            o.error(error)?;
        }

        Ok(())
    }

    fn inner_iter<T, O, C>(
        &mut self,
        o: &mut Output<impl Write>,
        opts: &Opts,
        expected: Option<C>,
        mut iter: T,
    ) -> Result<()>
    where
        T: FnMut() -> Result<O>,
        O: fmt::Debug + OutputEq<C>,
        C: fmt::Debug,
    {
        let warmup = Duration::from_millis(opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        if !warmup.is_zero() {
            let s = Instant::now();

            o.info(format_args!("warming up ({warmup:?})..."))?;

            loop {
                let value = iter()?;
                let after = Instant::now();

                if let Some(expect) = &expected {
                    if !value.output_eq(expect) {
                        bail!("{value:?} (value) != {expect:?} (expected)");
                    }
                }

                let _ = black_box(value);

                if after.duration_since(s) >= warmup {
                    break;
                }
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = opts.count {
            let count = count.max(1);

            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();

                if let Some(expect) = &expected {
                    if !value.output_eq(expect) {
                        bail!("{value:?} (value) != {expect:?} (expected)");
                    }
                }

                let _ = black_box(value);
                samples.push(after.duration_since(before));
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                let before = Instant::now();
                let value = iter()?;
                let after = Instant::now();

                if let Some(expect) = &expected {
                    if !value.output_eq(expect) {
                        bail!("{value:?} (value) != {expect:?} (expected)");
                    }
                }

                let _ = black_box(value);
                samples.push(after.duration_since(before));

                if after.duration_since(start) >= time_limit {
                    break;
                }
            }
        }

        samples.sort();

        let min = samples.first().copied().unwrap_or_default();
        let max = samples.last().copied().unwrap_or_default();
        let sum = samples.iter().copied().sum();

        let report = Report::new(
            percentile(&samples, 5000),
            percentile(&samples, 9500),
            percentile(&samples, 9900),
            samples.len(),
            min,
            max,
            sum,
        );

        o.report(&report)?;
        Ok(())
    }
}

/// Pick the `pct` (in hundredths of a percent) percentile out of a sorted
/// set of samples.
fn percentile(samples: &[Duration], pct: u64) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let index = (samples.len() as u64 - 1) * pct / 10000;
    samples[index as usize]
}

/// A function that is opaque to the optimizer, used to prevent the
/// compiler from optimizing away computations in a benchmark.
///
/// This variant is stable-compatible, but it may cause some performance
/// overhead or fail to prevent code from being eliminated.
///
/// Borrowed from criterion under the MIT license.
fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::percentile;

    #[test]
    fn test_percentile() {
        let samples: Vec<Duration> = (1..=100).map(Duration::from_millis).collect();
        assert_eq!(percentile(&samples, 5000), Duration::from_millis(50));
        assert_eq!(percentile(&samples, 9500), Duration::from_millis(95));
        assert_eq!(percentile(&samples, 9900), Duration::from_millis(99));
        assert_eq!(percentile(&[], 5000), Duration::default());
    }
}
