//! CLI helpers shared by every solution binary.

mod bencher;
pub(crate) mod error;
mod output;
mod output_eq;
mod stdout_logger;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::time::Instant;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::IStr;

pub use self::bencher::Bencher;
pub use self::output_eq::OutputEq;
use self::output::{Output, OutputKind};

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Run mode.
#[derive(Default)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Default)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON report.
    json: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
}

impl Opts {
    /// Parse CLI options.
    pub fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        bail!("duplicate `--bench` arguments");
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--warmup" => {
                    let warmup = it.next().context("missing argument to `--warmup`")?;
                    let warmup = warmup
                        .to_str()
                        .context("missing string argument to `--warmup`")?;
                    opts.warmup = Some(warmup.parse().context("bad argument to `--warmup`")?);
                }
                "--time-limit" => {
                    let time_limit = it.next().context("missing argument to `--time-limit`")?;
                    let time_limit = time_limit
                        .to_str()
                        .context("missing string argument to `--time-limit`")?;
                    opts.time_limit = Some(
                        time_limit
                            .parse()
                            .context("bad argument to `--time-limit`")?,
                    );
                }
                "--count" => {
                    let count = it.next().context("missing argument to `--count`")?;
                    let count = count
                        .to_str()
                        .context("missing string argument to `--count`")?;
                    opts.count = Some(count.parse().context("bad argument to `--count`")?);
                }
                "--json" => {
                    opts.json = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        if !opts.json {
            log::set_max_level(if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            });

            log::set_logger(&STDOUT_LOGGER)
                .map_err(|error| anyhow!("failed to set logger: {error}"))?;
        }

        Ok(opts)
    }
}

/// Drive a solution.
///
/// In the default mode the solver runs once and the two answers are
/// printed as `part1: <n>` and `part2: <n>`. In bench mode the solver is
/// sampled repeatedly and a timing report is emitted instead.
pub fn run<F, A, B, C>(
    opts: &Opts,
    path: &'static str,
    input: IStr,
    expect: Option<C>,
    mut solve: F,
) -> Result<()>
where
    F: FnMut(IStr) -> Result<(A, B)>,
    A: fmt::Display + fmt::Debug,
    B: fmt::Display + fmt::Debug,
    (A, B): OutputEq<C>,
    C: fmt::Debug,
{
    match opts.mode {
        Mode::Default => {
            let stdout = std::io::stdout();

            let mut o = Output::new(
                stdout.lock(),
                if opts.json {
                    OutputKind::Json
                } else {
                    OutputKind::Normal
                },
            );

            let start = Instant::now();

            let value = match solve(input) {
                Ok(value) => value,
                Err(error) => return Err(error::error_context(path, input, error)),
            };

            log::debug!("{path}: {:?}", Instant::now().duration_since(start));

            o.result(format_args!("part1: {}", value.0))?;
            o.result(format_args!("part2: {}", value.1))?;

            if let Some(expect) = &expect {
                if !value.output_eq(expect) {
                    bail!("{value:?} (value) != {expect:?} (expected)");
                }
            }
        }
        Mode::Bench => {
            let mut b = Bencher::new();
            b.iter(opts, expect, || solve(input))?;
        }
    }

    Ok(())
}

/// Timing summary for one benched solution.
#[derive(Default, Deserialize, Serialize)]
pub struct Report {
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
}

impl Report {
    fn new(
        p50: Duration,
        p95: Duration,
        p99: Duration,
        count: usize,
        min: Duration,
        max: Duration,
        sum: Duration,
    ) -> Self {
        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(
                u64::try_from(sum.as_nanos() / (count as u128)).unwrap_or_default(),
            )
        };

        Self {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            p50,
            p95,
            p99,
            count,
            min,
            max,
            avg,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
    }
}
