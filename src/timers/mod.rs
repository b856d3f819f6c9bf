//! Wall-clock benchmarking of caller-supplied tasks.
//!
//! A [`Benchmark`] wraps a closure and measures it over a fixed number of
//! iterations, reporting either the average or the worst observed duration.
//! Results are written to an explicit sink; nothing here prints on its own.

use crate::algebra::{checks, ArrayError, ErrorKind};
use std::io::Write;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Error type returned by the benchmark runner.
#[derive(Error, Debug)]
pub enum BenchmarkError {
    /// Iteration count validation failed
    #[error(transparent)]
    Invalid(#[from] ArrayError),
    /// The output sink failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Which statistic a benchmark run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkKind {
    AvgTime,
    MaxTime,
}

impl BenchmarkKind {
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkKind::AvgTime => "Average Time",
            BenchmarkKind::MaxTime => "Max Time",
        }
    }
}

/// A named task measured by the runner.
pub struct Benchmark<'a> {
    name: &'static str,
    task: Box<dyn FnMut() + 'a>,
}

impl<'a> Benchmark<'a> {
    pub fn new(name: &'static str, task: impl FnMut() + 'a) -> Self {
        Self {
            name,
            task: Box::new(task),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Average duration of one task call over `iterations` runs.
    ///
    /// The iteration count must be positive.
    pub fn measure_avg(&mut self, iterations: u32) -> Result<Duration, ArrayError> {
        checks::greater_than(
            iterations,
            0,
            ErrorKind::InvalidArgument,
            "iteration count must be positive",
        )?;
        let start = Instant::now();
        for _ in 0..iterations {
            (self.task)();
        }
        Ok(start.elapsed() / iterations)
    }

    /// Worst single-call duration over `iterations` runs.
    ///
    /// The iteration count must be positive.
    pub fn measure_max(&mut self, iterations: u32) -> Result<Duration, ArrayError> {
        checks::greater_than(
            iterations,
            0,
            ErrorKind::InvalidArgument,
            "iteration count must be positive",
        )?;
        let mut max = Duration::ZERO;
        for _ in 0..iterations {
            let start = Instant::now();
            (self.task)();
            max = max.max(start.elapsed());
        }
        Ok(max)
    }
}

/// Measures each benchmark and writes one `name - kind: n ns` line to `out`.
pub fn run_benchmarks(
    out: &mut impl Write,
    kind: BenchmarkKind,
    iterations: u32,
    benchmarks: &mut [Benchmark],
) -> Result<(), BenchmarkError> {
    for benchmark in benchmarks.iter_mut() {
        let elapsed = match kind {
            BenchmarkKind::AvgTime => benchmark.measure_avg(iterations)?,
            BenchmarkKind::MaxTime => benchmark.measure_max(iterations)?,
        };
        writeln!(
            out,
            "{} - {}: {} ns",
            benchmark.name(),
            kind.label(),
            elapsed.as_nanos()
        )?;
    }
    Ok(())
}

/// Like [`run_benchmarks`], preceded by a discarded warmup pass.
pub fn run_benchmarks_with_warmup(
    out: &mut impl Write,
    kind: BenchmarkKind,
    warmup_iterations: u32,
    iterations: u32,
    benchmarks: &mut [Benchmark],
) -> Result<(), BenchmarkError> {
    for benchmark in benchmarks.iter_mut() {
        benchmark.measure_avg(warmup_iterations)?;
    }
    run_benchmarks(out, kind, iterations, benchmarks)
}
