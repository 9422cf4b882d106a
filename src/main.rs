use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use sched_sim::{
    Algorithm, SimError, Workload, input, logger,
    report::Report,
    scheduler::Quantum,
    sim::{BernoulliParams, bernoulli},
};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum Selection {
    All,
    Srtf,
    Hrrn,
    Rr,
    Mlfq,
}

impl Selection {
    fn algorithms(self) -> Vec<Algorithm> {
        match self {
            Selection::All => Algorithm::ALL.to_vec(),
            Selection::Srtf => vec![Algorithm::Srtf],
            Selection::Hrrn => vec![Algorithm::Hrrn],
            Selection::Rr => vec![Algorithm::RoundRobin],
            Selection::Mlfq => vec![Algorithm::Mlfq],
        }
    }
}

/// Simulate classical CPU scheduling algorithms and report their Gantt
/// charts and average turnaround/waiting times.
#[derive(Parser, Debug)]
#[command(name = "sched-sim", version)]
struct Args {
    /// Workload file (count, service times, arrival times, two quanta); stdin if omitted
    #[arg(short, long, conflicts_with = "generate")]
    input: Option<PathBuf>,

    /// Which algorithm(s) to run
    #[arg(short, long, value_enum, default_value_t = Selection::All)]
    algorithm: Selection,

    /// Generate a random workload spanning this many ticks instead of reading one
    #[arg(long, value_name = "TICKS")]
    generate: Option<u32>,

    /// Seed for the generated workload
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Per-tick arrival probability for the generated workload
    #[arg(long, default_value_t = 0.3)]
    p_arrival: f64,

    /// Probability that a generated process is short
    #[arg(long, default_value_t = 0.3)]
    p_short: f64,

    /// Service time of a short generated process
    #[arg(long, default_value_t = 2)]
    short: u32,

    /// Service time of a long generated process
    #[arg(long, default_value_t = 6)]
    long: u32,

    /// First quantum for a generated workload
    #[arg(long, default_value_t = 2)]
    quantum: u32,

    /// Second quantum for a generated workload
    #[arg(long, default_value_t = 4)]
    second_quantum: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = logger::init(logger::level_for(args.verbose)) {
        eprintln!("Warning: {err}");
    }

    let workload = match load_workload(&args) {
        Ok(workload) => workload,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    log::info!(
        "loaded {} processes (quanta {} and {})",
        workload.processes.len(),
        workload.first_quantum,
        workload.second_quantum
    );

    for algorithm in args.algorithm.algorithms() {
        let result = algorithm.run(&workload);
        println!("{}", Report(&result));
    }

    ExitCode::SUCCESS
}

fn load_workload(args: &Args) -> Result<Workload, SimError> {
    if let Some(ticks) = args.generate {
        let processes = bernoulli(BernoulliParams {
            ticks: ticks.into(),
            p_arrival: args.p_arrival,
            p_short: args.p_short,
            short_ticks: args.short.into(),
            long_ticks: args.long.into(),
            seed: args.seed,
        });
        return Ok(Workload {
            processes,
            first_quantum: quantum("first", args.quantum)?,
            second_quantum: quantum("second", args.second_quantum)?,
        });
    }

    match &args.input {
        Some(path) => input::read_workload(BufReader::new(File::open(path)?)),
        None => input::read_workload(io::stdin().lock()),
    }
}

fn quantum(which: &'static str, value: u32) -> Result<Quantum, SimError> {
    Quantum::new(value.into()).ok_or(SimError::NonPositiveQuantum {
        which,
        value: value.into(),
    })
}
