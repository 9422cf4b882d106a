use rand::prelude::*;

use super::ProcessSet;
use crate::{core::Ticks, scheduler::Quantum};

/// Everything a full run needs: the processes and both quanta. The first
/// quantum drives round robin and the top feedback tier, the second the
/// middle tier.
#[derive(Debug, Clone)]
pub struct Workload {
    pub processes: ProcessSet,
    pub first_quantum: Quantum,
    pub second_quantum: Quantum,
}

/// Parameters of a Bernoulli arrival process.
#[derive(Debug, Clone, Copy)]
pub struct BernoulliParams {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: Ticks,
    pub long_ticks: Ticks,
    pub seed: u64,
}

/// At every tick a process arrives with probability `p_arrival`; it needs
/// `short_ticks` of service with probability `p_short`, `long_ticks`
/// otherwise.
pub fn bernoulli(params: BernoulliParams) -> ProcessSet {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut times = Vec::new();

    for t in 0..params.ticks {
        if rng.random::<f64>() < params.p_arrival {
            let run_time = if rng.random::<f64>() < params.p_short {
                params.short_ticks
            } else {
                params.long_ticks
            };

            times.push((t, run_time));
        }
    }

    log::debug!(
        "generated {} processes over {} ticks (seed {})",
        times.len(),
        params.ticks,
        params.seed
    );

    times.into_iter().collect()
}
