use super::{Metrics, ProcessSet, Workload};
use crate::{
    core::{SimCore, Timeline},
    scheduler::{Hrrn, Mlfq, Quantum, RoundRobin, Scheduler, Srtf},
};

pub fn srtf(processes: &ProcessSet) -> Timeline {
    SimCore::new(processes, Srtf::new()).run()
}

pub fn hrrn(processes: &ProcessSet) -> Timeline {
    SimCore::new(processes, Hrrn::new()).run()
}

pub fn round_robin(processes: &ProcessSet, quantum: Quantum) -> Timeline {
    SimCore::new(processes, RoundRobin::new(quantum)).run()
}

pub fn mlfq(processes: &ProcessSet, first_quantum: Quantum, second_quantum: Quantum) -> Timeline {
    SimCore::new(processes, Mlfq::new(first_quantum, second_quantum)).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Srtf,
    Hrrn,
    RoundRobin,
    Mlfq,
}

/// Outcome of one algorithm over one workload.
#[derive(Debug, Clone)]
pub struct SimResult {
    pub algorithm: Algorithm,
    pub timeline: Timeline,
    pub metrics: Metrics,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Srtf,
        Algorithm::Hrrn,
        Algorithm::RoundRobin,
        Algorithm::Mlfq,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Srtf => Srtf::NAME,
            Algorithm::Hrrn => Hrrn::NAME,
            Algorithm::RoundRobin => RoundRobin::NAME,
            Algorithm::Mlfq => Mlfq::NAME,
        }
    }

    pub fn timeline(self, workload: &Workload) -> Timeline {
        let processes = &workload.processes;
        match self {
            Algorithm::Srtf => srtf(processes),
            Algorithm::Hrrn => hrrn(processes),
            Algorithm::RoundRobin => round_robin(processes, workload.first_quantum),
            Algorithm::Mlfq => mlfq(processes, workload.first_quantum, workload.second_quantum),
        }
    }

    pub fn run(self, workload: &Workload) -> SimResult {
        let timeline = self.timeline(workload);
        let metrics = Metrics::from_timeline(&workload.processes, &timeline);
        SimResult {
            algorithm: self,
            timeline,
            metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workload(arrivals: &[u64], services: &[u64], first: u64, second: u64) -> Workload {
        Workload {
            processes: ProcessSet::from_times(arrivals, services).unwrap(),
            first_quantum: Quantum::new(first).unwrap(),
            second_quantum: Quantum::new(second).unwrap(),
        }
    }

    #[test]
    fn round_robin_scenario() {
        let result = Algorithm::RoundRobin.run(&workload(&[0, 1], &[5, 3], 4, 1));

        assert_eq!(result.timeline.to_string(), "(0) P0 (4) P1 (7) P0 (8)");
        // P0 finishes at 8, P1 at 7
        let averages = result.metrics.averages().unwrap();
        assert_eq!(averages.turnaround, 7.0);
        assert_eq!(averages.waiting, 3.0);
    }

    #[test]
    fn srtf_scenario() {
        let result = Algorithm::Srtf.run(&workload(&[0, 1], &[8, 4], 1, 1));

        assert_eq!(result.timeline.to_string(), "(0) P0 (1) P1 (5) P0 (12)");
        assert_eq!(result.metrics.waiting(0), Some(4));
        assert_eq!(result.metrics.waiting(1), Some(0));
    }

    #[test]
    fn empty_workload_runs_to_empty_timeline() {
        let empty = workload(&[], &[], 2, 3);
        for algorithm in Algorithm::ALL {
            let result = algorithm.run(&empty);
            assert!(result.timeline.is_empty());
            assert_eq!(result.metrics.averages(), None);
        }
    }

    #[test]
    fn every_algorithm_is_deterministic() {
        let w = workload(&[0, 1, 1, 4, 9], &[6, 2, 0, 3, 5], 2, 3);
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.timeline(&w), algorithm.timeline(&w));
        }
    }
}
