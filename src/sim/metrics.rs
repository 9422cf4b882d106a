use average::{Estimate, Mean};
use rustc_hash::FxHashMap;

use super::{ProcessId, ProcessSet};
use crate::core::{Owner, Ticks, Timeline};

/// Per-process timings derived from a finished timeline. Only scheduled
/// processes (non-zero service) have entries.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    finish: FxHashMap<ProcessId, Ticks>,
    turnaround: FxHashMap<ProcessId, Ticks>,
    waiting: FxHashMap<ProcessId, Ticks>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Averages {
    pub turnaround: f64,
    pub waiting: f64,
}

impl Metrics {
    /// Derives finish, turnaround and waiting times for every scheduled
    /// process.
    ///
    /// # Panics
    ///
    /// If `timeline` was not produced from `processes`, i.e. some process
    /// finishes earlier than its arrival plus its service time.
    pub fn from_timeline(processes: &ProcessSet, timeline: &Timeline) -> Self {
        let mut finish: FxHashMap<ProcessId, Ticks> =
            processes.scheduled().map(|p| (p.id, 0)).collect();

        for (start, slot) in timeline.iter_timed() {
            if let Owner::Process(pid) = slot.owner {
                finish.insert(pid, start + slot.duration);
            }
        }

        let mut turnaround = FxHashMap::default();
        let mut waiting = FxHashMap::default();
        for process in processes.scheduled() {
            let done = finish[&process.id];
            assert!(
                done >= process.arrival_time + process.service_time,
                "P{} finished at t={done}, before it could have",
                process.id
            );

            let tt = done - process.arrival_time;
            turnaround.insert(process.id, tt);
            waiting.insert(process.id, tt - process.service_time);
        }

        Self {
            finish,
            turnaround,
            waiting,
        }
    }

    pub fn finish(&self, pid: ProcessId) -> Option<Ticks> {
        self.finish.get(&pid).copied()
    }

    pub fn turnaround(&self, pid: ProcessId) -> Option<Ticks> {
        self.turnaround.get(&pid).copied()
    }

    pub fn waiting(&self, pid: ProcessId) -> Option<Ticks> {
        self.waiting.get(&pid).copied()
    }

    pub fn len(&self) -> usize {
        self.finish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finish.is_empty()
    }

    /// Mean turnaround and waiting time, `None` when nothing was scheduled.
    pub fn averages(&self) -> Option<Averages> {
        if self.is_empty() {
            return None;
        }

        Some(Averages {
            turnaround: mean(self.turnaround.values()),
            waiting: mean(self.waiting.values()),
        })
    }
}

fn mean<'a>(values: impl Iterator<Item = &'a Ticks>) -> f64 {
    values.map(|&v| v as f64).collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_times_from_last_slot() {
        let processes = ProcessSet::from_times(&[0, 1], &[5, 3]).unwrap();
        let mut timeline = Timeline::new();
        timeline.push(Owner::Process(0), 4);
        timeline.push(Owner::Process(1), 3);
        timeline.push(Owner::Process(0), 1);

        let metrics = Metrics::from_timeline(&processes, &timeline);
        assert_eq!(metrics.finish(0), Some(8));
        assert_eq!(metrics.finish(1), Some(7));
        assert_eq!(metrics.turnaround(1), Some(6));
        assert_eq!(metrics.waiting(0), Some(3));
        assert_eq!(metrics.waiting(1), Some(3));

        let averages = metrics.averages().unwrap();
        assert_eq!(averages.turnaround, 7.0);
        assert_eq!(averages.waiting, 3.0);
    }

    #[test]
    fn zero_service_processes_are_left_out() {
        let processes = ProcessSet::from_times(&[0, 2], &[0, 2]).unwrap();
        let mut timeline = Timeline::new();
        timeline.push(Owner::Idle, 2);
        timeline.push(Owner::Process(1), 2);

        let metrics = Metrics::from_timeline(&processes, &timeline);
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.finish(0), None);
        assert_eq!(metrics.averages().map(|a| a.waiting), Some(0.0));
    }

    #[test]
    #[should_panic(expected = "before it could have")]
    fn timeline_from_other_processes_is_rejected() {
        let processes = ProcessSet::from_times(&[0], &[5]).unwrap();
        let mut timeline = Timeline::new();
        timeline.push(Owner::Process(0), 2);

        Metrics::from_timeline(&processes, &timeline);
    }

    #[test]
    fn empty_set_has_no_averages() {
        let metrics = Metrics::from_timeline(&ProcessSet::default(), &Timeline::new());
        assert!(metrics.is_empty());
        assert_eq!(metrics.averages(), None);
    }
}
