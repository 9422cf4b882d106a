use super::{
    event::SimEvent,
    observer::Observer,
    state::{SimCtx, Ticks},
    timeline::Timeline,
};
use crate::{scheduler::Scheduler, sim::ProcessSet};

/// The generic simulation loop: owns time and the arrival queue and asks the
/// scheduler who runs next.
pub struct SimCore<S: Scheduler> {
    pub ctx: SimCtx,
    pub scheduler: S,
    observer: Observer,
}

impl<S: Scheduler> SimCore<S> {
    pub fn new(processes: &ProcessSet, mut scheduler: S) -> Self {
        let mut ctx = SimCtx::new(processes);

        // Anything arriving at t=0
        scheduler.admit_arrived(&mut ctx);

        Self {
            ctx,
            scheduler,
            observer: Observer::new(),
        }
    }

    pub fn is_finished(&self) -> bool {
        !self.scheduler.has_ready() && !self.ctx.has_pending_arrivals()
    }

    /// Advances the simulation by one burst or one idle gap and returns what
    /// happened, including admissions left over from construction.
    pub fn step(&mut self) -> Vec<SimEvent> {
        if self.scheduler.has_ready() {
            let before = self.ctx.now;
            self.scheduler.burst(&mut self.ctx);
            assert!(
                self.ctx.now > before,
                "{} burst at t={before} did not advance time",
                S::NAME
            );
        } else if self.ctx.has_pending_arrivals() {
            self.ctx.jump_to_next_arrival();
            self.scheduler.admit_arrived(&mut self.ctx);
        } else {
            return Vec::new();
        }

        self.observer.observe(&self.ctx);

        let events = self.ctx.drain_events();
        for event in &events {
            log::trace!("{}: {:?}", S::NAME, event);
        }
        events
    }

    pub fn run(mut self) -> Timeline {
        log::debug!("{}: starting simulation", S::NAME);

        while !self.is_finished() {
            self.step();
        }

        log::debug!(
            "{}: finished at t={} after {} steps",
            S::NAME,
            self.now(),
            self.observer.steps()
        );
        self.ctx.into_timeline()
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Quantum, RoundRobin};

    #[test]
    fn step_reports_admissions_bursts_and_gaps() {
        let processes = ProcessSet::from_times(&[0, 5], &[2, 1]).unwrap();
        let mut core = SimCore::new(&processes, RoundRobin::new(Quantum::MIN));

        assert_eq!(
            core.step(),
            vec![
                SimEvent::Admitted { pid: 0, at: 0 },
                SimEvent::Ran { pid: 0, start: 0, duration: 1 },
            ]
        );
        assert_eq!(core.step(), vec![SimEvent::Ran { pid: 0, start: 1, duration: 1 }]);
        assert_eq!(
            core.step(),
            vec![
                SimEvent::Idle { start: 2, duration: 3 },
                SimEvent::Admitted { pid: 1, at: 5 },
            ]
        );
        assert!(!core.is_finished());
        core.step();

        assert!(core.is_finished());
        assert_eq!(core.now(), 6);
        assert_eq!(core.observer().steps(), 4);
        assert!(core.step().is_empty());
    }

    #[test]
    fn nothing_to_do_for_empty_set() {
        let core = SimCore::new(&ProcessSet::default(), RoundRobin::new(Quantum::MIN));
        assert!(core.is_finished());
        assert!(core.run().is_empty());
    }
}
