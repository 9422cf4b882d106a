use super::{
    event::SimEvent,
    timeline::{Owner, Timeline},
};
use crate::sim::{Process, ProcessId, ProcessSet};

pub type Ticks = u64;

/// Mutable state of one simulation run, shared between the driver loop and
/// the scheduler it drives.
#[derive(Debug)]
pub struct SimCtx {
    pub now: Ticks,
    pub timeline: Timeline,
    // Indexed by ProcessId
    processes: Vec<Process>,
    // Scheduled processes (service > 0) sorted by (arrival, id); everything
    // before the cursor has been admitted exactly once.
    arrivals: Vec<ProcessId>,
    arrival_cursor: usize,
    events: Vec<SimEvent>,
}

impl SimCtx {
    pub fn new(processes: &ProcessSet) -> Self {
        let mut arrivals: Vec<ProcessId> = processes.scheduled().map(|p| p.id).collect();
        arrivals.sort_by(|&a, &b| {
            let (a, b) = (processes.get(a), processes.get(b));
            a.arrival_time
                .cmp(&b.arrival_time)
                .then_with(|| a.id.cmp(&b.id))
        });

        Self {
            now: 0,
            timeline: Timeline::new(),
            processes: processes.iter().copied().collect(),
            arrivals,
            arrival_cursor: 0,
            events: Vec::new(),
        }
    }

    pub fn process(&self, pid: ProcessId) -> &Process {
        &self.processes[pid]
    }

    pub fn peek_arrival(&self) -> Option<&Process> {
        self.arrivals
            .get(self.arrival_cursor)
            .map(|&pid| self.process(pid))
    }

    pub fn next_arrival_time(&self) -> Option<Ticks> {
        self.peek_arrival().map(|p| p.arrival_time)
    }

    pub fn has_pending_arrivals(&self) -> bool {
        self.arrival_cursor < self.arrivals.len()
    }

    /// Pops the next arrival if it has arrived by `now`.
    pub fn pop_arrived(&mut self) -> Option<ProcessId> {
        let next = self.peek_arrival()?;
        if next.arrival_time > self.now {
            return None;
        }

        let pid = next.id;
        self.arrival_cursor += 1;
        self.events.push(SimEvent::Admitted { pid, at: self.now });
        Some(pid)
    }

    /// Runs `pid` for `duration` ticks starting at `now`.
    pub fn run(&mut self, pid: ProcessId, duration: Ticks) {
        assert!(duration > 0, "Burst of P{pid} at t={} has zero length", self.now);

        self.timeline.push(Owner::Process(pid), duration);
        self.events.push(SimEvent::Ran {
            pid,
            start: self.now,
            duration,
        });
        self.advance_time(duration);
    }

    /// Idles the CPU until the next arrival. Does not admit it.
    pub fn jump_to_next_arrival(&mut self) {
        let Some(next) = self.next_arrival_time() else {
            return;
        };
        assert!(
            next >= self.now,
            "Next arrival at t={next} is in the past (now t={})",
            self.now
        );

        let gap = next - self.now;
        self.timeline.push(Owner::Idle, gap);
        if gap > 0 {
            self.events.push(SimEvent::Idle {
                start: self.now,
                duration: gap,
            });
        }
        self.now = next;
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = match self.now.checked_add(delta) {
            Some(now) => now,
            None => panic!("Simulated time overflowed at t={} (+{delta})", self.now),
        };
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(times: &[(Ticks, Ticks)]) -> SimCtx {
        let (arrivals, services): (Vec<_>, Vec<_>) = times.iter().copied().unzip();
        let processes = ProcessSet::from_times(&arrivals, &services).unwrap();
        SimCtx::new(&processes)
    }

    #[test]
    fn arrivals_ordered_by_time_then_id() {
        let mut ctx = ctx(&[(3, 1), (0, 2), (3, 4), (0, 1)]);
        ctx.now = 10;

        let order: Vec<_> = std::iter::from_fn(|| ctx.pop_arrived()).collect();
        assert_eq!(order, vec![1, 3, 0, 2]);
        assert!(!ctx.has_pending_arrivals());
    }

    #[test]
    fn zero_service_processes_never_arrive() {
        let mut ctx = ctx(&[(0, 0), (1, 2)]);
        assert_eq!(ctx.peek_arrival().map(|p| p.id), Some(1));
        assert_eq!(ctx.pop_arrived(), None);
    }

    #[test]
    fn jump_records_idle_gap() {
        let mut ctx = ctx(&[(4, 1)]);
        ctx.jump_to_next_arrival();

        assert_eq!(ctx.now, 4);
        assert_eq!(ctx.timeline.to_string(), "(0) Idle (4)");
        assert_eq!(ctx.pop_arrived(), Some(0));
        assert!(matches!(
            ctx.drain_events().as_slice(),
            [SimEvent::Idle { start: 0, duration: 4 }, SimEvent::Admitted { pid: 0, at: 4 }]
        ));
    }

    #[test]
    #[should_panic(expected = "overflowed")]
    fn time_overflow_is_fatal() {
        let mut ctx = ctx(&[(0, 1)]);
        ctx.now = Ticks::MAX;
        ctx.advance_time(1);
    }

    #[test]
    #[should_panic(expected = "in the past")]
    fn jump_backwards_is_fatal() {
        let mut ctx = ctx(&[(2, 1)]);
        ctx.now = 5;
        ctx.jump_to_next_arrival();
    }
}
