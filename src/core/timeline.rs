use std::fmt;

use super::state::Ticks;
use crate::sim::ProcessId;

/// Who a slot of CPU time is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Idle,
    Process(ProcessId),
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Idle => f.write_str("Idle"),
            Owner::Process(pid) => write!(f, "P{pid}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub owner: Owner,
    pub duration: Ticks,
}

/// Gantt trace of a finished (or running) simulation.
///
/// Append-only. Adjacent slots never share an owner and no slot is empty;
/// [`Timeline::push`] keeps both properties by merging and dropping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    slots: Vec<Slot>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, owner: Owner, duration: Ticks) {
        if duration == 0 {
            return;
        }

        match self.slots.last_mut() {
            Some(last) if last.owner == owner => last.duration += duration,
            _ => self.slots.push(Slot { owner, duration }),
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    // Sum of all slot durations, i.e. the time at which the trace ends
    pub fn total(&self) -> Ticks {
        self.slots.iter().map(|slot| slot.duration).sum()
    }

    /// CPU time attributed to `pid` across all of its slots.
    pub fn busy_time(&self, pid: ProcessId) -> Ticks {
        self.slots
            .iter()
            .filter(|slot| slot.owner == Owner::Process(pid))
            .map(|slot| slot.duration)
            .sum()
    }

    /// Iterates `(start, slot)` pairs, `start` being the cumulative time at
    /// which the slot begins.
    pub fn iter_timed(&self) -> impl Iterator<Item = (Ticks, &Slot)> {
        self.slots.iter().scan(0, |start, slot| {
            let at = *start;
            *start += slot.duration;
            Some((at, slot))
        })
    }
}

// Renders `(0) P2 (4) Idle (7) P1 (10)`
impl fmt::Display for Timeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (start, slot) in self.iter_timed() {
            write!(f, "({start}) {} ", slot.owner)?;
        }
        write!(f, "({})", self.total())
    }
}
