use crate::core::{ProcessId, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    // Moved from the arrival queue into the scheduler's ready structure
    Admitted {
        pid: ProcessId,
        at: Ticks,
    },
    Ran {
        pid: ProcessId,
        start: Ticks,
        duration: Ticks,
    },
    // Nothing ready; CPU idle until the next arrival
    Idle {
        start: Ticks,
        duration: Ticks,
    },
}
