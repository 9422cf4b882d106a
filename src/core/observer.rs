use super::state::{SimCtx, Ticks};

/// Checks structural invariants of a run after every step.
#[derive(Debug)]
pub struct Observer {
    step: u64,
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self {
            step: 0,
            last_now: 0,
        }
    }

    pub fn observe(&mut self, ctx: &SimCtx) {
        self.step += 1;

        debug_assert!(
            ctx.now >= self.last_now,
            "Time went backwards at step {}: t={} after t={}",
            self.step,
            ctx.now,
            self.last_now
        );
        self.last_now = ctx.now;

        debug_assert_eq!(
            ctx.timeline.total(),
            ctx.now,
            "Timeline length must match current time at step {}",
            self.step
        );

        let slots = ctx.timeline.slots();
        for slot in slots {
            debug_assert_ne!(slot.duration, 0, "Zero-length slot for {}", slot.owner);
        }
        for pair in slots.windows(2) {
            debug_assert_ne!(
                pair[0].owner, pair[1].owner,
                "Adjacent slots for {} were not merged",
                pair[0].owner
            );
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
