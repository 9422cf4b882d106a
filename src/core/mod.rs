pub mod driver;
pub mod event;
pub mod observer;
pub mod state;
pub mod timeline;

pub use crate::sim::ProcessId;
pub use driver::SimCore;
pub use event::SimEvent;
pub use state::{SimCtx, Ticks};
pub use timeline::{Owner, Slot, Timeline};
