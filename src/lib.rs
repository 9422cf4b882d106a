pub mod core;
pub mod error;
pub mod input;
pub mod logger;
pub mod report;
pub mod scheduler;
pub mod sim;

pub use crate::core::{SimCore, SimEvent, Timeline};
pub use error::SimError;
pub use scheduler::Scheduler;
pub use sim::{Algorithm, ProcessSet, Workload};
