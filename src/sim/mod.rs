pub mod driver;
pub mod metrics;
pub mod process;
pub mod workload;

pub use driver::{Algorithm, SimResult, hrrn, mlfq, round_robin, srtf};
pub use metrics::{Averages, Metrics};
pub use process::{MAX_TIME, Process, ProcessId, ProcessSet};
pub use workload::{BernoulliParams, Workload, bernoulli};
