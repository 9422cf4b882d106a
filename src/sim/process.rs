use crate::{core::Ticks, error::SimError};

pub type ProcessId = usize;

/// Largest arrival or service time a workload may carry. Keeps every sum of
/// times well inside `Ticks`.
pub const MAX_TIME: Ticks = u32::MAX as Ticks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub service_time: Ticks,
}

impl Process {
    // Zero-service processes never enter a ready queue
    pub fn is_scheduled(&self) -> bool {
        self.service_time > 0
    }
}

/// The fixed input of a run. Ids are `0..len()` in input order, so a
/// process is looked up by indexing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    pub fn from_times(arrivals: &[Ticks], services: &[Ticks]) -> Result<Self, SimError> {
        if arrivals.len() != services.len() {
            return Err(SimError::CountMismatch {
                what: "arrival times",
                found: arrivals.len(),
                expected: services.len(),
            });
        }

        check_range("arrival time", arrivals)?;
        check_range("service time", services)?;

        Ok(arrivals.iter().copied().zip(services.iter().copied()).collect())
    }

    pub fn get(&self, pid: ProcessId) -> &Process {
        &self.processes[pid]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    pub fn scheduled(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter().filter(|p| p.is_scheduled())
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}

fn check_range(what: &'static str, times: &[Ticks]) -> Result<(), SimError> {
    match times.iter().find(|&&t| t > MAX_TIME) {
        Some(&t) => Err(SimError::OutOfRange {
            what,
            value: i64::try_from(t).unwrap_or(i64::MAX),
        }),
        None => Ok(()),
    }
}

// Collects `(arrival, service)` pairs, numbering them in order
impl FromIterator<(Ticks, Ticks)> for ProcessSet {
    fn from_iter<I: IntoIterator<Item = (Ticks, Ticks)>>(iter: I) -> Self {
        let processes = iter
            .into_iter()
            .enumerate()
            .map(|(id, (arrival_time, service_time))| Process {
                id,
                arrival_time,
                service_time,
            })
            .collect();
        Self { processes }
    }
}
