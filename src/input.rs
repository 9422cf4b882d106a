//! Parsing of the textual workload description.
//!
//! ```text
//! 3            process count
//! 5, 3, 8      service times
//! 0, 1, 4      arrival times
//! 2            first quantum
//! 4            second quantum
//! ```

use std::io::BufRead;

use crate::{
    core::Ticks,
    error::{Result, SimError},
    scheduler::Quantum,
    sim::{MAX_TIME, ProcessSet, Workload},
};

const COUNT: &str = "processes' quantity";
const SERVICE: &str = "each process's service time";
const ARRIVAL: &str = "each process's arrival time";

/// Reads and validates a whole workload. Nothing is simulated if this fails.
pub fn read_workload<R: BufRead>(reader: R) -> Result<Workload> {
    let mut lines = reader.lines();
    let mut next_line = |what: &'static str| -> Result<String> {
        match lines.next() {
            Some(line) => Ok(line?),
            None => Err(SimError::MissingLine { what }),
        }
    };

    let count = parse_int(COUNT, &next_line("process count")?)?;
    let count = usize::try_from(count).map_err(|_| SimError::Negative {
        what: COUNT,
        value: count,
    })?;

    let services = parse_times(SERVICE, &next_line("service times")?)?;
    let arrivals = parse_times(ARRIVAL, &next_line("arrival times")?)?;
    check_count("service times", services.len(), count)?;
    check_count("arrival times", arrivals.len(), count)?;

    let first_quantum = parse_quantum("first", &next_line("first quantum")?)?;
    let second_quantum = parse_quantum("second", &next_line("second quantum")?)?;

    Ok(Workload {
        processes: ProcessSet::from_times(&arrivals, &services)?,
        first_quantum,
        second_quantum,
    })
}

pub fn parse_workload(input: &str) -> Result<Workload> {
    read_workload(input.as_bytes())
}

fn parse_int(what: &'static str, raw: &str) -> Result<i64> {
    let raw = raw.trim();
    raw.parse().map_err(|_| SimError::NotAnInteger {
        what,
        value: raw.to_owned(),
    })
}

// Comma separated, any spaces or tabs around the commas. A blank line is an
// empty list.
fn parse_times(what: &'static str, line: &str) -> Result<Vec<Ticks>> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    line.split(',')
        .map(|raw| {
            let value = parse_int(what, raw)?;
            let ticks = Ticks::try_from(value).map_err(|_| SimError::Negative { what, value })?;
            if ticks > MAX_TIME {
                return Err(SimError::OutOfRange { what, value });
            }
            Ok(ticks)
        })
        .collect()
}

fn parse_quantum(which: &'static str, line: &str) -> Result<Quantum> {
    let value = parse_int("quantum time", line)?;
    if value > MAX_TIME as i64 {
        return Err(SimError::OutOfRange {
            what: "quantum time",
            value,
        });
    }
    u64::try_from(value)
        .ok()
        .and_then(Quantum::new)
        .ok_or(SimError::NonPositiveQuantum { which, value })
}

fn check_count(what: &'static str, found: usize, expected: usize) -> Result<()> {
    if found == expected {
        Ok(())
    } else {
        Err(SimError::CountMismatch {
            what,
            found,
            expected,
        })
    }
}
