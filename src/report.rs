use std::fmt;

use crate::sim::SimResult;

/// Human readable summary of one algorithm's run.
pub struct Report<'a>(pub &'a SimResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let averages = result.metrics.averages();

        writeln!(f, "{}:", result.algorithm.name())?;
        writeln!(f, "\tGantt: {}", result.timeline)?;
        writeln!(f, "\tAvg. TT: {}", format_average(averages.map(|a| a.turnaround)))?;
        write!(f, "\tAvg. WT: {}", format_average(averages.map(|a| a.waiting)))
    }
}

/// Shortest decimal form, no trailing zeros or point. Undefined is `NaN`.
pub fn format_average(value: Option<f64>) -> String {
    value.unwrap_or(f64::NAN).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        scheduler::Quantum,
        sim::{Algorithm, ProcessSet, Workload},
    };

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_average(Some(2.0)), "2");
        assert_eq!(format_average(Some(2.5)), "2.5");
        assert_eq!(format_average(Some(4.0 / 3.0)), "1.3333333333333333");
        assert_eq!(format_average(None), "NaN");
    }

    #[test]
    fn renders_full_report() {
        let workload = Workload {
            processes: ProcessSet::from_times(&[0, 1], &[8, 4]).unwrap(),
            first_quantum: Quantum::MIN,
            second_quantum: Quantum::MIN,
        };
        let result = Algorithm::Srtf.run(&workload);

        assert_eq!(
            Report(&result).to_string(),
            "Shortest remaining time first:\n\
             \tGantt: (0) P0 (1) P1 (5) P0 (12)\n\
             \tAvg. TT: 8\n\
             \tAvg. WT: 2"
        );
    }
}
