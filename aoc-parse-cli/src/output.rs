//! Output formatting for parsed lines

use crate::executor::LineResult;
use chrono::TimeDelta;

/// Output formatter for line results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &LineResult) {
        match &result.answer {
            Ok(value) if self.quiet => println!("{}", value),
            Ok(value) => println!(
                "Line {}: {} (parse: {})",
                result.line,
                value,
                format_duration(result.parse_duration)
            ),
            Err(e) => eprintln!("Line {}: Error - {}", result.line, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[LineResult]) {
        if self.quiet {
            return;
        }

        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = results.len() - successes;
        let total_parse_time: TimeDelta = results.iter().map(|r| r.parse_duration).sum();

        println!();
        println!("--- Summary ---");
        println!("Lines: {} parsed, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Format a TimeDelta for display, `N/A` when it overflows microseconds
fn format_duration(d: TimeDelta) -> String {
    match d.num_microseconds() {
        None => "N/A".to_string(),
        Some(micros) if micros < 0 => format!("-{}", format_micros(micros.unsigned_abs().into())),
        Some(micros) => format_micros(micros.unsigned_abs().into()),
    }
}

fn format_std_duration(d: std::time::Duration) -> String {
    format_micros(d.as_micros())
}

/// Pick the largest unit that keeps the value at or above 1
fn format_micros(micros: u128) -> String {
    const UNITS: [(u128, &str); 2] = [(1_000_000, "s"), (1_000, "ms")];

    UNITS
        .iter()
        .find(|(scale, _)| micros >= *scale)
        .map_or_else(
            || format!("{micros}µs"),
            |(scale, unit)| format!("{:.2}{unit}", micros as f64 / *scale as f64),
        )
}
