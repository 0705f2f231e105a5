use std::time::Instant;

use crate::{
    audit::{AuditOptions, AuditReport, cross_check},
    rotation::{RotationError, Strategy},
};

pub mod audit;
mod helper;
pub mod rotation;
pub mod sequence;

pub use rotation::{who_is_next, who_is_next_with};

/// Verbosity level enum
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VerbosityLevel {
    OnlyResult = 0,
    All = 1,
}

/// Enum representing the audit exit codes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuditExitCode {
    Consistent = 0,
    Diverged = 2,
}

/// Duration between `start` and `end` in seconds
#[allow(clippy::cast_precision_loss)]
fn duration_in_seconds(start: Instant, end: Instant) -> f64 {
    (end - start).as_micros() as f64 / 1e6
}

/// Print the audit parameters
fn print_audit_options(opts: &AuditOptions) {
    print!(
        "
============================[ Audit Parameters ]===============================
|                                                                             |
|  Exhaustive participants: {:>12}                                      |
|  Exhaustive positions:    {:>12}                                      |
|  Random samples:          {:>12}                                      |
|  Max random position:     {:>12}                                      |
|  Seed:                    {:>12}                                      |
|                                                                             |
",
        opts.max_participants,
        opts.exhaustive_positions,
        opts.random_samples,
        opts.max_random_position,
        opts.seed
    );
}

/// Print stats after the audit finished
#[allow(clippy::cast_precision_loss)]
fn print_audit_summary(report: &AuditReport, start_time: Instant, end_time: Instant) {
    let total_time = duration_in_seconds(start_time, end_time);
    let checks_per_s = report.checked as f64 / total_time;
    print!(
        "============================[      Summary      ]==============================
|                                                                             |
|  #Checked:             {:>12} ({:>12.3}/sec)                      |
|  #Divergences:         {:>12}                                         |
|  Total time:           {:>12.6}                                         |
|                                                                             |
===============================================================================
",
        report.checked,
        checks_per_s,
        report.divergences.len(),
        total_time
    );
}

/// Print every divergence found
fn print_divergences(report: &AuditReport) {
    println!();
    if report.is_consistent() {
        println!("CONSISTENT");
        return;
    }
    println!("DIVERGED");
    for d in &report.divergences {
        println!(
            "position {} participants {}: {} {:?}, {} {:?}, expected {:?}",
            d.position,
            d.participants,
            Strategy::Rounds.name(),
            d.rounds,
            Strategy::Turns.name(),
            d.turns,
            d.expected
        );
    }
}

/// Resolves and prints the recipient of position `n` among `names`
pub fn print_recipient(
    n: i64,
    names: &[String],
    logging_level: VerbosityLevel,
) -> Result<(), RotationError> {
    let start_time = Instant::now();
    let recipient = who_is_next(n, names)?;
    if logging_level == VerbosityLevel::All {
        let end_time = Instant::now();
        println!(
            "{} participants, resolved by {} in {:.6}s",
            names.len(),
            Strategy::CANONICAL.name(),
            duration_in_seconds(start_time, end_time)
        );
    }
    println!("{recipient}");
    Ok(())
}

/// Runs the strategy audit and prints its outcome
#[must_use]
pub fn run_audit(opts: &AuditOptions, logging_level: VerbosityLevel) -> AuditExitCode {
    let start_time = Instant::now();
    if logging_level == VerbosityLevel::All {
        print_audit_options(opts);
    }

    let report = cross_check(opts);

    if logging_level == VerbosityLevel::All {
        let end_time = Instant::now();
        print_audit_summary(&report, start_time, end_time);
    }
    print_divergences(&report);

    if report.is_consistent() {
        AuditExitCode::Consistent
    } else {
        AuditExitCode::Diverged
    }
}
