//! Grade command: run the curve over scores given on the command line.

use anyhow::Result;
use gradebook_core::{GradeReport, compute_grades};
use std::fmt::Write;

pub fn run(scores: &[f64], json: bool) -> Result<()> {
    let report = compute_grades(scores)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }
    Ok(())
}

/// Plain-text table of a grade report
pub fn format_report(report: &GradeReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Mean: {:.2}  Std dev: {:.2}",
        report.mean, report.std_dev
    );
    let _ = writeln!(out, "{:<10} {:>10} {:>6} {:>6}", "Subject", "Score", "Grade", "Point");
    for s in &report.subjects {
        let _ = writeln!(
            out,
            "{:<10} {:>10} {:>6} {:>6}",
            s.label(),
            s.score,
            s.grade.short_name(),
            s.point
        );
    }
    let _ = writeln!(
        out,
        "Overall: {} ({:.2})",
        report.overall.grade, report.overall.mean_point
    );
    out
}
