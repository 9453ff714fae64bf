//! Console score summary

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::report::AuditReport;

/// Score at or above which the headline is shown in green.
const GOOD_SCORE: f64 = 80.0;

/// Score below which the headline is shown in red.
const POOR_SCORE: f64 = 50.0;

/// Print the score summary to stdout with optional color.
pub fn print_summary(report: &AuditReport, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_summary(&mut stdout, report)
}

/// Write the score summary to any color-capable writer.
pub fn write_summary<W: WriteColor>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    let mut headline = ColorSpec::new();
    headline.set_bold(true).set_fg(Some(score_color(report.score)));

    out.set_color(&headline)?;
    writeln!(out, "API MATURITY SCORE: {:.1}/100", report.score)?;
    out.reset()?;

    writeln!(out, "   Routes analyzed: {}", report.routes_analyzed())?;
    writeln!(out, "   Needs improvement: {}", report.needs_improvement())?;
    writeln!(out)?;
    Ok(())
}

fn score_color(score: f64) -> Color {
    if score >= GOOD_SCORE {
        Color::Green
    } else if score >= POOR_SCORE {
        Color::Yellow
    } else {
        Color::Red
    }
}
