//! Output formatting for analysis results.

use anyhow::Result;
use rag::{AnalysisResult, Severity};
use std::fmt::Write as _;

use crate::OutputFormat;

/// Print an analysis result in the specified format.
pub fn print(result: &AnalysisResult, format: OutputFormat, pretty: bool) -> Result<()> {
    let rendered = render(result, format, pretty)?;
    print!("{rendered}");
    Ok(())
}

/// Renders `result`; every format ends with a newline unless it is empty.
pub fn render(result: &AnalysisResult, format: OutputFormat, pretty: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => render_json(result, pretty)?,
        OutputFormat::Text => render_text(result),
        OutputFormat::Compact => render_compact(result),
    })
}

fn render_json(result: &AnalysisResult, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(format!("{json}\n"))
}

// Text formats print 1-based columns; JSON keeps them 0-based.

fn render_text(result: &AnalysisResult) -> String {
    let (errors, warnings) = result.count_by_severity();
    let file = result.file_path.display();
    let mut out = String::new();

    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
        };

        let _ = writeln!(
            out,
            "{} at {}:{}:{}",
            violation.rule_id,
            file,
            violation.location.line,
            violation.location.column + 1,
        );
        let _ = writeln!(out, "  {severity_indicator}: {}", violation.message);
        let _ = writeln!(
            out,
            "  = in {} `{}`",
            violation.function.kind, violation.function.name
        );
        out.push('\n');
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let _ = writeln!(
        out,
        "{summary_color}Found {errors} error(s), {warnings} warning(s) in {file}\x1b[0m"
    );
    out
}

fn render_compact(result: &AnalysisResult) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        let _ = writeln!(
            out,
            "{}:{}:{}: {} [{}] {}",
            result.file_path.display(),
            violation.location.line,
            violation.location.column + 1,
            violation.severity,
            violation.rule_id,
            violation.message,
        );
    }
    out
}
