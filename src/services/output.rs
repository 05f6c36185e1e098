use crate::domain::models::{AuditReport, JsonOut, Status};

/// Render the finished report to stdout, as JSON or sectioned text.
pub fn print_report(json: bool, report: &AuditReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.errors == 0,
                data: report,
            })?
        );
        return Ok(());
    }

    for finding in &report.findings {
        match finding.status {
            Status::Section => println!("\n── {}", finding.text),
            status => println!("{} {}", status.glyph(), finding.text),
        }
    }
    println!();
    println!(
        "summary: {} error(s), {} warning(s)",
        report.errors, report.warnings
    );
    println!("{}", report.verdict());
    Ok(())
}
