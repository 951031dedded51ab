use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::checks::{Finding, PackReport, Severity};

pub fn generate_console_report(
    out: &mut dyn Write,
    report: &PackReport,
    strict: bool,
    duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Config Pack Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(out, "Data directory: {}", report.data_dir)?;
    writeln!(out, "Battle options checked: {}", report.options_checked)?;
    writeln!(out, "Errors: {}", report.errors().to_string().red())?;
    writeln!(out, "Warnings: {}", report.warnings().to_string().yellow())?;
    writeln!(out, "Total time: {duration:?}")?;
    writeln!(out)?;

    for finding in &report.findings {
        let tag = match finding.severity {
            Severity::Error => "❌ ERROR".red(),
            Severity::Warning => "⚠️  WARN".yellow(),
        };
        writeln!(out, "{tag} {} {}", location(finding).bold(), finding.message)?;
    }

    let verdict = if report.failed(strict) {
        "❌ FAIL".red().bold()
    } else {
        "✅ PASS".green().bold()
    };
    writeln!(out, "{verdict}")?;
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &PackReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &PackReport) -> Result<()> {
    writeln!(out, "# Pokefolio Config Pack Report\n")?;
    writeln!(out, "- Data directory: `{}`", report.data_dir)?;
    writeln!(out, "- Battle options checked: {}", report.options_checked)?;
    writeln!(out, "- Errors: {}", report.errors())?;
    writeln!(out, "- Warnings: {}\n", report.warnings())?;

    if report.findings.is_empty() {
        writeln!(out, "_No problems found._")?;
        return Ok(());
    }
    writeln!(out, "| Severity | Location | Message |")?;
    writeln!(out, "|----------|----------|---------|")?;
    for finding in &report.findings {
        let severity = match finding.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        writeln!(
            out,
            "| {severity} | {} | {} |",
            location(finding),
            finding.message.replace('|', "\\|")
        )?;
    }
    Ok(())
}

fn location(finding: &Finding) -> String {
    match (finding.option.as_deref(), finding.file.as_deref()) {
        (Some(option), Some(file)) => format!("{option} ({file})"),
        (Some(option), None) => option.to_string(),
        (None, Some(file)) => file.to_string(),
        (None, None) => "site".to_string(),
    }
}
