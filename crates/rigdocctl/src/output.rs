//! Terminal rendering - clean, sysadmin-style output.
//!
//! No emojis. Score bars and colors carry the ranking at a glance;
//! everything stays readable with colors stripped.

use crate::history::{HistoryEntry, HISTORY_CAP};
use owo_colors::OwoColorize;
use rigdoc_core::{Cause, ConfidenceLabel, DiagnosisRun, ResultItem};

/// Render the numbered symptom checklist.
pub fn render_symptom_list(symptoms: &[String]) {
    println!();
    println!("KNOWN SYMPTOMS ({})", symptoms.len());
    println!("{}", "-".repeat(60).dimmed());
    for (i, symptom) in symptoms.iter().enumerate() {
        println!("  {}  {}", format!("[{:>2}]", i + 1).cyan(), symptom);
    }
    println!();
}

/// Render the full catalog with weights and remedies.
pub fn render_causes(causes: &[Cause]) {
    println!();
    println!("FAULT CATALOG ({} causes)", causes.len());
    println!("{}", "-".repeat(60).dimmed());
    for cause in causes {
        println!();
        println!(
            "  {}  {}",
            format!("#{}", cause.id).cyan(),
            cause.name.bright_white().bold()
        );
        for sw in &cause.symptoms {
            println!("     {}  {}", format!("{:.2}", sw.weight).dimmed(), sw.symptom);
        }
        println!("     {} {}", "Fix:".green(), cause.remedy);
    }
    println!();
}

/// Render one diagnosis, best match first.
pub fn render_run(run: &DiagnosisRun) {
    println!();
    if run.results.is_empty() {
        display_info("No known cause matches the observed symptoms.");
        println!();
        return;
    }

    let observed: Vec<String> = run
        .observation
        .iter()
        .map(|(symptom, confidence)| {
            if confidence < 1.0 {
                format!("{} ({:.0}% sure)", symptom, confidence * 100.0)
            } else {
                symptom.to_string()
            }
        })
        .collect();
    println!("{} {}", "Observed:".dimmed(), observed.join(", ").dimmed());
    println!();

    println!("PROBABLE CAUSES");
    println!("{}", "-".repeat(60).dimmed());

    for (rank, item) in run.results.iter().enumerate() {
        render_result_item(rank + 1, item);
    }
    println!();
}

fn render_result_item(rank: usize, item: &ResultItem) {
    let pct = item.percent();
    let label = item.label();

    println!();
    let headline = format!("{}. {}", rank, item.cause_name);
    // High-scoring faults are the alarming ones here.
    if label == ConfidenceLabel::VeryConfident {
        println!("  {}", headline.bright_red().bold());
    } else {
        println!("  {}", headline.bright_white().bold());
    }
    println!(
        "     {} {:>3}%  ({})",
        score_bar(pct),
        pct,
        colored_label(label)
    );
    println!(
        "     Matched {} of {} known symptoms",
        item.matched_symptoms, item.total_symptoms
    );
    println!("     {} {}", "Fix:".green(), item.remedy);
}

/// Render archived runs, newest first.
pub fn render_history(entries: &[HistoryEntry]) {
    println!();
    if entries.is_empty() {
        display_info("No archived diagnosis runs yet.");
        println!();
        return;
    }

    println!("DIAGNOSIS HISTORY ({} of max {})", entries.len(), HISTORY_CAP);
    println!("{}", "-".repeat(60).dimmed());

    for entry in entries.iter().rev() {
        let when = entry.recorded_at.format("%Y-%m-%d %H:%M UTC");
        println!();
        println!(
            "  {}  {}",
            when.to_string().cyan(),
            format!("run {}", entry.id).dimmed()
        );
        match entry.run.top() {
            Some(top) => println!(
                "     {} ({}%, {})  [{} symptoms observed]",
                top.cause_name.bright_white(),
                top.percent(),
                top.label(),
                entry.run.observation.len()
            ),
            None => println!(
                "     No matching cause  [{} symptoms observed]",
                entry.run.observation.len()
            ),
        }
    }
    println!();
}

/// 20-char score bar, filled proportionally to the percentage.
fn score_bar(pct: u8) -> String {
    let bar_width = 20;
    let filled = (pct as usize * bar_width) / 100;
    let empty = bar_width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

fn colored_label(label: ConfidenceLabel) -> String {
    match label {
        ConfidenceLabel::VeryConfident => label.to_string().bright_red().bold().to_string(),
        ConfidenceLabel::Confident => label.to_string().yellow().to_string(),
        ConfidenceLabel::FairlyConfident => label.to_string().cyan().to_string(),
        ConfidenceLabel::LowConfidence => label.to_string().dimmed().to_string(),
    }
}

/// Display an error
pub fn display_error(message: &str) {
    eprintln!();
    eprintln!("[ERROR] {}", message.red());
    eprintln!();
}

/// Display a success message
pub fn display_success(message: &str) {
    println!();
    println!("[OK] {}", message.green());
    println!();
}

/// Display an info message
pub fn display_info(message: &str) {
    println!("[INFO] {}", message);
}

/// Display a warning
///
/// Warnings go to stderr like errors do; stdout carries only command
/// output so `--json` stays machine-parseable.
pub fn display_warning(message: &str) {
    eprintln!("[WARNING] {}", message.yellow());
}
