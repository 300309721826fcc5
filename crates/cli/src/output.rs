//! Text rendering of views and replay reports

use crate::script::{ReplayReport, StepOutcome};
use colored::Colorize;
use sitemap_core::{CHOOSE_CONTENT_TYPE_LABEL, CHOOSE_UID_FIELD_LABEL};
use sitemap_form::{InputOutcome, ModalView};
use std::fmt::Write;

/// Render a modal view as indented text
pub fn render_view(view: &ModalView) -> String {
    let mut out = String::new();

    if !view.is_open {
        let _ = writeln!(out, "{}", "Modal closed".dimmed());
        return out;
    }

    let mode = match view.phase.edit_target() {
        Some(target) => format!("editing {target}"),
        None => "creating".to_string(),
    };
    let _ = writeln!(out, "{} - {} ({mode})", "Sitemap entry".bold(), view.settings_type);

    let lock = if view.content_type.locked { " [locked]" } else { "" };
    let _ = writeln!(
        out,
        "  content type: {}{lock}",
        view.content_type.value.label(CHOOSE_CONTENT_TYPE_LABEL)
    );

    if let Some(uid) = &view.uid_field {
        let _ = writeln!(
            out,
            "  uid field:    {} {}",
            uid.value.label(CHOOSE_UID_FIELD_LABEL),
            enabled_marker(uid.enabled)
        );
        let _ = writeln!(out, "    options: {}", uid.option_labels().join(", "));
    }

    for field in &view.fields {
        let value = field
            .value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "  {:<13} {} {}",
            format!("{}:", field.name),
            value,
            enabled_marker(field.enabled)
        );
    }

    if let Some(area) = &view.area {
        let _ = writeln!(out, "  area:         {} {}", area.value, enabled_marker(area.enabled));
    }
    if let Some(include) = view.include_homepage {
        let _ = writeln!(out, "  homepage:     {include}");
    }

    match view.submit_block {
        None => {
            let _ = writeln!(out, "  save:         {}", "enabled".green());
        }
        Some(block) => {
            let _ = writeln!(out, "  save:         {} ({block})", "disabled".red());
        }
    }
    out
}

/// Render a replay report as text
pub fn render_report(report: &ReplayReport) -> String {
    let mut out = String::new();
    for step in &report.steps {
        let outcome = match &step.outcome {
            StepOutcome::Navigated { open: true } => "opened".cyan(),
            StepOutcome::Navigated { open: false } => "closed".cyan(),
            StepOutcome::Input { outcome } => outcome_label(*outcome),
        };
        let _ = writeln!(out, "{:>3}. {:<10} {:?}", step.index + 1, outcome, step.step);
    }
    let _ = writeln!(out);
    out.push_str(&render_view(&report.view));
    let _ = writeln!(out, "{} submission(s)", report.submissions.len());
    for submission in &report.submissions {
        let _ = writeln!(
            out,
            "  {} {} uid={} area={}",
            submission.settings_type,
            submission.target,
            submission.uid_field.as_deref().unwrap_or("-"),
            submission.area
        );
    }
    out
}

fn outcome_label(outcome: InputOutcome) -> colored::ColoredString {
    match outcome {
        InputOutcome::Applied => "applied".green(),
        InputOutcome::Discarded => "discarded".yellow(),
        InputOutcome::Disabled => "disabled".red(),
    }
}

fn enabled_marker(enabled: bool) -> &'static str {
    if enabled { "" } else { "(disabled)" }
}
