//! Calendar formatting utilities for terminal output

use crate::models::ReportEntry;
use crate::reports::ReportCalendar;

/// Format a flat entry list as aligned lines
pub fn format_entry_list(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return "Нет отчетов в выбранном диапазоне.".to_string();
    }

    let name_width = entries.iter().map(|e| e.name.chars().count()).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(entries.len() + 1);
    for entry in entries {
        let padding = name_width.saturating_sub(entry.name.chars().count());
        lines.push(format!(
            "{}  {}{}  {:>12}  {}",
            entry.due_date.format("%d.%m.%Y"),
            entry.name,
            " ".repeat(padding),
            entry.period_label,
            entry.instance
        ));
    }
    lines.join("\n")
}

/// Format entries grouped by due date with instance sub-headers
pub fn format_grouped(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return "Нет отчетов в выбранном диапазоне.".to_string();
    }

    let grouped = ReportCalendar::grouped_by_date_and_instance(entries);
    let mut lines: Vec<String> = Vec::new();

    for (due_date, by_instance) in &grouped {
        lines.push(format!("{}", due_date.format("%d.%m.%Y")));
        for (instance, reports) in by_instance {
            lines.push(format!("  {}:", instance));
            for report in reports {
                lines.push(format!("    {} ({})", report.name, report.period_label));
            }
        }
    }
    lines.join("\n")
}
