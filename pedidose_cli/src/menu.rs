//! Menu command table.
//!
//! Selection parsing is decoupled from behavior: a numbered selection maps
//! onto a [`MenuCommand`], and the REPL dispatches on the command. Dose
//! options for individual medications come first, so their numbering
//! tracks the catalog order; the fixed commands follow.

/// One user-selectable action from the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    /// Dose for the catalog medication at this index.
    Dose(usize),
    DoseAll,
    DoseCustom,
    Chart,
    SetWeightKg,
    SetWeightLb,
    ShowHistory,
    ClearHistory,
    Export,
    Exit,
}

/// Fixed commands appended after the per-medication dose options, in menu
/// order.
pub const FIXED_COMMANDS: [(MenuCommand, &str); 9] = [
    (MenuCommand::DoseAll, "Dose: all medications"),
    (MenuCommand::DoseCustom, "Dose: custom medication"),
    (MenuCommand::Chart, "Dosing chart"),
    (MenuCommand::SetWeightKg, "Set weight (kg)"),
    (MenuCommand::SetWeightLb, "Set weight (lb)"),
    (MenuCommand::ShowHistory, "Show history"),
    (MenuCommand::ClearHistory, "Clear history"),
    (MenuCommand::Export, "Export history"),
    (MenuCommand::Exit, "Exit"),
];

/// Parse a main-menu selection against a catalog of `med_count` entries.
///
/// Returns `None` for anything that is not a listed option number; the
/// caller re-prompts, never crashes.
pub fn parse(selection: &str, med_count: usize) -> Option<MenuCommand> {
    let n: usize = selection.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    if n <= med_count {
        return Some(MenuCommand::Dose(n - 1));
    }
    FIXED_COMMANDS
        .get(n - med_count - 1)
        .map(|(command, _)| *command)
}

/// Target of a dosing chart: a catalog medication or a one-off entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartTarget {
    Medication(usize),
    Custom,
}

/// Parse a chart-submenu selection (1..=med_count, then custom).
pub fn parse_chart_target(selection: &str, med_count: usize) -> Option<ChartTarget> {
    let n: usize = selection.trim().parse().ok()?;
    if n == 0 {
        return None;
    }
    if n <= med_count {
        Some(ChartTarget::Medication(n - 1))
    } else if n == med_count + 1 {
        Some(ChartTarget::Custom)
    } else {
        None
    }
}

/// Export file format choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
}

/// Parse the export-format prompt; empty input defaults to text.
pub fn parse_export_format(selection: &str) -> Option<ExportFormat> {
    match selection.trim() {
        "" | "1" => Some(ExportFormat::Text),
        "2" => Some(ExportFormat::Csv),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medication_selections_map_to_indices() {
        assert_eq!(parse("1", 3), Some(MenuCommand::Dose(0)));
        assert_eq!(parse("3", 3), Some(MenuCommand::Dose(2)));
    }

    #[test]
    fn test_fixed_commands_follow_catalog() {
        assert_eq!(parse("4", 3), Some(MenuCommand::DoseAll));
        assert_eq!(parse("6", 3), Some(MenuCommand::Chart));
        assert_eq!(parse("12", 3), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_numbering_shifts_with_catalog_size() {
        // With a custom medication in the catalog everything moves up one
        assert_eq!(parse("4", 4), Some(MenuCommand::Dose(3)));
        assert_eq!(parse("13", 4), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_invalid_selections_rejected() {
        assert_eq!(parse("0", 3), None);
        assert_eq!(parse("13", 3), None);
        assert_eq!(parse("abc", 3), None);
        assert_eq!(parse("", 3), None);
        assert_eq!(parse("-1", 3), None);
    }

    #[test]
    fn test_chart_target_parse() {
        assert_eq!(parse_chart_target("2", 3), Some(ChartTarget::Medication(1)));
        assert_eq!(parse_chart_target("4", 3), Some(ChartTarget::Custom));
        assert_eq!(parse_chart_target("5", 3), None);
        assert_eq!(parse_chart_target("x", 3), None);
    }

    #[test]
    fn test_export_format_defaults_to_text() {
        assert_eq!(parse_export_format(""), Some(ExportFormat::Text));
        assert_eq!(parse_export_format("1"), Some(ExportFormat::Text));
        assert_eq!(parse_export_format("2"), Some(ExportFormat::Csv));
        assert_eq!(parse_export_format("3"), None);
    }
}
