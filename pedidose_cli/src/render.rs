//! Console rendering: menu, history, and status styling.
//!
//! The core reports status severity as an enum; this module is the only
//! place severity turns into ANSI styling. Styling is disabled by
//! `--no-color` or the NO_COLOR environment variable.

use crate::menu::FIXED_COMMANDS;
use pedidose_core::{Catalog, DoseHistory, Session, Status, StatusLevel};
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Maps status severity to terminal styling.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn color_for(&self, level: StatusLevel) -> &'static str {
        if !self.colored {
            return "";
        }
        match level {
            StatusLevel::Info => CYAN,
            StatusLevel::Success => GREEN,
            StatusLevel::Caution => YELLOW,
            StatusLevel::Error => RED,
        }
    }

    fn marker(level: StatusLevel) -> &'static str {
        match level {
            StatusLevel::Info => "ℹ",
            StatusLevel::Success => "✓",
            StatusLevel::Caution => "!",
            StatusLevel::Error => "✗",
        }
    }

    /// Render one status line, e.g. `✓ Weight set to 10kg`.
    pub fn write_status(&self, out: &mut impl Write, status: &Status) -> io::Result<()> {
        let reset = if self.colored { RESET } else { "" };
        writeln!(
            out,
            "{}{} {}{}",
            self.color_for(status.level),
            Self::marker(status.level),
            status.message,
            reset
        )
    }
}

/// Render the main menu with numbering that tracks the catalog order.
pub fn write_menu(out: &mut impl Write, catalog: &Catalog, session: &Session) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "──────── Pediatric Dose Calculator ────────")?;
    match session.weight_kg {
        Some(weight) => writeln!(
            out,
            "  Weight: {}kg | History: {} entries",
            weight,
            session.history.len()
        )?,
        None => writeln!(
            out,
            "  Weight: not set | History: {} entries",
            session.history.len()
        )?,
    }
    writeln!(out)?;

    for (i, med) in catalog.medications.iter().enumerate() {
        writeln!(
            out,
            "  {:2}) Dose: {} ({}, {}mg/kg)",
            i + 1,
            med.name,
            med.concentration_label(),
            med.rate_mg_per_kg
        )?;
    }
    for (i, (_, label)) in FIXED_COMMANDS.iter().enumerate() {
        writeln!(out, "  {:2}) {}", catalog.len() + i + 1, label)?;
    }
    Ok(())
}

/// Render the chart submenu: one option per medication, then custom.
pub fn write_chart_menu(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Dosing chart for:")?;
    for (i, med) in catalog.medications.iter().enumerate() {
        writeln!(out, "  {:2}) {}", i + 1, med.name)?;
    }
    writeln!(out, "  {:2}) Custom medication", catalog.len() + 1)?;
    Ok(())
}

/// Render the history, numbered, in insertion order.
pub fn write_history(out: &mut impl Write, history: &DoseHistory) -> io::Result<()> {
    for (i, entry) in history.all().iter().enumerate() {
        writeln!(out, "  {:3}. {}", i + 1, entry.summary)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pedidose_core::build_default_catalog;

    #[test]
    fn test_status_line_plain() {
        let theme = Theme::new(false);
        let mut buf = Vec::new();
        theme
            .write_status(&mut buf, &Status::success("Weight set to 10kg"))
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "✓ Weight set to 10kg\n");
    }

    #[test]
    fn test_status_line_colored() {
        let theme = Theme::new(true);
        let mut buf = Vec::new();
        theme.write_status(&mut buf, &Status::error("boom")).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(RED));
        assert!(text.ends_with(&format!("{}\n", RESET)));
    }

    #[test]
    fn test_menu_lists_all_options() {
        let catalog = build_default_catalog();
        let session = Session::default();
        let mut buf = Vec::new();
        write_menu(&mut buf, &catalog, &session).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1) Dose: Acetaminophen (160mg/5mL, 15mg/kg)"));
        assert!(text.contains("12) Exit"));
        assert!(text.contains("Weight: not set"));
    }
}
