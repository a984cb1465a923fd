mod input;
mod menu;
mod render;

use clap::Parser;
use menu::{ChartTarget, ExportFormat, MenuCommand};
use pedidose_core::{
    build_default_catalog, compute_dose, export_history, export_history_csv, generate_chart,
    Catalog, ChartRange, Config, Error, MedicationProfile, Result, Session, Status,
};
use render::Theme;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pedidose")]
#[command(about = "Pediatric liquid-dose calculator", long_about = None)]
struct Cli {
    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory export files are written to
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    pedidose_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut catalog = build_default_catalog();
    catalog.extend_with(config.medications.custom.clone());
    let errors = catalog.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation("Invalid catalog".into()));
    }

    let export_dir = cli
        .export_dir
        .unwrap_or_else(|| config.data.export_dir.clone());
    let colored = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    let theme = Theme::new(colored);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let mut session = Session::new(config.limits.bounds());
    run(
        &mut input,
        &mut out,
        &catalog,
        &export_dir,
        &theme,
        &mut session,
    )
}

/// The menu REPL: one command at a time to completion, until exit or EOF.
fn run(
    input: &mut impl BufRead,
    out: &mut impl Write,
    catalog: &Catalog,
    export_dir: &Path,
    theme: &Theme,
    session: &mut Session,
) -> Result<()> {
    loop {
        render::write_menu(out, catalog, session)?;
        let Some(selection) = input::prompt_line(out, input, "\nSelect an option: ")? else {
            break; // EOF ends the session
        };
        let Some(command) = menu::parse(&selection, catalog.len()) else {
            theme.write_status(
                out,
                &Status::error(format!("Invalid selection '{}'", selection)),
            )?;
            continue;
        };

        tracing::debug!("Dispatching {:?}", command);
        session.status = None;

        match command {
            MenuCommand::Dose(i) => {
                dose_one(session, &catalog.medications[i], input, out, theme)?
            }
            MenuCommand::DoseAll => dose_all(session, catalog, input, out, theme)?,
            MenuCommand::DoseCustom => dose_custom(session, input, out, theme)?,
            MenuCommand::Chart => chart(session, catalog, input, out, theme)?,
            MenuCommand::SetWeightKg => set_weight_kg(session, input, out, theme)?,
            MenuCommand::SetWeightLb => set_weight_lb(session, input, out, theme)?,
            MenuCommand::ShowHistory => show_history(session, out)?,
            MenuCommand::ClearHistory => session.clear_history(),
            MenuCommand::Export => export(session, export_dir, input, out, theme)?,
            MenuCommand::Exit => {
                writeln!(out, "Goodbye.")?;
                break;
            }
        }

        if let Some(status) = session.status.clone() {
            theme.write_status(out, &status)?;
        }
    }
    Ok(())
}

/// Current weight, prompting for one inline if none is set yet.
fn ensure_weight(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<Option<f64>> {
    if let Some(weight) = session.weight_kg {
        return Ok(Some(weight));
    }
    let Some(weight) = input::prompt_positive(out, input, theme, "Patient weight (kg): ")? else {
        return Ok(None);
    };
    let status = session.set_weight_kg(weight).clone();
    theme.write_status(out, &status)?;
    Ok(Some(weight))
}

fn dose_one(
    session: &mut Session,
    med: &MedicationProfile,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    let Some(weight) = ensure_weight(session, input, out, theme)? else {
        return Ok(());
    };
    let entry = compute_dose(med, weight);
    let summary = entry.summary.clone();
    if session.history.add(entry) {
        writeln!(out, "  {}", summary)?;
        session.set_status(Status::success("Dose recorded"));
    } else {
        session.set_status(Status::info(format!(
            "Duplicate skipped: {} at {}kg is already in the history",
            med.name, weight
        )));
    }
    Ok(())
}

fn dose_all(
    session: &mut Session,
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    let Some(weight) = ensure_weight(session, input, out, theme)? else {
        return Ok(());
    };
    let mut added = 0;
    let mut skipped = 0;
    for med in &catalog.medications {
        let entry = compute_dose(med, weight);
        let summary = entry.summary.clone();
        if session.history.add(entry) {
            writeln!(out, "  {}", summary)?;
            added += 1;
        } else {
            skipped += 1;
        }
    }
    let status = if skipped == 0 {
        Status::success(format!("{} doses recorded", added))
    } else {
        Status::info(format!(
            "{} doses recorded, {} duplicates skipped",
            added, skipped
        ))
    };
    session.set_status(status);
    Ok(())
}

/// Prompt the fields of a one-off medication profile.
fn prompt_profile(
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<Option<MedicationProfile>> {
    let Some(name) = input::prompt_name(out, input, theme, "Medication name: ")? else {
        return Ok(None);
    };
    let Some(strength_mg) = input::prompt_positive(out, input, theme, "Strength (mg): ")? else {
        return Ok(None);
    };
    let Some(volume_ml) = input::prompt_positive(out, input, theme, "Reference volume (mL): ")?
    else {
        return Ok(None);
    };
    let Some(rate_mg_per_kg) = input::prompt_positive(out, input, theme, "Dose rate (mg/kg): ")?
    else {
        return Ok(None);
    };
    Ok(Some(MedicationProfile {
        name,
        strength_mg,
        volume_ml,
        rate_mg_per_kg,
    }))
}

fn dose_custom(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    let Some(med) = prompt_profile(input, out, theme)? else {
        return Ok(());
    };
    dose_one(session, &med, input, out, theme)
}

fn chart(
    session: &mut Session,
    catalog: &Catalog,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    render::write_chart_menu(out, catalog)?;
    let Some(selection) = input::prompt_line(out, input, "Chart for: ")? else {
        return Ok(());
    };
    let Some(target) = menu::parse_chart_target(&selection, catalog.len()) else {
        session.set_status(Status::error(format!("Invalid selection '{}'", selection)));
        return Ok(());
    };
    let med = match target {
        ChartTarget::Medication(i) => catalog.medications[i].clone(),
        ChartTarget::Custom => {
            let Some(profile) = prompt_profile(input, out, theme)? else {
                return Ok(());
            };
            profile
        }
    };

    let Some(start_kg) = input::prompt_positive(out, input, theme, "Start weight (kg): ")? else {
        return Ok(());
    };
    let Some(end_kg) = input::prompt_positive(out, input, theme, "End weight (kg): ")? else {
        return Ok(());
    };
    let Some(step_kg) = input::prompt_positive(out, input, theme, "Increment (kg): ")? else {
        return Ok(());
    };

    let range = match ChartRange::new(start_kg, end_kg, step_kg) {
        Ok(range) => range,
        Err(e) => {
            session.set_status(Status::error(e.to_string()));
            return Ok(());
        }
    };

    let rows = generate_chart(&med, &range, &session.history);
    let count = rows.len();
    for entry in rows {
        writeln!(out, "  {}", entry.summary)?;
        session.history.add(entry);
    }

    if count == 0 {
        session.set_status(Status::info("Chart added no new rows"));
    } else {
        session.set_status(Status::success(format!("{} chart rows added", count)));
    }
    Ok(())
}

fn set_weight_kg(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    let Some(weight) = input::prompt_positive(out, input, theme, "Patient weight (kg): ")? else {
        return Ok(());
    };
    session.set_weight_kg(weight);
    Ok(())
}

fn set_weight_lb(
    session: &mut Session,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    let Some(weight) = input::prompt_positive(out, input, theme, "Patient weight (lb): ")? else {
        return Ok(());
    };
    session.set_weight_lb(weight);
    Ok(())
}

fn show_history(session: &mut Session, out: &mut impl Write) -> Result<()> {
    if session.history.is_empty() {
        session.set_status(Status::info("History is empty"));
        return Ok(());
    }
    render::write_history(out, &session.history)?;
    session.set_status(Status::info(format!(
        "{} entries in history",
        session.history.len()
    )));
    Ok(())
}

fn export(
    session: &mut Session,
    export_dir: &Path,
    input: &mut impl BufRead,
    out: &mut impl Write,
    theme: &Theme,
) -> Result<()> {
    if session.history.is_empty() {
        session.set_status(Status::error(Error::EmptyHistory.to_string()));
        return Ok(());
    }

    let format = loop {
        let Some(line) = input::prompt_line(out, input, "Format: 1) text  2) csv [1]: ")? else {
            return Ok(());
        };
        match menu::parse_export_format(&line) {
            Some(format) => break format,
            None => theme.write_status(
                out,
                &Status::error(format!("Invalid selection '{}'", line)),
            )?,
        }
    };

    let result = match format {
        ExportFormat::Text => export_history(&session.history, export_dir),
        ExportFormat::Csv => export_history_csv(&session.history, export_dir),
    };
    match result {
        Ok(path) => session.set_status(Status::success(format!(
            "Exported {} entries to {}",
            session.history.len(),
            path.display()
        ))),
        Err(e) => session.set_status(Status::error(e.to_string())),
    };
    Ok(())
}
