use clap::{Parser, Subcommand, ValueEnum};
use oic_app::{
    AppError, AppResult, Case, Mode, PrintSheet, Session, Solved, inputs_table, load_case,
    write_case_file,
};
use oic_core::convert;
use oic_fluids::{CoolPropModel, Species, filter_catalog, fluid_info};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "oic-cli")]
#[command(about = "Oil-injected compressor calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a compressor from measured data
    Mode1 {
        /// Path to a mode1 case YAML file
        case_path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Predict refrigeration / heat pump performance
    Mode2 {
        /// Path to a mode2 case YAML file
        case_path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Predict gas compression performance
    Mode3 {
        /// Path to a mode3 case YAML file
        case_path: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Evaluate a mode1 case and seed a mode2 case from it
    Transfer {
        /// Path to a mode1 case YAML file
        case_path: PathBuf,
        /// Write the seeded mode2 case here instead of printing it
        #[arg(short, long)]
        write: Option<PathBuf>,
    },
    /// List supported fluids
    Fluids {
        /// Filter by name or alias
        query: Option<String>,
    },
    /// Show the critical point and molar mass of a fluid
    FluidInfo {
        /// Fluid name or alias (e.g. R134a, nitrogen)
        name: String,
    },
    /// Print a sheet (header, inputs, report) for any case
    Print {
        /// Path to a case YAML file
        case_path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> AppResult<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Mode1 { case_path, format } => cmd_solve(&case_path, Mode::Mode1, format),
        Commands::Mode2 { case_path, format } => cmd_solve(&case_path, Mode::Mode2, format),
        Commands::Mode3 { case_path, format } => cmd_solve(&case_path, Mode::Mode3, format),
        Commands::Transfer { case_path, write } => cmd_transfer(&case_path, write.as_deref()),
        Commands::Fluids { query } => {
            cmd_fluids(query.as_deref().unwrap_or(""));
            Ok(())
        }
        Commands::FluidInfo { name } => cmd_fluid_info(&name),
        Commands::Print { case_path } => cmd_print(&case_path),
    }
}

fn new_session() -> Session {
    Session::new(Arc::new(CoolPropModel::new()))
}

fn load_for(case_path: &Path, expected: Mode) -> AppResult<Case> {
    let case = load_case(case_path)?;
    if case.mode() != expected {
        return Err(AppError::Case(format!(
            "{} holds a {} case, expected {}",
            case_path.display(),
            case.mode(),
            expected
        )));
    }
    Ok(case)
}

fn cmd_solve(case_path: &Path, mode: Mode, format: Format) -> AppResult<()> {
    let case = load_for(case_path, mode)?;
    let solved = new_session().solve_case(&case)?;
    emit(&solved, format)
}

fn emit(solved: &Solved, format: Format) -> AppResult<()> {
    match format {
        Format::Text => print!("{}", solved.render()),
        Format::Json => {
            let json = serde_json::to_string_pretty(solved)
                .map_err(|e| AppError::Case(format!("Failed to serialize result: {}", e)))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn cmd_transfer(case_path: &Path, write: Option<&Path>) -> AppResult<()> {
    let case = load_for(case_path, Mode::Mode1)?;
    let mut session = new_session();
    session.solve_case(&case)?;
    let transfer = session.transfer_mode1_to_mode2()?;

    // Notices go to stderr; the YAML carries them again as comments.
    for notice in &transfer.notices {
        eprintln!("Note: {notice}");
    }

    let yaml = transfer.to_case_yaml(*session.options())?;
    match write {
        Some(path) => {
            write_case_file(path, &yaml)?;
            info!(path = %path.display(), "Mode 2 case written");
            eprintln!("✓ Mode 2 case written to {}", path.display());
        }
        None => print!("{yaml}"),
    }
    Ok(())
}

fn cmd_fluids(query: &str) {
    let entries = filter_catalog(query);
    if entries.is_empty() {
        println!("No fluids match '{query}'");
        return;
    }
    for entry in entries {
        let aliases = if entry.aliases.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.aliases.join(", "))
        };
        println!(
            "  {:<10} {:<22} {:?}{}",
            entry.species.key(),
            entry.display_name,
            entry.family,
            aliases
        );
    }
}

fn cmd_fluid_info(name: &str) -> AppResult<()> {
    let species: Species = name.parse()?;
    let info = fluid_info(&CoolPropModel::new(), species)?;
    println!("{} ({:?})", info.display_name, info.family);
    println!("  Molar mass: {:.3} g/mol", info.molar_mass * 1e3);
    match (info.critical_temperature, info.critical_pressure) {
        (Some(t), Some(p)) => {
            println!(
                "  Critical temperature: {:.2} °C",
                convert::kelvin_to_celsius(t.value)
            );
            println!("  Critical pressure: {:.3} bar", convert::pa_to_bar(p.value));
        }
        _ => println!("  Critical point: unavailable"),
    }
    Ok(())
}

fn cmd_print(case_path: &Path) -> AppResult<()> {
    let case = load_case(case_path)?;
    let solved = new_session().solve_case(&case)?;
    let sheet = PrintSheet::new(
        format!("{}: {}", case.mode(), case.mode().title()),
        chrono::Local::now().naive_local(),
        inputs_table(&case),
        solved.render(),
    );
    print!("{}", sheet.render());
    Ok(())
}
