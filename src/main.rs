//! roster: manage a small student roster stored in a JSON file

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use roster::config;

mod commands;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a student roster", long_about = None)]
#[command(version)]
struct Cli {
    /// Roster file (defaults to storage.json next to the executable)
    #[arg(long, global = true, env = config::DATA_ENV)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a student
    Add {
        name: String,
        enrollment: String,
        courses: String,
        phone: String,
    },

    /// Show all students
    List,

    /// Change fields of a student
    Edit {
        /// Row number as shown by `list`
        row: usize,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        enrollment: Option<String>,

        #[arg(long)]
        courses: Option<String>,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Remove a student
    Delete {
        /// Row number as shown by `list`
        row: usize,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Find the Edit/Delete label under a pointer position in the table
    Locate {
        /// Pointer x in table pixels
        #[arg(allow_negative_numbers = true)]
        x: f32,

        /// Pointer y in table pixels
        #[arg(allow_negative_numbers = true)]
        y: f32,

        /// TTF/OTF font the table rows are drawn with
        #[arg(long)]
        font: Option<PathBuf>,

        /// Font size in pixels
        #[arg(long, default_value_t = config::DEFAULT_FONT_PX)]
        font_size: f32,

        /// Character cell width in pixels, used without --font
        #[arg(long, default_value_t = config::DEFAULT_CELL_WIDTH)]
        cell_width: f32,

        /// Extra pixels accepted around each label
        #[arg(long, default_value_t = roster::roster::hit_test::DEFAULT_TOLERANCE)]
        tolerance: f32,

        /// Carry out the located action
        #[arg(long)]
        apply: bool,

        /// Skip delete confirmation when applying
        #[arg(short, long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();
    let data = config::resolve_data_file(cli.data)?;
    tracing::debug!("Using roster at {}", data.display());

    let ok = match cli.command {
        Commands::Add {
            name,
            enrollment,
            courses,
            phone,
        } => commands::add::execute(&data, &name, &enrollment, &courses, &phone)?,

        Commands::List => {
            println!("{}", commands::list::execute(&data)?);
            true
        }

        Commands::Edit {
            row,
            name,
            enrollment,
            courses,
            phone,
        } => {
            let options = commands::edit::EditOptions {
                name,
                enrollment,
                courses,
                phone,
            };
            commands::edit::execute(&data, row, &options)?
        }

        Commands::Delete { row, yes } => commands::delete::execute(&data, row, yes)?,

        Commands::Locate {
            x,
            y,
            font,
            font_size,
            cell_width,
            tolerance,
            apply,
            yes,
        } => {
            let options = commands::locate::LocateOptions {
                font,
                font_size,
                cell_width,
                tolerance,
                apply,
                yes,
            };
            commands::locate::execute(&data, x, y, &options)?
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
