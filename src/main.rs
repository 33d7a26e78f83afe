//! h5browse - browse HDF5 files from the command line.

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use h5browse::config::{Config, DEFAULT_EXTENSION};
use h5browse::data::DataReader;
use h5browse::file_browser::Session;
use h5browse::ui::{Console, Theme};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "h5browse")]
#[command(about = "Interactively browse the HDF5 files in a directory", long_about = None)]
struct Args {
    /// Directory to look for data files in
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Extension of the files to offer
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// Rows shown per page when a dataset is opened
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    page_size: u64,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Never style output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting h5browse");
    }

    if !args.dir.is_dir() {
        eprintln!("Error: Directory not found: {}", args.dir.display());
        std::process::exit(1);
    }

    let stdout = io::stdout();
    let color = !args.no_color && stdout.is_tty();
    let config = Config {
        color,
        ..Config::default()
    }
    .with_data_dir(args.dir)
    .with_extension(&args.ext)
    .with_page_size(usize::try_from(args.page_size).unwrap_or(usize::MAX));

    let mut console = Console::new(io::stdin().lock(), stdout, Theme::new(config.color));
    let mut session = Session::new(config, DataReader::open);
    session.run(&mut console)?;

    tracing::info!("h5browse exited");
    Ok(())
}
