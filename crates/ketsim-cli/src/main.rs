//! ketsim Command-Line Interface
//!
//! Generates seeded random circuits, evolves `|0…0⟩` through them and
//! cross-checks the bit-indexed kernel against the dense reference.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::common::{CircuitArgs, EmulatorKind};
use commands::generate::OutputFormat;
use commands::{generate, run, verify, version};
use config::{Config, LoggingSettings};

/// ketsim - dense state-vector emulation of seeded random circuits
#[derive(Parser)]
#[command(name = "ketsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (YAML)
    #[arg(short, long, global = true, env = "KETSIM_CONFIG")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random circuit and show its layers
    Generate {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Evolve |0…0⟩ through a random circuit
    Run {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Emulator to use
        #[arg(short, long, value_enum, default_value_t = EmulatorKind::Kernel)]
        emulator: EmulatorKind,

        /// Number of basis states to show
        #[arg(short, long, default_value = "8")]
        top: usize,

        /// Keep the kernel single-threaded
        #[arg(long)]
        serial: bool,
    },

    /// Compare the kernel against the dense reference
    Verify {
        #[command(flatten)]
        circuit: CircuitArgs,

        /// Maximum allowed amplitude deviation
        #[arg(long, default_value = "1e-9")]
        tolerance: f64,
    },

    /// Show version information
    Version,
}

/// Install the global subscriber.
///
/// `-v` flags take precedence over the configured level.
fn init_logging(verbose: u8, logging: &LoggingSettings) {
    let filter = match verbose {
        0 => logging.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false);

    if logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn dispatch(command: Commands, config: &Config) -> anyhow::Result<()> {
    let spec = config.circuit_spec();
    let kernel = config.kernel_config();

    match command {
        Commands::Generate { circuit, format } => generate::execute(circuit.apply(spec), format),

        Commands::Run {
            circuit,
            emulator,
            top,
            serial,
        } => {
            let kernel = if serial {
                ketsim_adapter_sim::KernelConfig {
                    parallel: false,
                    ..kernel
                }
            } else {
                kernel
            };
            run::execute(circuit.apply(spec), kernel, emulator, top)
        }

        Commands::Verify { circuit, tolerance } => {
            verify::execute(circuit.apply(spec), kernel, tolerance)
        }

        Commands::Version => {
            version::execute();
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")
        .and_then(|config| {
            init_logging(cli.verbose, &config.logging);
            dispatch(cli.command, &config)
        });

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
