use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use powgen::config::{DEFAULT_LOWER, DEFAULT_UPPER};
use powgen::{power, ExponentRange, Table};

/// Writes the cached power-of-five table to standard output.
#[derive(Parser, Debug)]
#[command(name = "powgen", version, disable_version_flag = true)]
struct Args {
	/// lower exponent
	#[arg(
		short = 'l',
		long = "lower",
		value_name = "LOWER",
		default_value_t = DEFAULT_LOWER,
		allow_negative_numbers = true
	)]
	lower: i32,

	/// upper exponent
	#[arg(
		short = 'u',
		long = "upper",
		value_name = "UPPER",
		default_value_t = DEFAULT_UPPER,
		allow_negative_numbers = true
	)]
	upper: i32,

	/// print version
	#[arg(short = 'v', long = "version", action = ArgAction::Version)]
	version: Option<bool>,
}

fn main() -> ExitCode {
	let args = Args::parse();
	init_tracing();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(error) => {
			eprintln!("powgen: {error:#}");
			ExitCode::FAILURE
		}
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

fn run(args: &Args) -> anyhow::Result<()> {
	let range = ExponentRange::new(args.lower, args.upper)?;
	info!(lower = range.lower(), upper = range.upper(), entries = range.count(), "computing cached powers");

	let powers = power::table(range)?;
	let rendered = Table::new(range, &powers).to_string();

	let mut stdout = io::stdout().lock();
	stdout
		.write_all(rendered.as_bytes())
		.context("failed to write table to standard output")?;
	stdout.flush().context("failed to flush standard output")?;

	info!("table written");
	Ok(())
}
