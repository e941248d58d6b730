mod report;

use acpistat_core::{config::CliConfig, AcpiCollector, Config};
use clap::{Arg, ArgAction, Command};
use std::{
    io::{stdout, Write},
    path::PathBuf,
    process,
};
use tracing_subscriber::EnvFilter;

fn main() {
    match run() {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Returns the process exit code
fn run() -> anyhow::Result<i32> {
    // Parse command line arguments
    let matches = Command::new("acpistat")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print battery, AC adapter, thermal zone and fan status read from ACPI")
        .arg(
            Arg::new("root")
                .long("root")
                .value_name("DIR")
                .env("ACPISTAT_ROOT")
                .help("Root of the ACPI proc tree")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("max-items")
                .long("max-items")
                .value_name("N")
                .help("Maximum number of objects per category")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the report as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json-config")
                .long("json-config")
                .value_name("PATH")
                .help("Path to JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more, repeat for even more")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    // Build CLI configuration
    let cli_config = CliConfig {
        acpi_root: matches.get_one::<PathBuf>("root").cloned(),
        max_items: matches.get_one::<usize>("max-items").copied(),
    };

    // Load configuration
    let json_config_path = matches.get_one::<PathBuf>("json-config");
    let config = Config::load(Some(&cli_config), json_config_path)?;
    tracing::debug!(?config, "configuration loaded");

    let mut acpi = AcpiCollector::new(&config)?;
    if let Err(e) = acpi.check_support() {
        println!("No ACPI support for your system?");
        tracing::debug!("{}", e);
        return Ok(e.code().abs());
    }

    // One snapshot of everything, then print it
    let status = acpi.init_all();
    acpi.refresh_all();

    let mut out = stdout().lock();
    if matches.get_flag("json") {
        serde_json::to_writer_pretty(&mut out, &acpi.report())?;
        writeln!(out)?;
    } else {
        report::write_text(&mut out, &acpi.report(), &status)?;
    }

    Ok(0)
}

/// `RUST_LOG` wins over `-v`
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
