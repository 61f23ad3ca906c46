//! CLI entry point for specs-overview.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use specs_overview::cli::Cli;
use specs_overview::config::Config;
use specs_overview::{collect_overview, formatters, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    ui::init_colors();
    if cli.quiet {
        ui::set_quiet();
    }

    let config = cli.apply(Config::load(cli.config.as_deref())?);
    let specs = collect_overview(&config, cli.reverse);
    let rendered = formatters::render(&specs, config.format)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;

    Ok(())
}
