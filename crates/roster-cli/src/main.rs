//! Ward roster CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use roster_cli::logging::{init_logging, LogConfig, LogFormat};
use roster_core::UniquenessPolicy;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{
    run_delete, run_edit, run_export, run_list, run_register, RosterContext,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let ctx = RosterContext {
        store_path: cli.store.clone(),
        archive_path: cli.archive.clone(),
        policy: if cli.identifier_only {
            UniquenessPolicy::IdentifierOnly
        } else {
            UniquenessPolicy::Both
        },
    };
    let result = match cli.command {
        Command::Register(args) => run_register(&ctx, args),
        Command::List => run_list(&ctx),
        Command::Edit(args) => run_edit(&ctx, args),
        Command::Delete(args) => run_delete(&ctx, args),
        Command::Export(args) => run_export(&ctx, &args),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
