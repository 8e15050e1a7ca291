//! CLI argument definitions for the ward roster.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use roster_model::{Floor, PatientStatus, Sex, Ward};

#[derive(Parser)]
#[command(
    name = "ward-roster",
    version,
    about = "Patient intake and roster management",
    long_about = "Register patients through the two-step intake wizard, browse\n\
                  the roster, edit or delete records behind a confirmation\n\
                  prompt, and export date-filtered snapshots."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Roster store file.
    #[arg(
        long = "store",
        value_name = "PATH",
        env = "WARD_ROSTER_STORE",
        default_value = "roster.csv",
        global = true
    )]
    pub store: PathBuf,

    /// Archive feed file for deleted and edited-away records.
    #[arg(
        long = "archive",
        value_name = "PATH",
        env = "WARD_ROSTER_ARCHIVE",
        default_value = "roster-archive.csv",
        global = true
    )]
    pub archive: PathBuf,

    /// Enforce uniqueness on the IC number only, not on the name.
    #[arg(long = "identifier-only", global = true)]
    pub identifier_only: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient-identifying values in log output.
    ///
    /// Off by default: names and IC numbers are replaced with a redaction
    /// token in every log line.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register a patient through the two-step intake wizard.
    Register(RegisterArgs),

    /// Show the current roster.
    List,

    /// Edit a record, after confirmation.
    Edit(EditArgs),

    /// Delete a record, after confirmation.
    Delete(DeleteArgs),

    /// Export a date-filtered roster snapshot.
    Export(ExportArgs),
}

#[derive(Parser)]
pub struct RegisterArgs {
    /// Patient full name.
    #[arg(long)]
    pub name: String,

    /// IC number.
    #[arg(long)]
    pub ic: String,

    /// Age in years (1-100).
    #[arg(long)]
    pub age: u32,

    /// Sex (male, female). Required to complete step 1.
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Ward code (1A, 2A, 3A, 3B, CCU, ICU).
    #[arg(long)]
    pub ward: Option<Ward>,

    /// Bed number (1-120).
    #[arg(long)]
    pub bed: Option<u32>,

    /// Floor (1-5).
    #[arg(long)]
    pub floor: Option<Floor>,

    /// Patient status (stable, critical, "under observation", discharged).
    #[arg(long)]
    pub status: Option<PatientStatus>,
}

#[derive(Parser)]
pub struct EditArgs {
    /// Display name of the record to edit, as shown by `list`.
    #[arg(value_name = "NAME")]
    pub target: String,

    /// Replacement name (defaults to the current value).
    #[arg(long)]
    pub name: Option<String>,

    /// Replacement IC number.
    #[arg(long)]
    pub ic: Option<String>,

    /// Replacement age.
    #[arg(long)]
    pub age: Option<u32>,

    /// Replacement sex.
    #[arg(long)]
    pub sex: Option<Sex>,

    /// Replacement ward code.
    #[arg(long)]
    pub ward: Option<Ward>,

    /// Replacement bed number.
    #[arg(long)]
    pub bed: Option<u32>,

    /// Replacement floor.
    #[arg(long)]
    pub floor: Option<Floor>,

    /// Replacement status.
    #[arg(long)]
    pub status: Option<PatientStatus>,

    /// Apply without the interactive confirmation prompt.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Parser)]
pub struct DeleteArgs {
    /// Display name of the record to delete, as shown by `list`.
    #[arg(value_name = "NAME")]
    pub target: String,

    /// Apply without the interactive confirmation prompt.
    #[arg(long = "yes")]
    pub yes: bool,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// First calendar date to include (YYYY-MM-DD).
    #[arg(long = "from", value_name = "DATE")]
    pub from: NaiveDate,

    /// Last calendar date to include (YYYY-MM-DD).
    #[arg(long = "to", value_name = "DATE")]
    pub to: NaiveDate,

    /// Output path for the workbook rendering.
    #[arg(long = "workbook", value_name = "PATH", default_value = "roster-export.csv")]
    pub workbook: PathBuf,

    /// Output path for the fixed-width document rendering.
    #[arg(long = "document", value_name = "PATH", default_value = "roster-export.txt")]
    pub document: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
