//! Command implementations for the ward roster CLI.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use roster_core::{
    load, AdmissionInfo, AppliedAction, BasicInfo, EditForm, PendingAction, Session,
    UniquenessPolicy, Wizard,
};
use roster_cli::logging::redact_value;
use roster_export::{export, ExportOutcome};
use roster_model::{PatientRecord, ARCHIVE_HEADERS, WIRE_HEADERS};
use roster_store::CsvStore;

use crate::cli::{DeleteArgs, EditArgs, ExportArgs, RegisterArgs};
use crate::summary::{record_table, roster_table};

/// Resolved store locations and policy shared by every command.
pub struct RosterContext {
    pub store_path: std::path::PathBuf,
    pub archive_path: std::path::PathBuf,
    pub policy: UniquenessPolicy,
}

impl RosterContext {
    fn open_store(&self) -> Result<CsvStore> {
        CsvStore::open_or_create(&self.store_path, &WIRE_HEADERS)
            .with_context(|| format!("open roster store {}", self.store_path.display()))
    }

    fn open_archive(&self) -> Result<CsvStore> {
        CsvStore::open_or_create(&self.archive_path, &ARCHIVE_HEADERS)
            .with_context(|| format!("open archive feed {}", self.archive_path.display()))
    }
}

pub fn run_register(ctx: &RosterContext, args: RegisterArgs) -> Result<()> {
    let span = info_span!("register");
    let _guard = span.enter();
    let mut store = ctx.open_store()?;
    let mut wizard = Wizard::new(ctx.policy);

    wizard.submit_basic_info(
        BasicInfo {
            name: args.name,
            identifier: args.ic,
            age: args.age,
            sex: args.sex,
        },
        &store,
    )?;
    let (record, placement) = wizard.submit_admission_info(
        AdmissionInfo {
            ward: args.ward,
            bed: args.bed,
            floor: args.floor,
            status: args.status,
        },
        &mut store,
    )?;
    info!(
        patient = redact_value(&record.name),
        row = %placement.row,
        reused = placement.reused,
        "registration complete"
    );
    println!(
        "Patient {} registered successfully at {} ({}{}).",
        record.name,
        record.timestamp,
        placement.row,
        if placement.reused { ", reused slot" } else { "" }
    );
    Ok(())
}

pub fn run_list(ctx: &RosterContext) -> Result<()> {
    let store = ctx.open_store()?;
    let roster = load(&store)?;
    if roster.is_empty() {
        println!("Roster is empty.");
        return Ok(());
    }
    println!("{}", roster_table(&roster));
    println!("{} active record(s).", roster.len());
    Ok(())
}

pub fn run_edit(ctx: &RosterContext, args: EditArgs) -> Result<()> {
    let span = info_span!("edit");
    let _guard = span.enter();
    let mut store = ctx.open_store()?;
    let mut archive = ctx.open_archive()?;
    let mut session = Session::new(ctx.policy);

    let roster = load(&store)?;
    let index = roster
        .position_by_name(&args.target)
        .ok_or(roster_model::RosterError::NotFound)?;
    let current = PatientRecord::from_cells(&roster.rows[index])?;
    let form = EditForm {
        name: args.name.unwrap_or_else(|| current.name.clone()),
        identifier: args.ic.unwrap_or_else(|| current.identifier.clone()),
        age: args.age.unwrap_or(current.age),
        sex: args.sex.unwrap_or(current.sex),
        ward: args.ward.unwrap_or(current.ward),
        bed: args.bed.unwrap_or(current.bed),
        floor: args.floor.unwrap_or(current.floor),
        status: args.status.unwrap_or(current.status),
    };

    let staged = session.request_edit(&args.target, form, &store)?;
    let PendingAction::EditCommit { row, after, .. } = staged else {
        unreachable!("edit requests stage edit commits");
    };
    println!("About to overwrite {row}:");
    println!("{}", record_table(after));
    if !args.yes && !confirmed("Apply this edit?")? {
        session.cancel();
        println!("Cancelled; nothing changed.");
        return Ok(());
    }
    match session.confirm(&mut store, &mut archive)? {
        AppliedAction::Edited { row, after } => {
            info!(patient = redact_value(&after.name), %row, "edit applied");
            println!("Record updated ({row}). Previous state archived.");
        }
        AppliedAction::Deleted { .. } => unreachable!("edit confirmation applies an edit"),
    }
    Ok(())
}

pub fn run_delete(ctx: &RosterContext, args: DeleteArgs) -> Result<()> {
    let span = info_span!("delete");
    let _guard = span.enter();
    let mut store = ctx.open_store()?;
    let mut archive = ctx.open_archive()?;
    let mut session = Session::new(ctx.policy);

    let staged = session.request_delete(&args.target, &store)?;
    let PendingAction::Delete { row, record } = staged else {
        unreachable!("delete requests stage deletes");
    };
    println!("About to delete the record at {row}:");
    println!("{}", record_table(record));
    if !args.yes && !confirmed("Delete this record?")? {
        session.cancel();
        println!("Cancelled; nothing changed.");
        return Ok(());
    }
    match session.confirm(&mut store, &mut archive)? {
        AppliedAction::Deleted { row, record } => {
            info!(patient = redact_value(&record.name), %row, "delete applied");
            println!("Record deleted ({row}); its slot is free for reuse. Snapshot archived.");
        }
        AppliedAction::Edited { .. } => unreachable!("delete confirmation applies a delete"),
    }
    Ok(())
}

pub fn run_export(ctx: &RosterContext, args: &ExportArgs) -> Result<()> {
    let span = info_span!("export", from = %args.from, to = %args.to);
    let _guard = span.enter();
    let store = ctx.open_store()?;
    let roster = load(&store)?;
    match export(&roster, args.from, args.to)? {
        ExportOutcome::NoData => {
            println!(
                "No records were modified between {} and {}; nothing exported.",
                args.from, args.to
            );
        }
        ExportOutcome::Rendered {
            workbook,
            document,
            rows,
        } => {
            write_output(&args.workbook, &workbook)?;
            write_output(&args.document, &document)?;
            info!(rows, "export written");
            println!(
                "Exported {rows} record(s) to {} and {}.",
                args.workbook.display(),
                args.document.display()
            );
        }
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("write {}", path.display()))
}

fn confirmed(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush().context("flush prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read confirmation")?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}
