//! Session context: the wizard plus staged destructive actions.
//!
//! All mutable per-user state lives here explicitly; there are no ambient
//! globals. Destructive actions (delete, edit commit) are staged as a
//! [`PendingAction`] and only applied on an explicit confirmation, so a
//! cancelling user leaves the store untouched.

use roster_model::{
    format_timestamp, hospital_now, Floor, PatientRecord, PatientStatus, Result, RosterError,
    Sex, Ward, AGE_MAX, AGE_MIN, BED_MAX, BED_MIN, WIRE_FIELD_COUNT,
};
use roster_store::{Column, RecordStore, StoreRow};
use tracing::{debug, info};

use crate::archive;
use crate::dedupe::{self, UniquenessPolicy};
use crate::loader;
use crate::locator;
use crate::wizard::Wizard;

/// Replacement values for every editable field of a record.
#[derive(Debug, Clone)]
pub struct EditForm {
    pub name: String,
    pub identifier: String,
    pub age: u32,
    pub sex: Sex,
    pub ward: Ward,
    pub bed: u32,
    pub floor: Floor,
    pub status: PatientStatus,
}

/// A requested destructive action awaiting confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    Delete {
        row: StoreRow,
        record: PatientRecord,
    },
    EditCommit {
        row: StoreRow,
        before: PatientRecord,
        after: PatientRecord,
    },
}

/// What a confirmed action did, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedAction {
    Deleted { row: StoreRow, record: PatientRecord },
    Edited { row: StoreRow, after: PatientRecord },
}

/// One staff member's session state.
#[derive(Debug)]
pub struct Session {
    wizard: Wizard,
    pending: Option<PendingAction>,
    policy: UniquenessPolicy,
}

impl Session {
    pub fn new(policy: UniquenessPolicy) -> Self {
        Self {
            wizard: Wizard::new(policy),
            pending: None,
            policy,
        }
    }

    pub fn wizard_mut(&mut self) -> &mut Wizard {
        &mut self.wizard
    }

    pub fn pending(&self) -> Option<&PendingAction> {
        self.pending.as_ref()
    }

    /// Stage a deletion of the record currently displayed under `name`.
    ///
    /// Loads a fresh roster first; a stale selection surfaces as
    /// `NotFound`. Staging replaces any previously staged action.
    pub fn request_delete(
        &mut self,
        name: &str,
        store: &impl RecordStore,
    ) -> Result<&PendingAction> {
        let roster = loader::load(store)?;
        let index = roster.position_by_name(name).ok_or(RosterError::NotFound)?;
        let record = PatientRecord::from_cells(&roster.rows[index])?;
        let row = locator::locate_by_name(name, store)?;
        debug!(%row, "staged delete");
        Ok(self.pending.insert(PendingAction::Delete { row, record }))
    }

    /// Stage an edit of the record currently displayed under `target`.
    ///
    /// Validates the replacement fields and re-runs the duplicate scan with
    /// the record's own row excluded. The post-edit record is stamped at
    /// staging time.
    pub fn request_edit(
        &mut self,
        target: &str,
        form: EditForm,
        store: &impl RecordStore,
    ) -> Result<&PendingAction> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingField("name"));
        }
        let identifier = form.identifier.trim();
        if identifier.is_empty() {
            return Err(RosterError::MissingField("IC number"));
        }
        if !(AGE_MIN..=AGE_MAX).contains(&form.age) {
            return Err(RosterError::OutOfRange {
                field: "age",
                min: AGE_MIN,
                max: AGE_MAX,
            });
        }
        if !(BED_MIN..=BED_MAX).contains(&form.bed) {
            return Err(RosterError::OutOfRange {
                field: "bed",
                min: BED_MIN,
                max: BED_MAX,
            });
        }
        let roster = loader::load(store)?;
        let index = roster.position_by_name(target).ok_or(RosterError::NotFound)?;
        if let Some(field) = dedupe::check(name, identifier, &roster, Some(index), self.policy) {
            return Err(RosterError::Collision(field));
        }
        let before = PatientRecord::from_cells(&roster.rows[index])?;
        let after = PatientRecord {
            name: name.to_uppercase(),
            identifier: identifier.to_string(),
            age: form.age,
            sex: form.sex,
            ward: form.ward,
            bed: form.bed,
            floor: form.floor,
            status: form.status,
            timestamp: format_timestamp(hospital_now()),
        };
        let row = locator::locate_by_name(target, store)?;
        debug!(%row, "staged edit");
        Ok(self.pending.insert(PendingAction::EditCommit { row, before, after }))
    }

    /// Apply the staged action.
    ///
    /// The pre-mutation snapshot is archived first; if that append fails
    /// the mutation is aborted and nothing is written to the roster. The
    /// staged action is consumed either way — after a failure the user
    /// re-requests from a fresh roster.
    ///
    /// Deletion blanks the row's nine cells in place. Rows are never
    /// physically removed, so other rows keep their numbers and the blank
    /// becomes a reusable slot for the next registration.
    pub fn confirm(
        &mut self,
        store: &mut impl RecordStore,
        archive_store: &mut impl RecordStore,
    ) -> Result<AppliedAction> {
        let action = self
            .pending
            .take()
            .ok_or(RosterError::WizardState("nothing staged to confirm"))?;
        match action {
            PendingAction::Delete { row, record } => {
                archive::archive(archive_store, &record)?;
                let blanks = vec![String::new(); WIRE_FIELD_COUNT];
                store.update_range(row, Column::A, &blanks)?;
                info!(%row, "deleted record");
                Ok(AppliedAction::Deleted { row, record })
            }
            PendingAction::EditCommit { row, before, after } => {
                archive::archive(archive_store, &before)?;
                store.update_range(row, Column::A, &after.to_cells())?;
                info!(%row, "edited record");
                Ok(AppliedAction::Edited { row, after })
            }
        }
    }

    /// Discard the staged action without touching the store.
    pub fn cancel(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }
}
