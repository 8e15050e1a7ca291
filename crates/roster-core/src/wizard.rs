//! Two-step registration wizard.
//!
//! Step 1 collects identity and demographics, step 2 collects admission
//! details. The draft carried between the steps is the sole holder of the
//! step-1 data; step 2 never re-requests or re-validates it. The machine is
//! cyclic: completing step 2 places the record and resets to an empty
//! step 1 for the next registration.

use roster_model::{
    format_timestamp, hospital_now, Floor, PatientRecord, PatientStatus, Result, RosterError,
    Sex, Ward, AGE_MAX, AGE_MIN, BED_MAX, BED_MIN,
};
use roster_store::RecordStore;
use tracing::{debug, info};

use crate::dedupe::{self, UniquenessPolicy};
use crate::loader;
use crate::locator::{self, Placement};

/// Raw step-1 input as entered on the form.
///
/// `sex: None` models the placeholder selection being left unchosen.
#[derive(Debug, Clone, Default)]
pub struct BasicInfo {
    pub name: String,
    pub identifier: String,
    pub age: u32,
    pub sex: Option<Sex>,
}

/// Raw step-2 input; `None` fields model unchosen placeholders.
#[derive(Debug, Clone, Default)]
pub struct AdmissionInfo {
    pub ward: Option<Ward>,
    pub bed: Option<u32>,
    pub floor: Option<Floor>,
    pub status: Option<PatientStatus>,
}

/// Validated and normalized step-1 data awaiting step 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDraft {
    pub name: String,
    pub identifier: String,
    pub age: u32,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Step1BasicInfo,
    Step2AdmissionInfo,
}

/// The registration state machine.
#[derive(Debug)]
pub struct Wizard {
    step: WizardStep,
    draft: Option<WizardDraft>,
    policy: UniquenessPolicy,
}

impl Wizard {
    pub fn new(policy: UniquenessPolicy) -> Self {
        Self {
            step: WizardStep::Step1BasicInfo,
            draft: None,
            policy,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> Option<&WizardDraft> {
        self.draft.as_ref()
    }

    /// Submit step 1.
    ///
    /// Validates presence and ranges, reloads the roster, and runs the
    /// duplicate scan. Any failure leaves the wizard exactly where it was;
    /// success stores the normalized draft and advances to step 2.
    pub fn submit_basic_info(&mut self, input: BasicInfo, store: &impl RecordStore) -> Result<()> {
        if self.step != WizardStep::Step1BasicInfo {
            return Err(RosterError::WizardState(
                "basic info was already submitted; finish or reset the registration",
            ));
        }
        let name = input.name.trim();
        if name.is_empty() {
            return Err(RosterError::MissingField("name"));
        }
        let identifier = input.identifier.trim();
        if identifier.is_empty() {
            return Err(RosterError::MissingField("IC number"));
        }
        let Some(sex) = input.sex else {
            return Err(RosterError::MissingField("sex"));
        };
        if !(AGE_MIN..=AGE_MAX).contains(&input.age) {
            return Err(RosterError::OutOfRange {
                field: "age",
                min: AGE_MIN,
                max: AGE_MAX,
            });
        }
        let roster = loader::load(store)?;
        if let Some(field) = dedupe::check(name, identifier, &roster, None, self.policy) {
            return Err(RosterError::Collision(field));
        }
        self.draft = Some(WizardDraft {
            name: name.to_uppercase(),
            identifier: identifier.to_string(),
            age: input.age,
            sex,
        });
        self.step = WizardStep::Step2AdmissionInfo;
        debug!("basic info accepted, advancing to admission step");
        Ok(())
    }

    /// Submit step 2.
    ///
    /// Merges the carried draft with the admission fields and a fresh
    /// hospital-local timestamp, places the record (reusing a blank slot
    /// when one exists), and cycles back to an empty step 1. Validation and
    /// store failures leave the draft intact for a retry.
    pub fn submit_admission_info(
        &mut self,
        input: AdmissionInfo,
        store: &mut impl RecordStore,
    ) -> Result<(PatientRecord, Placement)> {
        if self.step != WizardStep::Step2AdmissionInfo {
            return Err(RosterError::WizardState(
                "submit basic info before admission details",
            ));
        }
        let Some(ward) = input.ward else {
            return Err(RosterError::MissingField("ward"));
        };
        let Some(bed) = input.bed else {
            return Err(RosterError::MissingField("bed"));
        };
        let Some(floor) = input.floor else {
            return Err(RosterError::MissingField("floor"));
        };
        let Some(status) = input.status else {
            return Err(RosterError::MissingField("status"));
        };
        if !(BED_MIN..=BED_MAX).contains(&bed) {
            return Err(RosterError::OutOfRange {
                field: "bed",
                min: BED_MIN,
                max: BED_MAX,
            });
        }
        let draft = self
            .draft
            .as_ref()
            .ok_or(RosterError::WizardState("no draft carried from step 1"))?;
        let record = PatientRecord {
            name: draft.name.clone(),
            identifier: draft.identifier.clone(),
            age: draft.age,
            sex: draft.sex,
            ward,
            bed,
            floor,
            status,
            timestamp: format_timestamp(hospital_now()),
        };
        let placement = locator::place(store, &record)?;
        info!(row = %placement.row, reused = placement.reused, "registered patient");
        self.reset();
        Ok((record, placement))
    }

    /// "Register another": back to an empty step 1 with no validation.
    pub fn reset(&mut self) {
        self.step = WizardStep::Step1BasicInfo;
        self.draft = None;
    }
}
