//! Roster business logic: loading and cleaning, duplicate checking, the
//! two-step registration wizard, row location, the archive feed, and the
//! confirmation-gated session flows that tie them together.

pub mod archive;
pub mod dedupe;
pub mod loader;
pub mod locator;
pub mod session;
pub mod wizard;

pub use archive::archive;
pub use dedupe::{check, UniquenessPolicy};
pub use loader::{load, Roster};
pub use locator::{locate_by_name, place, Placement};
pub use session::{AppliedAction, EditForm, PendingAction, Session};
pub use wizard::{AdmissionInfo, BasicInfo, Wizard, WizardDraft, WizardStep};
