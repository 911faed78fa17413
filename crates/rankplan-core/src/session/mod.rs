//! Edit sessions: which entity a dialog is creating or editing.
//!
//! Each entity kind has its own independent [`EditSession`]. A session is
//! `Idle`, `Creating` (optionally bound to a parent id, e.g. the rank a new
//! plan goes under), or `Editing` a specific entity. Saving validates the
//! form, commits to the store, and returns the session to `Idle`; cancelling
//! or dismissing discards the form without touching the store.

mod kinds;

use thiserror::Error;
use tracing::debug;

use crate::store::ScheduleStore;

pub use kinds::{
    AssignmentForm, AssignmentKind, RankForm, RankKind, RankPlanForm, RankPlanKind,
};

/// Form submission rejected before any store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field is empty.
    #[error("{0} is required")]
    Required(&'static str),

    /// Save was requested with no dialog open.
    #[error("No {0} dialog is open")]
    NoActiveSession(&'static str),
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entity was created with this id.
    Created(String),
    /// An existing entity was updated. `found` is false when the entity had
    /// disappeared from the store in the meantime (the update was a no-op).
    Updated { id: String, found: bool },
}

/// Per-kind behaviour plugged into [`EditSession`].
pub trait SessionKind {
    type Entity: Clone + std::fmt::Debug + PartialEq;
    type Form: Clone + std::fmt::Debug + Default + PartialEq;
    /// Validated, trimmed form content ready for the store.
    type Draft;

    /// Human label used in errors and logs.
    const LABEL: &'static str;

    fn entity_id(entity: &Self::Entity) -> String;

    /// Form fields reflecting the entity's committed values.
    fn seed(entity: &Self::Entity) -> Self::Form;

    /// Fill empty parent fields from the bound parent context.
    fn with_parent(form: Self::Form, _parent: Option<&str>) -> Self::Form {
        form
    }

    fn validate(form: Self::Form) -> Result<Self::Draft, FormError>;

    fn create(store: &mut ScheduleStore, draft: Self::Draft) -> String;

    fn update(store: &mut ScheduleStore, entity: &Self::Entity, draft: Self::Draft) -> bool;
}

/// Dialog state for one entity kind.
#[derive(Debug, Clone, PartialEq)]
pub enum EditSession<K: SessionKind> {
    Idle,
    Creating { parent: Option<String> },
    Editing { entity: K::Entity },
}

impl<K: SessionKind> Default for EditSession<K> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<K: SessionKind> EditSession<K> {
    pub const fn new() -> Self {
        Self::Idle
    }

    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether a dialog for this kind is currently open.
    pub const fn is_open(&self) -> bool {
        !self.is_idle()
    }

    /// Open the dialog for a new entity, optionally under `parent`.
    pub fn begin_create(&mut self, parent: Option<String>) {
        *self = Self::Creating { parent };
    }

    /// Open the dialog for `entity`, replacing whatever was open.
    pub fn begin_edit(&mut self, entity: K::Entity) {
        *self = Self::Editing { entity };
    }

    /// Close the dialog without saving.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Dialog closed by the user (escape, click outside); same as cancel.
    pub fn dismiss(&mut self) {
        self.cancel();
    }

    pub const fn editing(&self) -> Option<&K::Entity> {
        match self {
            Self::Editing { entity } => Some(entity),
            _ => None,
        }
    }

    pub fn parent(&self) -> Option<&str> {
        match self {
            Self::Creating { parent } => parent.as_deref(),
            _ => None,
        }
    }

    /// Fields the dialog should display right now.
    ///
    /// Editing shows the entity's last committed values; creating shows a
    /// blank form with the parent context filled in. This is also what the
    /// dialog resets to after a cancelled edit.
    pub fn form(&self) -> K::Form {
        match self {
            Self::Idle => K::Form::default(),
            Self::Creating { parent } => K::with_parent(K::Form::default(), parent.as_deref()),
            Self::Editing { entity } => K::seed(entity),
        }
    }

    /// Validate and commit `form`, then return to `Idle`.
    ///
    /// On a validation error nothing is written and the session stays open.
    pub fn save(
        &mut self,
        form: K::Form,
        store: &mut ScheduleStore,
    ) -> Result<SaveOutcome, FormError> {
        let outcome = match self {
            Self::Idle => return Err(FormError::NoActiveSession(K::LABEL)),
            Self::Creating { parent } => {
                let draft = K::validate(K::with_parent(form, parent.as_deref()))?;
                let id = K::create(store, draft);
                debug!(kind = K::LABEL, id = %id, "Saved new entity");
                SaveOutcome::Created(id)
            }
            Self::Editing { entity } => {
                let draft = K::validate(form)?;
                let found = K::update(store, entity, draft);
                let id = K::entity_id(entity);
                debug!(kind = K::LABEL, id = %id, found, "Saved entity edit");
                SaveOutcome::Updated { id, found }
            }
        };
        *self = Self::Idle;
        Ok(outcome)
    }
}
