//! Editor service - the chart's single point of contact.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{AssignmentId, MarkerId, NewMarker};
use crate::projector::{ChartView, project};
use crate::session::{
    AssignmentForm, AssignmentKind, EditSession, FormError, RankForm, RankKind, RankPlanForm,
    RankPlanKind, SaveOutcome,
};
use crate::store::ScheduleStore;

/// Owns the store and one dialog session per entity kind.
///
/// Front ends route user intent through here: dialog saves go through the
/// matching session, timeline gestures mutate the store directly.
pub struct Editor {
    store: ScheduleStore,
    ranks: EditSession<RankKind>,
    rank_plans: EditSession<RankPlanKind>,
    assignments: EditSession<AssignmentKind>,
}

impl Editor {
    /// Create an editor over an already loaded store, with every dialog closed.
    pub const fn new(store: ScheduleStore) -> Self {
        Self {
            store,
            ranks: EditSession::new(),
            rank_plans: EditSession::new(),
            assignments: EditSession::new(),
        }
    }

    pub const fn store(&self) -> &ScheduleStore {
        &self.store
    }

    pub fn into_store(self) -> ScheduleStore {
        self.store
    }

    pub const fn rank_session(&self) -> &EditSession<RankKind> {
        &self.ranks
    }

    pub const fn rank_session_mut(&mut self) -> &mut EditSession<RankKind> {
        &mut self.ranks
    }

    pub const fn rank_plan_session(&self) -> &EditSession<RankPlanKind> {
        &self.rank_plans
    }

    pub const fn rank_plan_session_mut(&mut self) -> &mut EditSession<RankPlanKind> {
        &mut self.rank_plans
    }

    pub const fn assignment_session(&self) -> &EditSession<AssignmentKind> {
        &self.assignments
    }

    pub const fn assignment_session_mut(&mut self) -> &mut EditSession<AssignmentKind> {
        &mut self.assignments
    }

    pub fn save_rank(&mut self, form: RankForm) -> Result<SaveOutcome, FormError> {
        self.ranks.save(form, &mut self.store)
    }

    pub fn save_rank_plan(&mut self, form: RankPlanForm) -> Result<SaveOutcome, FormError> {
        self.rank_plans.save(form, &mut self.store)
    }

    pub fn save_assignment(&mut self, form: AssignmentForm) -> Result<SaveOutcome, FormError> {
        self.assignments.save(form, &mut self.store)
    }

    /// A bar was dragged. `end` is `None` when the gesture only moved the start.
    pub fn on_move(
        &mut self,
        id: &AssignmentId,
        start: DateTime<Utc>,
        end: Option<DateTime<Utc>>,
    ) -> bool {
        self.store.move_assignment(id, start, end)
    }

    /// A marker was placed on the timeline.
    ///
    /// Returns `None` without creating anything when the label is blank
    /// (the label prompt was dismissed).
    pub fn on_create_marker(&mut self, date: DateTime<Utc>, label: &str) -> Option<MarkerId> {
        let label = label.trim();
        if label.is_empty() {
            debug!("Marker label empty, nothing created");
            return None;
        }
        Some(self.store.create_marker(NewMarker {
            date,
            label: label.to_owned(),
            class_name: None,
        }))
    }

    pub fn on_remove_marker(&mut self, id: &MarkerId) -> bool {
        self.store.delete_marker(id)
    }

    /// Delete an assignment, closing its dialog if that assignment was open.
    pub fn delete_assignment(&mut self, id: &AssignmentId) -> bool {
        if self.assignments.editing().is_some_and(|open| &open.id == id) {
            self.assignments.cancel();
        }
        self.store.delete_assignment(id)
    }

    /// Wipe every collection. Refused unless the user confirmed.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        if !confirmed {
            debug!("Clear all not confirmed, keeping data");
            return false;
        }
        self.ranks.cancel();
        self.rank_plans.cancel();
        self.assignments.cancel();
        self.store.clear_all();
        info!("All schedule data cleared");
        true
    }

    /// Chart view model as of `now`.
    pub fn chart(&self, now: DateTime<Utc>) -> ChartView<'_> {
        project(&self.store, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewRank;
    use crate::store::MemoryKeyValueStore;
    use chrono::TimeZone;
    use std::sync::Arc;

    fn editor() -> Editor {
        Editor::new(ScheduleStore::load(Arc::new(MemoryKeyValueStore::new())))
    }

    fn jan(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    fn add_assignment(editor: &mut Editor) -> AssignmentId {
        editor
            .assignment_session_mut()
            .begin_create(Some("p1".to_string()));
        let outcome = editor
            .save_assignment(AssignmentForm {
                name: "Day".to_string(),
                plan_start: Some(jan(1)),
                plan_end: Some(jan(31)),
                ..Default::default()
            })
            .unwrap();
        let SaveOutcome::Created(id) = outcome else {
            panic!("expected a created outcome");
        };
        AssignmentId::new(id)
    }

    #[test]
    fn test_on_move_without_end_keeps_end() {
        let mut editor = editor();
        let id = add_assignment(&mut editor);

        assert!(editor.on_move(&id, jan(5), None));

        let moved = editor.store().assignment(&id).unwrap();
        assert_eq!((moved.plan_start_date, moved.plan_end_date), (jan(5), jan(31)));
        assert!(!editor.on_move(&AssignmentId::new("missing"), jan(2), Some(jan(3))));
    }

    #[test]
    fn test_markers_created_and_removed() {
        let mut editor = editor();

        assert_eq!(editor.on_create_marker(jan(15), "  "), None);
        let id = editor.on_create_marker(jan(15), "Audit").unwrap();

        assert_eq!(editor.store().markers().len(), 1);
        assert_eq!(editor.store().markers()[0].label, "Audit");
        assert!(editor.on_remove_marker(&id));
        assert!(editor.store().markers().is_empty());
    }

    #[test]
    fn test_delete_closes_matching_dialog() {
        let mut editor = editor();
        let id = add_assignment(&mut editor);
        let open = editor.store().assignment(&id).unwrap().clone();
        editor.assignment_session_mut().begin_edit(open);

        assert!(editor.delete_assignment(&id));

        assert!(editor.assignment_session().is_idle());
        assert!(editor.store().assignments().is_empty());
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut editor = editor();
        editor.rank_session_mut().begin_create(None);
        editor
            .save_rank(RankForm {
                name: "Officer".to_string(),
            })
            .unwrap();
        add_assignment(&mut editor);

        assert!(!editor.clear_all(false));
        assert_eq!(editor.store().ranks().len(), 1);

        editor.rank_plan_session_mut().begin_create(None);
        assert!(editor.clear_all(true));
        assert!(editor.store().ranks().is_empty());
        assert!(editor.store().assignments().is_empty());
        assert!(editor.rank_plan_session().is_idle());
    }

    #[test]
    fn test_chart_reflects_saved_entities() {
        let mut store = ScheduleStore::load(Arc::new(MemoryKeyValueStore::new()));
        store.create_rank(NewRank {
            name: "Officer".to_string(),
        });
        let editor = Editor::new(store);

        let view = editor.chart(jan(1));

        assert_eq!(view.ranks.len(), 1);
        assert_eq!(view.ranks[0].rank.name, "Officer");
    }
}
