//! The schedule store running on the file backend.

use chrono::{TimeZone, Utc};
use rankplan_core::{
    AssignmentType, CoreError, KeyValueStore, NewAssignment, NewMarker, NewRank, NewRankPlan,
    Settings, SettingsError, project,
};
use rankplan_storage::{FileKeyValueStore, StorageFactory};
use tempfile::tempdir;

fn settings_for(dir: &std::path::Path) -> Settings {
    Settings {
        data_dir: Some(dir.to_string_lossy().into_owned()),
        ..Settings::with_defaults()
    }
}

#[test]
fn snapshots_survive_reopen() {
    let temp = tempdir().unwrap();
    let settings = settings_for(&temp.path().join("data"));

    let mut store = StorageFactory::open_store(&settings).unwrap();
    let rank = store.create_rank(NewRank {
        name: "Officer".to_string(),
    });
    let plan = store.create_rank_plan(NewRankPlan {
        name: "2024 Plan".to_string(),
        rank_id: rank,
    });
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    store.create_assignment(NewAssignment {
        name: Some("Day".to_string()),
        kind: AssignmentType::Main,
        plan_start_date: start,
        plan_end_date: end,
        actual_start_date: None,
        actual_end_date: None,
        rank_plan_id: plan,
    });
    drop(store);

    let reopened = StorageFactory::open_store(&settings).unwrap();
    let view = project(&reopened, Utc::now());
    assert_eq!(view.ranks[0].plans[0].span.start, start);
    assert_eq!(view.ranks[0].plans[0].span.end, end);
    assert_eq!(view.ranks[0].plans[0].assignments[0].name, "Day");

    let backend = FileKeyValueStore::new(temp.path().join("data"));
    assert_eq!(
        backend.keys().unwrap(),
        ["assignments", "rankPlans", "ranks"]
    );
}

#[test]
fn key_prefix_separates_schedules() {
    let temp = tempdir().unwrap();
    let base = settings_for(temp.path());
    let prefixed = Settings {
        key_prefix: Some("team-b.".to_string()),
        ..base.clone()
    };

    let mut team_a = StorageFactory::open_store(&base).unwrap();
    team_a.create_marker(NewMarker {
        date: Utc::now(),
        label: "Audit".to_string(),
        class_name: None,
    });

    let team_b = StorageFactory::open_store(&prefixed).unwrap();
    assert!(team_b.markers().is_empty());
    assert!(temp.path().join("markers.json").is_file());
}

#[test]
fn clear_all_deletes_files() {
    let temp = tempdir().unwrap();
    let settings = settings_for(temp.path());
    let mut store = StorageFactory::open_store(&settings).unwrap();
    store.create_rank(NewRank {
        name: "Officer".to_string(),
    });
    assert!(temp.path().join("ranks.json").is_file());

    store.clear_all();

    assert!(!temp.path().join("ranks.json").exists());
    assert!(StorageFactory::open_store(&settings).unwrap().ranks().is_empty());
}

#[test]
fn corrupt_file_loads_empty() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("ranks.json"), "{not json").unwrap();

    let store = StorageFactory::open_store(&settings_for(temp.path())).unwrap();

    assert!(store.ranks().is_empty());
}

#[test]
fn invalid_settings_are_rejected() {
    let settings = Settings {
        key_prefix: Some("../".to_string()),
        ..Settings::with_defaults()
    };
    assert!(StorageFactory::open_store(&settings).is_err());
}

#[test]
fn hidden_key_prefix_is_rejected_before_anything_is_written() {
    let temp = tempdir().unwrap();
    let data = temp.path().join("data");
    let settings = Settings {
        key_prefix: Some(".".to_string()),
        ..settings_for(&data)
    };

    let err = StorageFactory::resolve_dir(&settings).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Settings(SettingsError::InvalidKeyPrefix(_))
    ));
    assert!(StorageFactory::open_store(&settings).is_err());
    assert!(!data.exists());
}

#[test]
fn dotted_prefix_persists() {
    let temp = tempdir().unwrap();
    let settings = Settings {
        key_prefix: Some("team.".to_string()),
        ..settings_for(temp.path())
    };

    let mut store = StorageFactory::open_store(&settings).unwrap();
    store.create_rank(NewRank {
        name: "Officer".to_string(),
    });

    let reopened = StorageFactory::open_store(&settings).unwrap();
    assert_eq!(reopened.ranks().len(), 1);
    assert!(temp.path().join("team.ranks.json").is_file());
}

#[test]
fn memory_store_starts_empty() {
    let store = StorageFactory::memory_store();
    assert!(store.ranks().is_empty());
    assert!(store.markers().is_empty());
}

#[test]
fn open_editor_starts_with_dialogs_closed() {
    let temp = tempdir().unwrap();
    let mut editor = StorageFactory::open_editor(&settings_for(temp.path())).unwrap();
    assert!(editor.rank_session().is_idle());

    let marker = editor.on_create_marker(Utc::now(), "Go-live").unwrap();

    let reopened = StorageFactory::open_store(&settings_for(temp.path())).unwrap();
    assert_eq!(reopened.marker(&marker).unwrap().label, "Go-live");
}
