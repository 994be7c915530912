//! Repository Integration Tests
//!
//! Tests for SnapshotRepository with the in-memory storage backend.

#[cfg(test)]
mod tests {
    use crate::commands;
    use crate::config::DashboardConfig;
    use crate::domain::{FixedClock, Priority, Section, Snapshot, Theme};
    use crate::repository::{KeyValueStorage, MemoryStorage, SnapshotRepository};

    fn setup_repo() -> SnapshotRepository<MemoryStorage> {
        SnapshotRepository::new(MemoryStorage::new(), &DashboardConfig::default())
    }

    #[test]
    fn test_first_run_seeds_and_persists() {
        let repo = setup_repo();
        assert!(repo.load().unwrap().is_none());

        let snapshot = repo.load_or_seed();
        assert_eq!(snapshot, Snapshot::seed());
        assert!(repo.storage().get("dashboard-data").is_some());
    }

    #[test]
    fn test_save_then_load() {
        let repo = setup_repo();
        let mut snapshot = repo.load_or_seed();
        let clock = FixedClock::at_millis(1_705_000_000_000);
        commands::add_item(&mut snapshot, Section::Notes, "Recipes", &clock).unwrap();
        commands::add_todo(&mut snapshot, &"personal".into(), "Call mom", &clock).unwrap();
        repo.save(&snapshot).expect("Save failed");

        let loaded = repo.load().expect("Load failed").expect("Snapshot missing");
        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.todos[1].count, 1);
    }

    #[test]
    fn test_corrupt_blob_is_quarantined() {
        let storage = MemoryStorage::new().with_entry("dashboard-data", "{oops");
        let repo = SnapshotRepository::new(storage, &DashboardConfig::default());

        let snapshot = repo.load_or_seed();
        assert_eq!(snapshot, Snapshot::seed());
        assert_eq!(repo.storage().get("dashboard-data.corrupt").as_deref(), Some("{oops"));
        assert!(repo.load().unwrap().is_some());
    }

    #[test]
    fn test_odd_field_values_keep_user_data() {
        let raw = r#"{"schemaVersion":1,"todos":[{"id":"mine","name":"My list","todos":[
            {"id":"1","text":"Renew passport","completed":null,"priority":"urgent"},
            {"id":"2","text":"Pay rent","completed":true,"priority":"high","dueDate":"15/01/2024"}
        ]}],"links":[{"id":"c","name":"Saved","links":[
            {"id":"l","title":"Docs","url":"https://docs.rs","description":null,"tags":"rust"}
        ]}]}"#;
        let storage = MemoryStorage::new().with_entry("dashboard-data", raw);
        let repo = SnapshotRepository::new(storage, &DashboardConfig::default());

        let snapshot = repo.load_or_seed();
        let lists: Vec<_> = snapshot.todos.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(lists, ["My list"]);
        assert_eq!(snapshot.todos[0].count, 2);
        assert_eq!(snapshot.todos[0].todos[0].priority, Priority::Medium);
        assert!(!snapshot.todos[0].todos[0].completed);
        assert_eq!(snapshot.todos[0].todos[1].priority, Priority::High);
        assert!(snapshot.links[0].links[0].tags.is_empty());
        assert_eq!(snapshot.links[0].links[0].description, "");
        assert!(repo.storage().get("dashboard-data.corrupt").is_none());
    }

    #[test]
    fn test_failed_writes_keep_app_running() {
        let repo = SnapshotRepository::new(MemoryStorage::read_only(), &DashboardConfig::default());
        let snapshot = repo.load_or_seed();
        assert_eq!(snapshot.todos.len(), 3);
        assert!(repo.save(&snapshot).is_err());
        assert!(repo.storage().is_empty());
    }

    #[test]
    fn test_theme_round_trip() {
        let repo = setup_repo();
        assert_eq!(repo.load_theme(), Theme::System);

        repo.save_theme(Theme::Dark).unwrap();
        assert_eq!(repo.storage().get("dashboard-theme").as_deref(), Some("\"dark\""));
        assert_eq!(repo.load_theme(), Theme::Dark);

        repo.storage().write("dashboard-theme", "\"sepia\"").unwrap();
        assert_eq!(repo.load_theme(), Theme::System);
    }

    #[test]
    fn test_custom_keys_from_config() {
        let config = DashboardConfig {
            data_key: "alt-data".into(),
            ..DashboardConfig::default()
        };
        let repo = SnapshotRepository::new(MemoryStorage::new(), &config);
        repo.load_or_seed();
        assert!(repo.storage().get("alt-data").is_some());
        assert!(repo.storage().get("dashboard-data").is_none());
    }

    #[test]
    fn test_reset_restores_seed() {
        let repo = setup_repo();
        let mut snapshot = repo.load_or_seed();
        snapshot.todos.clear();
        repo.save(&snapshot).unwrap();

        assert_eq!(repo.reset().unwrap(), Snapshot::seed());
        assert_eq!(repo.load().unwrap(), Some(Snapshot::seed()));
    }
}
