use docudesk_core::db::migrations::latest_version;
use docudesk_core::db::{open_db, open_db_in_memory};
use docudesk_core::{
    CalendarService, MonthCursor, PrefsRepository, SessionService, SqlitePrefsRepository,
    UserEvent,
};

#[test]
fn session_flag_survives_a_simulated_reload() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut service = SessionService::new(SqlitePrefsRepository::new(&conn));
        assert!(!service.is_logged_in(), "first run defaults to logged out");
        service.login();
        assert!(service.is_logged_in());
    }

    // Reload: re-initialize state from storage.
    let restored = SessionService::new(SqlitePrefsRepository::new(&conn));
    assert!(restored.is_logged_in());
}

#[test]
fn session_flag_is_stored_as_true_false_literals() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::new(&conn);

    let mut service = SessionService::new(SqlitePrefsRepository::new(&conn));
    service.login();
    assert_eq!(
        repo.get("docudesk_demo_logged_in").unwrap().as_deref(),
        Some("true")
    );

    service.logout();
    assert_eq!(
        repo.get("docudesk_demo_logged_in").unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn user_events_survive_a_simulated_reload_in_append_order() {
    let conn = open_db_in_memory().unwrap();

    {
        let mut service =
            CalendarService::new(SqlitePrefsRepository::new(&conn), MonthCursor::new(2025, 8));
        service.add_event("2025-09-10", "Safety drill");
        service.add_event("2025-09-12", "Vendor call");
    }

    let restored =
        CalendarService::new(SqlitePrefsRepository::new(&conn), MonthCursor::new(2025, 8));
    assert_eq!(
        restored.events(),
        [
            UserEvent::new("2025-09-10", "Safety drill"),
            UserEvent::new("2025-09-12", "Vendor call"),
        ]
    );
}

#[test]
fn user_events_are_stored_as_a_json_array() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::new(&conn);

    let mut service =
        CalendarService::new(SqlitePrefsRepository::new(&conn), MonthCursor::new(2025, 8));
    service.add_event("2025-09-10", "Safety drill");

    let raw = repo
        .get("docudesk_demo_user_events")
        .unwrap()
        .expect("events key should be written");
    let parsed: Vec<UserEvent> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, [UserEvent::new("2025-09-10", "Safety drill")]);
}

#[test]
fn malformed_persisted_events_restore_to_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::new(&conn);
    repo.set("docudesk_demo_user_events", "not-json").unwrap();

    let service =
        CalendarService::new(SqlitePrefsRepository::new(&conn), MonthCursor::new(2025, 8));
    assert!(service.events().is_empty());
}

#[test]
fn file_backed_prefs_persist_across_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut service = SessionService::new(SqlitePrefsRepository::new(&conn));
        service.login();
    }

    let conn = open_db(&path).unwrap();
    let restored = SessionService::new(SqlitePrefsRepository::new(&conn));
    assert!(restored.is_logged_in());
}

#[test]
fn migrations_reach_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(version >= 1);
}
