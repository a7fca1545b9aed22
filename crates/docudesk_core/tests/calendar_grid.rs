use docudesk_core::db::open_db_in_memory;
use docudesk_core::{
    build_date_index, CalendarService, DateKind, DocumentStore, MonthCursor, MonthGrid,
    SqlitePrefsRepository,
};

#[test]
fn cursor_wraps_across_both_year_boundaries() {
    assert_eq!(MonthCursor::new(2025, 11).next(), MonthCursor::new(2026, 0));
    assert_eq!(MonthCursor::new(2025, 0).prev(), MonthCursor::new(2024, 11));
}

#[test]
fn september_2025_cells_carry_fixture_documents() {
    let store = DocumentStore::seeded().unwrap();
    let index = build_date_index(store.all());

    let grid = MonthGrid::for_month(2025, 8);
    // 2025-09-01 is a Monday: no leading blanks in a Monday-first grid.
    assert_eq!(grid.leading_blanks, 0);
    assert_eq!(grid.day_count, 30);

    let cells = grid.cells(&index, &[]);
    assert_eq!(cells.len(), 30);

    let issue_day = &cells[14];
    assert_eq!(issue_day.date, "2025-09-15");
    assert_eq!(issue_day.kind, Some(DateKind::Issued));
    assert_eq!(issue_day.document_ids, vec!["doc-001".to_string()]);

    let quiet_day = &cells[0];
    assert_eq!(quiet_day.kind, None);
    assert!(quiet_day.document_ids.is_empty());
    assert!(quiet_day.user_events.is_empty());
}

#[test]
fn october_2025_deadline_appears_with_wednesday_offset() {
    let store = DocumentStore::seeded().unwrap();
    let index = build_date_index(store.all());

    let grid = MonthGrid::for_month(2025, 9);
    assert_eq!(grid.leading_blanks, 2);

    let cells = grid.cells(&index, &[]);
    assert_eq!(cells[14].date, "2025-10-15");
    assert_eq!(cells[14].kind, Some(DateKind::Deadline));
}

#[test]
fn user_events_join_cells_by_date_key() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::new(&conn);
    let mut service = CalendarService::new(repo, MonthCursor::new(2025, 8));

    assert!(service.add_event("2025-09-10", "Safety drill"));
    assert!(service.add_event("2025-09-10", "Vendor call"));
    assert!(service.add_event("2025-10-02", "Audit prep"));

    let store = DocumentStore::seeded().unwrap();
    let index = build_date_index(store.all());
    let cells = service.grid().cells(&index, service.events());

    assert_eq!(
        cells[9].user_events,
        vec!["Safety drill".to_string(), "Vendor call".to_string()]
    );
    // The October event is outside the displayed month.
    assert!(cells.iter().all(|cell| !cell
        .user_events
        .contains(&"Audit prep".to_string())));

    service.next_month();
    let cells = service.grid().cells(&index, service.events());
    assert_eq!(cells[1].user_events, vec!["Audit prep".to_string()]);
}
