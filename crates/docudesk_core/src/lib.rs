//! Core domain logic for DocuDesk, a demo document-hub front-end.
//! This crate is the single source of truth for business invariants:
//! the fixture document set and every read model derived from it.

pub mod calendar;
pub mod chat;
pub mod db;
pub mod graph;
pub mod index;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use calendar::{DayCell, MonthCursor, MonthGrid};
pub use chat::{ChatMessage, ChatRole, ChatSession, REPLY_DELAY};
pub use graph::{layout_radial, resolve_related, GraphEdge, GraphNode, Point, RelationGraph};
pub use index::{build_date_index, DateEntry, DateIndex, DateKind};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{
    Document, DocumentId, DocumentValidationError, Relation, RelationKind,
};
pub use model::event::UserEvent;
pub use repo::prefs_repo::{PrefsRepository, RepoError, RepoResult, SqlitePrefsRepository};
pub use search::{filter_by_tags, normalize_tag, TagQuery};
pub use service::calendar_service::CalendarService;
pub use service::session_service::SessionService;
pub use store::{DocumentStore, StoreBuildError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
