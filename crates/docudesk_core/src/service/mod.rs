//! Use-case services over the preference repository.
//!
//! # Responsibility
//! - Orchestrate session flag and calendar state with best-effort
//!   persistence.
//!
//! # Invariants
//! - In-memory state stays authoritative: a storage failure degrades to
//!   non-persistent behavior for the session, it never surfaces to callers.

pub mod calendar_service;
pub mod session_service;
