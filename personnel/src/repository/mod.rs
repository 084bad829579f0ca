use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// Application repository modules, each representing specific database entity operations.
pub mod employee_repository;
pub mod reference_repository;
pub mod salary_repository;
pub mod vacation_repository;

// Database-related utilities and managers.
pub mod database_manager;
pub(crate) mod sqlite;

/// A thread-safe connection to an ``SQLite`` database, opened for a single request and
/// shared by the repositories serving that request.
pub type SharedSqliteConnection = Arc<Mutex<Connection>>;
