// --- Module Structure ---

// Core navigation services and components.
pub mod config;
pub mod credentials;
pub mod guard;
pub mod matcher;
pub mod models;
pub mod views;

// Module for route-surface segregation (Public, Student, Admin).
pub mod routes;

// --- Public Re-exports ---

// Makes the core types easily accessible to the binary entry point and to
// embedding hosts without deep module paths.
pub use config::{Env, NavConfig};
pub use credentials::{CredentialState, CredentialStore, FileCredentialStore, MemoryCredentialStore};
pub use guard::{decide, NavError, Navigator};
pub use matcher::{PathPattern, RouteMatch, RouteTable, TableError};
pub use models::{Decision, RouteDescriptor, RouteTarget, View, Visibility};
pub use views::{MockViewLoader, NoopViewLoader, ViewLoader, ViewState};

/// build_navigator
///
/// Assembles the portal's standard navigator: the fixed route table (root
/// redirect first, wildcard catch-all last) wrapped around the injected
/// credential store and view loader. The only failure mode is a table that
/// violates its construction invariants, which for the standard surface
/// would be a programming error caught by the test suite.
pub fn build_navigator(
    config: NavConfig,
    credentials: CredentialState,
    views: ViewState,
) -> Result<Navigator, TableError> {
    let table = routes::standard_table()?;
    Ok(Navigator::new(table, config, credentials, views))
}
