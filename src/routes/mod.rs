use crate::matcher::{RouteTable, TableError};
use crate::models::RouteDescriptor;

/// Route Module Index
///
/// Organizes the portal's route surface into access-tier modules, so the
/// declaration of each route sits next to the routes sharing its access
/// rules. The tiers map directly onto the guard's behavior: public entries
/// skip the credential check, everything else requires a token.

/// Routes reachable by anonymous visitors (login, entry, shared lesson links).
pub mod public;

/// Student-facing routes requiring a credential.
pub mod student;

/// Teacher/admin routes requiring a credential.
pub mod admin;

/// standard_table
///
/// Assembles the portal's full route table in shadowing-safe order:
/// the root redirect first, the tier modules in between, and the wildcard
/// catch-all last. Both redirect entries bounce to the login path
/// unconditionally; the guard never evaluates them.
pub fn standard_table() -> Result<RouteTable, TableError> {
    let mut routes = vec![
        // GET / is not a page of its own: visitors land on the login screen.
        RouteDescriptor::redirect("/", "root", "/login"),
    ];

    routes.extend(public::public_routes());
    routes.extend(student::student_routes());
    routes.extend(admin::admin_routes());

    // Must remain the final entry. Unknown paths bounce to login regardless
    // of credential state, since the login route is itself public.
    routes.push(RouteDescriptor::redirect("*", "catch-all", "/login"));

    RouteTable::new(routes)
}
