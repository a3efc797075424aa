use serde::{Deserialize, Serialize};
use uuid::Uuid;

// --- Route Table Schemas ---

/// Visibility
///
/// Access tier of a route. `Protected` is the default: a route is only
/// reachable without a credential if it has been explicitly tagged `Public`.
/// This mirrors the "deny by default" stance of the access-control design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Reachable by anonymous visitors (login, entry, shared lesson links).
    Public,
    /// Requires a non-empty credential in the external store.
    #[default]
    Protected,
}

/// LoadStrategy
///
/// How the code for a view is obtained by the hosting shell.
///
/// `Eager` views ship with the application bundle and are available the moment
/// a navigation is allowed. `Lazy` views defer their code to a module fetch
/// that the `Navigator` performs **after** the guard decision — never before,
/// so a denied navigation costs no network round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "lowercase")]
pub enum LoadStrategy {
    Eager,
    Lazy {
        /// Module path handed to the `ViewLoader` (e.g. "pages/TeacherSubtitles").
        module: String,
    },
}

/// View
///
/// A renderable unit the hosting shell can mount. The navigation core never
/// renders; it only resolves which view a navigation lands on and, for lazy
/// views, ensures the code has been fetched before reporting ALLOW.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    /// Component identifier the shell maps to an actual renderable.
    pub component: String,
    #[serde(flatten)]
    pub load: LoadStrategy,
}

impl View {
    /// A view whose code is bundled with the shell.
    pub fn eager(component: &str) -> Self {
        Self {
            component: component.to_string(),
            load: LoadStrategy::Eager,
        }
    }

    /// A view whose code is fetched on demand from `module`.
    pub fn lazy(component: &str, module: &str) -> Self {
        Self {
            component: component.to_string(),
            load: LoadStrategy::Lazy {
                module: module.to_string(),
            },
        }
    }
}

/// RouteTarget
///
/// What a matched route resolves to. Most routes carry a `View`; the root
/// entry and the catch-all instead carry an unconditional `Redirect`, which
/// the `Navigator` applies **before** any credential read. Unknown paths
/// therefore always bounce to the login route regardless of auth state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "lowercase")]
pub enum RouteTarget {
    View(View),
    Redirect { to: String },
}

/// RouteDescriptor
///
/// One static binding of a path pattern to a target. Descriptors are
/// constructed once at startup, validated into a `RouteTable`, and never
/// mutated afterwards.
///
/// Invariants (enforced by `RouteTable::new`):
/// - `name` is unique across the table.
/// - Patterns are matched first-to-last, so more specific entries must be
///   declared before the wildcard catch-all, which must be the final entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDescriptor {
    /// Pattern string: literal segments, `:param` segments, or `*` (catch-all).
    pub path: String,
    /// Unique identifier, used in decisions and logs.
    pub name: String,
    pub target: RouteTarget,
    pub visibility: Visibility,
}

impl RouteDescriptor {
    /// A protected view route. Call `.public()` to open it to anonymous visitors.
    pub fn view(path: &str, name: &str, view: View) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            target: RouteTarget::View(view),
            visibility: Visibility::Protected,
        }
    }

    /// An unconditional redirect entry. Visibility is irrelevant for these
    /// (the guard never evaluates them), so they are marked `Public`.
    pub fn redirect(path: &str, name: &str, to: &str) -> Self {
        Self {
            path: path.to_string(),
            name: name.to_string(),
            target: RouteTarget::Redirect { to: to.to_string() },
            visibility: Visibility::Public,
        }
    }

    /// Tags the route as reachable without a credential.
    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }
}

// --- Navigation Schemas ---

/// NavigationRequest
///
/// One pending transition, created per link click, programmatic navigation,
/// or history (back/forward) event by the hosting shell, and consumed exactly
/// once by the guard. The `id` exists purely so every log line produced while
/// evaluating a single navigation can be correlated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub id: Uuid,
    /// The full requested location: path plus any query string.
    pub full_path: String,
    /// The location the navigation originated from, when known.
    /// `None` on the very first load.
    pub from: Option<String>,
}

impl NavigationRequest {
    pub fn new(full_path: &str, from: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_path: full_path.to_string(),
            from: from.map(str::to_string),
        }
    }

    /// The path component alone, with any query string stripped.
    /// Patterns match against this; the query survives only inside the
    /// `redirect` parameter of a denial.
    pub fn path(&self) -> &str {
        match self.full_path.split_once('?') {
            Some((path, _)) => path,
            None => &self.full_path,
        }
    }
}

/// Decision
///
/// The guard's verdict on one navigation. Both variants are normal control
/// flow; there is no error outcome. `Redirect` covers both the unconditional
/// table redirects (root, catch-all) and credential denials, which carry the
/// originally requested location in the `redirect` query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Decision {
    Allow {
        /// Name of the matched route.
        route: String,
        view: View,
    },
    Redirect {
        /// Full target location, query string included.
        location: String,
    },
}
