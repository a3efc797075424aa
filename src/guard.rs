use std::fmt;
use tracing::Instrument;
use url::form_urlencoded;

use crate::config::NavConfig;
use crate::credentials::CredentialState;
use crate::matcher::RouteTable;
use crate::models::{
    Decision, LoadStrategy, NavigationRequest, RouteDescriptor, RouteTarget, Visibility,
};
use crate::views::ViewState;

// --- Errors ---

/// NavError
///
/// The only failure a navigation can produce. Denials are *not* errors —
/// a missing credential is a normal `Decision::Redirect` branch. What can
/// genuinely fail is fetching the code of a lazily-loaded view after the
/// navigation was already allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// The view loader could not fetch an allowed view's module.
    ViewLoad { module: String, reason: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::ViewLoad { module, reason } => {
                write!(f, "failed to load view module '{module}': {reason}")
            }
        }
    }
}

impl std::error::Error for NavError {}

// --- The Decision Function ---

/// decide
///
/// The pure three-branch rule at the heart of the guard, taking the matched
/// descriptor and the (already fetched) credential to a verdict:
///
/// 1. Redirect entries (root, catch-all) bounce unconditionally. They are
///    structural, not access-controlled; callers short-circuit on them
///    before ever reading the store, and this function mirrors that by
///    ignoring the credential entirely.
/// 2. Public routes allow regardless of credential state.
/// 3. Protected routes allow on a non-empty credential, otherwise redirect
///    to the login path with the originally requested location preserved in
///    the `redirect` query parameter so the login flow can resume.
///
/// No side effects: the credential and table are never mutated, and the
/// same inputs always produce the same verdict.
pub fn decide(
    route: &RouteDescriptor,
    full_path: &str,
    credential: Option<&str>,
    config: &NavConfig,
) -> Decision {
    let view = match &route.target {
        RouteTarget::Redirect { to } => {
            return Decision::Redirect {
                location: to.clone(),
            };
        }
        RouteTarget::View(view) => view,
    };

    if route.visibility == Visibility::Public {
        return Decision::Allow {
            route: route.name.clone(),
            view: view.clone(),
        };
    }

    match credential {
        // An empty string is absence: a cleared-but-not-removed token must
        // not pass the gate.
        Some(token) if !token.is_empty() => Decision::Allow {
            route: route.name.clone(),
            view: view.clone(),
        },
        _ => Decision::Redirect {
            location: denial_location(config, full_path),
        },
    }
}

/// denial_location
///
/// Builds the login redirect for a denied navigation, percent-encoding the
/// full requested location (sub-path and query string included) into the
/// configured query parameter. `/home` becomes `/login?redirect=%2Fhome`.
fn denial_location(config: &NavConfig, full_path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(&config.redirect_param, full_path)
        .finish();

    format!("{}?{}", config.login_path, query)
}

// --- The Navigator ---

/// Navigator
///
/// Implements the **Unified State Pattern** for the navigation core: one
/// immutable bundle of the validated route table, the contract configuration,
/// and the two injected collaborators (credential store, view loader).
/// Nothing here is ambient — a host constructs exactly the navigator it
/// wants and the guard sees only what it was given.
///
/// The host must route *every* navigation through [`Navigator::navigate`]:
/// link clicks, programmatic transitions, history back/forward, and the very
/// first load. The navigator itself holds no per-request state, so a new
/// navigation superseding an unresolved one is the host's cancellation
/// concern, not ours.
pub struct Navigator {
    table: RouteTable,
    config: NavConfig,
    credentials: CredentialState,
    views: ViewState,
}

impl Navigator {
    pub fn new(
        table: RouteTable,
        config: NavConfig,
        credentials: CredentialState,
        views: ViewState,
    ) -> Self {
        Self {
            table,
            config,
            credentials,
            views,
        }
    }

    /// The table this navigator resolves against.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// navigate
    ///
    /// Evaluates one navigation to its decision. Runs inside a tracing span
    /// keyed by a fresh request id so every log line for one transition is
    /// correlated.
    ///
    /// Ordering guarantee: the ALLOW/REDIRECT verdict is final before any
    /// deferred view fetch begins. A denial therefore never touches the
    /// view loader.
    pub async fn navigate(
        &self,
        full_path: &str,
        from: Option<&str>,
    ) -> Result<Decision, NavError> {
        let request = NavigationRequest::new(full_path, from);

        let span = tracing::info_span!(
            "navigation",
            nav_id = %request.id,
            path = %request.full_path,
        );

        self.evaluate(request).instrument(span).await
    }

    async fn evaluate(&self, request: NavigationRequest) -> Result<Decision, NavError> {
        // 1. Resolve the target descriptor. Total by table construction:
        //    the mandatory wildcard backstops every path.
        let matched = self.table.resolve(request.path());
        let route = matched.route;

        // 2. Structural redirects (root, catch-all) short-circuit before the
        //    credential store is even consulted.
        if let RouteTarget::Redirect { to } = &route.target {
            tracing::info!(route = %route.name, to = %to, "structural redirect");
            return Ok(Decision::Redirect {
                location: to.clone(),
            });
        }

        // 3. Read the credential only for protected targets; public routes
        //    must allow even when the store is unreachable.
        let credential = match route.visibility {
            Visibility::Public => None,
            Visibility::Protected => self.credentials.get(&self.config.token_key).await,
        };

        // 4. The pure decision.
        let decision = decide(route, &request.full_path, credential.as_deref(), &self.config);

        match &decision {
            Decision::Allow { route, .. } => {
                tracing::debug!(route = %route, params = ?matched.params, "navigation allowed");
            }
            Decision::Redirect { location } => {
                tracing::info!(route = %route.name, location = %location, "navigation denied, redirecting");
            }
        }

        // 5. Deferred view fetch, strictly after the decision and only on
        //    an allowed lazy view.
        if let Decision::Allow {
            view, route: route_name, ..
        } = &decision
        {
            if let LoadStrategy::Lazy { module } = &view.load {
                self.views
                    .load(module)
                    .await
                    .map_err(|reason| NavError::ViewLoad {
                        module: module.clone(),
                        reason,
                    })?;
                tracing::debug!(route = %route_name, module = %module, "lazy view module loaded");
            }
        }

        Ok(decision)
    }
}
