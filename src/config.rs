use std::env;
use std::path::PathBuf;

/// NavConfig
///
/// Holds the navigation core's entire configuration. Immutable once loaded,
/// shared by value into the `Navigator` at construction. The contract
/// values (login path, redirect parameter, token key) default to the
/// portal's fixed conventions; only the deployment-specific knobs come from
/// the environment.
#[derive(Clone, Debug)]
pub struct NavConfig {
    /// Path of the login route, the target of every denial and of the
    /// root/catch-all redirects.
    pub login_path: String,
    /// Name of the login route in the table. Kept alongside the path so
    /// logs can refer to routes by name consistently.
    pub login_route: String,
    /// Query parameter carrying the originally requested location on denial.
    pub redirect_param: String,
    /// Key under which the credential store holds the auth token.
    pub token_key: String,
    /// JSON file backing the credential store. `None` means an empty
    /// in-memory store (every protected navigation denies).
    pub credential_file: Option<PathBuf>,
    /// Runtime environment marker. Selects the log format in the binary.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, switching between human-readable local
/// logging and JSON production logging.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for NavConfig {
    /// default
    ///
    /// The portal's fixed conventions with no credential file attached.
    /// Safe for tests: constructing this never touches the environment.
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            login_route: "login".to_string(),
            redirect_param: "redirect".to_string(),
            token_key: "token".to_string(),
            credential_file: None,
            env: Env::Local,
        }
    }
}

impl NavConfig {
    /// load
    ///
    /// The canonical startup initialization, reading deployment knobs from
    /// environment variables with fail-fast semantics.
    ///
    /// # Panics
    /// Panics in `Env::Production` if `PORTAL_CREDENTIAL_FILE` is unset:
    /// a production shell with no credential store would silently deny every
    /// protected navigation, which is a deployment mistake, not a state to
    /// run in.
    pub fn load() -> Self {
        let env_str = env::var("PORTAL_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let token_key = env::var("PORTAL_TOKEN_KEY").unwrap_or_else(|_| "token".to_string());

        let credential_file = match env {
            Env::Production => Some(PathBuf::from(env::var("PORTAL_CREDENTIAL_FILE").expect(
                "FATAL: PORTAL_CREDENTIAL_FILE must be set in production.",
            ))),
            // Local shells may run credential-less (anonymous browsing only).
            Env::Local => env::var("PORTAL_CREDENTIAL_FILE").ok().map(PathBuf::from),
        };

        Self {
            token_key,
            credential_file,
            env,
            ..Self::default()
        }
    }
}
