use portal_nav::config::{Env, NavConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;

// Env-var mutation is process-global, so every test here is serialized.
// Edition 2024 marks set_var/remove_var unsafe for the same reason.

fn clear_portal_vars() {
    unsafe {
        env::remove_var("PORTAL_ENV");
        env::remove_var("PORTAL_TOKEN_KEY");
        env::remove_var("PORTAL_CREDENTIAL_FILE");
    }
}

#[test]
#[serial]
fn default_config_uses_portal_conventions() {
    let config = NavConfig::default();

    assert_eq!(config.login_path, "/login");
    assert_eq!(config.login_route, "login");
    assert_eq!(config.redirect_param, "redirect");
    assert_eq!(config.token_key, "token");
    assert_eq!(config.credential_file, None);
    assert_eq!(config.env, Env::Local);
}

#[test]
#[serial]
fn load_defaults_to_local_without_env_vars() {
    clear_portal_vars();

    let config = NavConfig::load();

    assert_eq!(config.env, Env::Local);
    assert_eq!(config.token_key, "token");
    assert_eq!(config.credential_file, None);
}

#[test]
#[serial]
fn load_honors_production_with_credential_file() {
    clear_portal_vars();
    unsafe {
        env::set_var("PORTAL_ENV", "production");
        env::set_var("PORTAL_CREDENTIAL_FILE", "/var/lib/portal/store.json");
    }

    let config = NavConfig::load();

    assert_eq!(config.env, Env::Production);
    assert_eq!(
        config.credential_file,
        Some(PathBuf::from("/var/lib/portal/store.json"))
    );
    // Contract values stay fixed regardless of environment.
    assert_eq!(config.login_path, "/login");
    assert_eq!(config.redirect_param, "redirect");

    clear_portal_vars();
}

#[test]
#[serial]
fn load_honors_token_key_override() {
    clear_portal_vars();
    unsafe {
        env::set_var("PORTAL_TOKEN_KEY", "session");
    }

    let config = NavConfig::load();
    assert_eq!(config.token_key, "session");

    clear_portal_vars();
}

#[test]
#[serial]
fn local_load_accepts_optional_credential_file() {
    clear_portal_vars();
    unsafe {
        env::set_var("PORTAL_CREDENTIAL_FILE", "/tmp/store.json");
    }

    let config = NavConfig::load();
    assert_eq!(config.env, Env::Local);
    assert_eq!(config.credential_file, Some(PathBuf::from("/tmp/store.json")));

    clear_portal_vars();
}
