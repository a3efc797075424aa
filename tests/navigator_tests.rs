use portal_nav::{
    build_navigator,
    config::NavConfig,
    credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore},
    guard::NavError,
    models::Decision,
    views::MockViewLoader,
    Navigator,
};
use std::path::PathBuf;
use std::sync::Arc;
use uuid::Uuid;

// --- Helpers ---

fn navigator(token: Option<&str>, loader: MockViewLoader) -> Navigator {
    let store = match token {
        Some(value) => MemoryCredentialStore::with("token", value),
        None => MemoryCredentialStore::empty(),
    };

    build_navigator(NavConfig::default(), Arc::new(store), Arc::new(loader))
        .expect("standard table must validate")
}

/// Unique throwaway path under the system temp dir.
fn scratch_file() -> PathBuf {
    std::env::temp_dir().join(format!("portal-nav-cred-{}.json", Uuid::new_v4()))
}

// --- Lazy View Loading ---

#[tokio::test]
async fn allowed_lazy_view_loads_exactly_once() {
    let loader = MockViewLoader::new();
    let navigator = navigator(None, loader.clone());

    // /parsons/:videoId is public and lazy.
    let decision = navigator.navigate("/parsons/v9", None).await.unwrap();
    assert!(matches!(decision, Decision::Allow { .. }));

    assert_eq!(loader.loaded(), vec!["pages/parsons".to_string()]);
}

#[tokio::test]
async fn allowed_eager_view_never_touches_the_loader() {
    let loader = MockViewLoader::new();
    let navigator = navigator(Some("tok-1"), loader.clone());

    let decision = navigator.navigate("/home", None).await.unwrap();
    assert!(matches!(decision, Decision::Allow { .. }));

    assert!(loader.loaded().is_empty());
}

#[tokio::test]
async fn denied_navigation_never_touches_the_loader() {
    let loader = MockViewLoader::new();
    let navigator = navigator(None, loader.clone());

    // /admin/dashboard is protected and lazy; the denial must cost no fetch.
    let decision = navigator.navigate("/admin/dashboard", None).await.unwrap();
    assert!(matches!(decision, Decision::Redirect { .. }));

    assert!(loader.loaded().is_empty());
}

#[tokio::test]
async fn structural_redirect_never_touches_the_loader() {
    let loader = MockViewLoader::new();
    let navigator = navigator(Some("tok-1"), loader.clone());

    navigator.navigate("/unknown", None).await.unwrap();
    assert!(loader.loaded().is_empty());
}

#[tokio::test]
async fn failed_lazy_load_surfaces_as_view_load_error() {
    let loader = MockViewLoader::new_failing();
    let navigator = navigator(Some("tok-1"), loader.clone());

    let err = navigator
        .navigate("/admin/subtitle", None)
        .await
        .expect_err("failing loader must surface");

    match err {
        NavError::ViewLoad { module, .. } => assert_eq!(module, "pages/TeacherSubtitles"),
    }

    // The decision was already made; the fetch was attempted once.
    assert_eq!(loader.loaded(), vec!["pages/TeacherSubtitles".to_string()]);
}

// --- File-Backed Credential Store ---

#[tokio::test]
async fn missing_credential_file_reads_as_no_credential() {
    let store = FileCredentialStore::new(scratch_file());
    assert_eq!(store.get("token").await, None);
}

#[tokio::test]
async fn malformed_credential_file_reads_as_no_credential() {
    let path = scratch_file();
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileCredentialStore::new(path.clone());
    assert_eq!(store.get("token").await, None);

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn file_store_token_allows_protected_navigation() {
    let path = scratch_file();
    std::fs::write(&path, r#"{"token":"tok-from-disk","theme":"dark"}"#).unwrap();

    let navigator = build_navigator(
        NavConfig::default(),
        Arc::new(FileCredentialStore::new(path.clone())),
        Arc::new(MockViewLoader::new()),
    )
    .unwrap();

    let decision = navigator.navigate("/quiz", None).await.unwrap();
    match decision {
        Decision::Allow { route, .. } => assert_eq!(route, "quiz"),
        other => panic!("expected Allow, got {other:?}"),
    }

    std::fs::remove_file(path).ok();
}

#[tokio::test]
async fn file_store_is_reread_per_navigation() {
    let path = scratch_file();
    let navigator = build_navigator(
        NavConfig::default(),
        Arc::new(FileCredentialStore::new(path.clone())),
        Arc::new(MockViewLoader::new()),
    )
    .unwrap();

    // No file yet: deny.
    let decision = navigator.navigate("/home", None).await.unwrap();
    assert!(matches!(decision, Decision::Redirect { .. }));

    // Login happens elsewhere (another window writes the file): the very
    // next navigation picks it up, no invalidation protocol required.
    std::fs::write(&path, r#"{"token":"fresh"}"#).unwrap();

    let decision = navigator.navigate("/home", None).await.unwrap();
    assert!(matches!(decision, Decision::Allow { .. }));

    std::fs::remove_file(path).ok();
}
