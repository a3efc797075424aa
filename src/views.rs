use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// 1. ViewLoader Contract
/// ViewLoader
///
/// Defines the abstract contract for fetching the code of a lazily-declared
/// view. The navigator invokes this only after an ALLOW decision — the
/// ordering guarantee that makes denials free of network traffic — and only
/// for views declared with `LoadStrategy::Lazy`.
///
/// Loading is idempotent from the navigator's perspective: re-requesting an
/// already-fetched module must succeed cheaply. Caching is the loader's
/// concern, not the navigator's.
#[async_trait]
pub trait ViewLoader: Send + Sync {
    /// Fetches the code for `module`. An `Err` means the shell cannot mount
    /// the view; it never retroactively changes the guard's decision.
    async fn load(&self, module: &str) -> Result<(), String>;
}

/// ViewState
///
/// The concrete type used to share the view loader across the navigator.
pub type ViewState = Arc<dyn ViewLoader>;

// 2. No-Op Implementation (Bundled Shells)
/// NoopViewLoader
///
/// For shells that ship every view eagerly (desktop builds bundle all pages
/// on disk). Lazy declarations still drive bundle-splitting in web builds;
/// here they resolve instantly.
#[derive(Clone, Default)]
pub struct NoopViewLoader;

#[async_trait]
impl ViewLoader for NoopViewLoader {
    async fn load(&self, module: &str) -> Result<(), String> {
        tracing::debug!(module, "view module already bundled, skipping fetch");
        Ok(())
    }
}

// 3. Mock Implementation (For Tests)
/// MockViewLoader
///
/// Records every requested module so tests can assert the load-after-allow
/// ordering, and can simulate fetch failures.
#[derive(Clone, Default)]
pub struct MockViewLoader {
    /// When true, all loads return a simulated failure.
    pub should_fail: bool,
    loaded: Arc<Mutex<Vec<String>>>,
}

impl MockViewLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// The modules requested so far, in request order.
    pub fn loaded(&self) -> Vec<String> {
        self.loaded.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ViewLoader for MockViewLoader {
    async fn load(&self, module: &str) -> Result<(), String> {
        if let Ok(mut loaded) = self.loaded.lock() {
            loaded.push(module.to_string());
        }

        if self.should_fail {
            return Err("Mock Loader Error: simulation requested".to_string());
        }

        Ok(())
    }
}
