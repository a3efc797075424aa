use crate::models::{RouteDescriptor, View};

/// Public Route Module
///
/// Declares every route reachable **without** a credential. These are the
/// portal's front door (login, entry) plus the two lesson pages that are
/// shared via direct links and therefore must open for anonymous visitors.
///
/// Security mandate: nothing in this module may expose teacher-side state.
/// A route belongs here only if an unauthenticated visitor seeing it is an
/// explicit product decision, not a convenience.
pub fn public_routes() -> Vec<RouteDescriptor> {
    vec![
        // /login
        // The credential entry point. Must be public and must keep the name
        // "login": denials from the guard redirect here by name contract.
        RouteDescriptor::view("/login", "login", View::eager("Login")).public(),
        // /entry
        // Pre-login landing page for course codes.
        RouteDescriptor::view("/entry", "entry", View::eager("Entry")).public(),
        // /parsons/:videoId
        // Parsons puzzle for one video, linked from outside the portal.
        // Lazily loaded: anonymous visits should not pull the whole bundle.
        RouteDescriptor::view("/parsons/:videoId", "parsons", View::lazy("Parsons", "pages/parsons"))
            .public(),
        // /learn/video/:videoId
        // Direct link into a single learning video. Declared before the
        // protected /learn/:unit pattern, which would otherwise capture
        // "video" as a unit name.
        RouteDescriptor::view(
            "/learn/video/:videoId",
            "student-learning",
            View::lazy("StudentLearning", "pages/StudentLearning"),
        )
        .public(),
    ]
}
