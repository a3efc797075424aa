use crate::models::{RouteDescriptor, View};

/// Student Route Module
///
/// Routes for the logged-in student experience. All entries are Protected
/// (the default): the guard requires a non-empty token before any of these
/// views mount, redirecting to login with the requested path preserved
/// otherwise.
pub fn student_routes() -> Vec<RouteDescriptor> {
    vec![
        // /quiz
        // The quiz session for the student's current unit.
        RouteDescriptor::view("/quiz", "quiz", View::eager("Quiz")),
        // /home
        // Student dashboard: progress, assigned units, recent activity.
        RouteDescriptor::view("/home", "home", View::eager("StudentHome")),
        // /learn/:unit
        // Unit-based learning flow. Keep this after /learn/video/:videoId
        // in the assembled table; first-match ordering is what stops this
        // pattern from swallowing video links.
        RouteDescriptor::view(
            "/learn/:unit",
            "StudentLearning",
            View::lazy("StudentLearning", "pages/StudentLearning"),
        ),
    ]
}
