use crate::models::{RouteDescriptor, View};

/// Admin Route Module
///
/// Teacher-side routes, nested under `/admin`. All Protected. The guard only
/// checks credential *presence*; distinguishing a teacher token from a
/// student token is the backend's job when these pages call its APIs.
///
/// Everything except the upload page is lazily loaded: students never visit
/// these, so their code stays out of the common bundle.
pub fn admin_routes() -> Vec<RouteDescriptor> {
    vec![
        // /admin/upload
        // Video upload and course material management.
        RouteDescriptor::view("/admin/upload", "adminUpload", View::eager("AdminUpload")),
        // /admin/dashboard
        // Class overview: per-student progress and aggregate stats.
        RouteDescriptor::view(
            "/admin/dashboard",
            "teacherDashboard",
            View::lazy("TeacherDashboard", "pages/TeacherDashboard"),
        ),
        // /admin/agentlog
        // Transcript of the tutoring agent's interactions.
        RouteDescriptor::view(
            "/admin/agentlog",
            "teacherAgentLog",
            View::lazy("TeacherT5AgentLog", "pages/TeacherT5AgentLog"),
        ),
        // /admin/analyze
        // Learning-analytics reports over quiz and watch data.
        RouteDescriptor::view(
            "/admin/analyze",
            "teacherAnalyze",
            View::lazy("TeacherAnalyze", "pages/TeacherAnalyze"),
        ),
        // /admin/subtitle
        // Subtitle correction workbench for uploaded videos.
        RouteDescriptor::view(
            "/admin/subtitle",
            "teacherSubtitle",
            View::lazy("TeacherSubtitles", "pages/TeacherSubtitles"),
        ),
    ]
}
