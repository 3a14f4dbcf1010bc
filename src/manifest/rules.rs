//! Caption rules per category
//!
//! Within a category the first matching rule whose file exists wins, so
//! multi-term patterns must come before the broader ones they overlap with.

use crate::domain::{Category, CategoryRules, MatchRule};

const fn rule(pattern: &'static str, target_filename: &'static str) -> MatchRule {
    MatchRule::new(pattern, target_filename)
}

#[rustfmt::skip]
pub const RULES: &[CategoryRules] = &[
    (Category::GettingStarted, &[
        rule("registration page", "registration-page-full.png"),
        rule("registration form filled", "registration-form-filled.png"),
        rule("login page", "login-page.png"),
        rule("dashboard for new admin", "dashboard-orgadmin-first-login.png"),
        rule("dashboard.*orgadmin", "dashboard-orgadmin-first-login.png"),
        rule("dashboard.*collaborator", "dashboard-collaborator-first-login.png"),
        rule("dashboard.*viewer", "dashboard-viewer-first-login.png"),
        rule("business cards showing", "dashboard-business-list.png"),
        rule("dashboard.*business.*list", "dashboard-business-list.png"),
        rule("language.*selector", "language-selector.png"),
        rule("role.*indicator", "role-indicator.png"),
    ]),
    (Category::BusinessManagement, &[
        rule("create.*business.*button", "create-business-button.png"),
        rule("create business modal", "business-creation-modal.png"),
        rule("business.*form", "business-creation-form.png"),
        rule("success.*business", "business-creation-success.png"),
        rule("business list", "business-list-view.png"),
        rule("business card.*progress", "business-card-progress.png"),
        rule("business.*action", "business-actions-menu.png"),
        rule("delete confirmation", "delete-confirmation.png"),
    ]),
    (Category::Questionnaire, &[
        rule("ai.*chat", "chat-interface-fresh.png"),
        rule("ai.*question", "first-question.png"),
        rule("answer.*typing", "user-answer-typing.png"),
        rule("text input", "text-input-question.png"),
        rule("answer submitted", "answer-submitted.png"),
        rule("chat.*exchanges", "chat-qa-exchanges.png"),
        rule("completed.*indicator", "completed-indicator.png"),
        rule("progress.*completion", "progress-indicator.png"),
        rule("phase unlock", "phase-unlock-toast.png"),
    ]),
    (Category::StrategicAnalysis, &[
        rule("analysis.*main", "analysis-main-view.png"),
        rule("analysis tab", "analysis-tab-nav.png"),
        rule("capability.*heatmap", "capability-heatmap.png"),
        rule("loyalty.*nps", "loyalty-nps.png"),
    ]),
    (Category::FinancialAnalysis, &[
        rule("document upload", "document-upload-interface.png"),
        rule("file selector", "file-selector.png"),
        rule("financial.*upload", "file-upload-prompt.png"),
    ]),
    (Category::Projects, &[
        rule("projects tab", "projects-tab.png"),
        rule("create project.*button", "create-project-button.png"),
        rule("project.*form", "project-creation-form.png"),
        rule("individual project", "individual-project-card.png"),
        rule("project list", "project-list-view.png"),
        rule("project details", "project-details-view.png"),
        rule("ranking interface", "project-ranking-interface.png"),
        rule("ai.*ranking", "ai-assisted-ranking.png"),
    ]),
    (Category::Collaboration, &[
        rule("invite.*collaborator", "add-user-collaborator.png"),
        rule("collaborators list", "collaborators-list.png"),
        rule("edit.*access", "edit-reranking-access.png"),
        rule("revoke access", "revoke-access-confirmation.png"),
    ]),
];
