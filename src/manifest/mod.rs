//! Baked-in copy manifest and caption rules
//!
//! Both tables are ordered slices. Manifest order only affects the order of
//! console output; rule order is the match priority within a category.

mod rules;

pub use rules::RULES;

use crate::domain::{Category, MatchRule, ScreenshotEntry};

const fn entry(
    source_filename: &'static str,
    category: Category,
    target_filename: &'static str,
) -> ScreenshotEntry {
    ScreenshotEntry::new(source_filename, category, target_filename)
}

use Category::{
    BusinessManagement, Collaboration, FinancialAnalysis, GettingStarted, Projects,
    Questionnaire, StrategicAnalysis,
};

/// Raw screenshot file name to (category, renamed file)
#[rustfmt::skip]
pub const MANIFEST: &[ScreenshotEntry] = &[
    entry("Registration page (full screen).png", GettingStarted, "registration-page-full.png"),
    entry("Registration form filled out (example data).png", GettingStarted, "registration-form-filled.png"),
    entry("Login page.png", GettingStarted, "login-page.png"),
    entry("Dashboard after first login for role orgadmin.png", GettingStarted, "dashboard-orgadmin-first-login.png"),
    entry("Dashboard after first login for users.png", GettingStarted, "dashboard-user-first-login.png"),
    entry("Dashboard after first login for collaborator.png", GettingStarted, "dashboard-collaborator-first-login.png"),
    entry("Dashboard after first login for viewers.png", GettingStarted, "dashboard-viewer-first-login.png"),
    entry("Dashboard with 2-3 businesses listed (showing sectioned list).png", GettingStarted, "dashboard-business-list.png"),
    entry("Language selector dropdown.png", GettingStarted, "language-selector.png"),
    entry("Role indicator in UI.png", GettingStarted, "role-indicator.png"),
    entry("Create Business button location.png", BusinessManagement, "create-business-button.png"),
    entry("Business creation modal.png", BusinessManagement, "business-creation-modal.png"),
    entry("Business creation form with sample data.png", BusinessManagement, "business-creation-form.png"),
    entry("Success confirmation after business creation.png", BusinessManagement, "business-creation-success.png"),
    entry("Business list view.png", BusinessManagement, "business-list-view.png"),
    entry("Business card with showing progress.png", BusinessManagement, "business-card-progress.png"),
    entry("Business actions menu (edit, delete, etc.).png", BusinessManagement, "business-actions-menu.png"),
    entry("Delete confirmation dialog.png", BusinessManagement, "delete-confirmation.png"),
    entry("Business limit reached message (5 businesses).png", BusinessManagement, "business-limit-reached.png"),
    entry("Validation error states.png", BusinessManagement, "validation-errors.png"),
    entry("AI assistant chat interface (fresh start).png", Questionnaire, "chat-interface-fresh.png"),
    entry("First question being asked by AI.png", Questionnaire, "first-question.png"),
    entry("User answer being typed.png", Questionnaire, "user-answer-typing.png"),
    entry("Text input question.png", Questionnaire, "text-input-question.png"),
    entry("User answer submitted (shown in chat history).png", Questionnaire, "answer-submitted.png"),
    entry("Chat with 3-5 Q&A exchanges visible.png", Questionnaire, "chat-qa-exchanges.png"),
    entry("Completed question indicator.png", Questionnaire, "completed-indicator.png"),
    entry("Progress indicator showing _ completion.png", Questionnaire, "progress-indicator.png"),
    entry("Phase unlock notification (toast).png", Questionnaire, "phase-unlock-toast.png"),
    entry("Analysis main view (showing available analyses).png", StrategicAnalysis, "analysis-main-view.png"),
    entry("Analysis tab in navigation.png", StrategicAnalysis, "analysis-tab-nav.png"),
    entry("Capability Heatmap example .png", StrategicAnalysis, "capability-heatmap.png"),
    entry("Loyalty and NPS example.png", StrategicAnalysis, "loyalty-nps.png"),
    entry("Document upload interface.png", FinancialAnalysis, "document-upload-interface.png"),
    entry("File selector dialog.png", FinancialAnalysis, "file-selector.png"),
    entry("File upload prompt (for financial docs).png", FinancialAnalysis, "file-upload-prompt.png"),
    entry("Projects tab.png", Projects, "projects-tab.png"),
    entry("create project button.png", Projects, "create-project-button.png"),
    entry("Project creation form.png", Projects, "project-creation-form.png"),
    entry("Individual project card.png", Projects, "individual-project-card.png"),
    entry("Project list view.png", Projects, "project-list-view.png"),
    entry("Project details view.png", Projects, "project-details-view.png"),
    entry("Project ranking interface.png", Projects, "project-ranking-interface.png"),
    entry("AI-assisted ranking view.png", Projects, "ai-assisted-ranking.png"),
    entry("Kickstart Project.png", Projects, "kickstart-project.png"),
    entry("Add user and collaborator access.png", Collaboration, "add-user-collaborator.png"),
    entry("Collaborators list.png", Collaboration, "collaborators-list.png"),
    entry("Edit and reranking access for specific project.png", Collaboration, "edit-reranking-access.png"),
    entry("Revoke access confirmation.png", Collaboration, "revoke-access-confirmation.png"),
];

/// Manifest entries for one category, in manifest order
pub fn entries_for(category: Category) -> impl Iterator<Item = &'static ScreenshotEntry> {
    MANIFEST.iter().filter(move |e| e.category == category)
}

/// Rules for one category, in priority order
pub fn rules_for(category: Category) -> &'static [MatchRule] {
    for (c, rules) in RULES {
        if *c == category {
            return rules;
        }
    }
    &[]
}
