//! This crate contains all shared UI for the todo board.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_service, make_session, tag_store, task_store};

mod session;
pub use session::{use_session, LogoutButton, SessionProvider};

pub mod activity_log;
pub use activity_log::{log_activity, use_activity_log, ActivityLog, LogLevel};

mod activity_log_panel;
pub use activity_log_panel::{ActivityLogPanel, ActivityLogToggle};

mod feedback;
pub use feedback::{ErrorBanner, LoadingBar};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod tag_dialog;
pub use tag_dialog::TagDialog;

mod tag_sidebar;
pub use tag_sidebar::TagSidebar;

mod task_card;
pub use task_card::TaskCard;

mod task_dialog;
pub use task_dialog::{TaskDialog, TaskDraft};
