//! Viewer Role
//!
//! Gates rendering of edit affordances. Not a security boundary: the backend
//! authorizes every mutating request itself.

/// How an inquiry's full text is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionAccess {
    /// FAQ entries, `GET /question/{id}`
    Public,
    /// `GET /admin/question/{id}`
    Admin,
    /// Writer's password, `POST /question/{id}`
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerRole {
    #[default]
    Guest,
    Admin,
}

impl ViewerRole {
    pub fn is_admin(self) -> bool {
        self == ViewerRole::Admin
    }

    /// Delete/modify buttons on cards
    pub fn can_edit(self) -> bool {
        self.is_admin()
    }

    /// Drag-and-drop re-sequencing of product cards
    pub fn can_reorder(self) -> bool {
        self.is_admin()
    }

    pub fn question_access(self, faq: bool) -> QuestionAccess {
        match (self, faq) {
            (ViewerRole::Admin, _) => QuestionAccess::Admin,
            (ViewerRole::Guest, true) => QuestionAccess::Public,
            (ViewerRole::Guest, false) => QuestionAccess::Password,
        }
    }

    /// Header background switches in manager mode
    pub fn header_class(self) -> &'static str {
        match self {
            ViewerRole::Guest => "site-header",
            ViewerRole::Admin => "site-header manager-mode",
        }
    }
}
