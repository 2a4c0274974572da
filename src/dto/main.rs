use crate::domain::user::User;
use crate::pagination::Paginated;

/// Query parameters accepted by the index page service.
#[derive(Debug, Default)]
pub struct IndexQuery {
    /// Optional search string entered by the user.
    pub search: Option<String>,
    /// Page number requested by the user interface.
    pub page: Option<usize>,
}

/// Data required to render the directory index template.
pub struct IndexPageData {
    /// Paginated list of users to show in the card grid.
    pub users: Paginated<User>,
    /// Search query echoed back to the template when present.
    pub search_query: Option<String>,
}

impl IndexPageData {
    /// The degraded page rendered when the remote source is unreachable:
    /// no users, zero total, no pagination controls.
    pub fn empty(search: Option<String>) -> Self {
        Self {
            users: Paginated::new(vec![], 1, 0, 0),
            search_query: search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
