use async_trait::async_trait;

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod remote;

pub use remote::RemoteUserRepository;

#[derive(Debug, Clone)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Query describing one page of the directory: an optional name filter plus an
/// optional pagination window. Without pagination the full record set is
/// returned.
#[derive(Debug, Clone, Default)]
pub struct UserListQuery {
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl UserListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read access to the user directory. The single `list_users` operation covers
/// both the filtered and the unfiltered listing; implementations pick their
/// retrieval strategy based on whether `search` is set.
#[async_trait]
pub trait UserReader {
    /// Returns the total number of matching records together with the
    /// records falling into the requested page window.
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)>;
}
