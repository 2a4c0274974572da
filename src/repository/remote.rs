use async_trait::async_trait;
use reqwest::header;

use crate::domain::user::User;
use crate::repository::errors::RepositoryResult;
use crate::repository::{Pagination, UserListQuery, UserReader};

/// Total assumed when the upstream omits or mangles the `x-total-count` header.
pub const FALLBACK_TOTAL_COUNT: usize = 10;

const TOTAL_COUNT_HEADER: &str = "x-total-count";

/// [`UserReader`] backed by a remote HTTP API in the JSONPlaceholder style:
/// `GET /users` serves the full record set, `_page`/`_limit` select a window,
/// and the matching total arrives in the `x-total-count` response header.
///
/// The upstream offers no server-side text filter, so a search query fetches
/// the full set and filters locally before slicing out the requested page.
#[derive(Clone)]
pub struct RemoteUserRepository {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteUserRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Every request opts out of caching; the remote source is re-queried on
    /// each invocation.
    fn get_users(&self) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/users", self.base_url))
            .header(header::CACHE_CONTROL, "no-store")
    }

    async fn fetch_window(
        &self,
        pagination: Option<&Pagination>,
    ) -> RepositoryResult<(usize, Vec<User>)> {
        let Some(window) = pagination else {
            let users: Vec<User> = self
                .get_users()
                .send()
                .await?
                .error_for_status()?
                .json()
                .await?;
            let total = users.len();
            return Ok((total, users));
        };

        let response = self
            .get_users()
            .query(&[
                ("_page", window.page.max(1).to_string()),
                ("_limit", window.per_page.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(FALLBACK_TOTAL_COUNT);

        let users: Vec<User> = response.json().await?;

        Ok((total, users))
    }

    async fn fetch_filtered(
        &self,
        term: &str,
        pagination: Option<&Pagination>,
    ) -> RepositoryResult<(usize, Vec<User>)> {
        let users: Vec<User> = self
            .get_users()
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Plain case-insensitive substring containment on the name field only.
        let needle = term.to_lowercase();
        let matched: Vec<User> = users
            .into_iter()
            .filter(|user| user.name.to_lowercase().contains(&needle))
            .collect();

        let total = matched.len();
        let users = match pagination {
            Some(window) => {
                let offset = window.page.max(1).saturating_sub(1) * window.per_page;
                matched
                    .into_iter()
                    .skip(offset)
                    .take(window.per_page)
                    .collect()
            }
            None => matched,
        };

        Ok((total, users))
    }
}

#[async_trait]
impl UserReader for RemoteUserRepository {
    async fn list_users(&self, query: UserListQuery) -> RepositoryResult<(usize, Vec<User>)> {
        match query.search.as_deref() {
            Some(term) => self.fetch_filtered(term, query.pagination.as_ref()).await,
            None => self.fetch_window(query.pagination.as_ref()).await,
        }
    }
}
