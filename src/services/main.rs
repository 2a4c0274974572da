use crate::dto::main::{IndexPageData, IndexQuery};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{UserListQuery, UserReader};
use crate::services::ServiceResult;

/// Loads one page of the user directory for the index template.
///
/// The requested page is clamped to a minimum of 1 and a whitespace-only
/// search term is treated as absent.
pub async fn load_index_page<R>(repo: &R, query: IndexQuery) -> ServiceResult<IndexPageData>
where
    R: UserReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);

    let search_query = query
        .search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let mut list_query = UserListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = &search_query {
        list_query = list_query.search(term.clone());
    }

    let (total, users) = repo.list_users(list_query).await?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let users = Paginated::new(users, page, total_pages, total);

    Ok(IndexPageData {
        users,
        search_query,
    })
}
