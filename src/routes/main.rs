use actix_web::{Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::main::{IndexPageData, IndexQuery};
use crate::repository::RemoteUserRepository;
use crate::routes::render_template;
use crate::services::main as main_service;

#[derive(Deserialize)]
struct IndexQueryParams {
    search: Option<String>,
    /// Kept as text so a non-numeric value falls back to page 1 instead of
    /// rejecting the request.
    page: Option<String>,
}

#[get("/")]
pub async fn show_index(
    params: web::Query<IndexQueryParams>,
    repo: web::Data<RemoteUserRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();

    let query = IndexQuery {
        page: params.page.as_deref().and_then(|p| p.parse().ok()),
        search: params.search.clone(),
    };

    // A failing upstream degrades to an empty directory page; only the log
    // distinguishes "source unreachable" from "no matches".
    let data = match main_service::load_index_page(repo.get_ref(), query).await {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load the user directory: {err}");
            IndexPageData::empty(params.search)
        }
    };

    let mut context = Context::new();
    context.insert("current_page", "index");
    context.insert("users", &data.users);
    if let Some(q) = &data.search_query {
        context.insert("search_query", q);
    }

    render_template(&tera, "main/index.html", &context)
}
