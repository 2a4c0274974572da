use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use tera::{Context, Tera};

pub mod main;

/// Renders a tera template into an HTML response, failing closed with a 500
/// when the template engine errors.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("Failed to render template {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
