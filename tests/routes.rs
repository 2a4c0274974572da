use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use httpmock::prelude::*;
use serde_json::json;
use tera::Tera;

use user_directory::repository::RemoteUserRepository;
use user_directory::routes::main::show_index;

mod common;

/// Runs one request through a full application wired against the given mock
/// upstream and returns the response status and HTML body.
async fn render(server: &MockServer, uri: &str) -> (StatusCode, String) {
    let tera = Tera::new("templates/**/*.html").unwrap();
    let repo = RemoteUserRepository::new(server.base_url());

    let app = test::init_service(
        App::new()
            .service(show_index)
            .app_data(web::Data::new(tera))
            .app_data(web::Data::new(repo)),
    )
    .await;

    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[actix_web::test]
async fn index_renders_user_cards_and_pagination() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .query_param("_page", "1")
            .query_param("_limit", "8");
        then.status(200)
            .header("x-total-count", "10")
            .json_body(json!(common::remote_users()[..8]));
    });

    let (status, body) = render(&server, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Leanne Graham"));
    assert!(body.contains("leanne.graham@example.com"));
    // 10 records at 8 per page leave a second page link.
    assert!(body.contains("page=2"));
}

#[actix_web::test]
async fn search_renders_matches_and_echoes_term() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200).json_body(json!(common::remote_users()));
    });

    let (status, body) = render(&server, "/?search=Leanne").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Leanne Graham"));
    assert!(!body.contains("Ervin Howell"));
    assert!(body.contains(r#"value="Leanne""#));
}

#[actix_web::test]
async fn search_without_matches_shows_filtered_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200).json_body(json!(common::remote_users()));
    });

    let (status, body) = render(&server, "/?search=zzz").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No users found for"));
    assert!(body.contains("zzz"));
}

#[actix_web::test]
async fn upstream_failure_degrades_to_empty_page() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(500);
    });

    let (status, body) = render(&server, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("No users found."));
}

#[actix_web::test]
async fn non_numeric_page_parameter_means_first_page() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/users")
            .query_param("_page", "1")
            .query_param("_limit", "8");
        then.status(200)
            .header("x-total-count", "10")
            .json_body(json!(common::remote_users()[..8]));
    });

    let (status, _) = render(&server, "/?page=abc").await;

    mock.assert();
    assert_eq!(status, StatusCode::OK);
}
