#[cfg(feature = "server")]
use actix_files::Files;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::models::config::ServerConfig;
#[cfg(feature = "server")]
use crate::repository::RemoteUserRepository;
#[cfg(feature = "server")]
use crate::routes::main::show_index;

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub mod routes;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let repo = RemoteUserRepository::new(server_config.users_api_url.clone());

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
