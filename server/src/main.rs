use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use clap::Parser;
use graphql_demo_server::{config::ServerConfig, database::Database, handlers, schema};
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info,actix_server=info,actix_web=info"),
    )
    .init();

    let config = ServerConfig::parse();
    let graphql_root = Arc::new(schema::init());
    let database = Arc::new(Database::new());
    log::info!(
        "serving {} users at http://{}:{}{}",
        database.all().len(),
        config.host,
        config.port,
        handlers::GRAPHQL_PATH
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
                    .allowed_header(header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .app_data(web::Data::new(graphql_root.clone()))
            .app_data(web::Data::new(database.clone()))
            .configure(handlers::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
