use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;

mod errors;
mod handlers;
mod models;
mod schema;
mod service;
mod store;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let port = std::env::var("PORT").unwrap_or("8080".to_string());
    let database_url = std::env::var("DATABASE_URL").expect("env DATABASE_URL");
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("failed to create a pg pool");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .route("/", web::get().to(handlers::index))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .service(
                web::scope("/api/notes")
                    .route("", web::get().to(handlers::note::list))
                    .route("", web::post().to(handlers::note::create))
                    .route("/{id}", web::get().to(handlers::note::get))
                    .route("/{id}", web::put().to(handlers::note::update))
                    .route("/{id}", web::delete().to(handlers::note::delete)),
            )
    })
    .bind(format!("0.0.0.0:{}", port))?
    .run()
    .await
}
