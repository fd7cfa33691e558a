use axum::{
    response::Redirect,
    routing::{get, get_service},
    Router,
};
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::env;
use std::net::SocketAddr;
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use mergington_api::database::{schema, seed};
use mergington_api::web;

#[tokio::main]
async fn main() {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Connect to the database, creating the file on first run
    let db_path = env::var("SQLITE_DB").unwrap_or_else(|_| "data.sqlite".to_string());
    println!("Connecting to database: {}", db_path);

    if let Some(dir) = Path::new(&db_path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).expect("Cannot create database directory");
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .expect("Cannot connect to DB");

    // 3. Apply schema and seed initial data on an empty store
    schema::init_db(&pool).await.expect("Cannot apply schema");
    seed::seed_if_empty(&pool).await.expect("Cannot seed database");

    // 4. Build the whole application
    let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());
    let app = Router::new()
        .route("/", get(|| async { Redirect::to("/static/index.html") }))
        .merge(web::router(pool))
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir)).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new());

    // 5. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Cannot parse host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "Could not bind on {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Cannot parse fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Cannot bind on fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("Server running on http://{}", bound_addr);
    println!("Activities: http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
