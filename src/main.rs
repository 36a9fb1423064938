use std::{env, net::SocketAddr, sync::Arc, time::Duration};

#[macro_use]
extern crate lazy_static;

use axum::{
    extract::DefaultBodyLimit,
    http::header::CONTENT_TYPE,
    http::Method,
    routing::get,
    Router,
};
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    app::envy::Envy,
    posts::repository::{postgres::PgPostRepository, DynPostRepository},
};

mod app;
mod posts;

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub repository: DynPostRepository,
    pub envy: Arc<Envy>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::POST, Method::GET, Method::PATCH, Method::DELETE]);

    let body_limit = state
        .envy
        .body_limit_bytes
        .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

    Router::new()
        .route("/", get(app::controller::get_root))
        // posts
        .route(
            "/posts",
            get(posts::controller::validate_post).post(posts::controller::create_post),
        )
        .route("/posts/all", get(posts::controller::get_posts))
        .route(
            "/posts/:id",
            get(posts::controller::get_post_by_id)
                .patch(posts::controller::edit_post_by_id)
                .delete(posts::controller::delete_post_by_id),
        )
        // layers
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt::init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    tracing::info!(app_env = %envy.app_env, "loaded environment");

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let pool = PgPoolOptions::new()
        .max_connections(envy.database_max_connections.unwrap_or(50))
        .idle_timeout(Some(Duration::from_secs(60)))
        .connect(&envy.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("connected to db");

    let state = AppState {
        repository: Arc::new(PgPostRepository::new(pool)),
        envy: Arc::new(envy),
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
