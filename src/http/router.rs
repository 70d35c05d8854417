use crate::app_context::AppContext;
use crate::cli::Args;
use crate::http::{cors, middleware};
use crate::storage::contacts::HashMapContactsStorage;
use crate::{contacts, health};
use axum::routing::get;
use axum::Router;

pub fn new(_args: &Args, app_context: AppContext<HashMapContactsStorage>) -> Router {
    let cors_policy = cors::layer();
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let contacts_routes = Router::new()
        .route(
            "/",
            get(contacts::handlers::index).post(contacts::handlers::create),
        )
        .route(
            "/:contact_id",
            get(contacts::handlers::show)
                .put(contacts::handlers::update)
                .delete(contacts::handlers::destroy),
        );

    Router::new()
        .nest("/health", health_routes)
        .nest("/contacts", contacts_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(middleware::tracing))
}
