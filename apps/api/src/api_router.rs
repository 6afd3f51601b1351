use axum::Router;
use axum::middleware::from_fn;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};


pub fn build_router(app_state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(
            "/business-units/{business_unit_id}/users/{user_id}/roles",
            get(handlers::get_user_roles_handler)
                .post(handlers::add_roles_handler)
                .delete(handlers::remove_roles_handler)
                .put(handlers::sync_roles_handler),
        )
        .route(
            "/business-units/{business_unit_id}/audit-log",
            get(handlers::list_audit_log_handler),
        )
        .route_layer(from_fn(middleware::require_system_auth));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
