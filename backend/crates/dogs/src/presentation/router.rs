//! Dog Router

use auth::application::token::TokenService;
use auth::presentation::middleware::{
    EDITORIAL_ROLES, GuardState, RouteAccess, require_route_access,
};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use platform::storage::{HttpObjectStore, ObjectStore};
use std::sync::Arc;

use crate::domain::repository::DogRepository;
use crate::infra::postgres::PgDogRepository;
use crate::presentation::handlers::{self, DogAppState};

/// Create the dog router with PostgreSQL repository and HTTP object store
pub fn dog_router(
    repo: PgDogRepository,
    store: HttpObjectStore,
    tokens: Arc<TokenService>,
) -> Router {
    dog_router_generic(repo, store, tokens)
}

/// Create the dog router for any repository/store implementation
///
/// Reads are public; catalog mutations require an editorial role. Access
/// records are declared here at registration time, per route.
pub fn dog_router_generic<R, S>(repo: R, store: S, tokens: Arc<TokenService>) -> Router
where
    R: DogRepository + Clone + Send + Sync + 'static,
    S: ObjectStore + Clone + Send + Sync + 'static,
{
    let state = DogAppState {
        repo: Arc::new(repo),
        store: Arc::new(store),
    };

    let public = GuardState {
        tokens: tokens.clone(),
        access: RouteAccess::public(),
    };
    let editorial = GuardState {
        tokens,
        access: RouteAccess::roles(EDITORIAL_ROLES),
    };

    // Catalog reads: open to anyone, token or not
    let read_routes = Router::new()
        .route("/all", get(handlers::list_dogs::<R, S>))
        .route("/{id}", get(handlers::get_dog::<R, S>))
        .route_layer(middleware::from_fn_with_state(
            public,
            require_route_access,
        ));

    // Catalog mutations: editors and admins
    let write_routes = Router::new()
        .route("/create", post(handlers::create_dog::<R, S>))
        .route(
            "/{id}",
            patch(handlers::update_dog::<R, S>).delete(handlers::delete_dog::<R, S>),
        )
        .route_layer(middleware::from_fn_with_state(
            editorial,
            require_route_access,
        ));

    read_routes.merge(write_routes).with_state(state)
}
