//! Auth and Account Routers

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::AccountRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{
    ADMIN_ONLY, ANY_ROLE, GuardState, RouteAccess, require_route_access,
};

/// Create the auth router (signup/login) with PostgreSQL repository
pub fn auth_router(
    repo: PgAccountRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    auth_router_generic(repo, config, tokens)
}

/// Create the auth router for any repository implementation
///
/// Both routes are public by design: they are how a caller obtains a
/// token in the first place.
pub fn auth_router_generic<R>(
    repo: R,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens: tokens.clone(),
    };

    let public = GuardState {
        tokens,
        access: RouteAccess::public(),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/login", post(handlers::log_in::<R>))
        .route_layer(middleware::from_fn_with_state(
            public,
            require_route_access,
        ))
        .with_state(state)
}

/// Create the account router with PostgreSQL repository
pub fn account_router(
    repo: PgAccountRepository,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router {
    account_router_generic(repo, config, tokens)
}

/// Create the account router for any repository implementation
///
/// Every route declares its access record here, at registration time;
/// the guard middleware only enforces what is declared.
pub fn account_router_generic<R>(
    repo: R,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
) -> Router
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        config,
        tokens: tokens.clone(),
    };

    let admin_only = GuardState {
        tokens: tokens.clone(),
        access: RouteAccess::roles(ADMIN_ONLY),
    };
    let any_role = GuardState {
        tokens,
        access: RouteAccess::roles(ANY_ROLE),
    };

    // Self-service routes: any signed-in caller, always acting on itself
    let own_routes = Router::new()
        .route(
            "/me",
            get(handlers::get_own_account::<R>)
                .patch(handlers::update_own_account::<R>)
                .delete(handlers::delete_own_account::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            any_role,
            require_route_access,
        ));

    // Administration routes: lookups and edits of arbitrary accounts
    let admin_routes = Router::new()
        .route("/all", get(handlers::list_accounts::<R>))
        .route("/", get(handlers::get_account_by_email::<R>))
        .route(
            "/{id}",
            get(handlers::get_account_by_id::<R>)
                .patch(handlers::update_account::<R>)
                .delete(handlers::delete_account::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            admin_only,
            require_route_access,
        ));

    own_routes.merge(admin_routes).with_state(state)
}
