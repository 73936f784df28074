//! Authorization Guard Middleware
//!
//! Per-route gate over authentication and role membership. Each route is
//! registered with an explicit [`RouteAccess`] record; the guard never
//! computes access rules, it only enforces the record it was given.
//!
//! Ordering invariant: authentication always precedes authorization. A
//! request that fails token verification is rejected before any role
//! check, and public routes skip both steps even if roles are declared
//! on them.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::token::TokenService;
use crate::domain::value_object::role::Role;
use crate::error::AuthError;

/// Every signed-in role
pub const ANY_ROLE: &[Role] = &[Role::Admin, Role::Editor, Role::User];

/// Roles allowed to manage the dog catalog
pub const EDITORIAL_ROLES: &[Role] = &[Role::Admin, Role::Editor];

/// Administrators only
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Access declaration for a single route
#[derive(Debug, Clone, Copy)]
pub struct RouteAccess {
    /// Reachable without a token; role declarations are inert when set
    pub public: bool,
    /// Roles permitted on the route; empty means any authenticated caller
    pub allowed_roles: &'static [Role],
}

impl RouteAccess {
    pub const fn public() -> Self {
        Self {
            public: true,
            allowed_roles: &[],
        }
    }

    pub const fn roles(allowed_roles: &'static [Role]) -> Self {
        Self {
            public: false,
            allowed_roles,
        }
    }
}

/// Guard middleware state
#[derive(Clone)]
pub struct GuardState {
    pub tokens: Arc<TokenService>,
    pub access: RouteAccess,
}

/// Middleware enforcing a route's [`RouteAccess`] declaration
///
/// On success the verified claims are attached to request extensions for
/// handlers to read.
pub async fn require_route_access(
    State(state): State<GuardState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    if state.access.public {
        return Ok(next.run(req).await);
    }

    let Some(token) = extract_bearer(req.headers()) else {
        return Err(AuthError::Unauthenticated.into_response());
    };

    let claims = match state.tokens.verify(&token) {
        Ok(claims) => claims,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(claims.clone());

    if !state.access.allowed_roles.is_empty() && !state.access.allowed_roles.contains(&claims.role)
    {
        return Err(AuthError::Forbidden.into_response());
    }

    Ok(next.run(req).await)
}
