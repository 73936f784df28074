//! Presentation Layer
//!
//! HTTP handlers, DTOs, routers, and the authorization guard.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::AuthAppState;
pub use middleware::{
    ADMIN_ONLY, ANY_ROLE, EDITORIAL_ROLES, GuardState, RouteAccess, require_route_access,
};
pub use router::{account_router, account_router_generic, auth_router, auth_router_generic};
