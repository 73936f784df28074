//! HTTP Handlers

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use kernel::pagination::PageParams;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::config::AuthConfig;
use crate::application::token::{AccessClaims, TokenService};
use crate::application::update_account::{ADMIN_EDIT_FIELDS, SELF_EDIT_FIELDS, UpdateField};
use crate::application::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, UpdateAccountUseCase,
};
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{account_id::AccountId, email::Email};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AccountListResponse, AccountResponse, EmailQuery, LogInRequest, LogInResponse, SignUpRequest,
    UpdateAccountRequest,
};

/// Shared state for auth and account handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Sign Up / Log In
// ============================================================================

/// POST /api/auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        password: req.password,
    };

    let account = use_case.execute(input).await?;

    Ok((StatusCode::CREATED, Json(AccountResponse::from(&account))))
}

/// POST /api/auth/login
pub async fn log_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LogInRequest>,
) -> AuthResult<Json<LogInResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.tokens.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LogInResponse {
        access_token: output.access_token,
        role: output.role,
    }))
}

// ============================================================================
// Account Queries
// ============================================================================

/// GET /api/user/all
pub async fn list_accounts<R>(
    State(state): State<AuthAppState<R>>,
    Query(page): Query<PageParams>,
) -> AuthResult<Json<AccountListResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    page.validate()
        .map_err(|e| AuthError::Validation(e.message().to_string()))?;

    let (accounts, total_users) = state.repo.list(&page).await?;

    Ok(Json(AccountListResponse {
        users: accounts.iter().map(AccountResponse::from).collect(),
        total_users,
    }))
}

/// GET /api/user/me
pub async fn get_own_account<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id = AccountId::from_uuid(claims.sub);

    let account = state
        .repo
        .find_by_id(&account_id)
        .await?
        .ok_or(AuthError::AccountNotFound)?;

    Ok(Json(AccountResponse::from(&account)))
}

/// GET /api/user?email=
pub async fn get_account_by_email<R>(
    State(state): State<AuthAppState<R>>,
    Query(query): Query<EmailQuery>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let email =
        Email::new(query.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

    let account = state
        .repo
        .find_by_email(&email)
        .await?
        .ok_or(AuthError::AccountNotFound)?;

    Ok(Json(AccountResponse::from(&account)))
}

/// GET /api/user/{id}
pub async fn get_account_by_id<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<Uuid>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account = state
        .repo
        .find_by_id(&AccountId::from_uuid(id))
        .await?
        .ok_or(AuthError::AccountNotFound)?;

    Ok(Json(AccountResponse::from(&account)))
}

// ============================================================================
// Account Updates
// ============================================================================

/// PATCH /api/user/me
///
/// Self-service edit: the broad allow-list, which never includes the role.
pub async fn update_own_account<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
    Json(req): Json<UpdateAccountRequest>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id = AccountId::from_uuid(claims.sub);
    update_with_allow_list(&state, &account_id, req, SELF_EDIT_FIELDS).await
}

/// PATCH /api/user/{id}
///
/// Admin edit: role changes only.
pub async fn update_account<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAccountRequest>,
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let account_id = AccountId::from_uuid(id);
    update_with_allow_list(&state, &account_id, req, ADMIN_EDIT_FIELDS).await
}

async fn update_with_allow_list<R>(
    state: &AuthAppState<R>,
    account_id: &AccountId,
    req: UpdateAccountRequest,
    allowed: &[UpdateField],
) -> AuthResult<Json<AccountResponse>>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateAccountUseCase::new(state.repo.clone(), state.config.clone());

    let account = use_case.execute(account_id, req.into(), allowed).await?;

    Ok(Json(AccountResponse::from(&account)))
}

// ============================================================================
// Account Deletion
// ============================================================================

/// DELETE /api/user/me
pub async fn delete_own_account<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<AccessClaims>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    delete_by_id(&state, AccountId::from_uuid(claims.sub)).await
}

/// DELETE /api/user/{id}
pub async fn delete_account<R>(
    State(state): State<AuthAppState<R>>,
    Path(id): Path<Uuid>,
) -> AuthResult<StatusCode>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    delete_by_id(&state, AccountId::from_uuid(id)).await
}

async fn delete_by_id<R>(state: &AuthAppState<R>, account_id: AccountId) -> AuthResult<StatusCode>
where
    R: AccountRepository + Clone + Send + Sync + 'static,
{
    if !state.repo.delete(&account_id).await? {
        return Err(AuthError::AccountNotFound);
    }

    tracing::info!(account_id = %account_id, "Account deleted");

    Ok(StatusCode::NO_CONTENT)
}
