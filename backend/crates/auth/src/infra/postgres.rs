//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::pagination::PageParams;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::account::Account;
use crate::domain::repository::AccountRepository;
use crate::domain::value_object::{
    account_id::AccountId, account_password::AccountPassword, email::Email, role::Role,
};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw database row for an account
#[derive(sqlx::FromRow)]
struct AccountRow {
    account_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    account_role: i16,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> AuthResult<Account> {
        let role = Role::from_id(self.account_role)
            .ok_or_else(|| AuthError::Internal(format!("Invalid role id: {}", self.account_role)))?;

        let password_hash = AccountPassword::from_phc_string(self.password_hash)
            .map_err(|e| AuthError::Internal(format!("Stored digest unreadable: {e}")))?;

        Ok(Account {
            account_id: AccountId::from_uuid(self.account_id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            password_hash,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

const ACCOUNT_COLUMNS: &str = r#"
    account_id,
    first_name,
    last_name,
    email,
    password_hash,
    account_role,
    created_at,
    updated_at
"#;

impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO accounts (
                account_id,
                first_name,
                last_name,
                email,
                password_hash,
                account_role,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.role.id())
        .bind(account.created_at)
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, account_id: &AccountId) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE account_id = $1"
        ))
        .bind(account_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<Account>> {
        let row = sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_account()).transpose()
    }

    async fn list(&self, page: &PageParams) -> AuthResult<(Vec<Account>, i64)> {
        let rows = sqlx::query_as::<_, AccountRow>(&format!(
            r#"
            SELECT {ACCOUNT_COLUMNS}
            FROM accounts
            ORDER BY created_at
            LIMIT $1 OFFSET $2
            "#
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        let accounts = rows
            .into_iter()
            .map(AccountRow::into_account)
            .collect::<AuthResult<Vec<_>>>()?;

        Ok((accounts, total))
    }

    async fn update(&self, account: &Account) -> AuthResult<()> {
        sqlx::query(
            r#"
            UPDATE accounts SET
                first_name = $2,
                last_name = $3,
                email = $4,
                password_hash = $5,
                account_role = $6,
                updated_at = $7
            WHERE account_id = $1
            "#,
        )
        .bind(account.account_id.as_uuid())
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(account.email.as_str())
        .bind(account.password_hash.as_phc_string())
        .bind(account.role.id())
        .bind(account.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, account_id: &AccountId) -> AuthResult<bool> {
        let deleted = sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}
