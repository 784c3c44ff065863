//! SQLite implementation of the record store.

use async_trait::async_trait;
use loan_ledger_core::{Loan, NewLoan, NewUser, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::record_store::RecordStore;
use crate::sqlite::schema::{LoanRow, UserRow};

/// In-memory SQLite URL; the database lives as long as its single connection.
pub const MEMORY_URL: &str = "sqlite::memory:";

const LOAN_COLUMNS: &str = "id, user_id, amount, annual_interest_rate, monthly_payments";

// ============================================================================
// Pool setup
// ============================================================================

/// Open a pool, creating the database file if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> StoreResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = if database_url == MEMORY_URL {
        // Every connection to :memory: is a separate database, so pin one.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?
    };

    Ok(pool)
}

/// Apply the bundled schema migrations.
pub async fn run_migrations(pool: &SqlitePool) -> StoreResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

// ============================================================================
// SqliteStore
// ============================================================================

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect, migrate and wrap the pool.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = create_pool(database_url, max_connections).await?;
        run_migrations(&pool).await?;
        info!(database_url, "record store ready");
        Ok(Self { pool })
    }

    /// Fresh, migrated in-memory store.
    pub async fn in_memory() -> StoreResult<Self> {
        Self::connect(MEMORY_URL, 1).await
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn create_user(&self, user: &NewUser) -> StoreResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (name) VALUES (?) RETURNING id, name",
        )
        .bind(&user.name)
        .fetch_one(&self.pool)
        .await?;

        info!(user_id = row.id, "created user");
        Ok(row.into())
    }

    async fn get_user(&self, id: i64) -> StoreResult<User> {
        debug!(user_id = id, "loading user");
        sqlx::query_as::<_, UserRow>("SELECT id, name FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(User::from)
            .ok_or_else(|| StoreError::not_found("User", id))
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn create_loan(&self, loan: &NewLoan) -> StoreResult<Loan> {
        let sql = format!(
            "INSERT INTO loans (user_id, amount, annual_interest_rate, monthly_payments) \
             VALUES (?, ?, ?, ?) RETURNING {LOAN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(loan.user_id)
            .bind(loan.amount.to_string())
            .bind(loan.annual_interest_rate.to_string())
            .bind(loan.monthly_payments)
            .fetch_one(&self.pool)
            .await?;

        info!(loan_id = row.id, user_id = row.user_id, "created loan");
        Loan::try_from(row)
    }

    async fn get_loan(&self, id: i64) -> StoreResult<Loan> {
        debug!(loan_id = id, "loading loan");
        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE id = ?");
        let row = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Loan", id))?;
        Loan::try_from(row)
    }

    async fn list_loans(&self, user_id: i64) -> StoreResult<Vec<Loan>> {
        let sql = format!("SELECT {LOAN_COLUMNS} FROM loans WHERE user_id = ? ORDER BY id");
        let rows = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(Loan::try_from).collect()
    }

    async fn update_loan(&self, loan: &Loan) -> StoreResult<Loan> {
        let sql = format!(
            "UPDATE loans SET user_id = ?, amount = ?, annual_interest_rate = ?, \
             monthly_payments = ? WHERE id = ? RETURNING {LOAN_COLUMNS}"
        );
        let row = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(loan.user_id)
            .bind(loan.amount.to_string())
            .bind(loan.annual_interest_rate.to_string())
            .bind(loan.monthly_payments)
            .bind(loan.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::not_found("Loan", loan.id))?;

        info!(loan_id = row.id, user_id = row.user_id, "updated loan");
        Loan::try_from(row)
    }
}
