//! Counting wrapper around the sea-orm connection pool.
//!
//! Every helper sends exactly one statement (or one batch for `executemany`) and bumps
//! the call counter shown by the `stats` command. Statements use `$1, $2, ...`
//! placeholders, which both SQLite and PostgreSQL accept.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    FromQueryResult, QueryResult, Statement, TryGetable, Value,
};

#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
    calls: Arc<AtomicU64>,
}

impl Database {
    /// Wraps an already open connection without running migrations.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Opens the pool, switches SQLite to WAL mode and applies pending migrations.
    ///
    /// # Arguments
    /// - `url` - Connection string, `sqlite://...` or `postgres://...`
    ///
    /// # Returns
    /// - `Ok(Database)` - Connected database with an up-to-date schema
    /// - `Err(DbErr)` - Failed to connect or migrate
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut opt = ConnectOptions::new(url);
        opt.sqlx_logging(false);

        let conn = sea_orm::Database::connect(opt).await?;

        if conn.get_database_backend() == DatabaseBackend::Sqlite {
            conn.execute_unprepared("PRAGMA journal_mode=WAL").await?;
        }

        Migrator::up(&conn, None).await?;

        let db = Self::new(conn);
        db.commit().await?;

        tracing::debug!("Database ready ({:?})", db.backend());

        Ok(db)
    }

    pub fn backend(&self) -> DatabaseBackend {
        self.conn.get_database_backend()
    }

    /// Underlying connection, for code that wants sea-orm's query builder.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Number of statements sent through this wrapper so far.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    fn statement(&self, sql: &str, values: Vec<Value>) -> Statement {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Statement::from_sql_and_values(self.backend(), sql, values)
    }

    async fn first(&self, sql: &str, values: Vec<Value>) -> Result<Option<QueryResult>, DbErr> {
        let stmt = self.statement(sql, values);
        self.conn.query_one_raw(stmt).await
    }

    /// First column of the first row, `None` when there is no row or the value is NULL.
    pub async fn field<T>(&self, sql: &str, values: Vec<Value>) -> Result<Option<T>, DbErr>
    where
        T: TryGetable,
    {
        match self.first(sql, values).await? {
            Some(row) => Ok(row.try_get_by_index::<Option<T>>(0)?),
            None => Ok(None),
        }
    }

    /// First row decoded into `M`.
    pub async fn row<M>(&self, sql: &str, values: Vec<Value>) -> Result<Option<M>, DbErr>
    where
        M: FromQueryResult,
    {
        match self.first(sql, values).await? {
            Some(row) => Ok(Some(M::from_query_result(&row, "")?)),
            None => Ok(None),
        }
    }

    /// Every row decoded into `M`.
    pub async fn rows<M>(&self, sql: &str, values: Vec<Value>) -> Result<Vec<M>, DbErr>
    where
        M: FromQueryResult,
    {
        let stmt = self.statement(sql, values);
        self.conn
            .query_all_raw(stmt)
            .await?
            .iter()
            .map(|row| M::from_query_result(row, ""))
            .collect()
    }

    /// First column of every row. NULL values are skipped.
    pub async fn column<T>(&self, sql: &str, values: Vec<Value>) -> Result<Vec<T>, DbErr>
    where
        T: TryGetable,
    {
        let stmt = self.statement(sql, values);
        let rows = self.conn.query_all_raw(stmt).await?;

        let mut column = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(value) = row.try_get_by_index::<Option<T>>(0)? {
                column.push(value);
            }
        }

        Ok(column)
    }

    /// Runs a statement that returns no rows, yielding the affected-row count.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<u64, DbErr> {
        let stmt = self.statement(sql, values);
        Ok(self.conn.execute_raw(stmt).await?.rows_affected())
    }

    /// Runs the same statement once per parameter set.
    ///
    /// Counted as one call. Sets are not wrapped in a transaction, so a failure leaves
    /// earlier sets applied.
    pub async fn executemany(&self, sql: &str, valueset: Vec<Vec<Value>>) -> Result<u64, DbErr> {
        self.calls.fetch_add(1, Ordering::Relaxed);

        let backend = self.backend();
        let mut affected = 0;
        for values in valueset {
            let stmt = Statement::from_sql_and_values(backend, sql, values);
            affected += self.conn.execute_raw(stmt).await?.rows_affected();
        }

        Ok(affected)
    }

    /// Flushes the SQLite write-ahead log into the main database file.
    ///
    /// PostgreSQL commits every statement on its own, so this is a no-op there.
    pub async fn commit(&self) -> Result<(), DbErr> {
        if self.backend() == DatabaseBackend::Sqlite {
            self.conn
                .execute_unprepared("PRAGMA wal_checkpoint(TRUNCATE)")
                .await?;
        }

        Ok(())
    }

    /// Commits outstanding work and closes the pool.
    pub async fn close(self) -> Result<(), DbErr> {
        self.commit().await?;
        self.conn.close().await
    }
}
