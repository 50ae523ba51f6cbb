use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("database error while inserting {table}: {source}")]
    Database {
        table: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl SeedError {
    /// Adapter for `map_err` that tags a database error with the table being written.
    pub fn at(table: &'static str) -> impl FnOnce(sqlx::Error) -> SeedError {
        move |source| SeedError::Database { table, source }
    }
}
