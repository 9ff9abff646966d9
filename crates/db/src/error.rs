/// Failure inside a record store backend.
///
/// Both variants display the underlying message unchanged; the API passes
/// it through to callers as-is.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Migration(#[from] sqlx::migrate::MigrateError),
}
