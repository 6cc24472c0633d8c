#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("write failed: {0}")]
    WriteFailed(String),
}
