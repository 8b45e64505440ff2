/// Errors that can occur during golden section search.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
