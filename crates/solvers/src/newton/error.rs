/// Errors that can occur during a Newton solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Hessian is singular at {x:?}")]
    SingularHessian { x: [f64; 2] },

    #[error("iterate left the finite domain at {x:?}")]
    NonFinite { x: [f64; 2] },
}

impl Error {
    pub(crate) fn problem<E: std::error::Error + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}
