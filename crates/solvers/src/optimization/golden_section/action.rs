/// Actions an observer can return during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the best point found so far.
    StopEarly,

    /// Treat this point as worse than the other interior point.
    ///
    /// The bracket shrinks away from this point and a successful evaluation
    /// is never reported as the best. Useful for recovering from objective
    /// failures or for steering the search off part of the parameter range.
    AssumeWorse,
}
