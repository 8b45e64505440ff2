/// Actions an observer can return during a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the current iterate.
    StopEarly,
}
