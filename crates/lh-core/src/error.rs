use thiserror::Error;

pub type LhResult<T> = Result<T, LhError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LhError {
    #[error("Capacity exceeded: {what} (count={count}, max={max})")]
    Capacity {
        what: &'static str,
        count: usize,
        max: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
