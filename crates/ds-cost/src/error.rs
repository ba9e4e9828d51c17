use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostError {
    #[error("unknown cost model \"{0}\" (expected \"linear\" or \"exponential\")")]
    UnknownModel(String),

    #[error("cost model produced a non-finite score for capacity={capacity}, running={running}, pending={pending}")]
    NonFinite {
        capacity: u32,
        running:  usize,
        pending:  usize,
    },

    #[error("cost model produced a negative score {score} for capacity={capacity}, running={running}, pending={pending}")]
    Negative {
        score:    f64,
        capacity: u32,
        running:  usize,
        pending:  usize,
    },
}

pub type CostResult<T> = Result<T, CostError>;
