use ds_cost::CostError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("cost model rejected: {0}")]
    Cost(#[from] CostError),
}

pub type SimResult<T> = Result<T, SimError>;
