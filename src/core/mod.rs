pub mod constants;
pub mod error;
pub mod indexer;
pub mod pool;
pub mod pool_index;
pub mod route;
pub mod steps;
pub mod types;

pub use error::RouterError;
pub use pool_index::PoolIndex;
pub use types::{FeeRate, Pool, Route, SwapStep};
