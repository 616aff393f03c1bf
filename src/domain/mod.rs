mod aggregates;
mod money;
mod transaction;

pub use aggregates::*;
pub use money::*;
pub use transaction::*;
