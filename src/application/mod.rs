mod store;

pub use store::{HISTORY_LIMIT, LedgerStore};
