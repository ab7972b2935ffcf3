pub mod types;

pub use types::{AccountInfo, AccountType};
