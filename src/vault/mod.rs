pub mod types;
mod store;

pub use store::VaultStore;
