pub mod token_store;

pub use token_store::{keys, FileTokenStore, MemoryTokenStore, TokenStore};
