//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::store::{AccountStore, DirectoryStore};

/// State shared by all portal routes
pub struct AppState<A, D> {
    pub accounts: Arc<A>,
    pub directory: Arc<D>,
    pub config: Config,
}

impl<A: AccountStore, D: DirectoryStore> AppState<A, D> {
    pub fn new(accounts: A, directory: D, config: Config) -> Self {
        Self {
            accounts: Arc::new(accounts),
            directory: Arc::new(directory),
            config,
        }
    }
}
