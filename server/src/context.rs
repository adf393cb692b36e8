use crate::database::Database;
use std::sync::Arc;

/// Per-request resolver context. Every request shares the same store.
#[derive(Clone, Debug)]
pub struct GraphqlContext {
    store: Arc<Database>,
}

impl GraphqlContext {
    pub fn init(store: Arc<Database>) -> Self {
        Self { store }
    }

    pub fn database(&self) -> &Database {
        &self.store
    }
}

impl juniper::Context for GraphqlContext {}
