use std::sync::Arc;

use api::QuestionSchema;
use tracing::{info, warn};

use crate::{
    config::Config,
    store::{MemoryStore, ResponseStore, StoreError, SupabaseStore},
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResponseStore>,
    /// Questions the backend stores and aggregates.
    pub schema: &'static QuestionSchema,
}

impl AppState {
    pub fn new(store: Arc<dyn ResponseStore>) -> Self {
        Self {
            store,
            schema: QuestionSchema::current(),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        match &config.supabase {
            Some(supabase) => {
                let store = SupabaseStore::new(supabase)?;
                info!("Using Supabase table at {}", store.table_url());
                Ok(Self::new(Arc::new(store)))
            }
            None => {
                warn!("No database configured, using in-memory store");
                Ok(Self::in_memory())
            }
        }
    }
}
