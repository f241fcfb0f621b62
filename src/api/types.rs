//! Shared state for the API layer.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::adjudicator::ReasoningClient;
use crate::export::TemplateEngine;

/// Shared context for all API routes.
///
/// The SQLite connection is serialized behind one mutex; every handler
/// takes it only inside `spawn_blocking`. The reasoning client and
/// template engine are trait objects so tests can script them.
#[derive(Clone)]
pub struct ApiContext {
    pub db: Arc<Mutex<Connection>>,
    pub llm: Arc<dyn ReasoningClient + Send + Sync>,
    /// Raw JSON of the historical rules database, possibly empty.
    pub rules: Arc<str>,
    /// Accident-card template bytes.
    pub template: Arc<[u8]>,
    pub engine: Arc<dyn TemplateEngine + Send + Sync>,
}

impl ApiContext {
    pub fn new(
        db: Connection,
        llm: Arc<dyn ReasoningClient + Send + Sync>,
        rules: String,
        template: Vec<u8>,
        engine: Arc<dyn TemplateEngine + Send + Sync>,
    ) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            llm,
            rules: rules.into(),
            template: template.into(),
            engine,
        }
    }
}
