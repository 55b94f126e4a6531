//! Shared application state handed to every handler through Axum's
//! `State` extractor.

use std::{sync::Arc, time::Instant};

use sqlx::PgPool;

use crate::config::Config;

/// Cheaply cloneable handle to the catalog's shared resources
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    db: PgPool,
    config: Config,
    started_at: Instant,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                db,
                config,
                started_at: Instant::now(),
            }),
        }
    }

    /// Catalog database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Whole seconds since the state was built
    pub fn uptime_secs(&self) -> u64 {
        self.inner.started_at.elapsed().as_secs()
    }
}
