#![deny(clippy::all)]
#![deny(rust_2018_idioms)]

use slog::Logger;

use crate::{application::EnvConfig, db::DocumentStore};

pub mod application;
pub mod db;
pub mod response;
pub mod routes;

#[cfg(test)]
pub mod test_util;

/// The shared state of the Gateway, one instance serves all requests.
pub struct Application<S: DocumentStore> {
    pub store: S,
    pub config: EnvConfig,
    pub logger: Logger,
}

impl<S: DocumentStore + 'static> Application<S> {
    pub fn new(store: S, config: EnvConfig, logger: Logger) -> Self {
        Self {
            store,
            config,
            logger,
        }
    }
}
