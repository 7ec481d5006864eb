//! Common test utilities for trash-by-url
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::fixtures::{ConfigFactory, EDITOR_KEY};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let server = crate::common::TestServer::start(ConfigFactory::with_site(0)).await;
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

pub use assertions::EnvelopeAssertions;
pub use fixtures::{ConfigFactory, RecordFactory};

use actix_web::web;
use std::net::SocketAddr;
use std::sync::Arc;
use trash_by_url::config::Config;
use trash_by_url::server::{AppState, HttpServer};
use trash_by_url::MemoryContentStore;

/// Admin server listening on an ephemeral local port
pub struct TestServer {
    pub addr: SocketAddr,
    pub store: Arc<MemoryContentStore>,
    pub state: AppState,
    handle: actix_web::dev::ServerHandle,
}

impl TestServer {
    /// Serve `config` with its configured records. Call from inside an
    /// actix system, e.g. `#[actix_web::test]`.
    pub async fn start(config: Config) -> Self {
        let store = Arc::new(
            MemoryContentStore::from_config(config.store())
                .await
                .expect("store from config"),
        );
        let server = HttpServer::with_store(config, store.clone());
        let state = server.state().clone();

        let data = web::Data::new(state.clone());
        let http = actix_web::HttpServer::new(move || HttpServer::create_app(data.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port");
        let addr = http.addrs()[0];
        let running = http.run();
        let handle = running.handle();
        actix_web::rt::spawn(running);

        Self {
            addr,
            store,
            state,
            handle,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}
