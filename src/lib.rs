//! Library entrypoint for the Bitunix relay.
//!
//! Integration tests under `tests/` build the router from here and point the
//! broker client at a mock server.

pub mod config;
pub mod models;
pub mod services;

pub mod controllers;
pub mod routes;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub bitunix: services::bitunix::BitunixClient,
}

impl AppState {
    pub fn new(settings: config::Settings) -> Self {
        let bitunix = services::bitunix::BitunixClient::new(settings.bitunix.clone());
        Self { settings, bitunix }
    }
}
