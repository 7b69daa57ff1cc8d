//! Startup and serve errors for the site host.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid configuration: {var} = {value:?}: {reason}")]
    Config { var: &'static str, value: String, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[from] io::Error),
}
