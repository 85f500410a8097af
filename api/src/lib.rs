//! Keysmith API service.
//!
//! A thin HTTP shell over [`keysmith_issuer`]. Two adapters call the same
//! issuance operation:
//!
//! - `POST /generate` takes a JSON subject and returns both artifacts as JSON.
//! - `GET /` serves an HTML form which posts to `POST /result`, rendering the
//!   artifacts as a page.
//!
//! Every other path is served from the static assets directory. See
//! [`config::KeysmithApiConfig`] for configuration options.

pub mod config;
pub mod context;
pub mod server;

pub(crate) mod error;
pub(crate) mod handlers;
pub(crate) mod templates;
