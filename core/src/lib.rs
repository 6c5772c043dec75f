//! Typed client for the Imobiliar real-estate backend.
//!
//! # Overview
//! Every call is a JSON envelope POSTed to one endpoint per tenant. A call
//! runs inside a session: log in with the tenant's credentials, run actions
//! with the session id, log out. [`Client::with_session`] and
//! [`SessionGuard`] make the logout unconditional, and
//! [`Client::run_multi`] runs the whole sequence for many tenants at once.
//!
//! # Design
//! - Envelope construction and response classification are pure functions
//!   over [`HttpRequest`] / [`HttpResponse`]; only a [`Transport`] touches
//!   the network. Tests swap in a scripted transport.
//! - Actions are marker types implementing [`Action`], so a request body
//!   can only be paired with its own response schema.
//! - Every failure is an [`ApiError`]; nothing in the client panics on bad
//!   backend input.

pub mod action;
pub mod actions;
pub mod batch;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use action::Action;
pub use batch::{Batch, BatchEntry, BatchResult};
pub use client::Client;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::{HttpRequest, HttpResponse};
pub use session::{hash_secret, Credentials, Session, SessionGuard};
pub use transport::{Deadline, Transport, UreqTransport};
