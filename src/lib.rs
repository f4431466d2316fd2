//! Read-through cached access to a genomic knowledge-base API.
//!
//! [`KbClient`] composes a TTL [`cache::CacheStore`] with a
//! [`gateway::FetchGateway`] and maps backend payloads into stable canonical
//! records regardless of which historical response schema the backend serves.
//! Entity accessors soft-fail: transport and decode problems are logged as
//! warnings and collapsed to `None` / empty, so presentation code never sees
//! an error from this layer.

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod gateway;
pub mod lethality;
pub mod normalize;

pub use client::KbClient;
pub use error::KbError;
