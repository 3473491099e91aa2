//! Manifold Gateway Client
//!
//! Thin HTTP implementation of the [`manifold_core::ConfigGateway`]
//! contract: three endpoints under one base URL, JSON bodies, a `configType`
//! query parameter on every call. Kept out of `manifold-core` so the model
//! stays transport-free.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;

pub use client::HttpGateway;
