//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the REST calls, `backend` defines the seams flows depend
//! on, `config` locates the backend, and `types` defines the wire schema.

pub mod api;
pub mod backend;
pub mod config;
pub mod types;
