//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the core `CarApi` trait over `fetch` via gloo-net.

pub mod api;
