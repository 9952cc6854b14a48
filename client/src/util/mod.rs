//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser APIs (`localStorage`, `window.alert`, `File`) are wrapped here so
//! pages and components stay free of `web_sys` plumbing.

pub mod browser;
