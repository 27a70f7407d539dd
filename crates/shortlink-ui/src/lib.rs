//! `Shortlink` UI - Leptos-based web client.
//!
//! This crate binds the `shortlink-core` page controller to the browser:
//! HTTP over `fetch`, the DOM clipboard, and signal-backed rendering.

// Component files tend to be large by nature - they contain view logic
#![allow(clippy::too_many_lines)]

pub mod api;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod state;
pub mod theme;

pub use app::App;
