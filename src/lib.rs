//! emonotate navigation shell
//!
//! Client-side navigation for the emonotate single-page application:
//! - Ordered route table mapping `/app/...` paths to page views
//! - Side navigation menu with a live pending-request badge
//! - Server-side entry redirect into the app (Dioxus fullstack + axum)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
