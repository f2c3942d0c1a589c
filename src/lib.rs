//! Upload page drop-zone for the reconciliation app.
//!
//! A Leptos client-side app: users pick files by clicking or dropping onto
//! the zone, and a preview list of names and sizes is rebuilt on every change.
//! Selection logic lives in [`recon_upload_core`].

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod utils;
