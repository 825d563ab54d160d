//! clean-env: write a clean local `.env` file
//!
//! Holds the Stripe, Calendly and domain values, renders them as a
//! `KEY=VALUE` document and overwrites `.env` with the result.

pub mod cli;
pub mod config;
pub mod domain;
pub mod redact;
pub mod render;
