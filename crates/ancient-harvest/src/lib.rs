//! Core library for the Ancient Harvest direct-to-consumer storefront.
//!
//! The catalog model, the shop filter engine, and the quiz recommendation
//! engine live here. Everything is synchronous and pure: consumers hand the
//! engines a catalog snapshot plus the user's parameters and get a fresh
//! derived list back. Cart, checkout, authentication, and persistence are
//! owned by external collaborators and never appear in this crate.

pub mod catalog;
pub mod config;
pub mod error;
pub mod storefront;
pub mod telemetry;
