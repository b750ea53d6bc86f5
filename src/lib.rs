//! Core library exports for the Storebot service.
//!
//! This crate exposes the domain, persistence, forms, routes and service
//! layers used by the Storebot Telegram commerce application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "server")]
pub mod dedup;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;

/// Maximum depth of the category tree.
///
/// Real data never comes close to this, but level computation and tree
/// traversal both refuse to go deeper so malformed rows cannot cause
/// unbounded recursion.
#[cfg(feature = "data")]
pub const MAX_CATEGORY_DEPTH: i32 = 32;
