#[cfg(feature = "server")]
pub mod config;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod state;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod title_search;
