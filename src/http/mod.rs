//! HTTP surface for the reading engine.
//!
//! Thin axum layer over [`ReadingEngine`](crate::core::reading::ReadingEngine):
//! handlers parse JSON, delegate to the engine and map [`OracleError`]
//! categories onto status codes.
//!
//! [`OracleError`]: crate::utils::error::OracleError

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
