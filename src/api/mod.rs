//! HTTP boundary for the symptom checker.
//!
//! The router exposes the check under `/api/`, maps every `CheckError` to a
//! status code and structured body, and runs core work off the async
//! executor.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use error::ApiError;
pub use router::api_router;
pub use server::{start_server_on, ServerHandle};
pub use types::{ApiContext, CallerContext};
