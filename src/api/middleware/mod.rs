//! API middleware stack.
//!
//! Execution order (outermost → innermost):
//! 1. Caller check: rejects requests without a forwarded identity
//! 2. Audit logger: logs after the caller check, has the fingerprint

pub mod audit;
pub mod auth;
