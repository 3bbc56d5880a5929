//! End-to-end tests: requests go through the real axum router, with the ping
//! program swapped for an in-process fake where a deterministic outcome is
//! needed.
