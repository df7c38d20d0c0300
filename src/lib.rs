//! ASCII bounce (workspace facade crate).
//!
//! Re-exports the member crates as `ascii_bounce::{core, term, types}` so the
//! binary, the integration tests and the benches share one import path.

pub use ascii_bounce_core as core;
pub use ascii_bounce_term as term;
pub use ascii_bounce_types as types;
