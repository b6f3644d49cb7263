//! Domain layer - Pure text computations.
//!
//! Contains the computations the services expose over HTTP and the
//! error taxonomy for a single compute request. No I/O, no HTTP, no
//! observability types here (hexagonal architecture inner ring).

pub mod compute;
pub mod error;

pub use compute::{char_length, sha256_hex};
pub use error::ComputeError;
