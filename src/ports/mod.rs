//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interface the HTTP harness requires from a
//! single-operation service. A service plugs in by implementing
//! `Computation`; the harness supplies routing, metrics, and tracing
//! around it.

pub mod computation;

pub use computation::Computation;
