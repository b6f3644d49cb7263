//! Instrumented Single-Operation Services — Library Root
//!
//! A shared harness for HTTP microservices that expose exactly one
//! computation plus health and Prometheus metrics endpoints. The
//! `hash-service` and `length-service` binaries are thin wirings of
//! this harness around their respective `Computation` plugins.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;
pub mod usecases;
