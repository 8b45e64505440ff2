//! Reusable observers for the stationary solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the numeric solvers in `stationary-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//!
//! # Observers
//!
//! - [`LogObserver`] — logs every event through the `log` facade
//! - [`StopAtResidual`] — stops a solve once the residual is small enough
//! - [`SkipFailures`] — treats failed evaluations as worse instead of erroring
//!
//! [`Observer`]: stationary_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod log_observer;
mod steering;

pub use log_observer::LogObserver;
pub use steering::{SkipFailures, StopAtResidual};
