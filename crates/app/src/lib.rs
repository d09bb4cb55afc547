//! # restdeck-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Notifier` — best-effort transient user notifications
//!   - `EventPublisher` — fire-and-forget device-feedback events
//!   - `Timer` — cancellable, non-blocking delays
//! - Define **driving/inbound ports** as use-case structs:
//!   - `SequenceRunner` — execute a scripted sequence step by step
//!   - `ActionRegistry` — own the action instances, dispatch triggers and
//!     display-name queries from the host
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//! - Orchestrate domain objects without knowing *how* notifications or device
//!   feedback are delivered
//!
//! ## Dependency rule
//! Depends on `restdeck-domain` only (plus `tokio::sync`/`tokio::time` for
//! channels and sleeps). Never imports adapter crates. Adapters depend on
//! *this* crate, not the reverse.

pub mod actions;
pub mod event_bus;
pub mod ports;
pub mod runner;
pub mod timer;

#[cfg(test)]
mod testing;
