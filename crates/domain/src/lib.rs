//! # restdeck-domain
//!
//! Pure domain model for restdeck — wellness-break actions for a button/dial
//! macro surface.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Steps** (notify the user, wait, broadcast a feedback event)
//! - Define **Sequences** (the fixed ordered script an action executes)
//! - Define **Device events** (named, payload-less feedback signals)
//! - Define **Run state** (the per-action Idle/Running guard)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod event;
pub mod run_state;
pub mod sequence;
