//! # pushlight-domain
//!
//! Pure domain model for the pushlight notification-to-light bridge.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define the **alert configuration** (group, hour window, debounce, override file, colour)
//! - Define **notification events** as received from the push stream
//! - Define the **gate** (dismissal, hour window and debounce pre-check, override parsing)
//! - Define **light commands** and the **sequence builder** producing the flash pattern
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod config;
pub mod gate;
pub mod light;
pub mod notification;
pub mod sequence;
