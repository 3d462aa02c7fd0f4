//! # pushlight-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `NotificationSource` — lifecycle and push events from the notification stream
//!   - `LightController` — ordered, paced light commands
//!   - `OverrideReader` — raw contents of the override file
//! - Define **use-cases**:
//!   - `GateEvaluator` — two-phase decision (synchronous pre-check, async override veto)
//!   - `AlertService` — gate a push, build its sequence, play it
//!   - `Bridge` — drive a notification source until it closes or fails
//!
//! ## Dependency rule
//! Depends on `pushlight-domain` only (plus `tokio` for tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod bridge;
pub mod ports;
pub mod services;
