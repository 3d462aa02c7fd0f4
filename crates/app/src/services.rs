//! Application services — use-cases built on top of the ports.

pub mod alert_service;
pub mod gate_evaluator;
