//! Combat resolution
//!
//! The command transport is a single request/response exchange, so combat
//! resolves automatically round by round and returns a textual transcript
//! instead of prompting for an action each turn. Damage rolls come from a
//! caller-supplied RNG so fights are deterministic under a seeded generator.

pub mod resolution;

pub use resolution::{resolve_combat, CombatOutcome};
