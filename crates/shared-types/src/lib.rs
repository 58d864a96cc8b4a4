//! # Shared Types Crate
//!
//! This crate contains the primitive units, the `Validator` record, and the
//! block-level operation payloads shared across subsystems.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-subsystem types are defined here.
//! - **Consensus units only**: quantities are plain `u64` aliases (`Epoch`,
//!   `Gwei`, `ValidatorIndex`) so arithmetic matches the protocol definitions
//!   exactly, with no hidden conversions.
//! - **Serde everywhere**: every persisted entity derives `Serialize` /
//!   `Deserialize`; the wire and storage encodings are owned by the
//!   serialization subsystem, not by this crate.

pub mod entities;

pub use entities::*;
