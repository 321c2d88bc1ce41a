//! Lumen Linear-Optical Hardware Intermediate Representation
//!
//! This crate provides the core data structures for describing linear-optical
//! hardware layouts in Lumen. It forms the foundation of the gate-to-optics
//! compilation stack.
//!
//! # Overview
//!
//! A compiled circuit is a flat, stage-ordered list of placed hardware
//! components — wave plates, beam splitters, phase plates, polarizing beam
//! splitters and path swaps — addressed on a network whose wires combine one
//! polarization degree of freedom with binary spatial path labels.
//!
//! # Core Components
//!
//! - **Path labels**: [`PathLabel`] plus the enumeration functions
//!   [`all_bitstrings`], [`pairs_at_bit`] and [`labels_with_bit`] that drive
//!   every gate lowering
//! - **Angles**: [`PiFraction`] for exact symbolic fractions of π
//! - **Elements**: [`OpticalElement`] with its closed [`ElementKind`] and
//!   [`Location`] variants
//! - **Encodings**: [`Encoding`] selecting how qubits map to polarization
//!   and path bits
//! - **Gates**: [`Gate`] and [`Qubit`] operands consumed by the compiler
//!
//! # Example: Enumerating the Path Space
//!
//! ```rust
//! use lumen_ir::{all_bitstrings, pairs_at_bit};
//!
//! // Four paths, addressed by 2-bit labels in a fixed order.
//! let labels = all_bitstrings(2);
//! assert_eq!(labels.len(), 4);
//! assert_eq!(labels[0].to_string(), "00");
//!
//! // Perfect matching of the labels across bit 0: every label appears in
//! // exactly one pair, partitioned by the bit value.
//! let pairs = pairs_at_bit(2, 0);
//! assert_eq!(pairs.len(), 2);
//! assert_eq!(pairs[0].0.to_string(), "00");
//! assert_eq!(pairs[0].1.to_string(), "10");
//! ```
//!
//! # Supported Elements
//!
//! | Element | Parameters | Location |
//! |---------|------------|----------|
//! | `HWP` | plate angle | single path |
//! | `QWP` | plate angle | single path |
//! | `BS` | optional phase | path pair |
//! | `PhasePlate` | phase | single path |
//! | `PBS` | — | path pair |
//! | `PathSwap` | — | path pair |

pub mod angle;
pub mod element;
pub mod encoding;
pub mod error;
pub mod gate;
pub mod path;

pub use angle::PiFraction;
pub use element::{ElementKind, Location, OpticalElement};
pub use encoding::Encoding;
pub use error::{IrError, IrResult};
pub use gate::{Gate, Qubit};
pub use path::{
    PathLabel, all_bitstrings, labels_with_bit, paired_paths_for_qubit, pairs_at_bit,
    paths_with_bit,
};
