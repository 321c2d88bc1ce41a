//! Lumen Gate-to-Optics Compilation Framework
//!
//! This crate lowers abstract quantum gates (Rx, Ry, CNOT over an N-qubit
//! register) to concrete linear-optical hardware: wave plates, beam
//! splitters, phase plates, polarizing beam splitters and path swaps,
//! placed on a network of polarization plus binary spatial path labels.
//!
//! # Overview
//!
//! Compilation has two layers on top of the `lumen-ir` path-space
//! enumerator:
//!
//! 1. **Gate compiler** ([`compile_gate`]): a pure function from one gate
//!    to its ordered optical element sequence, dispatching on the physical
//!    role (polarization or path bit) each operand occupies under the
//!    circuit's encoding.
//! 2. **Circuit container** ([`OpticalCircuit`]): accumulates lowered
//!    gates with stage (time-step) bookkeeping and supports algebraic
//!    composition of whole circuits.
//!
//! # Example: Sequential Build and Composition
//!
//! ```rust
//! use lumen_compile::OpticalCircuit;
//! use lumen_ir::Qubit;
//!
//! // Sequential build: one stage per gate.
//! let mut circuit = OpticalCircuit::new(4)?;
//! circuit.cnot(Qubit(1), Qubit(3))?.rx(Qubit(2))?;
//! assert_eq!(circuit.depth(), 2);
//!
//! // Algebraic composition: b's stages start after a's.
//! let mut a = OpticalCircuit::new(4)?;
//! a.rx(Qubit(1))?;
//! let mut b = OpticalCircuit::new(4)?;
//! b.cnot(Qubit(1), Qubit(2))?;
//!
//! let combined = (&a * &b)?;
//! assert_eq!(combined.depth(), a.depth() + b.depth());
//! # Ok::<(), lumen_compile::CompileError>(())
//! ```
//!
//! # Gate Decompositions
//!
//! | Gate | Operand role | Elements |
//! |------|--------------|----------|
//! | `Rx` | polarization | `QWP(0), HWP(pi/8), QWP(0)` per path |
//! | `Ry` | polarization | `QWP(pi/4), HWP(3pi/8), QWP(pi/4)` per path |
//! | `Rx` | path bit | one `BS` per matched pair |
//! | `Ry` | path bit | `PhasePlate(-pi/2), BS(pi/2), PhasePlate(pi/2)` per pair |
//! | `CNOT` | pol → path | one `PBS` per matched pair |
//! | `CNOT` | path → path | one `PathSwap` per control-1/target-0 label |
//! | `CNOT` | path → pol | `HWP(pi/2)` per control-1 label |
//!
//! The plate angles are fixed reference decompositions, preserved exactly
//! as symbolic fractions of π; no re-derivation or re-optimization happens
//! here.

pub mod circuit;
pub mod compiler;
pub mod error;

pub use circuit::OpticalCircuit;
pub use compiler::compile_gate;
pub use error::{CompileError, CompileResult};
