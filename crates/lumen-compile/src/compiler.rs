//! Lowering of abstract gates to optical element sequences.
//!
//! [`compile_gate`] is a pure function of its inputs: it allocates and
//! returns a fresh element list with every stage left at 0, and never
//! touches shared state. Stage assignment belongs to the owning circuit.

use lumen_ir::{
    ElementKind, Encoding, Gate, Location, OpticalElement, PiFraction, Qubit, all_bitstrings,
    labels_with_bit, pairs_at_bit,
};
use tracing::debug;

use crate::error::{CompileError, CompileResult};

/// The physical degree of freedom a qubit operand occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    /// The distinguished polarization qubit, carried across all paths.
    Polarization,
    /// One bit of the path label.
    Path {
        /// Bit position within the label.
        idx: usize,
    },
}

fn role_of(encoding: Encoding, qubit: Qubit) -> Role {
    match encoding {
        Encoding::PolPath if qubit.0 == 1 => Role::Polarization,
        Encoding::PolPath => Role::Path { idx: qubit.0 - 2 },
        Encoding::PathOnly => Role::Path { idx: qubit.0 - 1 },
    }
}

/// Compile one gate into its optical element sequence.
///
/// All returned elements are logically simultaneous and carry `stage = 0`;
/// the circuit container stamps them with a real stage at insertion. The
/// emission order follows the deterministic path enumeration order, which
/// downstream consumers rely on.
///
/// # Errors
///
/// - [`CompileError::TooFewQubits`] for registers below 2 qubits
/// - [`CompileError::OperandOutOfRange`] for operands outside `[1, N]`
/// - [`CompileError::DuplicateOperand`] when a CNOT's control equals its target
/// - [`CompileError::UnsupportedCnot`] for operand combinations with no
///   optical decomposition
pub fn compile_gate(
    gate: &Gate,
    num_qubits: usize,
    encoding: Encoding,
) -> CompileResult<Vec<OpticalElement>> {
    if num_qubits < 2 {
        return Err(CompileError::TooFewQubits { got: num_qubits });
    }
    validate_operands(gate, num_qubits)?;

    let n_bits = encoding.label_len(num_qubits);
    let elements = match gate {
        Gate::Rx(q) => match role_of(encoding, *q) {
            Role::Polarization => polarization_sandwich(
                num_qubits,
                PiFraction::zero(),
                PiFraction::new(1, 8),
            ),
            Role::Path { idx } => path_rx(n_bits, idx),
        },
        Gate::Ry(q) => match role_of(encoding, *q) {
            Role::Polarization => polarization_sandwich(
                num_qubits,
                PiFraction::new(1, 4),
                PiFraction::new(3, 8),
            ),
            Role::Path { idx } => path_ry(n_bits, idx),
        },
        Gate::Cnot { control, target } => {
            match (role_of(encoding, *control), role_of(encoding, *target)) {
                (Role::Polarization, Role::Path { idx }) => pol_controlled_flip(n_bits, idx),
                (Role::Path { idx: c_idx }, Role::Path { idx: t_idx }) => {
                    path_controlled_flip(n_bits, c_idx, t_idx)
                }
                (Role::Path { idx }, Role::Polarization) => {
                    path_controlled_pol_flip(n_bits, idx)
                }
                (Role::Polarization, Role::Polarization) => {
                    return Err(CompileError::UnsupportedCnot {
                        control: *control,
                        target: *target,
                    });
                }
            }
        }
    };

    debug!(
        gate = gate.name(),
        num_qubits,
        encoding = %encoding,
        elements = elements.len(),
        "lowered gate to optical elements"
    );
    Ok(elements)
}

fn validate_operands(gate: &Gate, num_qubits: usize) -> CompileResult<()> {
    for qubit in gate.operands() {
        if qubit.0 < 1 || qubit.0 > num_qubits {
            return Err(CompileError::OperandOutOfRange { qubit, num_qubits });
        }
    }
    if let Gate::Cnot { control, target } = gate {
        if control == target {
            return Err(CompileError::DuplicateOperand { qubit: *control });
        }
    }
    Ok(())
}

/// QWP / HWP / QWP triple repeated on every parallel path.
///
/// The polarization state is carried across all `2^(N-1)` paths, so the
/// rotation has to be applied identically and redundantly on each of them.
/// The plate angles are fixed reference decompositions: Rx uses
/// `QWP(0), HWP(pi/8), QWP(0)`, Ry uses `QWP(pi/4), HWP(3pi/8), QWP(pi/4)`.
fn polarization_sandwich(
    num_qubits: usize,
    outer: PiFraction,
    inner: PiFraction,
) -> Vec<OpticalElement> {
    let n_paths = 1usize << (num_qubits - 1);
    let mut elements = Vec::with_capacity(3 * n_paths);
    for p in 0..n_paths {
        elements.push(OpticalElement::new(
            ElementKind::QuarterWavePlate { angle: outer },
            Location::Index(p),
        ));
        elements.push(OpticalElement::new(
            ElementKind::HalfWavePlate { angle: inner },
            Location::Index(p),
        ));
        elements.push(OpticalElement::new(
            ElementKind::QuarterWavePlate { angle: outer },
            Location::Index(p),
        ));
    }
    elements
}

/// Rx on a path bit: one beam splitter across each matched pair.
fn path_rx(n_bits: usize, idx: usize) -> Vec<OpticalElement> {
    pairs_at_bit(n_bits, idx)
        .into_iter()
        .map(|(zero, one)| {
            OpticalElement::new(
                ElementKind::BeamSplitter { phase: None },
                Location::Pair(zero, one),
            )
        })
        .collect()
}

/// Ry on a path bit: phase-advance, interfere, phase-compensate per pair.
///
/// The -pi/2 plate on the 0-member turns the beam splitter's Rx-like
/// action into a Y rotation; the +pi/2 plate undoes the frame change.
fn path_ry(n_bits: usize, idx: usize) -> Vec<OpticalElement> {
    let pairs = pairs_at_bit(n_bits, idx);
    let mut elements = Vec::with_capacity(3 * pairs.len());
    for (zero, one) in pairs {
        elements.push(OpticalElement::new(
            ElementKind::PhasePlate {
                phi: PiFraction::new(-1, 2),
            },
            Location::Path(zero.clone()),
        ));
        elements.push(OpticalElement::new(
            ElementKind::BeamSplitter {
                phase: Some(PiFraction::new(1, 2)),
            },
            Location::Pair(zero.clone(), one),
        ));
        elements.push(OpticalElement::new(
            ElementKind::PhasePlate {
                phi: PiFraction::new(1, 2),
            },
            Location::Path(zero),
        ));
    }
    elements
}

/// Polarization-controlled path flip: one PBS across each matched pair of
/// the target's bit.
fn pol_controlled_flip(n_bits: usize, target_idx: usize) -> Vec<OpticalElement> {
    pairs_at_bit(n_bits, target_idx)
        .into_iter()
        .map(|(zero, one)| {
            OpticalElement::new(ElementKind::PolarizingBeamSplitter, Location::Pair(zero, one))
        })
        .collect()
}

/// Path-controlled path flip: swap amplitude out of every label with
/// control bit 1 and target bit 0 into the label with the target bit set.
fn path_controlled_flip(n_bits: usize, c_idx: usize, t_idx: usize) -> Vec<OpticalElement> {
    all_bitstrings(n_bits)
        .into_iter()
        .filter(|label| label.bit(c_idx) == 1 && label.bit(t_idx) == 0)
        .map(|label| {
            let swapped = label.with_bit(t_idx, 1);
            OpticalElement::new(ElementKind::PathSwap, Location::Pair(label, swapped))
        })
        .collect()
}

/// Path-controlled polarization flip: a fixed HWP(pi/2) on every path
/// whose control bit is 1, converting path information into a
/// polarization flip.
fn path_controlled_pol_flip(n_bits: usize, c_idx: usize) -> Vec<OpticalElement> {
    labels_with_bit(n_bits, c_idx, 1)
        .into_iter()
        .map(|label| {
            OpticalElement::new(
                ElementKind::HalfWavePlate {
                    angle: PiFraction::new(1, 2),
                },
                Location::Path(label),
            )
        })
        .collect()
}
