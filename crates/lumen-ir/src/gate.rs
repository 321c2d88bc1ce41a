//! Abstract gate operands and the supported gate set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A 1-based qubit operand.
///
/// Operand numbering starts at 1 because qubit 1 is the distinguished
/// polarization qubit under the `pol_path` encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Qubit(pub usize);

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<usize> for Qubit {
    fn from(index: usize) -> Self {
        Qubit(index)
    }
}

/// A gate the compiler can lower to optical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Rotation around the X axis on one qubit.
    Rx(Qubit),
    /// Rotation around the Y axis on one qubit.
    Ry(Qubit),
    /// Controlled-NOT with distinct control and target.
    Cnot {
        /// The control qubit.
        control: Qubit,
        /// The target qubit.
        target: Qubit,
    },
}

impl Gate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::Rx(_) => "Rx",
            Gate::Ry(_) => "Ry",
            Gate::Cnot { .. } => "CNOT",
        }
    }

    /// Number of qubit operands this gate takes.
    #[inline]
    pub fn num_operands(&self) -> u32 {
        match self {
            Gate::Rx(_) | Gate::Ry(_) => 1,
            Gate::Cnot { .. } => 2,
        }
    }

    /// The operands of this gate, control first for CNOT.
    pub fn operands(&self) -> Vec<Qubit> {
        match self {
            Gate::Rx(q) | Gate::Ry(q) => vec![*q],
            Gate::Cnot { control, target } => vec![*control, *target],
        }
    }

    /// Build a gate from its string name and 1-based operands.
    ///
    /// This is the stringly-typed construction surface; names are matched
    /// case-insensitively. Unknown names fail with [`IrError::UnknownGate`],
    /// wrong operand counts with [`IrError::OperandCountMismatch`].
    pub fn from_name(name: &str, operands: &[usize]) -> IrResult<Gate> {
        let expect = |expected: u32| -> IrResult<()> {
            let got = u32::try_from(operands.len()).unwrap_or(u32::MAX);
            if got == expected {
                Ok(())
            } else {
                Err(IrError::OperandCountMismatch {
                    gate: name.to_string(),
                    expected,
                    got,
                })
            }
        };

        if name.eq_ignore_ascii_case("rx") {
            expect(1)?;
            Ok(Gate::Rx(Qubit(operands[0])))
        } else if name.eq_ignore_ascii_case("ry") {
            expect(1)?;
            Ok(Gate::Ry(Qubit(operands[0])))
        } else if name.eq_ignore_ascii_case("cnot") {
            expect(2)?;
            Ok(Gate::Cnot {
                control: Qubit(operands[0]),
                target: Qubit(operands[1]),
            })
        } else {
            Err(IrError::UnknownGate(name.to_string()))
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gate::Rx(q) => write!(f, "Rx({q})"),
            Gate::Ry(q) => write!(f, "Ry({q})"),
            Gate::Cnot { control, target } => write!(f, "CNOT({control}, {target})"),
        }
    }
}
