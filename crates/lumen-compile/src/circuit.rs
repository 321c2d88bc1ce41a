//! Stage-stamping circuit container.

use std::fmt;
use std::ops::Mul;

use lumen_ir::{Encoding, Gate, OpticalElement, Qubit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compiler::compile_gate;
use crate::error::{CompileError, CompileResult};

/// An accumulating, composable sequence of placed optical elements.
///
/// Gates are lowered with the circuit's own register size and encoding;
/// every element produced by one gate is stamped with the same stage, and
/// the stage counter advances by exactly 1 per gate regardless of how many
/// elements the gate compiled to. A failed application leaves the circuit
/// untouched.
///
/// A circuit is not safe for concurrent mutation; build independent
/// circuits and [`compose`] them instead, since composition only reads its
/// operands.
///
/// # Example
///
/// ```rust
/// use lumen_compile::OpticalCircuit;
/// use lumen_ir::Qubit;
///
/// let mut circuit = OpticalCircuit::new(4)?;
/// circuit.cnot(Qubit(1), Qubit(3))?.rx(Qubit(2))?;
///
/// assert_eq!(circuit.depth(), 2);
/// assert_eq!(circuit.elements().len(), 8); // 4 PBS + 4 BS
/// # Ok::<(), lumen_compile::CompileError>(())
/// ```
///
/// [`compose`]: OpticalCircuit::compose
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpticalCircuit {
    /// Size of the qubit register.
    num_qubits: usize,
    /// How qubits map to polarization and path bits.
    encoding: Encoding,
    /// Placed elements, in insertion order.
    elements: Vec<OpticalElement>,
    /// The next stage to allocate.
    stage: usize,
}

impl OpticalCircuit {
    /// Create an empty circuit under the default `pol_path` encoding.
    ///
    /// # Errors
    ///
    /// Fails with [`CompileError::TooFewQubits`] for registers below 2.
    pub fn new(num_qubits: usize) -> CompileResult<Self> {
        Self::with_encoding(num_qubits, Encoding::default())
    }

    /// Create an empty circuit with an explicit encoding.
    ///
    /// # Errors
    ///
    /// Fails with [`CompileError::TooFewQubits`] for registers below 2.
    pub fn with_encoding(num_qubits: usize, encoding: Encoding) -> CompileResult<Self> {
        if num_qubits < 2 {
            return Err(CompileError::TooFewQubits { got: num_qubits });
        }
        Ok(Self {
            num_qubits,
            encoding,
            elements: vec![],
            stage: 0,
        })
    }

    /// Lower a gate and append its elements at the current stage.
    ///
    /// On success the stage counter advances by exactly 1. On failure the
    /// element sequence and stage counter are unchanged.
    pub fn apply(&mut self, gate: &Gate) -> CompileResult<&mut Self> {
        let compiled = compile_gate(gate, self.num_qubits, self.encoding)?;
        self.elements
            .extend(compiled.iter().map(|e| e.at_stage(self.stage)));
        self.stage += 1;
        debug!(
            gate = gate.name(),
            stage = self.stage - 1,
            total = self.elements.len(),
            "applied gate"
        );
        Ok(self)
    }

    /// Apply an Rx rotation to `qubit`.
    pub fn rx(&mut self, qubit: Qubit) -> CompileResult<&mut Self> {
        self.apply(&Gate::Rx(qubit))
    }

    /// Apply an Ry rotation to `qubit`.
    pub fn ry(&mut self, qubit: Qubit) -> CompileResult<&mut Self> {
        self.apply(&Gate::Ry(qubit))
    }

    /// Apply a CNOT with the given control and target.
    pub fn cnot(&mut self, control: Qubit, target: Qubit) -> CompileResult<&mut Self> {
        self.apply(&Gate::Cnot { control, target })
    }

    /// Sequential composition: `self`'s elements followed by `other`'s,
    /// with `other`'s stages shifted to start after `self`'s last stage.
    ///
    /// Encodings need not match; the result inherits `self`'s
    /// configuration and its stage counter is the sum of both. Composition
    /// is associative in stage numbering but not commutative: physical
    /// gate order matters.
    ///
    /// # Errors
    ///
    /// Fails with [`CompileError::IncompatibleCircuits`] when the register
    /// sizes differ.
    pub fn compose(&self, other: &OpticalCircuit) -> CompileResult<OpticalCircuit> {
        if self.num_qubits != other.num_qubits {
            return Err(CompileError::IncompatibleCircuits {
                left: self.num_qubits,
                right: other.num_qubits,
            });
        }

        let mut elements =
            Vec::with_capacity(self.elements.len() + other.elements.len());
        elements.extend(self.elements.iter().cloned());
        elements.extend(
            other
                .elements
                .iter()
                .map(|e| e.at_stage(e.stage + self.stage)),
        );

        debug!(
            left_stages = self.stage,
            right_stages = other.stage,
            elements = elements.len(),
            "composed circuits"
        );
        Ok(OpticalCircuit {
            num_qubits: self.num_qubits,
            encoding: self.encoding,
            elements,
            stage: self.stage + other.stage,
        })
    }

    /// Size of the qubit register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The circuit's encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Number of stages allocated so far.
    pub fn depth(&self) -> usize {
        self.stage
    }

    /// The placed elements, in insertion order. This is the compiled
    /// artifact handed to downstream simulators or fabrication tools.
    pub fn elements(&self) -> &[OpticalElement] {
        &self.elements
    }

    /// Human-readable, stage-ordered listing of the circuit.
    ///
    /// Elements are sorted ascending by stage; insertion order is
    /// preserved within a stage.
    pub fn summary(&self) -> String {
        let mut ordered: Vec<&OpticalElement> = self.elements.iter().collect();
        ordered.sort_by_key(|e| e.stage);

        let mut out = format!(
            "Optical circuit: {} qubits, {} encoding, {} stages, {} elements\n",
            self.num_qubits,
            self.encoding,
            self.stage,
            self.elements.len(),
        );
        for element in ordered {
            out.push_str(&format!("  stage {:>3}  {element}\n", element.stage));
        }
        out
    }
}

impl fmt::Display for OpticalCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl Mul for &OpticalCircuit {
    type Output = CompileResult<OpticalCircuit>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(rhs)
    }
}
