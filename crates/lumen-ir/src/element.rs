//! Optical hardware element types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::angle::PiFraction;
use crate::path::PathLabel;

/// The hardware kind of a placed element, carrying exactly the parameters
/// that kind admits.
///
/// Wave plates always have a physical rotation angle; a beam splitter may
/// carry an interferometric phase; polarizing beam splitters and path
/// swaps are parameterless.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Half-wave plate at a fixed physical angle.
    HalfWavePlate {
        /// Physical plate angle.
        angle: PiFraction,
    },
    /// Quarter-wave plate at a fixed physical angle.
    QuarterWavePlate {
        /// Physical plate angle.
        angle: PiFraction,
    },
    /// 50:50 beam splitter, optionally with an interferometric phase.
    BeamSplitter {
        /// Phase imprinted on the reflected arm, if any.
        phase: Option<PiFraction>,
    },
    /// Phase plate applying a fixed phase to one path.
    PhasePlate {
        /// The applied phase.
        phi: PiFraction,
    },
    /// Polarizing beam splitter.
    PolarizingBeamSplitter,
    /// Amplitude exchange between two paths differing in one bit.
    PathSwap,
}

impl ElementKind {
    /// Short hardware mnemonic for this kind.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::HalfWavePlate { .. } => "HWP",
            ElementKind::QuarterWavePlate { .. } => "QWP",
            ElementKind::BeamSplitter { .. } => "BS",
            ElementKind::PhasePlate { .. } => "PhasePlate",
            ElementKind::PolarizingBeamSplitter => "PBS",
            ElementKind::PathSwap => "PathSwap",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::HalfWavePlate { angle } => write!(f, "HWP({angle})"),
            ElementKind::QuarterWavePlate { angle } => write!(f, "QWP({angle})"),
            ElementKind::BeamSplitter { phase: None } => write!(f, "BS"),
            ElementKind::BeamSplitter { phase: Some(phi) } => write!(f, "BS(phi={phi})"),
            ElementKind::PhasePlate { phi } => write!(f, "PhasePlate(phi={phi})"),
            ElementKind::PolarizingBeamSplitter => write!(f, "PBS"),
            ElementKind::PathSwap => write!(f, "PathSwap"),
        }
    }
}

/// Where an element sits on the network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// A single path, by label.
    Path(PathLabel),
    /// A pair of paths acted on jointly.
    Pair(PathLabel, PathLabel),
    /// A single path, by enumeration index. Used by polarization-qubit
    /// rotations, which repeat the same plate on every parallel path.
    Index(usize),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(label) => write!(f, "|{label}>"),
            Location::Pair(a, b) => write!(f, "(|{a}>, |{b}>)"),
            Location::Index(p) => write!(f, "path_{p}"),
        }
    }
}

/// A placed hardware component.
///
/// Elements are created by the gate compiler with `stage = 0`; the owning
/// circuit stamps the real stage once at insertion. Elements sharing a
/// stage are logically simultaneous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpticalElement {
    /// The hardware kind, with its parameters.
    pub kind: ElementKind,
    /// Where the element sits.
    pub location: Location,
    /// The time step this element is applied at.
    pub stage: usize,
}

impl OpticalElement {
    /// Create an element with the stage left at 0.
    pub fn new(kind: ElementKind, location: Location) -> Self {
        Self {
            kind,
            location,
            stage: 0,
        }
    }

    /// A copy of this element stamped with `stage`.
    #[must_use]
    pub fn at_stage(&self, stage: usize) -> Self {
        Self {
            kind: self.kind.clone(),
            location: self.location.clone(),
            stage,
        }
    }
}

impl fmt::Display for OpticalElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16} @ {}", self.kind.to_string(), self.location)
    }
}
