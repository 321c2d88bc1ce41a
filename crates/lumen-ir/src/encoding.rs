//! Qubit-to-hardware encoding modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;

/// How the N-qubit register maps onto physical degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Qubit 1 lives in polarization, carried across all parallel paths;
    /// qubits 2..N are path-label bits. Labels have `N - 1` bits and
    /// qubit `k` owns bit `k - 2`.
    #[default]
    PolPath,
    /// Every qubit is a path-label bit. Labels have `N` bits and qubit
    /// `k` owns bit `k - 1`.
    PathOnly,
}

impl Encoding {
    /// Length of a path label for a register of `num_qubits` qubits.
    #[inline]
    pub fn label_len(self, num_qubits: usize) -> usize {
        match self {
            Encoding::PolPath => num_qubits - 1,
            Encoding::PathOnly => num_qubits,
        }
    }

    /// The canonical string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Encoding::PolPath => "pol_path",
            Encoding::PathOnly => "path_only",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pol_path" => Ok(Encoding::PolPath),
            "path_only" => Ok(Encoding::PathOnly),
            other => Err(IrError::InvalidEncoding(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_len() {
        assert_eq!(Encoding::PolPath.label_len(4), 3);
        assert_eq!(Encoding::PathOnly.label_len(4), 4);
    }

    #[test]
    fn test_parse() {
        assert_eq!("pol_path".parse::<Encoding>().unwrap(), Encoding::PolPath);
        assert_eq!("path_only".parse::<Encoding>().unwrap(), Encoding::PathOnly);

        let err = "dual_rail".parse::<Encoding>().unwrap_err();
        assert!(matches!(err, IrError::InvalidEncoding(ref s) if s == "dual_rail"));
    }

    #[test]
    fn test_default_is_pol_path() {
        assert_eq!(Encoding::default(), Encoding::PolPath);
    }
}
