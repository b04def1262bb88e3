//! Emulator capability introspection.

use serde::{Deserialize, Serialize};

/// What an emulator can do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorInfo {
    /// Name of the emulator.
    pub name: String,
    /// Largest state the emulator accepts.
    pub max_qubits: usize,
    /// Whether amplitude loops may run on several threads.
    pub parallel: bool,
    /// Whether this is a slow reference implementation meant for
    /// cross-checking rather than production runs.
    pub is_reference: bool,
}

impl EmulatorInfo {
    /// Info for a production emulator.
    pub fn new(name: impl Into<String>, max_qubits: usize) -> Self {
        Self {
            name: name.into(),
            max_qubits,
            parallel: false,
            is_reference: false,
        }
    }

    /// Mark the emulator as multi-threaded.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Mark the emulator as a reference oracle.
    #[must_use]
    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let info = EmulatorInfo::new("dense", 12).reference();
        assert!(info.is_reference);
        assert!(!info.parallel);

        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["max_qubits"], 12);
        let back: EmulatorInfo = serde_json::from_value(json).unwrap();
        assert_eq!(back, info);
    }
}
