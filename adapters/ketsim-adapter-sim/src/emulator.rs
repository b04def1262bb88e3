//! Kernel emulator implementation.

use ketsim_core::{Arity, MAX_QUBITS, Matrix, QubitId, StateVector};
use ketsim_hal::{Emulator, EmulatorInfo, EmulatorResult, check_targets};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

use crate::kernel;

/// Default state size from which amplitude loops go parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 14;

/// Threading settings for the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Allow rayon to split amplitude loops.
    pub parallel: bool,
    /// Minimum number of amplitudes before a loop is split.
    pub parallel_threshold: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl KernelConfig {
    /// Single-threaded settings.
    pub fn serial() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len >= self.parallel_threshold
    }
}

/// State-vector emulator built on bit-indexed amplitude recombination.
///
/// Each gate reads the input state and writes a freshly allocated output, so
/// the input is never modified and a failed call leaves nothing half-done.
pub struct KernelEmulator {
    config: KernelConfig,
    info: EmulatorInfo,
}

impl KernelEmulator {
    /// Create a kernel emulator with default settings.
    pub fn new() -> Self {
        Self::with_config(KernelConfig::default())
    }

    /// Create a kernel emulator with custom threading settings.
    pub fn with_config(config: KernelConfig) -> Self {
        Self {
            info: EmulatorInfo::new("kernel", MAX_QUBITS).with_parallel(config.parallel),
            config,
        }
    }

    /// Threading settings in use.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }
}

impl Default for KernelEmulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Emulator for KernelEmulator {
    fn name(&self) -> &str {
        &self.info.name
    }

    fn info(&self) -> &EmulatorInfo {
        &self.info
    }

    #[instrument(level = "trace", skip(self, matrix, state), fields(num_qubits = state.num_qubits()))]
    fn apply_matrix(
        &self,
        matrix: &Matrix,
        targets: &[QubitId],
        state: &StateVector,
    ) -> EmulatorResult<StateVector> {
        let arity = check_targets(matrix, targets, state.num_qubits())?;
        let parallel = self.config.use_parallel(state.len());
        trace!(%arity, parallel, "applying gate");

        let amplitudes = match arity {
            Arity::One => kernel::apply_one_qubit(matrix, targets[0], state.amplitudes(), parallel),
            Arity::Two => kernel::apply_two_qubit(
                matrix,
                [targets[0], targets[1]],
                state.amplitudes(),
                parallel,
            ),
        };
        Ok(StateVector::from_amplitudes(amplitudes)?)
    }
}
