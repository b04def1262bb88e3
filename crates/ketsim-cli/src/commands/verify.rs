//! Verify command implementation.

use anyhow::{Context, Result};
use console::style;

use ketsim_adapter_dense::DenseEmulator;
use ketsim_adapter_sim::{KernelConfig, KernelEmulator};
use ketsim_circuit::CircuitSpec;
use ketsim_core::StateVector;
use ketsim_hal::Emulator;

use super::common::{build_circuit, max_deviation};

/// Execute the verify command.
///
/// Runs the same circuit through the kernel and the dense reference and fails
/// when any amplitude differs by more than `tolerance`.
pub fn execute(spec: CircuitSpec, kernel: KernelConfig, tolerance: f64) -> Result<()> {
    let circuit = build_circuit(spec)?;
    let state = StateVector::new(circuit.width() as usize)
        .context("Failed to allocate initial state")?;

    let kernel = KernelEmulator::with_config(kernel);
    let dense = DenseEmulator::new();

    println!(
        "{} Verifying {} against {} ({} qubits, {} gates)",
        style("→").cyan().bold(),
        style(kernel.name()).green(),
        style(dense.name()).yellow(),
        circuit.width(),
        circuit.gates().len()
    );

    let fast = kernel
        .apply_circuit(&circuit, &state)
        .context("Kernel emulation failed")?;
    let reference = dense
        .apply_circuit(&circuit, &state)
        .context("Dense emulation failed")?;

    let deviation = max_deviation(&fast, &reference);
    if deviation > tolerance {
        anyhow::bail!("Maximum amplitude deviation {deviation:.3e} exceeds tolerance {tolerance:.3e}");
    }

    println!(
        "{} Maximum amplitude deviation: {} (tolerance {:.3e})",
        style("✓").green().bold(),
        style(format!("{deviation:.3e}")).cyan(),
        tolerance
    );
    Ok(())
}
