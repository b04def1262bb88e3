//! Run command implementation.

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::info;

use ketsim_adapter_sim::KernelConfig;
use ketsim_circuit::CircuitSpec;
use ketsim_core::StateVector;
use ketsim_hal::check_width;

use super::common::{EmulatorKind, build_circuit, build_emulator, print_state};

/// Execute the run command.
pub fn execute(
    spec: CircuitSpec,
    kernel: KernelConfig,
    emulator: EmulatorKind,
    top: usize,
) -> Result<()> {
    let emu = build_emulator(emulator, kernel);
    println!(
        "{} Running {} qubits × {} gates on {}",
        style("→").cyan().bold(),
        style(spec.width).green(),
        spec.depth,
        style(emu.name()).yellow()
    );

    let circuit = build_circuit(spec)?;
    println!(
        "  Generated: {} layers, {} two-qubit gates",
        circuit.num_layers(),
        circuit.num_two_qubit_gates()
    );

    let mut state = StateVector::new(circuit.width() as usize)
        .context("Failed to allocate initial state")?;
    check_width(&circuit, &state)?;

    let progress = ProgressBar::new(circuit.gates().len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} gates")?
            .progress_chars("=> "),
    );

    let start = Instant::now();
    for (index, op) in circuit.gates().iter().enumerate() {
        state = emu
            .apply_gate(op, &state)
            .with_context(|| format!("Gate {index} ({op}) failed"))?;
        progress.inc(1);
    }
    progress.finish_and_clear();
    let elapsed = start.elapsed();
    info!(?elapsed, "circuit applied");

    print_state(&state, top);
    println!(
        "  Execution time: {} ms",
        style(elapsed.as_millis()).yellow()
    );

    Ok(())
}
