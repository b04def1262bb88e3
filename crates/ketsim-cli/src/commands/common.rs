//! Shared helpers for CLI commands.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;

use ketsim_adapter_dense::DenseEmulator;
use ketsim_adapter_sim::{KernelConfig, KernelEmulator};
use ketsim_circuit::{CircuitGenerator, CircuitSpec, QuantumCircuit};
use ketsim_core::StateVector;
use ketsim_hal::Emulator;

/// Circuit flags shared by every command that generates a circuit.
#[derive(Args, Debug, Clone, Default)]
pub struct CircuitArgs {
    /// Number of qubits
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Number of gates
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Probability of a two-qubit gate (0..=1)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Seed of the random source
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl CircuitArgs {
    /// Override `spec` with every flag that was given.
    pub fn apply(&self, spec: CircuitSpec) -> CircuitSpec {
        CircuitSpec {
            width: self.width.unwrap_or(spec.width),
            depth: self.depth.unwrap_or(spec.depth),
            two_qubit_weight: self.weight.unwrap_or(spec.two_qubit_weight),
            seed: self.seed.unwrap_or(spec.seed),
        }
    }
}

/// Emulator selection.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmulatorKind {
    /// Bit-indexed kernel
    #[default]
    Kernel,
    /// Dense reference operators
    Dense,
}

/// Build the selected emulator.
pub fn build_emulator(kind: EmulatorKind, kernel: KernelConfig) -> Box<dyn Emulator> {
    match kind {
        EmulatorKind::Kernel => Box::new(KernelEmulator::with_config(kernel)),
        EmulatorKind::Dense => Box::new(DenseEmulator::new()),
    }
}

/// Generate the circuit described by `spec`.
pub fn build_circuit(spec: CircuitSpec) -> Result<QuantumCircuit> {
    CircuitGenerator::new(spec)
        .and_then(CircuitGenerator::generate)
        .with_context(|| {
            format!(
                "Failed to generate circuit (width {}, depth {}, weight {})",
                spec.width, spec.depth, spec.two_qubit_weight
            )
        })
}

/// Largest amplitude-wise distance between two states of equal size.
pub fn max_deviation(a: &StateVector, b: &StateVector) -> f64 {
    a.amplitudes()
        .iter()
        .zip(b.amplitudes())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Indices of the `top` most probable basis states, most probable first.
pub fn most_probable(state: &StateVector, top: usize) -> Vec<(usize, f64)> {
    let mut probs: Vec<(usize, f64)> = state.probabilities().into_iter().enumerate().collect();
    probs.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    probs.truncate(top);
    probs
}

/// Print the most probable basis states.
pub fn print_state(state: &StateVector, top: usize) {
    let norm = state.norm_sqr();
    let shown = most_probable(state, top);

    println!(
        "\n{} Final state ({} qubits, {} amplitudes):",
        style("✓").green().bold(),
        state.num_qubits(),
        state.len()
    );

    for (index, prob) in &shown {
        let amp = state[*index];
        let bar_len = (prob / norm * 50.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>+.6}{:+.6}i ({:>6.2}%) {}",
            style(state.basis_label(*index)).cyan(),
            amp.re,
            amp.im,
            prob / norm * 100.0,
            style(bar).green()
        );
    }

    if state.len() > shown.len() {
        println!("  ... and {} more basis states", state.len() - shown.len());
    }

    println!("\n  Squared norm: {}", style(format!("{norm:.12}")).yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circuit_args_override() {
        let args = CircuitArgs {
            width: Some(7),
            seed: Some(1),
            ..CircuitArgs::default()
        };
        let spec = args.apply(CircuitSpec::default());
        assert_eq!(spec.width, 7);
        assert_eq!(spec.seed, 1);
        assert_eq!(spec.depth, CircuitSpec::default().depth);
    }

    #[test]
    fn test_most_probable_order() {
        let state = StateVector::from_real(&[0.1, 0.7, 0.7, 0.1]).unwrap();
        let top = most_probable(&state, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0, 1);
        assert_eq!(top[1].0, 2);
        assert_eq!(top[2].0, 0);
    }

    #[test]
    fn test_build_circuit_invalid() {
        let spec = CircuitSpec {
            width: 0,
            ..CircuitSpec::default()
        };
        assert!(build_circuit(spec).is_err());
    }

    #[test]
    fn test_build_emulator_names() {
        assert_eq!(
            build_emulator(EmulatorKind::Kernel, KernelConfig::default()).name(),
            "kernel"
        );
        assert_eq!(
            build_emulator(EmulatorKind::Dense, KernelConfig::default()).name(),
            "dense"
        );
    }
}
