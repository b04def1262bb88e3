//! Generate command implementation.

use anyhow::{Context, Result};
use clap::ValueEnum;
use console::style;

use ketsim_circuit::CircuitSpec;

use super::common::build_circuit;

/// Output format for generated circuits.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Layer table
    #[default]
    Table,
    /// Full circuit as JSON
    Json,
}

/// Execute the generate command.
pub fn execute(spec: CircuitSpec, format: OutputFormat) -> Result<()> {
    let circuit = build_circuit(spec)?;

    if format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&circuit).context("Failed to serialize circuit")?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "{} Generated circuit: {} qubits, {} gates, weight {}, seed {}",
        style("→").cyan().bold(),
        style(circuit.width()).green(),
        circuit.gates().len(),
        circuit.two_qubit_weight(),
        style(circuit.seed()).yellow()
    );
    println!(
        "  {} layers, {} two-qubit gates\n",
        circuit.num_layers(),
        circuit.num_two_qubit_gates()
    );

    println!("  {:>5}  {:>5}  {}", "layer", "gates", "qubits");
    for (index, layer) in circuit.layers().iter().enumerate() {
        let qubits: Vec<String> = layer.qubits().iter().map(ToString::to_string).collect();
        println!(
            "  {:>5}  {:>5}  {}",
            index,
            layer.len(),
            style(qubits.join(" ")).cyan()
        );
    }

    Ok(())
}
