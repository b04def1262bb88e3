//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - dense state-vector emulation of random circuits",
        style("ketsim").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  ketsim-core           State vectors and quantum operations");
    println!("  ketsim-circuit        Seeded random unitaries and layered circuits");
    println!("  ketsim-hal            Emulator abstraction layer");
    println!("  ketsim-adapter-sim    Bit-indexed state-vector kernel");
    println!("  ketsim-adapter-dense  Dense reference emulator");
    println!("  ketsim-cli            Command-line interface");
    println!();
    println!("License:    {}", style(env!("CARGO_PKG_LICENSE")).dim());
}
