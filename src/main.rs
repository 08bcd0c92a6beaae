//! Kresling Sim - diagnostics entry point
//!
//! Computes stability diagnostics for a single unit without any GUI.
//!
//! CLI Usage:
//!   cargo run                          # Diagnostics for the default unit
//!   cargo run -- -b 1.0371 -a 0.4715 -c 1.0 --beta 1.5130
//!   cargo run -- --landscape --steps 20 --h-max 4.0
//!   cargo run -- --export-csv          # Write the layer table to exports/

use anyhow::{Context, Result};
use kresling_sim::{
    config::Parameters,
    export::export_layer_table_timestamped,
    geometry::KreslingUnit,
    stack::LayerRecord,
};

struct CliOptions {
    landscape: bool,
    export_csv: bool,
    steps: Option<usize>,
    h_max: Option<f64>,
    overrides: Vec<(char, f64)>,
    n_override: Option<u32>,
}

/// Parse CLI arguments
fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        landscape: false,
        export_csv: false,
        steps: None,
        h_max: None,
        overrides: Vec::new(),
        n_override: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--landscape" | "-l" => options.landscape = true,
            "--export-csv" | "-e" => options.export_csv = true,
            "--steps" => {
                i += 1;
                if i < args.len() {
                    options.steps = args[i].parse().ok();
                }
            }
            "--h-max" => {
                i += 1;
                if i < args.len() {
                    options.h_max = args[i].parse().ok();
                }
            }
            "-n" => {
                i += 1;
                if i < args.len() {
                    options.n_override = args[i].parse().ok();
                }
            }
            "-a" | "-b" | "-c" => {
                let which = args[i].chars().nth(1).unwrap_or('a');
                i += 1;
                if i < args.len() {
                    if let Ok(value) = args[i].parse() {
                        options.overrides.push((which, value));
                    }
                }
            }
            "--beta" => {
                i += 1;
                if i < args.len() {
                    if let Ok(value) = args[i].parse() {
                        options.overrides.push(('B', value));
                    }
                }
            }
            "--ea" => {
                i += 1;
                if i < args.len() {
                    if let Ok(value) = args[i].parse() {
                        options.overrides.push(('E', value));
                    }
                }
            }
            "--help" | "-h" => {
                println!("Kresling Sim");
                println!();
                println!("Usage: kresling-sim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -n N               Cell count (default: 6)");
                println!("  -a X               Top edge length");
                println!("  -b X               Bottom edge length");
                println!("  -c X               Mountain-crease length");
                println!("  --beta X           Crease angle in radians");
                println!("  --ea X             Axial stiffness");
                println!("  --landscape, -l    Print the energy landscape table");
                println!("  --steps N          Landscape height intervals (default: 100)");
                println!("  --h-max X          Landscape height range upper bound (default: 4)");
                println!("  --export-csv, -e   Write the layer table to exports/");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args();

    let mut params = Parameters::load_or_default();
    if let Some(n) = options.n_override {
        params.unit.n = n;
    }
    for &(which, value) in &options.overrides {
        match which {
            'a' => params.unit.a = value,
            'b' => params.unit.b = value,
            'c' => params.unit.c = value,
            'B' => params.unit.beta = value,
            'E' => params.unit.ea = value,
            _ => {}
        }
    }
    if let Some(steps) = options.steps {
        params.landscape.steps = steps;
    }
    if let Some(h_max) = options.h_max {
        params.landscape.h_max = h_max;
    }

    let unit = KreslingUnit::new(&params.unit).context("invalid unit parameters")?;
    log::info!(
        "Unit created: n={}, a={}, b={}, c={}, beta={}",
        unit.n(),
        unit.a(),
        unit.b(),
        unit.c(),
        unit.beta()
    );

    println!("=== Kresling Sim - Unit Diagnostics ===\n");
    println!(
        "Inputs:  n={}  a={:.4}  b={:.4}  c={:.4}  beta={:.4}  EA={:.4}",
        unit.n(),
        unit.a(),
        unit.b(),
        unit.c(),
        unit.beta(),
        unit.ea()
    );
    println!(
        "Derived: d={:.4}  r={:.4}  R={:.4}  km={:.4}  kv={:.4}",
        unit.d(),
        unit.r(),
        unit.R(),
        unit.km(),
        unit.kv()
    );
    println!("lambda = {:.4}", unit.lambda());
    println!();

    let states = unit.stable_states();
    match (states.state1, states.state2) {
        (Some(s1), Some(s2)) => {
            println!("Stable state 1: h={:.4}  phi={:.4} rad", s1.h, s1.phi);
            println!("Stable state 2: h={:.4}  phi={:.4} rad", s2.h, s2.phi);
        }
        _ => println!("No stable states (|lambda| > 1)"),
    }
    println!("Phase: {}", unit.phase());
    println!("Energy barrier (approx.): {:.6}", unit.energy_barrier());

    if options.landscape {
        println!("\n--- Energy landscape ---");
        println!("{:>10}  {:>10}  {:>12}", "h", "phi_eq", "E");
        for point in unit.energy_landscape(
            params.landscape.h_min,
            params.landscape.h_max,
            params.landscape.steps,
        ) {
            println!(
                "{:>10.4}  {:>10.4}  {:>12.6}",
                point.h, point.phi, point.energy
            );
        }
    }

    if options.export_csv {
        let records = vec![LayerRecord::from_unit(1, &unit)];
        let path = export_layer_table_timestamped(&records)?;
        println!("\nLayer table written to {}", path.display());
    }

    Ok(())
}
