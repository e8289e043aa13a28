#![deny(unsafe_code)]
//! CLI binary for the noisefield noise synthesis system.
//!
//! Subcommands:
//! - `generate <kernel>` — fill a field, normalize it, write a PNG heightmap
//! - `list` — print available kernels

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use noisefield_generator::{generate_normalized, KernelKind, Recipe};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "noisefield", about = "Procedural noise field generator")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a noise field and write it as a grayscale PNG heightmap.
    Generate {
        /// Kernel name (gradient, simplex, value, white).
        kernel: String,

        /// Field rank: 1 or 2 for PNG output (3 has no image projection).
        #[arg(short, long, default_value_t = 2)]
        rank: u8,

        /// Extent of every field axis (minimum 32).
        #[arg(short = 'S', long, default_value_t = 256)]
        size: usize,

        /// Seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Lower normalization bound.
        #[arg(long, default_value_t = noisefield_generator::DEFAULT_LOWER)]
        lower: f64,

        /// Upper normalization bound.
        #[arg(long, default_value_t = noisefield_generator::DEFAULT_UPPER)]
        upper: f64,

        /// Fractal parameters as a JSON string
        /// (scale, octaves, lacunarity, persistence, interpolation).
        #[arg(long, default_value = "{}")]
        params: String,

        /// Output file path.
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,
    },
    /// List available kernels.
    List,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let kernels = KernelKind::list_kernels();
            if cli.json {
                let info = serde_json::json!({ "kernels": kernels });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Kernels:");
                for name in kernels {
                    println!("  {name}");
                }
            }
        }
        Command::Generate {
            kernel,
            rank,
            size,
            seed,
            lower,
            upper,
            params,
            output,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;

            let mut recipe = Recipe::new(&kernel, rank, size, seed);
            recipe.params = params;

            let field = generate_normalized(&recipe, lower, upper)?;
            noisefield_generator::heightmap::write_png(&field, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "kernel": kernel,
                    "rank": rank,
                    "size": size,
                    "seed": seed,
                    "lower": lower,
                    "upper": upper,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "generated {kernel} (rank {rank}, size {size}, seed {seed}) -> {}",
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
