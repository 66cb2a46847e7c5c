//! obj2array - Wavefront OBJ to Kotlin float-array converter
//!
//! Parses an OBJ mesh and writes its face-expanded vertex positions
//! and normals as two `floatArrayOf` literals. Invoked with no
//! arguments it reads `bubble.obj` and writes `array.kt` at scale
//! 1.0.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use obj2array_core::{to_float_arrays, ObjParser};
use std::fs;
use std::path::PathBuf;

/// Convert a Wavefront OBJ mesh into Kotlin `floatArrayOf` literals
#[derive(Debug, Parser)]
#[command(name = "obj2array", version)]
struct Args {
    /// Input OBJ file
    #[arg(default_value = "bubble.obj")]
    input: PathBuf,

    /// Output Kotlin source file
    #[arg(short, long, default_value = "array.kt")]
    output: PathBuf,

    /// Scale factor applied to vertex positions (normals are never scaled)
    #[arg(short, long, default_value_t = 1.0)]
    scale: f32,

    /// Suppress the success summary
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mesh = ObjParser::new(args.scale)
        .parse_file(&args.input)
        .with_context(|| format!("Failed to parse OBJ file: {}", args.input.display()))?;

    // Resolve and render fully in memory before touching the output
    // path; a bad face index aborts here with no file created.
    let arrays = to_float_arrays(&mesh)
        .with_context(|| format!("Failed to resolve face indices in: {}", args.input.display()))?;

    fs::write(&args.output, arrays)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    if !args.quiet {
        eprintln!(
            "{} Wrote {} faces to: {}",
            "✓".green().bold(),
            mesh.face_count(),
            args.output.display().to_string().bright_white()
        );
    }

    Ok(())
}
