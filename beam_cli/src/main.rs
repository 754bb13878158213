//! # Spanline CLI Application
//!
//! Terminal front end for the continuous beam engine.
//!
//! ## Usage
//!
//! ```text
//! beam_cli                          interactive two-span demo
//! beam_cli --demo                   same as above
//! beam_cli <model.json>             analyze a saved model
//! beam_cli --write-example <path>   save an example model file
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use beam_core::file_io::{load_model, save_model};
use beam_core::model::BeamModel;
use beam_core::node::supported_nodes;
use beam_core::{Beam, BeamResult, CalcError, CalcResult, DistributedLoad};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    println!("Spanline CLI - Continuous Beam Analysis");
    println!("=======================================");
    println!();

    let outcome = match args.as_slice() {
        [] => run_demo(),
        [flag] if flag == "--demo" => run_demo(),
        [flag, path] if flag == "--write-example" => write_example(Path::new(path)),
        [flag] if flag == "--help" || flag == "-h" => {
            print_usage();
            Ok(())
        }
        [path] if !path.starts_with("--") => run_model(Path::new(path)),
        _ => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  beam_cli                          interactive two-span demo");
    println!("  beam_cli --demo                   same as above");
    println!("  beam_cli <model.json>             analyze a saved model");
    println!("  beam_cli --write-example <path>   save an example model file");
}

fn run_demo() -> CalcResult<()> {
    let span = prompt_f64("Enter span length [5.0]: ", 5.0);
    let load = prompt_f64("Enter uniform load [10.0]: ", 10.0);

    println!();
    println!("Analyzing two equal spans of {:.2} under w = {:.2}...", span, load);
    println!();

    let beam = Beam::new(
        supported_nodes(&[0.0, span, 2.0 * span]),
        &[DistributedLoad::uniform(load)],
        &[],
        1.0,
    )?;
    let result = beam.result(100)?;
    print_report(&beam, &result);
    Ok(())
}

fn run_model(path: &Path) -> CalcResult<()> {
    println!("Loading {}...", path.display());
    let model = load_model(path)?;
    if !model.meta.label.is_empty() {
        println!("Model: {}", model.meta.label);
    }
    println!();

    let beam = model.build()?;
    let result = beam.result(model.settings.diagram_divisions)?;
    print_report(&beam, &result);
    Ok(())
}

fn write_example(path: &Path) -> CalcResult<()> {
    save_model(&BeamModel::example(), path)?;
    println!("Example model written to {}", path.display());
    Ok(())
}

fn print_report(beam: &Beam, result: &BeamResult) {
    println!("═══════════════════════════════════════");
    println!("  CONTINUOUS BEAM RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Nodes:");
    for (i, node) in beam.nodes().iter().enumerate() {
        println!(
            "  {} {:>2}  x = {:>8.3}   R = {:>10.3}   rot = {:>12.5}",
            node.symbol(),
            i,
            node.x,
            result.reactions[i],
            result.rotations[i]
        );
    }
    println!();
    println!("Spans:");
    for edge in beam.edges() {
        println!(
            "  {:>8.3} → {:>8.3}   {:<15} load = {:>10.3}",
            edge.start(),
            edge.end(),
            edge.restraint().display_name(),
            edge.total_load()
        );
    }
    println!();
    println!("Breakpoints: {:?}", result.break_points);
    println!();
    println!("Extremes:");
    println!("  Mmax = {:>10.3} at x = {:.3}", result.max_moment, result.max_moment_x);
    println!("  Mmin = {:>10.3} at x = {:.3}", result.min_moment, result.min_moment_x);
    println!("  |V|  = {:>10.3} at x = {:.3}", result.max_abs_shear, result.max_abs_shear_x);
    println!();
    println!("Equilibrium:");
    println!("  ΣLoad = {:.4}   ΣR = {:.4}   {}",
        result.total_load,
        result.total_reaction,
        status_icon(result.equilibrium_error() <= 1e-6 * result.total_load.abs().max(1.0))
    );
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    if let Ok(json) = serde_json::to_string_pretty(result) {
        println!("{}", json);
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}
