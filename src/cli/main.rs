use std::io::{BufRead, Write};

use config::CliConfig;
use dpll_sat::{config::Config, context::Context, reports::Report};
use misc::examine_parser_report;
use parse_args::parse_args;

mod config;
mod misc;
mod parse_args;

fn main() {
    env_logger::init();

    let mut cli_options = CliConfig::default();

    let args: Vec<String> = std::env::args().collect();

    let config = match parse_args(&args, &mut cli_options) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // The search recurses once for each atom drawn on a path, so the solve is made on a thread with a stack sized for large formulas.
    let (seed, verify) = (cli_options.seed, cli_options.verify);
    let solver = std::thread::Builder::new()
        .name("dpll".to_string())
        .stack_size(cli_options.stack_mb * 1024 * 1024)
        .spawn(move || {
            let mut stdout = std::io::stdout().lock();
            solve_dimacs(config, seed, verify, std::io::stdin().lock(), &mut stdout)
        });

    let code = match solver {
        Ok(handle) => match handle.join() {
            Ok(Ok(code)) => code,
            Ok(Err(e)) => {
                eprintln!("c Failed to write the result: {e}");
                2
            }
            Err(_) => {
                eprintln!("c The solve thread panicked");
                3
            }
        },
        Err(e) => {
            eprintln!("c Failed to spawn the solve thread: {e}");
            3
        }
    };

    std::process::exit(code);
}

/// Reads a DIMACS formula from `reader`, solves the formula, and writes the result to `out`.
///
/// Returns the exit code of the process.
fn solve_dimacs(
    config: Config,
    seed: Option<u64>,
    verify: bool,
    reader: impl BufRead,
    out: &mut impl Write,
) -> std::io::Result<i32> {
    let seed = match seed {
        Some(seed) => seed,
        None => {
            writeln!(out, "No seed provided. Using default seed.")?;
            0
        }
    };

    let mut ctx = Context::from_config(config);
    ctx.set_seed(seed);

    let parse_report = ctx.read_dimacs(reader);
    examine_parser_report(&parse_report);
    if parse_report.is_err() {
        return Ok(1);
    }

    let result = match ctx.solve() {
        Ok(report) => report,
        Err(e) => {
            eprintln!("c Solve error: {e}");
            return Ok(2);
        }
    };

    match ctx.result_string() {
        Some(string) => writeln!(out, "{string}")?,
        None => {
            eprintln!("c No result after solve");
            return Ok(2);
        }
    }
    writeln!(
        out,
        "select_random_literal called {} times.",
        ctx.counters.selections
    )?;

    if verify && result == Report::Satisfiable {
        match ctx.model_satisfies_input() {
            true => log::info!("Model verified"),
            false => {
                eprintln!("c The model does not satisfy the formula");
                return Ok(4);
            }
        }
    }

    Ok(0)
}
