use std::io::{self, BufRead};
use std::process;

use clap::{Args, Parser, Subcommand};
use nqueens_rs::{Placement, SolutionBrowser, SolveMethod};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    match cli.command {
        MainCommand::Solve(args) => execute_solve(args),
        MainCommand::Render(args) => execute_render(args),
        MainCommand::Browse(args) => execute_browse(args),
    }
}

fn execute_solve(args: SolveArgs) -> Result<(), String> {
    let method: SolveMethod = args.method.parse()?;
    let mut solver = method.create_solver();

    let limit = args
        .max_solutions
        .map(|value| {
            if value == 0 {
                Err("max-solutions must be greater than zero".to_string())
            } else {
                Ok(value as usize)
            }
        })
        .transpose()?;

    let solutions = solver.solve_with_limit(args.n, limit);
    if solutions.is_empty() {
        println!("No solutions found.");
    } else {
        for (idx, solution) in solutions.iter().enumerate() {
            println!("Solution {}:", idx + 1);
            println!("{solution}\n");
        }
        println!("Total solutions returned: {}", solutions.len());
    }

    Ok(())
}

fn execute_render(args: RenderArgs) -> Result<(), String> {
    let placement: Placement = args.placement.parse()?;
    println!("{placement}");
    if !placement.is_conflict_free() {
        println!("\nNote: this placement contains attacking queens.");
    }
    Ok(())
}

fn execute_browse(args: BrowseArgs) -> Result<(), String> {
    let method: SolveMethod = args.method.parse()?;
    let mut solver = method.create_solver();

    let solutions = solver.solve(args.n);
    if solutions.is_empty() {
        println!("No solutions found for n={}.", args.n);
        return Ok(());
    }

    let mut browser = SolutionBrowser::new(solutions);
    print_selection(&browser, method);
    println!("Commands: n(ext), p(revious), r(eset), q(uit)");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("failed to read input: {err}"))?;
        match line.trim() {
            "n" | "next" => {
                browser.next();
                print_selection(&browser, method);
            }
            "p" | "prev" | "previous" => {
                browser.previous();
                print_selection(&browser, method);
            }
            "r" | "reset" => {
                browser.reset();
                print_selection(&browser, method);
            }
            "q" | "quit" => break,
            "" => continue,
            other => println!("Unknown command '{other}'. Use n, p, r, or q."),
        }
    }

    Ok(())
}

fn print_selection(browser: &SolutionBrowser, method: SolveMethod) {
    let (position, total) = browser.position();
    println!("Method: {method}  -  Solution {position}/{total}");
    match browser.current() {
        Some(placement) => println!("{placement}\n"),
        None => println!("(no solution selected)\n"),
    }
}

#[derive(Parser)]
#[command(name = "nq-cli", version, about = "N-Queens solver tools")]
struct Cli {
    #[command(subcommand)]
    command: MainCommand,
}

#[derive(Subcommand)]
enum MainCommand {
    /// Enumerate and print every solution for an n x n board
    Solve(SolveArgs),

    /// Parse a placement string and print its board
    Render(RenderArgs),

    /// Step through the solution list interactively
    Browse(BrowseArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Board dimension (one queen per row).
    #[arg(default_value_t = 8)]
    n: usize,

    /// Solve method to use: 'in-place' or 'persistent'.
    #[arg(long, default_value = "in-place")]
    method: String,

    /// Maximum number of solutions to return (default: all of them)
    #[arg(long)]
    max_solutions: Option<u32>,
}

#[derive(Args)]
struct RenderArgs {
    /// Whitespace- or comma-separated column index per row, e.g. "1 3 0 2".
    #[arg()]
    placement: String,
}

#[derive(Args)]
struct BrowseArgs {
    /// Board dimension (one queen per row).
    #[arg(default_value_t = 8)]
    n: usize,

    /// Solve method to use: 'in-place' or 'persistent'.
    #[arg(long, default_value = "in-place")]
    method: String,
}
