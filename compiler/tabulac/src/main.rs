//! Tabula front-end CLI.

use std::process::ExitCode;

use tabulac::cli::{parse_args, Command};
use tabulac::commands;

fn main() -> ExitCode {
    tabulac::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match invocation.command {
        Command::Help => {
            print_usage();
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("tabula {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        _ => match commands::run(&invocation) {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        },
    }
}

fn print_usage() {
    println!("Tabula: LL(1) front-end for a small declaration and expression language");
    println!();
    println!("Usage: tabula <command> [options] [<file> | -e <source>]");
    println!();
    println!("Commands:");
    println!("  lex <file>        Print the token stream with positions");
    println!("  parse <file>      Recognize an arithmetic expression (E -> T E2 ...)");
    println!("  symtab <file>     Build the symbol table for `id : type` declarations");
    println!("  table             Print the grammar and its predictive parsing table");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Options:");
    println!("  -e <source>       Read source from the argument instead of a file");
    println!("  --lenient         parse: keep going after syntax errors to report them all");
    println!("  --color=<mode>    Diagnostics color: auto (default), always, never");
    println!();
    println!("Environment:");
    println!("  TABULA_LOG        Tracing filter, e.g. `tabula_parse=trace` (falls back to RUST_LOG)");
    println!("  TABULA_LOG_TREE   Set to 1 to render nested spans as a tree");
    println!();
    println!("Examples:");
    println!("  tabula parse -e 'id + id * id #'");
    println!("  tabula parse --lenient -e 'id +++ id'");
    println!("  tabula symtab -e 'id1:real; id2:ptr integer; id3:integer;'");
    println!("  tabula lex program.tb");
}
