//! Scheme Indenter CLI

use std::path::Path;

use scmi::commands::{run_fmt, run_indent};
use scmi::options::{parse_options, ParsedArgs};
use scmi::CliError;

const FMT_USAGE: &str =
    "Usage: scmi fmt <file.scm> [--check] [--tab-width=N] [--policy=SYMBOL=POLICY]...";
const INDENT_USAGE: &str =
    "Usage: scmi indent <file.scm> <offset> [--tab-width=N] [--policy=SYMBOL=POLICY]...";

fn main() {
    scmi::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "fmt" => {
            let parsed = parse_or_exit(&args[2..]);
            let [path] = parsed
                .positionals(["file path"])
                .unwrap_or_else(|e| fail_with_usage(&e, FMT_USAGE));
            let options = &parsed.options;

            let outcome = run_fmt(Path::new(path), options).unwrap_or_else(|e| fail(&e));
            if options.check {
                if outcome.is_changed() {
                    eprintln!("{path}: indentation differs");
                    std::process::exit(2);
                }
            } else {
                print!("{}", outcome.text());
            }
        }
        "indent" => {
            let parsed = parse_or_exit(&args[2..]);
            let [path, offset] = parsed
                .positionals(["file path", "offset"])
                .unwrap_or_else(|e| fail_with_usage(&e, INDENT_USAGE));

            let column =
                run_indent(Path::new(path), offset, &parsed.options).unwrap_or_else(|e| fail(&e));
            println!("{column}");
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn parse_or_exit(args: &[String]) -> ParsedArgs {
    parse_options(args).unwrap_or_else(|e| fail(&e))
}

fn fail(error: &CliError) -> ! {
    eprintln!("error: {error}");
    std::process::exit(1);
}

fn fail_with_usage(error: &CliError, usage: &str) -> ! {
    eprintln!("error: {error}");
    eprintln!("{usage}");
    std::process::exit(1);
}

fn print_usage() {
    println!("Scheme indenter");
    println!();
    println!("Usage: scmi <command> [options]");
    println!();
    println!("Commands:");
    println!("  fmt <file>              Print the file with every line re-indented");
    println!("  indent <file> <offset>  Print the column a newline at <offset> indents to");
    println!("  help                    Show this message");
    println!();
    println!("Options:");
    println!("  --check                 (fmt) Exit with status 2 when the file would change");
    println!("  --tab-width=N           Columns a tab advances (default: 8)");
    println!("  --policy=SYMBOL=POLICY  Indent forms headed by SYMBOL with POLICY:");
    println!("                          default, definition, sequence, if, with:N, none");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=scm_indent=trace) to enable logging.");
}
