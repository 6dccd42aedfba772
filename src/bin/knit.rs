//! Command-line interface for knit
//! Runs the bundled grammars over some input and prints the tree they build.
//!
//! Usage:
//!   knit expr `<expr>` [--format `<format>`]   - Parse and evaluate an arithmetic expression
//!   knit json `<path>` [--format `<format>`]   - Parse a JSON document (`-` reads stdin)
//!   knit formats                             - List the available output formats
//!
//! `--param key=value` (repeatable) passes parameters to the format, e.g.
//! `knit json doc.json -f treeviz --param show-linum=true`.

use std::collections::HashMap;
use std::io::Read;

use clap::{Arg, ArgAction, Command};
use knit::grammars;
use knit::formats::Formatter;
use knit::FormatRegistry;
use tracing_subscriber::EnvFilter;

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format (see `knit formats`)")
        .default_value("short-inline")
}

fn param_arg() -> Arg {
    Arg::new("param")
        .long("param")
        .short('p')
        .value_name("KEY=VALUE")
        .help("Format parameter, e.g. show-linum=true for treeviz")
        .action(ArgAction::Append)
}

/// Split `key=value` pairs; later keys win
fn parse_params<'s>(
    values: impl IntoIterator<Item = &'s String>,
) -> Result<HashMap<String, String>, String> {
    values
        .into_iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(format!("expected KEY=VALUE, got '{}'", pair)),
        })
        .collect()
}

fn params_from(matches: &clap::ArgMatches) -> HashMap<String, String> {
    let values = matches.get_many::<String>("param").into_iter().flatten();
    parse_params(values).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}

fn main() {
    init_logging();

    let matches = Command::new("knit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse text with knit's bundled grammars and print the resulting tree")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("expr")
                .about("Parse and evaluate an arithmetic expression")
                .arg(
                    Arg::new("expr")
                        .help("Expression using integers, '+', '*' and parentheses")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg())
                .arg(param_arg()),
        )
        .subcommand(
            Command::new("json")
                .about("Parse a JSON document")
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(format_arg())
                .arg(param_arg()),
        )
        .subcommand(Command::new("formats").about("List available output formats"))
        .get_matches();

    match matches.subcommand() {
        Some(("expr", expr_matches)) => {
            let expr = expr_matches.get_one::<String>("expr").unwrap();
            let format = expr_matches.get_one::<String>("format").unwrap();
            handle_expr_command(expr, format, &params_from(expr_matches));
        }
        Some(("json", json_matches)) => {
            let path = json_matches.get_one::<String>("path").unwrap();
            let format = json_matches.get_one::<String>("format").unwrap();
            handle_json_command(path, format, &params_from(json_matches));
        }
        Some(("formats", _)) => {
            handle_formats_command();
        }
        _ => unreachable!(),
    }
}

/// Log to stderr, filtered by `KNIT_LOG` (e.g. `KNIT_LOG=knit=trace`)
fn init_logging() {
    let filter = EnvFilter::try_from_env("KNIT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(tree: &knit::Node, format: &str, params: &HashMap<String, String>) -> String {
    FormatRegistry::with_defaults()
        .serialize_with_params(tree, format, params)
        .unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        })
}

/// Handle the expr command
fn handle_expr_command(expr: &str, format: &str, params: &HashMap<String, String>) {
    let Some(tree) = grammars::parse(&grammars::expression(), expr) else {
        eprintln!("Error: not a valid expression: {}", expr);
        std::process::exit(1);
    };

    println!("{}", render(&tree, format, params));
    println!("= {}", grammars::evaluate(&tree));
}

/// Handle the json command
fn handle_json_command(path: &str, format: &str, params: &HashMap<String, String>) {
    let source = if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .unwrap_or_else(|e| {
                eprintln!("Error reading stdin: {}", e);
                std::process::exit(1);
            });
        source
    } else {
        std::fs::read_to_string(path).unwrap_or_else(|e| {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        })
    };

    let Some(tree) = grammars::parse(&grammars::json(), &source) else {
        eprintln!("Error: {} is not a valid JSON document", path);
        std::process::exit(1);
    };

    println!("{}", render(&tree, format, params));
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
    }
}
