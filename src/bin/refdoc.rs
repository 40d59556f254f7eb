//! Command-line interface for refdoc
//! Inspects generated reference documentation pages the same way the test helpers do.
//!
//! Usage:
//!   refdoc block `<kind>` `<path>` [--name `<name>`] [--format text|json]  - Print one block of a page
//!   refdoc check-order `<path>` `<line>`...                                 - Check lines occur in order
//!   refdoc nested-path `<root>` `<service>` `<sub_folder>` `<file>`           - Print a page's conventional path

use clap::{Arg, ArgAction, ArgMatches, Command};
use refdoc::refdoc::config::{Loader, RefdocConfig};
use refdoc::refdoc::testing::{extract_block_span, find_lines_in_order, BlockKind, BlockSpan};
use serde::Serialize;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;

fn main() {
    let matches = Command::new("refdoc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect blocks of generated reference documentation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Log to stderr (-v for debug, -vv for trace)"),
        )
        .subcommand(
            Command::new("block")
                .about("Print a single block of a documentation page")
                .arg(
                    Arg::new("kind")
                        .help("Block kind")
                        .required(true)
                        .value_parser(BlockKind::LABELS)
                        .index(1),
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the documentation page")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .short('n')
                        .help("Class, method or parameter name"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                ),
        )
        .subcommand(
            Command::new("check-order")
                .about("Check that lines occur in a documentation page in order")
                .arg(
                    Arg::new("path")
                        .help("Path to the documentation page")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("lines")
                        .help("Expected lines, in order")
                        .required(true)
                        .num_args(1..)
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("nested-path")
                .about("Print the conventional path of a generated page")
                .arg(Arg::new("root").required(true).index(1))
                .arg(Arg::new("service").required(true).index(2))
                .arg(Arg::new("sub_folder").required(true).index(3))
                .arg(Arg::new("file").required(true).index(4)),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));
    let config = load_config(matches.get_one::<String>("config"));

    match matches.subcommand() {
        Some(("block", block_matches)) => handle_block_command(block_matches),
        Some(("check-order", order_matches)) => handle_check_order_command(order_matches),
        Some(("nested-path", path_matches)) => handle_nested_path_command(path_matches, &config),
        _ => unreachable!(),
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load_config(path: Option<&String>) -> RefdocConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    })
}

fn read_page(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}

#[derive(Serialize)]
struct BlockReport<'a> {
    kind: &'static str,
    name: Option<&'a str>,
    #[serde(flatten)]
    span: BlockSpan,
    text: &'a str,
}

/// Handle the block command
fn handle_block_command(matches: &ArgMatches) {
    let label = matches.get_one::<String>("kind").unwrap();
    let path = matches.get_one::<String>("path").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let name = matches.get_one::<String>("name").map(String::as_str);

    let kind = BlockKind::from_label(label, name).unwrap_or_else(|| {
        eprintln!("Error: --name is required for {} blocks", label);
        std::process::exit(2);
    });

    let contents = read_page(path);
    let span = extract_block_span(&kind, &contents).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    debug!(path = %path, start = span.start, end = span.end, "block located");
    let text = span.slice(&contents);

    match format.as_str() {
        "json" => {
            let report = BlockReport {
                kind: kind.label(),
                name: kind.name(),
                span,
                text,
            };
            let json = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                eprintln!("Error serializing block: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        _ => print!("{}", text),
    }
}

/// Handle the check-order command
fn handle_check_order_command(matches: &ArgMatches) {
    let path = matches.get_one::<String>("path").unwrap();
    let lines: Vec<&String> = matches.get_many::<String>("lines").unwrap().collect();

    let contents = read_page(path);
    match find_lines_in_order(&lines, &contents) {
        Ok(positions) => {
            for (line, position) in lines.iter().zip(positions) {
                println!("{}\t{}", position, line);
            }
        }
        Err(e) => {
            eprintln!("Error: {} (line {} of the expected sequence)", e, e.index + 1);
            std::process::exit(1);
        }
    }
}

/// Handle the nested-path command
fn handle_nested_path_command(matches: &ArgMatches, config: &RefdocConfig) {
    let root = matches.get_one::<String>("root").unwrap();
    let service = matches.get_one::<String>("service").unwrap();
    let sub_folder = matches.get_one::<String>("sub_folder").unwrap();
    let file = matches.get_one::<String>("file").unwrap();

    let services_root = config.layout.services_root(Path::new(root));
    let path = config
        .layout
        .nested_file_path(&services_root, service, sub_folder, file);
    println!("{}", path.display());
}
