use std::path::Path;

use clap::{Arg, ArgAction, Command};
use tracing::debug;

use synkeys::completion::{dump_words, extract_candidates};
use synkeys::parsing;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("synkeys")
        .version(VERSION)
        .propagate_version(true)
        .about("Extract completion candidates from syntax highlighting rules.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("extract")
                .about("Extract completion candidates from the given rule listing")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the candidates as JSON records instead of plain text."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the rule listing, or '-' to read it from standard input."),
                ),
        )
        .subcommand(
            Command::new("words")
                .about("Write the plain sorted word list for the given rule listing")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Write the word list to this file instead of standard output."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the rule listing, or '-' to read it from standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("extract", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            let json = submatches.get_flag("json");

            let content = load_or_exit(Path::new(filename));
            let candidates = extract_candidates(&content);

            debug!("extracted {} candidates", candidates.len());

            if json {
                let rendered = serde_json::to_string_pretty(&candidates).unwrap();
                println!("{}", rendered);
            } else {
                for candidate in &candidates {
                    println!("{}", candidate.text);
                }
            }
        }
        Some(("words", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();

            let content = load_or_exit(Path::new(filename));
            let candidates = extract_candidates(&content);

            let result = match submatches.get_one::<String>("output") {
                Some(output) => match std::fs::File::create(output) {
                    Ok(mut file) => dump_words(&candidates, &mut file),
                    Err(error) => {
                        eprintln!("error: Unable to create {}: {}", output, error);
                        std::process::exit(1);
                    }
                },
                None => {
                    let mut stdout = std::io::stdout();
                    dump_words(&candidates, &mut stdout)
                }
            };

            if let Err(error) = result {
                eprintln!("error: Failed writing word list: {}", error);
                std::process::exit(1);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: synkeys [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load_or_exit(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("error: {}", error);
            std::process::exit(1);
        }
    }
}
