use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use std::io::{IsTerminal, Read};
use tracing::debug;
use tracing_subscriber::{self, EnvFilter};

use wxreport::parsing;
use wxreport::rendering;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    // Initialize the tracing subscriber. This respects the RUST_LOG
    // environment variable if present, or sets Level::ERROR as a fallback.
    let filter = EnvFilter::from_default_env();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    let matches = Command::new("wxreport")
        .version(VERSION)
        .propagate_version(true)
        .about("Decoder for METAR and TAF aviation weather bulletins.")
        .disable_help_subcommand(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("decode")
                .about("Decode a METAR or TAF report and explain every group.")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the parse result as JSON instead of prose."),
                )
                .arg(
                    Arg::new("report")
                        .required(false)
                        .help("The coded report. Reads standard input when omitted."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("decode", submatches)) => {
            let report = match submatches.get_one::<String>("report") {
                Some(text) => text.clone(),
                None => {
                    let mut buffer = String::new();
                    if let Err(error) = std::io::stdin().read_to_string(&mut buffer) {
                        fail(&format!("unable to read standard input: {}", error));
                    }
                    buffer
                }
            };
            debug!(?report);

            let result = parsing::parse_extended(&report);
            if submatches.get_flag("json") {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{}", json),
                    Err(error) => fail(&format!("unable to serialize result: {}", error)),
                }
                return;
            }

            let colour = std::io::stdout().is_terminal();
            println!("report type: {}", rendering::report_kind_text(result.kind));
            if let Some(error) = result.error {
                let line = format!("error: {}", error);
                if colour {
                    println!("{}", line.bright_red());
                } else {
                    println!("{}", line);
                }
            }
            for entry in &result.groups {
                println!();
                if colour {
                    println!("{}", entry.source.bold());
                } else {
                    println!("{}", entry.source);
                }
                for line in rendering::explain_group(&entry.group).lines() {
                    println!("    {}", line);
                }
            }
        }
        Some(_) | None => {}
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}: {}", "error".bright_red(), message);
    std::process::exit(1);
}
