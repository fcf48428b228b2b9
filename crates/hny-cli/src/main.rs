use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use hny_cli::commands::{self, LetterArgs};
use std::path::{Path, PathBuf};

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_parser(value_parser!(PathBuf))
        .help("TOML link configuration file")
}

fn input_arg() -> Arg {
    Arg::new("input")
        .required(true)
        .help("Letter URL, or the bare value of its f parameter")
}

fn cli() -> Command {
    Command::new("hny")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Write and read New-Year letter links")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("encode")
                .about("Write a letter into a shareable link")
                .arg(Arg::new("to").long("to").required(true).help("Receiver name"))
                .arg(
                    Arg::new("to-label")
                        .long("to-label")
                        .help("Suffix after the receiver name (default 님께)"),
                )
                .arg(Arg::new("from").long("from").required(true).help("Sender name"))
                .arg(
                    Arg::new("from-label")
                        .long("from-label")
                        .help("Suffix after the sender name (default 드림)"),
                )
                .arg(Arg::new("message").long("message").help("Letter text"))
                .arg(
                    Arg::new("message-file")
                        .long("message-file")
                        .value_parser(value_parser!(PathBuf))
                        .help("Read the letter text from a file"),
                )
                .group(
                    ArgGroup::new("body")
                        .args(["message", "message-file"])
                        .required(true),
                )
                .arg(
                    Arg::new("no-date")
                        .long("no-date")
                        .action(ArgAction::SetTrue)
                        .help("Do not stamp today's date into the letter"),
                )
                .arg(Arg::new("base-url").long("base-url").help("Viewer URL to link to"))
                .arg(
                    Arg::new("share")
                        .long("share")
                        .action(ArgAction::SetTrue)
                        .help("Also copy the link to the terminal clipboard"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("decode")
                .about("Print the fields of a letter link")
                .arg(input_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                )
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("view")
                .about("Print a letter the way the viewer shows it")
                .arg(input_arg())
                .arg(config_arg()),
        )
        .subcommand(
            Command::new("reply")
                .about("Show the composer prefill for writing back")
                .arg(input_arg())
                .arg(config_arg()),
        )
}

fn string_arg(args: &ArgMatches, id: &str) -> Option<String> {
    args.get_one::<String>(id).cloned()
}

fn config_path(args: &ArgMatches) -> Option<&Path> {
    args.get_one::<PathBuf>("config").map(PathBuf::as_path)
}

async fn run(matches: ArgMatches) -> anyhow::Result<i32> {
    match matches.subcommand() {
        Some(("encode", args)) => {
            let config = commands::load_config(
                config_path(args),
                args.get_one::<String>("base-url").map(String::as_str),
                args.get_flag("no-date"),
            )?;
            let message = match args.get_one::<PathBuf>("message-file") {
                Some(path) => commands::read_message(path)?,
                None => string_arg(args, "message").unwrap_or_default(),
            };
            let letter = LetterArgs {
                to: string_arg(args, "to").unwrap_or_default(),
                to_label: string_arg(args, "to-label"),
                from: string_arg(args, "from").unwrap_or_default(),
                from_label: string_arg(args, "from-label"),
                message,
            };

            let link = commands::encode_letter(config.clone(), letter)?;
            println!("{link}");
            if link.suggests_shortener(&config) {
                eprintln!(
                    "hint: this link is long ({} chars); a URL shortener may help",
                    link.len()
                );
            }
            if args.get_flag("share") {
                let outcome = commands::share_in_terminal(&link).await;
                if outcome.shows_confirmation() {
                    eprintln!("link copied");
                }
            }
            Ok(0)
        }
        Some(("decode", args)) => {
            let config = commands::load_config(config_path(args), None, false)?;
            let input = string_arg(args, "input").unwrap_or_default();
            match commands::decode_input(&config, &input) {
                Ok(record) => {
                    println!("{}", commands::render_record(&record, args.get_flag("json"))?);
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("invalid letter link: {e}");
                    Ok(1)
                }
            }
        }
        Some(("view", args)) => {
            let config = commands::load_config(config_path(args), None, false)?;
            let input = string_arg(args, "input").unwrap_or_default();
            let (found, text) = commands::render_view(&config, &input);
            println!("{text}");
            Ok(if found { 0 } else { 1 })
        }
        Some(("reply", args)) => {
            let config = commands::load_config(config_path(args), None, false)?;
            let input = string_arg(args, "input").unwrap_or_default();
            match commands::render_reply(&config, &input) {
                Ok(text) => {
                    println!("{text}");
                    Ok(0)
                }
                Err(e) => {
                    eprintln!("invalid letter link: {e}");
                    Ok(1)
                }
            }
        }
        _ => Ok(2),
    }
}

#[tokio::main]
async fn main() {
    hny_cli::init_tracing();

    let code = match run(cli().get_matches()).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("Command failed: {:#}", e);
            eprintln!("error: {e:#}");
            2
        }
    };
    std::process::exit(code);
}
