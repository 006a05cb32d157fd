use std::process;

use clap::{Arg, ArgAction, ArgMatches, Command};

use kalita_cli::cli_context::CliContext;
use kalita_cli::commands::{handle_config, handle_home, handle_news, handle_show, handle_tui};
use kalita_cli::error::KalitaResult;
use kalita_cli::logging::{get_log_file_path, init_logging, log_error, log_info};

fn build_cli() -> Command {
    Command::new("kalita")
        .about("Kalita CLI - Berita dan pengumuman Paguyuban Cluster Kalita dari terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("demo")
                .long("demo")
                .help("Use the built-in sample news instead of the live feed")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("config")
                .about("Configure the news feed connection")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Supabase project URL")
                )
                .arg(
                    Arg::new("anon-key")
                        .long("anon-key")
                        .value_name("KEY")
                        .help("Supabase anon (public) key")
                )
                .arg(
                    Arg::new("table")
                        .long("table")
                        .value_name("TABLE")
                        .help("Table holding the news items")
                )
                .arg(
                    Arg::new("refresh")
                        .long("refresh")
                        .value_name("SECONDS")
                        .help("Refresh interval of the interactive view")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the current configuration")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(Command::new("home").about("Show the home page"))
        .subcommand(
            Command::new("news")
                .about("List news and announcements")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .value_name("TYPE")
                        .help("Category: all, berita, pengumuman")
                        .default_value("all")
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .value_name("FORMAT")
                        .help("Output format: simple, table, json")
                        .value_parser(["simple", "table", "json"])
                        .default_value("simple")
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .short('l')
                        .value_name("NUMBER")
                        .help("Limit number of results")
                )
        )
        .subcommand(
            Command::new("show")
                .about("Read one news item")
                .arg(
                    Arg::new("id")
                        .value_name("ID")
                        .help("News item id")
                        .required(true)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("tui")
                .about("Open the interactive board")
                .arg(
                    Arg::new("page")
                        .long("page")
                        .short('p')
                        .value_name("PAGE")
                        .help("Start page: beranda, berita, struktur, kontak")
                        .default_value("beranda")
                )
        )
}

async fn dispatch(matches: &ArgMatches) -> KalitaResult<()> {
    let demo = matches.get_flag("demo");

    match matches.subcommand() {
        Some(("config", sub_matches)) => handle_config(sub_matches),
        Some((name, sub_matches)) => {
            let mut context = CliContext::load(demo)?;
            match name {
                "home" => handle_home(sub_matches, &mut context).await,
                "news" => handle_news(sub_matches, &mut context).await,
                "show" => handle_show(sub_matches, &mut context).await,
                "tui" => handle_tui(sub_matches, &mut context).await,
                _ => {
                    eprintln!("Unknown command. Use 'kalita --help' for available commands.");
                    process::exit(1);
                }
            }
        }
        None => {
            eprintln!("Unknown command. Use 'kalita --help' for available commands.");
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let matches = build_cli().get_matches();
    log_info(&format!("Running {:?}", matches.subcommand_name()));

    if let Err(e) = dispatch(&matches).await {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        if let Some(path) = get_log_file_path() {
            eprintln!("Log: {}", path.display());
        }
        process::exit(1);
    }
}
