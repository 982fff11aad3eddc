mod config;
mod display;
mod export;
mod parser;
mod schedule;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{arg, value_parser, Command as CliCommand};

use config::SessionConfig;
use parser::load_players;
use session::{Command, Flow, OutputPaths, Session};

fn print_menu(round_number: usize, first: bool) {
    if first {
        println!("==========================================");
        println!("Welcome to the Round Robin Game Scheduler!");
        println!("==========================================\n");
    }
    println!("Press Enter to generate game {}.", round_number);
    println!("Press 1 to view the player statistics.");
    println!("Press 2 to output match history to a JSON file.");
    println!("Press 3 to exit.");
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = CliCommand::new("round-robin")
        .version(clap::crate_version!())
        .about("Skill-balanced doubles court scheduler")
        .arg(arg!(--players <csv> "Roster CSV with peg_name, peg_colour and gender columns").default_value("players2024.csv"))
        .arg(arg!(--config <yaml> "Session configuration").default_value("config.yml"))
        .arg(arg!(--log <json> "Where option 2 writes the match history").default_value("logs.json"))
        .arg(arg!(--stats <csv> "Player statistics rewritten after every game").default_value("player_stats.csv"))
        .arg(arg!(--"no-stats" "Do not write the player statistics file"))
        .arg(arg!(--seed <n> "Seed for reproducible scheduling").value_parser(value_parser!(u64)).required(false))
        .get_matches();

    let path_arg = |name: &str| -> PathBuf {
        matches.get_one::<String>(name).map(PathBuf::from).unwrap_or_default()
    };

    let config = SessionConfig::load(path_arg("config"))?;
    log::info!("Loaded config: {:?}", config);

    println!("Loading players from CSV...");
    let records = load_players(path_arg("players"))?;
    println!("Loaded {} players", records.len());

    let outputs = OutputPaths {
        match_log: path_arg("log"),
        player_stats: if matches.get_flag("no-stats") { None } else { Some(path_arg("stats")) },
    };
    let seed = matches.get_one::<u64>("seed").copied();
    let mut session = Session::new(config, records, outputs, seed);

    let stdin = io::stdin();
    let mut input = String::new();
    let mut first = true;
    loop {
        println!();
        print_menu(session.next_round_number(), first);
        first = false;
        print!("Your choice: ");
        io::stdout().flush().context("Failed to flush stdout")?;

        input.clear();
        if stdin.lock().read_line(&mut input).context("Failed to read from stdin")? == 0 {
            // stdin closed
            return Ok(());
        }

        if session.handle(Command::parse(&input)) == Flow::Exit {
            return Ok(());
        }
    }
}
