mod steam;
mod util;

use std::{fmt::Display, io, process::ExitCode};

use clap::{command, value_parser, Arg, ArgMatches};

use steam::{
    client,
    logger::{ConsoleLogger, FilteringLogger},
    seeder::{self, StoreSearchResolver, DEFAULT_TITLES},
    store,
};
use util::async_help::get_blocking_runtime;

const DEFAULT_DATABASE: &str = "games.db";

fn main() -> ExitCode {
    let matches = command!()
        .version(env!("CARGO_PKG_VERSION"))
        .about("Seeds a local games table from the Steam store search")
        .arg(
            Arg::new("database")
                .help("path of the SQLite file to create or extend")
                .long("database")
                .short('d')
                .default_value(DEFAULT_DATABASE)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("language")
                .help("display language passed to the store as `l`")
                .long("language")
                .default_value(client::DEFAULT_LANGUAGE)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("country")
                .help("country code passed to the store as `cc`, decides the price currency")
                .long("country")
                .default_value(client::DEFAULT_COUNTRY)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("base-url")
                .help("store host to search against")
                .long("base-url")
                .default_value(client::BASE_URL)
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("verbose")
                .help("print a trace line for every request and stored row")
                .long("verbose")
                .short('v')
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let database = string_arg(matches, "database");
    let resolver = StoreSearchResolver {
        base_url: string_arg(matches, "base-url"),
        language: string_arg(matches, "language"),
        country: string_arg(matches, "country"),
        ..StoreSearchResolver::default()
    };
    let logger = FilteringLogger {
        logger: &ConsoleLogger,
        verbose: matches.get_flag("verbose"),
    };

    let mut conn = store::open(&database)?;
    let rt = get_blocking_runtime()?;
    let summary = rt.block_on(seeder::seed_titles(
        &DEFAULT_TITLES,
        &resolver,
        &mut conn,
        &logger,
    ))?;
    let total = store::count_games(&conn)?;
    conn.close().map_err(|(_, err)| store::Error::from(err))?;

    println!(
        "Database '{}' finished: {} ({} games stored)",
        database, summary, total
    );
    Ok(())
}

fn string_arg(matches: &ArgMatches, name: &str) -> String {
    matches
        .get_one::<String>(name)
        .cloned()
        .unwrap_or_default()
}

#[derive(Debug)]
enum Error {
    Runtime(io::Error),
    Store(store::Error),
    Seed(seeder::Error),
}

impl From<io::Error> for Error {
    fn from(value: io::Error) -> Self {
        Error::Runtime(value)
    }
}

impl From<store::Error> for Error {
    fn from(value: store::Error) -> Self {
        Error::Store(value)
    }
}

impl From<seeder::Error> for Error {
    fn from(value: seeder::Error) -> Self {
        Error::Seed(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Runtime(err) => write!(f, "RuntimeError: {}", err),
            Error::Store(err) => write!(f, "StoreError: {}", err),
            Error::Seed(err) => write!(f, "SeedError: {}", err),
        }
    }
}
