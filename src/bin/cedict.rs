use cedict::{BlankLines, Dictionary, OnError, Options};
use clap::{clap_app, ArgMatches};
use log::error;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

fn is_present(matches: &ArgMatches, sub_matches: &ArgMatches, name: &str) -> bool {
    matches.is_present(name) || sub_matches.is_present(name)
}

fn load(matches: &ArgMatches, sub_matches: &ArgMatches) -> Option<Dictionary> {
    let options = Options {
        on_error: if is_present(matches, sub_matches, "SKIP_ERRORS") {
            OnError::Skip
        } else {
            OnError::Abort
        },
        blank_lines: if is_present(matches, sub_matches, "SKIP_BLANK") {
            BlankLines::Skip
        } else {
            BlankLines::Reject
        },
        classify: is_present(matches, sub_matches, "CLASSIFY"),
    };
    let path = sub_matches.value_of("INPUT")?;
    match Dictionary::from_file(path, options) {
        Ok((dict, errors)) => {
            for error in errors {
                eprintln!("{}\n", error);
            }
            Some(dict)
        }
        Err(error) => {
            error!("Failed to load {}", path);
            eprintln!("{}", error);
            None
        }
    }
}

fn stats(dict: &Dictionary) {
    println!("{} entries", dict.len());
}

fn lookup(dict: &Dictionary, word: &str) -> bool {
    let mut found = false;
    for entry in dict.lookup(word) {
        println!("{}", entry);
        found = true;
    }
    found
}

fn dump(dict: &Dictionary) {
    for entry in dict {
        println!("{}", entry);
    }
}

fn main() {
    pretty_env_logger::init();
    let matches = clap_app!(cedict =>
        (version: VERSION)
        (author: AUTHOR)
        (about: "Reads CC-CEDICT dictionary files.")
        (@arg SKIP_ERRORS: --("skip-errors") +global "Skip malformed lines instead of aborting")
        (@arg SKIP_BLANK: --("skip-blank") +global "Ignore blank lines")
        (@arg CLASSIFY: --classify +global "Classify register, dialect and reference markers")
        (@subcommand stats =>
            (about: "Prints the number of entries")
            (@arg INPUT: +required "Input file")
        )
        (@subcommand lookup =>
            (about: "Prints the entries of a headword")
            (@arg INPUT: +required "Input file")
            (@arg WORD: +required "Traditional or simplified headword")
        )
        (@subcommand dump =>
            (about: "Prints every entry")
            (@arg INPUT: +required "Input file")
        )
    )
    .get_matches();

    let ok = match matches.subcommand() {
        ("stats", Some(sub_matches)) => load(&matches, sub_matches)
            .map(|dict| stats(&dict))
            .is_some(),
        ("lookup", Some(sub_matches)) => match load(&matches, sub_matches) {
            Some(dict) => lookup(&dict, sub_matches.value_of("WORD").unwrap_or_default()),
            None => false,
        },
        ("dump", Some(sub_matches)) => load(&matches, sub_matches).map(|dict| dump(&dict)).is_some(),
        _ => {
            eprintln!("{}", matches.usage());
            false
        }
    };
    if !ok {
        std::process::exit(1);
    }
}
