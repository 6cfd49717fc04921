//! Command-line interface for visie
//! Finds initialisms and acronyms spelled by the given constraints over a dictionary.
//!
//! Usage:
//!   visie [--min-length `<n>`] [--use-variants] [--dict `<path>`] [--config `<file>`] `<constraint>`...
//!
//! Settings are read from `visie.toml` in the user's config directory when present
//! (`$XDG_CONFIG_HOME/visie.toml` on Linux), then from `--config`, then from flags.
//!
//! Set `RUST_LOG=visie=debug` for a summary of each run on stderr.

use clap::{value_parser, Arg, ArgAction, Command};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use visie::config::{Loader, VisieConfig};
use visie::dictionary::WordList;
use visie::variants::generate_variants;
use visie::{generate, Constraint};

const SYNTAX_HELP: &str = r#"By default, visie will find initialisms and acronyms
that contain any subset of the provided words, in any order:

  $ visie pleasing orange home noise expeller
  HONE: home orange noise expeller
  HOPE: home orange pleasing expeller
  ...

Wrapping words in angle brackets "<...>"
means that they must all occur, in order:

  $ visie 'pleasing orange home <noise expeller>'
  HONE: home orange noise expeller
  PHONE: pleasing home orange noise expeller
  PONE: pleasing orange noise expeller

Words in square brackets "[...]" must all occur, but can be in any order:

  $ visie '[pleasing orange home <noise expeller>]'
  PHONE: pleasing home orange noise expeller

Parenthesis "(...)" means exactly one of the contained elements will be used:

  $ visie --min-length 3 'pleasing home (orange noise expeller)'
  HOP: home orange pleasing
  ...

Elements in curly braces "{...}" can occur in any order and any quantity:

  $ visie 'pleasing home ({orange noise} expeller)'
  PHON: pleasing home orange noise

Elements followed by a question mark are optional:

  $ visie '<diaphone is? a? [pleasing orange home noise expeller]>'
  DIAPHONE: diaphone is a pleasing home orange noise expeller

Finally, you can create recursive acronyms by using a period as a wildcard:

  $ visie '<. is? a? [pleasing orange home noise expeller]>'
  DIAPHONE: d is a pleasing home orange noise expeller
  WANHOPE: w a noise home orange pleasing expeller
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("visie")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Visie is a simple initialism enumerator. It helps you name things with acronyms.")
        .after_help(SYNTAX_HELP)
        .arg_required_else_help(true)
        .arg(
            Arg::new("constraint")
                .value_name("CONSTRAINT")
                .help("A constraint (see below)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("use-variants")
                .long("use-variants")
                .short('u')
                .help("Use phonetic variants of the dictionary entries")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .short('m')
                .help("Minimum acronym length (default: 4)")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("dict")
                .long("dict")
                .short('d')
                .help("Path to the dictionary file (default: /usr/share/dict/words)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the defaults and the user's visie.toml")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .get_matches();

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    let expressions: Vec<&String> = matches
        .get_many::<String>("constraint")
        .map(|values| values.collect())
        .unwrap_or_default();
    let root = parse_constraints(&expressions);

    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    handle_generate_command(&root, &config, format);
}

/// `visie.toml` in the user's config directory
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("visie.toml"))
}

/// Defaults, then the user's config file, then `--config`, then command-line flags
fn load_config(matches: &clap::ArgMatches) -> Result<VisieConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = user_config_path() {
        loader = loader.with_optional_file(path);
    }
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(&min_length) = matches.get_one::<usize>("min-length") {
        loader = loader.set_override("generate.min_length", min_length as i64)?;
    }
    if matches.get_flag("use-variants") {
        loader = loader.set_override("generate.use_variants", true)?;
    }
    if let Some(path) = matches.get_one::<PathBuf>("dict") {
        loader = loader.set_override("dictionary.path", path.to_string_lossy().into_owned())?;
    }
    loader.build()
}

/// Parse every expression; several are combined as any subset of them
fn parse_constraints(expressions: &[&String]) -> Constraint {
    let mut constraints: Vec<Constraint> = expressions
        .iter()
        .map(|expression| {
            visie::parse(expression).unwrap_or_else(|e| {
                eprintln!("{}", e);
                std::process::exit(1);
            })
        })
        .collect();
    if constraints.len() == 1 {
        constraints.remove(0)
    } else {
        Constraint::AnySubset(constraints)
    }
}

/// Stream acronyms for the dictionary to stdout
fn handle_generate_command(root: &Constraint, config: &VisieConfig, format: &str) {
    let words = WordList::open(&config.dictionary.path).unwrap_or_else(|e| {
        eprint!("{}", e);
        std::process::exit(1);
    });
    let candidates: Box<dyn Iterator<Item = String>> = if config.generate.use_variants {
        Box::new(words.flat_map(|word| generate_variants(&word)))
    } else {
        Box::new(words)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for acronym in generate(root, candidates, config.generate.min_length) {
        let line = match format {
            "json" => serde_json::to_string(&acronym).unwrap_or_else(|e| {
                eprintln!("Error formatting acronym: {}", e);
                std::process::exit(1);
            }),
            _ => acronym.to_string(),
        };
        // A closed pipe (e.g. `| head`) just ends the run
        if writeln!(out, "{}", line).is_err() {
            return;
        }
    }
}
