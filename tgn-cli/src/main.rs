// Command-line interface for tgn
//
// This binary typesets an edit list: a file (or stdin) of scripture reference expressions, one
// per line, rendered through one of the tgn-babel typesetters.
//
// The core capabilities use the tgn-babel crate; this crate only wires configuration, logging
// and I/O around it.
//
// Usage:
//  tgn [<edit-list>] [--to <typesetter>] [--output <file>]  - Typeset an edit list (stdin if omitted)
//  tgn --list-typesetters                                   - List available typesetters
//
// Extra Parameters:
//
// Typesetter-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the typesetter.
// Example:
//  tgn narrative.txt --to plain --extra-max-column 72

mod driver;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use driver::Driver;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tgn_babel::{BackendOptions, ReferenceParser, TypesetterRegistry, VerseDatabase};
use tgn_config::{Loader, TgnConfig};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            let has_value = i + 1 < args.len() && !args[i + 1].starts_with('-');

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                // No value, treat as boolean flag
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("tgn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Typeset scripture reference edit lists")
        .long_about(
            "tgn expands scripture reference expressions into verses and typesets them.\n\n\
            Each line of the edit list is one reference expression, e.g.\n  \
            Gen 1:1-10; Rom 8:26-39\n\
            Lines starting with '#' are comments; blank lines request a paragraph break.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass typesetter-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tgn narrative.txt                           # Plain text to stdout\n  \
            tgn narrative.txt --to tex -o out.tex       # Plain TeX file\n  \
            tgn narrative.txt --to html5 --extra-class-prefix nar\n  \
            echo 'Jde 24-25' | tgn --to sile            # Read the edit list from stdin",
        )
        .arg(
            Arg::new("edit-list")
                .help("Edit list to typeset (defaults to stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .short('t')
                .value_name("TYPESETTER")
                .help("Typesetter to use (defaults to typeset.default from the configuration)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("bible-file")
                .long("bible-file")
                .value_name("PATH")
                .help("Verse database file (overrides data.bible_file)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tgn.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Annotate the document with each expression before its verses")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug details to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-typesetters")
                .long("list-typesetters")
                .help("List available typesetters")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(&cleaned_args);

    let config = load_cli_config(&matches);
    init_logging(&config, matches.get_flag("verbose"));

    let registry = TypesetterRegistry::with_defaults().unwrap_or_else(|err| {
        error!("{err}");
        std::process::exit(1);
    });

    if matches.get_flag("list-typesetters") {
        handle_list_typesetters_command(&registry);
        return;
    }

    match handle_typeset_command(&matches, &config, &registry, extra_params) {
        Ok(0) => {}
        Ok(failed) => {
            error!(failed, "some expressions could not be typeset");
            std::process::exit(1);
        }
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    }
}

/// Typeset the edit list; returns the number of failed expressions.
fn handle_typeset_command(
    matches: &ArgMatches,
    config: &TgnConfig,
    registry: &TypesetterRegistry,
    extra_params: HashMap<String, String>,
) -> Result<usize, Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.typeset.default.clone());
    if !registry.has(&name) {
        return Err(format!(
            "unknown typesetter '{name}' (available: {})",
            registry.list_typesetters().join(", ")
        )
        .into());
    }
    let options = typesetter_options(config, &name, extra_params)?;

    let bible_file = &config.data.bible_file;
    let db = VerseDatabase::from_file(bible_file)
        .map_err(|err| format!("cannot load '{}': {err}", bible_file.display()))?;
    info!(
        path = %bible_file.display(),
        verses = db.len(),
        "verse database ready"
    );

    let input: Box<dyn BufRead> = match matches.get_one::<String>("edit-list") {
        Some(path) => Box::new(BufReader::new(
            File::open(path).map_err(|err| format!("cannot read '{path}': {err}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let output: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|err| format!("cannot write '{path}': {err}"))?,
        )),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut ts = registry.create(&name, &options, &db)?;
    ts.start(output)?;
    let summary = Driver::new(&mut ts, ReferenceParser::new(&db))
        .with_debug(matches.get_flag("debug"))
        .run(input)?;
    ts.finish()?;

    debug!(
        typesetter = %name,
        expressions = summary.expressions,
        verses = summary.verses,
        failed = summary.failed,
        "edit list done"
    );
    Ok(summary.failed)
}

fn handle_list_typesetters_command(registry: &TypesetterRegistry) {
    println!("Available typesetters:\n");
    for name in registry.list_typesetters() {
        let description = registry.description(&name).unwrap_or("");
        println!("  {name:<8} {description}");
    }
}

/// Options for the named typesetter: configuration first, asset files, then `--extra-*` flags.
fn typesetter_options(
    config: &TgnConfig,
    name: &str,
    extra_params: HashMap<String, String>,
) -> io::Result<BackendOptions> {
    let mut options = config.typeset.options(name);
    if let Some((key, path)) = config.typeset.asset(name) {
        options.insert(key.to_string(), read_asset(path)?);
    }
    for (key, value) in extra_params {
        options.insert(key, value);
    }
    Ok(options)
}

fn read_asset(path: &Path) -> io::Result<String> {
    fs::read_to_string(path).map_err(|err| {
        io::Error::new(err.kind(), format!("cannot read '{}': {err}", path.display()))
    })
}

fn load_cli_config(matches: &ArgMatches) -> TgnConfig {
    let loader = Loader::new().with_optional_file("tgn.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    let loader = loader.with_env();
    let loader = match matches.get_one::<String>("bible-file") {
        Some(path) => loader.set_override("data.bible_file", path.as_str()),
        None => Ok(loader),
    };

    loader.and_then(Loader::build).unwrap_or_else(|err| {
        // Logging is configured from this very config, so report directly.
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// RUST_LOG wins; otherwise `--verbose` or the configured level.
fn init_logging(config: &TgnConfig, verbose: bool) {
    let fallback = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
