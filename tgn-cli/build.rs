use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the registered typesetters from tgn-babel's registry.
// Build scripts can't depend on the library they are building alongside.
const TYPESETTERS: &[&str] = &["html5", "plain", "sile", "tex"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tgn")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Typeset scripture reference edit lists")
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
                .help("Typesetter to use")
                .value_parser(clap::builder::PossibleValuesParser::new(TYPESETTERS)),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("bible-file")
                .long("bible-file")
                .help("Verse database file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a tgn.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Annotate the document with each expression")
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
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tgn", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tgn", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tgn", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
