use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("wikidown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render exported wiki HTML pages as Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a wikidown.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("md")
                .about("Convert an HTML export to Markdown")
                .arg(
                    Arg::new("input")
                        .help("Input HTML file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("force")
                        .long("force")
                        .short('f')
                        .help("Overwrite the output file if it exists")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("print-config").about("Print the default configuration"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "wikidown", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "wikidown", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "wikidown", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
