// Command-line interface for wikidown
//
// Converts a single exported wiki page (HTML) into a Markdown file next to it, or wherever -o points.
// The rendering itself lives in the wikidown crate; this binary only resolves paths, loads
// configuration and reports progress.
//
// Usage:
//  wikidown <input.html> [-o <file>] [-f]       - Convert to Markdown (default)
//  wikidown md <input.html> [-o <file>] [-f]    - Same as above (explicit)
//  wikidown print-config                        - Print the default configuration
//
// Extra Parameters:
//
// Configuration values can be overridden with --extra-<key> <value>.
// Example:
//  wikidown page.html --extra-max-depth 64 --extra-overwrite

mod logging;
mod paths;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use wikidown::RenderOptions;
use wikidown_config::{Loader, WikidownConfig};

const SUBCOMMANDS: &[&str] = &["md", "print-config", "help"];

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

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));
            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
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
    Command::new("wikidown")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render exported wiki HTML pages as Markdown")
        .long_about(
            "wikidown converts a page exported from a wiki (Confluence-style HTML) into Markdown.\n\n\
            The page title becomes a level-1 heading and only the main content area is rendered.\n\
            Navigation, sidebars and footers are dropped.\n\n\
            Extra Parameters:\n  \
            --extra-max-depth <n>         Deepest nesting rendered structurally\n  \
            --extra-extension <ext>       Extension of the default output path\n  \
            --extra-overwrite [bool]      Replace existing output files\n  \
            --extra-fallback-class <s>    Class substring of the fallback content div\n\n\
            Examples:\n  \
            wikidown page.html                  # Writes page.md\n  \
            wikidown md page.html -o out.md     # Explicit subcommand and output\n  \
            wikidown page.html -f               # Overwrite page.md",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .about("Convert an HTML export to Markdown (default command)")
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
                        .help("Output file path (defaults to the input with a .md extension)")
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
        .subcommand(Command::new("print-config").about("Print the default configuration"))
}

/// Parse the command line, retrying with `md` injected when the first argument is a file.
fn parse_args(cli: Command, args: &[String]) -> Result<ArgMatches, clap::Error> {
    match cli.clone().try_get_matches_from(args) {
        Ok(matches) => Ok(matches),
        Err(err) => {
            let first = args.get(1).map(String::as_str);
            match first {
                Some(first) if !first.starts_with('-') && !SUBCOMMANDS.contains(&first) => {
                    let mut injected = vec![args[0].clone(), "md".to_string()];
                    injected.extend_from_slice(&args[1..]);
                    cli.try_get_matches_from(&injected)
                }
                _ => Err(err),
            }
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let matches = parse_args(build_cli(), &cleaned_args).unwrap_or_else(|err| err.exit());

    logging::setup_logger(matches.get_count("verbose"))?;

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    apply_config_overrides(&mut config, &mut extra_params)?;
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }

    match matches.subcommand() {
        Some(("md", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .context("input is required")?;
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let force = sub_matches.get_flag("force");
            handle_md_command(input, output, force, &config)
        }
        Some(("print-config", _)) => {
            print!("{}", wikidown_config::DEFAULT_TOML);
            Ok(())
        }
        _ => bail!("unknown subcommand, use --help for usage information"),
    }
}

/// Convert one HTML file to Markdown on disk.
fn handle_md_command(
    input: &str,
    output: Option<&str>,
    force: bool,
    config: &WikidownConfig,
) -> Result<()> {
    let input_path = paths::resolve_input(input)?;
    let output_path = paths::resolve_output(&input_path, output, &config.output.extension)?;
    paths::ensure_writable(&output_path, force || config.output.overwrite)?;

    let bytes = fs::read(&input_path)
        .with_context(|| format!("failed to read input file: {}", input_path.display()))?;

    println!("Parsing {}...", input_path.display());
    let options = RenderOptions::from(config);
    debug!("render options: {options:?}");
    let markdown = wikidown::render_bytes(&bytes, &options)
        .with_context(|| format!("failed to convert {}", input_path.display()))?;

    fs::write(&output_path, markdown)
        .with_context(|| format!("failed to write output file: {}", output_path.display()))?;
    info!("wrote {}", output_path.display());
    println!("Successfully converted to {}", output_path.display());
    Ok(())
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<WikidownConfig> {
    let loader = Loader::new().with_optional_file("wikidown.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().context("failed to load configuration")
}

fn apply_config_overrides(
    config: &mut WikidownConfig,
    extra_params: &mut HashMap<String, String>,
) -> Result<()> {
    if let Some(raw) = take_override(extra_params, &["max-depth", "max_depth"]) {
        config.render.max_depth = raw
            .parse()
            .with_context(|| format!("invalid value '{raw}' for --extra-max-depth"))?;
    }
    if let Some(raw) = take_override(extra_params, &["extension", "ext"]) {
        config.output.extension = raw.trim_start_matches('.').to_string();
    }
    if let Some(raw) = take_override(extra_params, &["overwrite"]) {
        config.output.overwrite = parse_bool_arg("overwrite", &raw)?;
    }
    if let Some(raw) = take_override(extra_params, &["fallback-class"]) {
        config.content.fallback_class = raw;
    }
    Ok(())
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => bail!("invalid boolean value '{other}' for --extra-{flag}"),
    }
}
