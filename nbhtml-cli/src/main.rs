// Command-line interface for nbhtml
//
// Converts a Jupyter notebook (.ipynb) into one standalone HTML page with an embedded style sheet.
//
// Usage:
//  nbhtml                          - Convert the configured paths (notebook.ipynb -> notebook.html)
//  nbhtml <input>                  - Write next to the input, extension replaced by .html
//  nbhtml <input> <output>         - Explicit paths
//  nbhtml --print-css              - Print the built-in style sheet
//
// Configuration is layered: built-in defaults, then ./nbhtml.toml if present, then --config,
// then the individual flags (--title, --theme, --css, --unterminated-fence).
//
// Logging goes to stderr and defaults to warnings only; set RUST_LOG=debug for per-cell tracing.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use nbhtml_config::{Loader, NbhtmlConfig, PathsConfig};
use nbhtml_convert::{default_css, serialize_to_html, Notebook};
use std::fs;
use std::path::{Path, PathBuf};

fn build_cli() -> Command {
    Command::new("nbhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Jupyter notebook into a standalone HTML page")
        .long_about(
            "nbhtml renders the markdown and code cells of a Jupyter notebook, together with \
            their captured outputs, into a single HTML file with an embedded style sheet.\n\n\
            Examples:\n  \
            nbhtml                               # notebook.ipynb -> notebook.html\n  \
            nbhtml analysis.ipynb                # analysis.ipynb -> analysis.html\n  \
            nbhtml analysis.ipynb out/page.html  # explicit output path\n  \
            nbhtml analysis.ipynb --theme dark   # dark color theme",
        )
        .arg(
            Arg::new("input")
                .help("Path to the .ipynb notebook")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Path of the HTML file to write")
                .long_help(
                    "Path of the HTML file to write.\n\n\
                    Defaults to the input path with its extension replaced by .html.",
                )
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a nbhtml.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .help("Document title (defaults to the notebook metadata title or the file name)")
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("theme")
                .long("theme")
                .help("Color theme")
                .value_parser(clap::builder::PossibleValuesParser::new(["light", "dark"])),
        )
        .arg(
            Arg::new("css")
                .long("css")
                .value_name("PATH")
                .help("CSS file appended after the built-in styles (relative to the working directory)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("unterminated-fence")
                .long("unterminated-fence")
                .help("What to do with a code fence left open at the end of a markdown cell")
                .value_parser(clap::builder::PossibleValuesParser::new(["flush", "reject"])),
        )
        .arg(
            Arg::new("print-css")
                .long("print-css")
                .help("Print the built-in style sheet and exit")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("print-css") {
        print!("{}", default_css());
        return;
    }

    let config = load_cli_config(&matches);
    let (input, output) = resolve_paths(
        matches.get_one::<String>("input").map(String::as_str),
        matches.get_one::<String>("output").map(String::as_str),
        &config.paths,
    );

    if !input.exists() {
        eprintln!("Error: Input file '{}' not found", input.display());
        std::process::exit(1);
    }

    if let Err(err) = run_conversion(&input, &output, &config) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }

    println!("Successfully converted notebook to HTML: {}", output.display());
    println!();
    println!("Conversion complete!");
    println!("Input:  {}", input.display());
    println!("Output: {}", output.display());
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_millis()
        .init();
}

fn load_cli_config(matches: &ArgMatches) -> NbhtmlConfig {
    let loader = Loader::new().with_optional_file("nbhtml.toml");
    let loader = match matches.get_one::<String>("config") {
        Some(path) => loader.with_file(path),
        None => loader,
    };

    let overrides = [
        ("title", "html.title"),
        ("theme", "html.theme"),
        ("css", "html.custom_css"),
        ("unterminated-fence", "markdown.unterminated_fence"),
    ];
    let loader = overrides
        .into_iter()
        .filter_map(|(flag, key)| {
            matches
                .get_one::<String>(flag)
                .map(|value| (key, value.as_str()))
        })
        .try_fold(loader, |loader, (key, value)| loader.set_override(key, value));

    loader
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Pick input and output paths from the positionals, falling back to the configured paths.
fn resolve_paths(
    input: Option<&str>,
    output: Option<&str>,
    defaults: &PathsConfig,
) -> (PathBuf, PathBuf) {
    match (input, output) {
        (Some(input), Some(output)) => (PathBuf::from(input), PathBuf::from(output)),
        (Some(input), None) => {
            let input = PathBuf::from(input);
            let output = input.with_extension("html");
            (input, output)
        }
        (None, _) => (
            PathBuf::from(&defaults.input),
            PathBuf::from(&defaults.output),
        ),
    }
}

fn run_conversion(input: &Path, output: &Path, config: &NbhtmlConfig) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read '{}'", input.display()))?;

    let custom_css = config
        .html
        .custom_css
        .as_deref()
        .map(|path| {
            fs::read_to_string(path).with_context(|| format!("Failed to read CSS file '{path}'"))
        })
        .transpose()?;

    let notebook = Notebook::from_json(&source)?;
    log::debug!("Parsed {} cells from {}", notebook.cells.len(), input.display());

    let mut options = config.html_options(custom_css);
    if options.title.is_none() && notebook.metadata.title.is_none() {
        options.title = fallback_title(input);
    }

    let html = serialize_to_html(&notebook, &options)?;
    fs::write(output, html).with_context(|| format!("Failed to write '{}'", output.display()))?;

    Ok(())
}

/// Input file stem, used when neither the configuration nor the notebook names a title.
fn fallback_title(input: &Path) -> Option<String> {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
