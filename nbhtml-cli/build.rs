use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() in src/main.rs; build scripts can't reach src/ modules.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("nbhtml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Jupyter notebook into a standalone HTML page")
        .arg(
            Arg::new("input")
                .help("Path to the .ipynb notebook")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("Path of the HTML file to write")
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
                .help("Document title")
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
        );

    generate_to(Bash, &mut cmd, "nbhtml", &outdir)?;
    generate_to(Zsh, &mut cmd, "nbhtml", &outdir)?;
    generate_to(Fish, &mut cmd, "nbhtml", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
