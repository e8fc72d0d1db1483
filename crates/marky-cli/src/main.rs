//! Command-line interface for marky.
//!
//! Usage:
//!   marky [FILE] [--format html|plain|messaging|json] [--pretty] [--auto-link]
//!
//! Reads FILE, or stdin when FILE is missing or `-`, and prints the rendered
//! document. Flags take precedence over `~/.config/marky/config.toml`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use marky_config::{Config, Format};
use marky_engine::{HtmlOptions, Marky, Options, PlainOptions, html, messaging, plain};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Html,
    Plain,
    Messaging,
    /// The parsed node tree
    Json,
}

impl From<FormatArg> for Format {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Html => Format::Html,
            FormatArg::Plain => Format::Plain,
            FormatArg::Messaging => Format::Messaging,
            FormatArg::Json => Format::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "marky", version)]
#[command(about = "Render markdown as HTML, plain text or messaging markup")]
struct Args {
    /// Markdown file to read, `-` for stdin
    file: Option<PathBuf>,

    /// Output format [default: html]
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// One block-level HTML element per line
    #[arg(long)]
    pretty: bool,

    /// Turn bare http(s) URLs into links
    #[arg(long)]
    auto_link: bool,

    /// `target` attribute for HTML links
    #[arg(long, value_name = "TARGET")]
    link_target: Option<String>,

    /// Config file to use instead of ~/.config/marky/config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    let input = read_input(args.file.as_deref())?;
    let output = render(&args, &config, &input)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!("no config at {}", Config::config_path().display());
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn render(args: &Args, config: &Config, input: &str) -> Result<String> {
    let marky = Marky::new(Options::default().auto_link(args.auto_link || config.auto_link))?;
    let format = args
        .format
        .map(Format::from)
        .or(config.format)
        .unwrap_or_default();
    log::debug!("rendering {} bytes as {format:?}", input.len());

    let output = match format {
        Format::Html => marky.render(
            input,
            &html(HtmlOptions {
                pretty: args.pretty || config.render.pretty,
                link_target: args
                    .link_target
                    .clone()
                    .or_else(|| config.render.link_target.clone()),
                ..Default::default()
            }),
        )?,
        Format::Plain => marky.render(input, &plain(PlainOptions::default()))?,
        Format::Messaging => marky.render(input, &messaging(PlainOptions::default()))?,
        Format::Json => serde_json::to_string_pretty(&marky.parse(input))?,
    };
    Ok(output)
}
