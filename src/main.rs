mod commands;
mod core;
mod render;
mod resolve;

use clap::{Parser, ValueEnum};
use core::error::{DocsError, print_error};
use std::path::PathBuf;

/// Resolve documentation release versions from git and render the doc
/// version templates
#[derive(Parser)]
#[command(name = "set-versions")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Optional query; "getlatest" prints the newest active release codename
  /// and exits without touching git
  #[arg(value_enum, value_name = "QUERY")]
  query: Option<Query>,

  /// Directory containing releases.json, the templates, and the outputs
  #[arg(long, default_value = ".")]
  docs_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum Query {
  /// Print the newest active release codename
  Getlatest,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  // The registry is needed by both the query and the render paths
  let registry = match core::registry::ReleaseRegistry::load(&cli.docs_dir.join("releases.json")) {
    Ok(registry) => registry,
    Err(e) => handle_error(e),
  };

  let result = match cli.query {
    Some(Query::Getlatest) => commands::run_getlatest(&registry),
    None => commands::run_render(&cli.docs_dir, &registry),
  };

  if let Err(err) = result {
    handle_error(err);
  }
}

fn handle_error(err: DocsError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
