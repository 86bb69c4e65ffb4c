use clap::{Parser, Subcommand};
use mdsite::{build, config, output, walk};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Static site generator for Markdown documentation trees")]
#[command(long_about = "\
Static site generator for Markdown documentation trees

Your filesystem is the data source. Every .md file under the docs root
becomes an .html page at the mirrored path, wrapped in a shared template,
with a JSON search index and an RSS feed written alongside.

Content structure:

  docs/
  ├── config.toml              # Site config (optional)
  ├── assets/                  # Static assets → copied to dist/assets/
  │   └── style.css            # Minified in place when assets.minify = true
  ├── templates/
  │   └── base.html            # Page template (optional, built-in default)
  ├── intro.md                 # → dist/intro.html, title \"Intro\"
  └── guide/
      └── getting_started.md   # → dist/guide/getting_started.html,
                               #   title \"Getting Started\"

The output directory is fully erased and rebuilt on every run.

Run 'mdsite gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Documents root directory
    #[arg(long, default_value = "docs", global = true)]
    source: PathBuf,

    /// Output directory (erased and recreated each build)
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: assets → pages → theme → index → feed
    Build,
    /// List discovered documents and validate config without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let config = config::load_config(&cli.source)?;
            println!("==> Building {}", cli.source.display());
            let report = build::build(&cli.source, &cli.output, &config)?;
            output::print_build_output(&report);
            println!("==> Site generated at {}", cli.output.display());
        }
        Command::Check => {
            let config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let skip = [config.assets.dir.as_str(), config.templates.dir.as_str()];
            let docs = walk::discover(&cli.source, &skip)?;
            output::print_check_output(&docs);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
