use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use writings::{config, generate, output, scan};

fn version_string() -> &'static str {
    if env!("WRITINGS_ON_TAG") == "true" {
        return env!("CARGO_PKG_VERSION");
    }
    let hash = env!("WRITINGS_GIT_HASH");
    if hash.is_empty() {
        "dev@unknown"
    } else {
        // Leaked once at startup
        Box::leak(format!("dev@{hash}").into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "writings")]
#[command(about = "Static site generator for a date-sorted blog index")]
#[command(long_about = "\
Static site generator for a date-sorted blog index

Markdown files become entries in a list of links, newest first, rendered
under an author bio on a single index.html.

Content structure:

  pages/
  ├── config.toml                  # Site config (optional)
  ├── index.js                     # Page, never listed (not markdown)
  ├── 404.md                       # Page, never listed (404)
  ├── _template.html               # Leading underscore: ignored
  └── 2015-05-01-hello-world/
      └── index.md                 # Listed as /2015-05-01-hello-world/

Front matter (YAML, optional):

  ---
  title: Hello World               # Link label (path when missing)
  date: 2015-05-01T22:12:03Z       # Sort key (undated pages lead the list)
  path: /hello/                    # Overrides the derived path
  ---

Run 'writings gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "pages", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "public", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".writings-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan content directory into a manifest
    Scan,
    /// Produce the index page from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content directory without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let report = generate::generate(&manifest_path(&cli.temp_dir), &cli.output)?;
            output::print_generate_output(&report);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.output)?;
            output::print_generate_output(&report);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

fn manifest_path(temp_dir: &Path) -> PathBuf {
    temp_dir.join("manifest.json")
}

/// Write the scan manifest as pretty JSON and return its path.
fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let path = manifest_path(temp_dir);
    std::fs::write(&path, serde_json::to_string_pretty(manifest)?)?;
    Ok(path)
}
