use std::env;
use std::path::{Path, PathBuf};

use catalog::{CatalogManifest, FsProbe, ResourceCatalog, ValidSelection};
use clap::{Args as ClapArgs, Parser, Subcommand};
use surface::SurfaceConfig;
use tools::{SelectionArgs, ToolError};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline tooling for the wildfire map viewer")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct SelectionOpts {
    /// Category token: home, points, biomes, states_overview, by_state, by_classification
    #[arg(long)]
    category: String,

    /// Two-letter state code (by_state)
    #[arg(long)]
    region: Option<String>,

    /// Classification axis: frp or fire_risk (by_classification)
    #[arg(long)]
    axis: Option<String>,

    /// Classification level, e.g. VeryLow or High (by_classification)
    #[arg(long)]
    level: Option<String>,
}

impl From<SelectionOpts> for SelectionArgs {
    fn from(o: SelectionOpts) -> Self {
        SelectionArgs {
            category: o.category,
            region: o.region,
            axis: o.axis,
            level: o.level,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the catalog manifest as JSON
    Catalog {
        #[arg(long)]
        pretty: bool,
    },

    /// List every selection that resolves to a document
    Selections,

    /// Resolve a selection to its document path and title
    Resolve {
        #[command(flatten)]
        selection: SelectionOpts,
    },

    /// Replay a viewer session headlessly and print both regions
    Render {
        #[command(flatten)]
        selection: SelectionOpts,

        /// Document prefix used in the iframe src (default: FIREMAP_BASE_PATH or ./files/plots)
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Check that every catalog document exists under a plots directory
    Verify {
        /// Plots directory (default: FIREMAP_PLOTS_ROOT or files/plots)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Write the hashed manifest here
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Catalog { pretty } => {
            let manifest = tools::manifest();
            let payload = if pretty {
                serde_json::to_string_pretty(&manifest)?
            } else {
                serde_json::to_string(&manifest)?
            };
            println!("{payload}");
        }
        Command::Selections => {
            for selection in ResourceCatalog::new().resolvable_selections() {
                println!("{}", describe(&selection));
            }
        }
        Command::Resolve { selection } => match tools::resolve(&selection.into())? {
            Some(locator) => println!("{}\t{}", locator.path, locator.title),
            None => println!("(home)"),
        },
        Command::Render {
            selection,
            base_path,
        } => {
            let base_path = base_path.unwrap_or_else(|| {
                env::var("FIREMAP_BASE_PATH").unwrap_or_else(|_| "./files/plots".to_string())
            });
            let config = SurfaceConfig {
                base_path,
                ..SurfaceConfig::default()
            };
            let session = tools::render(&selection.into(), config)?;
            println!("{}", serde_json::to_string_pretty(&session)?);
            if let Some(notice) = session.notice {
                eprintln!("notice: {notice}");
                std::process::exit(2);
            }
        }
        Command::Verify { root, out } => {
            let root = root.unwrap_or_else(|| {
                PathBuf::from(
                    env::var("FIREMAP_PLOTS_ROOT").unwrap_or_else(|_| "files/plots".to_string()),
                )
            });
            info!(root = %root.display(), "verifying documents");
            let (manifest, missing) = tools::verify(&FsProbe::new(root.clone()))?;
            if let Some(out) = out {
                write_manifest(&out, &manifest)?;
            }
            println!("{}", serde_json::to_string_pretty(&manifest)?);
            info!(
                present = manifest.entries.len() - missing.len(),
                total = manifest.entries.len(),
                "verification finished"
            );
            if !missing.is_empty() {
                return Err(ToolError::MissingDocuments(missing).into());
            }
        }
    }
    Ok(())
}

fn write_manifest(
    path: &Path,
    manifest: &CatalogManifest,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = serde_json::to_string_pretty(manifest)?;
    std::fs::write(path, payload).map_err(|e| format!("write {path:?}: {e}"))?;
    info!(path = %path.display(), "manifest written");
    Ok(())
}

fn describe(selection: &ValidSelection) -> String {
    let mut line = format!("--category {}", selection.category().token());
    match selection {
        ValidSelection::ByState { region } => {
            line.push_str(&format!(" --region {}", region.code()));
        }
        ValidSelection::ByClassification { axis, level } => {
            line.push_str(&format!(" --axis {} --level {}", axis.token(), level.token()));
        }
        _ => {}
    }
    line
}
