//! Version Registry CLI
//!
//! Looks up protocol numbers, lists supported versions, and exports or
//! verifies version table manifests.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use craft_versions::{TableManifest, VersionRegistry, VersionsConfig};
use semver::VersionReq;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "craft-versions")]
#[command(about = "Query the Minecraft version-to-protocol registry")]
struct Cli {
    /// Config file (defaults to craft-versions.toml lookup)
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the protocol number of a version
    Lookup {
        /// Version id (e.g., "1.12.2", "18w30a")
        id: String,
    },

    /// List supported versions
    List {
        /// Only numbered releases
        #[arg(long)]
        releases: bool,
    },

    /// List distinct protocol numbers, ascending
    Protocols {
        /// Only protocols of numbered releases
        #[arg(long)]
        releases: bool,
    },

    /// Check whether a server's protocol number is supported
    Check {
        protocol: u32,
    },

    /// List releases within a semver range (e.g., ">=1.12, <1.13")
    Range {
        #[arg(long)]
        req: String,
    },

    /// Export the active table as a JSON manifest
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a manifest file
    Verify {
        manifest: PathBuf,
        /// Skip checksum verification
        #[arg(long)]
        no_checksum: bool,
    },

    /// Show the configured target version and its protocol
    Target,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = VersionsConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    let registry = config.open_registry().context("failed to open version registry")?;

    match cli.command {
        Commands::Lookup { id } => {
            let protocol = registry.lookup_protocol(&id)?;
            println!("{}", protocol);
        }

        Commands::List { releases } => {
            let entries: Vec<_> = if releases {
                registry.release_versions().collect()
            } else {
                registry.all_versions().collect()
            };
            let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
            for entry in entries {
                println!("{:<width$}  {}", entry.id, entry.protocol, width = width);
            }
        }

        Commands::Protocols { releases } => {
            let protocols = if releases {
                registry.release_protocols()
            } else {
                registry.supported_protocols()
            };
            for protocol in protocols {
                println!("{}", protocol);
            }
        }

        Commands::Check { protocol } => check_protocol(&registry, protocol)?,

        Commands::Range { req } => {
            let req = VersionReq::parse(&req).with_context(|| format!("invalid range {:?}", req))?;
            for entry in registry.releases_matching(&req) {
                println!("{}  {}", entry.id, entry.protocol);
            }
        }

        Commands::Export { output } => {
            let manifest = TableManifest::from_registry(&registry);
            match output {
                Some(path) => {
                    manifest.write(&path)?;
                    println!("✅ Exported {} versions to {:?}", manifest.stats.total_versions, path);
                }
                None => println!("{}", manifest.to_json()?),
            }
        }

        Commands::Verify { manifest, no_checksum } => {
            let parsed = TableManifest::read(&manifest, !no_checksum)
                .with_context(|| format!("{:?} is not a valid manifest", manifest))?;
            println!(
                "✅ {:?} - {} versions, {} releases, {} protocols",
                manifest,
                parsed.stats.total_versions,
                parsed.stats.release_versions,
                parsed.stats.distinct_protocols,
            );
        }

        Commands::Target => match config.resolve_target(&registry)? {
            Some(protocol) => {
                let id = config.client.target_version.as_deref().unwrap_or_default();
                println!("{}  {}", id, protocol);
            }
            None => bail!("no target version configured"),
        },
    }

    Ok(())
}

fn check_protocol(registry: &VersionRegistry, protocol: u32) -> anyhow::Result<()> {
    if !registry.supports_protocol(protocol) {
        match registry.protocol_range() {
            Some((oldest, newest)) => {
                bail!("protocol {} is not supported ({}..={})", protocol, oldest, newest)
            }
            None => bail!("protocol {} is not supported (empty table)", protocol),
        }
    }

    let kind = if registry.supports_release_protocol(protocol) {
        "release"
    } else {
        "development"
    };
    println!("✅ Protocol {} is supported ({})", protocol, kind);
    for entry in registry.versions_for_protocol(protocol) {
        println!("   └─ {}", entry.id);
    }
    Ok(())
}
