use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use folio_config::{Config, PipelineConfig};
use folio_engine::{Dialect, Pipeline, classify, io};
use relative_path::RelativePath;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "folio", version, about = "Inspect how folio posts parse into segments")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a config file pointing at a content directory
    Init {
        /// Directory holding post bodies
        content_path: PathBuf,
        /// Replace an existing config file
        #[arg(long)]
        force: bool,
    },
    /// List post files under the content directory
    List {
        /// Content directory (defaults to `content_path` from the config file)
        #[arg(long)]
        content_path: Option<PathBuf>,
    },
    /// Print the segments of a post as JSON
    Segments {
        /// Post path, relative to the content directory
        post: String,
        /// Content directory (defaults to `content_path` from the config file)
        #[arg(long)]
        content_path: Option<PathBuf>,
        /// Recognize standalone embed URLs even if the config leaves them off
        #[arg(long)]
        embeds: bool,
    },
    /// Classify a URL as a social-media embed
    Embed { url: String },
}

fn pipeline_from(config: &PipelineConfig) -> Pipeline {
    let dialects: Vec<Dialect> = [
        (config.chart, Dialect::Chart),
        (config.playground, Dialect::Playground),
        (config.mermaid, Dialect::Mermaid),
        (config.code, Dialect::Code),
        (config.embeds, Dialect::Embed),
    ]
    .into_iter()
    .filter_map(|(enabled, dialect)| enabled.then_some(dialect))
    .collect();
    Pipeline::from_dialects(&dialects)
}

fn content_root(flag: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(Config::expand_path(&path).unwrap_or(path));
    }
    match config {
        Some(config) => Ok(config.content_path.clone()),
        None => bail!(
            "no content directory: pass --content-path or set content_path in {}",
            Config::config_path().display()
        ),
    }
}

/// Builds the config `folio init` writes, refusing to clobber an existing one.
fn init_config(content_path: &Path, existing: Option<&Config>, force: bool) -> Result<Config> {
    if existing.is_some() && !force {
        bail!(
            "{} already exists; pass --force to replace it",
            Config::config_path().display()
        );
    }
    let content_path = Config::expand_path(content_path).unwrap_or_else(|| content_path.into());
    io::validate_content_dir(&content_path)
        .with_context(|| format!("checking {}", content_path.display()))?;

    let mut config = Config::new(content_path);
    if let Some(existing) = existing {
        config.pipeline = existing.pipeline;
    }
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Command::Init {
            content_path,
            force,
        } => {
            let config = init_config(&content_path, config.as_ref(), force)?;
            config.save()?;
            println!("wrote {}", Config::config_path().display());
        }
        Command::List { content_path } => {
            let root = content_root(content_path, config.as_ref())?;
            for post in io::scan_posts(&root)? {
                println!("{post}");
            }
        }
        Command::Segments {
            post,
            content_path,
            embeds,
        } => {
            let root = content_root(content_path, config.as_ref())?;
            let body = io::read_post(RelativePath::new(&post), &root)
                .with_context(|| format!("reading {post}"))?;

            let mut pipeline =
                pipeline_from(&config.map(|c| c.pipeline).unwrap_or_default());
            if embeds {
                pipeline = pipeline.with_embeds();
            }
            log::info!("parsing {post} with {:?}", pipeline.dialects());

            let doc = pipeline.parse(&body);
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Command::Embed { url } => {
            let info = classify(&url);
            if !info.is_resolved() {
                log::warn!("{url} cannot be embedded");
            }
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
