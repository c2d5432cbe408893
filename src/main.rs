use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use futures::future::try_join_all;
use tokio::fs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crossword_generator::{
    config::Config,
    generator::{generate_crossword, AdjacencyRule, NumberingScheme},
    models::Crossword,
    words::WordList,
};

/// Generate crossword puzzles from word/clue lists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word lists: a JSON object of `{word: clue}` or `word;clue` lines
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Side length of the square grid
    #[arg(short = 's', long)]
    grid_size: Option<usize>,

    /// Let words share letters with perpendicular words
    #[arg(long)]
    allow_crossings: bool,

    /// Number clues in grid reading order instead of placement order
    #[arg(long)]
    grid_numbering: bool,

    /// Write `<name>.crossword.json` files to this directory
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Print the finished grid to stderr
    #[arg(long)]
    render: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crossword_generator=info,crossword=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(grid_size) = cli.grid_size {
        config.generator.grid_size = grid_size;
    }
    if cli.allow_crossings {
        config.generator.adjacency = AdjacencyRule::AllowCrossings;
    }
    if cli.grid_numbering {
        config.generator.numbering = NumberingScheme::Grid;
    }
    if let Some(dir) = cli.out_dir.clone() {
        config.output.dir = Some(dir);
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let lists = try_join_all(cli.inputs.iter().map(|path| async move {
        WordList::load(path)
            .await
            .with_context(|| format!("failed to load word list {}", path.display()))
    }))
    .await?;

    // Each puzzle is independent; build them side by side
    let options = config.generator_options();
    let results = try_join_all(lists.into_iter().map(|list| {
        tokio::task::spawn_blocking(move || generate_crossword(list.into_entries(), options))
    }))
    .await
    .context("crossword generation task failed")?;

    for (path, result) in cli.inputs.iter().zip(results) {
        let crossword = result
            .with_context(|| format!("cannot build a crossword from {}", path.display()))?;
        let crossword = match config.generator.numbering {
            NumberingScheme::Placement => crossword,
            NumberingScheme::Grid => crossword.renumbered_by_grid(),
        };

        if cli.render {
            eprintln!("{}\n{}\n", path.display(), crossword.render());
        }

        write_crossword(&crossword, path, config.output.dir.as_deref()).await?;
    }

    Ok(())
}

async fn write_crossword(crossword: &Crossword, source: &Path, out_dir: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(crossword).context("failed to serialize crossword")?;

    let Some(dir) = out_dir else {
        println!("{json}");
        return Ok(());
    };

    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "words".to_string());
    let target = dir.join(format!("{stem}.crossword.json"));

    fs::create_dir_all(dir)
        .await
        .with_context(|| format!("failed to create {}", dir.display()))?;
    fs::write(&target, json)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;

    tracing::info!(
        "Wrote {} ({} words placed)",
        target.display(),
        crossword.placed_words.len()
    );

    Ok(())
}
