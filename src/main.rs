use std::{fs, path::{Path, PathBuf}, process::ExitCode, time::Instant};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use qa_keyword_features::{
    classify::{load_labels, LabeledDataset},
    pipeline::{build_feature_matrix, extract_keywords, extract_tfidf_features},
    Error, PipelineConfig, Result, StopwordSet,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "qa-keyword-features", about = "Keyword and sentiment features for tagged Q&A text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the top-k TF-IDF keywords of every document.
    Keywords {
        #[command(flatten)]
        input: Input,
        /// Keywords per document (overrides the config).
        #[arg(short = 'k', long)]
        top_k: Option<usize>,
    },
    /// Build dense TF-IDF vectors over the full vocabulary.
    Dense {
        #[command(flatten)]
        input: Input,
        /// Write vocabulary and rows as CBOR.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the hybrid TF-IDF + sentiment feature matrix.
    Features {
        #[command(flatten)]
        input: Input,
        /// Sentiment lexicon directory.
        #[arg(short, long)]
        lexicon: PathBuf,
        /// Label file, one 0/1 per line.
        #[arg(long)]
        labels: Option<PathBuf>,
        /// Maximum n-gram columns (overrides the config).
        #[arg(long)]
        max_features: Option<usize>,
        /// Write the matrix (or labeled dataset) as CBOR.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Tagged corpus, one `word/pos` document per line.
    #[arg(short, long)]
    corpus: PathBuf,
    /// Stopword list, one word per line.
    #[arg(short, long)]
    stopwords: PathBuf,
    /// JSON pipeline config.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Input {
    fn load(&self) -> Result<(PipelineConfig, StopwordSet)> {
        let config = match &self.config {
            Some(path) => PipelineConfig::load(path)?,
            None => PipelineConfig::default(),
        };
        let stopwords = StopwordSet::load(&self.stopwords)?;
        Ok((config, stopwords))
    }
}

fn write_cbor<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_cbor::to_vec(value)?;
    fs::write(path, bytes).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "written");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Keywords { input, top_k } => {
            let (mut config, stopwords) = input.load()?;
            if let Some(k) = top_k {
                config.top_k = k;
            }
            let keywords = extract_keywords(&input.corpus, &stopwords, &config)?;
            for (i, doc) in keywords.iter().enumerate() {
                println!("第{}个文档的关键词：", i + 1);
                print!("{doc}");
                println!();
            }
        }
        Command::Dense { input, output } => {
            let (_, stopwords) = input.load()?;
            let matrix = extract_tfidf_features(&input.corpus, &stopwords)?;
            println!("vocabulary size: {}", matrix.n_cols());
            if let Some(first) = matrix.row(0) {
                println!("first document: {first}");
            }
            if let Some(path) = output {
                write_cbor(&path, &matrix)?;
            }
        }
        Command::Features {
            input,
            lexicon,
            labels,
            max_features,
            output,
        } => {
            let (mut config, stopwords) = input.load()?;
            if max_features.is_some() {
                config.max_features = max_features;
            }
            let keywords = extract_keywords(&input.corpus, &stopwords, &config)?;
            let features = build_feature_matrix(&keywords, &lexicon, &config)?;
            let (rows, cols) = features.matrix.shape();
            println!("feature matrix shape: ({rows}, {cols})");
            match labels {
                Some(path) => {
                    let dataset = LabeledDataset::new(features.matrix, load_labels(&path)?)?;
                    println!("labeled rows: {}", dataset.len());
                    if let Some(out) = output {
                        write_cbor(&out, &dataset)?;
                    }
                }
                None => {
                    if let Some(out) = output {
                        write_cbor(&out, &features)?;
                    }
                }
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let result = run(Cli::parse());
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "done");
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
