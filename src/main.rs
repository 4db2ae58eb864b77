use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn, Level};

use sentence_rainbow::reader::{AsyncInputReader, InputSource, ReaderConfig};
use sentence_rainbow::stats::{unix_now, FileStats, RunStats};
use sentence_rainbow::{render, ColorizeWorker, Colorizer, OutputFormat, SplitterKind};

/// Splitter choice exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SplitterArg {
    /// Character scanner
    Scan,
    /// regex-automata DFA
    Dfa,
}

impl From<SplitterArg> for SplitterKind {
    fn from(arg: SplitterArg) -> Self {
        match arg {
            SplitterArg::Scan => SplitterKind::Scan,
            SplitterArg::Dfa => SplitterKind::Dfa,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sentence-rainbow")]
#[command(about = "Colors each sentence by its word-count rank along a rainbow gradient")]
#[command(version)]
struct Args {
    /// Input files; reads stdin when none are given and --example is not set
    files: Vec<PathBuf>,

    /// Colorize the bundled example text
    #[arg(long)]
    example: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Ansi)]
    format: OutputFormat,

    /// Sentence splitter implementation
    #[arg(long, value_enum, default_value_t = SplitterArg::Scan)]
    splitter: SplitterArg,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn sources(&self) -> Vec<InputSource> {
        let mut sources = Vec::with_capacity(self.files.len() + 1);
        if self.example {
            sources.push(InputSource::Example);
        }
        sources.extend(self.files.iter().cloned().map(InputSource::File));
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        sources
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // WHY: structured JSON logging on stderr keeps stdout free for rendered output
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(?args, "Parsed CLI arguments");

    let run_start = unix_now();
    let run_timer = Instant::now();

    let colorizer = Colorizer::with_default_rules(args.splitter.into())?;
    let (worker, handle) = ColorizeWorker::spawn(colorizer);

    let reader = AsyncInputReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    let mut stdout = tokio::io::stdout();
    let mut input_stats = Vec::new();

    for source in args.sources() {
        let input_timer = Instant::now();
        let (text, read_stats) = reader.read_input(&source).await?;

        if let Some(error) = read_stats.read_error {
            warn!("Skipping {}: {}", source, error);
            input_stats.push(FileStats::failed(
                source.to_string(),
                error,
                input_timer.elapsed().as_millis() as u64,
            ));
            continue;
        }

        let sentences = handle.colorize(text.as_str()).await?;
        let output = render(&sentences, args.format)?;
        stdout.write_all(output.as_bytes()).await?;

        info!("Colorized {}: {} sentences", source, sentences.len());
        input_stats.push(FileStats::success(
            source.to_string(),
            &text,
            &sentences,
            input_timer.elapsed().as_millis() as u64,
        ));
    }

    stdout.flush().await?;

    drop(handle);
    worker.join().await?;

    let run_stats = RunStats::from_inputs(run_start, run_timer.elapsed().as_millis() as u64, input_stats);
    if let Some(ref stats_path) = args.stats_out {
        run_stats.write_json(stats_path).await?;
        info!("Wrote run stats to {}", stats_path.display());
    }

    if run_stats.inputs_failed > 0 {
        eprintln!(
            "sentence-rainbow: {} of {} inputs could not be read",
            run_stats.inputs_failed,
            run_stats.input_stats.len()
        );
    }

    Ok(())
}
