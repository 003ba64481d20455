use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use bibledict::{
    Analysis, AuditReport, Chapter, DEFAULT_MIN_ENTRIES, Dictionary, EntryOverrides, EntryRequest,
    FillPlan, Grouping, generate_entry, report,
};

const DEFAULT_DICTIONARY: &str = "public/dicionario_completo.json";

#[derive(Parser, Debug)]
#[command(name = "bibledict")]
#[command(about = "Analyze and augment the theological dictionary")]
struct Cli {
    /// Dictionary JSON to read.
    #[arg(long, short = 'd', env = "DICTIONARY_PATH", default_value = DEFAULT_DICTIONARY, global = true)]
    dictionary: PathBuf,
    /// Chapters with fewer entries than this are incomplete.
    #[arg(long, env = "MIN_ENTRIES", default_value_t = DEFAULT_MIN_ENTRIES, global = true)]
    min_entries: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print totals, entries-per-chapter distribution and incomplete chapters.
    Analyze {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List incomplete chapters per book with how many entries each lacks.
    Incomplete,
    /// Template a single entry from the word bank of the book's testament.
    Generate {
        #[arg(long)]
        book: String,
        #[arg(long, allow_hyphen_values = true)]
        chapter: Chapter,
        #[arg(long)]
        verse: String,
        #[arg(long)]
        word: String,
        /// Bank word or theme whose record fills the entry; defaults to --word.
        #[arg(long)]
        record: Option<String>,
        #[arg(long)]
        strong: Option<String>,
        #[arg(long)]
        original: Option<String>,
        #[arg(long)]
        transliteration: Option<String>,
        #[arg(long)]
        root_meaning: Option<String>,
        #[arg(long)]
        theme: Option<String>,
        /// Book description used in the narrative templates.
        #[arg(long)]
        description: Option<String>,
        /// Add the entry to the dictionary instead of only printing it.
        #[arg(long, default_value_t = false)]
        insert: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate entries until every chapter reaches the threshold.
    Fill {
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Check Strong's codes, required fields and cross-reference counts.
    Audit {
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Exit with an error when any issue is found.
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    info!("using dictionary at {}", cli.dictionary.display());
    info!("minimum entries per chapter: {}", cli.min_entries);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Analyze { json } => {
            let dictionary = load(&cli.dictionary)?;
            let grouping = Grouping::build(&dictionary);
            let analysis = Analysis::compute(dictionary.len(), &grouping, cli.min_entries);
            if json {
                serde_json::to_writer_pretty(&mut out, &analysis)?;
                writeln!(out)?;
            } else {
                report::write_analysis(&mut out, &dictionary, &analysis)?;
            }
        }
        Commands::Incomplete => {
            let dictionary = load(&cli.dictionary)?;
            let grouping = Grouping::build(&dictionary);
            let analysis = Analysis::compute(dictionary.len(), &grouping, cli.min_entries);
            report::write_incomplete(&mut out, &analysis)?;
        }
        Commands::Generate {
            book,
            chapter,
            verse,
            word,
            record,
            strong,
            original,
            transliteration,
            root_meaning,
            theme,
            description,
            insert,
            output,
        } => {
            let overrides = EntryOverrides {
                record: record.as_deref(),
                strong: strong.as_deref(),
                original: original.as_deref(),
                transliteration: transliteration.as_deref(),
                root_meaning: root_meaning.as_deref(),
                theme: theme.as_deref(),
                book_description: description.as_deref(),
            };
            let request = EntryRequest::resolve(&book, chapter, &verse, &word, &overrides)?;
            let key = request.key().context("building the entry key")?;
            info!("generating {} entry for {key}", request.testament());
            let entry = generate_entry(&request);
            serde_json::to_writer_pretty(&mut out, &entry)?;
            writeln!(out)?;

            if insert {
                let mut dictionary = load(&cli.dictionary)?;
                if !dictionary.insert_new(key.clone(), entry.to_value()?) {
                    bail!("{key} already exists in {}", cli.dictionary.display());
                }
                dictionary.save(output.as_ref().unwrap_or(&cli.dictionary))?;
            }
        }
        Commands::Fill { dry_run, output } => {
            let mut dictionary = load(&cli.dictionary)?;
            let plan = {
                let grouping = Grouping::build(&dictionary);
                let analysis = Analysis::compute(dictionary.len(), &grouping, cli.min_entries);
                FillPlan::build(&dictionary, &grouping, &analysis)
            };

            if dry_run || plan.is_empty() {
                report::write_fill_plan(&mut out, &plan, false)?;
            } else {
                plan.apply(&mut dictionary)?;
                dictionary.save(output.as_ref().unwrap_or(&cli.dictionary))?;
                report::write_fill_plan(&mut out, &plan, true)?;
            }
        }
        Commands::Audit { json, strict } => {
            let dictionary = load(&cli.dictionary)?;
            let audit = AuditReport::run(&dictionary);
            if json {
                serde_json::to_writer_pretty(&mut out, &audit)?;
                writeln!(out)?;
            } else {
                report::write_audit(&mut out, &audit)?;
            }
            if strict && !audit.is_clean() {
                bail!("audit found {} issues", audit.total_issues);
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<Dictionary> {
    let start = Instant::now();
    let dictionary = Dictionary::load(path)
        .with_context(|| format!("loading dictionary from {}", path.display()))?;
    info!("dictionary loaded in {} ms", start.elapsed().as_millis());
    Ok(dictionary)
}

fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .init();
}

/// `RUST_LOG`-style directives, falling back to `info` when unset or invalid.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
