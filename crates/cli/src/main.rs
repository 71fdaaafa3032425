//! finnsyll CLI: Finnish syllabification and compound splitting.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use finnsyll_core::{inspect, Candidate, FinnSyll, FinnSyllConfig};

// ─── Top-level CLI ───────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "finnsyll",
    about = "Finnish syllabifier with compound segmentation",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Syllabify words
    Syllabify(SyllabifyArgs),
    /// Insert '=' at inferred compound boundaries
    Split(SplitArgs),
    /// Report whether each word is a compound
    Compound(SplitArgs),
    /// Syllabify running text (stdin when no text is given)
    Sent(SentArgs),
    /// Show matcher hits and constraint results for a word
    Inspect(InspectArgs),
}

// ─── Shared arguments (embedded in each subcommand) ──────────────

#[derive(Parser, Debug)]
struct SharedArgs {
    /// Directory holding finnsyll-morphs.txt and finnsyll-ngrams.json
    /// (default: $FINNSYLL_DATA_DIR or ~/.local/share/finnsyll)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Syllabify ───────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct SyllabifyArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Words to syllabify
    #[arg(required = true)]
    words: Vec<String>,

    /// Do not split unmarked compounds (no resources needed)
    #[arg(long, default_value_t = false)]
    no_split: bool,

    /// Print only the most preferred variant
    #[arg(long, default_value_t = false)]
    no_variation: bool,

    /// Show which rules applied
    #[arg(long, default_value_t = false)]
    rules: bool,

    /// Mark primary (') and secondary (`) stress
    #[arg(long, default_value_t = false)]
    stress: bool,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ─── Split / Compound ────────────────────────────────────────────

#[derive(Parser, Debug)]
struct SplitArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Words to segment
    #[arg(required = true)]
    words: Vec<String>,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ─── Sent ────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct SentArgs {
    #[command(flatten)]
    shared: SharedArgs,

    /// Text to syllabify
    text: Option<String>,

    /// Do not split unmarked compounds (no resources needed)
    #[arg(long, default_value_t = false)]
    no_split: bool,

    /// Mark primary (') and secondary (`) stress
    #[arg(long, default_value_t = false)]
    stress: bool,
}

// ─── Inspect ─────────────────────────────────────────────────────

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Word to inspect
    word: String,

    /// Print JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Show verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

// ─── Main ────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    // Init logging
    let log_level = match &cli.command {
        Command::Syllabify(a) if a.shared.verbose => "debug",
        Command::Split(a) | Command::Compound(a) if a.shared.verbose => "debug",
        Command::Sent(a) if a.shared.verbose => "debug",
        Command::Inspect(a) if a.verbose => "debug",
        _ => "info",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Command::Syllabify(args) => run_syllabify(args),
        Command::Split(args) => run_split(args),
        Command::Compound(args) => run_compound(args),
        Command::Sent(args) => run_sent(args),
        Command::Inspect(args) => run_inspect(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

// ─── Helpers ─────────────────────────────────────────────────────

/// Build the facade, loading segmentation resources only when needed.
fn build_finnsyll(
    shared: &SharedArgs,
    config: FinnSyllConfig,
    with_segmenter: bool,
) -> Result<FinnSyll> {
    let config = FinnSyllConfig {
        data_dir: shared.data_dir.clone(),
        ..config
    };
    if !with_segmenter {
        return Ok(FinnSyll::without_segmenter(config));
    }
    FinnSyll::new(config).context(concat!(
        "Failed to load segmentation resources ",
        "(use --data-dir, or --no-split to skip compound splitting)",
    ))
}

/// Render one candidate as text, with its rules in brackets when present.
fn format_candidate(c: &Candidate) -> String {
    match &c.rules {
        Some(rules) => format!("{} [{}]", c.word, rules),
        None => c.word.clone(),
    }
}

// ─── Syllabify runner ────────────────────────────────────────────

fn run_syllabify(args: SyllabifyArgs) -> Result<()> {
    let config = FinnSyllConfig {
        split_compounds: !args.no_split,
        variation: !args.no_variation,
        track_rules: args.rules,
        stress: args.stress,
        data_dir: None,
    };
    let finnsyll = build_finnsyll(&args.shared, config, !args.no_split)?;
    log::debug!("{:?}", finnsyll);

    if args.json {
        let out: Vec<serde_json::Value> = args
            .words
            .iter()
            .map(|w| {
                serde_json::json!({
                    "word": w,
                    "candidates": finnsyll.syllabify(w),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    for word in &args.words {
        let candidates: Vec<String> = finnsyll
            .syllabify(word)
            .iter()
            .map(format_candidate)
            .collect();
        println!("{}\t{}", word, candidates.join("\t"));
    }
    Ok(())
}

// ─── Split / Compound runners ────────────────────────────────────

fn run_split(args: SplitArgs) -> Result<()> {
    let finnsyll = build_finnsyll(&args.shared, FinnSyllConfig::default(), true)?;

    for word in &args.words {
        let seg = finnsyll
            .segmentation(word)
            .with_context(|| format!("Failed to split {:?}", word))?;
        if args.json {
            println!("{}", serde_json::to_string(&seg)?);
        } else {
            println!("{}", seg.split);
        }
    }
    Ok(())
}

fn run_compound(args: SplitArgs) -> Result<()> {
    let finnsyll = build_finnsyll(&args.shared, FinnSyllConfig::default(), true)?;

    for word in &args.words {
        let seg = finnsyll
            .segmentation(word)
            .with_context(|| format!("Failed to split {:?}", word))?;
        if args.json {
            println!("{}", serde_json::to_string(&seg)?);
        } else {
            println!("{}\t{}", word, seg.is_complex);
        }
    }
    Ok(())
}

// ─── Sent runner ─────────────────────────────────────────────────

fn run_sent(args: SentArgs) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };
    if text.trim().is_empty() {
        bail!("No text to syllabify");
    }

    let config = FinnSyllConfig {
        split_compounds: !args.no_split,
        stress: args.stress,
        ..Default::default()
    };
    let finnsyll = build_finnsyll(&args.shared, config, !args.no_split)?;

    print!("{}", finnsyll.syllabify_sent(&text));
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

// ─── Inspect runner ──────────────────────────────────────────────

fn run_inspect(args: InspectArgs) -> Result<()> {
    let report = inspect(&args.word);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("word: {}", report.word);
    for (name, hits) in &report.matches {
        let shown: Vec<String> = hits
            .iter()
            .map(|(start, text)| format!("{}@{}", text, start))
            .collect();
        let shown = if shown.is_empty() {
            "-".to_string()
        } else {
            shown.join(" ")
        };
        println!("  {:<22} {}", name, shown);
    }
    for (name, ok) in &report.constraints {
        println!("  {:<22} {}", name, if *ok { "ok" } else { "violated" });
    }
    println!("  {:<22} {}", "foreign", report.foreign);
    Ok(())
}
