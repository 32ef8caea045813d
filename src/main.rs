//! Sheetlint: Template Quality Analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use sheetlint::analyzer::QualityAnalyzer;
use sheetlint::config::{build_ignore_set, is_ignored, load_config, CONFIG_FILENAME};
use sheetlint::reporter::{ConsoleReporter, JsonReporter};
use sheetlint::template::load_template;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use walkdir::WalkDir;

/// Sheetlint: Quality Analyzer for OMR answer-sheet templates
#[derive(Parser, Debug)]
#[command(name = "sheetlint")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Template file or directory to analyze (omit when using a subcommand)
    path: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Minimum overall score (exit 1 if any template scores below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Exam type preset (e.g. highStakes, quickQuiz); overrides config
    #[arg(long, short)]
    exam_type: Option<String>,

    /// Quiet mode (one line per template)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output (include suggestions)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .sheetlintrc.json in the target
    /// directory and its parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run analysis in parallel (default for many templates)
    #[arg(long)]
    parallel: bool,

    /// Number of parallel threads (default: number of CPU cores)
    #[arg(long, value_name = "N")]
    jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .sheetlintrc.json with sensible defaults
    Init {
        /// Minimum overall score (e.g. 70)
        #[arg(long)]
        threshold: Option<f64>,

        /// Default exam type: highStakes, quickQuiz
        #[arg(long)]
        exam_type: Option<String>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init {
        threshold,
        exam_type,
        dir,
    }) = args.command
    {
        return run_init(threshold, exam_type.as_deref(), dir.as_deref());
    }

    let Some(path) = args.path.clone() else {
        anyhow::bail!("No template file or directory given (see --help)");
    };
    if !path.exists() {
        anyhow::bail!("Path not found: {}", path.display());
    }

    // Resolve work directory for config search
    let work_dir = if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path.as_path()
    };

    // Load config (CLI flags override config file)
    let config = load_config(work_dir, args.config.as_deref())?
        .merge_with_cli(args.threshold, args.exam_type.clone());

    // Build ignore set from config
    let ignore_set = if config.ignore.is_empty() {
        None
    } else {
        Some(build_ignore_set(&config.ignore)?)
    };

    let patterns = config.get_template_patterns();
    let files = collect_template_files(&path, ignore_set.as_ref(), &patterns)?;
    if files.is_empty() {
        eprintln!("{}: No template files found", "Warning".yellow());
        return Ok(ExitCode::from(2));
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let mut documents = Vec::with_capacity(files.len());
    for file in &files {
        let mut document =
            load_template(file).with_context(|| format!("Failed to load {}", file.display()))?;
        // Config-level exam type applies to templates without their own
        if document.exam_type.is_none() {
            document.exam_type = config.exam_type.clone();
        }
        documents.push(document);
    }

    let engine = QualityAnalyzer::with_provider(config.standards_provider());
    let use_parallel = args.parallel || documents.len() > 10;
    let results = if use_parallel {
        engine.analyze_parallel(&documents)
    } else {
        engine.analyze_many(&documents)
    };

    let stats = QualityAnalyzer::aggregate_stats(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &stats));
        }
    } else {
        let reporter = if args.verbose {
            ConsoleReporter::new().verbose()
        } else {
            ConsoleReporter::new()
        };
        if args.quiet {
            for (file, result) in files.iter().zip(&results) {
                reporter.report_quiet(&file.display().to_string(), result);
            }
        } else if results.len() == 1 {
            reporter.report(&files[0].display().to_string(), &results[0]);
        } else {
            let named: Vec<(String, _)> = files
                .iter()
                .zip(results.iter())
                .map(|(f, r)| (f.display().to_string(), r.clone()))
                .collect();
            reporter.report_many(&named, &stats);
        }
    }

    // Threshold gating
    if let Some(threshold) = config.threshold {
        let below: Vec<&PathBuf> = files
            .iter()
            .zip(&results)
            .filter(|(_, r)| r.overall.score < threshold)
            .map(|(f, _)| f)
            .collect();
        if !below.is_empty() {
            if !args.quiet && !args.json {
                eprintln!(
                    "{}: {} template(s) below threshold {}",
                    "Failed".red().bold(),
                    below.len(),
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Collect template files from a path (file or directory walk)
fn collect_template_files(
    path: &Path,
    ignore_set: Option<&globset::GlobSet>,
    patterns: &[&str],
) -> Result<Vec<PathBuf>> {
    let matches_pattern = |p: &Path| {
        let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
        patterns.iter().any(|suffix| name.ends_with(suffix))
    };

    if path.is_file() {
        // Explicit file: analyze regardless of suffix
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
        let p = entry.path();
        if !entry.file_type().is_file() || !matches_pattern(p) {
            continue;
        }
        if let Some(set) = ignore_set {
            if is_ignored(p, set) {
                continue;
            }
        }
        files.push(p.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Create a starter config file
fn run_init(threshold: Option<f64>, exam_type: Option<&str>, dir: Option<&Path>) -> Result<ExitCode> {
    let dir = dir.unwrap_or(Path::new("."));
    let target = dir.join(CONFIG_FILENAME);
    if target.exists() {
        anyhow::bail!("{} already exists", target.display());
    }

    let config = serde_json::json!({
        "threshold": threshold.unwrap_or(70.0),
        "examType": exam_type.unwrap_or("quickQuiz"),
        "ignore": ["**/drafts/**"],
        "standards": {},
    });
    std::fs::write(&target, serde_json::to_string_pretty(&config)?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    println!("{} Created {}", "✓".green(), target.display());
    Ok(ExitCode::SUCCESS)
}
