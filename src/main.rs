//! CLI entry point for modernapi

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use modernapi::advice::{
    API_KEY_ENV, AdviceConfig, DEFAULT_ADVICE_LIMIT, DEFAULT_MODEL, OpenAiAdvisor, advise_routes,
};
use modernapi::report::{FORMAL_NAME, RULESET, TOOL_NAME, TOOL_VERSION};
use modernapi::{
    AuditError, AuditReport, ColorMode, OutputConfig, ScanConfig, print_summary, write_json,
    write_markdown,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const EXIT_OK: i32 = 0;
const EXIT_SCORE_BELOW_THRESHOLD: i32 = 1;
const EXIT_INVALID_REPO: i32 = 2;
const EXIT_INTERNAL_ERROR: i32 = 3;

const DEFAULT_REPORT_PATH: &str = "api_modernization_report.md";

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "MODERNAPI_LOG";

#[derive(Parser, Debug)]
#[command(name = "modernapi")]
#[command(about = "ModernAPI - FastAPI modernization auditor")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by MODERNAPI_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a FastAPI repository
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Path to the FastAPI project directory
    repo_path: PathBuf,

    /// Max number of routes to get AI advice for
    #[arg(long = "ai-limit", default_value_t = DEFAULT_ADVICE_LIMIT)]
    ai_limit: usize,

    /// Disable AI-powered suggestions
    #[arg(long = "no-ai")]
    no_ai: bool,

    /// OpenAI model for advice
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Timeout for each advice request (e.g., 30s, 2m)
    #[arg(long = "ai-timeout", value_name = "DURATION", default_value = "60s")]
    ai_timeout: String,

    /// Output Markdown report path
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Also save JSON report to this path
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Only show score summary, no report
    #[arg(long = "summary-only")]
    summary_only: bool,

    /// Exit with error if score is below this value
    #[arg(long = "fail-under", value_name = "SCORE")]
    fail_under: Option<f64>,

    /// Source file extension to scan (can be used multiple times, default: py)
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Ignore files and directories matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Skip files excluded by .gitignore and .ignore files
    #[arg(long = "gitignore")]
    gitignore: bool,

    /// Number of parallel workers for route extraction
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Skip files larger than SIZE. Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-file-size", value_name = "SIZE")]
    max_file_size: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Parse a duration string like "30s", "2m" using humantime.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match cli.command {
        Command::Analyze(args) => analyze(args),
    };
    process::exit(code);
}

fn analyze(args: AnalyzeArgs) -> i32 {
    println!("{} v{}", TOOL_NAME, TOOL_VERSION);
    println!("{}", FORMAL_NAME);
    println!("Ruleset: {}\n", RULESET);

    let max_file_size = match args.max_file_size.as_deref().map(parse_file_size).transpose() {
        Ok(size) => size,
        Err(e) => {
            eprintln!(
                "modernapi: invalid --max-file-size '{}': {}",
                args.max_file_size.as_deref().unwrap_or_default(),
                e
            );
            return EXIT_INTERNAL_ERROR;
        }
    };

    let ai_timeout = match parse_duration_string(&args.ai_timeout) {
        Ok(timeout) => timeout,
        Err(e) => {
            eprintln!("modernapi: invalid --ai-timeout '{}': {}", args.ai_timeout, e);
            return EXIT_INTERNAL_ERROR;
        }
    };

    let repo_path = match args.repo_path.canonicalize() {
        Ok(path) if path.is_dir() => path,
        _ => {
            eprintln!(
                "modernapi: invalid repository path '{}'",
                args.repo_path.display()
            );
            return EXIT_INVALID_REPO;
        }
    };

    let scan_config = ScanConfig {
        respect_gitignore: args.gitignore,
        ignore_patterns: args.ignore.clone(),
        parallel_workers: args.jobs,
        max_file_size,
        ..Default::default()
    };
    let scan_config = if args.extensions.is_empty() {
        scan_config
    } else {
        ScanConfig {
            extensions: args.extensions.clone(),
            ..scan_config
        }
    };

    println!("Scanning: {}\n", repo_path.display());

    let mut report = match AuditReport::from_repository(&repo_path, &scan_config) {
        Ok(report) => report,
        Err(AuditError::NoRoutes) => {
            eprintln!("modernapi: no FastAPI routes detected");
            return EXIT_INTERNAL_ERROR;
        }
        Err(AuditError::InvalidRoot { path }) => {
            eprintln!("modernapi: invalid repository path '{}'", path.display());
            return EXIT_INVALID_REPO;
        }
        Err(e) => {
            eprintln!("modernapi: {}", e);
            return EXIT_INTERNAL_ERROR;
        }
    };

    let output_config = OutputConfig::from_color_mode(args.color);
    if let Err(e) = print_summary(&report, output_config.use_color) {
        eprintln!("modernapi: error writing output: {}", e);
        return EXIT_INTERNAL_ERROR;
    }

    if args.summary_only {
        return EXIT_OK;
    }

    if !args.no_ai {
        let advice_config = AdviceConfig {
            model: args.model.clone(),
            timeout: ai_timeout,
            ..Default::default()
        };
        match OpenAiAdvisor::from_env(advice_config) {
            Ok(advisor) => {
                println!("Generating AI advice (limit: {})...", args.ai_limit);
                let advice = advise_routes(&report.scored_routes(), &advisor, args.ai_limit);
                report.attach_advice(advice);
            }
            Err(e) => {
                tracing::debug!(error = %e, "advisor unavailable");
                eprintln!(
                    "modernapi: warning: {} not set, AI advice disabled",
                    API_KEY_ENV
                );
            }
        }
    }

    if let Err(e) = write_markdown(&report, &args.output) {
        eprintln!(
            "modernapi: cannot write '{}': {}",
            args.output.display(),
            e
        );
        return EXIT_INTERNAL_ERROR;
    }
    println!("Markdown report: {}", args.output.display());

    if let Some(ref json_path) = args.json {
        if let Err(e) = write_json(&report, json_path) {
            eprintln!("modernapi: cannot write '{}': {}", json_path.display(), e);
            return EXIT_INTERNAL_ERROR;
        }
        println!("JSON report: {}", json_path.display());
    }

    if let Some(threshold) = args.fail_under {
        if report.score < threshold {
            eprintln!(
                "modernapi: score {:.1} is below threshold ({})",
                report.score, threshold
            );
            return EXIT_SCORE_BELOW_THRESHOLD;
        }
    }

    println!("\nAudit complete!");
    EXIT_OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_size() {
        assert_eq!(parse_file_size("100"), Ok(100));
        assert_eq!(parse_file_size("5K"), Ok(5 * 1024));
        assert_eq!(parse_file_size("5kb"), Ok(5 * 1024));
        assert_eq!(parse_file_size("2M"), Ok(2 * 1024 * 1024));
        assert_eq!(parse_file_size(" 1G "), Ok(1024 * 1024 * 1024));
        assert!(parse_file_size("lots").is_err());
    }

    #[test]
    fn test_parse_file_size_overflow() {
        assert!(parse_file_size("99999999999G").is_err());
        assert!(parse_file_size(&u64::MAX.to_string()).is_ok());
        assert!(parse_file_size(&format!("{}K", u64::MAX)).is_err());
    }

    #[test]
    fn test_parse_duration_string() {
        assert_eq!(parse_duration_string("30s"), Ok(Duration::from_secs(30)));
        assert_eq!(parse_duration_string("2m"), Ok(Duration::from_secs(120)));
        assert!(parse_duration_string("soon").is_err());
    }

    #[test]
    fn test_cli_parses_analyze_defaults() {
        let cli = Cli::try_parse_from(["modernapi", "analyze", "repo"]).unwrap();
        let Command::Analyze(args) = cli.command;
        assert_eq!(args.repo_path, PathBuf::from("repo"));
        assert_eq!(args.ai_limit, DEFAULT_ADVICE_LIMIT);
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.output, PathBuf::from(DEFAULT_REPORT_PATH));
        assert!(args.extensions.is_empty());
        assert!(!args.no_ai);
        assert_eq!(args.jobs, 0);
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["modernapi"]).is_err());
    }
}
