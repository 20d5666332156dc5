use anyhow::Context;
use clap::Parser;
use module_detect::utils::{logger, validation::Validate};
use module_detect::{DetectError, Finding, KeywordScanner, LocalStorage, ScanConfig};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "module-scan")]
#[command(about = "Highlight pandas and numpy usage in Python files and notebooks")]
struct Args {
    /// Files to scan (.py or .ipynb)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Path to a TOML file with custom keyword rules
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print findings as a JSON array
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> Result<ScanConfig, DetectError> {
    let config = match &args.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            ScanConfig::from_file(path)?
        }
        None => ScanConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn render(findings: &[Finding], json: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    if json {
        serde_json::to_writer_pretty(&mut writer, findings).context("failed to serialise findings")?;
        writeln!(writer)?;
    } else {
        for finding in findings {
            writeln!(writer, "{}", finding)?;
        }
    }

    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 載入並驗證配置
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            return ExitCode::FAILURE;
        }
    };

    let scanner = match KeywordScanner::from_config(&config) {
        Ok(scanner) => scanner,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            return ExitCode::FAILURE;
        }
    };

    let storage = LocalStorage::default();
    let mut findings = Vec::new();
    let mut failed = 0usize;

    for path in &args.files {
        match scanner.scan_file(&storage, path) {
            Ok(found) => findings.extend(found),
            Err(e) => {
                failed += 1;
                tracing::warn!("⚠️ Skipping {}: {}", path.display(), e);
                eprintln!("❌ {}: {}", path.display(), e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
    }

    tracing::info!(
        files = args.files.len(),
        failed,
        findings = findings.len(),
        "scan finished"
    );

    if let Err(e) = render(&findings, args.json) {
        tracing::error!("❌ {:#}", e);
        return ExitCode::FAILURE;
    }

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
