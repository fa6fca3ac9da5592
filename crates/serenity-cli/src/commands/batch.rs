//! Batch command implementation
//!
//! Generates every `*.json` request in a directory. Each synthesis runs on
//! the blocking pool, at most `jobs` at a time. A request that outlives its
//! time budget has its cancel token set and stops at the next stage
//! boundary. Ctrl-C cancels everything still running.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use serenity_backend_audio::CancelToken;
use serenity_spec::SynthesisConfig;
use tokio::runtime::Builder;
use tokio::sync::Semaphore;

use super::generate::{produce_clip, ClipError, FILE_PREFIX};
use super::json_output::{error_codes, BatchItem, BatchOutput, JsonError};
use super::{EXIT_GENERATION_ERROR, EXIT_OK, EXIT_REQUEST_ERROR};
use crate::input::{apply_seed, load_config, load_request};

/// Batch settings shared by every request.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Output directory
    pub out_dir: PathBuf,
    /// Synthesis config
    pub config: SynthesisConfig,
    /// Seed override for every request
    pub seed: Option<u32>,
    /// Maximum concurrent syntheses
    pub jobs: usize,
    /// Per-request time budget
    pub timeout: Option<Duration>,
}

/// Outcome of one request plus its exit status.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Reported result
    pub item: BatchItem,
    /// 0, 1, or 2
    pub status: u8,
}

/// Run the batch command
///
/// # Returns
/// Exit code: 0 if every request succeeded, otherwise the worst status seen
pub fn run(
    dir: &str,
    out_root: Option<&str>,
    config_path: Option<&str>,
    seed: Option<u32>,
    jobs: usize,
    timeout_secs: Option<u64>,
    json_output: bool,
) -> Result<ExitCode> {
    let requests = collect_requests(Path::new(dir))?;
    let options = BatchOptions {
        out_dir: PathBuf::from(out_root.unwrap_or(".")),
        config: load_config(config_path, seed)?,
        seed,
        jobs: jobs.max(1),
        timeout: timeout_secs.map(Duration::from_secs),
    };

    if !json_output {
        println!(
            "{} {} request(s) from {} ({} job(s))",
            "Batch:".cyan().bold(),
            requests.len(),
            dir,
            options.jobs
        );
    }

    let start = Instant::now();
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create runtime")?;
    let outcomes = runtime.block_on(run_batch(requests, options));

    let status = outcomes.iter().map(|o| o.status).max().unwrap_or(EXIT_OK);
    let items: Vec<BatchItem> = outcomes.into_iter().map(|o| o.item).collect();
    let succeeded = items.iter().filter(|i| i.success).count();

    if json_output {
        let output = BatchOutput {
            generated_at: Local::now().to_rfc3339(),
            total: items.len(),
            succeeded,
            failed: items.len() - succeeded,
            items,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&items, succeeded, start.elapsed());
    }

    Ok(ExitCode::from(status))
}

/// Lists `*.json` files in a directory, sorted by name.
pub fn collect_requests(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read request directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Generates every request, returning outcomes in input order.
pub async fn run_batch(requests: Vec<PathBuf>, options: BatchOptions) -> Vec<BatchOutcome> {
    let semaphore = Arc::new(Semaphore::new(options.jobs));
    let options = Arc::new(options);
    let tokens: Vec<CancelToken> = requests.iter().map(|_| CancelToken::new()).collect();

    let interrupt = {
        let tokens = tokens.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("interrupted, cancelling remaining requests");
                tokens.iter().for_each(CancelToken::cancel);
            }
        })
    };

    let handles: Vec<_> = requests
        .into_iter()
        .zip(tokens)
        .map(|(path, token)| {
            let semaphore = Arc::clone(&semaphore);
            let options = Arc::clone(&options);
            tokio::spawn(async move {
                // The semaphore is never closed.
                let _permit = semaphore.acquire_owned().await.ok();
                run_one(path, &options, token).await
            })
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        outcomes.push(match handle.await {
            Ok(outcome) => outcome,
            Err(e) => failure(
                "<unknown>".to_string(),
                JsonError::new(error_codes::TASK_FAILED, e.to_string()),
                EXIT_GENERATION_ERROR,
            ),
        });
    }

    interrupt.abort();
    outcomes
}

async fn run_one(path: PathBuf, options: &BatchOptions, token: CancelToken) -> BatchOutcome {
    let label = path.display().to_string();

    let request = match load_request(&path) {
        Ok(request) => apply_seed(request, options.seed),
        Err(e) => {
            return failure(
                label,
                JsonError::new(error_codes::REQUEST_LOAD, format!("{:#}", e)),
                EXIT_REQUEST_ERROR,
            )
        }
    };

    let stem = format!(
        "{}_{}",
        FILE_PREFIX,
        path.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default()
    );
    let config = options.config.clone();
    let out_dir = options.out_dir.clone();
    let worker_token = token.clone();

    tracing::debug!(request = %label, "dispatching");
    let mut handle = tokio::task::spawn_blocking(move || {
        produce_clip(&request, &config, &out_dir, &stem, &worker_token)
    });

    let mut timed_out = false;
    let joined = match options.timeout {
        Some(limit) => match tokio::time::timeout(limit, &mut handle).await {
            Ok(joined) => joined,
            Err(_) => {
                tracing::warn!(request = %label, "time budget exceeded, cancelling");
                timed_out = true;
                token.cancel();
                handle.await
            }
        },
        None => handle.await,
    };

    match joined {
        Ok(Ok(clip)) => BatchOutcome {
            item: BatchItem {
                request: label,
                success: true,
                clip: Some(clip.record),
                error: None,
            },
            status: EXIT_OK,
        },
        Ok(Err(ClipError::Generation(_))) if timed_out => failure(
            label,
            JsonError::new(error_codes::TIMEOUT, "synthesis exceeded its time budget"),
            EXIT_GENERATION_ERROR,
        ),
        Ok(Err(err)) => {
            let status = err.exit_status();
            let error = err
                .to_json_errors()
                .into_iter()
                .next()
                .unwrap_or_else(|| JsonError::new(error_codes::TASK_FAILED, err.to_string()));
            failure(label, error, status)
        }
        Err(e) => failure(
            label,
            JsonError::new(error_codes::TASK_FAILED, e.to_string()),
            EXIT_GENERATION_ERROR,
        ),
    }
}

fn failure(request: String, error: JsonError, status: u8) -> BatchOutcome {
    BatchOutcome {
        item: BatchItem {
            request,
            success: false,
            clip: None,
            error: Some(error),
        },
        status,
    }
}

fn print_summary(items: &[BatchItem], succeeded: usize, elapsed: Duration) {
    for item in items {
        match (&item.clip, &item.error) {
            (Some(clip), _) => println!("  {} {} -> {}", "+".green(), item.request, clip.wav_path),
            (None, Some(error)) => println!(
                "  {} {} [{}] {}",
                "x".red(),
                item.request,
                error.code,
                error.message
            ),
            (None, None) => {}
        }
    }

    let failed = items.len() - succeeded;
    let verdict = if failed == 0 {
        "SUCCESS".green().bold()
    } else {
        "FAILED".red().bold()
    };
    println!(
        "\n{} {} succeeded, {} failed ({:.1}s)",
        verdict,
        succeeded,
        failed,
        elapsed.as_secs_f64()
    );
}
