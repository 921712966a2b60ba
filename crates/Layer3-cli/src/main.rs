//! fibcalc CLI - Main entry point
//!
//! 고정 입력(n = 123)의 항을 계산해 stdout에 한 줄로 출력합니다.
//! 로그는 stderr로만 나갑니다 (`RUST_LOG`, 기본 `warn`).

use anyhow::Context;
use fib_core::FibonacciComputer;
use fib_foundation::FibConfig;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = FibConfig::default();
    let computer = FibonacciComputer::from_config(&config);

    let value = computer
        .evaluate(config.input)
        .with_context(|| format!("Failed to compute term {}", config.input))?;
    tracing::info!("Computed term {}", config.input);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", value).context("Failed to write result")?;

    Ok(())
}
