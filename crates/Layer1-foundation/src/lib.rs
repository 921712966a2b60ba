//! # fib-foundation
//!
//! Foundation layer for fibcalc:
//! - Error: 공통 에러 타입 (`Error`, `Result`)
//! - Config: 계산 설정 (FibConfig, Arithmetic, OverflowPolicy), JSON 변환

pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{Arithmetic, FibConfig, OverflowPolicy};
