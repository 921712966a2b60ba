//! fib-core: Core computation for fibcalc
//!
//! Layer2 - 항 계산 레이어
//!
//! # 주요 모듈
//!
//! - `sequence`: 반복 루프 (`compute`, `compute_fixed`)
//! - `computer`: 산술 모드를 적용하는 `FibonacciComputer`
//!
//! # 사용 예시
//!
//! ```
//! use fib_core::{compute, FibonacciComputer};
//!
//! assert_eq!(compute(10).to_string(), "55");
//!
//! let computer = FibonacciComputer::default();
//! assert_eq!(computer.evaluate(123).unwrap().to_string(), "22698374052006863956975682");
//! ```

pub mod computer;
pub mod sequence;

// Re-exports: Computer
pub use computer::FibonacciComputer;

// Re-exports: Sequence
pub use sequence::{compute, compute_fixed, width_of};

// Re-exports: Foundation types used in the public API
pub use fib_foundation::{Arithmetic, Error, FibConfig, OverflowPolicy, Result};
