//! Config - 계산 설정 관리
//!
//! - `fib.rs` - FibConfig, 산술 모드, overflow 정책

mod fib;

pub use fib::{Arithmetic, FibConfig, OverflowPolicy};
