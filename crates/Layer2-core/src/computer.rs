//! FibonacciComputer - 산술 모드에 따른 항 계산
//!
//! 설정된 [`Arithmetic`] 모드로 계산하고 결과를 항상 `BigUint`로 돌려줍니다.

use crate::sequence::{compute, compute_fixed};
use fib_foundation::{Arithmetic, FibConfig, Result};
use num_bigint::BigUint;

/// N번째 항 계산기
///
/// 내부 상태가 없으므로 같은 `n`에 대해 항상 같은 결과를 냅니다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FibonacciComputer {
    arithmetic: Arithmetic,
}

impl FibonacciComputer {
    pub fn new(arithmetic: Arithmetic) -> Self {
        Self { arithmetic }
    }

    pub fn from_config(config: &FibConfig) -> Self {
        Self::new(config.arithmetic)
    }

    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    /// N번째 항 계산
    ///
    /// 무제한 모드에서는 실패하지 않습니다. 고정 폭 모드에서는 overflow 정책이
    /// `Error`일 때만 `Error::Overflow`가 날 수 있습니다.
    pub fn evaluate(&self, n: i64) -> Result<BigUint> {
        tracing::debug!("Computing term {} ({:?})", n, self.arithmetic);

        let value = match self.arithmetic {
            Arithmetic::Unbounded => compute(n),
            Arithmetic::Fixed64 { policy } => BigUint::from(compute_fixed::<u64>(n, policy)?),
            Arithmetic::Fixed128 { policy } => BigUint::from(compute_fixed::<u128>(n, policy)?),
        };

        tracing::debug!("Term {} has {} bits", n, value.bits());
        Ok(value)
    }
}
