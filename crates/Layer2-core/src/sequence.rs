//! Sequence - 반복 루프 기반 항 계산
//!
//! 누산기 세 개(`t1`, `t2`, `next_term`)를 한 칸씩 밀면서 N번째 항을 구합니다.
//! 시작값은 `t1 = 0`, `t2 = 1`, `next_term = t2` 이고, 루프는 3..=n 구간만 돕니다.
//! 그래서 n = 1, n = 2 는 루프 없이 1을 반환합니다.
//!
//! ```text
//! n        : 0  1  2  3  4  5  6  7
//! compute  : 0  1  1  2  3  5  8  13
//! ```

use fib_foundation::{Error, OverflowPolicy, Result};
use num_bigint::BigUint;
use num_traits::{One, PrimInt, Unsigned, Zero};

/// 임의 정밀도로 N번째 항 계산
///
/// `n <= 0` 이면 0. 실패하지 않습니다.
pub fn compute(n: i64) -> BigUint {
    if n <= 0 {
        return BigUint::zero();
    }

    let mut t2 = BigUint::one();
    let mut next_term = BigUint::one();
    for _ in 3..=n {
        let t1 = std::mem::replace(&mut t2, next_term);
        next_term = &t1 + &t2;
    }
    next_term
}

/// 고정 폭 정수로 N번째 항 계산
///
/// 루프는 [`compute`]와 같고, 덧셈이 `T`의 범위를 넘으면 `policy`에 따라
/// `Error::Overflow`를 반환하거나 `T::max_value()`로 고정합니다.
pub fn compute_fixed<T>(n: i64, policy: OverflowPolicy) -> Result<T>
where
    T: PrimInt + Unsigned,
{
    if n <= 0 {
        return Ok(T::zero());
    }

    let mut t2 = T::one();
    let mut next_term = T::one();
    for _ in 3..=n {
        let t1 = t2;
        t2 = next_term;
        next_term = match t1.checked_add(&t2) {
            Some(sum) => sum,
            None => return overflowed(n, policy),
        };
    }
    Ok(next_term)
}

/// 비트 폭
pub fn width_of<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

// 항은 단조 증가하므로 한 번 넘치면 이후 항도 전부 넘친다
fn overflowed<T: PrimInt>(n: i64, policy: OverflowPolicy) -> Result<T> {
    let width = width_of::<T>();
    match policy {
        OverflowPolicy::Error => Err(Error::overflow(n, width)),
        OverflowPolicy::Saturate => {
            tracing::warn!("Term {} exceeds {} bits, saturating", n, width);
            Ok(T::max_value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive() {
        assert_eq!(compute(0), BigUint::zero());
        assert_eq!(compute(-5), BigUint::zero());
        assert_eq!(compute(i64::MIN), BigUint::zero());
    }

    #[test]
    fn test_loop_skip_boundary() {
        assert_eq!(compute(1), BigUint::one());
        assert_eq!(compute(2), BigUint::one());
    }

    #[test]
    fn test_small_terms() {
        let terms: Vec<u32> = (0..=10)
            .map(|n| u32::try_from(compute(n)).unwrap())
            .collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn test_fixed_matches_unbounded() {
        for n in -3..=93 {
            let fixed: u64 = compute_fixed(n, OverflowPolicy::Error).unwrap();
            assert_eq!(BigUint::from(fixed), compute(n), "n = {}", n);
        }
    }

    #[test]
    fn test_fixed_overflow_error() {
        let err = compute_fixed::<u64>(94, OverflowPolicy::Error).unwrap_err();
        assert!(matches!(err, Error::Overflow { n: 94, width: 64 }));

        let err = compute_fixed::<u8>(20, OverflowPolicy::Error).unwrap_err();
        assert!(matches!(err, Error::Overflow { n: 20, width: 8 }));
    }

    #[test]
    fn test_fixed_overflow_saturate() {
        let value: u64 = compute_fixed(94, OverflowPolicy::Saturate).unwrap();
        assert_eq!(value, u64::MAX);

        // 큰 n도 첫 overflow 시점에 바로 끝난다
        let value: u32 = compute_fixed(i64::MAX, OverflowPolicy::Saturate).unwrap();
        assert_eq!(value, u32::MAX);
    }

    #[test]
    fn test_u8_boundary() {
        // 233 은 u8 에 들어가고 377 은 넘친다
        assert_eq!(compute_fixed::<u8>(13, OverflowPolicy::Error).unwrap(), 233);
        assert!(compute_fixed::<u8>(14, OverflowPolicy::Error).is_err());
    }

    #[test]
    fn test_width_of() {
        assert_eq!(width_of::<u8>(), 8);
        assert_eq!(width_of::<u64>(), 64);
        assert_eq!(width_of::<u128>(), 128);
    }
}
