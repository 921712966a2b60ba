//! Fib Config - 계산 설정
//!
//! 입력 항 번호와 산술 모드(무제한 / 고정 폭)를 관리하는 FibConfig

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// 엔트리 포인트가 계산하는 항 번호
const DEFAULT_INPUT: i64 = 123;

const CURRENT_VERSION: u32 = 1;

// ============================================================================
// Overflow Policy
// ============================================================================

/// 고정 폭 정수가 넘칠 때의 처리 방식
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OverflowPolicy {
    /// `Error::Overflow` 반환
    #[default]
    Error,
    /// 해당 타입의 최대값으로 고정
    Saturate,
}

// ============================================================================
// Arithmetic
// ============================================================================

/// 산술 모드
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Arithmetic {
    /// 임의 정밀도 (BigUint)
    #[default]
    Unbounded,
    /// u64
    Fixed64 {
        #[serde(default)]
        policy: OverflowPolicy,
    },
    /// u128
    Fixed128 {
        #[serde(default)]
        policy: OverflowPolicy,
    },
}

impl Arithmetic {
    /// 고정 폭이면 비트 수, 무제한이면 None
    pub fn width(&self) -> Option<u32> {
        match self {
            Arithmetic::Unbounded => None,
            Arithmetic::Fixed64 { .. } => Some(64),
            Arithmetic::Fixed128 { .. } => Some(128),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, Arithmetic::Unbounded)
    }
}

// ============================================================================
// Fib Config
// ============================================================================

/// fibcalc 통합 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FibConfig {
    /// 버전 (마이그레이션용)
    #[serde(default = "default_version")]
    pub version: u32,

    /// 계산할 항 번호
    #[serde(default = "default_input")]
    pub input: i64,

    /// 산술 모드
    #[serde(default)]
    pub arithmetic: Arithmetic,
}

fn default_version() -> u32 {
    CURRENT_VERSION
}

fn default_input() -> i64 {
    DEFAULT_INPUT
}

impl Default for FibConfig {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            input: DEFAULT_INPUT,
            arithmetic: Arithmetic::default(),
        }
    }
}

impl FibConfig {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // JSON
    // ========================================================================

    /// JSON 문자열에서 로드 (빠진 필드는 기본값)
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FibConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// JSON 문자열로 변환
    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 버전 확인
    pub fn validate(&self) -> Result<()> {
        if self.version > CURRENT_VERSION {
            return Err(Error::Config(format!(
                "Unsupported config version {} (max {})",
                self.version, CURRENT_VERSION
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    pub fn input(mut self, n: i64) -> Self {
        self.input = n;
        self
    }

    pub fn arithmetic(mut self, arithmetic: Arithmetic) -> Self {
        self.arithmetic = arithmetic;
        self
    }
}
