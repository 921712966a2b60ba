//! Error types for fibcalc
//!
//! 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// fibcalc 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 계산 관련
    // ========================================================================
    /// 고정 폭 정수로 계산하다가 범위를 넘은 경우
    #[error("Overflow: term {n} does not fit in {width} bits")]
    Overflow { n: i64, width: u32 },

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Overflow 에러 생성 헬퍼
    pub fn overflow(n: i64, width: u32) -> Self {
        Error::Overflow { n, width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_message() {
        let err = Error::overflow(94, 64);
        assert_eq!(
            err.to_string(),
            "Overflow: term 94 does not fit in 64 bits"
        );
    }

    #[test]
    fn test_json_from_conversion() {
        let parse: std::result::Result<u32, serde_json::Error> = serde_json::from_str("nope");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
