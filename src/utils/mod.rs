//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 문자열 정리, 로그용 이메일 마스킹

pub mod string_utils;
