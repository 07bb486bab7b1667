//! # 문자열 유틸리티
//!
//! 요청 DTO 정리와 로그 출력에 쓰는 문자열 함수들입니다.

use serde::Deserialize;

/// 앞뒤 공백을 제거하는 serde deserializer
///
/// `#[serde(deserialize_with = "deserialize_trimmed_string")]`와 함께 사용합니다.
/// 공백만 있는 값은 빈 문자열이 되므로 이후 길이 검증에서 걸러집니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct SignUp {
///     #[serde(deserialize_with = "deserialize_trimmed_string")]
///     name: String,
/// }
///
/// // JSON: {"name": "  Alice  "} → "Alice"
/// ```
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// 로그 출력을 위해 이메일 로컬 파트를 가립니다.
///
/// # 예제
/// ```rust,ignore
/// assert_eq!(mask_email("alice@example.com"), "a***@example.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_trimmed_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(deserialize_with = "deserialize_trimmed_string")]
            field: String,
        }

        let result: TestStruct = serde_json::from_str(r#"{"field": "  Hello World  "}"#).unwrap();
        assert_eq!(result.field, "Hello World");

        let result: TestStruct = serde_json::from_str(r#"{"field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(result.field, "안녕하세요");

        let result: TestStruct = serde_json::from_str(r#"{"field": "   "}"#).unwrap();
        assert_eq!(result.field, "");

        assert!(serde_json::from_str::<TestStruct>(r#"{"field": null}"#).is_err());
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("a@x.com"), "a***@x.com");
        assert_eq!(mask_email("@x.com"), "***");
        assert_eq!(mask_email("no-at-sign"), "***");
    }
}
