//! 비밀번호 해싱 서비스
//!
//! bcrypt 해시 생성과 비교를 담당합니다.
//! bcrypt는 CPU 집약적이므로 두 연산 모두 actix 블로킹 스레드 풀에서 실행됩니다.
//!
//! bcrypt는 NUL 종료 문자를 포함해 72바이트 이후 입력을 잘라내므로
//! 비잘림(non-truncating) 변형만 사용합니다. 71바이트를 넘는 비밀번호는
//! 해싱에 실패하고 비교에서는 항상 불일치입니다.

use actix_web::web;
use bcrypt::BcryptError;
use log::{debug, warn};

use crate::config::PasswordConfig;
use crate::domain::entities::accounts::account::BcryptHash;
use crate::errors::{AppError, AppResult};

/// 잘림 없이 해싱할 수 있는 최대 비밀번호 길이 (바이트, NUL 종료 문자 제외)
pub const MAX_PASSWORD_BYTES: usize = 71;

const DUMMY_PASSWORD: &str = "storefront-auth-dummy-password";

/// bcrypt 기반 비밀번호 해셔
#[derive(Debug, Clone)]
pub struct PasswordService {
    cost: u32,
    /// 계정이 없을 때 비교 비용을 맞추기 위한 해시 (설정된 cost로 계산)
    dummy_hash: BcryptHash,
}

impl PasswordService {
    /// # Errors
    ///
    /// * `AppError::InternalError` - 설정된 cost로 해시를 만들 수 없음
    pub fn new(config: &PasswordConfig) -> AppResult<Self> {
        let dummy_hash = bcrypt::non_truncating_hash(DUMMY_PASSWORD, config.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("BCRYPT_COST 적용 실패: {}", e)))?;

        Ok(Self {
            cost: config.bcrypt_cost,
            dummy_hash: BcryptHash::from_hashed(dummy_hash),
        })
    }

    /// 평문 비밀번호를 솔트가 포함된 bcrypt 해시로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 비밀번호가 [`MAX_PASSWORD_BYTES`]를 초과
    /// * `AppError::InternalError` - 해싱 실패 또는 블로킹 작업 취소
    pub async fn hash(&self, plaintext: &str) -> AppResult<BcryptHash> {
        let plaintext = plaintext.to_owned();
        let cost = self.cost;

        let hashed = web::block(move || bcrypt::non_truncating_hash(plaintext, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 작업 실패: {}", e)))?
            .map_err(|e| match e {
                BcryptError::Truncation(_) => AppError::ValidationError(format!(
                    "비밀번호는 {}바이트를 넘을 수 없습니다",
                    MAX_PASSWORD_BYTES
                )),
                e => AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)),
            })?;

        Ok(BcryptHash::from_hashed(hashed))
    }

    /// 평문 비밀번호와 저장된 해시를 비교합니다.
    ///
    /// 해시 형식이 잘못되었거나 비교 작업이 실패하면 `false`를 반환합니다.
    pub async fn compare(&self, plaintext: &str, hashed: &BcryptHash) -> bool {
        let plaintext = plaintext.to_owned();
        let hashed = hashed.as_str().to_owned();

        match web::block(move || bcrypt::non_truncating_verify(plaintext, &hashed)).await {
            Ok(Ok(matched)) => matched,
            Ok(Err(BcryptError::Truncation(len))) => {
                debug!("비밀번호 길이 초과로 불일치 처리: {}바이트", len);
                false
            }
            Ok(Err(e)) => {
                warn!("저장된 비밀번호 해시를 검증할 수 없습니다: {}", e);
                false
            }
            Err(e) => {
                warn!("비밀번호 비교 작업 실패: {}", e);
                false
            }
        }
    }

    /// 비교할 해시가 없을 때 같은 비용의 비교를 수행하고 항상 `false`를 반환합니다.
    ///
    /// 계정 존재 여부가 응답 시간으로 드러나지 않게 합니다.
    pub async fn compare_dummy(&self, plaintext: &str) -> bool {
        self.compare(plaintext, &self.dummy_hash).await;
        false
    }
}
