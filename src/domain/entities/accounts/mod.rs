//! 테넌트 계정 엔티티 모듈
//!
//! 계정은 이 서비스 밖에서 생성되며, 문항 수용 규칙의 입력으로만 읽힙니다.

pub mod account;
