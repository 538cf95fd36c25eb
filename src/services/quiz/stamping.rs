//! 엔티티 수용 규칙과 스탬핑
//!
//! 호출자가 보낸 원본 데이터에 서버가 발급하는 식별자, 테넌트, 생성 시각,
//! 생성자, 초기 상태를 채웁니다. 수용 규칙이 있는 엔티티는 문항뿐입니다.

use chrono::Utc;
use uuid::Uuid;
use crate::domain::entities::{
    Account, Question, QuestionStatus, Quiz, QuizQuestion, RecordStatus, REQUIRED_CHOICES,
};

/// 호출자 범위에서 가져온 스탬프 값
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp<'a> {
    pub tenant: &'a str,
    pub user: &'a str,
    /// Unix 초
    pub now: i64,
}

impl<'a> Stamp<'a> {
    pub fn now(tenant: &'a str, user: &'a str) -> Self {
        Self {
            tenant,
            user,
            now: Utc::now().timestamp(),
        }
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// 문항 수용 규칙: 선택지가 정확히 4개이고 태그 수가 계정 최소값 이상
pub fn is_acceptable(question: &Question, account: &Account) -> bool {
    question.choices.len() == REQUIRED_CHOICES
        && question.tags.len() >= account.config.minimum_tag_count
}

/// 문항 배치를 (수용, 거부)로 나누고 수용된 문항을 스탬핑합니다.
///
/// 거부된 문항은 제출된 그대로 돌려줍니다.
pub fn partition_questions(
    questions: Vec<Question>,
    account: &Account,
    stamp: &Stamp<'_>,
) -> (Vec<Question>, Vec<Question>) {
    let (accepted, rejected): (Vec<Question>, Vec<Question>) = questions
        .into_iter()
        .partition(|question| is_acceptable(question, account));

    let accepted = accepted
        .into_iter()
        .map(|question| stamp_question(question, account, stamp))
        .collect();

    (accepted, rejected)
}

pub fn stamp_question(mut question: Question, account: &Account, stamp: &Stamp<'_>) -> Question {
    question.id = new_id();
    question.account_id = stamp.tenant.to_string();
    question.created_at = stamp.now;
    question.created_by = stamp.user.to_string();
    question.status = if account.config.requires_audit {
        QuestionStatus::Audited
    } else {
        QuestionStatus::NonAudited
    };
    question
}

/// 저장소 식별자와 공개 식별자를 따로 발급합니다.
pub fn stamp_quiz(mut quiz: Quiz, stamp: &Stamp<'_>) -> Quiz {
    quiz.id = new_id();
    quiz.quiz_uuid = new_id();
    quiz.account_id = stamp.tenant.to_string();
    quiz.created_at = stamp.now;
    quiz.created_by = stamp.user.to_string();
    quiz.status = RecordStatus::Active;
    quiz
}

pub fn stamp_quiz_question(mut item: QuizQuestion, stamp: &Stamp<'_>) -> QuizQuestion {
    item.id = new_id();
    item.account_id = stamp.tenant.to_string();
    item.created_at = stamp.now;
    item.created_by = stamp.user.to_string();
    item.status = RecordStatus::Active;
    item
}
