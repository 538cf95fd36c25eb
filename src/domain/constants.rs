//! 컬렉션 이름, 저장 필드 이름, 응답 메시지 키

/// MongoDB 컬렉션 이름
pub mod collections {
    pub const QUESTIONS: &str = "questions";
    pub const QUIZZES: &str = "quizzes";
    pub const QUIZ_QUESTIONS: &str = "quiz_questions";
    pub const ACCOUNTS: &str = "accounts";
}

/// 저장 문서의 필드 이름
///
/// 필터 빌더와 서비스가 만드는 술어(predicate)는 모두 이 이름을 사용합니다.
pub mod fields {
    pub const ID: &str = "_id";
    pub const ACCOUNT: &str = "acnt_uuid";
    pub const STATUS: &str = "status";
    pub const TEXT: &str = "text";
    pub const TAGS: &str = "tags";
    pub const REFS: &str = "refs";
    pub const OWNER: &str = "owner_uuid";
    pub const DIFFICULTY: &str = "difficulty_level";
    pub const TITLE: &str = "title";
    pub const QUIZ_UUID: &str = "quiz_uuid";
    pub const QUESTION_UUID: &str = "question_uuid";
    pub const PARTICIPATION_TYPE: &str = "participation_type";

    /// `tags` 배열 원소의 식별자 키
    pub const TAG_ID: &str = "uuid";
    /// `refs` 배열 원소의 식별자 키
    pub const REF_ID: &str = "ref_id";
}

/// 성공 응답 메시지 키
pub mod messages {
    pub const INSERTED: &str = "REF.INSERTED";
    pub const FETCHED: &str = "REF.FETCHED";
    pub const UPDATED: &str = "REF.UPDATED";
    pub const DELETED: &str = "REF.DELETED";
}

/// 모든 엔티티에서 "삭제됨"을 뜻하는 상태 값
pub const REMOVED_STATUS: i32 = -1;
