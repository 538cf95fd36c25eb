#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use quiz_service_backend::core::Locale;
use quiz_service_backend::domain::entities::{
    Account, AccountConfig, Choice, DifficultyLevel, DurationType, ParticipationType, Question,
    QuestionStatus, Quiz, QuizQuestion, RecordStatus, Tag, Title,
};
use quiz_service_backend::domain::models::CallerScope;
use quiz_service_backend::repositories::MemoryQuizRepository;
use quiz_service_backend::services::QuizService;

pub const TENANT: &str = "acnt-1";
pub const USER: &str = "user-1";

pub fn account(requires_audit: bool, minimum_tag_count: usize) -> Account {
    Account::new(TENANT, AccountConfig { requires_audit, minimum_tag_count })
}

pub fn scope() -> CallerScope {
    CallerScope::new(TENANT, USER, Locale::En)
}

pub fn memory_repo(account: Account) -> Arc<MemoryQuizRepository> {
    Arc::new(MemoryQuizRepository::with_accounts([account]).expect("seed account"))
}

pub fn service(repo: Arc<MemoryQuizRepository>) -> QuizService {
    QuizService::new(repo, Duration::from_secs(5))
}

pub fn question(text: &str, choices: usize, tags: &[&str]) -> Question {
    Question {
        id: String::new(),
        account_id: String::new(),
        text: text.to_string(),
        image: String::new(),
        choices: (1..=choices as i32)
            .map(|index| Choice { index, text: format!("choice {}", index) })
            .collect(),
        answer: 1,
        difficulty_level: DifficultyLevel::Intermediate,
        tags: tags
            .iter()
            .map(|uuid| Tag { uuid: uuid.to_string(), title: Title::default() })
            .collect(),
        refs: vec![],
        owner: "party-1".to_string(),
        created_at: 0,
        created_by: String::new(),
        status: QuestionStatus::NonAudited,
    }
}

pub fn quiz(title: &str, participation_type: ParticipationType) -> Quiz {
    Quiz {
        id: String::new(),
        account_id: String::new(),
        quiz_uuid: String::new(),
        title: title.to_string(),
        description: "weekly practice".to_string(),
        duration_type: DurationType::PerQuestionDuration,
        duration: 30,
        participation_type,
        audiences: vec![],
        min_score: 50,
        tags: vec![],
        refs: vec![],
        owner: "party-1".to_string(),
        created_at: 0,
        created_by: String::new(),
        status: RecordStatus::Active,
    }
}

pub fn join_row(quiz_uuid: &str, question_uuid: &str, score: i32, duration: i32) -> QuizQuestion {
    QuizQuestion {
        id: String::new(),
        account_id: String::new(),
        quiz_uuid: quiz_uuid.to_string(),
        question_uuid: question_uuid.to_string(),
        score,
        duration,
        created_at: 0,
        created_by: String::new(),
        status: RecordStatus::Active,
    }
}
