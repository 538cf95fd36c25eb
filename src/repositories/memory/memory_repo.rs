//! # 메모리 퀴즈 리포지토리
//!
//! 프로세스 메모리에 BSON 문서를 보관하는 [`QuizRepository`] 구현입니다.
//! `STORAGE_BACKEND=memory` 로컬 실행과 통합 테스트에서 사용합니다.
//!
//! - 엔티티는 MongoDB 어댑터와 같은 BSON 형태로 저장됩니다.
//! - 술어는 [`Predicate::matches`]로 평가합니다.
//! - 조회 결과는 삽입 순서를 유지합니다.
//! - 계정은 외부에서 만들어지므로 [`MemoryQuizRepository::seed_account`]로 넣습니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use log::debug;
use mongodb::bson::{self, Bson, Document};
use serde::{de::DeserializeOwned, Serialize};
use crate::domain::constants::{collections, fields, REMOVED_STATUS};
use crate::domain::entities::{Account, Question, Quiz, QuizQuestion};
use crate::domain::models::Predicate;
use crate::repositories::{QuizRepository, RepoError};

#[derive(Debug, Default)]
pub struct MemoryQuizRepository {
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl MemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: impl IntoIterator<Item = Account>) -> Result<Self, RepoError> {
        let repo = Self::new();
        for account in accounts {
            repo.seed_account(&account)?;
        }
        Ok(repo)
    }

    /// 계정 문서를 추가하거나 같은 `acnt_uuid`의 문서를 교체합니다.
    pub fn seed_account(&self, account: &Account) -> Result<(), RepoError> {
        let document = to_document(account)?;
        let mut store = self.write()?;
        let accounts = store.entry(collections::ACCOUNTS).or_default();

        accounts.retain(|existing| existing.get_str(fields::ACCOUNT).ok() != Some(account.id.as_str()));
        accounts.push(document);
        Ok(())
    }

    /// 컬렉션의 원시 문서 수 (삭제 상태 포함)
    pub fn document_count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|store| store.get(collection).map(Vec::len).unwrap_or(0))
            .unwrap_or(0)
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<&'static str, Vec<Document>>>, RepoError> {
        self.collections
            .read()
            .map_err(|_| RepoError::unknown("memory store lock poisoned"))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<&'static str, Vec<Document>>>, RepoError> {
        self.collections
            .write()
            .map_err(|_| RepoError::unknown("memory store lock poisoned"))
    }

    fn find_one<T: DeserializeOwned>(&self, name: &'static str, filter: &Predicate) -> Result<T, RepoError> {
        let store = self.read()?;
        let document = store
            .get(name)
            .and_then(|documents| documents.iter().find(|document| filter.matches(document)))
            .ok_or(RepoError::NotFound)?;

        from_document(document.clone())
    }

    fn find_many<T: DeserializeOwned>(&self, name: &'static str, filter: &Predicate) -> Result<Vec<T>, RepoError> {
        let store = self.read()?;
        debug!("memory find {} {:?}", name, filter);

        store
            .get(name)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .map(|document| from_document(document.clone()))
                    .collect()
            })
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn insert_many<T: Serialize>(&self, name: &'static str, items: &[T]) -> Result<(), RepoError> {
        let documents = items.iter().map(to_document).collect::<Result<Vec<_>, _>>()?;
        let mut store = self.write()?;
        let collection = store.entry(name).or_default();

        for document in documents {
            let id = document.get(fields::ID);
            if id.is_some() && collection.iter().any(|existing| existing.get(fields::ID) == id) {
                return Err(RepoError::unknown(format!("duplicate _id in {}", name)));
            }
            collection.push(document);
        }

        Ok(())
    }

    fn replace<T: Serialize>(&self, name: &'static str, filter: &Predicate, item: &T) -> Result<(), RepoError> {
        let mut replacement = to_document(item).map_err(|e| RepoError::UpdateFailed(e.to_string()))?;
        let mut store = self.write()?;

        let target = store
            .get_mut(name)
            .and_then(|documents| documents.iter_mut().find(|document| filter.matches(document)))
            .ok_or(RepoError::NotFound)?;

        // replace_one은 기존 _id를 유지합니다.
        if let Some(id) = target.get(fields::ID).cloned() {
            replacement.insert(fields::ID, id);
        }
        *target = replacement;
        Ok(())
    }

    fn soft_delete(&self, name: &'static str, filter: &Predicate) -> Result<(), RepoError> {
        let mut store = self.write()?;

        if let Some(target) = store
            .get_mut(name)
            .and_then(|documents| documents.iter_mut().find(|document| filter.matches(document)))
        {
            target.insert(fields::STATUS, Bson::Int32(REMOVED_STATUS));
        }

        Ok(())
    }
}

fn to_document<T: Serialize>(item: &T) -> Result<Document, RepoError> {
    bson::to_document(item).map_err(RepoError::unknown)
}

fn from_document<T: DeserializeOwned>(document: Document) -> Result<T, RepoError> {
    bson::from_document(document).map_err(RepoError::unknown)
}

#[async_trait]
impl QuizRepository for MemoryQuizRepository {
    async fn find_account(&self, account_id: &str) -> Result<Account, RepoError> {
        let filter = Predicate::match_all().equals(fields::ACCOUNT, account_id);
        self.find_one(collections::ACCOUNTS, &filter)
    }

    async fn insert_questions(&self, items: &[Question]) -> Result<(), RepoError> {
        self.insert_many(collections::QUESTIONS, items)
    }

    async fn insert_quiz(&self, item: &Quiz) -> Result<(), RepoError> {
        self.insert_many(collections::QUIZZES, std::slice::from_ref(item))
    }

    async fn insert_quiz_questions(&self, items: &[QuizQuestion]) -> Result<(), RepoError> {
        self.insert_many(collections::QUIZ_QUESTIONS, items)
    }

    async fn find_question(&self, filter: &Predicate) -> Result<Question, RepoError> {
        self.find_one(collections::QUESTIONS, filter)
    }

    async fn find_questions(&self, filter: &Predicate) -> Result<Vec<Question>, RepoError> {
        self.find_many(collections::QUESTIONS, filter)
    }

    async fn find_quiz(&self, filter: &Predicate) -> Result<Quiz, RepoError> {
        self.find_one(collections::QUIZZES, filter)
    }

    async fn find_quizzes(&self, filter: &Predicate) -> Result<Vec<Quiz>, RepoError> {
        self.find_many(collections::QUIZZES, filter)
    }

    async fn find_quiz_questions(&self, filter: &Predicate) -> Result<Vec<QuizQuestion>, RepoError> {
        self.find_many(collections::QUIZ_QUESTIONS, filter)
    }

    async fn update_question(&self, filter: &Predicate, item: &Question) -> Result<(), RepoError> {
        self.replace(collections::QUESTIONS, filter, item)
    }

    async fn update_quiz(&self, filter: &Predicate, item: &Quiz) -> Result<(), RepoError> {
        self.replace(collections::QUIZZES, filter, item)
    }

    async fn soft_delete_question(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUESTIONS, filter)
    }

    async fn soft_delete_quiz(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUIZZES, filter)
    }

    async fn soft_delete_quiz_question(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUIZ_QUESTIONS, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AccountConfig, DurationType, ParticipationType, RecordStatus};

    fn quiz(id: &str, quiz_uuid: &str) -> Quiz {
        Quiz {
            id: id.to_string(),
            account_id: "acnt-1".to_string(),
            quiz_uuid: quiz_uuid.to_string(),
            title: "Algebra".to_string(),
            description: String::new(),
            duration_type: DurationType::Unlimited,
            duration: 0,
            participation_type: ParticipationType::Volunteering,
            audiences: vec![],
            min_score: 0,
            tags: vec![],
            refs: vec![],
            owner: String::new(),
            created_at: 0,
            created_by: String::new(),
            status: RecordStatus::Active,
        }
    }

    #[actix_web::test]
    async fn test_seeded_account_is_found() {
        let account = Account::new("acnt-1", AccountConfig { requires_audit: true, minimum_tag_count: 2 });
        let repo = MemoryQuizRepository::with_accounts([account.clone()]).unwrap();

        assert_eq!(repo.find_account("acnt-1").await.unwrap(), account);
        assert_eq!(repo.find_account("acnt-2").await, Err(RepoError::NotFound));
    }

    #[actix_web::test]
    async fn test_replace_requires_match_and_keeps_id() {
        let repo = MemoryQuizRepository::new();
        repo.insert_quiz(&quiz("s-1", "z-1")).await.unwrap();

        let mut changed = quiz("", "z-1");
        changed.title = "Geometry".to_string();

        let filter = Predicate::match_all().equals(fields::ID, "s-1");
        repo.update_quiz(&filter, &changed).await.unwrap();

        let stored = repo.find_quiz(&filter).await.unwrap();
        assert_eq!(stored.id, "s-1");
        assert_eq!(stored.title, "Geometry");

        let missing = Predicate::match_all().equals(fields::ID, "s-404");
        assert_eq!(repo.update_quiz(&missing, &changed).await, Err(RepoError::NotFound));
    }

    #[actix_web::test]
    async fn test_soft_delete_without_match_is_ok() {
        let repo = MemoryQuizRepository::new();
        repo.insert_quiz(&quiz("s-1", "z-1")).await.unwrap();

        let missing = Predicate::match_all().equals(fields::ID, "nope");
        assert!(repo.soft_delete_quiz(&missing).await.is_ok());

        let filter = Predicate::match_all().equals(fields::ID, "s-1");
        repo.soft_delete_quiz(&filter).await.unwrap();
        assert_eq!(repo.find_quiz(&filter).await.unwrap().status, RecordStatus::Removed);
    }

    #[actix_web::test]
    async fn test_duplicate_id_fails_batch() {
        let repo = MemoryQuizRepository::new();
        repo.insert_quiz(&quiz("s-1", "z-1")).await.unwrap();

        let result = repo.insert_quiz(&quiz("s-1", "z-2")).await;
        assert!(matches!(result, Err(RepoError::Unknown(_))));
        assert_eq!(repo.document_count(collections::QUIZZES), 1);
    }

    #[test]
    fn test_stored_shape_matches_mongo() {
        let document = to_document(&quiz("s-1", "z-1")).unwrap();

        assert_eq!(document.get_str("_id").unwrap(), "s-1");
        assert_eq!(document.get_i32("status").unwrap(), 1);
        assert_eq!(document.get_i32("participation_type").unwrap(), 2);
    }
}
