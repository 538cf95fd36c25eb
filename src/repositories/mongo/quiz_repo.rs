//! # MongoDB 퀴즈 리포지토리
//!
//! [`QuizRepository`] 포트의 MongoDB 구현입니다.
//!
//! ## 컬렉션과 인덱스
//!
//! | 컬렉션 | 인덱스 |
//! |--------|--------|
//! | `questions` | `acnt_uuid` |
//! | `quizzes` | `quiz_uuid` (unique), `acnt_uuid` |
//! | `quiz_questions` | `quiz_uuid`, `question_uuid`, `acnt_uuid` |
//! | `accounts` | `acnt_uuid` (unique) |
//!
//! ## 술어 변환
//!
//! [`Predicate::to_document`]가 만든 필터 문서를 그대로 사용합니다.
//!
//! ```text
//! Equals        → { field: value }
//! NotEquals     → { field: { $ne: value } }
//! AnyElementIn  → { field: { $elemMatch: { key: { $in: [...] } } } }
//! ```

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, error};
use mongodb::{
    bson::doc,
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};
use crate::db::Database;
use crate::domain::constants::{collections, fields, REMOVED_STATUS};
use crate::domain::entities::{Account, Question, Quiz, QuizQuestion};
use crate::domain::models::Predicate;
use crate::repositories::{QuizRepository, RepoError};

#[derive(Clone)]
pub struct MongoQuizRepository {
    db: mongodb::Database,
}

impl MongoQuizRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            db: database.get_database(),
        }
    }

    fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection::<T>(name)
    }

    /// 서버 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), RepoError> {
        let account_index = || {
            IndexModel::builder()
                .keys(doc! { fields::ACCOUNT: 1 })
                .options(IndexOptions::builder().name("acnt_uuid".to_string()).build())
                .build()
        };

        self.collection::<Question>(collections::QUESTIONS)
            .create_indexes([account_index()])
            .await
            .map_err(RepoError::unknown)?;

        let quiz_uuid_index = IndexModel::builder()
            .keys(doc! { fields::QUIZ_UUID: 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("quiz_uuid_unique".to_string())
                .build())
            .build();

        self.collection::<Quiz>(collections::QUIZZES)
            .create_indexes([quiz_uuid_index, account_index()])
            .await
            .map_err(RepoError::unknown)?;

        let join_quiz_index = IndexModel::builder()
            .keys(doc! { fields::QUIZ_UUID: 1 })
            .options(IndexOptions::builder().name("quiz_uuid".to_string()).build())
            .build();

        let join_question_index = IndexModel::builder()
            .keys(doc! { fields::QUESTION_UUID: 1 })
            .options(IndexOptions::builder().name("question_uuid".to_string()).build())
            .build();

        self.collection::<QuizQuestion>(collections::QUIZ_QUESTIONS)
            .create_indexes([join_quiz_index, join_question_index, account_index()])
            .await
            .map_err(RepoError::unknown)?;

        let account_unique = IndexModel::builder()
            .keys(doc! { fields::ACCOUNT: 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("acnt_uuid_unique".to_string())
                .build())
            .build();

        self.collection::<Account>(collections::ACCOUNTS)
            .create_indexes([account_unique])
            .await
            .map_err(RepoError::unknown)?;

        Ok(())
    }

    async fn find_one<T>(&self, name: &str, filter: &Predicate) -> Result<T, RepoError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        debug!("find_one {} {:?}", name, filter);

        self.collection::<T>(name)
            .find_one(filter.to_document())
            .await
            .map_err(|e| {
                error!("find_one on {} failed: {}", name, e);
                RepoError::unknown(e)
            })?
            .ok_or(RepoError::NotFound)
    }

    async fn find_many<T>(&self, name: &str, filter: &Predicate) -> Result<Vec<T>, RepoError>
    where
        T: DeserializeOwned + Send + Sync,
    {
        debug!("find {} {:?}", name, filter);

        let cursor = self
            .collection::<T>(name)
            .find(filter.to_document())
            .await
            .map_err(RepoError::unknown)?;

        cursor.try_collect().await.map_err(|e| {
            error!("reading cursor on {} failed: {}", name, e);
            RepoError::unknown(e)
        })
    }

    async fn insert_many<T>(&self, name: &str, items: &[T]) -> Result<(), RepoError>
    where
        T: Serialize + Send + Sync,
    {
        if items.is_empty() {
            return Ok(());
        }

        self.collection::<T>(name)
            .insert_many(items)
            .await
            .map_err(|e| {
                error!("insert_many on {} failed: {}", name, e);
                RepoError::unknown(e)
            })?;

        Ok(())
    }

    async fn replace<T>(&self, name: &str, filter: &Predicate, item: &T) -> Result<(), RepoError>
    where
        T: Serialize + Send + Sync,
    {
        let result = self
            .collection::<T>(name)
            .replace_one(filter.to_document(), item)
            .await
            .map_err(|e| {
                error!("replace_one on {} failed: {}", name, e);
                RepoError::UpdateFailed(e.to_string())
            })?;

        if result.matched_count == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn soft_delete(&self, name: &str, filter: &Predicate) -> Result<(), RepoError> {
        let result = self
            .collection::<mongodb::bson::Document>(name)
            .update_one(filter.to_document(), doc! { "$set": { fields::STATUS: REMOVED_STATUS } })
            .await
            .map_err(|e| {
                error!("soft delete on {} failed: {}", name, e);
                RepoError::RemoveFailed(e.to_string())
            })?;

        debug!("soft delete on {} matched {}", name, result.matched_count);
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn find_account(&self, account_id: &str) -> Result<Account, RepoError> {
        let filter = Predicate::match_all().equals(fields::ACCOUNT, account_id);
        self.find_one(collections::ACCOUNTS, &filter).await
    }

    async fn insert_questions(&self, items: &[Question]) -> Result<(), RepoError> {
        self.insert_many(collections::QUESTIONS, items).await
    }

    async fn insert_quiz(&self, item: &Quiz) -> Result<(), RepoError> {
        self.collection::<Quiz>(collections::QUIZZES)
            .insert_one(item)
            .await
            .map_err(|e| {
                error!("insert_one on {} failed: {}", collections::QUIZZES, e);
                RepoError::unknown(e)
            })?;

        Ok(())
    }

    async fn insert_quiz_questions(&self, items: &[QuizQuestion]) -> Result<(), RepoError> {
        self.insert_many(collections::QUIZ_QUESTIONS, items).await
    }

    async fn find_question(&self, filter: &Predicate) -> Result<Question, RepoError> {
        self.find_one(collections::QUESTIONS, filter).await
    }

    async fn find_questions(&self, filter: &Predicate) -> Result<Vec<Question>, RepoError> {
        self.find_many(collections::QUESTIONS, filter).await
    }

    async fn find_quiz(&self, filter: &Predicate) -> Result<Quiz, RepoError> {
        self.find_one(collections::QUIZZES, filter).await
    }

    async fn find_quizzes(&self, filter: &Predicate) -> Result<Vec<Quiz>, RepoError> {
        self.find_many(collections::QUIZZES, filter).await
    }

    async fn find_quiz_questions(&self, filter: &Predicate) -> Result<Vec<QuizQuestion>, RepoError> {
        self.find_many(collections::QUIZ_QUESTIONS, filter).await
    }

    async fn update_question(&self, filter: &Predicate, item: &Question) -> Result<(), RepoError> {
        self.replace(collections::QUESTIONS, filter, item).await
    }

    async fn update_quiz(&self, filter: &Predicate, item: &Quiz) -> Result<(), RepoError> {
        self.replace(collections::QUIZZES, filter, item).await
    }

    async fn soft_delete_question(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUESTIONS, filter).await
    }

    async fn soft_delete_quiz(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUIZZES, filter).await
    }

    async fn soft_delete_quiz_question(&self, filter: &Predicate) -> Result<(), RepoError> {
        self.soft_delete(collections::QUIZ_QUESTIONS, filter).await
    }
}
