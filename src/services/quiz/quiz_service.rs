//! # 퀴즈 도메인 서비스
//!
//! 문항, 퀴즈, 퀴즈-문항 연결의 삽입/조회/갱신/소프트 삭제 유스케이스를 구현합니다.
//!
//! ```text
//! Handler ──> QuizService ──┬─> filter_builder (조회 필터 → Predicate)
//!                           ├─> stamping       (수용 규칙, 식별자/감사 필드)
//!                           └─> QuizRepository (Mongo | Memory)
//! ```
//!
//! ## 규칙
//!
//! - 모든 연산은 [`CallerScope`]를 받습니다. 테넌트가 비어 있으면 `AccessDenied`입니다.
//! - 조회/갱신/삭제 술어에는 항상 `acnt_uuid == 테넌트` 조건이 붙습니다.
//! - 저장소 호출은 하나하나 `timeout` 안에 끝나야 하며, 넘기면 `StorageUnknown`입니다.
//! - 재시도는 하지 않습니다. 실패는 현재 요청에서 바로 반환됩니다.
//! - 같은 문서에 대한 동시 갱신은 마지막 쓰기가 남습니다.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use log::{debug, error, info, warn};
use crate::core::errors::AppError;
use crate::domain::constants::{fields, REMOVED_STATUS};
use crate::domain::dto::{FilterQuestion, FilterQuiz, QuestionBatchResponse, QuizQuestionView};
use crate::domain::entities::{ParticipationType, Question, Quiz, QuizQuestion};
use crate::domain::models::{CallerScope, Predicate};
use crate::repositories::{QuizRepository, RepoError};
use crate::services::quiz::filter_builder::{build_question_filter, build_quiz_filter};
use crate::services::quiz::stamping::{partition_questions, stamp_quiz, stamp_quiz_question, Stamp};

pub struct QuizService {
    repo: Arc<dyn QuizRepository>,
    timeout: Duration,
}

impl QuizService {
    pub fn new(repo: Arc<dyn QuizRepository>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    /// 저장소 호출 하나를 시간 제한 안에서 실행합니다.
    ///
    /// 제한 시간이 지나면 진행 중인 호출을 버리고 `StorageUnknown`을 반환합니다.
    /// 이미 기록된 문서는 되돌리지 않습니다.
    async fn bounded<T, F>(&self, operation: &'static str, call: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, RepoError>>,
    {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(RepoError::NotFound)) => Err(AppError::from(RepoError::NotFound)),
            Ok(Err(err)) => {
                error!("{} failed: {}", operation, err);
                Err(AppError::from(err))
            }
            Err(_) => {
                error!("{} timed out after {:?}", operation, self.timeout);
                Err(AppError::StorageUnknown(format!(
                    "{} timed out after {:?}",
                    operation, self.timeout
                )))
            }
        }
    }

    fn tenant<'a>(&self, scope: &'a CallerScope) -> Result<&'a str, AppError> {
        scope.tenant().inspect_err(|_| {
            warn!("request rejected: caller has no tenant scope (user: {})", scope.user());
        })
    }

    fn scoped(tenant: &str) -> Predicate {
        Predicate::match_all().equals(fields::ACCOUNT, tenant)
    }

    fn active() -> Predicate {
        Predicate::match_all().not_equals(fields::STATUS, REMOVED_STATUS)
    }

    // ---------------------------------------------------------------------
    // Inserts
    // ---------------------------------------------------------------------

    /// 문항 배치를 삽입합니다.
    ///
    /// - 수용된 문항만 저장합니다.
    /// - 모두 거부되면 아무것도 저장하지 않고 `InvalidInput`을 반환합니다.
    /// - 일부만 거부되면 `Ok`로 두 목록을 돌려주며, 호출자는
    ///   [`QuestionBatchResponse::is_complete`]로 거부 여부를 확인합니다.
    pub async fn insert_questions(
        &self,
        scope: &CallerScope,
        questions: Vec<Question>,
    ) -> Result<QuestionBatchResponse, AppError> {
        let tenant = self.tenant(scope)?;

        if questions.is_empty() {
            warn!("empty question batch from tenant {}", tenant);
            return Err(AppError::InvalidInput("question batch is empty".to_string()));
        }

        let account = self
            .bounded("find_account", self.repo.find_account(tenant))
            .await
            .inspect_err(|err| {
                if matches!(err, AppError::NotFound(_)) {
                    warn!("account {} not found", tenant);
                }
            })?;

        let stamp = Stamp::now(tenant, scope.user());
        let (accepted, rejected) = partition_questions(questions, &account, &stamp);

        if accepted.is_empty() {
            warn!("all {} questions rejected for tenant {}", rejected.len(), tenant);
            return Err(AppError::InvalidInput(format!(
                "all {} questions failed validation",
                rejected.len()
            )));
        }

        self.bounded("insert_questions", self.repo.insert_questions(&accepted))
            .await?;

        if rejected.is_empty() {
            info!("inserted {} questions for tenant {}", accepted.len(), tenant);
        } else {
            warn!(
                "inserted {} questions for tenant {}, rejected {}",
                accepted.len(),
                tenant,
                rejected.len()
            );
        }

        Ok(QuestionBatchResponse { accepted, rejected })
    }

    pub async fn insert_quiz(&self, scope: &CallerScope, quiz: Quiz) -> Result<Quiz, AppError> {
        let tenant = self.tenant(scope)?;
        let quiz = stamp_quiz(quiz, &Stamp::now(tenant, scope.user()));

        self.bounded("insert_quiz", self.repo.insert_quiz(&quiz)).await?;

        info!("inserted quiz {} ({}) for tenant {}", quiz.quiz_uuid, quiz.id, tenant);
        Ok(quiz)
    }

    /// 퀴즈-문항 연결을 한 번의 배치 삽입으로 저장합니다.
    pub async fn insert_quiz_questions(
        &self,
        scope: &CallerScope,
        items: Vec<QuizQuestion>,
    ) -> Result<Vec<QuizQuestion>, AppError> {
        let tenant = self.tenant(scope)?;

        if items.is_empty() {
            warn!("empty quiz-question batch from tenant {}", tenant);
            return Err(AppError::InvalidInput("quiz-question batch is empty".to_string()));
        }

        let stamp = Stamp::now(tenant, scope.user());
        let items: Vec<QuizQuestion> = items
            .into_iter()
            .map(|item| stamp_quiz_question(item, &stamp))
            .collect();

        self.bounded("insert_quiz_questions", self.repo.insert_quiz_questions(&items))
            .await?;

        info!("inserted {} quiz questions for tenant {}", items.len(), tenant);
        Ok(items)
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// 삭제되지 않은 문항을 저장소 식별자로 조회합니다.
    pub async fn find_question(&self, scope: &CallerScope, id: &str) -> Result<Question, AppError> {
        let tenant = self.tenant(scope)?;
        debug!("find question {} for tenant {}", id, tenant);

        let filter = Predicate::match_all()
            .equals(fields::ID, id)
            .and(Self::active())
            .and(Self::scoped(tenant));

        self.bounded("find_question", self.repo.find_question(&filter)).await
    }

    /// 필터에 맞는 문항을 모두 반환합니다. 삭제 상태를 따로 제외하지 않습니다.
    pub async fn find_questions(
        &self,
        scope: &CallerScope,
        filter: &FilterQuestion,
    ) -> Result<Vec<Question>, AppError> {
        let tenant = self.tenant(scope)?;
        let predicate = build_question_filter(filter).and(Self::scoped(tenant));
        debug!("find questions {:?}", predicate);

        self.bounded("find_questions", self.repo.find_questions(&predicate)).await
    }

    /// 공개 식별자로 퀴즈를 조회합니다.
    ///
    /// 자원 참여(`Volunteering`) 방식의 삭제되지 않은 퀴즈만 조회됩니다.
    pub async fn find_quiz(&self, scope: &CallerScope, quiz_uuid: &str) -> Result<Quiz, AppError> {
        let tenant = self.tenant(scope)?;
        debug!("find quiz {} for tenant {}", quiz_uuid, tenant);

        let filter = Predicate::match_all()
            .equals(fields::QUIZ_UUID, quiz_uuid)
            .equals(
                fields::PARTICIPATION_TYPE,
                i32::from(ParticipationType::Volunteering),
            )
            .and(Self::active())
            .and(Self::scoped(tenant));

        self.bounded("find_quiz", self.repo.find_quiz(&filter)).await
    }

    /// 필터에 맞는 퀴즈를 모두 반환합니다. 삭제 상태를 따로 제외하지 않습니다.
    pub async fn find_quizzes(&self, scope: &CallerScope, filter: &FilterQuiz) -> Result<Vec<Quiz>, AppError> {
        let tenant = self.tenant(scope)?;
        let predicate = build_quiz_filter(filter).and(Self::scoped(tenant));
        debug!("find quizzes {:?}", predicate);

        self.bounded("find_quizzes", self.repo.find_quizzes(&predicate)).await
    }

    /// 퀴즈의 활성 연결 행을 순서대로 읽고, 행마다 문항을 조회해
    /// `{text, choices, score, duration}`으로 투영합니다.
    ///
    /// 문항 조회가 하나라도 실패하면 전체가 실패합니다.
    pub async fn find_quiz_questions(
        &self,
        scope: &CallerScope,
        quiz_uuid: &str,
    ) -> Result<Vec<QuizQuestionView>, AppError> {
        let tenant = self.tenant(scope)?;

        let rows_filter = Predicate::match_all()
            .equals(fields::QUIZ_UUID, quiz_uuid)
            .and(Self::active())
            .and(Self::scoped(tenant));

        let rows = self
            .bounded("find_quiz_questions", self.repo.find_quiz_questions(&rows_filter))
            .await?;

        debug!("quiz {} has {} active questions", quiz_uuid, rows.len());

        let mut views = Vec::with_capacity(rows.len());
        for row in &rows {
            let question_filter = Predicate::match_all()
                .equals(fields::ID, row.question_uuid.as_str())
                .and(Self::active())
                .and(Self::scoped(tenant));

            let question = self
                .bounded("find_question", self.repo.find_question(&question_filter))
                .await?;

            views.push(QuizQuestionView::project(question, row));
        }

        Ok(views)
    }

    // ---------------------------------------------------------------------
    // Updates
    // ---------------------------------------------------------------------

    /// 저장소 식별자가 같은 삭제되지 않은 문항을 통째로 교체합니다.
    ///
    /// 저장되는 문서의 테넌트는 호출자 테넌트로 고정되고, 생성 시각/생성자/상태는
    /// 저장된 값을 유지합니다. 상태는 스탬핑과 삭제 경로에서만 바뀝니다.
    pub async fn update_question(&self, scope: &CallerScope, mut question: Question) -> Result<Question, AppError> {
        let tenant = self.tenant(scope)?;

        if question.id.is_empty() {
            warn!("question update without id from tenant {}", tenant);
            return Err(AppError::InvalidInput("question id is required".to_string()));
        }

        let filter = Predicate::match_all()
            .equals(fields::ID, question.id.as_str())
            .and(Self::active())
            .and(Self::scoped(tenant));

        let stored = self
            .bounded("find_question", self.repo.find_question(&filter))
            .await?;

        if question.status != stored.status {
            debug!("ignoring submitted status of question {}", question.id);
        }

        question.account_id = tenant.to_string();
        question.created_at = stored.created_at;
        question.created_by = stored.created_by;
        question.status = stored.status;

        self.bounded("update_question", self.repo.update_question(&filter, &question))
            .await?;

        info!("updated question {} for tenant {}", question.id, tenant);
        Ok(question)
    }

    /// 퀴즈를 통째로 교체합니다. 공개 식별자는 생성 시 한 번만 발급되므로
    /// 문항과 같은 서버 필드에 더해 `quiz_uuid`도 저장된 값을 유지합니다.
    pub async fn update_quiz(&self, scope: &CallerScope, mut quiz: Quiz) -> Result<Quiz, AppError> {
        let tenant = self.tenant(scope)?;

        if quiz.id.is_empty() {
            warn!("quiz update without id from tenant {}", tenant);
            return Err(AppError::InvalidInput("quiz id is required".to_string()));
        }

        let filter = Predicate::match_all()
            .equals(fields::ID, quiz.id.as_str())
            .and(Self::active())
            .and(Self::scoped(tenant));

        let stored = self.bounded("find_quiz", self.repo.find_quiz(&filter)).await?;

        quiz.account_id = tenant.to_string();
        quiz.quiz_uuid = stored.quiz_uuid;
        quiz.created_at = stored.created_at;
        quiz.created_by = stored.created_by;
        quiz.status = stored.status;

        self.bounded("update_quiz", self.repo.update_quiz(&filter, &quiz)).await?;

        info!("updated quiz {} for tenant {}", quiz.id, tenant);
        Ok(quiz)
    }

    // ---------------------------------------------------------------------
    // Soft deletes
    // ---------------------------------------------------------------------

    /// 활성 퀴즈-문항 연결이 남아 있으면 `RemovalBlocked`로 거부합니다.
    pub async fn delete_question(&self, scope: &CallerScope, id: &str) -> Result<(), AppError> {
        let tenant = self.tenant(scope)?;

        let guard = Predicate::match_all()
            .equals(fields::QUESTION_UUID, id)
            .and(Self::active())
            .and(Self::scoped(tenant));

        let references = self
            .bounded("find_quiz_questions", self.repo.find_quiz_questions(&guard))
            .await?;

        if !references.is_empty() {
            warn!(
                "question {} removal blocked: {} active quiz questions reference it",
                id,
                references.len()
            );
            return Err(AppError::RemovalBlocked(format!(
                "question {} is referenced by {} quiz questions",
                id,
                references.len()
            )));
        }

        let filter = Predicate::match_all()
            .equals(fields::ID, id)
            .and(Self::active())
            .and(Self::scoped(tenant));

        self.bounded("soft_delete_question", self.repo.soft_delete_question(&filter))
            .await?;

        info!("removed question {} for tenant {}", id, tenant);
        Ok(())
    }

    /// 공개 식별자로 퀴즈를 소프트 삭제합니다.
    pub async fn delete_quiz(&self, scope: &CallerScope, quiz_uuid: &str) -> Result<(), AppError> {
        let tenant = self.tenant(scope)?;

        let filter = Predicate::match_all()
            .equals(fields::QUIZ_UUID, quiz_uuid)
            .and(Self::active())
            .and(Self::scoped(tenant));

        self.bounded("soft_delete_quiz", self.repo.soft_delete_quiz(&filter)).await?;

        info!("removed quiz {} for tenant {}", quiz_uuid, tenant);
        Ok(())
    }

    pub async fn delete_quiz_question(&self, scope: &CallerScope, id: &str) -> Result<(), AppError> {
        let tenant = self.tenant(scope)?;

        let filter = Predicate::match_all()
            .equals(fields::ID, id)
            .and(Self::active())
            .and(Self::scoped(tenant));

        self.bounded("soft_delete_quiz_question", self.repo.soft_delete_quiz_question(&filter))
            .await?;

        info!("removed quiz question {} for tenant {}", id, tenant);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;
    use crate::core::locale::Locale;
    use crate::domain::entities::{
        Account, AccountConfig, Choice, DifficultyLevel, QuestionStatus, RecordStatus, Tag, Title,
    };
    use crate::repositories::MockQuizRepository;

    fn scope() -> CallerScope {
        CallerScope::new("acnt-1", "user-1", Locale::En)
    }

    fn service(repo: MockQuizRepository) -> QuizService {
        QuizService::new(Arc::new(repo), Duration::from_secs(5))
    }

    fn question(choices: usize, tags: usize) -> Question {
        Question {
            id: String::new(),
            account_id: String::new(),
            text: "2 + 2 = ?".to_string(),
            image: String::new(),
            choices: (1..=choices as i32)
                .map(|index| Choice { index, text: index.to_string() })
                .collect(),
            answer: 2,
            difficulty_level: DifficultyLevel::Easy,
            tags: (0..tags)
                .map(|i| Tag { uuid: format!("t{}", i), title: Title::default() })
                .collect(),
            refs: vec![],
            owner: String::new(),
            created_at: 0,
            created_by: String::new(),
            status: QuestionStatus::NonAudited,
        }
    }

    fn join_row(question_uuid: &str, score: i32) -> QuizQuestion {
        QuizQuestion {
            id: format!("row-{}", question_uuid),
            account_id: "acnt-1".to_string(),
            quiz_uuid: "z-1".to_string(),
            question_uuid: question_uuid.to_string(),
            score,
            duration: 30,
            created_at: 0,
            created_by: String::new(),
            status: RecordStatus::Active,
        }
    }

    fn account(requires_audit: bool, minimum_tag_count: usize) -> Account {
        Account::new("acnt-1", AccountConfig { requires_audit, minimum_tag_count })
    }

    #[actix_web::test]
    async fn test_empty_tenant_is_denied_before_storage() {
        let repo = MockQuizRepository::new();
        let service = service(repo);
        let anonymous = CallerScope::new("", "user-1", Locale::En);

        let result = service.find_question(&anonymous, "q-1").await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));

        let result = service.delete_quiz(&anonymous, "z-1").await;
        assert!(matches!(result, Err(AppError::AccessDenied(_))));
    }

    #[actix_web::test]
    async fn test_insert_questions_full_acceptance() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_account()
            .withf(|id| id == "acnt-1")
            .returning(|_| Ok(account(true, 2)));
        repo.expect_insert_questions()
            .withf(|items| items.len() == 1 && items[0].status == QuestionStatus::Audited)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(repo)
            .insert_questions(&scope(), vec![question(4, 2)])
            .await
            .unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.accepted[0].account_id, "acnt-1");
        assert_eq!(outcome.accepted[0].created_by, "user-1");
    }

    #[actix_web::test]
    async fn test_insert_questions_all_rejected_persists_nothing() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_account().returning(|_| Ok(account(false, 3)));
        repo.expect_insert_questions().never();

        let result = service(repo)
            .insert_questions(&scope(), vec![question(4, 1), question(3, 3)])
            .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[actix_web::test]
    async fn test_insert_questions_partial() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_account().returning(|_| Ok(account(false, 1)));
        repo.expect_insert_questions()
            .withf(|items| items.len() == 1)
            .times(1)
            .returning(|_| Ok(()));

        let outcome = service(repo)
            .insert_questions(&scope(), vec![question(4, 1), question(2, 1)])
            .await
            .unwrap();

        assert!(!outcome.is_complete());
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].choices.len(), 2);
    }

    #[actix_web::test]
    async fn test_insert_questions_unknown_account() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_account().returning(|_| Err(RepoError::NotFound));
        repo.expect_insert_questions().never();

        let result = service(repo).insert_questions(&scope(), vec![question(4, 0)]).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_batch_storage_failure_is_unknown() {
        let mut repo = MockQuizRepository::new();
        repo.expect_insert_quiz_questions()
            .returning(|_| Err(RepoError::unknown("bulk write error")));

        let result = service(repo)
            .insert_quiz_questions(&scope(), vec![join_row("q-1", 1), join_row("q-2", 1)])
            .await;

        assert!(matches!(result, Err(AppError::StorageUnknown(_))));
    }

    #[actix_web::test]
    async fn test_find_quiz_predicate() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz()
            .withf(|filter| {
                filter.to_document()
                    == doc! {
                        "quiz_uuid": "z-1",
                        "participation_type": 2,
                        "status": { "$ne": -1 },
                        "acnt_uuid": "acnt-1",
                    }
            })
            .returning(|_| Err(RepoError::NotFound));

        let result = service(repo).find_quiz(&scope(), "z-1").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_find_questions_does_not_exclude_removed() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_questions()
            .withf(|filter| filter.to_document() == doc! { "acnt_uuid": "acnt-1" })
            .returning(|_| Ok(vec![]));

        let result = service(repo)
            .find_questions(&scope(), &FilterQuestion::default())
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[actix_web::test]
    async fn test_composite_read_preserves_row_order() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz_questions()
            .returning(|_| Ok(vec![join_row("q-2", 20), join_row("q-1", 10)]));
        repo.expect_find_question().returning(|filter| {
            let mut found = question(4, 0);
            found.text = if filter.matches(&doc! { "_id": "q-1", "acnt_uuid": "acnt-1" }) {
                "first".to_string()
            } else {
                "second".to_string()
            };
            Ok(found)
        });

        let views = service(repo).find_quiz_questions(&scope(), "z-1").await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!((views[0].text.as_str(), views[0].score), ("second", 20));
        assert_eq!((views[1].text.as_str(), views[1].score), ("first", 10));
    }

    #[actix_web::test]
    async fn test_composite_read_aborts_on_missing_question() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz_questions()
            .returning(|_| Ok(vec![join_row("q-1", 10), join_row("q-2", 20)]));
        repo.expect_find_question()
            .times(1)
            .returning(|_| Err(RepoError::NotFound));

        let result = service(repo).find_quiz_questions(&scope(), "z-1").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_update_forces_caller_tenant() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_question().returning(|_| {
            let mut stored = question(4, 0);
            stored.id = "q-1".to_string();
            stored.account_id = "acnt-1".to_string();
            Ok(stored)
        });
        repo.expect_update_question()
            .withf(|filter, item| {
                item.account_id == "acnt-1"
                    && filter.matches(&doc! { "_id": "q-1", "status": 0, "acnt_uuid": "acnt-1" })
                    && !filter.matches(&doc! { "_id": "q-1", "status": -1, "acnt_uuid": "acnt-1" })
            })
            .returning(|_, _| Ok(()));

        let mut submitted = question(4, 0);
        submitted.id = "q-1".to_string();
        submitted.account_id = "acnt-other".to_string();

        let updated = service(repo).update_question(&scope(), submitted).await.unwrap();
        assert_eq!(updated.account_id, "acnt-1");
    }

    #[actix_web::test]
    async fn test_update_keeps_server_assigned_fields() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_question().returning(|_| {
            let mut stored = question(4, 0);
            stored.id = "q-1".to_string();
            stored.created_at = 1_700_000_000;
            stored.created_by = "author".to_string();
            stored.status = QuestionStatus::NonAudited;
            Ok(stored)
        });
        repo.expect_update_question()
            .withf(|_, item| {
                item.status == QuestionStatus::NonAudited
                    && item.created_by == "author"
                    && item.created_at == 1_700_000_000
                    && item.text == "edited"
            })
            .returning(|_, _| Ok(()));

        let mut submitted = question(4, 0);
        submitted.id = "q-1".to_string();
        submitted.text = "edited".to_string();
        submitted.status = QuestionStatus::Audited;
        submitted.created_by = "someone-else".to_string();

        let updated = service(repo).update_question(&scope(), submitted).await.unwrap();
        assert_eq!(updated.status, QuestionStatus::NonAudited);
        assert_eq!(updated.created_by, "author");
    }

    #[actix_web::test]
    async fn test_update_missing_document_is_not_found() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_question().returning(|_| Err(RepoError::NotFound));

        let mut submitted = question(4, 0);
        submitted.id = "q-404".to_string();

        let result = service(repo).update_question(&scope(), submitted).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_question_blocked_by_active_reference() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz_questions()
            .withf(|filter| filter.matches(&doc! { "question_uuid": "q-1", "status": 1, "acnt_uuid": "acnt-1" }))
            .returning(|_| Ok(vec![join_row("q-1", 10)]));
        repo.expect_soft_delete_question().never();

        let result = service(repo).delete_question(&scope(), "q-1").await;
        assert!(matches!(result, Err(AppError::RemovalBlocked(_))));
    }

    #[actix_web::test]
    async fn test_delete_question_guard_failure_aborts() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz_questions()
            .returning(|_| Err(RepoError::unknown("connection reset")));
        repo.expect_soft_delete_question().never();

        let result = service(repo).delete_question(&scope(), "q-1").await;
        assert!(matches!(result, Err(AppError::StorageUnknown(_))));
    }

    #[actix_web::test]
    async fn test_delete_question_without_references() {
        let mut repo = MockQuizRepository::new();
        repo.expect_find_quiz_questions().returning(|_| Ok(vec![]));
        repo.expect_soft_delete_question()
            .times(1)
            .returning(|_| Ok(()));

        assert!(service(repo).delete_question(&scope(), "q-1").await.is_ok());
    }

    #[actix_web::test]
    async fn test_remove_failure_is_translated() {
        let mut repo = MockQuizRepository::new();
        repo.expect_soft_delete_quiz()
            .returning(|_| Err(RepoError::RemoveFailed("write concern".to_string())));

        let result = service(repo).delete_quiz(&scope(), "z-1").await;
        assert!(matches!(result, Err(AppError::RemovalFailed(_))));
    }
}
