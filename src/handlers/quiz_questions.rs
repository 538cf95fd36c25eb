//! 퀴즈-문항 연결 엔드포인트

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, web, HttpResponse};
use crate::domain::constants::messages;
use crate::domain::dto::QuizQuestionsRequest;
use crate::domain::models::CallerScope;
use crate::handlers::reply;
use crate::services::QuizService;

#[post("/quiz-questions")]
pub async fn insert_quiz_questions(
    service: web::Data<QuizService>,
    scope: CallerScope,
    payload: web::Json<QuizQuestionsRequest>,
) -> HttpResponse {
    let result = service
        .insert_quiz_questions(&scope, payload.into_inner().questions)
        .await;
    reply(&scope, StatusCode::CREATED, messages::INSERTED, result)
}

/// 퀴즈 공개 식별자로 문항 본문 + 점수/제한 시간 목록을 조회합니다.
#[get("/quiz-questions/{id}")]
pub async fn find_quiz_questions(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.find_quiz_questions(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::FETCHED, result)
}

#[delete("/quiz-question/{id}")]
pub async fn delete_quiz_question(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.delete_quiz_question(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::DELETED, result)
}
