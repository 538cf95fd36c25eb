//! 퀴즈 엔드포인트

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::domain::constants::messages;
use crate::domain::dto::FilterQuiz;
use crate::domain::entities::Quiz;
use crate::domain::models::CallerScope;
use crate::handlers::{failure, optional_filter, reply};
use crate::services::QuizService;

#[post("/quiz")]
pub async fn insert_quiz(
    service: web::Data<QuizService>,
    scope: CallerScope,
    payload: web::Json<Quiz>,
) -> HttpResponse {
    let result = service.insert_quiz(&scope, payload.into_inner()).await;
    reply(&scope, StatusCode::CREATED, messages::INSERTED, result)
}

/// 공개 식별자(`quiz_uuid`)로 조회합니다.
#[get("/quiz/{id}")]
pub async fn find_quiz(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.find_quiz(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::FETCHED, result)
}

#[get("/quizzes")]
pub async fn find_quizzes(
    service: web::Data<QuizService>,
    scope: CallerScope,
    body: web::Bytes,
) -> HttpResponse {
    let filter = match optional_filter::<FilterQuiz>(&body) {
        Ok(filter) => filter,
        Err(err) => return failure(&scope, &err),
    };

    let result = service.find_quizzes(&scope, &filter).await;
    reply(&scope, StatusCode::OK, messages::FETCHED, result)
}

#[put("/quiz")]
pub async fn update_quiz(
    service: web::Data<QuizService>,
    scope: CallerScope,
    payload: web::Json<Quiz>,
) -> HttpResponse {
    let result = service.update_quiz(&scope, payload.into_inner()).await;
    reply(&scope, StatusCode::OK, messages::UPDATED, result)
}

#[delete("/quiz/{id}")]
pub async fn delete_quiz(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.delete_quiz(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::DELETED, result)
}
