//! 문항 엔드포인트

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web, HttpResponse};
use crate::core::errors::AppError;
use crate::domain::constants::messages;
use crate::domain::dto::{ApiResponse, FilterQuestion, QuestionsRequest};
use crate::domain::entities::Question;
use crate::domain::models::CallerScope;
use crate::handlers::{failure, optional_filter, reply};
use crate::services::QuizService;

/// 문항 배치 삽입
///
/// 일부 문항이 거부되면 `400`과 함께 수용/거부 목록을 모두 돌려줍니다.
#[post("/questions")]
pub async fn insert_questions(
    service: web::Data<QuizService>,
    scope: CallerScope,
    payload: web::Json<QuestionsRequest>,
) -> HttpResponse {
    let request = payload.into_inner();

    match service.insert_questions(&scope, request.questions).await {
        Ok(outcome) if outcome.is_complete() => {
            HttpResponse::Created().json(ApiResponse::ok(messages::INSERTED, outcome))
        }
        Ok(outcome) => {
            let error = AppError::InvalidInput(format!("{} questions rejected", outcome.rejected.len()));
            HttpResponse::build(error.status())
                .json(ApiResponse::partial(messages::INSERTED, outcome, &error, scope.locale))
        }
        Err(err) => failure(&scope, &err),
    }
}

#[get("/question/{id}")]
pub async fn find_question(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.find_question(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::FETCHED, result)
}

/// 본문에 선택적으로 `FilterQuestion` JSON을 받습니다.
#[get("/questions")]
pub async fn find_questions(
    service: web::Data<QuizService>,
    scope: CallerScope,
    body: web::Bytes,
) -> HttpResponse {
    let filter = match optional_filter::<FilterQuestion>(&body) {
        Ok(filter) => filter,
        Err(err) => return failure(&scope, &err),
    };

    let result = service.find_questions(&scope, &filter).await;
    reply(&scope, StatusCode::OK, messages::FETCHED, result)
}

#[put("/question")]
pub async fn update_question(
    service: web::Data<QuizService>,
    scope: CallerScope,
    payload: web::Json<Question>,
) -> HttpResponse {
    let result = service.update_question(&scope, payload.into_inner()).await;
    reply(&scope, StatusCode::OK, messages::UPDATED, result)
}

#[delete("/question/{id}")]
pub async fn delete_question(
    service: web::Data<QuizService>,
    scope: CallerScope,
    id: web::Path<String>,
) -> HttpResponse {
    let result = service.delete_question(&scope, &id).await;
    reply(&scope, StatusCode::OK, messages::DELETED, result)
}
