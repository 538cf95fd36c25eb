//! # Route Configuration
//!
//! ```text
//! GET    /health
//! /api/quiz (CallerScopeMiddleware)
//! ├── POST   /questions            문항 배치 삽입
//! ├── GET    /questions            문항 목록 (선택적 FilterQuestion 본문)
//! ├── GET    /question/{id}        문항 단건
//! ├── PUT    /question             문항 교체
//! ├── DELETE /question/{id}        문항 삭제 (참조 가드)
//! ├── POST   /quiz                 퀴즈 삽입
//! ├── GET    /quiz/{id}            퀴즈 단건 (공개 식별자, 자원 참여만)
//! ├── GET    /quizzes              퀴즈 목록 (선택적 FilterQuiz 본문)
//! ├── PUT    /quiz                 퀴즈 교체
//! ├── DELETE /quiz/{id}            퀴즈 삭제 (공개 식별자)
//! ├── POST   /quiz-questions       퀴즈-문항 배치 삽입
//! ├── GET    /quiz-questions/{id}  퀴즈 문항 조회 (공개 식별자)
//! └── DELETE /quiz-question/{id}   퀴즈-문항 삭제
//! ```

use crate::config::ClaimConfig;
use crate::handlers;
use crate::middlewares::CallerScopeMiddleware;
use crate::services::TokenService;
use actix_web::web;
use serde_json::json;

/// 전체 라우트를 등록합니다.
///
/// `QuizService`는 호출 측에서 `app_data`로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, token_service: TokenService, claims: ClaimConfig) {
    cfg.app_data(handlers::json_config());
    cfg.service(health_check);

    configure_quiz_routes(cfg, token_service, claims);
}

fn configure_quiz_routes(cfg: &mut web::ServiceConfig, token_service: TokenService, claims: ClaimConfig) {
    cfg.service(
        web::scope("/api/quiz")
            .wrap(CallerScopeMiddleware::new(token_service, claims))
            // questions
            .service(handlers::questions::insert_questions)
            .service(handlers::questions::find_questions)
            .service(handlers::questions::find_question)
            .service(handlers::questions::update_question)
            .service(handlers::questions::delete_question)
            // quizzes
            .service(handlers::quizzes::insert_quiz)
            .service(handlers::quizzes::find_quiz)
            .service(handlers::quizzes::find_quizzes)
            .service(handlers::quizzes::update_quiz)
            .service(handlers::quizzes::delete_quiz)
            // quiz questions
            .service(handlers::quiz_questions::insert_quiz_questions)
            .service(handlers::quiz_questions::find_quiz_questions)
            .service(handlers::quiz_questions::delete_quiz_question)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "quiz_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
