//! # Quiz Service Backend
//!
//! 테넌트(계정) 단위로 문항, 퀴즈, 퀴즈-문항 연결을 관리하는 백엔드입니다.
//!
//! ```text
//! routes/handlers ─> middlewares (CallerScope)
//!        │
//!        ▼
//! services (QuizService, filter builder, stamping, TokenService)
//!        │
//!        ▼
//! repositories (QuizRepository: Mongo | Memory) ─> db
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod middlewares;
