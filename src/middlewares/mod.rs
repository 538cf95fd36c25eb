//! # Middlewares
//!
//! - [`CallerScopeMiddleware`]: 호출자 토큰 검증 및 [`CallerScope`](crate::domain::models::CallerScope) 주입

pub mod caller_scope_middleware;
mod caller_scope_inner;

pub use caller_scope_middleware::CallerScopeMiddleware;
pub use caller_scope_inner::{request_locale, resolve_scope, CLIENT_TOKEN_HEADER};
