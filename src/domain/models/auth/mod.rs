//! 호출자 신원 모델

pub mod caller_scope;

pub use caller_scope::CallerScope;
