//! 리포지토리 조회 조건

pub mod predicate;

pub use predicate::{Clause, Predicate};
