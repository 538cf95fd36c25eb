//! MongoDB 어댑터

pub mod quiz_repo;
