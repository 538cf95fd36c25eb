//! 메모리 어댑터

pub mod memory_repo;
