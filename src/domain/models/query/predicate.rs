//! # Predicate
//!
//! 리포지토리 포트를 건너는 조회 조건입니다. 타입이 있는 필드 조건들의
//! 논리곱(AND)이며, 스토리지 어댑터는 [`Clause`]를 빠짐없이 패턴 매칭해
//! 자기 질의 언어로 옮깁니다.
//!
//! - MongoDB 어댑터: [`Predicate::to_document`]
//! - 메모리 어댑터: [`Predicate::matches`]
//!
//! 조건이 하나도 없는 술어는 "전체 일치"입니다.
//!
//! ```rust,ignore
//! use crate::domain::constants::fields;
//!
//! let predicate = Predicate::match_all()
//!     .equals(fields::ID, "q-1")
//!     .not_equals(fields::STATUS, -1);
//!
//! // { "_id": "q-1", "status": { "$ne": -1 } }
//! let document = predicate.to_document();
//! ```

use mongodb::bson::{doc, Bson, Document};

/// 단일 필드 조건
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// `field == value`
    Equals { field: &'static str, value: Bson },

    /// `field != value` (필드가 없으면 일치)
    NotEquals { field: &'static str, value: Bson },

    /// 문서 배열 `field`의 원소 중 하나라도 `element[key]`가 `values`에 포함됨
    AnyElementIn {
        field: &'static str,
        key: &'static str,
        values: Vec<String>,
    },
}

impl Clause {
    pub fn field(&self) -> &'static str {
        match self {
            Clause::Equals { field, .. }
            | Clause::NotEquals { field, .. }
            | Clause::AnyElementIn { field, .. } => field,
        }
    }

    fn condition(&self) -> Bson {
        match self {
            Clause::Equals { value, .. } => value.clone(),
            Clause::NotEquals { value, .. } => Bson::Document(doc! { "$ne": value.clone() }),
            Clause::AnyElementIn { key, values, .. } => Bson::Document(doc! {
                "$elemMatch": { *key: { "$in": values.clone() } }
            }),
        }
    }

    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Clause::Equals { field, value } => match document.get(*field) {
                Some(Bson::Array(items)) => items.contains(value),
                Some(actual) => actual == value,
                None => false,
            },
            Clause::NotEquals { field, value } => document.get(*field) != Some(value),
            Clause::AnyElementIn { field, key, values } => match document.get(*field) {
                Some(Bson::Array(items)) => items.iter().any(|item| match item {
                    Bson::Document(element) => element
                        .get_str(*key)
                        .map(|id| values.iter().any(|candidate| candidate == id))
                        .unwrap_or(false),
                    _ => false,
                }),
                _ => false,
            },
        }
    }
}

/// 필드 조건들의 논리곱
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn match_all() -> Self {
        Self::default()
    }

    pub fn equals(mut self, field: &'static str, value: impl Into<Bson>) -> Self {
        self.clauses.push(Clause::Equals { field, value: value.into() });
        self
    }

    pub fn not_equals(mut self, field: &'static str, value: impl Into<Bson>) -> Self {
        self.clauses.push(Clause::NotEquals { field, value: value.into() });
        self
    }

    pub fn any_element_in(mut self, field: &'static str, key: &'static str, values: Vec<String>) -> Self {
        self.clauses.push(Clause::AnyElementIn { field, key, values });
        self
    }

    /// 다른 술어의 조건을 모두 이어 붙입니다.
    pub fn and(mut self, other: Predicate) -> Self {
        self.clauses.extend(other.clauses);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    /// MongoDB 필터 문서로 변환합니다.
    ///
    /// 같은 필드에 조건이 두 번 이상 걸리면 `$and`로 묶습니다.
    pub fn to_document(&self) -> Document {
        let mut seen = std::collections::HashSet::new();
        let has_duplicates = self.clauses.iter().any(|clause| !seen.insert(clause.field()));

        if has_duplicates {
            let parts: Vec<Document> = self
                .clauses
                .iter()
                .map(|clause| {
                    let mut part = Document::new();
                    part.insert(clause.field(), clause.condition());
                    part
                })
                .collect();
            return doc! { "$and": parts };
        }

        let mut document = Document::new();
        for clause in &self.clauses {
            document.insert(clause.field(), clause.condition());
        }
        document
    }

    /// 메모리상의 BSON 문서가 모든 조건을 만족하는지 검사합니다.
    pub fn matches(&self, document: &Document) -> bool {
        self.clauses.iter().all(|clause| clause.matches(document))
    }
}
