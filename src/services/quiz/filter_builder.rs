//! 조회 필터 → [`Predicate`] 변환
//!
//! 비어 있지 않은 필드마다 AND 조건 하나를 추가합니다. 모든 필드가 비어 있으면
//! 전체 일치 술어가 됩니다. 문항 본문과 퀴즈 제목은 부분 일치가 아니라
//! 값 전체가 같아야 일치합니다.

use crate::domain::constants::fields;
use crate::domain::dto::{FilterQuestion, FilterQuiz};
use crate::domain::models::Predicate;

pub fn build_question_filter(filter: &FilterQuestion) -> Predicate {
    let mut predicate = Predicate::match_all();
    if filter.is_empty() {
        return predicate;
    }

    if !filter.text.is_empty() {
        predicate = predicate.equals(fields::TEXT, filter.text.as_str());
    }
    if !filter.tags.is_empty() {
        predicate = predicate.any_element_in(fields::TAGS, fields::TAG_ID, filter.tags.clone());
    }
    if !filter.owner.is_empty() {
        predicate = predicate.equals(fields::OWNER, filter.owner.as_str());
    }
    if filter.difficulty != 0 {
        predicate = predicate.equals(fields::DIFFICULTY, filter.difficulty);
    }

    predicate
}

pub fn build_quiz_filter(filter: &FilterQuiz) -> Predicate {
    let mut predicate = Predicate::match_all();
    if filter.is_empty() {
        return predicate;
    }

    if !filter.owner.is_empty() {
        predicate = predicate.equals(fields::OWNER, filter.owner.as_str());
    }
    if !filter.tags.is_empty() {
        predicate = predicate.any_element_in(fields::TAGS, fields::TAG_ID, filter.tags.clone());
    }
    if !filter.refs.is_empty() {
        predicate = predicate.any_element_in(fields::REFS, fields::REF_ID, filter.refs.clone());
    }
    if !filter.title.is_empty() {
        predicate = predicate.equals(fields::TITLE, filter.title.as_str());
    }

    predicate
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_empty_question_filter_matches_all() {
        assert!(build_question_filter(&FilterQuestion::default()).is_match_all());
    }

    #[test]
    fn test_empty_quiz_filter_matches_all() {
        let predicate = build_quiz_filter(&FilterQuiz::default());

        assert!(predicate.is_match_all());
        assert!(predicate.matches(&doc! { "title": "anything", "status": -1 }));
    }

    #[test]
    fn test_question_filter_clauses() {
        let filter = FilterQuestion {
            text: "2 + 2 = ?".to_string(),
            tags: vec!["t1".to_string(), "t2".to_string()],
            owner: "party-1".to_string(),
            difficulty: 2,
        };

        assert_eq!(
            build_question_filter(&filter).to_document(),
            doc! {
                "text": "2 + 2 = ?",
                "tags": { "$elemMatch": { "uuid": { "$in": ["t1", "t2"] } } },
                "owner_uuid": "party-1",
                "difficulty_level": 2,
            }
        );
    }

    #[test]
    fn test_quiz_refs_match_ref_ids() {
        let filter = FilterQuiz {
            refs: vec!["course-7".to_string()],
            ..Default::default()
        };
        let predicate = build_quiz_filter(&filter);

        assert_eq!(
            predicate.to_document(),
            doc! { "refs": { "$elemMatch": { "ref_id": { "$in": ["course-7"] } } } }
        );
        assert!(predicate.matches(&doc! { "refs": [{ "ref_type": "course", "ref_id": "course-7" }] }));
        assert!(!predicate.matches(&doc! { "refs": [{ "ref_type": "course", "ref_id": "course-8" }] }));
    }

    #[test]
    fn test_quiz_title_and_owner() {
        let filter = FilterQuiz {
            title: "Algebra".to_string(),
            owner: "party-1".to_string(),
            ..Default::default()
        };

        assert_eq!(
            build_quiz_filter(&filter).to_document(),
            doc! { "owner_uuid": "party-1", "title": "Algebra" }
        );
    }
}
