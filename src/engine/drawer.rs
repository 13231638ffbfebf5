use std::collections::HashSet;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::{coerce, filter, random::RandomSource};
use crate::{models::Question, names, rejections::AppError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Category(i32),
}

impl Scope {
    /// Reads the `quiz_category` object of a quiz request.
    ///
    /// `{"id": 0, "type": "click"}` selects every category, where the id must
    /// be a JSON number (or boolean) equal to 0; a string `"0"` is an
    /// ordinary category id. Any other id narrows the draw to that category.
    /// A missing object, a missing or non-integer id, or a numeric id 0
    /// without a type is `Unprocessable`.
    pub fn from_quiz_category(value: Option<&Value>) -> Result<Self, AppError> {
        let category = value
            .and_then(Value::as_object)
            .ok_or(AppError::Unprocessable)?;
        let raw_id = category.get("id").ok_or(AppError::Unprocessable)?;
        let id = coerce::int(raw_id).ok_or(AppError::Unprocessable)?;

        let numeric = matches!(raw_id, Value::Number(_) | Value::Bool(_));
        if !numeric || id != names::ALL_CATEGORIES_ID {
            return Ok(Scope::Category(id));
        }

        match category.get("type") {
            None => Err(AppError::Unprocessable),
            Some(kind) if kind.as_str() == Some(names::ALL_CATEGORIES_TYPE) => Ok(Scope::All),
            Some(_) => Ok(Scope::Category(id)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizDraw {
    Drawn(Question),
    Exhausted,
}

/// A drawn question serializes as the question; exhaustion as `false`.
impl Serialize for QuizDraw {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            QuizDraw::Drawn(question) => question.serialize(serializer),
            QuizDraw::Exhausted => serializer.serialize_bool(false),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Draw {
    pub outcome: QuizDraw,
    /// Unseen candidates at draw time, the drawn one included.
    pub remaining: usize,
}

pub fn candidates<'a>(
    scope: Scope,
    excluded: &HashSet<i32>,
    questions: &'a [Question],
) -> Vec<&'a Question> {
    let in_scope = match scope {
        Scope::All => questions.iter().collect(),
        Scope::Category(id) => filter::by_category(questions, id),
    };

    in_scope
        .into_iter()
        .filter(|q| !excluded.contains(&q.id))
        .collect()
}

pub fn draw(
    scope: Scope,
    excluded: &HashSet<i32>,
    questions: &[Question],
    random: &dyn RandomSource,
) -> Draw {
    let candidates = candidates(scope, excluded, questions);
    let outcome = match candidates.len() {
        0 => QuizDraw::Exhausted,
        len => QuizDraw::Drawn(candidates[random.pick(len)].clone()),
    };

    Draw {
        outcome,
        remaining: candidates.len(),
    }
}
