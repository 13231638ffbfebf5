//! Loose JSON input to typed values. Clients send ids and difficulties as
//! numbers, booleans or numeric strings; anything else is `Unprocessable`.

use std::collections::HashSet;

use serde_json::Value;

use crate::{
    models::{NewQuestion, QuestionDraft},
    rejections::AppError,
};

/// A JSON integer, an integral float, a boolean, or a string holding an
/// integer.
pub fn int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(n) => i32::try_from(n).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
                .map(|f| f as i32),
        },
        Value::Bool(b) => Some(i32::from(*b)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text(value: Option<Value>) -> Result<String, AppError> {
    match value {
        Some(Value::String(s)) => Ok(s),
        _ => Err(AppError::Unprocessable),
    }
}

pub fn new_question(draft: QuestionDraft) -> Result<NewQuestion, AppError> {
    let difficulty = draft
        .difficulty
        .as_ref()
        .and_then(int)
        .ok_or(AppError::Unprocessable)?;
    let category = draft
        .category
        .as_ref()
        .and_then(int)
        .ok_or(AppError::Unprocessable)?;

    Ok(NewQuestion {
        question: text(draft.question)?,
        answer: text(draft.answer)?,
        difficulty,
        category,
    })
}

/// `None` or `null` means nothing has been asked yet.
pub fn id_set(value: Option<&Value>) -> Result<HashSet<i32>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(HashSet::new()),
        Some(Value::Array(ids)) => ids
            .iter()
            .map(|id| int(id).ok_or(AppError::Unprocessable))
            .collect(),
        Some(_) => Err(AppError::Unprocessable),
    }
}

/// Search terms must be strings. A missing or `null` term is `None`.
pub fn search_term(value: Option<&Value>) -> Result<Option<&str>, AppError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(AppError::Unprocessable),
    }
}
