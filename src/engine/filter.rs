use crate::models::Question;

/// Questions whose text contains `term`, ignoring case. Input order is kept.
pub fn search<'a>(items: &'a [Question], term: &str) -> Vec<&'a Question> {
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect()
}

pub fn by_category(items: &[Question], category_id: i32) -> Vec<&Question> {
    items.iter().filter(|q| q.category == category_id).collect()
}
