//! Builds the response payload of each operation from a storage snapshot.

use serde::Serialize;

use super::{
    category_index::CategoryIndex,
    coerce,
    drawer::{self, QuizDraw, Scope},
    filter,
    pager::{self, PageNumber},
    random::RandomSource,
};
use crate::{
    models::{Category, Question, QuizRequest, SearchRequest},
    names,
    rejections::AppError,
};

#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub success: bool,
    pub categories: CategoryIndex,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
    pub categories: CategoryIndex,
}

#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
    pub categories: CategoryIndex,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub success: bool,
    pub created: Question,
    pub total_questions: usize,
}

/// Shared by search results and category listings.
#[derive(Debug, Serialize)]
pub struct QuestionMatches {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: String,
}

impl QuestionMatches {
    fn empty() -> Self {
        Self {
            success: true,
            questions: Vec::new(),
            total_questions: 0,
            current_category: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResult {
    pub success: bool,
    pub question: QuizDraw,
    pub total_questions: usize,
}

fn ordered(mut questions: Vec<Question>) -> Vec<Question> {
    questions.sort_by_key(|q| q.id);
    questions
}

pub fn category_listing(categories: Vec<Category>) -> CategoryListing {
    let categories = CategoryIndex::new(categories);
    CategoryListing {
        success: true,
        total_categories: categories.len(),
        categories,
    }
}

/// One page of every question. An empty page is `NotFound`.
///
/// `current_category` is the name of the first question's category on the
/// returned page. A category that does not resolve is `NotFound`; no other
/// name is substituted.
pub fn question_list(
    questions: Vec<Question>,
    categories: Vec<Category>,
    page: PageNumber,
) -> Result<QuestionList, AppError> {
    let questions = ordered(questions);
    let categories = CategoryIndex::new(categories);
    let current = pager::page(&questions, page, names::QUESTIONS_PER_PAGE);

    let first = current.items.first().ok_or(AppError::NotFound)?;
    let current_category = categories.resolve(first.category)?.to_owned();

    Ok(QuestionList {
        success: true,
        questions: current.items.to_vec(),
        total_questions: questions.len(),
        current_category,
        categories,
    })
}

/// The listing after `deleted` has been removed from storage. `remaining` is
/// the post-deletion snapshot.
pub fn deleted(
    deleted: &Question,
    remaining: Vec<Question>,
    categories: Vec<Category>,
    page: PageNumber,
) -> Result<Deleted, AppError> {
    let questions = ordered(remaining);
    let categories = CategoryIndex::new(categories);
    let current = pager::page(&questions, page, names::QUESTIONS_PER_PAGE);

    if current.items.is_empty() {
        return Err(AppError::NotFound);
    }
    let current_category = categories
        .resolve(deleted.category)
        .map_err(|_| AppError::Unprocessable)?
        .to_owned();

    Ok(Deleted {
        success: true,
        deleted: deleted.id,
        questions: current.items.to_vec(),
        total_questions: questions.len(),
        current_category,
        categories,
    })
}

pub fn created(created: Question, total_questions: usize) -> Created {
    Created {
        success: true,
        created,
        total_questions,
    }
}

/// A missing, empty or unmatched term gives an empty successful result.
/// Otherwise the current category is the one of the first match, and
/// `total_questions` counts the questions on the returned page.
pub fn search_results(
    questions: Vec<Question>,
    categories: Vec<Category>,
    request: &SearchRequest,
    page: PageNumber,
) -> Result<QuestionMatches, AppError> {
    let term = match coerce::search_term(request.search_term.as_ref())? {
        Some(term) if !term.is_empty() => term,
        _ => return Ok(QuestionMatches::empty()),
    };

    let questions = ordered(questions);
    let matches = filter::search(&questions, term);
    let Some(first) = matches.first() else {
        return Ok(QuestionMatches::empty());
    };

    let categories = CategoryIndex::new(categories);
    let current_category = categories
        .resolve(first.category)
        .map_err(|_| AppError::Unprocessable)?
        .to_owned();

    let current = pager::page(&matches, page, names::QUESTIONS_PER_PAGE);
    let questions: Vec<Question> = current.items.iter().map(|q| (*q).clone()).collect();

    Ok(QuestionMatches {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category,
    })
}

/// Every question of `category`, unpaged.
pub fn category_questions(questions: Vec<Question>, category: &Category) -> QuestionMatches {
    let questions = ordered(questions);
    let matches: Vec<Question> = filter::by_category(&questions, category.id)
        .into_iter()
        .cloned()
        .collect();

    QuestionMatches {
        success: true,
        total_questions: matches.len(),
        questions: matches,
        current_category: category.kind.clone(),
    }
}

pub fn quiz(
    questions: Vec<Question>,
    request: &QuizRequest,
    random: &dyn RandomSource,
) -> Result<QuizResult, AppError> {
    let scope = Scope::from_quiz_category(request.quiz_category.as_ref())?;
    let excluded = coerce::id_set(request.previous_questions.as_ref())?;

    let questions = ordered(questions);
    let draw = drawer::draw(scope, &excluded, &questions, random);

    Ok(QuizResult {
        success: true,
        question: draw.outcome,
        total_questions: draw.remaining,
    })
}
