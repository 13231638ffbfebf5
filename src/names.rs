pub const CATEGORIES_URL: &str = "/categories";
pub const CATEGORY_QUESTIONS_URL: &str = "/categories/{id}/questions";
pub const QUESTIONS_URL: &str = "/questions";
pub const QUESTION_URL: &str = "/questions/{id}";
pub const SEARCH_URL: &str = "/questions/search";
pub const QUIZZES_URL: &str = "/quizzes";

pub fn category_questions_url(category_id: i32) -> String {
    format!("/categories/{category_id}/questions")
}

pub fn question_url(question_id: i32) -> String {
    format!("/questions/{question_id}")
}

// Paging
pub const QUESTIONS_PER_PAGE: usize = 10;
pub const DEFAULT_PAGE: i64 = 1;

// Quiz scope sentinel: id 0 together with this type means "every category".
pub const ALL_CATEGORIES_ID: i32 = 0;
pub const ALL_CATEGORIES_TYPE: &str = "click";

/// Categories written into an empty database on startup.
pub const DEFAULT_CATEGORIES: &[(i32, &str)] = &[
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:5000";
pub const DEFAULT_LOG_FILTER: &str = "trivia_api=debug,tower_http=debug";
