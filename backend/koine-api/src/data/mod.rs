pub mod definite_articles;
pub mod second_declension;

pub use definite_articles::definite_article_questions;
pub use second_declension::second_declension_words;
