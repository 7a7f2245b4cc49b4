mod category;
mod category_repository;
pub mod pagination;
mod question;
mod question_repository;

pub use category::Category;
pub use category_repository::CategoryRepository;
pub use pagination::Page;
pub use question::{NewQuestion, Question, QuestionScope};
pub use question_repository::QuestionRepository;
