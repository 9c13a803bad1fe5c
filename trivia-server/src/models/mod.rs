//! Domain models with validation at construction
//!
//! Request input is checked when building these types.
//! Invalid input returns ValidationError, not panic.

pub mod category;
pub mod pagination;
pub mod question;
pub mod validation;

pub use category::{category_map, Category, CategoryMap};
pub use pagination::{paginate, Page, PageParams, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use validation::ValidationError;
