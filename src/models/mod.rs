mod article;
mod suggestion;
pub use article::Article;
pub use suggestion::{ModerationAction, ModerationOutcome, Suggestion};
