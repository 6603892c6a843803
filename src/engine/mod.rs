pub mod dispatcher;
pub mod history;
pub mod intent;

pub use dispatcher::Dispatcher;
pub use history::{ChatId, ConversationHistory};
pub use intent::{Intent, SALES_WINDOW_DAYS};
