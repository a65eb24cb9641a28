pub mod error;
pub mod formatter;
pub mod message;
pub mod mode;
pub mod model;
pub mod session;
pub mod settings;

// Re-export common error type
pub use error::{JargonError, Result};
pub use formatter::format_reply;
pub use message::{Message, Role};
pub use mode::Mode;
pub use model::ModelId;
pub use session::Session;
pub use settings::ChatSettings;
