//! Domain entities.

mod api_key;
mod language;
mod session;

pub use api_key::ApiKey;
pub use language::{LANGUAGES, Language};
pub use session::{COPY_INDICATOR_DURATION, Pane, Session};
