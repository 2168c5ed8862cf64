mod footer_bar;
mod header_bar;
mod language_bar;
mod source_editor;
mod translation_pane;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{ActivityStatus, HeaderBar, HeaderBarStyle};
pub use language_bar::{LanguageBar, LanguageBarStyle};
pub use source_editor::{SourceEditor, SourceEditorState, SourceEditorStyle};
pub use translation_pane::{TranslationPane, wrapped_line_count};
