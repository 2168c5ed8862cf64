//! Use case implementations.

mod translate_use_case;

pub use translate_use_case::TranslateUseCase;
