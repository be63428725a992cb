pub mod dialog;
pub mod index;
pub mod save_words;
pub mod translate;
pub mod words;
