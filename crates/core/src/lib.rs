//! Core types for `obar`: input parsing, the quoting tokenizer and the
//! `{N}` label template language.

pub mod error;
pub mod event;
pub mod input;
pub mod state;
pub mod template;
pub mod tokenizer;

pub use error::{BarError, Result, TemplateError};
pub use event::Message;
pub use input::InputValue;
pub use state::{Monitor, ShowMode, Visibility, VisualState};
pub use template::{Fragment, Template};
pub use tokenizer::{tokenize, Tokenizer};
