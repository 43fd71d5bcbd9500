pub mod assembler;
pub mod error;

pub use assembler::{BUILTIN_TEMPLATE, PromptTemplate, assemble, render_data_block};
pub use error::PromptError;
