use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::join::{CombinedRecord, Section};

use super::error::PromptError;

/// Built-in email prompt, embedded at compile time.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../assets/prompts/email.j2");

const BUILTIN_TEMPLATE_NAME: &str = "email.j2";

/// A minijinja template that turns a combined record and instructions into a prompt.
///
/// Templates see these variables:
/// - `data`: the labeled text block from [`render_data_block`]
/// - `instructions`: the caller's instructions, verbatim
/// - `person`, `company`, `news`: the joined rows as column maps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    name: String,
    source: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PromptTemplate {
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TEMPLATE_NAME, BUILTIN_TEMPLATE)
    }

    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self { name: name.into(), source: source.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the prompt. Undefined variables are errors.
    pub fn render(&self, record: &CombinedRecord, instructions: &str) -> Result<String, PromptError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        let ctx = context! {
            data => render_data_block(record),
            instructions => instructions,
            person => record.person(),
            company => record.company(),
            news => record.news(),
        };

        env.render_str(&self.source, ctx).map_err(|err| PromptError::TemplateRender {
            template: self.name.clone(),
            reason: err.to_string(),
        })
    }
}

/// Assemble the email prompt with the built-in template.
pub fn assemble(record: &CombinedRecord, instructions: &str) -> Result<String, PromptError> {
    PromptTemplate::builtin().render(record, instructions)
}

/// Labeled text block with one section per source row.
///
/// Each section is a `--- NAME INFORMATION ---` header followed by
/// `column: value` lines in column order; sections are separated by a blank
/// line.
pub fn render_data_block(record: &CombinedRecord) -> String {
    let sections: Vec<String> = Section::ALL
        .iter()
        .map(|section| {
            let mut block = format!("--- {} INFORMATION ---\n", section.name().to_uppercase());
            for (name, value) in record.section(*section).fields() {
                block.push_str(&format!("{name}: {value}\n"));
            }
            block
        })
        .collect();
    sections.join("\n")
}
