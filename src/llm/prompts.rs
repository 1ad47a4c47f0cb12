//! Prompt templates for chat turns

use std::collections::HashMap;

/// Template with `{{name}}` placeholders
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a new prompt template
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Fill in the template in a single pass.
    ///
    /// Substituted values are copied verbatim and never rescanned, so a value
    /// containing `{{...}}` stays literal. Unknown placeholders are left as-is.
    #[must_use]
    pub fn render(&self, values: &HashMap<&str, &str>) -> String {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => {
                    let name = &after[..end];
                    match values.get(name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push_str("{{");
                            out.push_str(name);
                            out.push_str("}}");
                        }
                    }
                    rest = &after[end + 2..];
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Standard chat prompt templates
pub struct ChatPrompts;

impl ChatPrompts {
    /// Answer a query from conversation context and retrieved passages
    #[must_use]
    pub fn grounded_answer() -> PromptTemplate {
        PromptTemplate::new(
            "Context: {{context}}\n\nUser Query: {{query}}\n\nVectara Retrieved Response: {{retrieved}}\n\nAnswer the User Query and also give Sources at the end of the complete answer.",
        )
    }
}

/// Build the composite prompt for one turn
pub fn build_chat_prompt(history: &str, query: &str, retrieved: &str) -> String {
    let values = HashMap::from([
        ("context", history),
        ("query", query),
        ("retrieved", retrieved),
    ]);
    ChatPrompts::grounded_answer().render(&values)
}
