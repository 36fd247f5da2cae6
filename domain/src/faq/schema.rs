//! Structured-output schema sent to the generative backend

use serde::Serialize;
use serde_json::{Value, json};

/// A JSON Schema constraining the generator's response (Value Object)
///
/// Backends that need a different dialect (e.g. upper-cased type names)
/// convert it in their adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputSchema {
    name: &'static str,
    schema: Value,
}

impl OutputSchema {
    /// Schema for a list of FAQ entries:
    /// `{"faqs": [{"question": string, "answer": string}]}`, all required.
    pub fn faq_list() -> Self {
        Self {
            name: "faq_list",
            schema: json!({
                "type": "object",
                "properties": {
                    "faqs": {
                        "type": "array",
                        "description": "A list of generated frequently asked questions.",
                        "items": {
                            "type": "object",
                            "properties": {
                                "question": {
                                    "type": "string",
                                    "description": "The frequently asked question."
                                },
                                "answer": {
                                    "type": "string",
                                    "description": "A clear and concise answer to the question."
                                }
                            },
                            "required": ["question", "answer"]
                        }
                    }
                },
                "required": ["faqs"]
            }),
        }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn as_json(&self) -> &Value {
        &self.schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_list_requires_both_fields() {
        let schema = OutputSchema::faq_list();
        let item = &schema.as_json()["properties"]["faqs"]["items"];
        assert_eq!(item["required"], json!(["question", "answer"]));
        assert_eq!(item["properties"]["answer"]["type"], "string");
        assert_eq!(schema.name(), "faq_list");
    }
}
