//! Model value object representing a generative model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generative models known to the consolidator (Value Object)
///
/// Unknown names are kept as [`Model::Custom`] so any model a backend
/// serves can be targeted from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Gemini models
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
    // Local models served by Ollama
    Llama32,
    Qwen25,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Llama32 => "llama3.2",
            Model::Qwen25 => "qwen2.5",
            Model::Custom(s) => s,
        }
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        match self {
            Model::Gemini20Flash | Model::Gemini25Flash | Model::Gemini25Pro => true,
            Model::Custom(s) => s.starts_with("gemini-"),
            _ => false,
        }
    }

    /// Check if this is a model normally served locally
    pub fn is_local(&self) -> bool {
        matches!(self, Model::Llama32 | Model::Qwen25)
    }
}

impl Default for Model {
    /// Returns the default model (Gemini 2.0 Flash)
    fn default() -> Self {
        Model::Gemini20Flash
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "llama3.2" => Model::Llama32,
            "qwen2.5" => Model::Qwen25,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_model_names() {
        let model: Model = "gemini-2.5-pro".parse().unwrap();
        assert_eq!(model, Model::Gemini25Pro);
        assert_eq!(Model::Llama32.to_string(), "llama3.2");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mistral-small".parse().unwrap();
        assert_eq!(model, Model::Custom("mistral-small".to_string()));
        assert_eq!(model.to_string(), "mistral-small");
    }

    #[test]
    fn test_model_family_detection() {
        assert!(Model::Gemini20Flash.is_gemini());
        assert!(Model::Custom("gemini-exp-1206".to_string()).is_gemini());
        assert!(!Model::Llama32.is_gemini());
        assert!(Model::Qwen25.is_local());
    }

    #[test]
    fn test_model_serde() {
        let json = serde_json::to_string(&Model::Gemini25Flash).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash\"");
        let model: Model = serde_json::from_str("\"phi4\"").unwrap();
        assert_eq!(model, Model::Custom("phi4".to_string()));
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gemini20Flash);
    }
}
