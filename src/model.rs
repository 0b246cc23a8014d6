use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Translation backends the gateway can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    /// Hosted LLM chat-completion API, prompt-engineered for translation.
    #[serde(rename = "OpenAI")]
    OpenAi,
    /// Remote model server hosting the Gorani translation model.
    Gorani,
    /// Remote model server hosting the LangGorani translation model.
    LangGorani,
}

impl Model {
    pub const SUPPORTED: [&'static str; 3] = ["OpenAI", "Gorani", "LangGorani"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Model::OpenAi => "OpenAI",
            Model::Gorani => "Gorani",
            Model::LangGorani => "LangGorani",
        }
    }
}

impl FromStr for Model {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OpenAI" => Ok(Model::OpenAi),
            "Gorani" => Ok(Model::Gorani),
            "LangGorani" => Ok(Model::LangGorani),
            other => Err(TranslateError::UnsupportedModel(other.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated translation job. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
    pub model: Model,
}
