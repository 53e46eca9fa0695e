use crate::error::{Error, Result};
use crate::templates::{self, MOSS_TEMPLATE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prompt formats a record can be rendered into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ModelFormat {
    #[default]
    Moss,
}

impl ModelFormat {
    pub const ALL: &'static [ModelFormat] = &[ModelFormat::Moss];

    pub fn name(self) -> &'static str {
        match self {
            ModelFormat::Moss => "moss",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            ModelFormat::Moss => MOSS_TEMPLATE,
        }
    }

    /// Comma-separated list of supported names, for diagnostics
    pub fn names() -> String {
        Self::ALL.iter().map(|f| f.name()).collect::<Vec<_>>().join(", ")
    }

    pub fn render(self, text: &str) -> Result<String> {
        templates::render(self, text)
    }
}

impl FromStr for ModelFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == lowered)
            .ok_or_else(|| Error::UnsupportedModel {
                name: s.to_string(),
                supported: Self::names(),
            })
    }
}

impl TryFrom<String> for ModelFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ModelFormat> for String {
    fn from(format: ModelFormat) -> Self {
        format.name().to_string()
    }
}

impl fmt::Display for ModelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
