use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Target language of a rendered client snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Curl,
    Python,
    Js,
    Ts,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Curl,
        Language::Python,
        Language::Js,
        Language::Ts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Curl => "curl",
            Language::Python => "python",
            Language::Js => "js",
            Language::Ts => "ts",
        }
    }

    /// Human readable label for tabs and menus
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Curl => "cURL",
            Language::Python => "Python API",
            Language::Js => "JS API",
            Language::Ts => "TS API",
        }
    }

    /// Syntax highlighter grammar for the rendered snippet
    pub fn syntax(&self) -> &'static str {
        match self {
            Language::Curl => "bash",
            Language::Python => "python",
            Language::Js => "javascript",
            Language::Ts => "typescript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = CodegenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str() == s)
            .ok_or_else(|| CodegenError::UnsupportedLanguage(s.to_string()))
    }
}

impl TryFrom<&str> for Language {
    type Error = CodegenError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Catalog entry describing one supported language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LanguageInfo {
    pub id: Language,
    pub name: String,
    pub syntax: String,
}

impl From<Language> for LanguageInfo {
    fn from(language: Language) -> Self {
        Self {
            id: language,
            name: language.display_name().to_string(),
            syntax: language.syntax().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifiers() {
        for language in Language::ALL {
            assert_eq!(language.as_str().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Python".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported language: Python");
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = Language::try_from("rust").unwrap_err();
        assert!(matches!(err, CodegenError::UnsupportedLanguage(ref l) if l == "rust"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_serde_uses_identifier() {
        assert_eq!(serde_json::to_string(&Language::Ts).unwrap(), r#""ts""#);
        let info = LanguageInfo::from(Language::Curl);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": "curl", "name": "cURL", "syntax": "bash" })
        );
    }
}
