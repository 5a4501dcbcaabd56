use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::markdown::toc::PartialTocConfig;

/// Front matter of a single Markdown document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FrontMatter {
    /// Page title
    #[serde(default)]
    pub title: Option<String>,

    /// Page description, emitted as a meta tag
    #[serde(default)]
    pub description: Option<String>,

    /// Layout name, exposed on `<body data-layout>`
    #[serde(default)]
    pub layout: Option<String>,

    /// Table of contents settings laid over the site-wide ones
    #[serde(default)]
    pub toc: Option<PartialTocConfig>,

    /// Any other keys
    #[serde(flatten)]
    pub custom: HashMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse the YAML between the front matter fences
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Scalar value of a front matter key as text, for template placeholders
    pub fn field(&self, key: &str) -> Option<String> {
        match key {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            "layout" => self.layout.clone(),
            _ => match self.custom.get(key)? {
                serde_yaml::Value::String(value) => Some(value.clone()),
                serde_yaml::Value::Number(value) => Some(value.to_string()),
                serde_yaml::Value::Bool(value) => Some(value.to_string()),
                _ => None,
            },
        }
    }
}
