use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person credited in the document header (editor, former editor, or
/// author).
#[derive(Builder, Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Person {
    pub name: String,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub email: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub url: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub company: Option<String>,
    #[builder(setter(into, strip_option), default)]
    #[serde(default)]
    pub company_url: Option<String>,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(f, "{} <{}>", self.name, email)?,
            None => write!(f, "{}", self.name)?,
        }
        if let Some(company) = &self.company {
            write!(f, " ({})", company)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> From<S> for Person {
    fn from(s: S) -> Self {
        Person {
            name: s.into(),
            email: None,
            url: None,
            company: None,
            company_url: None,
        }
    }
}
