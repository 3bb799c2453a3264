//! Group conjunctions

use crate::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Boolean combinator applied across the children of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Conjunction {
    #[default]
    #[serde(rename = "AND", alias = "and")]
    And,
    #[serde(rename = "OR", alias = "or")]
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => "AND",
            Conjunction::Or => "OR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Conjunction {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Conjunction::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Conjunction::Or)
        } else {
            Err(AccessError::InvalidConjunction {
                conjunction: s.to_string(),
            })
        }
    }
}
