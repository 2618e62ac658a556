//! Selects and indexes one of the three catalogues by name.

use crate::extended::extended_dsl;
use crate::function::Function;
use crate::linq::linq_dsl;
use crate::simple::simple_dsl;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Which catalogue a program compiles against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Simple,
    Extended,
    Linq,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::Simple => "simple",
            Language::Extended => "extended",
            Language::Linq => "linq",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Language::Simple),
            "extended" => Ok(Language::Extended),
            "linq" => Ok(Language::Linq),
            other => Err(format!(
                "unknown DSL `{other}`: expected one of simple, extended, linq"
            )),
        }
    }
}

/// A built catalogue: the operations, indexed by source token for parser
/// lookup.
pub struct DslRegistry {
    language: Language,
    by_name: HashMap<String, Arc<Function>>,
}

impl DslRegistry {
    pub fn build(language: Language, max_bound: i64) -> DslRegistry {
        let functions = match language {
            Language::Simple => simple_dsl(max_bound),
            Language::Extended => extended_dsl(max_bound),
            Language::Linq => linq_dsl(max_bound),
        };
        let by_name = functions.into_iter().map(|f| (f.name.clone(), f)).collect();
        DslRegistry { language, by_name }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Function>> {
        self.by_name.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_registry_has_five_operations() {
        let reg = DslRegistry::build(Language::Simple, 10);
        assert_eq!(reg.len(), 5);
        assert!(reg.get("head").is_some());
        assert!(reg.get("MAP INC").is_none());
    }

    #[test]
    fn linq_registry_exposes_specialized_forms() {
        let reg = DslRegistry::build(Language::Linq, 10);
        assert!(reg.get("MAP INC").is_some());
        assert!(reg.get("FILTER isEVEN").is_some());
        assert!(reg.get("SCANL1 +").is_some());
        assert!(reg.get("ZIPWITH MIN").is_some());
    }

    #[test]
    fn language_parses_from_str() {
        assert_eq!("linq".parse::<Language>().unwrap(), Language::Linq);
        assert!("nope".parse::<Language>().is_err());
    }
}
