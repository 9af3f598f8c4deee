//! Ordered collection of review personas and name-based selection

use std::fmt;

use crate::builtin::{
    BUG_HUNTER_FOCUS, BUG_HUNTER_NAME, BUG_HUNTER_TEMPLATE, CODE_QUALITY_FOCUS, CODE_QUALITY_NAME,
    CODE_QUALITY_TEMPLATE,
};
use crate::error::RegistryError;
use crate::persona::Persona;

#[derive(Debug, Clone, Default)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Registry seeded with the built-in personas
    pub fn with_builtin() -> Self {
        Self {
            personas: vec![
                Persona::new(CODE_QUALITY_NAME, CODE_QUALITY_FOCUS, CODE_QUALITY_TEMPLATE),
                Persona::new(BUG_HUNTER_NAME, BUG_HUNTER_FOCUS, BUG_HUNTER_TEMPLATE),
            ],
        }
    }

    /// Append a persona. Names must be unique ignoring case.
    pub fn register(&mut self, persona: Persona) -> Result<(), RegistryError> {
        if self.personas.iter().any(|p| p.is_named(persona.name())) {
            return Err(RegistryError::DuplicateName(persona.name().to_string()));
        }
        self.personas.push(persona);
        Ok(())
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Resolve requested names to personas, in registration order.
    ///
    /// `None` or an empty list selects everything. A non-empty list that
    /// matches nothing gives an empty selection with a warning.
    pub fn select(&self, names: Option<&[String]>) -> Selection<'_> {
        let names = match names {
            Some(names) if !names.is_empty() => names,
            _ => {
                return Selection {
                    personas: self.personas.iter().collect(),
                    warning: None,
                };
            }
        };

        let personas: Vec<&Persona> = self
            .personas
            .iter()
            .filter(|p| names.iter().any(|name| p.is_named(name)))
            .collect();

        for name in names {
            if !personas.iter().any(|p| p.is_named(name)) {
                tracing::debug!(requested = %name, "No persona matches requested name");
            }
        }

        let warning = personas.is_empty().then(|| SelectionWarning {
            requested: names.to_vec(),
        });

        Selection { personas, warning }
    }
}

#[derive(Debug)]
pub struct Selection<'a> {
    pub personas: Vec<&'a Persona>,
    pub warning: Option<SelectionWarning>,
}

/// Requested persona names that matched nothing in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionWarning {
    pub requested: Vec<String>,
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.requested.iter().map(|n| format!("'{n}'")).collect();
        write!(f, "No matching personas found for {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(selection: &Selection<'_>) -> Vec<String> {
        selection
            .personas
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    fn owned(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_builtin_personas() {
        let registry = PersonaRegistry::with_builtin();
        let all: Vec<&str> = registry.personas().iter().map(|p| p.name()).collect();
        assert_eq!(all, vec!["Code Quality Specialist", "Bug Hunter"]);
        assert_eq!(registry.personas()[0].focus(), "Code maintainability and best practices");
        assert_eq!(registry.personas()[1].focus(), "Potential bugs and edge cases");
    }

    #[test]
    fn test_select_all_when_absent_or_empty() {
        let mut registry = PersonaRegistry::with_builtin();
        registry
            .register(Persona::new("Custom Persona", "Custom", "{code_diff}"))
            .unwrap();

        let expected = owned(&["Code Quality Specialist", "Bug Hunter", "Custom Persona"]);
        assert_eq!(names(&registry.select(None)), expected);

        let selection = registry.select(Some(&[][..]));
        assert_eq!(names(&selection), expected);
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_select_case_insensitive() {
        let registry = PersonaRegistry::with_builtin();
        let requested = owned(&["bug hunter"]);
        let selection = registry.select(Some(requested.as_slice()));

        assert_eq!(names(&selection), owned(&["Bug Hunter"]));
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_select_keeps_registry_order() {
        let registry = PersonaRegistry::with_builtin();
        let requested = owned(&["BUG HUNTER", "code quality specialist", "nonexistent"]);
        let selection = registry.select(Some(requested.as_slice()));

        assert_eq!(
            names(&selection),
            owned(&["Code Quality Specialist", "Bug Hunter"])
        );
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_select_nothing_matches() {
        let registry = PersonaRegistry::with_builtin();
        let requested = owned(&["nonexistent"]);
        let selection = registry.select(Some(requested.as_slice()));

        assert!(selection.personas.is_empty());
        let warning = selection.warning.expect("Expected a selection warning");
        assert_eq!(warning.requested, owned(&["nonexistent"]));
        assert_eq!(
            warning.to_string(),
            "No matching personas found for 'nonexistent'"
        );
    }

    #[test]
    fn test_select_name_with_surrounding_whitespace() {
        let mut registry = PersonaRegistry::with_builtin();
        registry
            .register(Persona::new("A11y ", "Accessibility", "{code_diff}"))
            .unwrap();

        let requested = owned(&["A11y "]);
        let selection = registry.select(Some(requested.as_slice()));
        assert_eq!(names(&selection), owned(&["A11y"]));

        let requested = owned(&["a11y"]);
        let selection = registry.select(Some(requested.as_slice()));
        assert_eq!(names(&selection), owned(&["A11y"]));
        assert!(selection.warning.is_none());
    }

    #[test]
    fn test_register_rejects_duplicate_names() {
        let mut registry = PersonaRegistry::with_builtin();
        let err = registry
            .register(Persona::new("BUG hunter", "Dup", "{code_diff}"))
            .unwrap_err();

        assert_eq!(err, RegistryError::DuplicateName("BUG hunter".to_string()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_default_registry_is_empty() {
        let registry = PersonaRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.select(None).personas.is_empty());
    }
}
