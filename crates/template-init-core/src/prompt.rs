//! Source of answers and confirmations
//!
//! The orchestrator never talks to the terminal directly. It asks a
//! [`PromptProvider`] for answers and decisions, so the same flow runs
//! interactively (see `tui`) or from flags supplied up front.

use crate::answers::{Field, UserAnswers};
use crate::marker::ConflictCheck;
use anyhow::{Context, Result};

/// Answers supplied before the run starts (e.g. from command-line flags)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetValues {
    pub client_name: Option<String>,
    pub package_name: Option<String>,
    pub description: Option<String>,
    pub primary_colour: Option<String>,
}

impl PresetValues {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ClientName => self.client_name.as_deref(),
            Field::PackageName => self.package_name.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::PrimaryColour => self.primary_colour.as_deref(),
        }
    }

    /// Fields without a value, in prompt order
    pub fn missing(&self) -> Vec<Field> {
        [
            Field::ClientName,
            Field::PackageName,
            Field::Description,
            Field::PrimaryColour,
        ]
        .into_iter()
        .filter(|field| self.get(*field).is_none())
        .collect()
    }

    /// Whether every field has a value
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Supplies validated answers and yes/no decisions to the orchestrator
pub trait PromptProvider {
    /// Collect answers; every returned field must pass its validator
    fn answers(&mut self) -> Result<UserAnswers>;

    /// Ask whether to apply `answers`. `false` cancels the run.
    fn confirm(&mut self, answers: &UserAnswers) -> Result<bool>;

    /// Ask whether to overwrite an earlier initialization
    fn confirm_reinit(&mut self, existing: &ConflictCheck) -> Result<bool>;
}

/// Non-interactive provider: answers come from presets and every question is
/// answered "yes", except re-initialization, which must be allowed explicitly
#[derive(Debug, Clone)]
pub struct PresetAnswers {
    values: PresetValues,
    allow_reinit: bool,
}

impl PresetAnswers {
    pub fn new(values: PresetValues, allow_reinit: bool) -> Self {
        Self {
            values,
            allow_reinit,
        }
    }

    fn required(&self, field: Field) -> Result<&str> {
        let value = self
            .values
            .get(field)
            .with_context(|| format!("Missing {} (required in non-interactive mode)", field.label()))?;

        field
            .validate(value)
            .into_result()
            .map_err(|reason| anyhow::anyhow!("Invalid {}: {}", field.label(), reason))?;
        Ok(value)
    }
}

impl PromptProvider for PresetAnswers {
    fn answers(&mut self) -> Result<UserAnswers> {
        if !self.values.is_complete() {
            let missing: Vec<&str> = self.values.missing().iter().map(Field::label).collect();
            anyhow::bail!(
                "Missing {} (required in non-interactive mode)",
                missing.join(", ")
            );
        }

        Ok(UserAnswers::new(
            self.required(Field::ClientName)?,
            self.required(Field::PackageName)?,
            self.required(Field::Description)?,
            self.required(Field::PrimaryColour)?,
        ))
    }

    fn confirm(&mut self, _answers: &UserAnswers) -> Result<bool> {
        Ok(true)
    }

    fn confirm_reinit(&mut self, _existing: &ConflictCheck) -> Result<bool> {
        Ok(self.allow_reinit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> PresetValues {
        PresetValues {
            client_name: Some(" Acme Corp ".to_string()),
            package_name: Some("@acme/ui".to_string()),
            description: Some("Acme components".to_string()),
            primary_colour: Some("#FF5733".to_string()),
        }
    }

    #[test]
    fn test_preset_answers() {
        let values = complete();
        assert!(values.is_complete());

        let answers = PresetAnswers::new(values, false).answers().unwrap();
        assert_eq!(answers.client_name, "Acme Corp");
        assert_eq!(answers.package_name, "@acme/ui");
    }

    #[test]
    fn test_preset_missing_field() {
        let values = PresetValues {
            description: None,
            ..complete()
        };
        assert!(!values.is_complete());

        let err = PresetAnswers::new(values, false).answers().unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_preset_lists_every_missing_field() {
        let values = PresetValues {
            client_name: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(
            values.missing(),
            vec![Field::PackageName, Field::Description, Field::PrimaryColour]
        );

        let err = PresetAnswers::new(values, false).answers().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing package name, description, primary colour (required in non-interactive mode)"
        );
    }

    #[test]
    fn test_preset_invalid_field_reports_validator_message() {
        let values = PresetValues {
            primary_colour: Some("orange".to_string()),
            ..complete()
        };
        let err = PresetAnswers::new(values, false).answers().unwrap_err();
        assert!(err.to_string().contains("hex code"));
    }

    #[test]
    fn test_preset_reinit_requires_permission() {
        let existing = ConflictCheck::Clear;
        assert!(!PresetAnswers::new(complete(), false)
            .confirm_reinit(&existing)
            .unwrap());
        assert!(PresetAnswers::new(complete(), true)
            .confirm_reinit(&existing)
            .unwrap());
    }
}
