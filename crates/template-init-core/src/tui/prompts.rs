//! Charm-style CLI prompts using cliclack

use crate::answers::{Field, UserAnswers};
use crate::marker::ConflictCheck;
use crate::prompt::{PresetValues, PromptProvider};
use crate::validate::Validation;
use anyhow::Result;

/// Interactive prompt provider.
///
/// Values passed on the command line are used without asking when they are
/// valid; invalid ones are reported and the field is asked for instead.
#[derive(Debug, Clone, Default)]
pub struct InteractivePrompts {
    presets: PresetValues,
    started: bool,
}

impl InteractivePrompts {
    pub fn new(presets: PresetValues) -> Self {
        Self {
            presets,
            started: false,
        }
    }

    fn intro(&mut self) -> Result<()> {
        if !self.started {
            cliclack::intro("Initialize component library template")?;
            self.started = true;
        }
        Ok(())
    }

    fn ask(&self, field: Field, prompt: &str, placeholder: &str) -> Result<String> {
        if let Some(value) = self.presets.get(field) {
            match field.validate(value) {
                Validation::Valid => {
                    cliclack::log::info(format!("{}: {}", prompt, value))?;
                    return Ok(value.to_string());
                }
                Validation::Invalid(reason) => {
                    cliclack::log::warning(format!(
                        "Ignoring provided {}: {}",
                        field.label(),
                        reason
                    ))?;
                }
            }
        }

        let input: String = cliclack::input(prompt)
            .placeholder(placeholder)
            .validate(move |input: &String| field.validate(input).into_result())
            .interact()?;

        Ok(input)
    }
}

impl PromptProvider for InteractivePrompts {
    fn answers(&mut self) -> Result<UserAnswers> {
        self.intro()?;

        let client_name = self.ask(Field::ClientName, "Client name", "Acme Corporation")?;
        let package_name = self.ask(Field::PackageName, "Package name", "@acme/ui")?;
        let description = self.ask(
            Field::Description,
            "Package description",
            "Acme's cross-platform component library",
        )?;
        let primary_colour = self.ask(Field::PrimaryColour, "Primary colour", "#3B82F6")?;

        Ok(UserAnswers::new(
            client_name,
            package_name,
            description,
            primary_colour,
        ))
    }

    fn confirm(&mut self, answers: &UserAnswers) -> Result<bool> {
        self.intro()?;

        cliclack::note(
            "Summary",
            format!(
                "Client:      {}\nPackage:     {}\nDescription: {}\nColour:      {}",
                answers.client_name,
                answers.package_name,
                answers.description,
                answers.primary_colour
            ),
        )?;

        let confirm: bool = cliclack::confirm("Apply these changes?")
            .initial_value(true)
            .interact()?;

        if confirm {
            cliclack::outro("Applying changes")?;
        } else {
            cliclack::outro_cancel("Setup cancelled.")?;
        }
        Ok(confirm)
    }

    fn confirm_reinit(&mut self, existing: &ConflictCheck) -> Result<bool> {
        self.intro()?;

        if let ConflictCheck::Conflict {
            package_name,
            client_name,
            ..
        } = existing
        {
            cliclack::log::warning(format!(
                "This directory was already initialized as {} for {}",
                package_name.as_deref().unwrap_or("an unknown package"),
                client_name.as_deref().unwrap_or("an unknown client"),
            ))?;
        }

        let reinit: bool = cliclack::confirm("Re-initialize and overwrite the previous setup?")
            .initial_value(false)
            .interact()?;

        if !reinit {
            cliclack::outro_cancel("Setup cancelled.")?;
        }
        Ok(reinit)
    }
}
