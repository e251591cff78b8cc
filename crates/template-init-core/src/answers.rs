//! Answers collected from the user

use crate::validate::{
    validate_client_name, validate_description, validate_hex_colour, validate_package_name,
    Validation,
};
use serde::{Deserialize, Serialize};

/// The four values that customize the template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAnswers {
    pub client_name: String,
    pub package_name: String,
    pub description: String,
    pub primary_colour: String,
}

/// Which answer a validation failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ClientName,
    PackageName,
    Description,
    PrimaryColour,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::ClientName => "client name",
            Field::PackageName => "package name",
            Field::Description => "description",
            Field::PrimaryColour => "primary colour",
        }
    }

    /// Run the validator belonging to this field
    pub fn validate(&self, input: &str) -> Validation {
        match self {
            Field::ClientName => validate_client_name(input),
            Field::PackageName => validate_package_name(input),
            Field::Description => validate_description(input),
            Field::PrimaryColour => validate_hex_colour(input),
        }
    }
}

impl UserAnswers {
    /// Build answers from raw input, trimming the free-text fields
    pub fn new(
        client_name: impl AsRef<str>,
        package_name: impl Into<String>,
        description: impl AsRef<str>,
        primary_colour: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.as_ref().trim().to_string(),
            package_name: package_name.into(),
            description: description.as_ref().trim().to_string(),
            primary_colour: primary_colour.into(),
        }
    }

    /// Validate every field, returning the first failure
    pub fn validate(&self) -> Result<(), (Field, String)> {
        let checks = [
            (Field::ClientName, &self.client_name),
            (Field::PackageName, &self.package_name),
            (Field::Description, &self.description),
            (Field::PrimaryColour, &self.primary_colour),
        ];

        for (field, value) in checks {
            if let Validation::Invalid(reason) = field.validate(value) {
                return Err((field, reason));
            }
        }
        Ok(())
    }
}
