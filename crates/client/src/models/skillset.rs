//! Skillset models.
//!
//! A skillset is an ordered pipeline of [`Skill`]s that an indexer runs over
//! each document. Construction validates the name and requires at least one
//! skill, so an invalid skillset can never be sent.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ClientError, ConfigurationError, Result};
use crate::models::skills::Skill;
use crate::resource::{CrudResource, ResourceKind};
use crate::wire::{
    Loadable, WireFormat, WirePayload, json_kind, require_field, strip_service_annotations,
};

/// A named, non-empty, ordered sequence of skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Skillset {
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    description: String,
    skills: Vec<Skill>,
}

impl Skillset {
    /// Create a skillset.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `name` is empty or `skills` is empty.
    pub fn new(
        name: impl Into<String>,
        skills: Vec<Skill>,
        description: Option<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ConfigurationError::MissingName {
                resource: ResourceKind::Skillset,
            }
            .into());
        }
        if skills.is_empty() {
            return Err(ConfigurationError::EmptySkillset.into());
        }

        Ok(Self {
            name,
            description: description.unwrap_or_default(),
            skills,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Append a skill; it runs after every skill already present.
    pub fn push_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }
}

impl WireFormat for Skillset {}

impl CrudResource for Skillset {
    const KIND: ResourceKind = ResourceKind::Skillset;

    fn name(&self) -> &str {
        &self.name
    }
}

impl Loadable for Skillset {
    /// Rebuild a skillset, validating every element of `skills`.
    ///
    /// A missing `description` becomes the empty string.
    fn load(data: impl Into<WirePayload>) -> Result<Self> {
        let mut map = data.into().into_object()?;
        strip_service_annotations(&mut map);
        require_field(&map, "name")?;
        require_field(&map, "skills")?;

        let name = match map.remove("name") {
            Some(Value::String(name)) => name,
            _ => return Err(ClientError::InvalidPayload("name must be a string".into())),
        };
        let description = match map.remove("description") {
            None => String::new(),
            Some(Value::String(description)) => description,
            Some(other) => {
                return Err(ClientError::InvalidPayload(format!(
                    "description must be a string, got {}",
                    json_kind(&other)
                )));
            }
        };
        let elements = match map.remove("skills") {
            Some(Value::Array(elements)) => elements,
            Some(other) => {
                return Err(ClientError::InvalidPayload(format!(
                    "skills must be an array, got {}",
                    json_kind(&other)
                )));
            }
            None => Vec::new(),
        };

        let skills = elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(_) => Skill::load(element),
                other => Err(ConfigurationError::InvalidSkill {
                    index,
                    reason: format!("expected a skill object, got {}", json_kind(&other)),
                }
                .into()),
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(name, skills, Some(description))
    }
}
