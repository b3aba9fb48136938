use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DomainError;

/// Which built-in skeleton to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKey {
    Class,
    Controller,
    Entity,
}

impl TemplateKey {
    pub const ALL: [TemplateKey; 3] = [Self::Class, Self::Controller, Self::Entity];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Controller => "controller",
            Self::Entity => "entity",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Class => "Simple Class",
            Self::Controller => "Controller Class",
            Self::Entity => "Entity Class",
        }
    }

    /// Sub-path used when `--directory` is not given. Empty means the CWD.
    pub const fn default_sub_path(self) -> &'static str {
        match self {
            Self::Class => "",
            Self::Controller => "Controllers",
            Self::Entity => "Models",
        }
    }

    /// Class name used when `--name` is not given.
    pub const fn default_class_name(self) -> &'static str {
        match self {
            Self::Class => "MyClass",
            Self::Controller => "MyController",
            Self::Entity => "MyEntity",
        }
    }
}

impl fmt::Display for TemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKey {
    type Err = DomainError;

    /// Case-insensitive. An empty value is a missing template, anything else
    /// unmatched is unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DomainError::MissingTemplate);
        }
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == lowered)
            .ok_or(DomainError::UnknownTemplate { template: lowered })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Controller".parse::<TemplateKey>(), Ok(TemplateKey::Controller));
        assert_eq!("ENTITY".parse::<TemplateKey>(), Ok(TemplateKey::Entity));
        assert_eq!("class".parse::<TemplateKey>(), Ok(TemplateKey::Class));
    }

    #[test]
    fn empty_is_missing() {
        assert_eq!("".parse::<TemplateKey>(), Err(DomainError::MissingTemplate));
    }

    #[test]
    fn unknown_reports_lowered_value() {
        assert_eq!(
            "Widget".parse::<TemplateKey>(),
            Err(DomainError::UnknownTemplate {
                template: "widget".into()
            })
        );
    }

    #[test]
    fn defaults_per_template() {
        assert_eq!(TemplateKey::Class.default_sub_path(), "");
        assert_eq!(TemplateKey::Controller.default_class_name(), "MyController");
        assert_eq!(TemplateKey::Entity.default_sub_path(), "Models");
    }
}
