use serde::{Deserialize, Serialize};

use super::{wire, FieldSpec, Record, Resource, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "wire::text")]
    pub role: String,
    #[serde(deserialize_with = "wire::text")]
    pub company: String,
    #[serde(deserialize_with = "wire::text")]
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "wire::text")]
    pub description: String,
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("role", "Role", "e.g. Senior Frontend Developer"),
    FieldSpec::text("company", "Company", "e.g. Tech Corp"),
    FieldSpec::text("duration", "Duration", "e.g. 2022 - Present"),
    FieldSpec::text("location", "Location", "e.g. San Francisco, CA").optional(),
    FieldSpec::long_text("description", "Description", "What you built and led"),
];

impl Resource for Experience {
    const KIND: ResourceKind = ResourceKind::Experience;

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn placeholder() -> Vec<Record<Self>> {
        vec![Record::new(
            "1",
            Experience {
                role: "Senior Frontend Developer".into(),
                company: "Tech Corp".into(),
                duration: "2022 - Present".into(),
                location: Some("San Francisco, CA".into()),
                description: "Leading the frontend team.".into(),
            },
        )]
    }

    fn title(&self) -> &str {
        &self.role
    }

    fn subtitle(&self) -> Option<String> {
        let mut line = format!("{} ({})", self.company, self.duration);
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            line.push_str(" - ");
            line.push_str(location);
        }
        Some(line)
    }
}
