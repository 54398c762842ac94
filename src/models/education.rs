use serde::{Deserialize, Serialize};

use super::{wire, FieldSpec, Record, Resource, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "wire::text")]
    pub institution: String,
    #[serde(deserialize_with = "wire::text")]
    pub degree: String,
    #[serde(deserialize_with = "wire::text")]
    pub duration: String,
    #[serde(deserialize_with = "wire::text")]
    pub description: String,
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("institution", "Institution", "e.g. University of Tech"),
    FieldSpec::text("degree", "Degree", "e.g. B.Sc. Computer Science"),
    FieldSpec::text("duration", "Duration", "e.g. 2019-2023"),
    FieldSpec::long_text("description", "Description", "Focus areas, honors, highlights"),
];

impl Resource for Education {
    const KIND: ResourceKind = ResourceKind::Education;

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn placeholder() -> Vec<Record<Self>> {
        vec![Record::new(
            "1",
            Education {
                institution: "University of Tech".into(),
                degree: "B.Sc. Computer Science".into(),
                duration: "2019-2023".into(),
                description: "Focus on Software Engineering".into(),
            },
        )]
    }

    fn title(&self) -> &str {
        &self.degree
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("{} ({})", self.institution, self.duration))
    }
}
