use serde::{Deserialize, Serialize};

use super::{wire, FieldKind, FieldSpec, Record, Resource, ResourceKind};

pub const SKILL_CATEGORIES: &[&str] = &["Frontend", "Backend", "Database", "DevOps", "Tools"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "wire::text")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Percentage, 0-100
    #[serde(deserialize_with = "wire::percent")]
    pub proficiency: u8,
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("name", "Skill Name", "e.g. React.js"),
    FieldSpec::text("category", "Category", "Frontend, Backend, Database, DevOps or Tools")
        .optional()
        .with_kind(FieldKind::Choice(SKILL_CATEGORIES)),
    FieldSpec::text("proficiency", "Proficiency %", "0-100")
        .with_kind(FieldKind::Integer { min: 0, max: 100 }),
];

impl Resource for Skill {
    const KIND: ResourceKind = ResourceKind::Skills;

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn placeholder() -> Vec<Record<Self>> {
        vec![
            Record::new(
                "1",
                Skill {
                    name: "React.js".into(),
                    category: Some("Frontend".into()),
                    proficiency: 90,
                },
            ),
            Record::new(
                "2",
                Skill {
                    name: "Node.js".into(),
                    category: Some("Backend".into()),
                    proficiency: 85,
                },
            ),
        ]
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn subtitle(&self) -> Option<String> {
        match (&self.category, self.proficiency) {
            (Some(category), 0) => Some(category.clone()),
            (Some(category), p) => Some(format!("{} - {}%", category, p)),
            (None, 0) => None,
            (None, p) => Some(format!("{}%", p)),
        }
    }
}
