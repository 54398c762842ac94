use serde::{Deserialize, Serialize};

use super::{wire, FieldSpec, Record, Resource, ResourceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "wire::text")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(deserialize_with = "wire::text")]
    pub description: String,
    /// Comma-joined list, e.g. "React, Tailwind"
    #[serde(deserialize_with = "wire::text")]
    pub technologies: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Project {
    pub fn technology_list(&self) -> Vec<&str> {
        self.technologies
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("title", "Project Title", "e.g. Portfolio Website"),
    FieldSpec::text("category", "Category", "e.g. Web App").optional(),
    FieldSpec::long_text("description", "Description", "What the project does"),
    FieldSpec::text("technologies", "Technologies", "Comma separated, e.g. React, Tailwind"),
    FieldSpec::text("githubUrl", "GitHub URL", "https://github.com/...").optional(),
    FieldSpec::text("liveUrl", "Live URL", "https://...").optional(),
    FieldSpec::text("imageUrl", "Image URL", "https://.../cover.png").optional(),
];

impl Resource for Project {
    const KIND: ResourceKind = ResourceKind::Projects;

    fn schema() -> &'static [FieldSpec] {
        SCHEMA
    }

    fn placeholder() -> Vec<Record<Self>> {
        vec![Record::new(
            "1",
            Project {
                title: "Portfolio Website".into(),
                category: Some("Web App".into()),
                description: "Personal portfolio built with React.".into(),
                technologies: "React, Tailwind".into(),
                github_url: Some("#".into()),
                live_url: Some("#".into()),
                image_url: None,
            },
        )]
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn subtitle(&self) -> Option<String> {
        let techs = self.technology_list();
        match (&self.category, techs.is_empty()) {
            (Some(category), false) => Some(format!("{} [{}]", category, techs.join(", "))),
            (Some(category), true) => Some(category.clone()),
            (None, false) => Some(format!("[{}]", techs.join(", "))),
            (None, true) => None,
        }
    }
}
