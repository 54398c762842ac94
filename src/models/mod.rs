pub mod education;
pub mod experience;
pub mod field;
pub mod project;
pub mod record;
pub mod skill;
pub mod wire;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use education::Education;
pub use experience::Experience;
pub use field::{FieldKind, FieldSpec};
pub use project::Project;
pub use record::{Record, RecordId};
pub use skill::Skill;

/// The four resource collections exposed by the portfolio API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Education,
    Experience,
    Projects,
    Skills,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Education,
        ResourceKind::Experience,
        ResourceKind::Projects,
        ResourceKind::Skills,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Education => "education",
            ResourceKind::Experience => "experience",
            ResourceKind::Projects => "projects",
            ResourceKind::Skills => "skills",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ResourceKind::Education => "/education",
            ResourceKind::Experience => "/experience",
            ResourceKind::Projects => "/projects",
            ResourceKind::Skills => "/skills",
        }
    }

    /// Singular noun used in form titles ("Add New Skill")
    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Education => "Education",
            ResourceKind::Experience => "Experience",
            ResourceKind::Projects => "Project",
            ResourceKind::Skills => "Skill",
        }
    }

    /// Screen heading and tagline
    pub fn heading(&self) -> (&'static str, &'static str) {
        match self {
            ResourceKind::Education => ("Education Management", "Manage your academic background"),
            ResourceKind::Experience => ("Experience Management", "Manage your professional journey"),
            ResourceKind::Projects => ("Projects Management", "Manage your portfolio projects"),
            ResourceKind::Skills => ("Skills Management", "Manage your technical skills"),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow::anyhow!("Unknown resource '{}'", s))
    }
}

/// A resource field set managed by a list screen.
///
/// Implemented by the record structs themselves; the identity lives outside
/// in [`Record`], so a form value and a record's fields share one type.
pub trait Resource:
    Clone + Default + PartialEq + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: ResourceKind;

    fn schema() -> &'static [FieldSpec];

    /// Deterministic demo dataset substituted when the list fetch fails
    fn placeholder() -> Vec<Record<Self>>;

    fn title(&self) -> &str;

    fn subtitle(&self) -> Option<String> {
        None
    }
}
