//! Read-only landing page sections.
//!
//! Most sections are static copy. Education and experience read their
//! collection from the API and fall back to a fixed dataset on failure; the
//! failure is logged, never shown.

pub mod content;

use chrono::Datelike;
use serde::Serialize;
use std::fmt;

use crate::api::{self, DataSource, FetchPolicy, ResourceApi};
use crate::models::{Education, Experience, Record, Resource};
use content::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Education,
    Experience,
    Skills,
    Projects,
    Services,
    Contact,
}

impl Section {
    /// Landing page order
    pub const ALL: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Services,
        Section::Contact,
    ];

    /// Scroll anchor used by the navigation bar
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Education => "education-section",
            Section::Experience => "experience-section",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
pub enum SectionView {
    Hero,
    About,
    Education(RemoteList<Education>),
    Experience(RemoteList<Experience>),
    Skills,
    Projects { category: String },
    Services,
    Contact,
}

/// A section collection plus where it came from
#[derive(Debug, Clone, Serialize)]
pub struct RemoteList<R> {
    pub items: Vec<Record<R>>,
    pub source: DataSource,
}

async fn fetch_section<R: Resource>(api: &dyn ResourceApi, fallback: Vec<Record<R>>) -> RemoteList<R> {
    let policy = FetchPolicy::use_fixed_fallback(fallback.clone());
    match api::fetch_with_policy(api, &policy).await {
        Ok(fetched) => RemoteList {
            items: fetched.records,
            source: fetched.source,
        },
        // UseFixedFallback never yields Err
        Err(_) => RemoteList {
            items: fallback,
            source: DataSource::Fallback,
        },
    }
}

pub async fn education_section(api: &dyn ResourceApi) -> RemoteList<Education> {
    fetch_section(api, education_fallback()).await
}

pub async fn experience_section(api: &dyn ResourceApi) -> RemoteList<Experience> {
    fetch_section(api, experience_fallback()).await
}

/// Filter the static showcase; "All" keeps everything
pub fn showcase(category: &str) -> Vec<&'static Showcase> {
    SHOWCASE
        .iter()
        .filter(|p| category.eq_ignore_ascii_case("all") || p.category.eq_ignore_ascii_case(category))
        .collect()
}

pub async fn load_section(api: &dyn ResourceApi, section: Section, category: Option<&str>) -> SectionView {
    match section {
        Section::Hero => SectionView::Hero,
        Section::About => SectionView::About,
        Section::Education => SectionView::Education(education_section(api).await),
        Section::Experience => SectionView::Experience(experience_section(api).await),
        Section::Skills => SectionView::Skills,
        Section::Projects => SectionView::Projects {
            category: category.unwrap_or("All").to_string(),
        },
        Section::Services => SectionView::Services,
        Section::Contact => SectionView::Contact,
    }
}

/// Every section in page order; the two remote sections load concurrently.
pub async fn load_home(api: &dyn ResourceApi) -> Vec<SectionView> {
    let (education, experience) = futures::join!(education_section(api), experience_section(api));

    vec![
        SectionView::Hero,
        SectionView::About,
        SectionView::Education(education),
        SectionView::Experience(experience),
        SectionView::Skills,
        SectionView::Projects {
            category: "All".to_string(),
        },
        SectionView::Services,
        SectionView::Contact,
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub name: &'static str,
    pub tagline: &'static str,
    pub copyright: String,
}

impl Footer {
    pub fn now() -> Self {
        Self::for_year(chrono::Utc::now().year())
    }

    pub fn for_year(year: i32) -> Self {
        Self {
            name: OWNER_NAME,
            tagline: FOOTER_TAGLINE,
            copyright: format!("© {} {}. All rights reserved.", year, FOOTER_HOLDER),
        }
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.tagline)?;
        write!(f, "{}", self.copyright)
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "=".repeat(title.chars().count()))
}

impl fmt::Display for SectionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionView::Hero => {
                writeln!(f, "[{}]", HERO_BADGE)?;
                heading(f, HERO_HEADLINE)?;
                writeln!(f, "{}", HERO_INTRO)?;
                writeln!(f)?;
                for stat in HERO_STATS {
                    writeln!(f, "  {:<5} {}", stat.value, stat.label)?;
                }
                write!(f, "\n  > {}", HERO_ACTIONS.join("   > "))
            }
            SectionView::About => {
                heading(f, "About Me")?;
                writeln!(f, "{}", ABOUT_TITLE)?;
                writeln!(f, "{}", ABOUT_BIO)?;
                for card in ABOUT_CARDS {
                    write!(f, "\n  * {}: {}", card.title, card.description)?;
                }
                Ok(())
            }
            SectionView::Education(list) => {
                heading(f, "Academic Journey")?;
                for item in &list.items {
                    let e = &item.fields;
                    writeln!(f, "  {} - {}", e.degree, e.institution)?;
                    writeln!(f, "    {}", e.duration)?;
                    writeln!(f, "    {}", e.description)?;
                }
                Ok(())
            }
            SectionView::Experience(list) => {
                heading(f, "Journey So Far")?;
                for item in &list.items {
                    let e = &item.fields;
                    writeln!(f, "  {} [{}]", e.role, e.duration)?;
                    match e.location.as_deref().filter(|l| !l.is_empty()) {
                        Some(location) => writeln!(f, "    {} - {}", e.company, location)?,
                        None => writeln!(f, "    {}", e.company)?,
                    }
                    writeln!(f, "    {}", e.description)?;
                }
                Ok(())
            }
            SectionView::Skills => {
                heading(f, "Tech Stack")?;
                writeln!(f, "{}", SKILLS_BLURB)?;
                write!(f, "  {}", SKILL_NAMES.join(" | "))
            }
            SectionView::Projects { category } => {
                writeln!(f, "[My Work]")?;
                heading(f, "Featured Projects")?;
                writeln!(f, "Filter: {} (of {})", category, PROJECT_CATEGORIES.join(", "))?;
                for project in showcase(category) {
                    writeln!(f, "  {} [{}]", project.title, project.category)?;
                    writeln!(f, "    {}", project.description)?;
                }
                Ok(())
            }
            SectionView::Services => {
                heading(f, "What I Offer")?;
                writeln!(f, "{}", SERVICES_HEADLINE)?;
                writeln!(f, "{}", SERVICES_BLURB)?;
                for service in SERVICES {
                    write!(f, "\n  * {}: {}", service.title, service.description)?;
                }
                Ok(())
            }
            SectionView::Contact => {
                heading(f, CONTACT_HEADLINE)?;
                writeln!(f, "{}", CONTACT_BLURB)?;
                for channel in CONTACT_CHANNELS {
                    writeln!(f, "  {:<9} {}", channel.label, channel.value)?;
                }
                write!(f, "  Form: {}", CONTACT_FORM_FIELDS.join(", "))
            }
        }
    }
}
