use serde::Serialize;
use std::fmt;

use crate::cli::utils::output_view;
use crate::cli::{AppContext, OutputFormat};
use crate::sections::{self, Footer, Section, SectionView};
use crate::shell::{self, NavBar, Screen};

#[derive(Debug, Serialize)]
struct HomePage {
    nav: NavBar,
    sections: Vec<SectionView>,
    footer: Footer,
}

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.nav)?;
        for section in &self.sections {
            writeln!(f, "\n{}", section)?;
        }
        write!(f, "\n{}", self.footer)
    }
}

pub async fn home(ctx: &AppContext, output_format: OutputFormat) -> anyhow::Result<()> {
    let page = HomePage {
        nav: shell::nav_bar(ctx.session.current_user().as_ref()),
        sections: sections::load_home(ctx.api.as_ref()).await,
        footer: Footer::now(),
    };
    output_view(&output_format, &page)
}

pub async fn show(
    ctx: &AppContext,
    section: Section,
    category: Option<&str>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let view = sections::load_section(ctx.api.as_ref(), section, category).await;
    output_view(&output_format, &view)
}

pub async fn open(ctx: &AppContext, path: &str, output_format: OutputFormat) -> anyhow::Result<()> {
    let screen = shell::resolve(path).ok_or_else(|| anyhow::anyhow!("No route for '{}'", path))?;
    tracing::debug!("Opening {} as {:?}", path, screen);

    match screen {
        Screen::Home => home(ctx, output_format).await,
        Screen::Login => output_view(&output_format, &shell::login_form()),
        Screen::Register => output_view(&output_format, &shell::register_form()),
        Screen::Manage(kind) => super::manage::list(ctx, kind, output_format).await,
    }
}

pub fn nav(ctx: &AppContext, output_format: OutputFormat) -> anyhow::Result<()> {
    output_view(&output_format, &shell::nav_bar(ctx.session.current_user().as_ref()))
}
