use serde::Serialize;
use std::fmt;

use super::controller::{FormMode, ListScreen, LoadState, ModalState};
use crate::api::DataSource;
use crate::models::field::{self, FieldKind};
use crate::models::Resource;

pub const EMPTY_MESSAGE: &str = "No records found. Click \"Add New\" to create one.";

/// Render model of a list screen. Mutation affordances are absent (not
/// disabled) when nobody is logged in.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenView {
    pub resource: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub state: LoadState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<DataSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_action: Option<&'static str>,
    pub rows: Vec<RowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modal: Option<ModalView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RowView {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub details: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<RowActions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalView {
    pub title: String,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub required: bool,
    pub value: Option<String>,
    pub hint: String,
}

impl<R: Resource> ListScreen<R> {
    pub fn view(&self) -> ScreenView {
        let authenticated = self.session().is_authenticated();
        let editable = self.rows_editable();
        let (heading, tagline) = R::KIND.heading();

        let rows = self
            .records()
            .iter()
            .map(|record| RowView {
                id: record.id.to_string(),
                title: record.fields.title().to_string(),
                subtitle: record.fields.subtitle(),
                details: field::describe(&record.fields)
                    .into_iter()
                    .map(|(label, value)| (label.to_string(), value))
                    .collect(),
                actions: authenticated.then_some(RowActions {
                    edit: editable,
                    delete: editable,
                }),
            })
            .collect();

        ScreenView {
            resource: R::KIND.name(),
            heading,
            tagline,
            state: self.load_state(),
            source: self.source(),
            add_action: authenticated.then_some("Add New"),
            rows,
            empty_message: (self.load_state() == LoadState::Empty).then_some(EMPTY_MESSAGE),
            modal: self.modal_view(),
        }
    }

    fn modal_view(&self) -> Option<ModalView> {
        let ModalState::Open { mode } = self.modal() else {
            return None;
        };

        let (title, submit_label) = match mode {
            FormMode::Create => (format!("Add New {}", R::KIND.singular()), "Save"),
            FormMode::Edit(_) => (format!("Edit {}", R::KIND.singular()), "Update"),
        };

        let fields = R::schema()
            .iter()
            .map(|spec| FieldView {
                name: spec.name,
                label: spec.label,
                required: spec.required,
                value: field::field_value(self.form(), spec.name),
                hint: match spec.kind {
                    FieldKind::Choice(options) => options.join(" | "),
                    FieldKind::Integer { min, max } => format!("{}-{}", min, max),
                    FieldKind::Text | FieldKind::LongText => spec.example.to_string(),
                },
            })
            .collect();

        Some(ModalView {
            title,
            submit_label,
            fields,
        })
    }
}

impl fmt::Display for ScreenView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "{}", self.tagline)?;
        if let Some(action) = self.add_action {
            writeln!(f, "[+ {}]", action)?;
        }
        if self.source == Some(DataSource::Fallback) {
            writeln!(f, "(offline: showing sample data)")?;
        }

        if let Some(message) = self.empty_message {
            write!(f, "\n{}", message)?;
        }
        for row in &self.rows {
            write!(f, "\n#{} {}", row.id, row.title)?;
            if let Some(subtitle) = &row.subtitle {
                write!(f, " - {}", subtitle)?;
            }
            for (label, value) in &row.details {
                write!(f, "\n    {}: {}", label, value)?;
            }
            if let Some(RowActions { edit: true, delete: true }) = row.actions {
                write!(f, "\n    [Edit] [Delete]")?;
            }
        }

        if let Some(modal) = &self.modal {
            write!(f, "\n\n{}", modal)?;
        }
        Ok(())
    }
}

impl fmt::Display for ModalView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for field in &self.fields {
            let marker = if field.required { "*" } else { " " };
            writeln!(
                f,
                "  {}{:<18} {}",
                marker,
                field.label,
                field.value.as_deref().unwrap_or("")
            )?;
        }
        write!(f, "  [Cancel] [{}]", self.submit_label)
    }
}
