use clap::Subcommand;
use inquire::{InquireError, Select, Text};
use serde_json::json;
use std::fmt;

use crate::cli::utils::{output_success, output_view, parse_assignments};
use crate::cli::{AppContext, OutputFormat};
use crate::error::ScreenError;
use crate::models::field::{self, FieldKind, FieldSpec};
use crate::models::{Education, Experience, Project, RecordId, Resource, ResourceKind, Skill};
use crate::prompt::{AssumeYes, Confirm, InquireConfirm};
use crate::screen::{DeleteOutcome, ListScreen, SubmitOutcome, DELETE_FAILED, SUBMIT_FAILED};

#[derive(Subcommand)]
pub enum ManageCommands {
    #[command(about = "List the collection")]
    List,

    #[command(about = "Add a new record")]
    Add {
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Field assignment (repeatable)")]
        set: Vec<String>,
    },

    #[command(about = "Edit a record, starting from its current values")]
    Edit {
        #[arg(help = "Record ID")]
        id: String,
        #[arg(long = "set", value_name = "FIELD=VALUE", help = "Field assignment (repeatable)")]
        set: Vec<String>,
    },

    #[command(about = "Delete a record after confirmation")]
    Delete {
        #[arg(help = "Record ID")]
        id: String,
        #[arg(long, help = "Skip the confirmation prompt")]
        yes: bool,
    },

    #[command(about = "Browse and edit the collection with prompts")]
    Interactive,
}

pub async fn handle(
    ctx: &AppContext,
    kind: ResourceKind,
    cmd: ManageCommands,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match kind {
        ResourceKind::Education => run::<Education>(ctx, cmd, output_format).await,
        ResourceKind::Experience => run::<Experience>(ctx, cmd, output_format).await,
        ResourceKind::Projects => run::<Project>(ctx, cmd, output_format).await,
        ResourceKind::Skills => run::<Skill>(ctx, cmd, output_format).await,
    }
}

/// Render a manage screen as opened from its route
pub async fn list(ctx: &AppContext, kind: ResourceKind, output_format: OutputFormat) -> anyhow::Result<()> {
    handle(ctx, kind, ManageCommands::List, output_format).await
}

async fn run<R: Resource>(ctx: &AppContext, cmd: ManageCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut screen: ListScreen<R> = ListScreen::new(ctx.api.clone(), ctx.session.clone(), ctx.notifier.clone());
    screen.mount().await;

    match cmd {
        ManageCommands::List => output_view(&output_format, &screen.view()),
        ManageCommands::Add { set } => {
            screen.open_create()?;
            apply_assignments(&mut screen, &set)?;
            submit(&mut screen, output_format).await
        }
        ManageCommands::Edit { id, set } => {
            screen.open_edit(&RecordId::new(id))?;
            apply_assignments(&mut screen, &set)?;
            submit(&mut screen, output_format).await
        }
        ManageCommands::Delete { id, yes } => {
            let confirm: Box<dyn Confirm> = if yes { Box::new(AssumeYes) } else { Box::new(InquireConfirm) };
            delete(&mut screen, &RecordId::new(id), confirm.as_ref(), output_format).await
        }
        ManageCommands::Interactive => interactive(&mut screen).await,
    }
}

fn apply_assignments<R: Resource>(screen: &mut ListScreen<R>, raw: &[String]) -> anyhow::Result<()> {
    for (name, value) in parse_assignments(raw)? {
        screen.set_field(&name, &value)?;
    }
    Ok(())
}

async fn submit<R: Resource>(screen: &mut ListScreen<R>, output_format: OutputFormat) -> anyhow::Result<()> {
    let singular = R::KIND.singular();

    match screen.submit().await? {
        SubmitOutcome::Created(Some(record)) => output_success(
            &output_format,
            &format!("Created {} {}", singular, record.id),
            Some(json!({ "record": record })),
        ),
        SubmitOutcome::Created(None) => output_success(&output_format, &format!("Created {}", singular), None),
        SubmitOutcome::Updated(id) => output_success(
            &output_format,
            &format!("Updated {} {}", singular, id),
            Some(json!({ "id": id })),
        ),
        SubmitOutcome::Failed => anyhow::bail!(SUBMIT_FAILED),
        SubmitOutcome::Discarded => Ok(()),
    }
}

async fn delete<R: Resource>(
    screen: &mut ListScreen<R>,
    id: &RecordId,
    confirm: &dyn Confirm,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match screen.delete(id, confirm).await? {
        DeleteOutcome::Deleted => output_success(
            &output_format,
            &format!("Deleted {} {}", R::KIND.singular(), id),
            Some(json!({ "id": id })),
        ),
        DeleteOutcome::Declined => output_success(&output_format, "Delete cancelled", None),
        DeleteOutcome::Failed => anyhow::bail!(DELETE_FAILED),
        DeleteOutcome::Discarded => Ok(()),
    }
}

enum Action {
    AddNew,
    Edit(RecordId, String),
    Delete(RecordId, String),
    Refresh,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::AddNew => write!(f, "Add New"),
            Action::Edit(id, title) => write!(f, "Edit #{} {}", id, title),
            Action::Delete(id, title) => write!(f, "Delete #{} {}", id, title),
            Action::Refresh => write!(f, "Refresh"),
            Action::Quit => write!(f, "Quit"),
        }
    }
}

/// Choices offered by the menu; mutation entries only with a session, and
/// no per-row entries while sample data is shown
fn actions<R: Resource>(screen: &ListScreen<R>) -> Vec<Action> {
    let mut actions = Vec::new();

    if screen.session().is_authenticated() {
        actions.push(Action::AddNew);
    }
    if screen.session().is_authenticated() && screen.rows_editable() {
        for record in screen.records() {
            actions.push(Action::Edit(record.id.clone(), record.fields.title().to_string()));
        }
        for record in screen.records() {
            actions.push(Action::Delete(record.id.clone(), record.fields.title().to_string()));
        }
    }

    actions.push(Action::Refresh);
    actions.push(Action::Quit);
    actions
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

async fn interactive<R: Resource>(screen: &mut ListScreen<R>) -> anyhow::Result<()> {
    loop {
        println!("\n{}\n", screen.view());

        match Select::new("Select one", actions(screen)).prompt() {
            Ok(Action::AddNew) => {
                screen.open_create()?;
                edit_and_submit(screen).await?;
            }
            Ok(Action::Edit(id, _)) => {
                screen.open_edit(&id)?;
                edit_and_submit(screen).await?;
            }
            Ok(Action::Delete(id, _)) => {
                screen.delete(&id, &InquireConfirm).await?;
            }
            Ok(Action::Refresh) => screen.refresh().await,
            Ok(Action::Quit) => return Ok(()),
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Fill the open form, then submit. A failed request keeps the form so the
/// user can retry or cancel.
async fn edit_and_submit<R: Resource>(screen: &mut ListScreen<R>) -> anyhow::Result<()> {
    loop {
        if !fill_form(screen)? {
            screen.cancel();
            return Ok(());
        }

        match screen.submit().await {
            Ok(SubmitOutcome::Failed) => {
                if !InquireConfirm.confirm("Retry?") {
                    screen.cancel();
                    return Ok(());
                }
            }
            Ok(_) => return Ok(()),
            Err(ScreenError::InvalidForm(e)) => eprintln!("! {}", e),
            Err(e) => return Err(e.into()),
        }
    }
}

/// Prompt for every schema field; `false` when the user backs out
fn fill_form<R: Resource>(screen: &mut ListScreen<R>) -> anyhow::Result<bool> {
    for spec in R::schema() {
        loop {
            let current = field::field_value(screen.form(), spec.name).unwrap_or_default();
            let answer = match prompt_field(spec, &current) {
                Ok(answer) => answer,
                Err(e) if is_cancel(&e) => return Ok(false),
                Err(e) => return Err(e.into()),
            };

            match screen.set_field(spec.name, &answer) {
                Ok(()) => break,
                Err(ScreenError::InvalidForm(e)) => eprintln!("! {}", e),
                Err(e) => return Err(e.into()),
            }
        }
    }
    Ok(true)
}

const NO_CHOICE: &str = "(none)";

fn prompt_field(spec: &FieldSpec, current: &str) -> Result<String, InquireError> {
    let label = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    match spec.kind {
        FieldKind::Choice(options) => {
            let mut choices: Vec<&str> = Vec::new();
            if !spec.required {
                choices.push(NO_CHOICE);
            }
            choices.extend_from_slice(options);
            let cursor = choices
                .iter()
                .position(|c| c.eq_ignore_ascii_case(current))
                .unwrap_or(0);

            let picked = Select::new(&label, choices).with_starting_cursor(cursor).prompt()?;
            Ok(if picked == NO_CHOICE { String::new() } else { picked.to_string() })
        }
        FieldKind::Text | FieldKind::LongText | FieldKind::Integer { .. } => Text::new(&label)
            .with_initial_value(current)
            .with_placeholder(spec.example)
            .prompt(),
    }
}
