use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::api::{self, DataSource, FetchPolicy, ResourceApi};
use crate::error::{Affordance, RequestError, ScreenError};
use crate::models::field;
use crate::models::{Record, RecordId, Resource};
use crate::prompt::{Confirm, Notifier};
use crate::session::SessionStore;

pub const DELETE_QUESTION: &str = "Are you sure you want to delete this item?";
pub const SUBMIT_FAILED: &str = "Operation failed.";
pub const DELETE_FAILED: &str = "Delete failed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open { mode: FormMode },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<R> {
    /// Created; the record is `None` when the server did not echo it back
    Created(Option<Record<R>>),
    Updated(RecordId),
    /// The request failed; the modal is still open with the form intact
    Failed,
    /// The screen was unmounted while the request was in flight
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    Failed,
    Discarded,
}

/// Marks a screen as gone so late completions are dropped.
#[derive(Debug, Clone)]
pub struct UnmountHandle(Arc<AtomicBool>);

impl UnmountHandle {
    pub fn unmount(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Generic list/create/update/delete screen over one resource collection.
///
/// Every transition takes `&mut self` and awaits its request before
/// changing state, so a screen never has two requests in flight. The shown
/// collection only ever changes through a full list fetch.
pub struct ListScreen<R: Resource> {
    api: Arc<dyn ResourceApi>,
    session: Arc<SessionStore>,
    notifier: Arc<dyn Notifier>,
    policy: FetchPolicy<R>,
    records: Vec<Record<R>>,
    source: Option<DataSource>,
    load: LoadState,
    modal: ModalState,
    form: R,
    mounted: Arc<AtomicBool>,
}

impl<R: Resource> ListScreen<R> {
    pub fn new(api: Arc<dyn ResourceApi>, session: Arc<SessionStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_policy(api, session, notifier, FetchPolicy::placeholder())
    }

    pub fn with_policy(
        api: Arc<dyn ResourceApi>,
        session: Arc<SessionStore>,
        notifier: Arc<dyn Notifier>,
        policy: FetchPolicy<R>,
    ) -> Self {
        Self {
            api,
            session,
            notifier,
            policy,
            records: Vec::new(),
            source: None,
            load: LoadState::Loading,
            modal: ModalState::Closed,
            form: R::default(),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn records(&self) -> &[Record<R>] {
        &self.records
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn source(&self) -> Option<DataSource> {
        self.source
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn form(&self) -> &R {
        &self.form
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn record(&self, id: &RecordId) -> Option<&Record<R>> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn unmount_handle(&self) -> UnmountHandle {
        UnmountHandle(self.mounted.clone())
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    fn require_session(&self, affordance: Affordance) -> Result<(), ScreenError> {
        if self.session.is_authenticated() {
            Ok(())
        } else {
            Err(ScreenError::AffordanceHidden(affordance))
        }
    }

    fn require_closed_modal(&self) -> Result<(), ScreenError> {
        match self.modal {
            ModalState::Closed => Ok(()),
            ModalState::Open { .. } => Err(ScreenError::ModalAlreadyOpen),
        }
    }

    /// Fallback rows carry placeholder ids that must never reach the server
    fn require_remote_record(&self, id: &RecordId) -> Result<(), ScreenError> {
        match self.source {
            Some(DataSource::Fallback) => Err(ScreenError::SampleRecord {
                resource: R::KIND.name(),
                id: id.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Whether the shown rows came from the server and may be edited or deleted
    pub fn rows_editable(&self) -> bool {
        self.source != Some(DataSource::Fallback)
    }

    /// Initial list fetch
    pub async fn mount(&mut self) {
        self.refresh().await;
    }

    /// Full list fetch. Failure degrades to the policy's fallback dataset.
    pub async fn refresh(&mut self) {
        self.load = LoadState::Loading;

        let result = api::fetch_with_policy(self.api.as_ref(), &self.policy).await;
        if !self.is_mounted() {
            tracing::debug!("Dropping {} list: screen unmounted", R::KIND);
            return;
        }

        match result {
            Ok(fetched) => {
                self.records = fetched.records;
                self.source = Some(fetched.source);
            }
            Err(e) => {
                tracing::error!("Loading {} failed: {}", R::KIND, e);
                self.records.clear();
                self.source = None;
            }
        }

        self.load = if self.records.is_empty() {
            LoadState::Empty
        } else {
            LoadState::Populated
        };
    }

    /// "Add New": empty form in create mode
    pub fn open_create(&mut self) -> Result<(), ScreenError> {
        self.require_session(Affordance::AddNew)?;
        self.require_closed_modal()?;
        self.form = R::default();
        self.modal = ModalState::Open { mode: FormMode::Create };
        Ok(())
    }

    /// Edit: form pre-filled verbatim from the selected record
    pub fn open_edit(&mut self, id: &RecordId) -> Result<(), ScreenError> {
        self.require_session(Affordance::Edit)?;
        self.require_closed_modal()?;
        self.require_remote_record(id)?;
        let record = self.record(id).ok_or_else(|| ScreenError::UnknownRecord {
            resource: R::KIND.name(),
            id: id.to_string(),
        })?;

        self.form = record.fields.clone();
        self.modal = ModalState::Open {
            mode: FormMode::Edit(id.clone()),
        };
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), ScreenError> {
        if self.modal == ModalState::Closed {
            return Err(ScreenError::ModalClosed);
        }
        self.form = field::assign(&self.form, name, raw)?;
        Ok(())
    }

    /// Close the modal and throw away the form; no request is made
    pub fn cancel(&mut self) {
        self.modal = ModalState::Closed;
        self.form = R::default();
    }

    pub async fn submit(&mut self) -> Result<SubmitOutcome<R>, ScreenError> {
        let mode = match &self.modal {
            ModalState::Open { mode } => mode.clone(),
            ModalState::Closed => return Err(ScreenError::ModalClosed),
        };
        field::validate(&self.form)?;

        let api = self.api.as_ref();
        let result: Result<SubmitOutcome<R>, RequestError> = match &mode {
            FormMode::Edit(id) => api::update_record(api, id, &self.form)
                .await
                .map(|()| SubmitOutcome::Updated(id.clone())),
            FormMode::Create => api::create_record(api, &self.form)
                .await
                .map(SubmitOutcome::Created),
        };

        if !self.is_mounted() {
            return Ok(SubmitOutcome::Discarded);
        }

        match result {
            Ok(outcome) => {
                self.cancel();
                self.refresh().await;
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!("Operation failed on {}: {}", R::KIND, e);
                self.notifier.notify(SUBMIT_FAILED);
                Ok(SubmitOutcome::Failed)
            }
        }
    }

    /// Delete after an explicit confirmation; a declined prompt makes no request.
    pub async fn delete(&mut self, id: &RecordId, confirm: &dyn Confirm) -> Result<DeleteOutcome, ScreenError> {
        self.require_session(Affordance::Delete)?;
        self.require_remote_record(id)?;

        if !confirm.confirm(DELETE_QUESTION) {
            return Ok(DeleteOutcome::Declined);
        }

        let result = api::delete_record::<R>(self.api.as_ref(), id).await;
        if !self.is_mounted() {
            return Ok(DeleteOutcome::Discarded);
        }

        match result {
            Ok(()) => {
                self.refresh().await;
                Ok(DeleteOutcome::Deleted)
            }
            Err(e) => {
                tracing::error!("Delete failed on {} {}: {}", R::KIND, id, e);
                self.notifier.notify(DELETE_FAILED);
                Ok(DeleteOutcome::Failed)
            }
        }
    }
}
