use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::api::ResourceApi;
use crate::error::RequestError;
use crate::models::{Record, RecordId, Resource};
use crate::prompt::{Confirm, Notifier};
use crate::session::{MemoryStorage, MockAuthenticator, SessionStore};

/// A call observed by [`FakeApi`]
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(String),
    Create(String, Value),
    Update(String, String, Value),
    Delete(String, String),
}

/// In-memory stand-in for the REST backend, one collection for all
/// endpoints. Failures are switched on per verb class.
#[derive(Default)]
pub struct FakeApi {
    rows: Mutex<Vec<Value>>,
    next_id: AtomicU64,
    calls: Mutex<Vec<Call>>,
    fail_list: AtomicBool,
    fail_mutations: AtomicBool,
    on_list: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl FakeApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicU64::new(100),
            ..Self::default()
        })
    }

    pub fn seeded<R: Resource>(records: &[Record<R>]) -> Arc<Self> {
        let api = Self::new();
        {
            let mut rows = api.rows.lock().unwrap();
            for record in records {
                rows.push(serde_json::to_value(record).unwrap());
            }
        }
        api
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    /// Hook run inside every list call, before it answers
    pub fn on_list(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.on_list.lock().unwrap() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::List(_)))
            .count()
    }

    pub fn mutation_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| !matches!(c, Call::List(_)))
            .count()
    }

    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_mutation(&self, endpoint: &str) -> Result<(), RequestError> {
        if self.fail_mutations.load(Ordering::SeqCst) {
            return Err(RequestError::status(endpoint, 500, "mutation rejected"));
        }
        Ok(())
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .position(|row| row["id"] == json!(id.as_str()))
    }
}

#[async_trait]
impl ResourceApi for FakeApi {
    async fn list(&self, endpoint: &str) -> Result<Value, RequestError> {
        self.record(Call::List(endpoint.to_string()));
        {
            let hook = self.on_list.lock().unwrap();
            if let Some(hook) = hook.as_ref() {
                hook();
            }
        }
        tokio::task::yield_now().await;

        if self.fail_list.load(Ordering::SeqCst) {
            return Err(RequestError::status(endpoint, 503, "backend down"));
        }
        Ok(Value::Array(self.rows()))
    }

    async fn create(&self, endpoint: &str, body: Value) -> Result<Value, RequestError> {
        self.record(Call::Create(endpoint.to_string(), body.clone()));
        self.check_mutation(endpoint)?;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst).to_string();
        let mut row = body;
        row["id"] = json!(id);
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, endpoint: &str, id: &RecordId, body: Value) -> Result<Value, RequestError> {
        self.record(Call::Update(endpoint.to_string(), id.to_string(), body.clone()));
        self.check_mutation(endpoint)?;

        let index = self
            .position(id)
            .ok_or_else(|| RequestError::status(endpoint, 404, "no such record"))?;
        let mut row = body;
        row["id"] = json!(id.as_str());
        self.rows.lock().unwrap()[index] = row.clone();
        Ok(row)
    }

    async fn delete(&self, endpoint: &str, id: &RecordId) -> Result<Value, RequestError> {
        self.record(Call::Delete(endpoint.to_string(), id.to_string()));
        self.check_mutation(endpoint)?;

        if let Some(index) = self.position(id) {
            self.rows.lock().unwrap().remove(index);
        }
        Ok(Value::Null)
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Confirmation with a fixed answer that remembers every question
#[derive(Debug)]
pub struct ScriptedConfirm {
    answer: bool,
    asked: Mutex<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, question: &str) -> bool {
        self.asked.lock().unwrap().push(question.to_string());
        self.answer
    }
}

/// Session store over memory storage, optionally already logged in
pub fn session_store(logged_in: bool) -> Arc<SessionStore> {
    let store = SessionStore::open(
        Arc::new(MockAuthenticator::new()),
        Arc::new(MemoryStorage::new()),
        Arc::new(RecordingNotifier::default()),
    );
    if logged_in {
        assert!(store.login(MockAuthenticator::DEFAULT_EMAIL, MockAuthenticator::DEFAULT_PASSWORD));
    }
    Arc::new(store)
}
