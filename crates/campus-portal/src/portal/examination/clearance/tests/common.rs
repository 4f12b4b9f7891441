use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use axum::Extension;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::portal::auth::{AuthError, Authenticator, Student, StudentId};
use crate::portal::examination::clearance::domain::ClearanceRecord;
use crate::portal::examination::clearance::repository::ClearanceStore;
use crate::portal::examination::clearance::{clearance_router, ClearanceService};
use crate::portal::store::StoreError;

pub(super) const BEARER_TOKEN: &str = "token-s100";

pub(super) fn student_id() -> StudentId {
    StudentId("S100".to_string())
}

pub(super) fn student() -> Student {
    Student {
        student_id: student_id(),
        password_hash: "$2b$12$fixture-hash".to_string(),
        name: "Asha Nair".to_string(),
        email: "asha.nair@campus.edu".to_string(),
        address: "12 College Road".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2003, 4, 17).expect("valid date"),
        father_name: "Ravi Nair".to_string(),
        phone_number: "9000000001".to_string(),
        parent_phone_number: "9000000002".to_string(),
        degree: "B.Tech CSE".to_string(),
        profile_picture: "uploads/s100.png".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 7, 1, 9, 0, 0).unwrap(),
    }
}

pub(super) fn build_service() -> (ClearanceService<MemoryClearanceStore>, Arc<MemoryClearanceStore>)
{
    let store = Arc::new(MemoryClearanceStore::default());
    let service = ClearanceService::new(store.clone());
    (service, store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryClearanceStore {
    records: Arc<Mutex<HashMap<StudentId, ClearanceRecord>>>,
}

impl MemoryClearanceStore {
    pub(super) fn snapshot(&self, student_id: &StudentId) -> Option<ClearanceRecord> {
        self.records
            .lock()
            .expect("store mutex poisoned")
            .get(student_id)
            .cloned()
    }
}

impl ClearanceStore for MemoryClearanceStore {
    fn fetch(&self, student_id: &StudentId) -> Result<Option<ClearanceRecord>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(student_id).cloned())
    }

    fn upsert(&self, record: &ClearanceRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.student_id.clone(), record.clone());
        Ok(())
    }
}

pub(super) struct UnavailableClearanceStore;

impl ClearanceStore for UnavailableClearanceStore {
    fn fetch(&self, _student_id: &StudentId) -> Result<Option<ClearanceRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn upsert(&self, _record: &ClearanceRecord) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct StubAuthenticator {
    student: Student,
}

impl Default for StubAuthenticator {
    fn default() -> Self {
        Self { student: student() }
    }
}

impl Authenticator for StubAuthenticator {
    fn authenticate(&self, token: &str) -> Result<Student, AuthError> {
        if token == BEARER_TOKEN {
            Ok(self.student.clone())
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

pub(super) fn clearance_router_with_auth<S>(service: ClearanceService<S>) -> axum::Router
where
    S: ClearanceStore + 'static,
{
    let authenticator: Arc<dyn Authenticator> = Arc::new(StubAuthenticator::default());
    clearance_router(Arc::new(service)).layer(Extension(authenticator))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
