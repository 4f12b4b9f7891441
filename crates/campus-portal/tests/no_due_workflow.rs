//! Integration specifications for the no-due clearance workflow, exercised
//! through the public service facade the way the HTTP layer drives it.

mod common {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use campus_portal::portal::auth::StudentId;
    use campus_portal::portal::examination::{
        ClearanceRecord, ClearanceService, ClearanceStore,
    };
    use campus_portal::portal::StoreError;

    pub(super) fn student_id() -> StudentId {
        StudentId("S100".to_string())
    }

    pub(super) fn build_service() -> ClearanceService<MemoryClearanceStore> {
        ClearanceService::new(Arc::new(MemoryClearanceStore::default()))
    }

    #[derive(Default, Clone)]
    pub(super) struct MemoryClearanceStore {
        records: Arc<Mutex<HashMap<StudentId, ClearanceRecord>>>,
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
}

use campus_portal::portal::examination::{
    ClearanceError, ClearanceStatus, Department, DepartmentStatus,
};
use common::{build_service, student_id};

#[test]
fn new_student_walks_the_full_clearance_cycle() {
    let service = build_service();

    // First touch creates the record with the full pending roster.
    let record = service
        .fetch_or_initialize(&student_id())
        .expect("record created");
    assert_eq!(record.status, ClearanceStatus::Pending);
    assert_eq!(record.departments.len(), 5);
    assert!(record
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));

    // Lowercase path input matches the Library entry.
    let record = service
        .approve_department(&student_id(), "library")
        .expect("library approved");
    assert_eq!(record.status, ClearanceStatus::Pending);

    for name in ["Hostel", "Laboratory", "Sports"] {
        let record = service
            .approve_department(&student_id(), name)
            .expect("department approved");
        assert_eq!(record.status, ClearanceStatus::Pending);
        assert!(record.approval_date.is_none());
    }

    // The final sign-off flips the aggregate and stamps the approval date.
    let record = service
        .approve_department(&student_id(), "Finance")
        .expect("finance approved");
    assert_eq!(record.status, ClearanceStatus::Approved);
    assert!(record.approval_date.is_some());

    // Re-requesting re-arms everything.
    let previous_request_date = record.request_date;
    let record = service.request(&student_id()).expect("re-requested");
    assert_eq!(record.status, ClearanceStatus::Pending);
    assert!(record
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
    assert!(record.approval_date.is_none());
    assert!(record.request_date >= previous_request_date);
}

#[test]
fn clearance_records_are_independent_per_student() {
    let service = build_service();
    let other = campus_portal::portal::auth::StudentId("S200".to_string());

    service.request(&student_id()).expect("record created");
    for department in Department::ALL {
        service
            .approve_department(&student_id(), department.label())
            .expect("approved");
    }

    let approved = service
        .fetch_or_initialize(&student_id())
        .expect("approved record");
    assert_eq!(approved.status, ClearanceStatus::Approved);

    let fresh = service.fetch_or_initialize(&other).expect("fresh record");
    assert_eq!(fresh.status, ClearanceStatus::Pending);
    assert!(fresh
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
}

#[test]
fn unknown_departments_are_rejected_without_side_effects() {
    let service = build_service();
    service
        .request(&student_id())
        .expect("record created");

    let result = service.approve_department(&student_id(), "Cafeteria");
    assert!(matches!(result, Err(ClearanceError::DepartmentNotFound)));

    let record = service
        .fetch_or_initialize(&student_id())
        .expect("record fetched");
    assert!(record
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
}
