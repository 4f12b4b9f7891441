use std::sync::Arc;

use super::common::*;
use crate::portal::examination::clearance::domain::{
    ClearanceStatus, Department, DepartmentStatus,
};
use crate::portal::examination::clearance::{ClearanceError, ClearanceService};

#[test]
fn first_fetch_creates_full_pending_roster() {
    let (service, _) = build_service();

    let record = service
        .fetch_or_initialize(&student_id())
        .expect("record created");

    assert_eq!(record.status, ClearanceStatus::Pending);
    assert_eq!(record.departments.len(), 5);
    let roster: Vec<Department> = record
        .departments
        .iter()
        .map(|entry| entry.department)
        .collect();
    assert_eq!(roster, Department::ALL);
    assert!(record
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
    assert!(record.approval_date.is_none());
}

#[test]
fn fetch_is_idempotent_after_creation() {
    let (service, _) = build_service();

    let first = service.fetch_or_initialize(&student_id()).expect("created");
    let second = service.fetch_or_initialize(&student_id()).expect("fetched");

    assert_eq!(first.request_date, second.request_date);
    assert_eq!(first.status, second.status);
    assert_eq!(first.departments.len(), second.departments.len());
}

#[test]
fn request_creates_record_when_absent() {
    let (service, store) = build_service();

    let record = service.request(&student_id()).expect("record created");

    assert_eq!(record.status, ClearanceStatus::Pending);
    assert!(store.snapshot(&student_id()).is_some());
}

#[test]
fn repeated_requests_keep_roster_pending_and_advance_request_date() {
    let (service, _) = build_service();

    let first = service.request(&student_id()).expect("first request");
    let second = service.request(&student_id()).expect("second request");

    assert!(second.request_date >= first.request_date);
    assert_eq!(second.status, ClearanceStatus::Pending);
    assert!(second
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
}

#[test]
fn approving_one_department_leaves_aggregate_pending() {
    let (service, _) = build_service();
    service.fetch_or_initialize(&student_id()).expect("created");

    let record = service
        .approve_department(&student_id(), "library")
        .expect("approved");

    let library = record
        .departments
        .iter()
        .find(|entry| entry.department == Department::Library)
        .expect("library entry");
    assert_eq!(library.status, DepartmentStatus::Approved);
    assert_eq!(record.status, ClearanceStatus::Pending);
    assert!(record.approval_date.is_none());
}

#[test]
fn approving_all_departments_in_any_order_yields_approved() {
    // Rotations plus the reverse cover every department in every position.
    let mut orders: Vec<Vec<Department>> = (0..Department::ALL.len())
        .map(|shift| {
            let mut order = Department::ALL.to_vec();
            order.rotate_left(shift);
            order
        })
        .collect();
    let mut reversed = Department::ALL.to_vec();
    reversed.reverse();
    orders.push(reversed);

    for order in orders {
        let (service, _) = build_service();
        service.fetch_or_initialize(&student_id()).expect("created");

        let mut record = None;
        for department in &order {
            record = Some(
                service
                    .approve_department(&student_id(), department.label())
                    .expect("approved"),
            );
        }

        let record = record.expect("at least one approval");
        assert_eq!(record.status, ClearanceStatus::Approved, "order {order:?}");
        assert!(record.approval_date.is_some(), "order {order:?}");
        assert!(record.all_departments_approved());
    }
}

#[test]
fn four_of_five_approvals_leave_aggregate_pending() {
    for left_out in Department::ALL {
        let (service, _) = build_service();
        service.fetch_or_initialize(&student_id()).expect("created");

        let mut record = None;
        for department in Department::ALL {
            if department == left_out {
                continue;
            }
            record = Some(
                service
                    .approve_department(&student_id(), department.label())
                    .expect("approved"),
            );
        }

        let record = record.expect("four approvals");
        assert_eq!(
            record.status,
            ClearanceStatus::Pending,
            "left out {left_out:?}"
        );
        assert!(record.approval_date.is_none());
    }
}

#[test]
fn re_approving_a_department_is_a_no_op() {
    let (service, _) = build_service();
    service.fetch_or_initialize(&student_id()).expect("created");

    let first = service
        .approve_department(&student_id(), "Hostel")
        .expect("approved");
    let second = service
        .approve_department(&student_id(), "HOSTEL")
        .expect("approved again");

    assert_eq!(first.status, second.status);
    assert_eq!(
        first
            .departments
            .iter()
            .filter(|entry| entry.status == DepartmentStatus::Approved)
            .count(),
        second
            .departments
            .iter()
            .filter(|entry| entry.status == DepartmentStatus::Approved)
            .count()
    );
}

#[test]
fn approval_date_is_stamped_once_and_survives_redundant_approvals() {
    let (service, _) = build_service();
    service.fetch_or_initialize(&student_id()).expect("created");

    for department in Department::ALL {
        service
            .approve_department(&student_id(), department.label())
            .expect("approved");
    }
    let approved = service
        .fetch_or_initialize(&student_id())
        .expect("fetched approved record");
    let stamped = approved.approval_date.expect("approval date set");

    let after_redundant = service
        .approve_department(&student_id(), "Finance")
        .expect("redundant approval");
    assert_eq!(after_redundant.approval_date, Some(stamped));
    assert_eq!(after_redundant.status, ClearanceStatus::Approved);
}

#[test]
fn request_after_full_approval_rearms_the_workflow() {
    let (service, _) = build_service();
    service.fetch_or_initialize(&student_id()).expect("created");
    for department in Department::ALL {
        service
            .approve_department(&student_id(), department.label())
            .expect("approved");
    }

    let record = service.request(&student_id()).expect("re-requested");

    assert_eq!(record.status, ClearanceStatus::Pending);
    assert!(record
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
    assert!(record.approval_date.is_none(), "stale approval date cleared");
}

#[test]
fn unknown_department_is_not_found_and_record_is_untouched() {
    let (service, store) = build_service();
    service.fetch_or_initialize(&student_id()).expect("created");
    let before = store.snapshot(&student_id()).expect("stored record");

    let result = service.approve_department(&student_id(), "Cafeteria");

    assert!(matches!(result, Err(ClearanceError::DepartmentNotFound)));
    let after = store.snapshot(&student_id()).expect("stored record");
    assert_eq!(before.status, after.status);
    assert_eq!(before.request_date, after.request_date);
    assert!(after
        .departments
        .iter()
        .all(|entry| entry.status == DepartmentStatus::Pending));
}

#[test]
fn approving_without_a_record_is_not_found() {
    let (service, _) = build_service();

    let result = service.approve_department(&student_id(), "Library");

    assert!(matches!(result, Err(ClearanceError::RecordNotFound)));
}

#[test]
fn store_failures_propagate_as_infrastructure_faults() {
    let service = ClearanceService::new(Arc::new(UnavailableClearanceStore));

    let result = service.fetch_or_initialize(&student_id());

    assert!(matches!(result, Err(ClearanceError::Store(_))));
}

#[test]
fn aggregate_matches_roster_after_every_mutation() {
    let (service, store) = build_service();
    service.request(&student_id()).expect("requested");

    for department in Department::ALL {
        service
            .approve_department(&student_id(), department.label())
            .expect("approved");
        let record = store.snapshot(&student_id()).expect("stored record");
        let all_approved = record.all_departments_approved();
        assert_eq!(record.status == ClearanceStatus::Approved, all_approved);
    }
}
