use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portal::auth::StudentId;

/// Departments that must sign off before a clearance is granted. The roster
/// is fixed: every record carries exactly these five, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    Library,
    Hostel,
    Laboratory,
    Sports,
    Finance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Library,
        Department::Hostel,
        Department::Laboratory,
        Department::Sports,
        Department::Finance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Department::Library => "Library",
            Department::Hostel => "Hostel",
            Department::Laboratory => "Laboratory",
            Department::Sports => "Sports",
            Department::Finance => "Finance",
        }
    }

    /// Parse a path segment, ignoring case.
    pub fn from_path(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(raw))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepartmentStatus {
    Pending,
    Approved,
}

/// Aggregate clearance status, derived from the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearanceStatus {
    Pending,
    Approved,
}

/// One roster entry: a department and where it stands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentClearance {
    #[serde(rename = "name")]
    pub department: Department,
    pub status: DepartmentStatus,
}

/// Per-student clearance document.
///
/// Invariants: `departments` holds one entry per canonical department in
/// roster order, and `status` is `Approved` iff every entry is approved.
/// `approval_date` is meaningful only while the aggregate is approved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearanceRecord {
    pub student_id: StudentId,
    pub status: ClearanceStatus,
    pub departments: Vec<DepartmentClearance>,
    pub request_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<DateTime<Utc>>,
}

impl ClearanceRecord {
    /// Fresh record: full pending roster, aggregate pending.
    pub fn new(student_id: StudentId, now: DateTime<Utc>) -> Self {
        Self {
            student_id,
            status: ClearanceStatus::Pending,
            departments: Department::ALL
                .into_iter()
                .map(|department| DepartmentClearance {
                    department,
                    status: DepartmentStatus::Pending,
                })
                .collect(),
            request_date: now,
            approval_date: None,
        }
    }

    /// Re-arm the workflow: every department back to pending, aggregate
    /// pending, fresh request date, and no stale approval timestamp.
    pub fn rearm(&mut self, now: DateTime<Utc>) {
        for entry in &mut self.departments {
            entry.status = DepartmentStatus::Pending;
        }
        self.status = ClearanceStatus::Pending;
        self.request_date = now;
        self.approval_date = None;
    }

    /// Mark one department approved and recompute the aggregate. Approving an
    /// already-approved department is a no-op; the approval timestamp is
    /// stamped only on the transition that completes the roster.
    pub fn approve(&mut self, department: Department, now: DateTime<Utc>) {
        if let Some(entry) = self
            .departments
            .iter_mut()
            .find(|entry| entry.department == department)
        {
            entry.status = DepartmentStatus::Approved;
        }

        if self.all_departments_approved() && self.status != ClearanceStatus::Approved {
            self.status = ClearanceStatus::Approved;
            self.approval_date = Some(now);
        }
    }

    pub fn all_departments_approved(&self) -> bool {
        self.departments
            .iter()
            .all(|entry| entry.status == DepartmentStatus::Approved)
    }

    pub fn is_approved(&self) -> bool {
        self.status == ClearanceStatus::Approved
    }
}
