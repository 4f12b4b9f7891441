use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use campus_portal::portal::assignments::{
    Assignment, AssignmentBoard, AssignmentId, Submission, SubmissionStore,
};
use campus_portal::portal::attendance::{Attendance, AttendanceLog};
use campus_portal::portal::auth::{Student, StudentDirectory, StudentId};
use campus_portal::portal::courses::{
    Course, CourseCatalog, CourseId, Enrollment, EnrollmentId, EnrollmentLedger, EnrollmentStatus,
    Slot,
};
use campus_portal::portal::dashboard::{Announcement, AnnouncementBoard};
use campus_portal::portal::examination::{
    ClearanceRecord, ClearanceStore, InternalMarks, MarksRegister,
};
use campus_portal::portal::StoreError;
use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// One handle per portal collection, shared between the routers and the demo.
#[derive(Default, Clone)]
pub(crate) struct PortalStores {
    pub(crate) students: Arc<InMemoryStudentDirectory>,
    pub(crate) catalog: Arc<InMemoryCourseCatalog>,
    pub(crate) enrollments: Arc<InMemoryEnrollmentLedger>,
    pub(crate) attendance: Arc<InMemoryAttendanceLog>,
    pub(crate) assignments: Arc<InMemoryAssignmentBoard>,
    pub(crate) submissions: Arc<InMemorySubmissionStore>,
    pub(crate) marks: Arc<InMemoryMarksRegister>,
    pub(crate) clearance: Arc<InMemoryClearanceStore>,
    pub(crate) announcements: Arc<InMemoryAnnouncementBoard>,
}

#[derive(Default)]
pub(crate) struct InMemoryStudentDirectory {
    records: Mutex<HashMap<StudentId, Student>>,
}

impl StudentDirectory for InMemoryStudentDirectory {
    fn find(&self, student_id: &StudentId) -> Result<Option<Student>, StoreError> {
        let guard = self.records.lock().expect("directory mutex poisoned");
        Ok(guard.get(student_id).cloned())
    }

    fn insert(&self, student: Student) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("directory mutex poisoned");
        if guard.contains_key(&student.student_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(student.student_id.clone(), student);
        Ok(())
    }

    fn update_password(
        &self,
        student_id: &StudentId,
        password_hash: &str,
    ) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("directory mutex poisoned");
        match guard.get_mut(student_id) {
            Some(student) => {
                student.password_hash = password_hash.to_string();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryCourseCatalog {
    records: Mutex<HashMap<CourseId, Course>>,
}

impl CourseCatalog for InMemoryCourseCatalog {
    fn find(&self, course_id: &CourseId) -> Result<Option<Course>, StoreError> {
        let guard = self.records.lock().expect("catalog mutex poisoned");
        Ok(guard.get(course_id).cloned())
    }

    fn by_slot(&self, slot: Slot) -> Result<Vec<Course>, StoreError> {
        let guard = self.records.lock().expect("catalog mutex poisoned");
        Ok(guard
            .values()
            .filter(|course| course.slot == slot)
            .cloned()
            .collect())
    }

    fn insert(&self, course: Course) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("catalog mutex poisoned");
        if guard.contains_key(&course.course_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(course.course_id.clone(), course);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryEnrollmentLedger {
    records: Mutex<HashMap<EnrollmentId, Enrollment>>,
}

impl EnrollmentLedger for InMemoryEnrollmentLedger {
    fn for_student(
        &self,
        student_id: &StudentId,
        status: EnrollmentStatus,
    ) -> Result<Vec<Enrollment>, StoreError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard
            .values()
            .filter(|enrollment| {
                &enrollment.student_id == student_id && enrollment.status == status
            })
            .cloned()
            .collect())
    }

    fn find(&self, enrollment_id: &EnrollmentId) -> Result<Option<Enrollment>, StoreError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard.get(enrollment_id).cloned())
    }

    fn find_current(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Option<Enrollment>, StoreError> {
        let guard = self.records.lock().expect("ledger mutex poisoned");
        Ok(guard
            .values()
            .find(|enrollment| {
                &enrollment.student_id == student_id
                    && &enrollment.course_id == course_id
                    && enrollment.status == EnrollmentStatus::Current
            })
            .cloned())
    }

    fn insert(&self, enrollment: Enrollment) -> Result<Enrollment, StoreError> {
        let mut guard = self.records.lock().expect("ledger mutex poisoned");
        if guard.contains_key(&enrollment.enrollment_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(enrollment.enrollment_id.clone(), enrollment.clone());
        Ok(enrollment)
    }

    fn update(&self, enrollment: Enrollment) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("ledger mutex poisoned");
        if guard.contains_key(&enrollment.enrollment_id) {
            guard.insert(enrollment.enrollment_id.clone(), enrollment);
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

#[derive(Default)]
pub(crate) struct InMemoryAttendanceLog {
    records: Mutex<HashMap<(StudentId, CourseId), Attendance>>,
}

impl AttendanceLog for InMemoryAttendanceLog {
    fn find(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Option<Attendance>, StoreError> {
        let guard = self.records.lock().expect("attendance mutex poisoned");
        Ok(guard
            .get(&(student_id.clone(), course_id.clone()))
            .cloned())
    }

    fn upsert(&self, attendance: &Attendance) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("attendance mutex poisoned");
        guard.insert(
            (attendance.student_id.clone(), attendance.course_id.clone()),
            attendance.clone(),
        );
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryAssignmentBoard {
    records: Mutex<HashMap<AssignmentId, Assignment>>,
}

impl AssignmentBoard for InMemoryAssignmentBoard {
    fn find(&self, assignment_id: &AssignmentId) -> Result<Option<Assignment>, StoreError> {
        let guard = self.records.lock().expect("board mutex poisoned");
        Ok(guard.get(assignment_id).cloned())
    }

    fn for_course(&self, course_id: &CourseId) -> Result<Vec<Assignment>, StoreError> {
        let guard = self.records.lock().expect("board mutex poisoned");
        let mut assignments: Vec<Assignment> = guard
            .values()
            .filter(|assignment| &assignment.course_id == course_id)
            .cloned()
            .collect();
        assignments.sort_by_key(|assignment| assignment.due_date);
        Ok(assignments)
    }

    fn upcoming(
        &self,
        course_ids: &[CourseId],
        after: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<Assignment>, StoreError> {
        let guard = self.records.lock().expect("board mutex poisoned");
        let mut assignments: Vec<Assignment> = guard
            .values()
            .filter(|assignment| {
                course_ids.contains(&assignment.course_id) && assignment.due_date >= after
            })
            .cloned()
            .collect();
        assignments.sort_by_key(|assignment| assignment.due_date);
        assignments.truncate(limit);
        Ok(assignments)
    }

    fn insert(&self, assignment: Assignment) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("board mutex poisoned");
        if guard.contains_key(&assignment.assignment_id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(assignment.assignment_id.clone(), assignment);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemorySubmissionStore {
    records: Mutex<HashMap<(StudentId, AssignmentId), Submission>>,
}

impl SubmissionStore for InMemorySubmissionStore {
    fn find(
        &self,
        student_id: &StudentId,
        assignment_id: &AssignmentId,
    ) -> Result<Option<Submission>, StoreError> {
        let guard = self.records.lock().expect("submission mutex poisoned");
        Ok(guard
            .get(&(student_id.clone(), assignment_id.clone()))
            .cloned())
    }

    fn upsert(&self, submission: &Submission) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("submission mutex poisoned");
        guard.insert(
            (
                submission.student_id.clone(),
                submission.assignment_id.clone(),
            ),
            submission.clone(),
        );
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryMarksRegister {
    records: Mutex<Vec<InternalMarks>>,
}

impl MarksRegister for InMemoryMarksRegister {
    fn for_student_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Vec<InternalMarks>, StoreError> {
        let guard = self.records.lock().expect("register mutex poisoned");
        Ok(guard
            .iter()
            .filter(|marks| &marks.student_id == student_id && &marks.course_id == course_id)
            .cloned()
            .collect())
    }

    fn insert(&self, marks: InternalMarks) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("register mutex poisoned");
        guard.push(marks);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryClearanceStore {
    records: Mutex<HashMap<StudentId, ClearanceRecord>>,
}

impl ClearanceStore for InMemoryClearanceStore {
    fn fetch(&self, student_id: &StudentId) -> Result<Option<ClearanceRecord>, StoreError> {
        let guard = self.records.lock().expect("clearance mutex poisoned");
        Ok(guard.get(student_id).cloned())
    }

    fn upsert(&self, record: &ClearanceRecord) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("clearance mutex poisoned");
        guard.insert(record.student_id.clone(), record.clone());
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryAnnouncementBoard {
    records: Mutex<Vec<Announcement>>,
}

impl AnnouncementBoard for InMemoryAnnouncementBoard {
    fn active(&self) -> Result<Vec<Announcement>, StoreError> {
        let guard = self.records.lock().expect("announcement mutex poisoned");
        let mut announcements: Vec<Announcement> = guard
            .iter()
            .filter(|announcement| announcement.is_active)
            .cloned()
            .collect();
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(announcements)
    }

    fn insert(&self, announcement: Announcement) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("announcement mutex poisoned");
        guard.push(announcement);
        Ok(())
    }
}
