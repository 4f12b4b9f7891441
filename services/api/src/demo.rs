use campus_portal::config::AppConfig;
use campus_portal::error::AppError;
use campus_portal::portal::assignments::{Assignment, AssignmentBoard, AssignmentId};
use campus_portal::portal::auth::{AuthService, LoginRequest, Student, StudentDirectory, StudentId};
use campus_portal::portal::courses::{
    Course, CourseCatalog, CourseId, Enrollment, EnrollmentId, EnrollmentLedger, EnrollmentStatus,
    Slot,
};
use campus_portal::portal::dashboard::{
    Announcement, AnnouncementBoard, AnnouncementId, DashboardService, Priority,
};
use campus_portal::portal::examination::{
    ClearanceService, Department, InternalMarks, MarksRegister,
};
use chrono::{Duration, NaiveDate, Utc};
use clap::Args;
use serde::Serialize;

use crate::infra::PortalStores;

const DEMO_PASSWORD: &str = "changeme";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Student identifier to seed and walk through the workflow
    #[arg(long, default_value = "S100")]
    pub(crate) student_id: String,
}

/// Scripted walkthrough: seed a student with courses, log in, then drive the
/// no-due clearance workflow from first fetch through re-request, printing a
/// JSON snapshot after each step.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let stores = PortalStores::default();
    let student_id = StudentId(args.student_id);

    seed_portal(&stores, &student_id)?;

    let auth_service = AuthService::new(stores.students.clone(), config.auth.clone());
    let clearance_service = ClearanceService::new(stores.clearance.clone());
    let dashboard_service = DashboardService::new(
        stores.announcements.clone(),
        stores.catalog.clone(),
        stores.enrollments.clone(),
        stores.assignments.clone(),
    );

    println!("Campus portal demo for student {}", student_id.0);

    let login = auth_service
        .login(LoginRequest {
            student_id: student_id.0.clone(),
            password: DEMO_PASSWORD.to_string(),
        })
        .map_err(AppError::portal)?;
    print_snapshot("Logged in", &login.student)?;

    let overview = dashboard_service
        .overview(&student_id)
        .map_err(AppError::portal)?;
    print_snapshot("Dashboard overview", &overview)?;

    let record = clearance_service
        .fetch_or_initialize(&student_id)
        .map_err(AppError::portal)?;
    print_snapshot("Initial no-due record", &record)?;

    let record = clearance_service
        .request(&student_id)
        .map_err(AppError::portal)?;
    print_snapshot("Clearance requested", &record)?;

    for department in Department::ALL {
        let record = clearance_service
            .approve_department(&student_id, department.label())
            .map_err(AppError::portal)?;
        print_snapshot(&format!("Approved {}", department.label()), &record)?;
    }

    let record = clearance_service
        .request(&student_id)
        .map_err(AppError::portal)?;
    print_snapshot("Re-requested after full approval", &record)?;

    Ok(())
}

fn print_snapshot<T: Serialize>(title: &str, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(AppError::portal)?;
    println!("\n{title}:\n{json}");
    Ok(())
}

fn seed_portal(stores: &PortalStores, student_id: &StudentId) -> Result<(), AppError> {
    let now = Utc::now();
    let password_hash =
        bcrypt::hash(DEMO_PASSWORD, bcrypt::DEFAULT_COST).map_err(AppError::portal)?;

    stores
        .students
        .insert(Student {
            student_id: student_id.clone(),
            password_hash,
            name: "Asha Nair".to_string(),
            email: "asha.nair@campus.edu".to_string(),
            address: "12 College Road".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2003, 4, 17)
                .unwrap_or_else(|| now.date_naive()),
            father_name: "Ravi Nair".to_string(),
            phone_number: "9000000001".to_string(),
            parent_phone_number: "9000000002".to_string(),
            degree: "B.Tech CSE".to_string(),
            profile_picture: "uploads/s100.png".to_string(),
            created_at: now,
        })
        .map_err(AppError::portal)?;

    let courses = [
        ("CS301", "Distributed Systems", "Dr. Meera Pillai", Slot::A),
        ("CS305", "Compiler Design", "Prof. Arjun Menon", Slot::B),
    ];
    for (index, (code, name, faculty, slot)) in courses.into_iter().enumerate() {
        let course_id = CourseId(code.to_string());
        stores
            .catalog
            .insert(Course {
                course_id: course_id.clone(),
                name: name.to_string(),
                faculty: faculty.to_string(),
                slot,
                credits: 4,
                semester: "Fall 2026".to_string(),
                is_active: true,
            })
            .map_err(AppError::portal)?;
        stores
            .enrollments
            .insert(Enrollment {
                enrollment_id: EnrollmentId(format!("demo-enr-{index}")),
                student_id: student_id.clone(),
                course_id,
                enrollment_date: now,
                status: EnrollmentStatus::Current,
                grade: String::new(),
                completed_date: None,
                feedback: String::new(),
            })
            .map_err(AppError::portal)?;
    }

    stores
        .assignments
        .insert(Assignment {
            assignment_id: AssignmentId("demo-asg-1".to_string()),
            course_id: CourseId("CS301".to_string()),
            title: "Consensus protocols survey".to_string(),
            description: "Compare Raft and Paxos deployments.".to_string(),
            due_date: now + Duration::days(7),
            max_marks: 100,
            created_at: now,
        })
        .map_err(AppError::portal)?;

    stores
        .marks
        .insert(InternalMarks {
            student_id: student_id.clone(),
            course_id: CourseId("CS301".to_string()),
            marks: 42,
            max_marks: 50,
            exam_type: "CT1".to_string(),
        })
        .map_err(AppError::portal)?;

    stores
        .announcements
        .insert(Announcement {
            announcement_id: AnnouncementId("demo-ann-1".to_string()),
            title: "Semester exams begin December 2".to_string(),
            content: "Clear all department dues before hall tickets are issued.".to_string(),
            priority: Priority::High,
            created_at: now,
            is_active: true,
        })
        .map_err(AppError::portal)?;

    Ok(())
}
