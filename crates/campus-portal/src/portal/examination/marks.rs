//! Internal assessment marks (CT1, CT2, quizzes) grouped per enrolled course.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::portal::auth::{CurrentStudent, StudentId};
use crate::portal::courses::{Course, CourseCatalog, CourseId, EnrollmentLedger, EnrollmentStatus};
use crate::portal::store::StoreError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalMarks {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub marks: u32,
    pub max_marks: u32,
    pub exam_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseMarksView {
    pub course: Option<Course>,
    pub marks: Vec<InternalMarks>,
}

/// Register abstraction over the internal-marks collection.
pub trait MarksRegister: Send + Sync {
    fn for_student_course(
        &self,
        student_id: &StudentId,
        course_id: &CourseId,
    ) -> Result<Vec<InternalMarks>, StoreError>;
    fn insert(&self, marks: InternalMarks) -> Result<(), StoreError>;
}

/// Service joining the register with the student's current enrollments.
pub struct MarksService<M, C, E> {
    register: Arc<M>,
    catalog: Arc<C>,
    ledger: Arc<E>,
}

impl<M, C, E> MarksService<M, C, E>
where
    M: MarksRegister + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    pub fn new(register: Arc<M>, catalog: Arc<C>, ledger: Arc<E>) -> Self {
        Self {
            register,
            catalog,
            ledger,
        }
    }

    pub fn internal_marks(
        &self,
        student_id: &StudentId,
    ) -> Result<Vec<CourseMarksView>, MarksError> {
        let enrollments = self
            .ledger
            .for_student(student_id, EnrollmentStatus::Current)?;

        let mut views = Vec::with_capacity(enrollments.len());
        for enrollment in enrollments {
            let course = self.catalog.find(&enrollment.course_id)?;
            let marks = self
                .register
                .for_student_course(student_id, &enrollment.course_id)?;
            views.push(CourseMarksView { course, marks });
        }
        Ok(views)
    }
}

/// Error raised by the marks service.
#[derive(Debug, thiserror::Error)]
pub enum MarksError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Router builder exposing the internal-marks endpoint.
pub fn marks_router<M, C, E>(service: Arc<MarksService<M, C, E>>) -> Router
where
    M: MarksRegister + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    Router::new()
        .route(
            "/api/examination/internal-marks",
            get(internal_marks_handler::<M, C, E>),
        )
        .with_state(service)
}

pub(crate) async fn internal_marks_handler<M, C, E>(
    State(service): State<Arc<MarksService<M, C, E>>>,
    CurrentStudent(student): CurrentStudent,
) -> Response
where
    M: MarksRegister + 'static,
    C: CourseCatalog + 'static,
    E: EnrollmentLedger + 'static,
{
    match service.internal_marks(&student.student_id) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(err) => {
            let payload = json!({ "message": err.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
