use tracing::info;

use super::ClassroomService;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{entities::Classroom, requests::CreateClassroomRequest};
use crate::utils::validate::validate_name;

pub async fn create_classroom(
    service: &ClassroomService,
    mut req: CreateClassroomRequest,
) -> Result<Classroom> {
    validate_name(&req.name).map_err(ClassroomError::validation)?;
    req.name = req.name.trim().to_string();

    // 非法与重复的教师 ID 直接跳过
    let mut teachers = Vec::with_capacity(req.teachers.len());
    for id in req.teachers.iter().copied().filter(|id| *id > 0) {
        if !teachers.contains(&id) {
            teachers.push(id);
        }
    }
    req.teachers = teachers;

    let owners = req.teachers.len();
    let classroom = service.storage().create_classroom(req).await?;

    info!(
        "Classroom {} ({}) created with {} owner(s)",
        classroom.id, classroom.name, owners
    );

    Ok(classroom)
}
