use tracing::info;

use super::ClassroomService;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{entities::Classroom, requests::UpdateClassroomRequest};
use crate::utils::validate::{ensure_valid_id, validate_name};

pub async fn update_classroom(
    service: &ClassroomService,
    classroom_id: i64,
    mut update: UpdateClassroomRequest,
) -> Result<Classroom> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;

    if update.name.is_none() && update.description.is_none() {
        return Err(ClassroomError::validation(
            "At least one of name or description must be provided",
        ));
    }

    if let Some(name) = update.name.as_deref() {
        validate_name(name).map_err(ClassroomError::validation)?;
        update.name = Some(name.trim().to_string());
    }

    let classroom = service
        .storage()
        .update_classroom(classroom_id, update)
        .await?
        .ok_or_else(|| {
            ClassroomError::classroom_not_found(format!("Classroom {classroom_id} not found"))
        })?;

    info!("Classroom {} updated", classroom.id);

    Ok(classroom)
}
