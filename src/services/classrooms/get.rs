use super::ClassroomService;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::{Classroom, ClassroomDetail, ClassroomSummary},
    responses::UserClassroomsResponse,
};
use crate::utils::validate::ensure_valid_id;

pub async fn list_classrooms(service: &ClassroomService) -> Result<Vec<Classroom>> {
    service.storage().list_classrooms().await
}

pub async fn get_classroom(service: &ClassroomService, classroom_id: i64) -> Result<ClassroomDetail> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let classroom = service.require_classroom(classroom_id).await?;

    let competences = service
        .storage()
        .list_classroom_competences(classroom_id)
        .await?;

    Ok(ClassroomDetail {
        id: classroom.id,
        name: classroom.name,
        description: classroom.description,
        total_points: classroom.total_points,
        quiz_ids: classroom.quiz_ids,
        competences: competences.into_iter().map(Into::into).collect(),
    })
}

pub async fn list_classrooms_by_teacher(
    service: &ClassroomService,
    teacher_id: i64,
) -> Result<Vec<ClassroomSummary>> {
    let teacher_id = ensure_valid_id(teacher_id, "teacher id")?;

    let classrooms = service
        .storage()
        .list_classrooms_by_teacher(teacher_id)
        .await?;

    Ok(classrooms.into_iter().map(Into::into).collect())
}

pub async fn list_classrooms_by_user(
    service: &ClassroomService,
    user_id: i64,
) -> Result<UserClassroomsResponse> {
    let user_id = ensure_valid_id(user_id, "user id")?;
    let storage = service.storage();

    let as_teacher = storage.list_classrooms_by_teacher(user_id).await?;
    let as_student = storage.list_classrooms_by_student(user_id).await?;

    if as_teacher.is_empty() && as_student.is_empty() {
        return Err(ClassroomError::not_found(format!(
            "User {user_id} does not belong to any classroom"
        )));
    }

    Ok(UserClassroomsResponse {
        as_teacher: as_teacher.into_iter().map(Into::into).collect(),
        as_student: as_student.into_iter().map(Into::into).collect(),
    })
}
