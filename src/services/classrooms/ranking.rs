use super::ClassroomService;
use crate::aggregation::rank_students;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::responses::RankingEntry;
use crate::utils::validate::ensure_valid_id;

pub async fn student_ranking(
    service: &ClassroomService,
    classroom_id: i64,
) -> Result<Vec<RankingEntry>> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    service.require_classroom(classroom_id).await?;

    let students = service.storage().list_student_points(classroom_id).await?;
    if students.is_empty() {
        return Err(ClassroomError::not_found(format!(
            "No students found in classroom {classroom_id}"
        )));
    }

    Ok(rank_students(students))
}

pub async fn student_competence_ranking(
    service: &ClassroomService,
    classroom_id: i64,
    competence_id: i64,
) -> Result<Vec<RankingEntry>> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let competence_id = ensure_valid_id(competence_id, "competence id")?;

    service.require_classroom(classroom_id).await?;
    let storage = service.storage();

    if storage.get_competence_by_id(competence_id).await?.is_none() {
        return Err(ClassroomError::competence_not_found(format!(
            "Competence {competence_id} not found"
        )));
    }

    let students = storage
        .list_student_competence_points(classroom_id, competence_id)
        .await?;
    if students.is_empty() {
        return Err(ClassroomError::not_found(format!(
            "No student points for competence {competence_id} in classroom {classroom_id}"
        )));
    }

    Ok(rank_students(students))
}
