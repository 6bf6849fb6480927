use super::CompetenceService;
use crate::errors::{ClassroomError, Result};
use crate::models::competences::entities::{ClassroomCompetence, Competence};
use crate::utils::validate::ensure_valid_id;

pub async fn list_competences(service: &CompetenceService) -> Result<Vec<Competence>> {
    service.storage().list_competences().await
}

pub async fn get_competence(service: &CompetenceService, competence_id: i64) -> Result<Competence> {
    let competence_id = ensure_valid_id(competence_id, "competence id")?;

    service
        .storage()
        .get_competence_by_id(competence_id)
        .await?
        .ok_or_else(|| {
            ClassroomError::competence_not_found(format!("Competence {competence_id} not found"))
        })
}

pub async fn list_competences_by_teacher(
    service: &CompetenceService,
    teacher_id: i64,
) -> Result<Vec<Competence>> {
    let teacher_id = ensure_valid_id(teacher_id, "teacher id")?;
    service
        .storage()
        .list_competences_by_teacher(teacher_id)
        .await
}

pub async fn list_competences_by_classroom(
    service: &CompetenceService,
    classroom_id: i64,
) -> Result<Vec<ClassroomCompetence>> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let storage = service.storage();

    if storage.get_classroom_by_id(classroom_id).await?.is_none() {
        return Err(ClassroomError::classroom_not_found(format!(
            "Classroom {classroom_id} not found"
        )));
    }

    storage.list_classroom_competences(classroom_id).await
}
