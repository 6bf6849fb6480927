use tracing::info;

use super::CompetenceService;
use crate::errors::{ClassroomError, Result};
use crate::models::competences::{entities::Competence, requests::CreateCompetenceRequest};
use crate::utils::validate::{ensure_valid_id, validate_name};

pub async fn create_competence(
    service: &CompetenceService,
    mut req: CreateCompetenceRequest,
) -> Result<Competence> {
    validate_name(&req.name).map_err(ClassroomError::validation)?;
    ensure_valid_id(req.id_teacher, "id_teacher")?;
    req.name = req.name.trim().to_string();

    let competence = service.storage().create_competence(req).await?;
    info!(
        "Competence {} ({}) created by teacher {}",
        competence.id, competence.name, competence.id_teacher
    );

    Ok(competence)
}
