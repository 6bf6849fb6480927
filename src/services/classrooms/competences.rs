use serde_json::Value;
use tracing::{info, warn};

use super::ClassroomService;
use super::members::exclude_existing;
use crate::aggregation::missing_competences;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::entities::MembershipKind;
use crate::models::competences::entities::ClassroomCompetence;
use crate::utils::validate::{ensure_valid_id, filter_valid_ids, require_id_array};

pub async fn list_classroom_competences(
    service: &ClassroomService,
    classroom_id: i64,
) -> Result<Vec<ClassroomCompetence>> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    service.require_classroom(classroom_id).await?;

    service
        .storage()
        .list_classroom_competences(classroom_id)
        .await
}

/// 确认所有能力都存在，否则返回列出缺失 ID 的 CompetenceNotFound
pub(crate) async fn ensure_competences_exist(
    service: &ClassroomService,
    competence_ids: &[i64],
) -> Result<()> {
    if competence_ids.is_empty() {
        return Ok(());
    }

    let found: Vec<i64> = service
        .storage()
        .find_competences_by_ids(competence_ids)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect();

    let missing = missing_competences(competence_ids, &found);
    if missing.is_empty() {
        return Ok(());
    }

    warn!("Competences not found: {:?}", missing);
    Err(ClassroomError::competence_not_found(format!(
        "Competences not found: {}",
        missing
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    )))
}

pub async fn associate_competences(
    service: &ClassroomService,
    classroom_id: i64,
    ids: Option<Vec<Value>>,
) -> Result<u64> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let values = require_id_array(ids, "competences_id")?;

    let ids = filter_valid_ids(&values);
    if ids.is_empty() {
        return Ok(0);
    }

    service.require_classroom(classroom_id).await?;
    ensure_competences_exist(service, &ids).await?;

    let ids = exclude_existing(service, MembershipKind::Competence, classroom_id, ids).await?;
    if ids.is_empty() {
        return Ok(0);
    }

    let count = service
        .storage()
        .add_competences(classroom_id, &ids)
        .await?;
    info!(
        "{} competence(s) associated with classroom {}",
        count, classroom_id
    );

    Ok(count)
}
