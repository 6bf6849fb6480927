use serde_json::Value;
use tracing::{debug, info};

use super::ClassroomService;
use crate::errors::Result;
use crate::models::classrooms::{
    entities::{MembershipKind, TeacherRole},
    responses::{StudentIdsResponse, TeacherIdsResponse},
};
use crate::utils::validate::{ensure_valid_id, filter_valid_ids, require_id_array};

/// 过滤掉已经是成员的 ID
pub(crate) async fn exclude_existing(
    service: &ClassroomService,
    kind: MembershipKind,
    classroom_id: i64,
    ids: Vec<i64>,
) -> Result<Vec<i64>> {
    let mut fresh = Vec::with_capacity(ids.len());
    for id in ids {
        if service.storage().is_member(kind, classroom_id, id).await? {
            debug!("{} {} already in classroom {}, skipped", kind, id, classroom_id);
        } else {
            fresh.push(id);
        }
    }
    Ok(fresh)
}

pub async fn add_students(
    service: &ClassroomService,
    classroom_id: i64,
    ids: Option<Vec<Value>>,
) -> Result<u64> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let values = require_id_array(ids, "students_id")?;

    let ids = filter_valid_ids(&values);
    if ids.is_empty() {
        return Ok(0);
    }

    service.require_classroom(classroom_id).await?;

    let ids = exclude_existing(service, MembershipKind::Student, classroom_id, ids).await?;
    if ids.is_empty() {
        return Ok(0);
    }

    let count = service.storage().add_students(classroom_id, &ids).await?;
    info!("{} student(s) added to classroom {}", count, classroom_id);

    Ok(count)
}

pub async fn add_teachers(
    service: &ClassroomService,
    classroom_id: i64,
    ids: Option<Vec<Value>>,
    role: Option<TeacherRole>,
) -> Result<u64> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let values = require_id_array(ids, "teachers_id")?;

    let ids = filter_valid_ids(&values);
    if ids.is_empty() {
        return Ok(0);
    }

    service.require_classroom(classroom_id).await?;

    let ids = exclude_existing(service, MembershipKind::Teacher, classroom_id, ids).await?;
    if ids.is_empty() {
        return Ok(0);
    }

    let role = role.unwrap_or(TeacherRole::Editor);
    let count = service
        .storage()
        .add_teachers(classroom_id, &ids, role)
        .await?;
    info!(
        "{} teacher(s) added to classroom {} as {}",
        count, classroom_id, role
    );

    Ok(count)
}

pub async fn list_teacher_ids(
    service: &ClassroomService,
    classroom_id: i64,
) -> Result<TeacherIdsResponse> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    service.require_classroom(classroom_id).await?;

    Ok(TeacherIdsResponse {
        teachers_id: service.storage().list_teacher_ids(classroom_id).await?,
    })
}

pub async fn list_student_ids(
    service: &ClassroomService,
    classroom_id: i64,
) -> Result<StudentIdsResponse> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    service.require_classroom(classroom_id).await?;

    Ok(StudentIdsResponse {
        students_id: service.storage().list_student_ids(classroom_id).await?,
    })
}
