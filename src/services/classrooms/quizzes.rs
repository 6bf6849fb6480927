use serde_json::Value;
use tracing::info;

use super::ClassroomService;
use super::competences::ensure_competences_exist;
use crate::aggregation::{add_points, merge_quiz_ids, plan_quiz_attachment, remove_quiz_ids};
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::Classroom, requests::AttachQuizRequest, responses::QuizAttachmentResponse,
};
use crate::utils::validate::{ensure_non_negative, ensure_valid_id, filter_valid_ids};

fn validate_quiz(quiz: &AttachQuizRequest) -> Result<i64> {
    ensure_valid_id(quiz.quiz_id, "quiz_id")?;
    if quiz.questions.is_empty() {
        return Err(ClassroomError::validation("questions must not be empty"));
    }

    for question in &quiz.questions {
        ensure_valid_id(question.question_id, "question_id")?;
        ensure_non_negative(question.points, "points")?;
    }

    // 未提供总分时按题目分数求和
    match quiz.total_points {
        Some(total) => ensure_non_negative(total, "total_points"),
        None => {
            let mut total = 0;
            for question in &quiz.questions {
                add_points(&mut total, question.points)?;
            }
            Ok(total)
        }
    }
}

/// 挂载测验
///
/// 输入与分数计划在写入前校验。之后先更新课堂的测验列表与总分，再校验能力，
/// 能力校验失败时前一步不回滚。
pub async fn attach_quiz(
    service: &ClassroomService,
    classroom_id: i64,
    quiz: AttachQuizRequest,
) -> Result<QuizAttachmentResponse> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    let total_points = validate_quiz(&quiz)?;
    let plan = plan_quiz_attachment(&quiz.questions)?;

    let classroom = service.require_classroom(classroom_id).await?;
    let storage = service.storage();

    let quiz_ids = merge_quiz_ids(&classroom.quiz_ids, &[quiz.quiz_id]);
    let classroom = storage
        .set_quiz_ids_and_add_points(classroom_id, &quiz_ids, total_points)
        .await?
        .ok_or_else(|| {
            ClassroomError::classroom_not_found(format!("Classroom {classroom_id} not found"))
        })?;

    ensure_competences_exist(service, &plan.competence_ids()).await?;

    let associations_created = if plan.question_competences.is_empty() {
        0
    } else {
        storage
            .add_question_competences(&plan.question_competences)
            .await?
    };

    for delta in &plan.competence_points {
        storage
            .increment_classroom_competence_points(classroom_id, delta.competence_id, delta.points)
            .await?;
    }

    info!(
        "Quiz {} attached to classroom {}: +{} points, {} competence(s)",
        quiz.quiz_id,
        classroom_id,
        total_points,
        plan.competence_points.len()
    );

    Ok(QuizAttachmentResponse {
        classroom_id,
        quiz_id: quiz.quiz_id,
        quiz_ids: classroom.quiz_ids,
        total_points: classroom.total_points,
        associations_created,
        competence_points: plan.competence_points,
    })
}

/// 移除测验，未挂载的 ID 不影响课堂
pub async fn remove_quizzes(
    service: &ClassroomService,
    classroom_id: i64,
    quiz_ids: Vec<Value>,
) -> Result<Classroom> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;

    let removed = filter_valid_ids(&quiz_ids);
    if removed.is_empty() {
        return Err(ClassroomError::validation(
            "quiz_id must contain at least one positive integer",
        ));
    }

    let classroom = service.require_classroom(classroom_id).await?;

    let remaining = remove_quiz_ids(&classroom.quiz_ids, &removed);
    if remaining.len() == classroom.quiz_ids.len() {
        return Ok(classroom);
    }

    let classroom = service
        .storage()
        .set_classroom_quiz_ids(classroom_id, &remaining)
        .await?
        .ok_or_else(|| {
            ClassroomError::classroom_not_found(format!("Classroom {classroom_id} not found"))
        })?;

    info!(
        "Quiz(zes) {:?} removed from classroom {}",
        removed, classroom_id
    );

    Ok(classroom)
}
