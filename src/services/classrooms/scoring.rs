use tracing::info;

use super::ClassroomService;
use super::competences::ensure_competences_exist;
use crate::aggregation::accumulate_student_competence_points;
use crate::errors::{ClassroomError, Result};
use crate::models::classrooms::{
    entities::MembershipKind, requests::StudentQuizPointsRequest,
    responses::StudentQuizPointsResponse,
};
use crate::utils::validate::{ensure_non_negative, ensure_valid_id};

fn validate_attempt(attempt: &StudentQuizPointsRequest) -> Result<()> {
    ensure_valid_id(attempt.quiz_id, "quiz_id")?;
    ensure_valid_id(attempt.student_id, "student_id")?;
    ensure_non_negative(attempt.obtained_points, "obtained_points")?;

    for result in &attempt.question_student {
        ensure_valid_id(result.question_id, "question_id")?;
        ensure_non_negative(result.obtained_points, "obtained_points")?;
    }

    Ok(())
}

fn student_not_in_classroom(student_id: i64, classroom_id: i64) -> ClassroomError {
    ClassroomError::student_not_in_classroom(format!(
        "Student {student_id} is not enrolled in classroom {classroom_id}"
    ))
}

/// 记录学生一次测验作答
///
/// 能力分数在写入前汇总。课堂总分先累加，能力校验失败时不回滚。
/// 题目归属的能力只取已存储的关联。
pub async fn record_student_quiz_points(
    service: &ClassroomService,
    classroom_id: i64,
    attempt: StudentQuizPointsRequest,
) -> Result<StudentQuizPointsResponse> {
    let classroom_id = ensure_valid_id(classroom_id, "classroom id")?;
    validate_attempt(&attempt)?;

    service.require_classroom(classroom_id).await?;
    let storage = service.storage();
    let student_id = attempt.student_id;

    if !storage
        .is_member(MembershipKind::Student, classroom_id, student_id)
        .await?
    {
        return Err(student_not_in_classroom(student_id, classroom_id));
    }

    let mut question_ids: Vec<i64> = attempt
        .question_student
        .iter()
        .map(|r| r.question_id)
        .collect();
    question_ids.sort_unstable();
    question_ids.dedup();

    let associations = storage.find_question_competences(&question_ids).await?;
    let competence_points =
        accumulate_student_competence_points(&attempt.question_student, &associations)?;

    if !storage
        .increment_student_points(classroom_id, student_id, attempt.obtained_points)
        .await?
    {
        return Err(student_not_in_classroom(student_id, classroom_id));
    }

    let competence_ids: Vec<i64> = competence_points.iter().map(|p| p.competence_id).collect();
    ensure_competences_exist(service, &competence_ids).await?;

    for delta in &competence_points {
        storage
            .increment_student_competence_points(
                classroom_id,
                student_id,
                delta.competence_id,
                delta.points,
            )
            .await?;
    }

    info!(
        "Student {} scored {} point(s) on quiz {} in classroom {}",
        student_id, attempt.obtained_points, attempt.quiz_id, classroom_id
    );

    Ok(StudentQuizPointsResponse {
        classroom_id,
        student_id,
        quiz_id: attempt.quiz_id,
        points_added: attempt.obtained_points,
        competence_points,
    })
}
