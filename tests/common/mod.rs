#![allow(dead_code)]

use std::sync::Arc;

use classroom_service::config::DatabaseConfig;
use classroom_service::models::classrooms::requests::{
    AttachQuizRequest, CreateClassroomRequest, QuestionResultInput, QuizQuestionInput,
    StudentQuizPointsRequest,
};
use classroom_service::models::competences::requests::CreateCompetenceRequest;
use classroom_service::services::{ClassroomService, CompetenceService};
use classroom_service::storage::Storage;
use classroom_service::storage::sea_orm_storage::SeaOrmStorage;

/// 每个测试独立的内存数据库，迁移已执行
pub async fn memory_storage() -> Arc<dyn Storage> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = SeaOrmStorage::connect(&config)
        .await
        .expect("in-memory database should migrate");
    Arc::new(storage)
}

pub async fn services() -> (Arc<dyn Storage>, ClassroomService, CompetenceService) {
    let storage = memory_storage().await;
    (
        storage.clone(),
        ClassroomService::new(storage.clone()),
        CompetenceService::new(storage),
    )
}

pub fn classroom_request(name: &str, teachers: Vec<i64>) -> CreateClassroomRequest {
    CreateClassroomRequest {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        teachers,
    }
}

pub fn competence_request(name: &str, id_teacher: i64) -> CreateCompetenceRequest {
    CreateCompetenceRequest {
        name: name.to_string(),
        description: None,
        id_teacher,
    }
}

pub fn quiz(quiz_id: i64, questions: Vec<(i64, i64, Vec<i64>)>) -> AttachQuizRequest {
    AttachQuizRequest {
        quiz_id,
        total_points: Some(
            questions
                .iter()
                .fold(0i64, |total, (_, points, _)| total.saturating_add(*points)),
        ),
        questions: questions
            .into_iter()
            .map(|(question_id, points, competences_id)| QuizQuestionInput {
                question_id,
                points,
                competences_id,
            })
            .collect(),
    }
}

pub fn attempt(
    quiz_id: i64,
    student_id: i64,
    results: Vec<(i64, i64)>,
) -> StudentQuizPointsRequest {
    StudentQuizPointsRequest {
        quiz_id,
        student_id,
        obtained_points: results.iter().map(|(_, points)| points).sum(),
        question_student: results
            .into_iter()
            .map(|(question_id, obtained_points)| QuestionResultInput {
                question_id,
                obtained_points,
            })
            .collect(),
    }
}
