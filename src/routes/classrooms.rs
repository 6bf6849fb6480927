use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::response::{error_response, respond};
use crate::errors::ClassroomError;
use crate::models::classrooms::requests::{
    AddStudentsRequest, AddTeachersRequest, AssociateCompetencesRequest, AttachQuizRequest,
    CreateClassroomRequest, RemoveQuizzesRequest, StudentQuizPointsRequest,
    UpdateClassroomRequest,
};
use crate::models::classrooms::responses::CountResponse;
use crate::services::ClassroomService;
use crate::utils::{SafeClassroomIdI64, SafeCompetenceIdI64, SafeIDI64};

// HTTP处理程序
pub async fn create_classroom(
    service: web::Data<ClassroomService>,
    body: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.create_classroom(body.into_inner()).await,
        StatusCode::CREATED,
        "Classroom created successfully",
    )
}

pub async fn list_classrooms(service: web::Data<ClassroomService>) -> ActixResult<HttpResponse> {
    respond(
        service.list_classrooms().await,
        StatusCode::OK,
        "Classrooms retrieved successfully",
    )
}

pub async fn get_classroom(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.get_classroom(classroom_id.0).await,
        StatusCode::OK,
        "Classroom retrieved successfully",
    )
}

pub async fn update_classroom(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .update_classroom(classroom_id.0, body.into_inner())
            .await,
        StatusCode::OK,
        "Classroom updated successfully",
    )
}

pub async fn list_classrooms_by_teacher(
    service: web::Data<ClassroomService>,
    teacher_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_classrooms_by_teacher(teacher_id.0).await,
        StatusCode::OK,
        "Teacher classrooms retrieved successfully",
    )
}

pub async fn list_classrooms_by_user(
    service: web::Data<ClassroomService>,
    user_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_classrooms_by_user(user_id.0).await,
        StatusCode::OK,
        "User classrooms retrieved successfully",
    )
}

pub async fn add_students(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<AddStudentsRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .add_students(classroom_id.0, body.into_inner().students_id)
            .await
            .map(|count| CountResponse { count }),
        StatusCode::CREATED,
        "Students added successfully",
    )
}

pub async fn add_teachers(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<AddTeachersRequest>,
) -> ActixResult<HttpResponse> {
    let body = body.into_inner();
    respond(
        service
            .add_teachers(classroom_id.0, body.teachers_id, body.role)
            .await
            .map(|count| CountResponse { count }),
        StatusCode::CREATED,
        "Teachers added successfully",
    )
}

pub async fn list_teachers(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_teacher_ids(classroom_id.0).await,
        StatusCode::OK,
        "Teachers retrieved successfully",
    )
}

pub async fn list_students(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_student_ids(classroom_id.0).await,
        StatusCode::OK,
        "Students retrieved successfully",
    )
}

pub async fn list_competences(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_classroom_competences(classroom_id.0).await,
        StatusCode::OK,
        "Classroom competences retrieved successfully",
    )
}

pub async fn associate_competences(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<AssociateCompetencesRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .associate_competences(classroom_id.0, body.into_inner().competences_id)
            .await
            .map(|count| CountResponse { count }),
        StatusCode::CREATED,
        "Competences associated successfully",
    )
}

pub async fn attach_quiz(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<AttachQuizRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.attach_quiz(classroom_id.0, body.into_inner()).await,
        StatusCode::OK,
        "Quiz, associations and classroom points updated successfully",
    )
}

pub async fn remove_quizzes(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<RemoveQuizzesRequest>,
) -> ActixResult<HttpResponse> {
    let Some(quiz_ids) = body.into_inner().quiz_id else {
        return Ok(error_response(&ClassroomError::validation(
            "quiz_id is required",
        )));
    };

    respond(
        service
            .remove_quizzes(classroom_id.0, quiz_ids.into_values())
            .await,
        StatusCode::OK,
        "Quizzes removed from classroom successfully",
    )
}

pub async fn record_student_quiz_points(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    body: web::Json<StudentQuizPointsRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .record_student_quiz_points(classroom_id.0, body.into_inner())
            .await,
        StatusCode::OK,
        "Student and competence points updated successfully",
    )
}

pub async fn student_ranking(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.student_ranking(classroom_id.0).await,
        StatusCode::OK,
        "Ranking retrieved successfully",
    )
}

pub async fn student_competence_ranking(
    service: web::Data<ClassroomService>,
    classroom_id: SafeClassroomIdI64,
    competence_id: SafeCompetenceIdI64,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .student_competence_ranking(classroom_id.0, competence_id.0)
            .await,
        StatusCode::OK,
        "Competence ranking retrieved successfully",
    )
}

// 配置路由
pub fn configure_classroom_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/classrooms")
            .service(
                web::resource("")
                    .route(web::get().to(list_classrooms))
                    .route(web::post().to(create_classroom)),
            )
            // 固定前缀的路由需要在 /{classroom_id} 之前注册
            .service(web::resource("/teacher/{id}").route(web::get().to(list_classrooms_by_teacher)))
            .service(web::resource("/user/{id}").route(web::get().to(list_classrooms_by_user)))
            .service(
                web::resource("/{classroom_id}")
                    .route(web::get().to(get_classroom))
                    .route(web::patch().to(update_classroom)),
            )
            .service(
                web::resource("/{classroom_id}/add-students").route(web::post().to(add_students)),
            )
            .service(
                web::resource("/{classroom_id}/add-teachers").route(web::post().to(add_teachers)),
            )
            .service(web::resource("/{classroom_id}/teachers").route(web::get().to(list_teachers)))
            .service(web::resource("/{classroom_id}/students").route(web::get().to(list_students)))
            .service(
                web::resource("/{classroom_id}/competences")
                    .route(web::get().to(list_competences)),
            )
            .service(
                web::resource("/{classroom_id}/competences/associate")
                    .route(web::post().to(associate_competences)),
            )
            .service(
                web::resource("/{classroom_id}/competences/{competence_id}/ranking")
                    .route(web::get().to(student_competence_ranking)),
            )
            .service(
                web::resource("/{classroom_id}/quizzes-competences")
                    .route(web::patch().to(attach_quiz)),
            )
            .service(
                web::resource("/{classroom_id}/quizzes").route(web::delete().to(remove_quizzes)),
            )
            .service(
                web::resource("/{classroom_id}/student-quiz-points")
                    .route(web::patch().to(record_student_quiz_points)),
            )
            .service(
                web::resource("/{classroom_id}/ranking").route(web::get().to(student_ranking)),
            ),
    );
}
