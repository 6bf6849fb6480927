use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};

use super::response::respond;
use crate::models::competences::requests::CreateCompetenceRequest;
use crate::models::competences::responses::CompetenceListResponse;
use crate::services::CompetenceService;
use crate::utils::SafeIDI64;

// HTTP处理程序
pub async fn create_competence(
    service: web::Data<CompetenceService>,
    body: web::Json<CreateCompetenceRequest>,
) -> ActixResult<HttpResponse> {
    respond(
        service.create_competence(body.into_inner()).await,
        StatusCode::CREATED,
        "Competence created successfully",
    )
}

pub async fn list_competences(service: web::Data<CompetenceService>) -> ActixResult<HttpResponse> {
    respond(
        service
            .list_competences()
            .await
            .map(CompetenceListResponse::from),
        StatusCode::OK,
        "Competences retrieved successfully",
    )
}

pub async fn get_competence(
    service: web::Data<CompetenceService>,
    competence_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.get_competence(competence_id.0).await,
        StatusCode::OK,
        "Competence retrieved successfully",
    )
}

pub async fn list_competences_by_teacher(
    service: web::Data<CompetenceService>,
    teacher_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service
            .list_competences_by_teacher(teacher_id.0)
            .await
            .map(CompetenceListResponse::from),
        StatusCode::OK,
        "Teacher competences retrieved successfully",
    )
}

pub async fn list_competences_by_classroom(
    service: web::Data<CompetenceService>,
    classroom_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    respond(
        service.list_competences_by_classroom(classroom_id.0).await,
        StatusCode::OK,
        "Classroom competences retrieved successfully",
    )
}

// 配置路由
pub fn configure_competence_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/competences")
            .service(
                web::resource("")
                    .route(web::get().to(list_competences))
                    .route(web::post().to(create_competence)),
            )
            .service(
                web::resource("/teacher/{id}").route(web::get().to(list_competences_by_teacher)),
            )
            .service(
                web::resource("/classroom/{id}")
                    .route(web::get().to(list_competences_by_classroom)),
            )
            .service(web::resource("/{id}").route(web::get().to(get_competence))),
    );
}
