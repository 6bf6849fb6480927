mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use classroom_service::routes;
use classroom_service::services::{ClassroomService, CompetenceService};
use classroom_service::utils::{json_error_handler, path_error_handler};

macro_rules! init_app {
    () => {{
        let storage = common::memory_storage().await;
        test::init_service(
            App::new()
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::Data::new(ClassroomService::new(storage.clone())))
                .app_data(web::Data::new(CompetenceService::new(storage)))
                .configure(routes::configure_classroom_routes)
                .configure(routes::configure_competence_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn create_and_fetch_classroom() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .set_json(json!({ "name": "Algebra", "teachers": [1, 2] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/classrooms/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["name"], "Algebra");
    assert_eq!(body["data"]["quiz_ids"], json!([]));

    let req = test::TestRequest::get()
        .uri(&format!("/classrooms/{id}/teachers"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["teachers_id"], json!([1, 2]));

    let req = test::TestRequest::get().uri("/classrooms/teacher/2").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["id"], id);
}

#[actix_web::test]
async fn invalid_path_id_is_bad_request() {
    let app = init_app!();

    for uri in ["/classrooms/0", "/classrooms/abc", "/competences/-4"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1002);
}

#[actix_web::test]
async fn missing_classroom_is_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/classrooms/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2001);
}

#[actix_web::test]
async fn add_students_reports_inserted_count() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .set_json(json!({ "name": "History", "teachers": [1] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/classrooms/{id}/add-students"))
        .set_json(json!({ "students_id": [5, "x", -1, 5] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["count"], 1);

    let req = test::TestRequest::post()
        .uri(&format!("/classrooms/{id}/add-students"))
        .set_json(json!({ "students_id": "5" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/classrooms/{id}/add-students"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn quiz_flow_and_ranking() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .set_json(json!({ "name": "Logic", "teachers": [1] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let classroom_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/competences")
        .set_json(json!({ "name": "Deduction", "id_teacher": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let competence_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/classrooms/{classroom_id}/add-students"))
        .set_json(json!({ "students_id": [11, 12] }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/classrooms/{classroom_id}/quizzes-competences"))
        .set_json(json!({
            "quiz_id": 3,
            "total_points": 10,
            "questions": [
                { "question_id": 1, "points": 6, "competences_id": [competence_id] },
                { "question_id": 2, "points": 4, "competences_id": [] }
            ]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["total_points"], 10);
    assert_eq!(body["data"]["quiz_ids"], json!([3]));

    for (student_id, points) in [(11, 2), (12, 6)] {
        let req = test::TestRequest::patch()
            .uri(&format!("/classrooms/{classroom_id}/student-quiz-points"))
            .set_json(json!({
                "quiz_id": 3,
                "student_id": student_id,
                "obtained_points": points,
                "question_student": [{ "question_id": 1, "obtained_points": points }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/classrooms/{classroom_id}/ranking"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["student_id"], 12);
    assert_eq!(body["data"][0]["rank"], 1);
    assert_eq!(body["data"][1]["student_id"], 11);

    let req = test::TestRequest::get()
        .uri(&format!(
            "/classrooms/{classroom_id}/competences/{competence_id}/ranking"
        ))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/competences/classroom/{classroom_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"][0]["id_competence"], competence_id);
    assert_eq!(body["data"][0]["total_points"], 6);

    let req = test::TestRequest::delete()
        .uri(&format!("/classrooms/{classroom_id}/quizzes"))
        .set_json(json!({ "quiz_id": 3 }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["quiz_ids"], json!([]));
}

#[actix_web::test]
async fn scoring_unknown_student_is_not_found() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .set_json(json!({ "name": "Closed", "teachers": [1] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let classroom_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/classrooms/{classroom_id}/student-quiz-points"))
        .set_json(json!({
            "quiz_id": 1,
            "student_id": 99,
            "obtained_points": 5,
            "question_student": []
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 2003);
}

#[actix_web::test]
async fn quiz_without_questions_is_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/classrooms")
        .set_json(json!({ "name": "Ethics", "teachers": [1] }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let classroom_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/classrooms/{classroom_id}/quizzes-competences"))
        .set_json(json!({ "quiz_id": 9, "total_points": 50 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri(&format!("/classrooms/{classroom_id}/add-students"))
        .set_json(json!({ "students_id": [] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri(&format!("/classrooms/{classroom_id}"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["quiz_ids"], json!([]));
    assert_eq!(body["data"]["total_points"], 0);
}

#[actix_web::test]
async fn user_without_classrooms_is_not_found() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/classrooms/user/5").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
