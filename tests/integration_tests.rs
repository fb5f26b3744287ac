mod common;

use actix_web::{
    cookie::Cookie,
    dev::ServiceResponse,
    http::StatusCode,
    test, web, App,
};
use serde_json::{json, Value};

use anatomy_server::{auth::SESSION_COOKIE, handlers};
use common::TestRepositories;

macro_rules! app {
    ($repos:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repos.app_state()))
                .configure(handlers::configure),
        )
        .await
    };
}

fn session_cookie(resp: &ServiceResponse) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
        .expect("response should set the session cookie")
}

macro_rules! register {
    ($app:expr, $name:expr, $email:expr, $role:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "name": $name,
                "email": $email,
                "password": "secret123",
                "role": $role,
            }))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        session_cookie(&resp)
    }};
}

fn cardiovascular_quiz() -> Value {
    json!({
        "system": "Cardiovascular",
        "questions": [{
            "question": "How many chambers does the human heart have?",
            "options": ["2", "3", "4", "5"],
            "correctAnswer": "4"
        }]
    })
}

#[actix_web::test]
async fn cardiovascular_quiz_end_to_end() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");
    let student = register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .cookie(teacher.clone())
        .set_json(cardiovascular_quiz())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let quiz: Value = test::read_body_json(resp).await;
    let quiz_id = quiz["id"].as_str().unwrap().to_string();
    assert_eq!(quiz["questions"][0]["correctAnswer"], "4");

    let submit = |answer: &str| {
        test::TestRequest::post()
            .uri(&format!("/api/quizzes/{}/submit", quiz_id))
            .cookie(student.clone())
            .set_json(json!({ "answers": [answer] }))
            .to_request()
    };

    let correct: Value = test::call_and_read_body_json(&app, submit("4")).await;
    assert_eq!(correct, json!({"score": 1, "totalQuestions": 1, "percentage": 100}));

    let wrong: Value = test::call_and_read_body_json(&app, submit("3")).await;
    assert_eq!(wrong, json!({"score": 0, "totalQuestions": 1, "percentage": 0}));

    let req = test::TestRequest::get()
        .uri("/api/marks")
        .cookie(student.clone())
        .to_request();
    let marks: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(marks.len(), 2);
    assert_eq!(marks[0]["quizName"], "Cardiovascular");
    assert_eq!(marks[0]["percentage"], 100);
    assert_eq!(marks[1]["percentage"], 0);
}

#[actix_web::test]
async fn answer_length_mismatch_is_rejected_without_recording() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");
    let student = register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .cookie(teacher)
        .set_json(cardiovascular_quiz())
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/quizzes/{}/submit", quiz["id"].as_str().unwrap()))
        .cookie(student.clone())
        .set_json(json!({ "answers": ["4", "4"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid answers format");

    let req = test::TestRequest::get()
        .uri("/api/marks")
        .cookie(student)
        .to_request();
    let marks: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(marks.is_empty());
}

#[actix_web::test]
async fn quiz_deletion_respects_ownership() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let owner = register!(app, "Tess", "tess@example.com", "teacher");
    let other = register!(app, "Otto", "otto@example.com", "teacher");

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .cookie(owner.clone())
        .set_json(cardiovascular_quiz())
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;
    let uri = format!("/api/quizzes/{}", quiz["id"].as_str().unwrap());

    let req = test::TestRequest::delete().uri(&uri).cookie(other).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let req = test::TestRequest::delete().uri(&uri).cookie(owner.clone()).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Quiz deleted successfully");

    let req = test::TestRequest::get().uri(&uri).cookie(owner).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn deleted_quiz_keeps_mark_with_placeholder_name() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");
    let student = register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .cookie(teacher.clone())
        .set_json(cardiovascular_quiz())
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;
    let id = quiz["id"].as_str().unwrap();

    let req = test::TestRequest::post()
        .uri(&format!("/api/quizzes/{}/submit", id))
        .cookie(student.clone())
        .set_json(json!({ "answers": ["4"] }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/quizzes/{}", id))
        .cookie(teacher)
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/marks").cookie(student).to_request();
    let marks: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(marks.len(), 1);
    assert_eq!(marks[0]["quizName"], "Quiz");
    assert_eq!(marks[0]["percentage"], 100);
}

#[actix_web::test]
async fn role_checks_and_missing_session() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");

    let req = test::TestRequest::get().uri("/api/marks").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/api/marks").cookie(teacher.clone()).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Forbidden: Student access required");

    let req = test::TestRequest::get()
        .uri("/api/quizzes/teacher")
        .cookie(teacher)
        .to_request();
    let owned: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(owned.is_empty());
}

#[actix_web::test]
async fn models_require_glb_url() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");

    let req = test::TestRequest::post()
        .uri("/api/models")
        .cookie(teacher.clone())
        .set_json(json!({
            "name": "Heart",
            "system": "Cardiovascular",
            "modelUrl": "https://cdn.example.com/heart.obj"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Model URL must be a .glb file");

    let req = test::TestRequest::post()
        .uri("/api/models")
        .cookie(teacher.clone())
        .set_json(json!({
            "name": "Heart",
            "system": "Cardiovascular",
            "modelUrl": "https://cdn.example.com/heart.glb"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/api/models/teacher")
        .cookie(teacher)
        .to_request();
    let owned: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0]["name"], "Heart");
}

#[actix_web::test]
async fn listings_show_owner_name_and_email() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    let teacher = register!(app, "Tess", "tess@example.com", "teacher");
    let student = register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/models")
        .cookie(teacher.clone())
        .set_json(json!({
            "name": "Heart",
            "system": "Cardiovascular",
            "modelUrl": "https://cdn.example.com/heart.glb"
        }))
        .to_request();
    let model: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/quizzes")
        .cookie(teacher)
        .set_json(cardiovascular_quiz())
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/models")
        .cookie(student.clone())
        .to_request();
    let models: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(models.len(), 1);
    assert_eq!(models[0]["owner"]["name"], "Tess");
    assert_eq!(models[0]["owner"]["email"], "tess@example.com");
    assert_eq!(models[0]["owner"]["id"], models[0]["ownerId"]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/models/{}", model["id"].as_str().unwrap()))
        .cookie(student.clone())
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["owner"]["name"], "Tess");

    let req = test::TestRequest::get()
        .uri("/api/quizzes")
        .cookie(student.clone())
        .to_request();
    let quizzes: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(quizzes[0]["owner"]["name"], "Tess");

    let req = test::TestRequest::get()
        .uri(&format!("/api/quizzes/{}", quiz["id"].as_str().unwrap()))
        .cookie(student)
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["owner"]["email"], "tess@example.com");
    assert_eq!(fetched["questions"][0]["correctAnswer"], "4");
}

#[actix_web::test]
async fn login_me_and_logout() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "sam@example.com", "password": "wrong-pass" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": "SAM@example.com", "password": "secret123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get().uri("/api/auth/me").cookie(cookie).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["user"]["email"], "sam@example.com");
    assert_eq!(body["user"]["role"], "student");
    assert!(body["user"].get("passwordHash").is_none());

    let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(session_cookie(&resp).value(), "");
}

#[actix_web::test]
async fn duplicate_registration_is_rejected() {
    let repos = TestRepositories::new();
    let app = app!(repos);

    register!(app, "Sam", "sam@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Sam Again",
            "email": "sam@example.com",
            "password": "secret123",
            "role": "student",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
}
