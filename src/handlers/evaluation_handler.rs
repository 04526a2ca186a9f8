use std::sync::Arc;

use actix_web::{get, http::header, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{EvaluateRequestDto, UploadParams},
    services::text_extractor::{MediaType, UploadedDocument},
};

fn uploaded_document(req: &HttpRequest, params: &UploadParams, body: web::Bytes) -> UploadedDocument {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());
    let media_type = MediaType::resolve(content_type, params.filename.as_deref());

    UploadedDocument::new(body.to_vec(), media_type)
}

#[get("/api/shell")]
pub async fn get_shell(state: web::Data<Arc<AppState>>) -> HttpResponse {
    HttpResponse::Ok().json(state.shell().view())
}

/// Extracts the uploaded document and shows it as the answer preview.
#[post("/api/answers/preview")]
pub async fn preview_answer(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    web::Query(params): web::Query<UploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mut shell = state.shell();
    if let Some(question) = params.question.clone() {
        shell.set_question(question);
    }

    shell.upload(&uploaded_document(&req, &params, body))?;
    Ok(HttpResponse::Ok().json(shell.view()))
}

#[post("/api/evaluations")]
pub async fn evaluate_answer(
    state: web::Data<Arc<AppState>>,
    request: web::Json<EvaluateRequestDto>,
) -> Result<HttpResponse, AppError> {
    let EvaluateRequestDto { question, answer } = request.into_inner();

    let mut shell = state.shell();
    if let Some(question) = question {
        shell.set_question(question);
    }
    if let Some(answer) = answer {
        shell.set_answer(answer);
    }

    shell.evaluate().await?;
    Ok(HttpResponse::Ok().json(shell.view()))
}

/// Upload and evaluate in one interaction; the extracted text replaces the answer.
#[post("/api/evaluations/upload")]
pub async fn evaluate_upload(
    state: web::Data<Arc<AppState>>,
    req: HttpRequest,
    web::Query(params): web::Query<UploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let mut shell = state.shell();
    if let Some(question) = params.question.clone() {
        shell.set_question(question);
    }

    shell.upload(&uploaded_document(&req, &params, body))?;
    shell.evaluate().await?;
    Ok(HttpResponse::Ok().json(shell.view()))
}
