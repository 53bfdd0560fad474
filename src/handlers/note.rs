use actix_web::{web, HttpResponse};
use serde_json::json;

use super::Pool;
use crate::{errors::ServerError, models::note::IncomingNote, service};

pub async fn list(pool: web::Data<Pool>) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    let all = service::list_all(&mut connection)?;
    Ok(HttpResponse::Ok().json(json!(all)))
}

pub async fn create(
    input: web::Json<IncomingNote>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    let created = service::create(&mut connection, &input)?;
    Ok(HttpResponse::Created().json(json!(created)))
}

pub async fn get(
    note_id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    let found = service::get(&mut connection, note_id.into_inner())?;
    Ok(HttpResponse::Ok().json(json!(found)))
}

pub async fn update(
    note_id: web::Path<i32>,
    input: web::Json<IncomingNote>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    service::update(&mut connection, note_id.into_inner(), &input)?;
    Ok(HttpResponse::Ok().finish())
}

pub async fn delete(
    note_id: web::Path<i32>,
    pool: web::Data<Pool>,
) -> Result<HttpResponse, ServerError> {
    let mut connection = pool.get()?;

    service::delete(&mut connection, note_id.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
