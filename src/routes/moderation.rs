use super::MessageResponse;
use crate::extractors::DbConnection;
use crate::models::{ModerationAction, ModerationOutcome, Suggestion};
use actix_web::{post, web, Error, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ModerationRequest {
    pub action: ModerationAction,
}

#[post("/admin/approval/{suggestion_id}")]
pub async fn moderate_suggestion(
    conn: DbConnection,
    path: web::Path<(i32,)>,
    data: web::Json<ModerationRequest>,
) -> Result<HttpResponse, Error> {
    let suggestion_id = path.into_inner().0;
    let action = data.action;
    let outcome = web::block(move || Suggestion::moderate(&conn, suggestion_id, action))
        .await
        .map_err(|e| {
            log::error!("{}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    let resp = match outcome {
        ModerationOutcome::Approved => {
            HttpResponse::Created().json(MessageResponse::new("Article approved and published"))
        }
        ModerationOutcome::Rejected => {
            HttpResponse::Ok().json(MessageResponse::new("Article suggestion rejected"))
        }
        ModerationOutcome::NotFound => HttpResponse::NotFound().json(MessageResponse {
            message: format!("No suggested article found with id: {}", suggestion_id),
        }),
    };
    Ok(resp)
}
