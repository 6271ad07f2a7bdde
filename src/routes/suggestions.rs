use super::{MessageResponse, DATETIME_FORMAT};
use crate::extractors::DbConnection;
use crate::models::Suggestion;
use actix_web::{get, post, web, Error, HttpResponse};
use actix_web_validator::ValidatedJson;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

const ALLOWED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

fn validate_image_extension(image_url: &str) -> Result<(), ValidationError> {
    let path = image_url
        .split(|c| c == '?' || c == '#')
        .next()
        .unwrap_or(image_url);
    let extension = path
        .rsplit('/')
        .next()
        .and_then(|file_name| file_name.rsplit_once('.'))
        .map(|(_, extension)| extension.to_ascii_lowercase());
    match extension {
        Some(ref extension) if ALLOWED_IMAGE_EXTENSIONS.contains(&extension.as_str()) => Ok(()),
        _ => Err(ValidationError::new("image_extension")),
    }
}

#[derive(Serialize, Deserialize, Validate, Debug)]
pub struct SuggestionCreateRequest {
    #[validate(length(min = 1, max = 300))]
    title: String,
    #[validate(length(min = 1, max = 1000000))]
    content: String,
    #[validate(length(min = 1, max = 100))]
    author_name: String,
    #[validate(custom = "validate_image_extension")]
    image_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SuggestionResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub suggested_at: String,
}

impl From<Suggestion> for SuggestionResponse {
    fn from(suggestion: Suggestion) -> Self {
        SuggestionResponse {
            id: suggestion.id,
            title: suggestion.title,
            content: suggestion.content,
            author_name: suggestion.author_name,
            image_url: suggestion.image_url,
            suggested_at: suggestion.suggested_at.format(DATETIME_FORMAT).to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SuggestionListResponse {
    pub suggested_articles: Vec<SuggestionResponse>,
}

#[post("/suggested_articles")]
pub async fn create_suggestion(
    conn: DbConnection,
    data: ValidatedJson<SuggestionCreateRequest>,
) -> Result<HttpResponse, Error> {
    web::block(move || {
        Suggestion::create(
            &conn,
            &data.title,
            &data.content,
            &data.author_name,
            data.image_url.as_deref(),
        )
    })
    .await
    .map_err(|e| {
        log::error!("{}", e);
        HttpResponse::InternalServerError().finish()
    })?;
    Ok(HttpResponse::Created().json(MessageResponse::new(
        "Suggested article submitted successfully",
    )))
}

#[get("/suggested_articles")]
pub async fn list_suggestions(conn: DbConnection) -> Result<HttpResponse, Error> {
    let suggestions = web::block(move || Suggestion::list(&conn))
        .await
        .map_err(|e| {
            log::error!("{}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    let resp = SuggestionListResponse {
        suggested_articles: suggestions.into_iter().map(SuggestionResponse::from).collect(),
    };
    Ok(HttpResponse::Ok().json(resp))
}
