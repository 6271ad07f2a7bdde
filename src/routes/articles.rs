use super::DATETIME_FORMAT;
use crate::extractors::DbConnection;
use crate::models::Article;
use actix_web::{get, web, Error, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct ArticleResponse {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub created_at: String,
    pub approved: bool,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        ArticleResponse {
            id: article.id,
            title: article.title,
            content: article.content,
            author_name: article.author_name,
            image_url: article.image_url,
            created_at: article.created_at.format(DATETIME_FORMAT).to_string(),
            approved: article.approved,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ApprovedArticleListResponse {
    pub approved_articles: Vec<ArticleResponse>,
}

#[get("/articles/approved")]
pub async fn list_approved(conn: DbConnection) -> Result<HttpResponse, Error> {
    let articles = web::block(move || Article::list_approved(&conn))
        .await
        .map_err(|e| {
            log::error!("{}", e);
            HttpResponse::InternalServerError().finish()
        })?;
    let resp = ApprovedArticleListResponse {
        approved_articles: articles.into_iter().map(ArticleResponse::from).collect(),
    };
    Ok(HttpResponse::Ok().json(resp))
}
