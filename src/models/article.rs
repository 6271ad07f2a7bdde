use crate::models::Suggestion;
use crate::schema::articles;
use anyhow::Result;
use chrono::prelude::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

#[derive(Serialize, Queryable, Identifiable, Debug)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub approved: bool,
}

#[derive(Insertable)]
#[table_name = "articles"]
struct NewArticle<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author_name: &'a str,
    pub image_url: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub approved: bool,
}

impl Article {
    /// Copies a pending suggestion into the published table. The new row
    /// gets its own id and a fresh timestamp; rows are never shared with
    /// the suggestion table.
    pub fn publish_from(conn: &SqliteConnection, suggestion: &Suggestion) -> Result<()> {
        let new_article = NewArticle {
            title: &suggestion.title,
            content: &suggestion.content,
            author_name: &suggestion.author_name,
            image_url: suggestion.image_url.as_deref(),
            created_at: Utc::now().naive_utc(),
            approved: true,
        };
        diesel::insert_into(articles::table)
            .values(new_article)
            .execute(conn)?;
        Ok(())
    }

    pub fn list_approved(conn: &SqliteConnection) -> Result<Vec<Article>> {
        let rows = articles::table
            .filter(articles::approved.eq(true))
            .load::<Article>(conn)?;
        Ok(rows)
    }
}
