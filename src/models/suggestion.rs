use crate::models::Article;
use crate::schema::suggested_articles;
use anyhow::Result;
use chrono::prelude::*;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Queryable, Identifiable, Debug)]
#[table_name = "suggested_articles"]
pub struct Suggestion {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author_name: String,
    pub image_url: Option<String>,
    pub suggested_at: NaiveDateTime,
}

#[derive(Insertable)]
#[table_name = "suggested_articles"]
struct NewSuggestion<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author_name: &'a str,
    pub image_url: Option<&'a str>,
    pub suggested_at: NaiveDateTime,
}

/// The two decisions an administrator can take on a pending suggestion.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Approve,
    Reject,
}

#[derive(Debug, PartialEq)]
pub enum ModerationOutcome {
    Approved,
    Rejected,
    NotFound,
}

impl Suggestion {
    pub fn create(
        conn: &SqliteConnection,
        title: &str,
        content: &str,
        author_name: &str,
        image_url: Option<&str>,
    ) -> Result<()> {
        let new_suggestion = NewSuggestion {
            title,
            content,
            author_name,
            image_url,
            suggested_at: Utc::now().naive_utc(),
        };
        diesel::insert_into(suggested_articles::table)
            .values(new_suggestion)
            .execute(conn)?;
        Ok(())
    }

    pub fn find(conn: &SqliteConnection, suggestion_id: i32) -> Result<Option<Suggestion>> {
        let suggestion = suggested_articles::table
            .find(suggestion_id)
            .first::<Suggestion>(conn)
            .optional()?;
        Ok(suggestion)
    }

    pub fn list(conn: &SqliteConnection) -> Result<Vec<Suggestion>> {
        let suggestions = suggested_articles::table.load::<Suggestion>(conn)?;
        Ok(suggestions)
    }

    /// Applies an administrator decision to the suggestion with the given
    /// id. Promotion and removal happen in one transaction, so a failed
    /// article insert leaves the suggestion in place.
    pub fn moderate(
        conn: &SqliteConnection,
        suggestion_id: i32,
        action: ModerationAction,
    ) -> Result<ModerationOutcome> {
        conn.transaction::<ModerationOutcome, anyhow::Error, _>(|| {
            let suggestion = match Self::find(conn, suggestion_id)? {
                Some(suggestion) => suggestion,
                None => return Ok(ModerationOutcome::NotFound),
            };
            match action {
                ModerationAction::Approve => {
                    Article::publish_from(conn, &suggestion)?;
                    suggestion.delete(conn)?;
                    Ok(ModerationOutcome::Approved)
                }
                ModerationAction::Reject => {
                    suggestion.delete(conn)?;
                    Ok(ModerationOutcome::Rejected)
                }
            }
        })
    }

    fn delete(&self, conn: &SqliteConnection) -> Result<()> {
        diesel::delete(suggested_articles::table.find(self.id)).execute(conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[test]
    fn create_and_list_pending() {
        let pool = db::create_test_pool();
        let conn = pool.get().unwrap();
        Suggestion::create(&conn, "T", "C", "A", None).unwrap();
        let pending = Suggestion::list(&conn).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "T");
        assert_eq!(pending[0].image_url, None);
    }

    #[test]
    fn approve_publishes_and_removes() {
        let pool = db::create_test_pool();
        let conn = pool.get().unwrap();
        Suggestion::create(&conn, "T", "C", "A", Some("https://img.host/t.png")).unwrap();
        let pending = Suggestion::list(&conn).unwrap();
        let outcome =
            Suggestion::moderate(&conn, pending[0].id, ModerationAction::Approve).unwrap();
        assert_eq!(outcome, ModerationOutcome::Approved);
        assert!(Suggestion::list(&conn).unwrap().is_empty());

        let published = Article::list_approved(&conn).unwrap();
        assert_eq!(published.len(), 1);
        assert_eq!(published[0].title, "T");
        assert_eq!(published[0].content, "C");
        assert_eq!(published[0].author_name, "A");
        assert_eq!(
            published[0].image_url.as_deref(),
            Some("https://img.host/t.png")
        );
        assert!(published[0].approved);
    }

    #[test]
    fn reject_removes_without_publishing() {
        let pool = db::create_test_pool();
        let conn = pool.get().unwrap();
        Suggestion::create(&conn, "T", "C", "A", None).unwrap();
        let pending = Suggestion::list(&conn).unwrap();
        let outcome =
            Suggestion::moderate(&conn, pending[0].id, ModerationAction::Reject).unwrap();
        assert_eq!(outcome, ModerationOutcome::Rejected);
        assert!(Suggestion::list(&conn).unwrap().is_empty());
        assert!(Article::list_approved(&conn).unwrap().is_empty());
    }

    #[test]
    fn moderate_unknown_id_mutates_nothing() {
        let pool = db::create_test_pool();
        let conn = pool.get().unwrap();
        Suggestion::create(&conn, "T", "C", "A", None).unwrap();
        let outcome = Suggestion::moderate(&conn, 9999, ModerationAction::Approve).unwrap();
        assert_eq!(outcome, ModerationOutcome::NotFound);
        assert_eq!(Suggestion::list(&conn).unwrap().len(), 1);
        assert!(Article::list_approved(&conn).unwrap().is_empty());
    }
}
