use crate::db::DbPool;
use actix_web::{dev, web::Data, Error, FromRequest, HttpRequest};
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::SqliteConnection;
use futures::future::{err, ok, Ready};
use std::ops::Deref;

pub type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Checks a pooled connection out of the shared pool for the lifetime of
/// the request.
pub struct DbConnection {
    pub conn: Conn,
}

impl Deref for DbConnection {
    type Target = Conn;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl FromRequest for DbConnection {
    type Error = Error;
    type Future = Ready<Result<Self, Error>>;
    type Config = ();

    fn from_request(req: &HttpRequest, _payload: &mut dev::Payload) -> Self::Future {
        let pool = match req.app_data::<Data<DbPool>>() {
            Some(pool) => pool,
            None => {
                return err(actix_web::error::ErrorInternalServerError(
                    "Database pool is not configured",
                ))
            }
        };
        match pool.get() {
            Ok(conn) => ok(DbConnection { conn }),
            Err(e) => {
                log::error!("{}", e);
                err(actix_web::error::ErrorInternalServerError(
                    "Could not check out a database connection",
                ))
            }
        }
    }
}
