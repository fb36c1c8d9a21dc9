mod value;

use mysql_async::{prelude::Queryable, Conn, Pool, QueryResult, TextProtocol};
use sqldump_core::{async_trait, Cursor, Error, Result, Row, Source};
use url::Url;

/// A MySQL (or MariaDB) server to dump.
#[derive(Debug)]
pub struct MySQL {
    pool: Pool,
}

impl MySQL {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(|err| {
            Error::invalid_connection_url(format!("{err}; url={url_str}"))
        })?;

        if url.scheme() != "mysql" {
            return Err(Error::invalid_connection_url(format!(
                "connection url does not have a `mysql` scheme; url={url}"
            )));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(Error::invalid_connection_url(format!(
                "missing host in connection URL; url={url}"
            )));
        }

        if url.path().trim_start_matches('/').is_empty() {
            return Err(Error::invalid_connection_url(format!(
                "no database specified - missing path in connection URL; url={url}"
            )));
        }

        let opts = mysql_async::Opts::from_url(url.as_ref())
            .map_err(|err| Error::invalid_connection_url(err.to_string()))?;

        let pool = Pool::new(opts);
        Ok(Self { pool })
    }

    /// Checks out a connection to dump from.
    pub async fn connect(&self) -> Result<Connection> {
        let conn = self.pool.get_conn().await.map_err(Error::driver)?;
        Ok(Connection::new(conn))
    }

    /// Closes every pooled connection.
    pub async fn disconnect(self) -> Result<()> {
        self.pool.disconnect().await.map_err(Error::driver)
    }
}

impl From<Pool> for MySQL {
    fn from(pool: Pool) -> Self {
        Self { pool }
    }
}

/// A single server connection, queried over the text protocol.
#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    pub fn into_inner(self) -> Conn {
        self.conn
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl Source for Connection {
    async fn query<'a>(&'a mut self, sql: &'a str) -> Result<Box<dyn Cursor + 'a>> {
        let result = self.conn.query_iter(sql).await.map_err(Error::driver)?;
        Ok(Box::new(ResultCursor::new(result)))
    }
}

/// Streams rows of an open result set. Dropping it lets the connection
/// discard whatever is left of the result before the next query.
struct ResultCursor<'a> {
    result: QueryResult<'a, 'static, TextProtocol>,
    columns: Vec<String>,
}

impl<'a> ResultCursor<'a> {
    fn new(result: QueryResult<'a, 'static, TextProtocol>) -> Self {
        let columns = result
            .columns()
            .map(|columns| {
                columns
                    .iter()
                    .map(|column| column.name_str().into_owned())
                    .collect()
            })
            .unwrap_or_default();

        Self { result, columns }
    }
}

#[async_trait]
impl<'a> Cursor for ResultCursor<'a> {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    async fn next(&mut self) -> Result<Option<Row>> {
        let row = self.result.next().await.map_err(Error::driver)?;
        Ok(row.map(value::to_row))
    }
}
