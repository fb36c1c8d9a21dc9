use mysql_async::prelude::Queryable;
use sqldump_driver_mysql::MySQL;

/// Connection URL of the throwaway database the live tests dump.
///
/// Every table in that database is dropped by [`reset`].
pub fn mysql_url() -> String {
    std::env::var("SQLDUMP_TEST_MYSQL_URL")
        .unwrap_or_else(|_| "mysql://localhost:3306/sqldump_test".to_string())
}

pub fn mysql() -> MySQL {
    MySQL::new(mysql_url()).expect("invalid SQLDUMP_TEST_MYSQL_URL")
}

/// Opens a raw client connection for setup and verification.
pub async fn raw_conn() -> mysql_async::Conn {
    mysql_async::Conn::from_url(mysql_url().as_str())
        .await
        .expect("failed to connect to the test database")
}

/// Drops every table of the test database.
pub async fn reset(conn: &mut mysql_async::Conn) {
    let tables: Vec<String> = conn.query("SHOW TABLES").await.unwrap();
    for table in tables {
        conn.query_drop(format!("DROP TABLE `{table}`")).await.unwrap();
    }
}

/// Runs every statement of a rendered dump.
pub async fn replay(conn: &mut mysql_async::Conn, dump: &str) {
    for statement in statements(dump) {
        conn.query_drop(statement).await.unwrap();
    }
}

/// Splits a dump into statements: comment lines are skipped and a statement
/// ends with the line that ends in `;`.
fn statements(dump: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in dump.lines() {
        if current.is_empty() && (line.is_empty() || line.starts_with("--")) {
            continue;
        }

        current.push_str(line);
        current.push('\n');

        if line.ends_with(';') {
            statements.push(std::mem::take(&mut current));
        }
    }

    statements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_dump_into_statements() {
        let dump = "-- header\n--\n\nDROP TABLE IF EXISTS t;\nCREATE TABLE t (\n  a int\n);\n\n-- Dump completed on now\n";
        assert_eq!(
            statements(dump),
            ["DROP TABLE IF EXISTS t;\n", "CREATE TABLE t (\n  a int\n);\n"]
        );
    }
}
