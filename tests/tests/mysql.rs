#![cfg(feature = "mysql")]

use mysql_async::prelude::Queryable;
use sqldump::{DumpConfig, Dumper};
use tests::{mysql, raw_conn, replay, reset};

// One test only: every case shares the same database.
#[tokio::test]
async fn dump_and_replay() {
    let mut conn = raw_conn().await;
    reset(&mut conn).await;

    conn.query_drop("CREATE TABLE users (id int, name text)")
        .await
        .unwrap();
    conn.query_drop("CREATE TABLE logs (id int, message text)")
        .await
        .unwrap();
    conn.query_drop("INSERT INTO users VALUES (1, 'alice'), (2, 'bob'), (3, NULL)")
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let config = DumpConfig::new().dir(dir.path()).name_format("live");

    let mysql = mysql();
    let source = mysql.connect().await.unwrap();
    let path = Dumper::with_config(source, config).dump().await.unwrap();
    let dump = std::fs::read_to_string(&path).unwrap();

    assert!(dump.contains("INSERT INTO users VALUES ('1','alice'),('2','bob'),('3','');\n"));
    assert!(dump.contains("DROP TABLE IF EXISTS logs;\n"));
    assert!(!dump.contains("LOCK TABLES logs WRITE;"));

    // The same destination can't be dumped to twice.
    let source = mysql.connect().await.unwrap();
    let config = DumpConfig::new().dir(dir.path()).name_format("live");
    let err = Dumper::with_config(source, config).dump().await.unwrap_err();
    assert!(err.is_already_exists());

    reset(&mut conn).await;
    replay(&mut conn, &dump).await;

    let users: Vec<(i32, String)> = conn
        .query("SELECT id, name FROM users ORDER BY id")
        .await
        .unwrap();
    assert_eq!(
        users,
        [
            (1, "alice".to_string()),
            (2, "bob".to_string()),
            (3, String::new())
        ]
    );

    let logs: Option<i64> = conn.query_first("SELECT COUNT(*) FROM logs").await.unwrap();
    assert_eq!(logs, Some(0));

    reset(&mut conn).await;
    conn.disconnect().await.unwrap();
    mysql.disconnect().await.unwrap();
}
