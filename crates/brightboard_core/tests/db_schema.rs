use brightboard_core::db::schema::latest_version;
use brightboard_core::db::DbError;
use brightboard_core::ConnectionProvider;
use rusqlite::Connection;

#[test]
fn in_memory_provider_applies_full_schema() {
    let provider = ConnectionProvider::in_memory().unwrap();
    let conn = provider.acquire().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "accounts");
    assert_table_exists(&conn, "posts");
    assert_table_exists(&conn, "tasks");
    assert_table_exists(&conn, "contact_messages");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("brightboard.db");

    let provider_first = ConnectionProvider::open(&path).unwrap();
    let conn_first = provider_first.acquire().unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);
    drop(provider_first);

    let provider_second = ConnectionProvider::open(&path).unwrap();
    let conn_second = provider_second.acquire().unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "accounts");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = ConnectionProvider::open(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn in_memory_databases_are_isolated_per_provider() {
    let provider_a = ConnectionProvider::in_memory().unwrap();
    let provider_b = ConnectionProvider::in_memory().unwrap();

    provider_a
        .acquire()
        .unwrap()
        .execute(
            "INSERT INTO contact_messages (name, email, phone, subject, body, created_at) \
             VALUES ('a', 'a@example.com', '', 's', 'b', 0)",
            [],
        )
        .unwrap();

    let count: i64 = provider_b
        .acquire()
        .unwrap()
        .query_row("SELECT COUNT(*) FROM contact_messages", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            )",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "expected table `{table_name}` to exist");
}
