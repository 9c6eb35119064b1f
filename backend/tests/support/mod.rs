//! Embedded PostgreSQL helpers shared by the database integration suites.
//!
//! Suites that need a real store are `#[ignore]`d and additionally opt in
//! through `RUN_PG_EMBEDDED=1`, because the first run downloads PostgreSQL
//! binaries.

use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

const BOOT_ATTEMPTS: u32 = 3;
const BOOT_RETRY_DELAY: Duration = Duration::from_millis(500);

/// True when the caller opted into embedded PostgreSQL suites.
pub fn pg_embedded_enabled() -> bool {
    if std::env::var("RUN_PG_EMBEDDED").as_deref() == Ok("1") {
        return true;
    }
    eprintln!("SKIP-TEST-CLUSTER: set RUN_PG_EMBEDDED=1 to run");
    false
}

/// Render a `postgres` error with the SQLSTATE and server message, which
/// the `Display` impl collapses to `db error`.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    match error.as_db_error() {
        Some(db_error) => format!(
            "postgres error {:?}: {}",
            db_error.code(),
            db_error.message()
        ),
        None => error.to_string(),
    }
}

/// Start an embedded cluster, retrying transient download failures.
pub fn start_cluster() -> Result<TestCluster, String> {
    let mut last_error = String::new();
    for attempt in 1..=BOOT_ATTEMPTS {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt < BOOT_ATTEMPTS {
                    eprintln!("pg-embed: attempt {attempt}/{BOOT_ATTEMPTS} failed: {last_error}");
                    std::thread::sleep(BOOT_RETRY_DELAY * attempt);
                }
            }
        }
    }
    Err(last_error)
}

/// Create an empty, uniquely named database and return its URL.
pub fn fresh_database(cluster: &TestCluster) -> Result<String, String> {
    let connection = cluster.connection();
    let name = format!("users_{}", Uuid::new_v4().simple());
    let mut admin = Client::connect(&connection.database_url("postgres"), NoTls)
        .map_err(|err| format_postgres_error(&err))?;
    admin
        .batch_execute(&format!("CREATE DATABASE \"{name}\""))
        .map_err(|err| format_postgres_error(&err))?;
    Ok(connection.database_url(&name))
}

/// Run raw SQL against `url`, for arranging state the service cannot create.
pub fn execute(url: &str, sql: &str) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(sql)
        .map_err(|err| format_postgres_error(&err))
}

/// Whether the `users` table exists in `url`.
pub fn users_table_exists(url: &str) -> Result<bool, String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    let row = client
        .query_one("SELECT to_regclass('public.users') IS NOT NULL", &[])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(row.get(0))
}
