use diesel::r2d2::ConnectionManager;
use diesel::SqliteConnection;
use diesel_migrations::RunMigrationsError;

pub mod actions;
pub mod model;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

embed_migrations!("../migrations");

/// Ensure both tables exist. Applied migrations are tracked, so this is
/// additive and safe to run on every startup.
pub fn run_migrations(conn: &SqliteConnection) -> Result<(), RunMigrationsError> {
    embedded_migrations::run(conn)
}

/// Build the process-wide connection pool and bootstrap the schema.
/// A bad connection string is the one startup-fatal error in the system.
pub fn init_pool(connspec: &str) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(connspec);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool.");

    let conn = pool.get().expect("Failed to check out connection.");
    run_migrations(&conn).expect("Failed to run migrations.");
    pool
}
