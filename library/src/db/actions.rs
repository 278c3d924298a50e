use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error;

use crate::db::model::{NewReading, Reading, Settings, SettingsInput};
use crate::RECENT_READINGS_LIMIT;

/// Persist one device sample and return the stored row with its assigned id.
/// Stamps the current UTC time when the device sent no timestamp.
pub fn insert_reading(conn: &SqliteConnection, mut new: NewReading) -> Result<Reading, Error> {
    if new.timestamp.is_none() {
        new.timestamp = Some(Utc::now().naive_utc());
    }
    conn.transaction::<_, Error, _>(|| {
        diesel::insert_into(crate::schema::device_data::table)
            .values(&new)
            .execute(conn)?;
        use crate::schema::device_data::dsl::*;
        device_data.order(id.desc()).first::<Reading>(conn)
    })
}

/// The most recent samples, newest first, capped at `RECENT_READINGS_LIMIT`.
/// Ties on timestamp fall back to insertion order.
pub fn list_recent_readings(conn: &SqliteConnection) -> Result<Vec<Reading>, Error> {
    use crate::schema::device_data::dsl::*;
    device_data
        .order(timestamp.desc())
        .then_order_by(id.desc())
        .limit(RECENT_READINGS_LIMIT)
        .load::<Reading>(conn)
}

/// `None` until the first `upsert_settings` call succeeds.
pub fn get_settings(conn: &SqliteConnection) -> Result<Option<Settings>, Error> {
    use crate::schema::settings::dsl::*;
    settings.first::<Settings>(conn).optional()
}

/// Create the singleton settings row, or overwrite its fields in place.
/// The row id assigned on first creation never changes, and readers never
/// observe a momentarily absent row.
pub fn upsert_settings(conn: &SqliteConnection, input: SettingsInput) -> Result<Settings, Error> {
    conn.transaction::<_, Error, _>(|| {
        use crate::schema::settings::dsl::*;
        match settings.first::<Settings>(conn).optional()? {
            Some(current) => {
                diesel::update(settings.filter(id.eq(current.id)))
                    .set(&input)
                    .execute(conn)?;
            }
            None => {
                diesel::insert_into(settings).values(&input).execute(conn)?;
            }
        }
        settings.first::<Settings>(conn)
    })
}
