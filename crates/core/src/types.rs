/// Database primary keys for serial-keyed tables are PostgreSQL BIGSERIAL.
///
/// Users and submissions use generated string keys instead (see
/// [`crate::ids`]).
pub type DbId = i64;

/// All row timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (conference ranges, submission days) carry no timezone.
pub type Day = chrono::NaiveDate;
