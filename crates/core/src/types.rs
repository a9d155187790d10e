/// All database primary keys are SQLite INTEGER (rowid) keys.
pub type DbId = i64;

/// All timestamps are UTC wall-clock values, as written by SQLite's
/// `CURRENT_TIMESTAMP` (no offset is stored).
pub type Timestamp = chrono::NaiveDateTime;
