/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Money amounts are whole currency units.
///
/// Every price in the catalog is an integer delta and every fee is an
/// integer constant, so integer arithmetic keeps totals exact. Nothing in
/// the money path may go through a float.
pub type Money = i64;
