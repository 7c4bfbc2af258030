use chrono::NaiveDate;

/// Date encoding used at rest (ISO 8601 calendar date).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single idea record as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    /// Rowid, assigned once at creation and never reused.
    pub id: i64,
    pub title: String,
    /// Manual sort position. Unique at rest; contiguous 0..N-1 right
    /// after a committed reorder, gaps tolerated after deletions.
    pub position: i64,
    /// Immutable after creation.
    pub created_date: NaiveDate,
    pub notes: String,
    /// Display-only flag; never affects ordering or position.
    pub archived: bool,
}

/// The two orderings the list can be scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Manual order (the `position` column). Reordering is only
    /// permitted in this mode.
    Position,
    /// Creation date order. Non-destructive: switching back to
    /// `Position` reproduces the manual order unchanged.
    CreatedDate,
}

impl SortMode {
    /// ORDER BY clause for a full scan in this mode.
    pub fn order_clause(self) -> &'static str {
        match self {
            SortMode::Position => "position",
            SortMode::CreatedDate => "created_date",
        }
    }
}
