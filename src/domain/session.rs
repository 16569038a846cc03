use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkSession {
    pub task_id: i64,
    pub task_name: Option<String>,
    pub time_worked: Option<i64>,
    pub time_saved: NaiveDateTime,
}

/// A session as submitted by a client, before the store assigns its id and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewWorkSession {
    pub task_name: Option<String>,
    pub time_worked: Option<i64>,
}

// both fields are written as given, None included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkSessionUpdate {
    pub task_name: Option<String>,
    pub time_worked: Option<i64>,
}
