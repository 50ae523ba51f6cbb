//! In-memory rows produced by the generator. Each lives only for one seed run.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    /// `email` or `google`. Only `email` users get a password hash at insert time.
    pub provider: String,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProfile {
    pub user_id: i32,
    pub title: String,
    pub institution: String,
    pub department: String,
    pub bio: String,
    pub research_interests: Vec<String>,
    pub methodologies: Vec<String>,
    pub specializations: Vec<String>,
    pub location: String,
    pub collaboration_open: bool,
    pub profile_completed: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
    pub user_id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub progress: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
}

/// A project row after insert, with the owner kept alongside its generated id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedProject {
    pub id: i32,
    pub user_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewNote {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub note_type: String,
    pub tags: Vec<String>,
    pub project_id: Option<i32>,
    pub is_favorite: bool,
    pub is_private: bool,
    pub word_count: i32,
    pub reading_time: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCitation {
    pub user_id: i32,
    pub citation_type: String,
    pub title: String,
    pub authors: Vec<String>,
    pub journal: Option<String>,
    pub year: i32,
    pub doi: String,
    pub pages: Option<String>,
    pub volume: Option<String>,
    pub issue: Option<String>,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTimelineEvent {
    pub user_id: i32,
    pub project_id: i32,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub event_date: DateTime<Utc>,
    pub priority: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFollow {
    pub follower_id: i32,
    pub following_id: i32,
    pub created_at: DateTime<Utc>,
}
