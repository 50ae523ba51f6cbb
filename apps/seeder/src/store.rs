//! Batch inserts. Each function writes one table inside its own transaction
//! on the caller's connection. A failed statement returns early and drops the
//! transaction uncommitted, which rolls the batch back.

use sqlx::{Connection, PgConnection};
use tracing::debug;

use crate::error::SeedError;
use crate::models::{
    InsertedProject, NewCitation, NewFollow, NewNote, NewProfile, NewProject, NewTimelineEvent,
    NewUser,
};

/// Password given to every generated `email`-provider account.
pub const SAMPLE_PASSWORD: &str = "password123";

/// Inserts users, skipping any whose email already exists.
/// Returns the ids of the rows actually created.
pub async fn insert_users(
    conn: &mut PgConnection,
    users: &[NewUser],
) -> Result<Vec<i32>, SeedError> {
    let at = || SeedError::at("users");
    let mut tx = conn.begin().await.map_err(at())?;
    let mut ids = Vec::with_capacity(users.len());

    for user in users {
        let password_hash =
            (user.provider == "email").then(|| password_auth::generate_hash(SAMPLE_PASSWORD));

        let id: Option<i32> = sqlx::query_scalar(
            "INSERT INTO users (name, email, password_hash, provider, email_verified, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (email) DO NOTHING
             RETURNING id",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.provider)
        .bind(user.email_verified)
        .bind(user.created_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(at())?;

        match id {
            Some(id) => ids.push(id),
            None => debug!("Skipping existing user {}", user.email),
        }
    }

    tx.commit().await.map_err(at())?;
    Ok(ids)
}

pub async fn insert_profiles(
    conn: &mut PgConnection,
    profiles: &[NewProfile],
) -> Result<u64, SeedError> {
    let at = || SeedError::at("user_profiles");
    let mut tx = conn.begin().await.map_err(at())?;

    for profile in profiles {
        sqlx::query(
            "INSERT INTO user_profiles (
                user_id, title, institution, department, bio, research_interests,
                methodologies, specializations, location, collaboration_open,
                profile_completed, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(profile.user_id)
        .bind(&profile.title)
        .bind(&profile.institution)
        .bind(&profile.department)
        .bind(&profile.bio)
        .bind(&profile.research_interests)
        .bind(&profile.methodologies)
        .bind(&profile.specializations)
        .bind(&profile.location)
        .bind(profile.collaboration_open)
        .bind(profile.profile_completed)
        .bind(profile.created_at)
        .execute(&mut *tx)
        .await
        .map_err(at())?;
    }

    tx.commit().await.map_err(at())?;
    Ok(profiles.len() as u64)
}

/// Inserts projects and pairs each new id with its owner.
pub async fn insert_projects(
    conn: &mut PgConnection,
    projects: &[NewProject],
) -> Result<Vec<InsertedProject>, SeedError> {
    let at = || SeedError::at("research_projects");
    let mut tx = conn.begin().await.map_err(at())?;
    let mut inserted = Vec::with_capacity(projects.len());

    for project in projects {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO research_projects (
                user_id, title, description, status, progress, start_date,
                end_date, tags, is_private, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(project.user_id)
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.status)
        .bind(project.progress)
        .bind(project.start_date)
        .bind(project.end_date)
        .bind(&project.tags)
        .bind(project.is_private)
        .bind(project.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(at())?;

        inserted.push(InsertedProject {
            id,
            user_id: project.user_id,
        });
    }

    tx.commit().await.map_err(at())?;
    Ok(inserted)
}

pub async fn insert_notes(conn: &mut PgConnection, notes: &[NewNote]) -> Result<u64, SeedError> {
    let at = || SeedError::at("research_notes");
    let mut tx = conn.begin().await.map_err(at())?;

    for note in notes {
        sqlx::query(
            "INSERT INTO research_notes (
                user_id, title, content, type, tags, project_id, is_favorite,
                is_private, word_count, reading_time, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(note.user_id)
        .bind(&note.title)
        .bind(&note.content)
        .bind(&note.note_type)
        .bind(&note.tags)
        .bind(note.project_id)
        .bind(note.is_favorite)
        .bind(note.is_private)
        .bind(note.word_count)
        .bind(note.reading_time)
        .bind(note.created_at)
        .execute(&mut *tx)
        .await
        .map_err(at())?;
    }

    tx.commit().await.map_err(at())?;
    Ok(notes.len() as u64)
}

pub async fn insert_citations(
    conn: &mut PgConnection,
    citations: &[NewCitation],
) -> Result<u64, SeedError> {
    let at = || SeedError::at("citations");
    let mut tx = conn.begin().await.map_err(at())?;

    for citation in citations {
        sqlx::query(
            "INSERT INTO citations (
                user_id, type, title, authors, journal, year, doi, pages,
                volume, issue, tags, is_favorite, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(citation.user_id)
        .bind(&citation.citation_type)
        .bind(&citation.title)
        .bind(&citation.authors)
        .bind(&citation.journal)
        .bind(citation.year)
        .bind(&citation.doi)
        .bind(&citation.pages)
        .bind(&citation.volume)
        .bind(&citation.issue)
        .bind(&citation.tags)
        .bind(citation.is_favorite)
        .bind(citation.created_at)
        .execute(&mut *tx)
        .await
        .map_err(at())?;
    }

    tx.commit().await.map_err(at())?;
    Ok(citations.len() as u64)
}

pub async fn insert_timeline_events(
    conn: &mut PgConnection,
    events: &[NewTimelineEvent],
) -> Result<u64, SeedError> {
    let at = || SeedError::at("timeline_events");
    let mut tx = conn.begin().await.map_err(at())?;

    for event in events {
        sqlx::query(
            "INSERT INTO timeline_events (
                user_id, project_id, title, description, type, event_date,
                priority, created_at
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(event.user_id)
        .bind(event.project_id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.event_type)
        .bind(event.event_date)
        .bind(&event.priority)
        .bind(event.created_at)
        .execute(&mut *tx)
        .await
        .map_err(at())?;
    }

    tx.commit().await.map_err(at())?;
    Ok(events.len() as u64)
}

/// Inserts follow edges, ignoring pairs that already exist.
/// Returns the number of edges actually created.
pub async fn insert_follows(
    conn: &mut PgConnection,
    follows: &[NewFollow],
) -> Result<u64, SeedError> {
    let at = || SeedError::at("user_follows");
    let mut tx = conn.begin().await.map_err(at())?;
    let mut created = 0;

    for follow in follows {
        let result = sqlx::query(
            "INSERT INTO user_follows (follower_id, following_id, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (follower_id, following_id) DO NOTHING",
        )
        .bind(follow.follower_id)
        .bind(follow.following_id)
        .bind(follow.created_at)
        .execute(&mut *tx)
        .await
        .map_err(at())?;
        created += result.rows_affected();
    }

    tx.commit().await.map_err(at())?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // Temporary tables live in pg_temp, which shadows same-named tables for
    // this connection only.
    async fn connect_with_temp_tables() -> PgConnection {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let mut conn = PgConnection::connect(&url).await.unwrap();
        for ddl in [
            "CREATE TEMP TABLE users (
                id SERIAL PRIMARY KEY, name TEXT, email TEXT UNIQUE, password_hash TEXT,
                provider TEXT, email_verified BOOLEAN, created_at TIMESTAMPTZ)",
            "CREATE TEMP TABLE user_follows (
                follower_id INT, following_id INT, created_at TIMESTAMPTZ,
                UNIQUE (follower_id, following_id))",
        ] {
            sqlx::query(ddl).execute(&mut conn).await.unwrap();
        }
        conn
    }

    fn user(email: &str, provider: &str) -> NewUser {
        NewUser {
            name: "Dr. Jane Smith".to_string(),
            email: email.to_string(),
            provider: provider.to_string(),
            email_verified: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    #[ignore = "requires a Postgres DATABASE_URL"]
    async fn test_rerun_does_not_duplicate_users_or_follows() {
        let mut conn = connect_with_temp_tables().await;
        let users = [
            user("jane.smith0@university.edu", "email"),
            user("john.brown1@institute.org", "google"),
        ];

        let first = insert_users(&mut conn, &users).await.unwrap();
        assert_eq!(first.len(), 2);
        let second = insert_users(&mut conn, &users).await.unwrap();
        assert!(second.is_empty());

        let follow = NewFollow {
            follower_id: first[0],
            following_id: first[1],
            created_at: Utc::now(),
        };
        assert_eq!(insert_follows(&mut conn, &[follow, follow]).await.unwrap(), 1);
        assert_eq!(insert_follows(&mut conn, &[follow]).await.unwrap(), 0);

        let hashed: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE provider = 'email'")
                .fetch_one(&mut conn)
                .await
                .unwrap();
        assert!(password_auth::verify_password(SAMPLE_PASSWORD, &hashed.unwrap()).is_ok());

        let google_hash: Option<String> =
            sqlx::query_scalar("SELECT password_hash FROM users WHERE provider = 'google'")
                .fetch_one(&mut conn)
                .await
                .unwrap();
        assert!(google_hash.is_none());
    }
}
