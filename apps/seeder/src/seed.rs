use rand::Rng;
use sqlx::PgConnection;
use tracing::info;

use crate::error::SeedError;
use crate::generator::DataGenerator;
use crate::store;

/// How much data one run produces.
#[derive(Debug, Clone, Copy)]
pub struct SeedPlan {
    pub users: usize,
    pub follow_attempts: usize,
    /// Only the first this-many inserted projects get timeline events.
    pub timeline_projects: usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: 50,
            follow_attempts: 100,
            timeline_projects: 20,
        }
    }
}

/// Rows created per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub profiles: u64,
    pub projects: usize,
    pub notes: u64,
    pub citations: u64,
    pub timeline_events: u64,
    pub follows: u64,
}

impl SeedSummary {
    pub fn log(&self) {
        info!("Sample data generation completed");
        info!("  {} users created", self.users);
        info!("  {} user profiles created", self.profiles);
        info!("  {} research projects created", self.projects);
        info!("  {} research notes created", self.notes);
        info!("  {} citations created", self.citations);
        info!("  {} timeline events created", self.timeline_events);
        info!("  {} follows created", self.follows);
    }
}

/// Generates and inserts every table in dependency order. Later batches only
/// reference ids returned by earlier ones.
pub async fn run<R: Rng>(
    conn: &mut PgConnection,
    generator: &mut DataGenerator<R>,
    plan: SeedPlan,
) -> Result<SeedSummary, SeedError> {
    let mut summary = SeedSummary::default();

    info!("Generating users...");
    let users = generator.generate_users(plan.users);
    let user_ids = store::insert_users(conn, &users).await?;
    summary.users = user_ids.len();
    info!("Created {} users", summary.users);

    info!("Generating user profiles...");
    let profiles = generator.generate_profiles(&user_ids);
    summary.profiles = store::insert_profiles(conn, &profiles).await?;
    info!("Created {} user profiles", summary.profiles);

    info!("Generating research projects...");
    let projects = generator.generate_projects(&user_ids);
    let inserted = store::insert_projects(conn, &projects).await?;
    summary.projects = inserted.len();
    info!("Created {} research projects", summary.projects);

    info!("Generating research notes...");
    let project_ids: Vec<i32> = inserted.iter().map(|p| p.id).collect();
    let notes = generator.generate_notes(&user_ids, &project_ids);
    summary.notes = store::insert_notes(conn, &notes).await?;
    info!("Created {} research notes", summary.notes);

    info!("Generating citations...");
    let citations = generator.generate_citations(&user_ids);
    summary.citations = store::insert_citations(conn, &citations).await?;
    info!("Created {} citations", summary.citations);

    info!("Generating timeline events...");
    let scheduled = &inserted[..inserted.len().min(plan.timeline_projects)];
    let events = generator.generate_timeline_events(scheduled);
    summary.timeline_events = store::insert_timeline_events(conn, &events).await?;
    info!("Created {} timeline events", summary.timeline_events);

    info!("Generating follows...");
    let follows = generator.generate_follows(&user_ids, plan.follow_attempts);
    summary.follows = store::insert_follows(conn, &follows).await?;
    info!("Created {} follows", summary.follows);

    Ok(summary)
}
