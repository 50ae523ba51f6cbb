//! Random sample rows for the research hub schema.
//!
//! Every generator method draws from the RNG it was built with, so tests pass
//! a seeded `StdRng` and the binary passes an entropy-seeded one. Foreign keys
//! are only ever taken from the ids handed in, which are the ids the database
//! actually returned for earlier batches.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    InsertedProject, NewCitation, NewFollow, NewNote, NewProfile, NewProject, NewTimelineEvent,
    NewUser,
};
use crate::vocab::*;

pub struct DataGenerator<R: Rng> {
    rng: R,
    now: DateTime<Utc>,
}

impl<R: Rng> DataGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            now: Utc::now(),
        }
    }

    // ── Helpers ──────────────────────────────────────────────

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    fn days_ago(&mut self, min: i64, max: i64) -> DateTime<Utc> {
        self.now - Duration::days(self.rng.gen_range(min..=max))
    }

    /// `count` distinct entries of `items`, with `count` drawn from `min..=max`.
    fn sample(&mut self, items: &[String], min: usize, max: usize) -> Vec<String> {
        let count = self.rng.gen_range(min..=max);
        items
            .choose_multiple(&mut self.rng, count)
            .cloned()
            .collect()
    }

    fn sample_words(&mut self, items: &[&str], min: usize, max: usize) -> Vec<String> {
        let owned: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        self.sample(&owned, min, max)
    }

    // ── Rows ─────────────────────────────────────────────────

    pub fn generate_users(&mut self, count: usize) -> Vec<NewUser> {
        (0..count)
            .map(|i| {
                let first = self.pick(FIRST_NAMES);
                let last = self.pick(LAST_NAMES);
                let domain = self.pick(EMAIL_DOMAINS);
                NewUser {
                    name: format!("Dr. {first} {last}"),
                    email: format!(
                        "{}.{}{i}@{domain}",
                        first.to_lowercase(),
                        last.to_lowercase()
                    ),
                    provider: self.pick(AUTH_PROVIDERS).to_string(),
                    email_verified: self.coin(),
                    created_at: self.days_ago(1, 365),
                }
            })
            .collect()
    }

    pub fn generate_profiles(&mut self, user_ids: &[i32]) -> Vec<NewProfile> {
        user_ids
            .iter()
            .map(|&user_id| {
                let years: u32 = self.rng.gen_range(3..=20);
                let bio_field = self.pick(RESEARCH_FIELDS).to_lowercase();
                NewProfile {
                    user_id,
                    title: self.pick(ACADEMIC_TITLES).to_string(),
                    institution: self.pick(INSTITUTIONS).to_string(),
                    department: format!("Department of {}", self.pick(RESEARCH_FIELDS)),
                    bio: format!(
                        "Passionate researcher with {years} years of experience in {bio_field}. \
                         Focused on advancing knowledge through innovative research and collaboration."
                    ),
                    research_interests: self.sample_words(RESEARCH_INTERESTS, 3, 6),
                    methodologies: self.sample_words(METHODOLOGIES, 2, 5),
                    specializations: self.sample_words(RESEARCH_INTERESTS, 2, 4),
                    location: self.pick(LOCATIONS).to_string(),
                    collaboration_open: self.coin(),
                    profile_completed: true,
                    created_at: self.days_ago(1, 300),
                }
            })
            .collect()
    }

    /// One to five projects per user.
    pub fn generate_projects(&mut self, user_ids: &[i32]) -> Vec<NewProject> {
        let mut projects = Vec::new();
        for &user_id in user_ids {
            for _ in 0..self.rng.gen_range(1..=5) {
                projects.push(self.project_for(user_id));
            }
        }
        projects
    }

    fn project_for(&mut self, user_id: i32) -> NewProject {
        let field = self.pick(RESEARCH_FIELDS);
        let topic = self.pick(RESEARCH_INTERESTS);
        let template = self.pick(PROJECT_TITLES);
        let values = [
            ("field", field.to_string()),
            ("topic", topic.to_string()),
            ("method", self.pick(METHODOLOGIES).to_string()),
            ("application", self.pick(RESEARCH_INTERESTS).to_string()),
            ("phenomenon", topic.to_string()),
            ("domain", field.to_string()),
            ("problem", format!("{topic} challenges")),
            ("technology", topic.to_string()),
            ("concept", topic.to_string()),
            ("process", format!("{topic} optimization")),
            ("technique", self.pick(METHODOLOGIES).to_string()),
            ("outcome", format!("{topic} prediction")),
        ];

        let status = self.pick(PROJECT_STATUSES);
        let progress = if status == "planning" {
            self.rng.gen_range(0..=20)
        } else {
            self.rng.gen_range(0..=100)
        };
        let start_date = self.days_ago(30, 365);
        let end_date = start_date + Duration::days(self.rng.gen_range(180..=730));

        let mut tag_pool = vec![field.to_lowercase(), topic.to_lowercase()];
        tag_pool.extend(METHODOLOGIES.iter().map(|m| slug(m)));
        let method = self.pick(METHODOLOGIES).to_lowercase();

        NewProject {
            user_id,
            title: fill(template, &values),
            description: format!(
                "This project aims to investigate {} using advanced {method} techniques. \
                 The research will contribute to our understanding of {} and provide \
                 practical applications for the scientific community.",
                topic.to_lowercase(),
                field.to_lowercase()
            ),
            status: status.to_string(),
            progress,
            start_date,
            end_date,
            tags: self.sample(&tag_pool, 3, 6),
            is_private: self.coin(),
            created_at: start_date,
        }
    }

    /// Five to twenty notes per user. A note links to any inserted project,
    /// or to none.
    pub fn generate_notes(&mut self, user_ids: &[i32], project_ids: &[i32]) -> Vec<NewNote> {
        let tag_pool: Vec<String> = RESEARCH_INTERESTS.iter().map(|t| slug(t)).collect();
        let date = self.now.format("%Y-%m-%d").to_string();

        let mut notes = Vec::new();
        for &user_id in user_ids {
            for _ in 0..self.rng.gen_range(5..=20) {
                let project_id = match self.rng.gen_range(0..=project_ids.len()) {
                    i if i < project_ids.len() => Some(project_ids[i]),
                    _ => None,
                };
                notes.push(NewNote {
                    user_id,
                    title: fill(self.pick(NOTE_TITLES), &[("date", date.clone())]),
                    content: self.pick(NOTE_CONTENTS).to_string(),
                    note_type: self.pick(NOTE_TYPES).to_string(),
                    tags: self.sample(&tag_pool, 2, 5),
                    project_id,
                    is_favorite: self.coin(),
                    is_private: self.coin(),
                    word_count: self.rng.gen_range(50..=500),
                    reading_time: self.rng.gen_range(1..=10),
                    created_at: self.days_ago(1, 180),
                });
            }
        }
        notes
    }

    /// Ten to fifty citations per user.
    pub fn generate_citations(&mut self, user_ids: &[i32]) -> Vec<NewCitation> {
        let tag_pool: Vec<String> = RESEARCH_INTERESTS.iter().map(|t| slug(t)).collect();

        let mut citations = Vec::new();
        for &user_id in user_ids {
            for _ in 0..self.rng.gen_range(10..=50) {
                let citation = self.citation_for(user_id, &tag_pool);
                citations.push(citation);
            }
        }
        citations
    }

    fn citation_for(&mut self, user_id: i32, tag_pool: &[String]) -> NewCitation {
        let citation_type = self.pick(CITATION_TYPES);
        let is_article = citation_type == "article";
        let year = self.rng.gen_range(2015..=2024);
        let authors = self.sample_words(AUTHOR_NAMES, 1, 4);

        let template = self.pick(CITATION_TITLES);
        let values = [
            ("method", self.pick(METHODOLOGIES).to_string()),
            ("field", self.pick(RESEARCH_FIELDS).to_string()),
            ("problem", format!("{} challenges", self.pick(RESEARCH_INTERESTS))),
            ("technique", self.pick(METHODOLOGIES).to_string()),
            ("factor", self.pick(RESEARCH_INTERESTS).to_string()),
            ("outcome", format!("{} outcomes", self.pick(RESEARCH_INTERESTS))),
            ("domain", self.pick(RESEARCH_FIELDS).to_string()),
            ("phenomenon", self.pick(RESEARCH_INTERESTS).to_string()),
            ("application", format!("{} applications", self.pick(RESEARCH_FIELDS))),
            ("solution", format!("{} solutions", self.pick(RESEARCH_INTERESTS))),
            ("challenge", format!("{} challenges", self.pick(RESEARCH_FIELDS))),
            ("area", self.pick(RESEARCH_FIELDS).to_string()),
            ("process", format!("{} processes", self.pick(RESEARCH_INTERESTS))),
            ("approach", self.pick(METHODOLOGIES).to_string()),
            ("target", self.pick(RESEARCH_INTERESTS).to_string()),
        ];

        let registrant: u32 = self.rng.gen_range(1000..=9999);
        let publisher = self.pick(DOI_PUBLISHERS);
        let suffix: u32 = self.rng.gen_range(100000..=999999);

        let (journal, pages, volume, issue) = if is_article {
            let first_page: u32 = self.rng.gen_range(1..=50);
            let last_page: u32 = self.rng.gen_range(51..=100);
            (
                Some(self.pick(JOURNALS).to_string()),
                Some(format!("{first_page}-{last_page}")),
                Some(self.rng.gen_range(1..=100u32).to_string()),
                Some(self.rng.gen_range(1..=12u32).to_string()),
            )
        } else {
            (None, None, None, None)
        };

        NewCitation {
            user_id,
            citation_type: citation_type.to_string(),
            title: fill(template, &values),
            authors,
            journal,
            year,
            doi: format!("10.{registrant}/{publisher}.{year}.{suffix}"),
            pages,
            volume,
            issue,
            tags: self.sample(tag_pool, 2, 4),
            is_favorite: self.coin(),
            created_at: self.days_ago(1, 365),
        }
    }

    /// One to three upcoming events per project, owned by the project's owner.
    pub fn generate_timeline_events(
        &mut self,
        projects: &[InsertedProject],
    ) -> Vec<NewTimelineEvent> {
        let mut events = Vec::new();
        for project in projects {
            for _ in 0..self.rng.gen_range(1..=3) {
                let headline = capitalize(self.pick(EVENT_TYPES));
                let described = self.pick(EVENT_TYPES);
                events.push(NewTimelineEvent {
                    user_id: project.user_id,
                    project_id: project.id,
                    title: format!("Project {headline}"),
                    description: format!("Important {described} for the research project."),
                    event_type: self.pick(EVENT_TYPES).to_string(),
                    event_date: self.now + Duration::days(self.rng.gen_range(1..=90)),
                    priority: self.pick(PRIORITIES).to_string(),
                    created_at: self.now,
                });
            }
        }
        events
    }

    /// `attempts` random follower/following pairs; self-follows are dropped,
    /// so fewer rows than attempts may come back. Duplicates are left for the
    /// database to ignore.
    pub fn generate_follows(&mut self, user_ids: &[i32], attempts: usize) -> Vec<NewFollow> {
        if user_ids.is_empty() {
            return Vec::new();
        }
        let mut follows = Vec::new();
        for _ in 0..attempts {
            let follower_id = user_ids[self.rng.gen_range(0..user_ids.len())];
            let following_id = user_ids[self.rng.gen_range(0..user_ids.len())];
            if follower_id != following_id {
                follows.push(NewFollow {
                    follower_id,
                    following_id,
                    created_at: self.now,
                });
            }
        }
        follows
    }
}

/// Substitutes each `{key}` in `template` with its value.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

/// "Machine Learning" -> "machine-learning"
fn slug(s: &str) -> String {
    s.to_lowercase().replace(' ', "-")
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn generator(seed: u64) -> DataGenerator<StdRng> {
        DataGenerator::new(StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_users_have_unique_indexed_emails() {
        let mut data = generator(1);
        let users = data.generate_users(50);
        assert_eq!(users.len(), 50);

        let emails: HashSet<&str> = users.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails.len(), 50);

        for (i, user) in users.iter().enumerate() {
            assert!(user.name.starts_with("Dr. "));
            let (local, domain) = user.email.split_once('@').unwrap();
            assert!(local.ends_with(&i.to_string()));
            assert!(EMAIL_DOMAINS.contains(&domain));
            assert!(AUTH_PROVIDERS.contains(&user.provider.as_str()));
            assert!(user.created_at < data.now);
            assert!(user.created_at >= data.now - Duration::days(365));
        }
    }

    #[test]
    fn test_profiles_one_per_user() {
        let mut data = generator(2);
        let profiles = data.generate_profiles(&[4, 8, 15]);
        let ids: Vec<i32> = profiles.iter().map(|p| p.user_id).collect();
        assert_eq!(ids, vec![4, 8, 15]);

        for profile in &profiles {
            assert!((3..=6).contains(&profile.research_interests.len()));
            assert!((2..=5).contains(&profile.methodologies.len()));
            assert!((2..=4).contains(&profile.specializations.len()));
            let distinct: HashSet<&String> = profile.research_interests.iter().collect();
            assert_eq!(distinct.len(), profile.research_interests.len());
            assert!(profile.department.starts_with("Department of "));
            assert!(profile.profile_completed);
        }
    }

    #[test]
    fn test_projects_reference_given_users_only() {
        let mut data = generator(3);
        let user_ids = [10, 20, 30, 40];
        let projects = data.generate_projects(&user_ids);

        for &user_id in &user_ids {
            let owned = projects.iter().filter(|p| p.user_id == user_id).count();
            assert!((1..=5).contains(&owned), "user {user_id} owns {owned}");
        }
        for project in &projects {
            assert!(user_ids.contains(&project.user_id));
            assert!(!project.title.contains('{'), "unfilled title: {}", project.title);
            assert!(project.end_date > project.start_date);
            assert!((3..=6).contains(&project.tags.len()));
            if project.status == "planning" {
                assert!(project.progress <= 20);
            }
            assert!((0..=100).contains(&project.progress));
        }
    }

    #[test]
    fn test_notes_link_to_inserted_projects_or_none() {
        let mut data = generator(4);
        let project_ids = [101, 102, 103];
        let notes = data.generate_notes(&[1, 2], &project_ids);

        assert!((10..=40).contains(&notes.len()));
        for note in &notes {
            if let Some(id) = note.project_id {
                assert!(project_ids.contains(&id));
            }
            assert!(NOTE_CONTENTS.contains(&note.content.as_str()));
            assert!(!note.title.contains("{date}"));
            assert!((50..=500).contains(&note.word_count));
            assert!((1..=10).contains(&note.reading_time));
        }
    }

    #[test]
    fn test_notes_without_projects_are_unlinked() {
        let mut data = generator(5);
        let notes = data.generate_notes(&[1], &[]);
        assert!(notes.iter().all(|n| n.project_id.is_none()));
    }

    #[test]
    fn test_citation_shape() {
        let mut data = generator(6);
        let citations = data.generate_citations(&[7]);
        assert!((10..=50).contains(&citations.len()));

        for c in &citations {
            assert_eq!(c.user_id, 7);
            assert!((2015..=2024).contains(&c.year));
            assert!((1..=4).contains(&c.authors.len()));
            assert!(!c.title.contains('{'), "unfilled title: {}", c.title);

            // 10.<4 digits>/<publisher>.<year>.<6 digits>
            let rest = c.doi.strip_prefix("10.").unwrap();
            let (registrant, suffix) = rest.split_once('/').unwrap();
            assert_eq!(registrant.len(), 4);
            let parts: Vec<&str> = suffix.split('.').collect();
            assert_eq!(parts.len(), 3);
            assert!(DOI_PUBLISHERS.contains(&parts[0]));
            assert_eq!(parts[1], c.year.to_string());
            assert_eq!(parts[2].len(), 6);

            let is_article = c.citation_type == "article";
            assert_eq!(c.journal.is_some(), is_article);
            assert_eq!(c.pages.is_some(), is_article);
            assert_eq!(c.volume.is_some(), is_article);
            assert_eq!(c.issue.is_some(), is_article);
        }
    }

    #[test]
    fn test_timeline_events_owned_by_project_owner() {
        let mut data = generator(7);
        let projects = [
            InsertedProject { id: 1, user_id: 50 },
            InsertedProject { id: 2, user_id: 60 },
        ];
        let events = data.generate_timeline_events(&projects);

        for project in &projects {
            let count = events.iter().filter(|e| e.project_id == project.id).count();
            assert!((1..=3).contains(&count));
        }
        for event in &events {
            let owner = projects.iter().find(|p| p.id == event.project_id).unwrap();
            assert_eq!(event.user_id, owner.user_id);
            assert!(event.event_date > data.now);
            assert!(event.title.starts_with("Project "));
            assert!(event.title.chars().nth(8).unwrap().is_uppercase());
        }
    }

    #[test]
    fn test_follows_skip_self_and_stay_within_attempts() {
        let mut data = generator(8);
        let user_ids = [1, 2, 3];
        let follows = data.generate_follows(&user_ids, 100);

        assert!(follows.len() <= 100);
        assert!(!follows.is_empty());
        for follow in &follows {
            assert_ne!(follow.follower_id, follow.following_id);
            assert!(user_ids.contains(&follow.follower_id));
            assert!(user_ids.contains(&follow.following_id));
        }
    }

    #[test]
    fn test_follows_need_two_users() {
        let mut data = generator(9);
        assert!(data.generate_follows(&[], 100).is_empty());
        assert!(data.generate_follows(&[42], 100).is_empty());
    }

    #[test]
    fn test_same_seed_same_rows() {
        let a = generator(11).generate_users(5);
        let b = generator(11).generate_users(5);
        let emails_a: Vec<&str> = a.iter().map(|u| u.email.as_str()).collect();
        let emails_b: Vec<&str> = b.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails_a, emails_b);
    }

    #[test]
    fn test_fill_and_slug() {
        assert_eq!(
            fill("Investigating {topic} in {field}", &[
                ("topic", "Genomics".into()),
                ("field", "Biology".into())
            ]),
            "Investigating Genomics in Biology"
        );
        assert_eq!(slug("Computational Biology"), "computational-biology");
        assert_eq!(capitalize("deadline"), "Deadline");
    }
}
