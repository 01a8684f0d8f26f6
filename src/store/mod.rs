//! In-memory fixture store.
//!
//! Every collection and singleton sits behind its own `RwLock`, so a
//! read-modify-write on one of them runs under a single write guard and never
//! interleaves with another writer of the same collection. Readers can observe
//! state that is one in-flight write behind.

pub mod fixtures;
pub mod models;
pub mod repository;

use anyhow::Result;
use rand::Rng;
use tokio::sync::RwLock;

pub use models::*;
pub use repository::*;

pub struct Store {
    pub(crate) debate: RwLock<GlobalDebate>,
    pub(crate) debate_topics: RwLock<Vec<DebateTopic>>,
    pub(crate) streams: RwLock<Vec<Stream>>,
    pub(crate) users: RwLock<Vec<User>>,
    pub(crate) statistics: RwLock<Statistics>,
    pub(crate) live_schedule: RwLock<LiveSchedule>,
    pub(crate) ai_status: RwLock<AiStatus>,
}

impl Store {
    /// Build a store populated with the startup fixtures.
    pub fn seeded() -> Result<Self> {
        Ok(Self {
            debate: RwLock::new(fixtures::global_debate()?),
            debate_topics: RwLock::new(fixtures::debate_topics()?),
            streams: RwLock::new(fixtures::streams()?),
            users: RwLock::new(fixtures::users()?),
            statistics: RwLock::new(fixtures::statistics()?),
            live_schedule: RwLock::new(fixtures::live_schedule()?),
            ai_status: RwLock::new(fixtures::ai_status()?),
        })
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate `{prefix}-{unix_millis}-{9 base36 chars}`.
pub fn generate_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!(
        "{}-{}-{}",
        prefix,
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_prefix_and_base36_suffix() {
        let id = generate_id("stream");
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "stream");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(generate_id("debate"), generate_id("debate"));
    }
}
