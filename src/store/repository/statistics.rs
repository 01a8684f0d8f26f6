use crate::store::models::*;
use crate::store::Store;

pub struct StatisticsRepository;

impl StatisticsRepository {
    pub async fn get(store: &Store) -> Statistics {
        store.statistics.read().await.clone()
    }

    /// Count one vote for `side`. The side counter and the aggregate are bumped
    /// under the same write guard.
    pub async fn record_vote(store: &Store, side: VoteSide) -> Statistics {
        let mut stats = store.statistics.write().await;
        match side {
            VoteSide::Affirmative => stats.votes.affirmative += 1,
            VoteSide::Negative => stats.votes.negative += 1,
        }
        stats.vote_count += 1;
        stats.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn vote_increments_side_and_total_once() {
        let store = Store::seeded().unwrap();
        let before = StatisticsRepository::get(&store).await;

        let after = StatisticsRepository::record_vote(&store, VoteSide::Affirmative).await;

        assert_eq!(after.votes.affirmative, before.votes.affirmative + 1);
        assert_eq!(after.votes.negative, before.votes.negative);
        assert_eq!(after.vote_count, before.vote_count + 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_votes_are_not_lost() {
        let store = Arc::new(Store::seeded().unwrap());
        let before = StatisticsRepository::get(&store).await;

        let mut handles = Vec::new();
        for i in 0..100 {
            let store = store.clone();
            let side = if i % 2 == 0 {
                VoteSide::Affirmative
            } else {
                VoteSide::Negative
            };
            handles.push(tokio::spawn(async move {
                StatisticsRepository::record_vote(&store, side).await;
            }));
        }
        for h in handles {
            h.await.unwrap();
        }

        let after = StatisticsRepository::get(&store).await;
        assert_eq!(after.vote_count, before.vote_count + 100);
        assert_eq!(after.votes.affirmative, before.votes.affirmative + 50);
        assert_eq!(after.votes.negative, before.votes.negative + 50);
    }
}
