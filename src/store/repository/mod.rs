pub mod ai_status;
pub mod debate;
pub mod debate_topic;
pub mod live_schedule;
pub mod statistics;
pub mod stream;
pub mod user;

pub use ai_status::AiStatusRepository;
pub use debate::DebateRepository;
pub use debate_topic::DebateTopicRepository;
pub use live_schedule::LiveScheduleRepository;
pub use statistics::StatisticsRepository;
pub use stream::StreamRepository;
pub use user::UserRepository;
