pub mod auth;
pub mod debate_topics;
pub mod playback;
pub mod statistics;
pub mod streams;
