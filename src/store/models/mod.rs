//! In-memory entity models, one file per collection.
//! Re-exported at `crate::store::models` so callers can `use crate::store::models::*;`.

pub mod ai_status;
pub mod debate;
pub mod debate_topic;
pub mod live_schedule;
pub mod statistics;
pub mod stream;
pub mod user;

pub use self::ai_status::*;
pub use self::debate::*;
pub use self::debate_topic::*;
pub use self::live_schedule::*;
pub use self::statistics::*;
pub use self::stream::*;
pub use self::user::*;
