//! Seed data loaded into the store at startup.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::store::models::*;

fn at(rfc3339: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(rfc3339)
        .with_context(|| format!("invalid fixture timestamp {}", rfc3339))?
        .with_timezone(&Utc))
}

pub fn global_debate() -> Result<GlobalDebate> {
    Ok(GlobalDebate {
        id: "debate-001".to_string(),
        title: "人工智能会取代人类工作吗？".to_string(),
        description: "随着AI技术的快速发展，越来越多的工作岗位面临被自动化取代的风险。我们需要思考AI对就业市场的影响，以及如何应对这一挑战。".to_string(),
        affirmative_side: "正方：人工智能会取代大部分人类工作".to_string(),
        negative_side: "反方：人工智能不会完全取代人类工作".to_string(),
        start_time: at("2024-01-15T19:00:00Z")?,
        end_time: at("2024-01-15T21:00:00Z")?,
        is_active: true,
        created_at: at("2024-01-01T00:00:00Z")?,
        updated_at: at("2024-01-10T10:00:00Z")?,
    })
}

pub fn debate_topics() -> Result<Vec<DebateTopic>> {
    Ok(vec![DebateTopic {
        id: "debate-stream-001".to_string(),
        stream_id: "stream-001".to_string(),
        title: "如果有一个一键消除痛苦的按钮，你会按吗？".to_string(),
        description: "这是一个关于痛苦、成长与人性选择的深度辩论".to_string(),
        left_position: "会按".to_string(),
        right_position: "不会按".to_string(),
        created_at: at("2024-01-15T10:00:00Z")?,
        updated_at: at("2024-01-15T10:00:00Z")?,
    }])
}

pub fn streams() -> Result<Vec<Stream>> {
    let created_at = at("2024-01-01T00:00:00Z")?;
    let updated_at = at("2024-01-10T10:00:00Z")?;

    Ok(vec![
        Stream {
            id: "stream-001".to_string(),
            name: "主会场直播".to_string(),
            url: "rtmp://localhost/live/main".to_string(),
            stream_type: StreamType::Rtmp,
            description: "辩论赛主会场直播流".to_string(),
            enabled: true,
            created_at,
            updated_at,
        },
        Stream {
            id: "stream-002".to_string(),
            name: "分会场直播".to_string(),
            url: "http://localhost:8086/live/side.m3u8".to_string(),
            stream_type: StreamType::Hls,
            description: "辩论赛分会场直播流".to_string(),
            enabled: true,
            created_at,
            updated_at,
        },
        Stream {
            id: "stream-003".to_string(),
            name: "嘉宾访谈".to_string(),
            url: "http://localhost:8086/live/guest.flv".to_string(),
            stream_type: StreamType::Flv,
            description: "赛后嘉宾访谈直播流".to_string(),
            enabled: false,
            created_at,
            updated_at,
        },
    ])
}

pub fn users() -> Result<Vec<User>> {
    let now = Utc::now();

    Ok(vec![
        User {
            id: "user-001".to_string(),
            openid: "wx1234567890".to_string(),
            nickname: "张三".to_string(),
            avatar: "https://example.com/avatar1.jpg".to_string(),
            role: UserRole::Admin,
            is_online: true,
            last_active_time: now,
            created_at: at("2024-01-01T00:00:00Z")?,
        },
        User {
            id: "user-002".to_string(),
            openid: "wx0987654321".to_string(),
            nickname: "李四".to_string(),
            avatar: "https://example.com/avatar2.jpg".to_string(),
            role: UserRole::User,
            is_online: true,
            last_active_time: now,
            created_at: at("2024-01-02T00:00:00Z")?,
        },
        User {
            id: "user-003".to_string(),
            openid: "wx1357924680".to_string(),
            nickname: "王五".to_string(),
            avatar: "https://example.com/avatar3.jpg".to_string(),
            role: UserRole::Judge,
            is_online: false,
            last_active_time: at("2024-01-10T10:00:00Z")?,
            created_at: at("2024-01-03T00:00:00Z")?,
        },
    ])
}

pub fn statistics() -> Result<Statistics> {
    Ok(Statistics {
        is_live: true,
        viewer_count: 1234,
        vote_count: 567,
        message_count: 890,
        total_views: 10000,
        total_users: 500,
        votes: VoteTally {
            affirmative: 345,
            negative: 222,
        },
        live_start_time: at("2024-01-15T19:00:00Z")?,
        live_duration: 3600,
    })
}

pub fn live_schedule() -> Result<LiveSchedule> {
    Ok(LiveSchedule {
        is_scheduled: true,
        scheduled_start_time: at("2024-01-15T19:00:00Z")?,
        scheduled_end_time: at("2024-01-15T21:00:00Z")?,
        stream_id: "stream-001".to_string(),
        title: "人工智能辩论大赛".to_string(),
        description: "年度人工智能主题辩论大赛直播".to_string(),
    })
}

pub fn ai_status() -> Result<AiStatus> {
    Ok(AiStatus {
        status: AiRunState::Running,
        ai_session_id: "ai-session-001".to_string(),
        start_time: at("2024-01-15T19:00:00Z")?,
        settings: AiSettings {
            mode: "realtime".to_string(),
            interval: 5000,
            sensitivity: "high".to_string(),
            min_confidence: 0.7,
        },
        statistics: AiUsage {
            total_contents: 150,
            total_words: 2000,
            average_confidence: 0.85,
        },
    })
}
