/*
Message catalogue for response envelopes.

This module provides:
- An embedded translations store for ZH/EN (compile-time embedded JSON).
- A `tr` function to lookup translations by key + optional params.
- A `t` convenience wrapper using the process language chosen at startup.

Usage:
    use crate::i18n;
    let msg = i18n::t("not_found.stream");
    let msg_with = i18n::t_with("validation.malformed_body", &[("err", "EOF while parsing")]);

Notes:
- Placeholders in translation strings use single-brace format: `{name}`.
- Default language is `zh`, which is what the admin console clients expect.
  If a key is missing for the active language, `zh` is used, then the key.
*/

use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_LANG: &str = "zh";

static TRANSLATIONS: OnceLock<HashMap<String, HashMap<String, String>>> = OnceLock::new();
static ACTIVE_LANG: OnceLock<String> = OnceLock::new();

const ZH_JSON: &str = r#"
{
  "common.success": "success",
  "not_found.stream": "直播流不存在",
  "not_found.debate_topic": "该直播流尚未设置辩题",
  "not_found.user": "用户不存在",
  "validation.stream_required_fields": "缺少必要参数: name, url, type 必填",
  "validation.stream_url_invalid": "流地址格式不正确，请输入有效的URL",
  "validation.stream_type_invalid": "type 必须是 hls, rtmp 或 flv",
  "validation.topic_required_fields": "参数验证失败：title、leftPosition、rightPosition 不能为空",
  "validation.login_code_missing": "缺少登录凭证",
  "validation.vote_side_invalid": "投票选项无效",
  "validation.ai_action_invalid": "操作无效",
  "validation.user_role_invalid": "role 必须是 admin, user 或 judge",
  "validation.malformed_body": "请求体格式不正确: {err}",
  "error.internal": "服务器内部错误",
  "error.rate_limited": "请求过于频繁，请稍后再试",
  "stream.created": "添加直播流成功",
  "stream.updated": "更新直播流成功",
  "stream.deleted": "删除直播流成功",
  "topic.saved": "辩题设置成功",
  "topic.updated": "辩题更新成功",
  "topic.deleted": "辩题删除成功",
  "user.updated": "更新用户信息成功",
  "user.deleted": "删除用户成功",
  "auth.logged_in": "登录成功",
  "vote.accepted": "投票成功",
  "schedule.updated": "更新直播计划成功",
  "ai.control_applied": "AI服务控制成功"
}
"#;

const EN_JSON: &str = r#"
{
  "common.success": "success",
  "not_found.stream": "Stream not found",
  "not_found.debate_topic": "No debate topic has been set for this stream",
  "not_found.user": "User not found",
  "validation.stream_required_fields": "Missing required parameters: name, url and type are required",
  "validation.stream_url_invalid": "Invalid stream URL, please enter a valid URL",
  "validation.stream_type_invalid": "type must be one of hls, rtmp or flv",
  "validation.topic_required_fields": "Validation failed: title, leftPosition and rightPosition must not be empty",
  "validation.login_code_missing": "Missing login credential",
  "validation.vote_side_invalid": "Invalid vote option",
  "validation.ai_action_invalid": "Invalid action",
  "validation.user_role_invalid": "role must be one of admin, user or judge",
  "validation.malformed_body": "Malformed request body: {err}",
  "error.internal": "Internal server error",
  "error.rate_limited": "Too many requests, please try again later",
  "stream.created": "Stream added",
  "stream.updated": "Stream updated",
  "stream.deleted": "Stream deleted",
  "topic.saved": "Debate topic saved",
  "topic.updated": "Debate topic updated",
  "topic.deleted": "Debate topic deleted",
  "user.updated": "User updated",
  "user.deleted": "User deleted",
  "auth.logged_in": "Logged in",
  "vote.accepted": "Vote accepted",
  "schedule.updated": "Live schedule updated",
  "ai.control_applied": "AI service control applied"
}
"#;

/// Initialize translations map (lazy).
fn build_translations() -> HashMap<String, HashMap<String, String>> {
    let mut out: HashMap<String, HashMap<String, String>> = HashMap::new();

    let zh_map: HashMap<String, String> = serde_json::from_str(ZH_JSON).unwrap_or_else(|e| {
        panic!("failed to parse ZH_JSON in i18n module: {}", e);
    });
    out.insert("zh".to_string(), zh_map);

    let en_map: HashMap<String, String> = serde_json::from_str(EN_JSON).unwrap_or_else(|e| {
        panic!("failed to parse EN_JSON in i18n module: {}", e);
    });
    out.insert("en".to_string(), en_map);

    out
}

/// Returns the global translations map (lang -> (key -> message)).
fn translations() -> &'static HashMap<String, HashMap<String, String>> {
    TRANSLATIONS.get_or_init(build_translations)
}

/// Normalize a language tag into a short, lowercase code (e.g. "zh-CN" -> "zh").
pub fn normalize_language(lang: &str) -> String {
    lang.split('-').next().unwrap_or(lang).to_lowercase()
}

/// Returns true if the given language code has a translation table.
pub fn is_supported_language(lang: &str) -> bool {
    translations().contains_key(lang)
}

/// Select the language used by `t` / `t_with`. Only the first call wins;
/// later calls are ignored so the catalogue stays stable for the process.
pub fn init(lang: &str) {
    let lang = normalize_language(lang);
    if ACTIVE_LANG.set(lang.clone()).is_err() {
        tracing::debug!("i18n language already initialized; ignoring {}", lang);
    }
}

fn active_language() -> &'static str {
    ACTIVE_LANG.get().map(String::as_str).unwrap_or(DEFAULT_LANG)
}

/// Translate a key using an explicit language (or the active one if None).
///
/// Returns the translated and parameter-substituted string. If no translation is found,
/// falls back to the default language value, then to the key itself.
pub fn tr(lang: Option<&str>, key: &str, params: Option<&[(&str, &str)]>) -> String {
    let map = translations();

    let desired = match lang {
        Some(lang) => lang,
        None => active_language(),
    };

    let val = map
        .get(desired)
        .and_then(|m| m.get(key))
        .cloned()
        .or_else(|| map.get(DEFAULT_LANG).and_then(|m| m.get(key)).cloned())
        .unwrap_or_else(|| key.to_string());

    if let Some(params) = params {
        let mut s = val;
        for (k, v) in params {
            s = s.replace(&format!("{{{}}}", k), v);
        }
        s
    } else {
        val
    }
}

pub fn t(key: &str) -> String {
    tr(None, key, None)
}

pub fn t_with(key: &str, params: &[(&str, &str)]) -> String {
    tr(None, key, Some(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_table_is_available() {
        assert_eq!(tr(Some("en"), "not_found.stream", None), "Stream not found");
    }

    #[test]
    fn unknown_language_falls_back_to_chinese() {
        assert_eq!(tr(Some("fr"), "not_found.user", None), "用户不存在");
    }

    #[test]
    fn params_are_substituted() {
        let s = tr(
            Some("en"),
            "validation.malformed_body",
            Some(&[("err", "trailing comma")]),
        );
        assert_eq!(s, "Malformed request body: trailing comma");
    }

    #[test]
    fn explicit_language_overrides_active_one() {
        let lang = String::from("en");
        assert_eq!(tr(Some(lang.as_str()), "not_found.user", None), "User not found");
        assert_eq!(tr(None, "not_found.user", None), t("not_found.user"));
    }

    #[test]
    fn missing_key_returns_key() {
        assert_eq!(t("non.existent.key"), "non.existent.key");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        let map = translations();
        let zh = &map["zh"];
        let en = &map["en"];
        for key in zh.keys() {
            assert!(en.contains_key(key), "missing en translation for {key}");
        }
        assert_eq!(zh.len(), en.len());
    }

    #[test]
    fn language_tags_are_normalized() {
        assert_eq!(normalize_language("zh-CN"), "zh");
        assert_eq!(normalize_language("EN-us"), "en");
        assert!(is_supported_language("zh"));
        assert!(!is_supported_language("ru"));
    }
}
