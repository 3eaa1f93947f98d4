//! Reading a [`SerializedState`] out of a location href.

use crate::{SerializedState, SyncConfig, decode_component};

/// Splits an href at the first `?` into the base and the query text.
pub fn split_href(href: &str) -> (&str, Option<&str>) {
    match href.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (href, None),
    }
}

/// Last `/`-separated segment of the base, without a trailing `#fragment`.
pub fn last_path_segment(base: &str) -> &str {
    let path = base.split('#').next().unwrap_or(base);
    path.rsplit('/').next().unwrap_or(path)
}

/// Parses `k=v&k2=v2` pairs.
///
/// Items without `=` and values that fail to decode are skipped; each value
/// is cut at the first `#` before decoding.
pub fn parse_query(query: &str) -> SerializedState {
    let mut state = SerializedState::new();
    for item in query.split('&') {
        let Some((key, raw_value)) = item.split_once('=') else {
            continue;
        };
        let raw_value = raw_value.split('#').next().unwrap_or(raw_value);
        if let Some(value) = decode_component(raw_value) {
            state.insert(key.to_string(), value);
        }
    }
    state
}

/// Derives the serialized state from a full href.
///
/// The mode key comes from the last path segment when it matches one of the
/// configured routes; query pairs are read afterwards and win on conflict.
pub fn extract_state(href: &str, config: &SyncConfig) -> SerializedState {
    let (base, query) = split_href(href);
    let mut state = SerializedState::new();

    if let Some(mode) = config.mode_for_segment(last_path_segment(base)) {
        state.insert(config.mode_key.clone(), mode.to_string());
    }

    if let Some(query) = query {
        state.extend(parse_query(query));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_from_pairs;

    fn extract(href: &str) -> SerializedState {
        extract_state(href, &SyncConfig::default())
    }

    #[test]
    fn live_path_with_query() {
        assert_eq!(
            extract("https://x/app/live?a=1&b=2"),
            state_from_pairs([("mode", "notifications"), ("a", "1"), ("b", "2")])
        );
    }

    #[test]
    fn mode_from_known_segments_only() {
        assert_eq!(extract("https://x/app/weather").get("mode").map(String::as_str), Some("weather"));
        assert_eq!(extract("https://x/app/overview").get("mode").map(String::as_str), Some("weather"));
        assert_eq!(extract("https://x/app/live#top").get("mode").map(String::as_str), Some("notifications"));
        assert!(extract("https://x/app/settings?a=1").get("mode").is_none());
        assert!(extract("https://x/live/other").get("mode").is_none());
    }

    #[test]
    fn values_are_decoded_and_fragment_stripped() {
        let state = extract("https://x/app?city=S%C3%A3o%20Paulo&q=a%26b#section");
        assert_eq!(state, state_from_pairs([("city", "São Paulo"), ("q", "a&b")]));
    }

    #[test]
    fn value_keeps_text_after_second_equals() {
        assert_eq!(parse_query("expr=a=b"), state_from_pairs([("expr", "a=b")]));
    }

    #[test]
    fn malformed_pairs_are_skipped() {
        let state = parse_query("flag&a=1&&=empty-key&bad=%FF&b=");
        assert_eq!(
            state,
            state_from_pairs([("a", "1"), ("", "empty-key"), ("b", "")])
        );
    }

    #[test]
    fn no_query_gives_no_pairs() {
        assert!(extract("https://x/app").is_empty());
        assert!(extract("https://x/app?").is_empty());
    }

    #[test]
    fn query_mode_overrides_path_mode() {
        assert_eq!(
            extract("https://x/live?mode=radar").get("mode").map(String::as_str),
            Some("radar")
        );
    }

    #[test]
    fn custom_routes_and_key() {
        let config = SyncConfig {
            mode_key: "view".to_string(),
            ..SyncConfig::default()
        }
        .with_mode_routes(vec![crate::ModeRoute::new("map", "radar")]);

        assert_eq!(
            extract_state("https://x/map?z=3", &config),
            state_from_pairs([("view", "radar"), ("z", "3")])
        );
        assert!(extract_state("https://x/live", &config).is_empty());
    }
}
