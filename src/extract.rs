use std::collections::BTreeMap;

use serde_json::Value;

use crate::api::models::FeaturedGameInfo;
use crate::config::DEFAULT_COOLDOWN;
use crate::error::AppError;

/// Champion id mapped to the summoner names seen playing it, in the order
/// the payload listed them. The same champion can appear in several
/// concurrent games, so duplicates are kept.
pub type NicknameMap = BTreeMap<i64, Vec<String>>;

/// Collects summoner nicknames per champion from a featured-games payload.
///
/// A game only contributes if it is a CLASSIC matched game; every other
/// mode/type combination is skipped. An empty or fully filtered game list
/// is a valid, empty result.
pub fn extract_nicknames(payload: &Value) -> Result<NicknameMap, AppError> {
    let game_list = payload
        .as_object()
        .and_then(|obj| obj.get("gameList"))
        .ok_or_else(|| AppError::MalformedPayload("no gameList given".to_string()))?;

    let games: Vec<FeaturedGameInfo> = serde_json::from_value(game_list.clone())
        .map_err(|e| AppError::MalformedPayload(e.to_string()))?;

    let mut nicknames = NicknameMap::new();
    for game in games {
        if game.game_mode == "CLASSIC" && game.game_type == "MATCHED_GAME" {
            for participant in game.participants {
                nicknames
                    .entry(participant.champion_id)
                    .or_insert_with(Vec::new)
                    .push(participant.summoner_name);
            }
        }
    }

    Ok(nicknames)
}

/// Returns the server's polling hint, or the default when it is absent.
pub fn extract_cooldown(payload: &Value) -> u64 {
    payload
        .get("clientRefreshInterval")
        .and_then(Value::as_u64)
        .unwrap_or(DEFAULT_COOLDOWN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn game(mode: &str, kind: &str, participants: Value) -> Value {
        json!({
            "gameMode": mode,
            "gameType": kind,
            "participants": participants,
        })
    }

    #[test]
    fn missing_game_list_is_malformed() {
        let err = extract_nicknames(&json!({"other": 1})).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn non_object_payload_is_malformed() {
        let garbage = Value::String("{lifjleiu;':;:';}".to_string());
        let err = extract_nicknames(&garbage).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn structurally_broken_game_list_is_malformed() {
        let payload = json!({"gameList": [{"gameMode": "CLASSIC"}]});
        let err = extract_nicknames(&payload).unwrap_err();
        assert!(matches!(err, AppError::MalformedPayload(_)));
    }

    #[test]
    fn empty_game_list_is_an_empty_mapping() {
        let nicknames = extract_nicknames(&json!({"gameList": []})).unwrap();
        assert!(nicknames.is_empty());
    }

    #[test]
    fn mode_mismatch_excludes_the_whole_game() {
        let payload = json!({
            "gameList": [game(
                "ARAM",
                "MATCHED_GAME",
                json!([{"championId": 1, "summonerName": "Alice"}]),
            )]
        });
        assert!(extract_nicknames(&payload).unwrap().is_empty());
    }

    #[test]
    fn type_mismatch_excludes_the_whole_game() {
        let payload = json!({
            "gameList": [game(
                "CLASSIC",
                "CUSTOM_GAME",
                json!([{"championId": 1, "summonerName": "Alice"}]),
            )]
        });
        assert!(extract_nicknames(&payload).unwrap().is_empty());
    }

    #[test]
    fn classic_matched_game_groups_by_champion() {
        let payload = json!({
            "gameList": [game(
                "CLASSIC",
                "MATCHED_GAME",
                json!([
                    {"championId": 1, "summonerName": "Alice"},
                    {"championId": 2, "summonerName": "Bob"},
                ]),
            )]
        });

        let nicknames = extract_nicknames(&payload).unwrap();
        assert_eq!(nicknames.len(), 2);
        assert_eq!(nicknames[&1], vec!["Alice"]);
        assert_eq!(nicknames[&2], vec!["Bob"]);
    }

    #[test]
    fn same_champion_across_games_accumulates_in_order() {
        let participants = |name: &str| json!([{"championId": 7, "summonerName": name}]);
        let payload = json!({
            "gameList": [
                game("CLASSIC", "MATCHED_GAME", participants("First")),
                game("URF", "MATCHED_GAME", participants("Skipped")),
                game("CLASSIC", "MATCHED_GAME", participants("Second")),
            ]
        });

        let nicknames = extract_nicknames(&payload).unwrap();
        assert_eq!(nicknames[&7], vec!["First", "Second"]);
    }

    #[test]
    fn cooldown_defaults_when_absent() {
        assert_eq!(extract_cooldown(&json!({})), 300);
        assert_eq!(extract_cooldown(&json!({"gameList": []})), 300);
    }

    #[test]
    fn cooldown_uses_the_payload_hint_when_present() {
        assert_eq!(extract_cooldown(&json!({"clientRefreshInterval": 0})), 0);
        assert_eq!(
            extract_cooldown(&json!({"clientRefreshInterval": 120})),
            120
        );
    }

    #[test]
    fn cooldown_ignores_a_malformed_hint() {
        assert_eq!(
            extract_cooldown(&json!({"clientRefreshInterval": "soon"})),
            300
        );
    }
}
