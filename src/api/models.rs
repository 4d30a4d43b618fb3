use serde::Deserialize;

// Featured games (observer-mode) response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGameInfo {
    pub game_mode: String,
    pub game_type: String,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub champion_id: i64,
    pub summoner_name: String,
}
