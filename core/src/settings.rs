//! Snapshot of the server configuration returned by `GET /v1/api/settings`.
//!
//! The server always returns the complete set, so every documented field is
//! required. Wire names follow the server's `PalWorldSettings.ini` keys
//! (`bIsPvP`, `RCONPort`, ...); the Rust names drop the `b` prefix and use
//! snake case.

use serde::{Deserialize, Serialize};

use crate::types::ExtraFields;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Difficulty preset name, e.g. `"None"` or `"Normal"`.
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
    #[serde(rename = "RandomizerType")]
    pub randomizer_type: String,
    #[serde(rename = "RandomizerSeed")]
    pub randomizer_seed: String,
    #[serde(rename = "bIsRandomizerPalLevelRandom")]
    pub is_randomizer_pal_level_random: bool,
    #[serde(rename = "DayTimeSpeedRate")]
    pub day_time_speed_rate: f64,
    #[serde(rename = "NightTimeSpeedRate")]
    pub night_time_speed_rate: f64,
    #[serde(rename = "ExpRate")]
    pub exp_rate: f64,
    #[serde(rename = "PalCaptureRate")]
    pub pal_capture_rate: f64,
    #[serde(rename = "PalSpawnNumRate")]
    pub pal_spawn_num_rate: f64,
    #[serde(rename = "PalDamageRateAttack")]
    pub pal_damage_rate_attack: f64,
    #[serde(rename = "PalDamageRateDefense")]
    pub pal_damage_rate_defense: f64,
    #[serde(rename = "PlayerDamageRateAttack")]
    pub player_damage_rate_attack: f64,
    #[serde(rename = "PlayerDamageRateDefense")]
    pub player_damage_rate_defense: f64,
    #[serde(rename = "PlayerStomachDecreaceRate")]
    pub player_stomach_decreace_rate: f64,
    #[serde(rename = "PlayerStaminaDecreaceRate")]
    pub player_stamina_decreace_rate: f64,
    #[serde(rename = "PlayerAutoHPRegeneRate")]
    pub player_auto_hp_regene_rate: f64,
    #[serde(rename = "PlayerAutoHpRegeneRateInSleep")]
    pub player_auto_hp_regene_rate_in_sleep: f64,
    #[serde(rename = "PalStomachDecreaceRate")]
    pub pal_stomach_decreace_rate: f64,
    #[serde(rename = "PalStaminaDecreaceRate")]
    pub pal_stamina_decreace_rate: f64,
    #[serde(rename = "PalAutoHPRegeneRate")]
    pub pal_auto_hp_regene_rate: f64,
    #[serde(rename = "PalAutoHpRegeneRateInSleep")]
    pub pal_auto_hp_regene_rate_in_sleep: f64,
    #[serde(rename = "BuildObjectHpRate")]
    pub build_object_hp_rate: f64,
    #[serde(rename = "BuildObjectDamageRate")]
    pub build_object_damage_rate: f64,
    #[serde(rename = "BuildObjectDeteriorationDamageRate")]
    pub build_object_deterioration_damage_rate: f64,
    #[serde(rename = "CollectionDropRate")]
    pub collection_drop_rate: f64,
    #[serde(rename = "CollectionObjectHpRate")]
    pub collection_object_hp_rate: f64,
    #[serde(rename = "CollectionObjectRespawnSpeedRate")]
    pub collection_object_respawn_speed_rate: f64,
    #[serde(rename = "EnemyDropItemRate")]
    pub enemy_drop_item_rate: f64,
    /// One of `None`, `Item`, `ItemAndEquipment`, `All`.
    #[serde(rename = "DeathPenalty")]
    pub death_penalty: String,
    #[serde(rename = "bEnablePlayerToPlayerDamage")]
    pub enable_player_to_player_damage: bool,
    #[serde(rename = "bEnableFriendlyFire")]
    pub enable_friendly_fire: bool,
    #[serde(rename = "bEnableInvaderEnemy")]
    pub enable_invader_enemy: bool,
    #[serde(rename = "bActiveUNKO")]
    pub active_unko: bool,
    #[serde(rename = "bEnableAimAssistPad")]
    pub enable_aim_assist_pad: bool,
    #[serde(rename = "bEnableAimAssistKeyboard")]
    pub enable_aim_assist_keyboard: bool,
    #[serde(rename = "DropItemMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub drop_item_max_num: i64,
    #[serde(rename = "DropItemMaxNum_UNKO", deserialize_with = "crate::whole_number::deserialize")]
    pub drop_item_max_num_unko: i64,
    #[serde(rename = "BaseCampMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub base_camp_max_num: i64,
    #[serde(rename = "BaseCampWorkerMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub base_camp_worker_max_num: i64,
    #[serde(rename = "DropItemAliveMaxHours", deserialize_with = "crate::whole_number::deserialize")]
    pub drop_item_alive_max_hours: i64,
    #[serde(rename = "bAutoResetGuildNoOnlinePlayers")]
    pub auto_reset_guild_no_online_players: bool,
    #[serde(rename = "AutoResetGuildTimeNoOnlinePlayers", deserialize_with = "crate::whole_number::deserialize")]
    pub auto_reset_guild_time_no_online_players: i64,
    #[serde(rename = "GuildPlayerMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub guild_player_max_num: i64,
    #[serde(rename = "BaseCampMaxNumInGuild", deserialize_with = "crate::whole_number::deserialize")]
    pub base_camp_max_num_in_guild: i64,
    #[serde(rename = "PalEggDefaultHatchingTime", deserialize_with = "crate::whole_number::deserialize")]
    pub pal_egg_default_hatching_time: i64,
    #[serde(rename = "WorkSpeedRate")]
    pub work_speed_rate: f64,
    /// Seconds between automatic world saves.
    #[serde(rename = "autoSaveSpan", deserialize_with = "crate::whole_number::deserialize")]
    pub auto_save_span: i64,
    #[serde(rename = "bIsMultiplay")]
    pub is_multiplay: bool,
    #[serde(rename = "bIsPvP")]
    pub is_pvp: bool,
    #[serde(rename = "bHardcore")]
    pub hardcore: bool,
    #[serde(rename = "bPalLost")]
    pub pal_lost: bool,
    #[serde(rename = "bCharacterRecreateInHardcore")]
    pub character_recreate_in_hardcore: bool,
    #[serde(rename = "bCanPickupOtherGuildDeathPenaltyDrop")]
    pub can_pickup_other_guild_death_penalty_drop: bool,
    #[serde(rename = "bEnableNonLoginPenalty")]
    pub enable_non_login_penalty: bool,
    #[serde(rename = "bEnableFastTravel")]
    pub enable_fast_travel: bool,
    #[serde(rename = "bIsStartLocationSelectByMap")]
    pub is_start_location_select_by_map: bool,
    #[serde(rename = "bExistPlayerAfterLogout")]
    pub exist_player_after_logout: bool,
    #[serde(rename = "bEnableDefenseOtherGuildPlayer")]
    pub enable_defense_other_guild_player: bool,
    #[serde(rename = "bInvisibleOtherGuildBaseCampAreaFX")]
    pub invisible_other_guild_base_camp_area_fx: bool,
    #[serde(rename = "bBuildAreaLimit")]
    pub build_area_limit: bool,
    #[serde(rename = "ItemWeightRate")]
    pub item_weight_rate: f64,
    #[serde(rename = "CoopPlayerMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub coop_player_max_num: i64,
    #[serde(rename = "ServerPlayerMaxNum", deserialize_with = "crate::whole_number::deserialize")]
    pub server_player_max_num: i64,
    #[serde(rename = "ServerName")]
    pub server_name: String,
    #[serde(rename = "ServerDescription")]
    pub server_description: String,
    #[serde(rename = "PublicPort", deserialize_with = "crate::whole_number::deserialize")]
    pub public_port: i64,
    #[serde(rename = "PublicIP")]
    pub public_ip: String,
    #[serde(rename = "RCONEnabled")]
    pub rcon_enabled: bool,
    #[serde(rename = "RCONPort", deserialize_with = "crate::whole_number::deserialize")]
    pub rcon_port: i64,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "bUseAuth")]
    pub use_auth: bool,
    #[serde(rename = "BanListURL")]
    pub ban_list_url: String,
    #[serde(rename = "RESTAPIEnabled")]
    pub rest_api_enabled: bool,
    #[serde(rename = "RESTAPIPort", deserialize_with = "crate::whole_number::deserialize")]
    pub rest_api_port: i64,
    #[serde(rename = "bShowPlayerList")]
    pub show_player_list: bool,
    #[serde(rename = "ChatPostLimitPerMinute", deserialize_with = "crate::whole_number::deserialize")]
    pub chat_post_limit_per_minute: i64,
    /// Platforms allowed to join, e.g. `["Steam", "Xbox", "PS5", "Mac"]`.
    #[serde(rename = "CrossplayPlatforms")]
    pub crossplay_platforms: Vec<String>,
    #[serde(rename = "bIsUseBackupSaveData")]
    pub is_use_backup_save_data: bool,
    /// `Text` or `Json`.
    #[serde(rename = "LogFormatType")]
    pub log_format_type: String,
    #[serde(rename = "SupplyDropSpan", deserialize_with = "crate::whole_number::deserialize")]
    pub supply_drop_span: i64,
    #[serde(rename = "EnablePredatorBossPal")]
    pub enable_predator_boss_pal: bool,
    #[serde(rename = "MaxBuildingLimitNum", deserialize_with = "crate::whole_number::deserialize")]
    pub max_building_limit_num: i64,
    /// Distance in centimeters beyond which pawns stop replicating.
    #[serde(rename = "ServerReplicatePawnCullDistance", deserialize_with = "crate::whole_number::deserialize")]
    pub server_replicate_pawn_cull_distance: i64,
    #[serde(rename = "bAllowGlobalPalboxExport")]
    pub allow_global_palbox_export: bool,
    #[serde(rename = "bAllowGlobalPalboxImport")]
    pub allow_global_palbox_import: bool,
    #[serde(rename = "EquipmentDurabilityDamageRate")]
    pub equipment_durability_damage_rate: f64,
    #[serde(rename = "ItemContainerForceMarkDirtyInterval", deserialize_with = "crate::whole_number::deserialize")]
    pub item_container_force_mark_dirty_interval: i64,
    #[serde(rename = "ItemCorruptionMultiplier")]
    pub item_corruption_multiplier: f64,
    #[serde(flatten)]
    pub extra: ExtraFields,
}
