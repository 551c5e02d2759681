//! Wire types for the TinyURL backend API.
//!
//! These structs mirror the backend's JSON contract field-for-field. The
//! statistics payloads are passed through for display and carry no client-side
//! behavior beyond deserialization.

use serde::{Deserialize, Serialize};

/// Collision-resolution preference sent with a shorten request.
///
/// The semantics of each strategy are defined by the backend; the client only
/// selects and transmits the preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionStrategy {
    Linear,
    Regenerate,
    Append,
}

impl CollisionStrategy {
    /// All strategies in selector order.
    pub const ALL: [CollisionStrategy; 3] = [
        CollisionStrategy::Linear,
        CollisionStrategy::Regenerate,
        CollisionStrategy::Append,
    ];

    /// Wire name as sent in the request body.
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionStrategy::Linear => "linear",
            CollisionStrategy::Regenerate => "regenerate",
            CollisionStrategy::Append => "append",
        }
    }

    /// Human-readable label for the strategy selector.
    pub fn label(&self) -> &'static str {
        match self {
            CollisionStrategy::Linear => "Linear Probing",
            CollisionStrategy::Regenerate => "Regeneration",
            CollisionStrategy::Append => "Append Counter",
        }
    }

    /// Short example of how the strategy resolves a collision.
    pub fn hint(&self) -> &'static str {
        match self {
            CollisionStrategy::Linear => "abc → abd → abe",
            CollisionStrategy::Regenerate => "abc → x7K9mP",
            CollisionStrategy::Append => "abc → abc1 → abc2",
        }
    }

    /// Next strategy in selector order, wrapping.
    pub fn next(self) -> Self {
        match self {
            CollisionStrategy::Linear => CollisionStrategy::Regenerate,
            CollisionStrategy::Regenerate => CollisionStrategy::Append,
            CollisionStrategy::Append => CollisionStrategy::Linear,
        }
    }

    /// Previous strategy in selector order, wrapping.
    pub fn prev(self) -> Self {
        match self {
            CollisionStrategy::Linear => CollisionStrategy::Append,
            CollisionStrategy::Regenerate => CollisionStrategy::Linear,
            CollisionStrategy::Append => CollisionStrategy::Regenerate,
        }
    }
}

impl Default for CollisionStrategy {
    fn default() -> Self {
        CollisionStrategy::Linear
    }
}

/// Request body for `POST /api/shorten`.
#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    pub collision_strategy: CollisionStrategy,
}

/// Successful response from `POST /api/shorten`.
///
/// Replaced wholesale by each new successful submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub short_code: String,
    pub original_url: String,
    pub attempts: u32,
    #[serde(default)]
    pub cached: bool,
    #[serde(default)]
    pub collision_detected: bool,
    #[serde(default)]
    pub strategy_used: Option<String>,
}

/// Hash-map section of the statistics snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HashMapStats {
    pub size: u64,
    pub capacity: u64,
    pub load_factor: f64,
    pub collision_count: u64,
    pub avg_chain_length: f64,
    pub max_chain_length: u64,
    pub non_empty_buckets: u64,
}

/// LRU-cache section of the statistics snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LruCacheStats {
    pub size: u64,
    pub capacity: u64,
    pub hit_rate: f64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub utilization: f64,
}

/// Trie section of the statistics snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrieStats {
    pub total_urls: u64,
    pub total_nodes: u64,
    pub avg_nodes_per_url: f64,
}

/// Collision-detector section of the statistics snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollisionDetectorStats {
    pub total_collisions: u64,
    pub linear_probing_used: u64,
    pub linear_probing_percentage: f64,
    pub regeneration_used: u64,
    pub regeneration_percentage: f64,
    pub max_attempts: u64,
}

/// Full response from `GET /api/stats`.
///
/// Opaque to the client beyond field names; each refresh replaces the whole
/// snapshot at once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSnapshot {
    pub hash_map: HashMapStats,
    pub lru_cache: LruCacheStats,
    pub trie: TrieStats,
    pub collision_detector: CollisionDetectorStats,
}

/// One entry of the `GET /api/top` leaderboard.
///
/// The server returns entries ordered by descending clicks; that order is
/// rendered as received. `created_at` is kept as the raw wire string and
/// parsed leniently at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopEntry {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
    pub created_at: String,
    #[serde(default)]
    pub collision_resolved: bool,
    #[serde(default)]
    pub resolution_strategy: Option<String>,
}

/// Response envelope from `GET /api/top`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopUrlsResponse {
    #[serde(default)]
    pub top_urls: Vec<TopEntry>,
}
