use serde::{Deserialize, Serialize};
use sixdegrees_core::{ActorPath, SearchConfig, SearchReport};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub max_hops: usize,
    pub start_from_fewer_credits: bool,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connections: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<ActorPath>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub actors_explored: usize,
    pub films_explored: usize,
}

pub fn create_json_output(
    report: &SearchReport,
    from_name: &str,
    to_name: &str,
    config: &SearchConfig,
) -> JsonOutput {
    JsonOutput {
        query: JsonQuery {
            from: from_name.to_string(),
            to: to_name.to_string(),
            options: JsonOptions {
                max_hops: config.max_hops,
                start_from_fewer_credits: config.start_from_fewer_credits,
            },
        },
        result: JsonResult {
            found: report.path.is_some(),
            connections: report.path.as_ref().map(ActorPath::len),
            path: report.path.clone(),
        },
        stats: JsonStats {
            search_time_ms: report.stats.duration_ms,
            actors_explored: report.stats.actors_visited,
            films_explored: report.stats.films_visited,
        },
    }
}

pub fn render_json_output(json_output: &JsonOutput) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(json_output)
}
