mod common;

use common::TestApp;
use sixdegrees::json_output::{JsonOutput, create_json_output, render_json_output};
use sixdegrees_core::{SearchConfig, find_shortest_path};

#[test]
fn test_json_output_with_path() {
    let test_app = TestApp::create();
    let config = SearchConfig::default();
    let report = find_shortest_path(&test_app.app.db, "Alice", "Carol", &config);

    let json_output = create_json_output(&report, "Alice", "Carol", &config);
    let json_string = render_json_output(&json_output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json_string).unwrap();

    assert_eq!(value["query"]["from"], "Alice");
    assert_eq!(value["query"]["to"], "Carol");
    assert_eq!(value["query"]["options"]["max_hops"], 5);
    assert_eq!(value["result"]["found"], true);
    assert_eq!(value["result"]["connections"], 2);
    assert_eq!(value["result"]["path"]["start"], "Alice");
    assert_eq!(value["result"]["path"]["connections"][0]["film"]["title"], "Movie1");
    assert_eq!(value["result"]["path"]["connections"][0]["film"]["year"], 2000);
    assert_eq!(value["result"]["path"]["connections"][1]["actor"], "Carol");
    assert_eq!(value["stats"]["actors_explored"], 3);
}

#[test]
fn test_json_output_without_path() {
    let test_app = TestApp::create();
    let config = SearchConfig::default();
    let report = find_shortest_path(&test_app.app.db, "Alice", "Dave", &config);

    let json_output = create_json_output(&report, "Alice", "Dave", &config);
    let json_string = render_json_output(&json_output).unwrap();

    assert!(json_string.contains(r#""found": false"#));
    assert!(!json_string.contains(r#""path""#));
    assert!(!json_string.contains(r#""connections""#));

    let parsed: JsonOutput = serde_json::from_str(&json_string).unwrap();
    assert!(parsed.result.path.is_none());
    assert_eq!(parsed.stats.films_explored, 2);
}
