//! Integration tests for the `schema-docs` binary.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

const SCHEMA: &str = r#"{
  "data": {
    "__schema": {
      "queryType": { "name": "Query" },
      "types": [
        {
          "name": "Query",
          "kind": "OBJECT",
          "fields": [
            { "name": "today", "args": [], "type": { "kind": "SCALAR", "name": "Date" } }
          ],
          "interfaces": []
        },
        { "name": "Date", "kind": "SCALAR", "description": "Calendar day" }
      ],
      "directives": [
        { "name": "skip", "locations": ["FIELD"], "args": [] }
      ]
    }
  }
}"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("schema.json"), SCHEMA).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_schema-docs"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_list_command_json() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "json", "list", "schema.json"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["types"][0]["name"], "Date");
    assert_eq!(value["types"][1]["kind"], "OBJECT");
    assert_eq!(value["types"][1]["root"], "query");
    assert!(value["types"][0].get("root").is_none());
    assert_eq!(value["directives"][0], "skip");
}

#[test]
fn test_render_command_json() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "json", "render", "schema.json", "Query", "Nope"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value[0]["name"], "Query");
    assert_eq!(value[0]["documents"][0]["title"], "Definition");

    let html = value[0]["documents"][0]["description"].as_str().unwrap();
    assert!(html.starts_with(r#"<code class="highlight"><ul class="code" style="padding-left:28px">"#));
    assert!(html.contains(r#"<a class="support type" href="./date.doc.html">Date</a>"#));

    assert_eq!(value[1]["name"], "Nope");
    assert_eq!(value[1]["documents"], serde_json::json!([]));
}

#[test]
fn test_render_command_title_flag_overrides_config() {
    let ws = Workspace::new();
    let config = ws.write(
        "graphdoc.toml",
        "[graphdoc]\nbaseUrl = \"/docs/\"\n\n[graphdoc-plugin-schema]\ndocumentTitle = \"From file\"\n",
    );

    let output = ws.run(&[
        "--format",
        "json",
        "render",
        "schema.json",
        "Query",
        "--config",
        config.to_str().unwrap(),
        "--title",
        "From flag",
    ]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value[0]["documents"][0]["title"], "From flag");

    let html = value[0]["documents"][0]["description"].as_str().unwrap();
    assert!(html.contains(r#"href="/docs/date.doc.html""#));
}

#[test]
fn test_render_command_text_format() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "text", "render", "schema.json", "skip"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|line| line == "[0].name: skip"));
    assert!(stdout.lines().any(|line| line == "[0].documents[0].title: Definition"));
}

#[test]
fn test_assets_command() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "json", "assets", "schema.json"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["enabled"], true);
    assert!(value["headers"][1].as_str().unwrap().contains("./assets/code.css"));
    assert_eq!(value["assets"], serde_json::json!([]));
}

#[test]
fn test_assets_command_writes_stylesheet() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "json", "assets", "schema.json", "--out", "site/assets"]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    let written = PathBuf::from(value["assets"][0].as_str().unwrap());
    assert!(written.ends_with("site/assets/code.css"));
    assert!(ws.path("site/assets/code.css").is_file());
}

#[test]
fn test_assets_command_disabled_by_json_config() {
    let ws = Workspace::new();
    let config = ws.write(
        "options.json",
        r#"{ "graphdoc-plugin-schema": { "enableAssets": false } }"#,
    );

    let output = ws.run(&[
        "--format",
        "json",
        "assets",
        "schema.json",
        "--config",
        config.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["enabled"], false);
    assert!(value["notice"].as_str().unwrap().contains("disabled"));
}

#[test]
fn test_invalid_schema_exits_with_invalid_input() {
    let ws = Workspace::new();
    ws.write("broken.json", "[1, 2, 3]");

    let output = ws.run(&["list", "broken.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_format_exits_with_invalid_input() {
    let ws = Workspace::new();
    let output = ws.run(&["--format", "yaml", "list", "schema.json"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_missing_schema_exits_with_error() {
    let ws = Workspace::new();
    let output = ws.run(&["list", "missing.json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to read schema file"));
}
