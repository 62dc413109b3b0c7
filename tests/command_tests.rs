use priorank::commands::{parse_tasks, ranked_table, InputFormat};
use priorank::config::{config_path, Config};
use priorank::error::{InputError, PriorankError};
use priorank::models::DueDate;
use priorank::ranking::rank_tasks_on;
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

// Use a mutex to ensure tests run serially since they modify the environment variable
static TEST_MUTEX: Mutex<()> = Mutex::new(());

fn with_test_config<F>(test_name: &str, contents: Option<&str>, f: F)
where
    F: FnOnce(PathBuf),
{
    let _guard = TEST_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let mut path = env::temp_dir();
    path.push(format!("priorank_test_{}.toml", test_name));
    env::set_var("PRIORANK_CONFIG", path.to_str().unwrap());

    if path.exists() {
        fs::remove_file(&path).unwrap();
    }
    if let Some(c) = contents {
        fs::write(&path, c).unwrap();
    }

    f(path.clone());

    if path.exists() {
        fs::remove_file(&path).unwrap();
    }
    env::remove_var("PRIORANK_CONFIG");
}

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

#[test]
fn test_parse_text_input() {
    let input = "Write report | 1 | 2026-10-20\n\nStandup | 2 | daily\nGym | | custom:4\nRead\n";
    let tasks = parse_tasks(input, InputFormat::Text, &Config::default()).unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[0].importance, Some(1));
    assert_eq!(tasks[0].due_date, DueDate::Date(Some(NaiveDate::from_ymd_opt(2026, 10, 20).unwrap())));
    assert_eq!(tasks[1].due_date, DueDate::Daily);
    assert_eq!(tasks[2].importance, None);
    assert_eq!(tasks[2].due_date, DueDate::Custom("4".into()));
    assert_eq!(tasks[3].description, "Read");
    assert_eq!(tasks[3].due_date, DueDate::Unset);
}

#[test]
fn test_parse_unknown_due_date() {
    let err = parse_tasks("a | 1 | tomorrow", InputFormat::Text, &Config::default()).unwrap_err();
    match err {
        PriorankError::Input(InputError::UnknownDueDate { line, value }) => {
            assert_eq!(line, 1);
            assert_eq!(value, "tomorrow");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_invalid_date() {
    let err = parse_tasks("a\nb | 1 | date:2026-13-40", InputFormat::Text, &Config::default()).unwrap_err();
    assert!(matches!(err, PriorankError::Input(InputError::InvalidDate { line: 2, .. })));
}

#[test]
fn test_parse_empty_input() {
    let err = parse_tasks("\n  \n", InputFormat::Text, &Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "Please enter at least one task.");
}

#[test]
fn test_custom_separator() {
    let config = Config { separator: ";".into(), ..Config::default() };
    let tasks = parse_tasks("a | b ; 2 ; asap", InputFormat::Text, &config).unwrap();
    assert_eq!(tasks[0].description, "a | b");
    assert_eq!(tasks[0].importance, Some(2));
    assert_eq!(tasks[0].due_date, DueDate::Asap);
}

#[test]
fn test_parse_json_input() {
    let input = r#"[
        {"description": "A", "importance": 2, "due_date": {"type": "today"}},
        {"description": "B", "due_date": {"type": "custom", "value": "7"}},
        {"description": "C", "importance": 1, "due_date": {"type": "date", "value": "2026-10-23"}},
        {"description": "D"}
    ]"#;
    let tasks = parse_tasks(input, InputFormat::Json, &Config::default()).unwrap();
    assert_eq!(tasks.len(), 4);
    assert_eq!(tasks[1].due_date, DueDate::Custom("7".into()));
    assert_eq!(tasks[3].due_date, DueDate::Unset);

    let ranked = rank_tasks_on(&tasks, day());
    let names: Vec<&str> = ranked.iter().map(|t| t.description.as_str()).collect();
    // A: 2*1, C: 1*6, D: 4*1, B: 4*7
    assert_eq!(names, vec!["A", "D", "C", "B"]);
}

#[test]
fn test_ranked_json_output() {
    let tasks = parse_tasks("A | 1 | asap", InputFormat::Text, &Config::default()).unwrap();
    let ranked = rank_tasks_on(&tasks, day());
    let value = serde_json::to_value(&ranked).unwrap();
    assert_eq!(value[0]["rank"], 1);
    assert_eq!(value[0]["priority"], 3);
    assert_eq!(value[0]["due_date"]["type"], "asap");
}

#[test]
fn test_table_columns() {
    let tasks = parse_tasks("A | 2 | today\nB | 1 | asap", InputFormat::Text, &Config::default()).unwrap();
    let ranked = rank_tasks_on(&tasks, day());

    let short = ranked_table(&ranked, false).to_string();
    assert!(short.contains("Rank"));
    assert!(short.contains("Today"));
    assert!(!short.contains("Calculation"));

    let full = ranked_table(&ranked, true).to_string();
    assert!(full.contains("Calculation"));
    assert!(full.contains("2 * 1 = 2"));
    assert!(full.contains("1 * 3 = 3"));
}

#[test]
fn test_config_defaults_when_missing() {
    with_test_config("missing", None, |path| {
        assert_eq!(config_path(), path);
        let config = Config::load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.separator, "|");
    });
}

#[test]
fn test_config_load() {
    with_test_config("load", Some("show_all_columns = true\nseparator = \";\"\n"), |_path| {
        let config = Config::load().unwrap();
        assert!(config.show_all_columns);
        assert_eq!(config.separator, ";");
    });
}

#[test]
fn test_config_invalid() {
    with_test_config("invalid", Some("show_all_columns = \"maybe\""), |_path| {
        let err = Config::load().unwrap_err();
        assert!(matches!(err, PriorankError::Config { .. }));
    });
}
