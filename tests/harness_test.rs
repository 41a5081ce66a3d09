// Action dispatch: the catch-at-boundary policy and the fixed actions

use anyhow::anyhow;
use formdeck::app::AppDef;
use formdeck::demo;
use formdeck::harness::{Action, AppCtx, Handlers, Harness};
use formdeck::input::ScriptedInput;
use std::io::Write;

fn harness_with(prompts: &[&str]) -> Harness {
    Harness::new(&AppDef {
        title: "Test".to_string(),
        prompts: prompts.iter().map(|p| p.to_string()).collect(),
        ..AppDef::default()
    })
}

#[test]
fn test_run_handler_failure_lands_in_console() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new().on_run(|_| Err(anyhow!("boom")));
    let mut input = ScriptedInput::default();
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    assert_eq!(harness.console.text(), "boom\n");
}

#[test]
fn test_demo_greets_from_fields() {
    let mut harness = Harness::new(&demo::definition());
    let mut handlers = demo::handlers();
    harness.form.set_field(0, "Ada");
    harness.form.set_field(1, "36");
    let mut input = ScriptedInput::default();
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    assert_eq!(harness.console.text(), "Hello Ada. You are 36 years old\n");
}

#[test]
fn test_demo_bad_age_is_reported_not_fatal() {
    let mut harness = Harness::new(&demo::definition());
    let mut handlers = demo::handlers();
    harness.form.set_field(0, "Ada");
    harness.form.set_field(1, "unknown");
    let mut input = ScriptedInput::default();
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    assert!(harness.console.text().contains("is not a valid age"));
}

#[test]
fn test_clear_action_empties_console() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.console.append_line("old output");
    harness.dispatch(Action::Clear, &mut input, &mut handlers);
    assert!(harness.console.is_empty());
}

#[test]
fn test_blank_selection_is_ignored() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.dispatch(Action::SelectChanged("   ".to_string()), &mut input, &mut handlers);
    assert!(harness.console.is_empty());
}

#[test]
fn test_selection_echoes_to_console_by_default() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.dispatch(
        Action::SelectChanged("item 2".to_string()),
        &mut input,
        &mut handlers,
    );
    assert_eq!(harness.console.text(), "item 2\n");
}

#[test]
fn test_run_handler_can_prompt() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new().on_run(|ctx: &mut AppCtx| {
        let n = ctx.input_int("How many?");
        ctx.console.append_line(format!("count = {n}"));
        Ok(())
    });
    let mut input = ScriptedInput::new(["7"]);
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    assert_eq!(harness.console.text(), "count = 7\n");

    // dismissed prompt falls back to the sentinel
    let mut input = ScriptedInput::default();
    harness.console.clear();
    harness.dispatch(Action::Run, &mut input, &mut handlers);
    assert_eq!(harness.console.text(), "count = -1\n");
}

#[test]
fn test_open_streams_lines_and_updates_status() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    let mut f = std::fs::File::create(&path).unwrap();
    write!(f, "alpha\n\nbeta\n").unwrap();

    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.dispatch(Action::OpenFile(path.clone()), &mut input, &mut handlers);

    // the empty middle line is dropped by the empty-append rule
    assert_eq!(harness.console.text(), "alpha\nbeta\n");
    assert!(harness.status.contains("3 lines read"));
    assert!(harness.last_opened.is_some());
    assert!(input.messages.is_empty());
}

#[test]
fn test_open_missing_file_reports_and_continues() {
    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.dispatch(
        Action::OpenFile("no/such/file.txt".into()),
        &mut input,
        &mut handlers,
    );
    assert!(harness.console.is_empty());
    assert_eq!(input.messages.len(), 1);
    assert!(input.messages[0].contains("no/such/file.txt"));
}

#[test]
fn test_save_writes_console_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut harness = harness_with(&[]);
    let mut handlers = Handlers::new();
    let mut input = ScriptedInput::default();
    harness.console.append_line("line one");
    harness.console.append_line("line two");
    harness.dispatch(Action::SaveFile(path.clone()), &mut input, &mut handlers);

    let written = formdeck::fileio::read_lines(&path).unwrap();
    assert_eq!(written, vec!["line one", "line two"]);
    assert!(harness.status.starts_with("Saved:"));
}

#[test]
fn test_options_select_first_and_remove() {
    let def = AppDef {
        options: vec!["a".into(), "b".into(), "c".into()],
        ..AppDef::default()
    };
    let mut harness = Harness::new(&def);
    assert_eq!(harness.options.selected(), Some("a"));

    harness.options.select(2);
    assert_eq!(harness.options.selected(), Some("c"));
    harness.options.remove(1);
    assert_eq!(harness.options.selected(), Some("c"));
    assert_eq!(harness.options.items().to_vec(), vec!["a", "c"]);

    harness.options.push("d");
    assert_eq!(harness.options.len(), 3);
}

#[test]
fn test_app_def_load_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.json");
    std::fs::write(
        &path,
        r#"{"title": "Inventory", "prompts": ["Item", "p-Code"], "options": ["warehouse"]}"#,
    )
    .unwrap();

    let def = AppDef::load(&path).unwrap();
    assert_eq!(def.title, "Inventory");
    assert_eq!(def.prompts.len(), 2);
    assert_eq!(def.extension_filter, ".txt");

    let harness = Harness::new(&def);
    assert!(harness.form.fields()[1].secret);
    assert_eq!(harness.form.label(1), "Code:");
}

#[test]
fn test_app_def_rejects_unknown_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{"titel": "typo"}"#).unwrap();
    assert!(AppDef::load(&path).is_err());
}
