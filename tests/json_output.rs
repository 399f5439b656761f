mod support;

use serde_json::Value;
use support::TestSpace;

fn parse_stdout(assert: assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).expect("stdout should be a JSON envelope")
}

#[test]
fn list_emits_a_versioned_envelope() {
    let space = TestSpace::new();
    space.cmd().args(["todo", "read book"]).assert().success();

    let envelope = parse_stdout(space.cmd().args(["list", "--json"]).assert().success());

    assert_eq!(envelope["schema_version"], "tsk.v1");
    assert_eq!(envelope["command"], "list");
    assert_eq!(envelope["status"], "success");
    assert_eq!(envelope["data"]["total"], 1);
    assert_eq!(envelope["data"]["tasks"][0]["kind"], "todo");
    assert_eq!(envelope["data"]["tasks"][0]["description"], "read book");
    assert_eq!(envelope["data"]["tasks"][0]["done"], false);
}

#[test]
fn deadline_data_carries_the_iso_date() {
    let space = TestSpace::new();

    let envelope = parse_stdout(
        space
            .cmd()
            .args(["deadline", "return book", "--by", "2019-10-15", "--json"])
            .assert()
            .success(),
    );

    assert_eq!(envelope["command"], "deadline");
    assert_eq!(envelope["data"]["task"]["kind"], "deadline");
    assert_eq!(envelope["data"]["task"]["due"], "2019-10-15");
}

#[test]
fn errors_emit_an_error_envelope_with_the_exit_code() {
    let space = TestSpace::new();
    space.cmd().args(["todo", "read book"]).assert().success();

    let envelope = parse_stdout(
        space
            .cmd()
            .args(["mark", "9", "--json"])
            .assert()
            .failure()
            .code(2),
    );

    assert_eq!(envelope["status"], "error");
    assert_eq!(envelope["error"]["code"], 2);
    assert_eq!(envelope["error"]["kind"], "user_error");
}

#[test]
fn load_warnings_appear_in_the_envelope() {
    let space = TestSpace::new();
    space.write_save_file("T | 0 | read book\nnot a task line\n");

    let envelope = parse_stdout(space.cmd().args(["list", "--json"]).assert().success());

    let warnings = envelope["warnings"].as_array().expect("warnings array");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0]
        .as_str()
        .unwrap()
        .contains("skipped 1 corrupt line(s)"));
}
