use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rolodex_testing::TestWorld;

#[test]
fn test_show_detail_with_both_controls() {
    let world = TestWorld::new();
    let result = world.run(&["show", "3"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    insta::assert_snapshot!(result.stdout, @r"
    Noah Walker
    noah.walker@example.com
    Toledo
    ----------------------------------------
    (419) 555-0190
    9164 Railroad St, Toledo
    Ohio, United States 43604
    Birthday: 04/09/1968

    Record 4 of 12  < Prev | Close | Next >
    ");
}

#[test]
fn test_show_json_reports_controls() {
    let world = TestWorld::new();
    let result = world.run(&["show", "0", "--format", "json"]).unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["name"], "Ava Thompson");
    assert_eq!(json["phone"], "(253) 555-0142");
    assert_eq!(json["birthday"], "02/14/1987");
    assert_eq!(json["controls"]["prev"], false);
    assert_eq!(json["controls"]["next"], true);
}

#[test]
fn test_show_index_is_relative_to_search_results() {
    let world = TestWorld::new();
    let result = world
        .run(&["show", "1", "--query", "john", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assert_eq!(json["name"], "John Carter");
    assert_eq!(json["index"], 1);
    assert_eq!(json["total"], 2);
    assert_eq!(json["controls"]["next"], false);
}

#[test]
fn test_show_out_of_range_fails() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("rolodex");
    world.configure_command(&mut cmd).args(["show", "12"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: index 12 is out of range for 12 records",
        ));
}

#[test]
fn test_show_in_empty_search_fails() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("rolodex");
    world
        .configure_command(&mut cmd)
        .args(["show", "0", "--query", "zzzznomatch"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range for 0 records"));
}
