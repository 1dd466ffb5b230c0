use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use rolodex_testing::{TestWorld, assertions};
use rolodex_types::Batch;

#[test]
fn test_list_shows_every_profile_in_order() {
    let world = TestWorld::new();
    let result = world.run(&["list", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr);

    let json = result.json().unwrap();
    assertions::assert_card_count(&json, 12).unwrap();
    assert_eq!(json["kind"], "cards");
    assert_eq!(json["total"], 12);
    assert_eq!(json["cards"][0]["name"], "Ava Thompson");
    assert_eq!(json["cards"][11]["name"], "Mason Price");
}

#[test]
fn test_list_query_filters_by_name() {
    let world = TestWorld::new();
    let result = world
        .run(&["list", "--query", "  JOHN ", "--format", "json"])
        .unwrap();
    assert!(result.success());

    let json = result.json().unwrap();
    assertions::assert_card_count(&json, 2).unwrap();
    assertions::assert_cards_match(&json, "john").unwrap();
    assert_eq!(json["query"], "john");
}

#[test]
fn test_list_without_match_shows_placeholder() {
    let world = TestWorld::new();

    let result = world
        .run(&["list", "-q", "zzzznomatch", "--format", "json"])
        .unwrap();
    assert!(result.success());
    assertions::assert_no_results(&result.json().unwrap()).unwrap();

    let mut cmd = cargo_bin_cmd!("rolodex");
    world
        .configure_command(&mut cmd)
        .args(["list", "--query", "zzzznomatch"]);
    cmd.assert()
        .success()
        .stdout(predicate::eq("No results found.\n"));
}

#[test]
fn test_list_plain_lines() {
    let world = TestWorld::new();
    let mut cmd = cargo_bin_cmd!("rolodex");
    world.configure_command(&mut cmd).arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "[0] Ava Thompson <ava.thompson@example.com> (Washington)\n",
        ))
        .stdout(predicate::str::contains(
            "[11] Mason Price <mason.price@example.com> (Utah)\n",
        ));
}

#[test]
fn test_unreadable_source_yields_empty_gallery() {
    let world = TestWorld::new();
    std::fs::write(world.batch_path(), "{ not json").unwrap();

    let result = world.run(&["list", "--format", "json"]).unwrap();
    assert!(result.success());
    assert_eq!(result.json().unwrap()["kind"], "empty");
    assert!(result.stderr.contains("Parse error"), "stderr: {}", result.stderr);
}

#[test]
fn test_empty_batch_is_not_an_error() {
    let world = TestWorld::with_batch(&Batch::new(Vec::new()));
    let mut cmd = cargo_bin_cmd!("rolodex");
    world.configure_command(&mut cmd).arg("list");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No profiles loaded."));
}
