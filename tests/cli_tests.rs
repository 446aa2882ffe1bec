use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_data, setup_sandbox, temp_out};

#[test]
fn test_init_creates_every_table() {
    let sb = setup_sandbox("init_tables");

    sb.cmd()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("gymbook initialization completed!"));

    for name in [
        "gym_lessons.csv",
        "gym_requests.csv",
        "gym_students.csv",
        "gym_categories.csv",
        "gym_coach_events.csv",
    ] {
        assert!(sb.file(name).exists(), "{name} missing");
    }

    let cats = fs::read_to_string(sb.file("gym_categories.csv")).unwrap();
    assert_eq!(cats, "category\nMA Body Shaping\nS Specialty\n");

    let students = fs::read_to_string(sb.file("gym_students.csv")).unwrap();
    assert_eq!(students, "name,purchased_count,bound_category,note\n");
}

#[test]
fn test_coach_commands_need_passphrase() {
    let sb = setup_sandbox("gate_missing");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.cmd()
        .args(["student", "list"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    sb.cmd()
        .args(["--passphrase", "wrong", "report"])
        .assert()
        .failure()
        .stderr(contains("Access denied"));

    sb.cmd()
        .args(["student", "list"])
        .env("GYMBOOK_PASSPHRASE", "1234")
        .assert()
        .success();
}

#[test]
fn test_lesson_add_and_day_view() {
    let sb = setup_sandbox("day_view");
    init_with_data(&sb);

    sb.cmd()
        .args(["day", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("Lessons on 2025-03-10 (Monday)"))
        .stdout(contains("Amy"))
        .stdout(contains("09:00"))
        .stdout(contains("18:30"))
        .stdout(contains("Free slots: 07:00 08:00 10:00"));

    sb.cmd()
        .args(["day", "2025-03-11"])
        .assert()
        .success()
        .stdout(contains("No lessons booked for this day."));
}

#[test]
fn test_lesson_uses_student_category() {
    let sb = setup_sandbox("lesson_default_category");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.coach()
        .args(["student", "add", "Ben", "--category", "S Specialty"])
        .assert()
        .success();

    sb.coach()
        .args(["lesson", "add", "2025-04-01", "08:15", "Ben"])
        .assert()
        .success()
        .stdout(contains("Booked Ben on 2025-04-01 at 08:15 (S Specialty)."));

    let lessons = fs::read_to_string(sb.file("gym_lessons.csv")).unwrap();
    assert!(lessons.contains("2025-04-01,08:15,Ben,S Specialty,"));
}

#[test]
fn test_lesson_rejects_unknown_student_and_category() {
    let sb = setup_sandbox("lesson_rejects");
    init_with_data(&sb);

    sb.coach()
        .args(["lesson", "add", "2025-03-10", "10:00", "Nobody"])
        .assert()
        .failure()
        .stderr(contains("Unknown student: Nobody"));

    sb.coach()
        .args([
            "lesson",
            "add",
            "2025-03-10",
            "10:00",
            "Amy",
            "--category",
            "Underwater Chess",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown category 'Underwater Chess'"));

    sb.coach()
        .args(["lesson", "add", "2025-03-10", "25:00", "Amy"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));
}

#[test]
fn test_lesson_edit_and_delete_by_day_index() {
    let sb = setup_sandbox("lesson_edit_del");
    init_with_data(&sb);

    // #2 of 2025-03-10 is the 18:30 lesson
    sb.coach()
        .args(["lesson", "edit", "2025-03-10", "2", "--time", "19:00"])
        .assert()
        .success()
        .stdout(contains("at 19:00"));

    sb.coach()
        .args(["lesson", "del", "2025-03-10", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted Amy at 09:00 on 2025-03-10."));

    sb.cmd()
        .args(["day", "2025-03-10"])
        .assert()
        .success()
        .stdout(contains("19:00"))
        .stdout(contains("18:30").not());

    sb.coach()
        .args(["lesson", "del", "2025-03-10", "5", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No row #5 for 2025-03-10"));
}

#[test]
fn test_lesson_list_filters_by_period() {
    let sb = setup_sandbox("lesson_list_period");
    init_with_data(&sb);

    sb.coach()
        .args(["lesson", "list", "--period", "2025-03-11:2025-03-31"])
        .assert()
        .success()
        .stdout(contains("2025-03-12"))
        .stdout(contains("2025-03-10").not())
        .stdout(contains("1 lesson(s)"));
}

#[test]
fn test_balance_counts_every_booking() {
    let sb = setup_sandbox("balance");
    init_with_data(&sb);

    sb.cmd()
        .args(["balance", "Amy"])
        .assert()
        .success()
        .stdout(contains("purchased 10"))
        .stdout(contains("used 3"))
        .stdout(contains("7"));

    sb.cmd()
        .args(["balance", "Zoe"])
        .assert()
        .failure()
        .stderr(contains("Unknown student: Zoe"));
}

#[test]
fn test_student_update_and_negative_balance() {
    let sb = setup_sandbox("student_update");
    init_with_data(&sb);

    sb.coach()
        .args(["student", "update", "Amy", "--purchased", "2"])
        .assert()
        .success()
        .stdout(contains("Updated Amy: 2 credits"));

    sb.cmd()
        .args(["balance", "Amy"])
        .assert()
        .success()
        .stdout(contains("used 3"))
        .stdout(contains("booked beyond the purchased credits"));
}

#[test]
fn test_student_duplicate_name_warns() {
    let sb = setup_sandbox("student_duplicate");
    init_with_data(&sb);

    sb.coach()
        .args(["student", "add", "Amy", "--purchased", "4"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    // the first row still wins
    sb.cmd()
        .args(["balance", "Amy"])
        .assert()
        .success()
        .stdout(contains("purchased 10"));
}

#[test]
fn test_request_add_is_public_and_list_is_not() {
    let sb = setup_sandbox("requests");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.cmd()
        .args([
            "request",
            "add",
            "2025-05-02",
            "10:00",
            "Carla",
            "--message",
            "Could we move to the afternoon?",
        ])
        .assert()
        .success()
        .stdout(contains("Request sent"));

    sb.cmd().args(["request", "list"]).assert().failure();

    sb.coach()
        .args(["request", "list"])
        .assert()
        .success()
        .stdout(contains("Carla"))
        .stdout(contains("Could we move to the afternoon?"))
        .stdout(contains("1 request(s)"));

    // requests never become lessons
    let lessons = fs::read_to_string(sb.file("gym_lessons.csv")).unwrap();
    assert_eq!(lessons, "date,time,student,category,note\n");

    sb.coach()
        .args(["request", "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Cleared 1 request(s)."));
}

#[test]
fn test_request_needs_a_name() {
    let sb = setup_sandbox("request_name");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.cmd()
        .args(["request", "add", "2025-05-02", "10:00", "  "])
        .assert()
        .failure()
        .stderr(contains("Please enter your name."));
}

#[test]
fn test_category_add_list_del() {
    let sb = setup_sandbox("categories");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.coach()
        .args(["category", "add", "Pilates"])
        .assert()
        .success()
        .stdout(contains("Added category 'Pilates'."));

    sb.coach()
        .args(["category", "add", "Pilates"])
        .assert()
        .success()
        .stdout(contains("already exists"));

    sb.coach()
        .args(["category", "add", "nan"])
        .assert()
        .failure();

    sb.cmd()
        .args(["category", "list"])
        .assert()
        .success()
        .stdout(contains("Pilates"))
        .stdout(contains("#D32F2F"))
        .stdout(contains("#1976D2"));

    sb.coach()
        .args(["category", "del", "Pilates"])
        .assert()
        .success()
        .stdout(contains("Removed category 'Pilates'."));
}

#[test]
fn test_event_add_list_del() {
    let sb = setup_sandbox("events");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.coach()
        .args(["event", "add", "2025-06-03", "Dentist", "--time", "14:00", "--kind", "other"])
        .assert()
        .success();

    sb.coach()
        .args(["event", "add", "2025-06-03", "Vacation"])
        .assert()
        .success()
        .stdout(contains("Added day-off 'Vacation' on 2025-06-03 (all day)."));

    sb.coach()
        .args(["event", "list", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(contains("Vacation"))
        .stdout(contains("Dentist"));

    // all-day events come first, so #1 is the vacation
    sb.coach()
        .args(["event", "del", "2025-06-03", "1"])
        .assert()
        .success()
        .stdout(contains("Deleted 'Vacation' on 2025-06-03."));
}

#[test]
fn test_calendar_json_for_widget() {
    let sb = setup_sandbox("calendar_json");
    init_with_data(&sb);

    sb.coach()
        .args(["event", "add", "2025-03-11", "Day off"])
        .assert()
        .success();

    sb.cmd()
        .args(["calendar", "--json", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("\"title\": \"Amy\""))
        .stdout(contains("\"start\": \"2025-03-10T09:00:00\""))
        .stdout(contains("\"end\": \"2025-03-10T10:00:00\""))
        .stdout(contains("\"backgroundColor\": \"#FFFFFF\""))
        .stdout(contains("\"borderColor\": \"#D32F2F\""))
        .stdout(contains("\"start\": \"2025-03-11\""))
        .stdout(contains("\"allDay\": true"));

    let out = temp_out("calendar_json", "json");
    sb.cmd()
        .args(["calendar", "--json", "--file", &out])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    // 3 lessons, 1 coach event, 5 built-in holidays
    assert_eq!(entries.len(), 9);
    assert!(
        entries
            .iter()
            .any(|e| e["title"] == "New Year's Day" && e["display"] == "block")
    );
}

#[test]
fn test_calendar_text_agenda() {
    let sb = setup_sandbox("calendar_text");
    init_with_data(&sb);

    sb.cmd()
        .args(["calendar", "--period", "2025-03-12"])
        .assert()
        .success()
        .stdout(contains("07:00-08:00"))
        .stdout(contains("[lesson]"))
        .stdout(contains("09:00-10:00").not());
}

#[test]
fn test_report_counts_per_month() {
    let sb = setup_sandbox("report");
    init_with_data(&sb);

    sb.coach()
        .args(["report"])
        .assert()
        .success()
        .stdout(contains("Monthly lesson report"))
        .stdout(contains("2025-03"))
        .stdout(contains("MA Body Shaping"));
}

#[test]
fn test_backup_export_reset_import() {
    let sb = setup_sandbox("backup_cli");
    init_with_data(&sb);
    let before = fs::read_to_string(sb.file("gym_lessons.csv")).unwrap();

    let archive = temp_out("backup_cli", "zip");
    sb.coach()
        .args(["backup", "export", "--file", &archive])
        .assert()
        .success()
        .stdout(contains("Backup written to"));

    sb.coach()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Removed 5 table file(s)"));

    sb.coach()
        .args(["backup", "import", "--file", &archive, "--yes"])
        .assert()
        .success()
        .stdout(contains("Restored gym_lessons.csv"));

    let after = fs::read_to_string(sb.file("gym_lessons.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_invalid_date_is_reported() {
    let sb = setup_sandbox("invalid_date");
    sb.cmd().args(["--test", "init"]).assert().success();

    sb.cmd()
        .args(["day", "2025-13-40"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_config_print_hides_passphrase_from_students() {
    let sb = setup_sandbox("config_print");

    sb.cmd()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("passphrase"))
        .stdout(contains("1234").not());

    sb.coach()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("1234"));
}

#[test]
fn test_config_edit_needs_passphrase() {
    let sb = setup_sandbox("config_edit");

    sb.cmd()
        .args(["config", "--edit", "--editor", "true"])
        .assert()
        .failure()
        .stderr(contains("Error: Access denied"));
}
