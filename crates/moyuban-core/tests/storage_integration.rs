//! Integration tests for settings persistence through the SQLite store.

use chrono::NaiveDate;
use moyuban_core::storage::{load_settings_on, save_settings, SETTINGS_KEY};
use moyuban_core::{Board, Dashboard, Database, Settings, SettingsStore};
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use serde_json::json;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

#[test]
fn fresh_database_yields_default_record() {
    let db = Database::open_memory().unwrap();
    assert_eq!(load_settings_on(&db, today()), Settings::defaults_on(today()));
}

#[test]
fn corrupt_blob_yields_default_record() {
    let db = Database::open_memory().unwrap();
    db.kv_set(SETTINGS_KEY, "definitely not json").unwrap();
    assert_eq!(load_settings_on(&db, today()), Settings::defaults_on(today()));
}

#[test]
fn saved_settings_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moyuban.db");

    {
        let db = Database::open_at(&path).unwrap();
        let mut board = Board::open_on(db, today());
        let mut next = (*board.settings()).clone();
        next.salary_day = 5;
        next.weekdays = "1-6".parse().unwrap();
        next.add_custom("Trip", NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
            .unwrap();
        board.save(next).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let loaded = load_settings_on(&db, today());
    assert_eq!(loaded.salary_day, 5);
    assert_eq!(loaded.weekdays.to_string(), "1-6");
    assert_eq!(loaded.custom.len(), 1);
}

#[test]
fn stored_blob_uses_popup_keys() {
    let db = Database::open_memory().unwrap();
    save_settings(&db, Settings::defaults_on(today())).unwrap();
    let blob = db.get(SETTINGS_KEY).unwrap().unwrap();
    assert_eq!(blob["activeEnd"], "11:00");
    assert_eq!(blob["salaryDay"], 20);
    assert_eq!(blob["weekdays"], "1-5");
}

#[test]
fn partially_valid_blob_keeps_good_fields() {
    let db = Database::open_memory().unwrap();
    db.set(
        SETTINGS_KEY,
        &json!({
            "start": "08:00",
            "end": "not a time",
            "gender": "female",
            "refresh": 2
        }),
    )
    .unwrap();
    let loaded = load_settings_on(&db, today());
    assert_eq!(loaded.start.to_string(), "08:00");
    assert_eq!(loaded.end.to_string(), "18:00");
    assert_eq!(loaded.refresh, 5);
}

#[test]
fn huge_stored_salary_day_still_renders() {
    let db = Database::open_memory().unwrap();
    db.set(SETTINGS_KEY, &json!({ "salaryDay": 1_000_000_000u32 }))
        .unwrap();
    let settings = load_settings_on(&db, today());
    assert_eq!(settings.salary_day, 1_000_000_000);

    let now = today().and_hms_opt(12, 0, 0).unwrap();
    let board = Dashboard::compute(now, &settings, &mut Mcg128Xsl64::seed_from_u64(3));
    let month_end = NaiveDate::from_ymd_opt(2024, 9, 30).unwrap();
    assert_eq!(board.payday.target, month_end.and_hms_opt(0, 0, 0).unwrap());
}
