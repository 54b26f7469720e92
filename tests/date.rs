use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use fpkit::FpkitError;
use fpkit::date::{compare_by_prop, date, iso, locale, locale_default, sort_by_prop, time, Locale, LocaleOptions};
use fpkit::settings::Settings;
use serde_json::{Value, json};

const FIXED: &str = "2023-11-15T00:33:12.000Z";

fn fixed() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 11, 15, 0, 33, 12).unwrap()
}

#[test]
fn date_passes_instants_through() {
    assert_eq!(date(fixed()).unwrap(), fixed());
    let shifted = FixedOffset::west_opt(6 * 3600).unwrap().from_utc_datetime(&fixed().naive_utc());
    assert_eq!(date(shifted).unwrap(), fixed());
}

#[test]
fn date_parses_strings() {
    assert_eq!(iso("1234-01-02T03:04:05Z").unwrap(), "1234-01-02T03:04:05.000Z");
    assert_eq!(iso("2023-11-14T18:33:12-06:00").unwrap(), FIXED);
    assert_eq!(iso("2023-11-15T00:33:12").unwrap(), FIXED, "naive reads as UTC");
    assert_eq!(iso("2023-11-15 00:33:12.250").unwrap(), "2023-11-15T00:33:12.250Z");
    assert_eq!(iso("2023-11-15").unwrap(), "2023-11-15T00:00:00.000Z");
    assert_eq!(iso(NaiveDate::from_ymd_opt(2023, 11, 15).unwrap()).unwrap(), "2023-11-15T00:00:00.000Z");
}

#[test]
fn date_rejects_garbage() {
    assert_eq!(date("not a date"), Err(FpkitError::InvalidDate { input: "not a date".into() }));
    assert!(matches!(date(&json!({"at": 1})), Err(FpkitError::InvalidDate { .. })));
    assert_eq!(date(i64::MAX), Err(FpkitError::DateOutOfRange(i64::MAX)));
}

#[test]
fn absent_inputs_read_as_now() {
    let before = Utc::now();
    for moment in [date(None::<i64>), date(Value::Null), date(""), date(json!(""))] {
        let moment = moment.unwrap();
        assert!(moment >= before && moment <= Utc::now());
    }
}

#[test]
fn whitespace_is_not_absent() {
    assert_eq!(date("   "), Err(FpkitError::InvalidDate { input: "   ".into() }));
    assert!(matches!(date(&json!("\t")), Err(FpkitError::InvalidDate { .. })));
}

#[test]
fn time_is_epoch_milliseconds() {
    assert_eq!(time(8392000).unwrap(), 8392000);
    assert_eq!(time(&json!(8392000)).unwrap(), 8392000);
    assert_eq!(time(&json!(8392000.9)).unwrap(), 8392000, "fractions truncate");
    assert_eq!(time(FIXED).unwrap(), 1700008392000);
    assert_eq!(time(0).unwrap(), 0, "zero is the epoch, not now");
}

#[test]
fn iso_renders_millisecond_utc() {
    assert_eq!(iso(1700008392000).unwrap(), FIXED);
    assert_eq!(iso(fixed()).unwrap(), FIXED);
}

#[test]
fn locale_uses_locale_conventions_and_offset() {
    let chicago = LocaleOptions::new("en-us", -6 * 60).unwrap();
    assert_eq!(locale(fixed(), &chicago).unwrap(), "11/14/2023, 6:33:12 PM");
    let berlin = LocaleOptions::new("de-DE", 60).unwrap();
    assert_eq!(locale(fixed(), &berlin).unwrap(), "15.11.2023, 01:33:12");
    let london = LocaleOptions::new("en_GB", 0).unwrap();
    assert_eq!(locale(FIXED, &london).unwrap(), "15/11/2023, 00:33:12");
    assert_eq!(locale(FIXED, &LocaleOptions::default()).unwrap(), "11/15/2023, 12:33:12 AM");
}

#[test]
fn locale_options_validate() {
    assert_eq!(LocaleOptions::new("xx-YY", 0), Err(FpkitError::UnknownLocale("xx-YY".into())));
    assert_eq!(LocaleOptions::new("en-US", 24 * 60), Err(FpkitError::InvalidOffset(24 * 60)));
    assert_eq!("SV-se".parse::<Locale>().unwrap(), Locale::SvSe);
    assert_eq!(Locale::FrFr.to_string(), "fr-FR");
}

#[test]
fn locale_default_follows_settings() {
    let settings = Settings { locale: "sv-SE".into(), utc_offset_minutes: 120 };
    assert_eq!(locale_default(FIXED, &settings).unwrap(), "2023-11-15 02:33:12");
}

#[test]
fn compare_by_prop_defaults_to_descending() {
    let low = json!({"foo": 123432});
    let high = json!({"foo": 542432});
    let descending = compare_by_prop("foo", false);
    assert_eq!(descending(&low, &low).unwrap(), 0);
    assert!(descending(&high, &low).unwrap() < 0);
    assert!(descending(&low, &high).unwrap() > 0);
    let ascending = compare_by_prop("foo", true);
    assert_eq!(ascending(&high, &high).unwrap(), 0);
    assert!(ascending(&low, &high).unwrap() < 0);
    assert!(ascending(&high, &low).unwrap() > 0);
}

#[test]
fn compare_by_prop_reads_mixed_inputs() {
    let compare = compare_by_prop("at", true);
    let early = json!({"at": "2010-01-01"});
    let late = json!({"at": 1700008392000i64});
    assert!(compare(&early, &late).unwrap() < 0);
    assert!(compare(&json!({"at": "garbage"}), &late).is_err());
}

#[test]
fn sort_by_prop_orders_a_copy() {
    let items = vec![json!({"foo": 3}), json!({"foo": 1}), json!({"foo": 2})];
    let ascending = sort_by_prop("foo", true)(&items).unwrap();
    assert_eq!(ascending, vec![json!({"foo": 1}), json!({"foo": 2}), json!({"foo": 3})]);
    let descending = sort_by_prop("foo", false)(&items).unwrap();
    assert_eq!(descending, vec![json!({"foo": 3}), json!({"foo": 2}), json!({"foo": 1})]);
    assert_eq!(items, vec![json!({"foo": 3}), json!({"foo": 1}), json!({"foo": 2})], "input untouched");
}

#[test]
fn sort_by_prop_handles_iso_strings_and_stays_stable() {
    let items = vec![
        json!({"foo": "1970-01-01T14:50:15.325Z", "n": 1}),
        json!({"foo": 33415325, "n": 2}),
        json!({"foo": 13415325, "n": 3}),
        json!({"foo": "1970-01-01T14:50:15.325Z", "n": 4}),
    ];
    let sorted = sort_by_prop("foo", false)(&items).unwrap();
    let order: Vec<i64> = sorted.iter().map(|item| item["n"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![1, 4, 2, 3]);
}

#[test]
fn sort_by_prop_surfaces_bad_dates() {
    let items = vec![json!({"foo": 1}), json!({"foo": true})];
    assert!(matches!(sort_by_prop("foo", true)(&items), Err(FpkitError::InvalidDate { .. })));
}
