// used for timestamps and their formatting
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, SecondsFormat, Utc};
// used for parsing locale tags
use std::str::FromStr;
// used to print out readable forms of a locale
use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::collection::sort;
use crate::combinator::partial1_ref;
use crate::error::{FpkitError, Result};
use crate::record::Props;
use crate::settings::Settings;

// naive forms are read as UTC
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anything that can be turned into an instant. Absent inputs (`None`, null,
/// the empty string) become the current instant.
pub trait IntoDate {
    fn into_date(self) -> Result<DateTime<Utc>>;
}

impl IntoDate for DateTime<Utc> {
    fn into_date(self) -> Result<DateTime<Utc>> {
        Ok(self)
    }
}
impl IntoDate for &DateTime<Utc> {
    fn into_date(self) -> Result<DateTime<Utc>> {
        Ok(*self)
    }
}
impl IntoDate for DateTime<FixedOffset> {
    fn into_date(self) -> Result<DateTime<Utc>> {
        Ok(self.with_timezone(&Utc))
    }
}
impl IntoDate for NaiveDateTime {
    fn into_date(self) -> Result<DateTime<Utc>> {
        Ok(self.and_utc())
    }
}
impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<DateTime<Utc>> {
        Ok(self.and_time(NaiveTime::MIN).and_utc())
    }
}
// epoch milliseconds
impl IntoDate for i64 {
    fn into_date(self) -> Result<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self).ok_or(FpkitError::DateOutOfRange(self))
    }
}
// only the empty string is absent, whitespace is an invalid date
impl IntoDate for &str {
    fn into_date(self) -> Result<DateTime<Utc>> {
        if self.is_empty() { Ok(Utc::now()) } else { parse(self) }
    }
}
impl IntoDate for &String {
    fn into_date(self) -> Result<DateTime<Utc>> {
        self.as_str().into_date()
    }
}
impl IntoDate for String {
    fn into_date(self) -> Result<DateTime<Utc>> {
        self.as_str().into_date()
    }
}
impl IntoDate for &Value {
    fn into_date(self) -> Result<DateTime<Utc>> {
        match self {
            Value::Null => Ok(Utc::now()),
            Value::String(s) => s.into_date(),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(millis), _) => millis.into_date(),
                (None, Some(millis)) if millis.is_finite() => (millis.trunc() as i64).into_date(),
                _ => Err(FpkitError::InvalidDate { input: n.to_string() }),
            },
            other => Err(FpkitError::InvalidDate { input: other.to_string() }),
        }
    }
}
impl IntoDate for Value {
    fn into_date(self) -> Result<DateTime<Utc>> {
        (&self).into_date()
    }
}
impl<T: IntoDate> IntoDate for Option<T> {
    fn into_date(self) -> Result<DateTime<Utc>> {
        match self {
            Some(value) => value.into_date(),
            None => Ok(Utc::now()),
        }
    }
}

fn parse(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    if let Ok(moment) = DateTime::<FixedOffset>::parse_from_rfc3339(trimmed) {
        return moment.into_date();
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(moment) = NaiveDateTime::parse_from_str(trimmed, format) {
            return moment.into_date();
        }
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return day.into_date();
    }
    debug!(input, "rejected date input");
    Err(FpkitError::InvalidDate { input: input.to_owned() })
}

pub fn date(value: impl IntoDate) -> Result<DateTime<Utc>> {
    value.into_date()
}

/// Epoch milliseconds.
pub fn time(value: impl IntoDate) -> Result<i64> {
    Ok(date(value)?.timestamp_millis())
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2023-11-15T00:33:12.000Z`.
pub fn iso(value: impl IntoDate) -> Result<String> {
    Ok(date(value)?.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    EnUs,
    EnGb,
    DeDe,
    FrFr,
    SvSe,
}

impl Locale {
    pub fn tag(self) -> &'static str {
        match self {
            Locale::EnUs => "en-US",
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
            Locale::FrFr => "fr-FR",
            Locale::SvSe => "sv-SE",
        }
    }
    // date and time with seconds, the way each locale writes them
    fn pattern(self) -> &'static str {
        match self {
            Locale::EnUs => "%-m/%-d/%Y, %-I:%M:%S %p",
            Locale::EnGb => "%d/%m/%Y, %H:%M:%S",
            Locale::DeDe => "%-d.%-m.%Y, %H:%M:%S",
            Locale::FrFr => "%d/%m/%Y %H:%M:%S",
            Locale::SvSe => "%Y-%m-%d %H:%M:%S",
        }
    }
}
impl FromStr for Locale {
    type Err = FpkitError;
    fn from_str(tag: &str) -> Result<Locale> {
        match tag.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en" | "en-us" => Ok(Locale::EnUs),
            "en-gb" => Ok(Locale::EnGb),
            "de" | "de-de" => Ok(Locale::DeDe),
            "fr" | "fr-fr" => Ok(Locale::FrFr),
            "sv" | "sv-se" => Ok(Locale::SvSe),
            _ => Err(FpkitError::UnknownLocale(tag.to_owned())),
        }
    }
}
impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// How [`locale`] renders an instant: which conventions, at which offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleOptions {
    pub locale: Locale,
    pub offset: FixedOffset,
}

impl LocaleOptions {
    pub fn new(tag: &str, utc_offset_minutes: i32) -> Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(FpkitError::InvalidOffset(utc_offset_minutes))?;
        Ok(Self { locale: tag.parse()?, offset })
    }
}
impl Default for LocaleOptions {
    fn default() -> Self {
        Self { locale: Locale::EnUs, offset: Utc.fix() }
    }
}

pub fn locale(value: impl IntoDate, options: &LocaleOptions) -> Result<String> {
    let local = date(value)?.with_timezone(&options.offset);
    Ok(local.format(options.locale.pattern()).to_string())
}

/// [`locale`] with the options found in `settings`.
pub fn locale_default(value: impl IntoDate, settings: &Settings) -> Result<String> {
    locale(value, &settings.locale_options()?)
}

fn ordered(a: i64, b: i64, asc: bool) -> i64 {
    if asc { a - b } else { b - a }
}

/// Comparator on the instant stored under `prop`: newest first, or oldest
/// first when `asc` is set. A missing property reads as now.
pub fn compare_by_prop<T: Props>(prop: &str, asc: bool) -> impl Fn(&T, &T) -> Result<i64> + use<T> {
    let prop = prop.to_owned();
    move |a: &T, b: &T| -> Result<i64> { Ok(ordered(time(a.prop(&prop))?, time(b.prop(&prop))?, asc)) }
}

/// A sorter returning a new, stably ordered Vec by the instant under `prop`.
/// Each item's instant is resolved once before sorting.
pub fn sort_by_prop<T: Props + Clone>(prop: &str, asc: bool) -> impl Fn(&[T]) -> Result<Vec<T>> + use<T> {
    let prop = prop.to_owned();
    let by_instant = partial1_ref(sort::<(i64, T), _>, move |(a, _): &(i64, T), (b, _): &(i64, T)| {
        ordered(*a, *b, asc).cmp(&0)
    });
    move |items: &[T]| -> Result<Vec<T>> {
        let keyed = items
            .iter()
            .map(|item| -> Result<(i64, T)> { Ok((time(item.prop(&prop))?, item.clone())) })
            .collect::<Result<Vec<_>>>()?;
        Ok(by_instant(&keyed).into_iter().map(|(_, item)| item).collect())
    }
}
