//! Tolerant mapping from raw response payloads to canonical records.
//!
//! DESIGN
//! ======
//! The backend's envelope shape is not contractually fixed: the same logical
//! list can arrive at the payload root, under `data`, or under a named key,
//! and field names mix snake_case, camelCase, and Italian legacy aliases.
//! Every probe here is an ordered list of typed accessor attempts with
//! first-match-wins resolution. All entry points are total: any input maps
//! to a record, an empty list, or an explicit absence — never a panic.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::Value;

use super::types::{Driver, LeagueDetail, LeagueSummary};

const LEAGUE_ARRAY_PATHS: &[&[&str]] = &[&[], &["leagues"], &["data"], &["data", "leagues"]];
const DRIVER_ARRAY_PATHS: &[&[&str]] = &[&[], &["drivers"], &["data"], &["data", "drivers"]];

const LEAGUE_ID_ALIASES: &[&str] = &["league_id", "id", "leagueId", "idLega"];
const LEAGUE_NAME_ALIASES: &[&str] = &["league_name", "name", "nome"];

/// Extract league summaries from a league-listing payload.
///
/// The first array found at the payload root, `leagues`, `data`, or
/// `data.leagues` is used; no array at any location yields an empty list.
/// Elements map 1:1 in order, with positional fallbacks for missing ids
/// (`index`) and names (`"Lega {index+1}"`).
pub fn normalize_league_summaries(payload: &Value) -> Vec<LeagueSummary> {
    let Some(raw) = first_array(payload, LEAGUE_ARRAY_PATHS) else {
        return Vec::new();
    };

    raw.iter()
        .enumerate()
        .map(|(index, item)| LeagueSummary {
            id: text_field(item, LEAGUE_ID_ALIASES).unwrap_or_else(|| index.to_string()),
            name: text_field(item, LEAGUE_NAME_ALIASES)
                .unwrap_or_else(|| format!("Lega {}", index + 1)),
        })
        .collect()
}

/// Extract the league detail record, or `None` when no candidate source
/// carries a usable id.
///
/// The source object is the first usable of: element 0 of the payload as an
/// array, element 0 of `data` as an array, `data` itself, the payload itself.
pub fn normalize_league_detail(payload: &Value) -> Option<LeagueDetail> {
    let source = detail_source(payload)?;
    let id = text_field(source, LEAGUE_ID_ALIASES)?;

    Some(LeagueDetail {
        id,
        name: text_field(source, LEAGUE_NAME_ALIASES).unwrap_or_else(|| "Lega".to_owned()),
        description: text_field(source, &["description", "descrizione"]).unwrap_or_default(),
        is_super_user: super_user_flag(source),
        created_at: time_field(source, &["created_at", "createdAt"]),
        updated_at: time_field(source, &["updated_at", "updatedAt"]),
    })
}

/// Extract the driver roster from a driver-listing payload.
///
/// Array location search mirrors [`normalize_league_summaries`] with the
/// `drivers` key; unknown teams read `"N/D"` and unnamed drivers
/// `"Pilota {index+1}"`.
pub fn normalize_drivers(payload: &Value) -> Vec<Driver> {
    let Some(raw) = first_array(payload, DRIVER_ARRAY_PATHS) else {
        return Vec::new();
    };

    raw.iter()
        .enumerate()
        .map(|(index, item)| Driver {
            id: text_field(item, &["driver_id", "id", "driverId", "numero", "number"])
                .unwrap_or_else(|| index.to_string()),
            name: text_field(item, &["driver_name", "name", "nome"])
                .unwrap_or_else(|| format!("Pilota {}", index + 1)),
            team: text_field(item, &["team_name", "team", "scuderia"])
                .unwrap_or_else(|| "N/D".to_owned()),
            number: text_field(item, &["driver_number", "number", "numero", "id"])
                .unwrap_or_default(),
        })
        .collect()
}

fn array_at<'a>(payload: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    let mut value = payload;
    for key in path {
        value = value.get(key)?;
    }
    value.as_array()
}

fn first_array<'a>(payload: &'a Value, paths: &[&[&str]]) -> Option<&'a Vec<Value>> {
    paths.iter().find_map(|path| array_at(payload, path))
}

fn detail_source(payload: &Value) -> Option<&Value> {
    let candidates = [
        payload.as_array().and_then(|items| items.first()),
        payload
            .get("data")
            .and_then(Value::as_array)
            .and_then(|items| items.first()),
        payload.get("data"),
        Some(payload),
    ];
    candidates.into_iter().flatten().find(|value| is_truthy(value))
}

/// First alias that resolves to a scalar, rendered the way JavaScript's
/// `String()` would render it. Null fields and non-scalar values advance to
/// the next alias.
fn text_field(source: &Value, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .filter_map(|alias| source.get(alias))
        .filter(|value| !value.is_null())
        .find_map(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_text(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[allow(clippy::float_cmp)]
fn number_text(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(int) = number.as_u64() {
        return int.to_string();
    }
    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 => format!("{float:.0}"),
        _ => number.to_string(),
    }
}

/// The role flag compares the numerically-coerced field against exactly 1,
/// matching the backend contract as observed: `"1"` and `true` count, any
/// other value (including 2 and non-numeric text) does not.
#[allow(clippy::float_cmp)]
fn super_user_flag(source: &Value) -> bool {
    ["super_user", "is_super_user"]
        .iter()
        .filter_map(|alias| source.get(alias))
        .find(|value| !value.is_null())
        .is_some_and(|value| js_number(value) == 1.0)
}

/// JavaScript `Number()` coercion for the value shapes the backend emits.
/// Unsupported shapes coerce to NaN, which no comparison ever matches.
fn js_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(flag) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        _ => f64::NAN,
    }
}

fn time_field(source: &Value, aliases: &[&str]) -> Option<i64> {
    aliases
        .iter()
        .filter_map(|alias| source.get(alias))
        .filter(|value| !value.is_null())
        .find_map(unix_seconds)
}

/// Integer-compatible unix-seconds coercion from a number or numeric string.
/// Anything that would coerce to NaN or a fractional value is absent.
fn unix_seconds(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            integer_from_float(number.as_f64()?)
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| integer_from_float(trimmed.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
fn integer_from_float(float: f64) -> Option<i64> {
    if float.is_finite()
        && float.fract() == 0.0
        && float >= i64::MIN as f64
        && float <= i64::MAX as f64
    {
        Some(float as i64)
    } else {
        None
    }
}

/// JavaScript truthiness for source-candidate selection.
#[allow(clippy::float_cmp)]
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
