use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RegistryRecord {
    pub(crate) name: String,
    pub(crate) merit_value: f64,
    pub(crate) must_implement: String,
}

#[derive(Debug)]
pub(crate) struct MeasurementRecord {
    pub(crate) name: String,
    pub(crate) successes: Option<u64>,
    pub(crate) attempts: Option<u64>,
    pub(crate) implemented: Option<String>,
}

pub(crate) fn parse_registry<R: Read>(reader: R) -> Result<Vec<RegistryRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RegistryRow>() {
        let row = record?;
        records.push(RegistryRecord {
            name: clean_name(&row.name),
            merit_value: row.merit_value,
            must_implement: row.must_implement,
        });
    }

    Ok(records)
}

pub(crate) fn parse_measurements<R: Read>(
    reader: R,
) -> Result<Vec<MeasurementRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<MeasurementRow>() {
        let row = record?;
        records.push(MeasurementRecord {
            name: clean_name(&row.name),
            successes: row.successes,
            attempts: row.attempts,
            implemented: row.implemented,
        });
    }

    Ok(records)
}

/// Interpret a mandatory flag cell. Anything but a recognizable boolean is `None`.
pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
struct RegistryRow {
    name: String,
    merit_value: f64,
    must_implement: String,
}

#[derive(Debug, Deserialize)]
struct MeasurementRow {
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    successes: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    attempts: Option<u64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    implemented: Option<String>,
}

fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn clean_name(value: &str) -> String {
    value.replace(['\u{feff}', '\u{200b}'], "").trim().to_string()
}
