use crate::report::*;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;

/// The settings document of a survey, as written by hand.
///
/// Codes may be given as numbers or as strings: JSON only allows strings as keys.
#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveySettings {
    #[serde(
        rename = "excludeIds",
        alias = "exclude_ids",
        default,
        deserialize_with = "object_or_empty"
    )]
    pub exclude_ids: JSMap<String, JSValue>,
    #[serde(
        rename = "suspiciousIds",
        alias = "suspicious_ids",
        default,
        deserialize_with = "object_or_empty"
    )]
    pub suspicious_ids: JSMap<String, JSValue>,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub weights: JSMap<String, JSValue>,
}

// An empty list or null stands for "nothing to apply".
fn object_or_empty<'de, D>(deserializer: D) -> Result<JSMap<String, JSValue>, D::Error>
where
    D: Deserializer<'de>,
{
    match JSValue::deserialize(deserializer)? {
        JSValue::Object(m) => Ok(m),
        JSValue::Null => Ok(JSMap::new()),
        JSValue::Array(l) if l.is_empty() => Ok(JSMap::new()),
        x => Err(serde::de::Error::custom(format!(
            "expected an object or an empty list, got {}",
            x
        ))),
    }
}

/// The settings, checked and converted to the types of the survey library.
#[derive(PartialEq, Debug, Clone, Default)]
pub struct ValidSettings {
    pub exclude_ids: Exclusions,
    pub suspicious_ids: Exclusions,
    pub weights: Reweighting,
}

/// Reads the settings file. A missing file gives empty settings.
pub fn read_settings(path: &str) -> ReportResult<SurveySettings> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("read_settings: no settings file at {}, using defaults", path);
            return Ok(SurveySettings::default());
        }
        Err(e) => {
            return Err(e).context(OpeningFileSnafu {
                path: path.to_string(),
            })
        }
    };
    debug!("read_settings: content: {:?}", contents);
    let settings: SurveySettings =
        serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu {
            path: path.to_string(),
        })?;
    info!("read_settings: {:?}", settings);
    Ok(settings)
}

pub fn validate_settings(settings: &SurveySettings) -> ReportResult<ValidSettings> {
    Ok(ValidSettings {
        exclude_ids: read_exclusions("excludeIds", &settings.exclude_ids)?,
        suspicious_ids: read_exclusions("suspiciousIds", &settings.suspicious_ids)?,
        weights: read_weights(&settings.weights)?,
    })
}

fn read_exclusions(key: &str, js: &JSMap<String, JSValue>) -> ReportResult<Exclusions> {
    let mut res: Exclusions = BTreeMap::new();
    for (column, values) in js.iter() {
        let key = format!("{}.{}", key, column);
        let codes: BTreeSet<Code> = match values {
            JSValue::Array(l) => l
                .iter()
                .map(|v| read_js_code(&key, v))
                .collect::<ReportResult<BTreeSet<Code>>>()?,
            x => {
                return InvalidSettingSnafu {
                    key,
                    content: x.to_string(),
                }
                .fail()
            }
        };
        res.insert(column.clone(), codes);
    }
    Ok(res)
}

fn read_weights(js: &JSMap<String, JSValue>) -> ReportResult<Reweighting> {
    let mut res: Reweighting = BTreeMap::new();
    for (column, weights) in js.iter() {
        let key = format!("weights.{}", column);
        let obj = weights.as_object().context(InvalidSettingSnafu {
            key: key.clone(),
            content: weights.to_string(),
        })?;
        let mut column_weights: BTreeMap<Code, f64> = BTreeMap::new();
        for (code_s, w) in obj.iter() {
            let code = read_code_str(&key, code_s)?;
            let w = w.as_f64().context(InvalidSettingSnafu {
                key: format!("{}.{}", key, code_s),
                content: w.to_string(),
            })?;
            column_weights.insert(code, w);
        }
        res.insert(column.clone(), column_weights);
    }
    if res.len() > 1 {
        warn!(
            "read_weights: weights given for {} columns, only one is supported",
            res.len()
        );
    }
    Ok(res)
}

fn read_code_str(key: &str, s: &str) -> ReportResult<Code> {
    s.trim().parse::<Code>().ok().context(InvalidSettingSnafu {
        key,
        content: s.to_string(),
    })
}

fn read_js_code(key: &str, x: &JSValue) -> ReportResult<Code> {
    match x {
        JSValue::Number(n) => n
            .as_i64()
            .and_then(|i| Code::try_from(i).ok())
            .context(InvalidSettingSnafu {
                key,
                content: n.to_string(),
            }),
        JSValue::String(s) => read_code_str(key, s),
        _ => InvalidSettingSnafu {
            key,
            content: x.to_string(),
        }
        .fail(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ReportResult<ValidSettings> {
        let settings: SurveySettings = serde_json::from_str(s).unwrap();
        validate_settings(&settings)
    }

    #[test]
    fn empty_document() {
        assert_eq!(parse("{}").unwrap(), ValidSettings::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let settings = read_settings("/nonexistent/surveyrep/settings.json").unwrap();
        assert_eq!(settings, SurveySettings::default());
    }

    #[test]
    fn numbers_and_strings() {
        let v = parse(
            r#"{"excludeIds": {"ID": [3, "7"]},
                "suspicious_ids": {"S2": [1]},
                "weights": {"GENDER": {"1": 1, "2": 1.5}},
                "comment": "ignored"}"#,
        )
        .unwrap();
        let ids: Vec<Code> = v.exclude_ids["ID"].iter().cloned().collect();
        assert_eq!(ids, vec![3, 7]);
        assert!(v.suspicious_ids["S2"].contains(&1));
        assert_eq!(v.weights["GENDER"][&2], 1.5);
    }

    #[test]
    fn empty_lists_mean_no_settings() {
        let v = parse(r#"{"excludeIds": [], "suspiciousIds": null, "weights": []}"#).unwrap();
        assert_eq!(v, ValidSettings::default());
        assert!(serde_json::from_str::<SurveySettings>(r#"{"excludeIds": [6]}"#).is_err());
    }

    #[test]
    fn suspicious_ids_alone() {
        let v = parse(r#"{"suspiciousIds": {"ID": [1]}}"#).unwrap();
        assert!(v.exclude_ids.is_empty());
        assert_eq!(v.suspicious_ids.len(), 1);
    }

    #[test]
    fn invalid_values() {
        assert!(matches!(
            parse(r#"{"excludeIds": {"ID": 3}}"#),
            Err(ReportError::InvalidSetting { .. })
        ));
        assert!(matches!(
            parse(r#"{"excludeIds": {"ID": ["three"]}}"#),
            Err(ReportError::InvalidSetting { .. })
        ));
        assert!(matches!(
            parse(r#"{"weights": {"GENDER": {"male": 1}}}"#),
            Err(ReportError::InvalidSetting { .. })
        ));
    }
}
