pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{json_to_time, time_to_json};

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        json_to_time(&str_time).map_err(D::Error::custom)
    }
}

pub mod optional_serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{json_to_time, time_to_json};

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        time.map(time_to_json).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        str_time.map(|s| json_to_time(&s).map_err(D::Error::custom)).transpose()
    }
}

fn time_to_json(t: chrono::NaiveDateTime) -> String {
    t.and_utc().to_rfc3339()
}

// Accepts the rfc3339 form written by `time_to_json` as well as a bare naive timestamp.
fn json_to_time(s: &str) -> Result<chrono::NaiveDateTime, chrono::ParseError> {
    match chrono::DateTime::parse_from_rfc3339(s) {
        Ok(time) => Ok(time.naive_utc()),
        Err(_) => chrono::NaiveDateTime::parse_from_str(s, DATE_FMT),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::{optional_serializer, serializer};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
        #[serde(with = "optional_serializer")]
        until: Option<NaiveDateTime>,
    }

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9).and_then(|d| d.and_hms_opt(10, 30, 5)).expect("valid date")
    }

    #[test]
    fn test_should_write_rfc3339() {
        let stamped = Stamped { at: sample_time(), until: None };
        let json = serde_json::to_string(&stamped).expect("should serialize");
        assert_eq!(r#"{"at":"2024-03-09T10:30:05+00:00","until":null}"#, json.as_str());
    }

    #[test]
    fn test_should_read_naive_format() {
        let json = r#"{"at":"2024-03-09T10:30:05.000","until":"2024-03-09T10:30:05+00:00"}"#;
        let stamped: Stamped = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(sample_time(), stamped.at);
        assert_eq!(Some(sample_time()), stamped.until);
    }

    #[test]
    fn test_should_reject_garbage() {
        let res: Result<Stamped, _> = serde_json::from_str(r#"{"at":"yesterday","until":null}"#);
        assert!(res.is_err());
    }
}
