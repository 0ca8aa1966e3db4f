//! Ezan Vakti API client

use chrono::Local;
use serde::Deserialize;

use crate::state::PrayerTimes;

const API_BASE: &str = "https://ezanvakti.herokuapp.com";

/// One daily record from the API. The source returns many more fields per
/// day; only the six times are projected out, the rest are ignored.
#[derive(Debug, Deserialize)]
struct DayRecord {
    #[serde(rename = "Imsak")]
    imsak: String,
    #[serde(rename = "Gunes")]
    gunes: String,
    #[serde(rename = "Ogle")]
    ogle: String,
    #[serde(rename = "Ikindi")]
    ikindi: String,
    #[serde(rename = "Aksam")]
    aksam: String,
    #[serde(rename = "Yatsi")]
    yatsi: String,
}

impl From<DayRecord> for PrayerTimes {
    fn from(day: DayRecord) -> Self {
        PrayerTimes {
            imsak: day.imsak,
            gunes: day.gunes,
            ogle: day.ogle,
            ikindi: day.ikindi,
            aksam: day.aksam,
            yatsi: day.yatsi,
        }
    }
}

/// Fetch error type
#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    EmptyResponse,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Prayer times request failed: {}", e),
            FetchError::EmptyResponse => write!(f, "No record for today in response"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Today's date in the local timezone, as the API path expects it
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Fetch prayer times for a city id and ISO date.
///
/// The API returns an array of daily records; only element 0 ("today") is
/// used. Missing or malformed records surface as errors, never defaults.
pub async fn fetch_prayer_times(city_id: u32, date: &str) -> Result<PrayerTimes, FetchError> {
    let url = format!("{API_BASE}/vakitler/{city_id}/{date}");

    let response = reqwest::get(&url).await.map_err(FetchError::Request)?;
    let days: Vec<DayRecord> = response.json().await.map_err(FetchError::Request)?;

    days.into_iter()
        .next()
        .map(PrayerTimes::from)
        .ok_or(FetchError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_record_projects_six_fields_and_ignores_extras() {
        let body = r#"[{
            "Imsak": "04:19",
            "Gunes": "05:55",
            "Ogle": "12:58",
            "Ikindi": "16:51",
            "Aksam": "19:53",
            "Yatsi": "21:22",
            "extraField": "x",
            "HicriTarihUzun": "1 Muharrem 1447"
        }]"#;

        let days: Vec<DayRecord> = serde_json::from_str(body).unwrap();
        let times = PrayerTimes::from(days.into_iter().next().unwrap());

        assert_eq!(times.imsak, "04:19");
        assert_eq!(times.gunes, "05:55");
        assert_eq!(times.ogle, "12:58");
        assert_eq!(times.ikindi, "16:51");
        assert_eq!(times.aksam, "19:53");
        assert_eq!(times.yatsi, "21:22");
    }

    #[test]
    fn test_day_record_requires_all_six_fields() {
        let body = r#"[{"Imsak": "04:19", "Gunes": "05:55"}]"#;
        assert!(serde_json::from_str::<Vec<DayRecord>>(body).is_err());
    }

    #[test]
    fn test_today_is_iso_formatted() {
        let date = today();
        assert_eq!(date.len(), 10);
        let parts: Vec<&str> = date.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0].len(), 4);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }
}
