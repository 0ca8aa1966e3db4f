//! Hardcoded backup times, used only when the remote source is unavailable

use crate::state::PrayerTimes;

/// Banner text shown whenever the static table is substituted for live data
pub const FALLBACK_WARNING: &str = "Namaz vakitleri alınamadı. Statik veriler gösteriliyor.";

/// City whose entry is substituted when the failed city has no row of its own
pub const DEFAULT_CITY: &str = "İstanbul";

fn times(
    imsak: &str,
    gunes: &str,
    ogle: &str,
    ikindi: &str,
    aksam: &str,
    yatsi: &str,
) -> PrayerTimes {
    PrayerTimes {
        imsak: imsak.into(),
        gunes: gunes.into(),
        ogle: ogle.into(),
        ikindi: ikindi.into(),
        aksam: aksam.into(),
        yatsi: yatsi.into(),
    }
}

fn istanbul() -> PrayerTimes {
    times("04:34", "06:08", "13:08", "16:59", "20:00", "21:27")
}

/// The partial table itself. Covers a subset of the city list; everything
/// else falls through to [`DEFAULT_CITY`] via [`static_times`].
pub fn lookup(city_name: &str) -> Option<PrayerTimes> {
    match city_name {
        "İstanbul" => Some(istanbul()),
        "Ankara" => Some(times("04:19", "05:55", "12:58", "16:51", "19:53", "21:22")),
        _ => None,
    }
}

/// Backup times for `city_name`. Total: cities without a row of their own
/// get the İstanbul entry.
pub fn static_times(city_name: &str) -> PrayerTimes {
    lookup(city_name).unwrap_or_else(istanbul)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_partial() {
        assert!(lookup("İstanbul").is_some());
        assert!(lookup("Ankara").is_some());
        assert!(lookup("İzmir").is_none());
        assert!(lookup("Bursa").is_none());
    }

    #[test]
    fn test_uncovered_city_gets_default_entry() {
        assert_eq!(static_times("İzmir"), static_times(DEFAULT_CITY));
        assert_eq!(static_times("Bursa"), lookup("İstanbul").unwrap());
    }

    #[test]
    fn test_covered_city_gets_its_own_entry() {
        let ankara = static_times("Ankara");
        assert_eq!(ankara.imsak, "04:19");
        assert_eq!(ankara.yatsi, "21:22");
        assert_ne!(ankara, static_times(DEFAULT_CITY));
    }

    #[test]
    fn test_default_city_is_covered() {
        assert!(lookup(DEFAULT_CITY).is_some());
    }
}
