// mrtcard/src/card/station.rs

//! Station directory for MRT Line 6.
//!
//! Blocks store stations as one-byte codes. Codes not in the table still
//! resolve, to a synthetic "Unknown Station (N)" label in every locale.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A display name in the two supported locales.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalizedName {
    /// English.
    pub en: String,
    /// Bengali.
    pub bn: String,
}

impl LocalizedName {
    /// Build from the two locale strings.
    pub fn new(en: impl Into<String>, bn: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    /// Label used for codes missing from the directory.
    pub fn unknown(code: u8) -> Self {
        let label = format!("Unknown Station ({})", code);
        Self {
            en: label.clone(),
            bn: label,
        }
    }
}

/// One entry of the station directory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    /// Code stored in transaction blocks.
    pub code: u8,
    /// English name.
    pub name_en: &'static str,
    /// Bengali name.
    pub name_bn: &'static str,
    /// MRT line number.
    pub line: u8,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Stations under construction are listed but not yet served.
    pub is_active: bool,
}

impl Station {
    /// Both names as a [`LocalizedName`].
    pub fn name(&self) -> LocalizedName {
        LocalizedName::new(self.name_en, self.name_bn)
    }
}

const fn station(
    code: u8,
    name_en: &'static str,
    name_bn: &'static str,
    latitude: f64,
    longitude: f64,
    is_active: bool,
) -> Station {
    Station {
        code,
        name_en,
        name_bn,
        line: 6,
        latitude,
        longitude,
        is_active,
    }
}

/// Line 6, north to south.
pub static STATIONS: [Station; 16] = [
    station(95, "Uttara North", "উত্তরা উত্তর", 23.8766, 90.3973, true),
    station(85, "Uttara Center", "উত্তরা সেন্টার", 23.8687, 90.3957, true),
    station(80, "Uttara South", "উত্তরা দক্ষিণ", 23.8601, 90.3947, true),
    station(75, "Pallabi", "পল্লবী", 23.8519, 90.3766, true),
    station(70, "Mirpur 11", "মিরপুর ১১", 23.8407, 90.3745, true),
    station(65, "Mirpur 10", "মিরপুর ১০", 23.8307, 90.3722, true),
    station(60, "Kazipara", "কাজীপাড়া", 23.8236, 90.3722, true),
    station(55, "Shewrapara", "শেওড়াপাড়া", 23.8139, 90.3722, true),
    station(50, "Agargaon", "আগারগাঁও", 23.7781, 90.3788, true),
    station(45, "Bijoy Sarani", "বিজয় সরণি", 23.7641, 90.3891, true),
    station(40, "Farmgate", "ফার্মগেট", 23.7573, 90.3911, true),
    station(35, "Karwan Bazar", "কারওয়ান বাজার", 23.7507, 90.3934, true),
    station(30, "Shahbag", "শাহবাগ", 23.7388, 90.3955, true),
    station(25, "Dhaka University", "ঢাকা বিশ্ববিদ্যালয়", 23.7334, 90.3966, false),
    station(20, "Bangladesh Bank", "বাংলাদেশ ব্যাংক", 23.7285, 90.4088, false),
    station(10, "Motijheel", "মতিঝিল", 23.7233, 90.4177, true),
];

/// Look up the directory record for a station code.
pub fn lookup(code: u8) -> Option<&'static Station> {
    STATIONS.iter().find(|s| s.code == code)
}

/// Resolve a station code to its display name.
pub fn name(code: u8) -> LocalizedName {
    lookup(code)
        .map(Station::name)
        .unwrap_or_else(|| LocalizedName::unknown(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        let n = name(10);
        assert_eq!(n.en, "Motijheel");
        assert_eq!(n.bn, "মতিঝিল");

        let s = lookup(95).unwrap();
        assert_eq!(s.name_en, "Uttara North");
        assert_eq!(s.line, 6);
        assert!(s.is_active);
    }

    #[test]
    fn unknown_code_uses_synthetic_label_in_both_locales() {
        let n = name(7);
        assert_eq!(n.en, "Unknown Station (7)");
        assert_eq!(n.bn, "Unknown Station (7)");
        assert!(lookup(7).is_none());
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in STATIONS.iter().enumerate() {
            for b in &STATIONS[i + 1..] {
                assert_ne!(a.code, b.code, "{} and {}", a.name_en, b.name_en);
            }
        }
    }

    #[test]
    fn inactive_stations_still_resolve() {
        let s = lookup(25).unwrap();
        assert!(!s.is_active);
        assert_eq!(name(25).en, "Dhaka University");
    }
}
