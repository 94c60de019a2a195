//! # Birth County
//!
//! Before 1990 the first two serial digits of a personal number encoded the
//! county (län) of birth. The mapping was dropped for later births, and
//! coordination numbers never carried it; both report
//! [`BirthCounty::Undefined`].

use serde::{Deserialize, Serialize};

/// Last birth year whose serial number encodes a county.
pub const LAST_COUNTY_ENCODING_YEAR: i32 = 1989;

/// Historical county of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthCounty {
    StockholmStad,
    Stockholm,
    Uppsala,
    Sodermanland,
    Ostergotland,
    Jonkoping,
    Kronoberg,
    Kalmar,
    Gotland,
    Blekinge,
    Kristianstad,
    Malmohus,
    Halland,
    GoteborgOchBohus,
    Alvsborg,
    Skaraborg,
    Varmland,
    Orebro,
    Vastmanland,
    Kopparberg,
    Gavleborg,
    Vasternorrland,
    Jamtland,
    Vasterbotten,
    Norrbotten,
    /// No county encoded, or the mapping does not apply.
    Undefined,
}

impl BirthCounty {
    /// Look up the county for the first two serial digits (00-99).
    pub fn from_serial_prefix(prefix: u32) -> Self {
        match prefix {
            0..=9 => Self::StockholmStad,
            10..=13 => Self::Stockholm,
            14..=15 => Self::Uppsala,
            16..=18 => Self::Sodermanland,
            19..=23 => Self::Ostergotland,
            24..=26 => Self::Jonkoping,
            27..=28 => Self::Kronoberg,
            29..=31 => Self::Kalmar,
            32 => Self::Gotland,
            33..=34 => Self::Blekinge,
            35..=38 => Self::Kristianstad,
            39..=45 => Self::Malmohus,
            46..=47 => Self::Halland,
            48..=54 => Self::GoteborgOchBohus,
            55..=58 => Self::Alvsborg,
            59..=61 => Self::Skaraborg,
            62..=64 => Self::Varmland,
            66..=68 => Self::Orebro,
            69..=70 => Self::Vastmanland,
            71..=73 => Self::Kopparberg,
            75..=77 => Self::Gavleborg,
            78..=81 => Self::Vasternorrland,
            82..=84 => Self::Jamtland,
            85..=88 => Self::Vasterbotten,
            89..=92 => Self::Norrbotten,
            _ => Self::Undefined,
        }
    }

    /// Swedish county name.
    pub fn name(self) -> &'static str {
        match self {
            Self::StockholmStad => "Stockholms stad",
            Self::Stockholm => "Stockholms län",
            Self::Uppsala => "Uppsala län",
            Self::Sodermanland => "Södermanlands län",
            Self::Ostergotland => "Östergötlands län",
            Self::Jonkoping => "Jönköpings län",
            Self::Kronoberg => "Kronobergs län",
            Self::Kalmar => "Kalmar län",
            Self::Gotland => "Gotlands län",
            Self::Blekinge => "Blekinge län",
            Self::Kristianstad => "Kristianstads län",
            Self::Malmohus => "Malmöhus län",
            Self::Halland => "Hallands län",
            Self::GoteborgOchBohus => "Göteborgs och Bohus län",
            Self::Alvsborg => "Älvsborgs län",
            Self::Skaraborg => "Skaraborgs län",
            Self::Varmland => "Värmlands län",
            Self::Orebro => "Örebro län",
            Self::Vastmanland => "Västmanlands län",
            Self::Kopparberg => "Kopparbergs län",
            Self::Gavleborg => "Gävleborgs län",
            Self::Vasternorrland => "Västernorrlands län",
            Self::Jamtland => "Jämtlands län",
            Self::Vasterbotten => "Västerbottens län",
            Self::Norrbotten => "Norrbottens län",
            Self::Undefined => "Okänd",
        }
    }
}

impl std::fmt::Display for BirthCounty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
