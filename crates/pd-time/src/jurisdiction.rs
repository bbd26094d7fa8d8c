//! The Brazilian federative units.
//!
//! A jurisdiction narrows the national holiday calendar to one state (or the
//! Federal District), adding that unit's own holidays.

use pd_core::errors::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! jurisdictions {
    ($($variant:ident => $code:literal, $name:literal;)+) => {
        /// A Brazilian state or the Federal District, identified by its
        /// two-letter code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Jurisdiction {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl Jurisdiction {
            /// Every supported jurisdiction, in code order of the web form.
            pub const ALL: &'static [Jurisdiction] = &[$(Jurisdiction::$variant),+];

            /// Two-letter code (e.g. `"SP"`).
            pub fn code(&self) -> &'static str {
                match self {
                    $(Jurisdiction::$variant => $code,)+
                }
            }

            /// Full name of the federative unit.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Jurisdiction::$variant => $name,)+
                }
            }

            /// Look up a code exactly as given (upper case).
            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Jurisdiction::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

jurisdictions! {
    Acre => "AC", "Acre";
    Alagoas => "AL", "Alagoas";
    Amapa => "AP", "Amapá";
    Amazonas => "AM", "Amazonas";
    Bahia => "BA", "Bahia";
    Ceara => "CE", "Ceará";
    DistritoFederal => "DF", "Distrito Federal";
    EspiritoSanto => "ES", "Espírito Santo";
    Goias => "GO", "Goiás";
    Maranhao => "MA", "Maranhão";
    MatoGrosso => "MT", "Mato Grosso";
    MatoGrossoDoSul => "MS", "Mato Grosso do Sul";
    MinasGerais => "MG", "Minas Gerais";
    Para => "PA", "Pará";
    Paraiba => "PB", "Paraíba";
    Parana => "PR", "Paraná";
    Pernambuco => "PE", "Pernambuco";
    Piaui => "PI", "Piauí";
    RioDeJaneiro => "RJ", "Rio de Janeiro";
    RioGrandeDoNorte => "RN", "Rio Grande do Norte";
    RioGrandeDoSul => "RS", "Rio Grande do Sul";
    Rondonia => "RO", "Rondônia";
    Roraima => "RR", "Roraima";
    SantaCatarina => "SC", "Santa Catarina";
    SaoPaulo => "SP", "São Paulo";
    Sergipe => "SE", "Sergipe";
    Tocantins => "TO", "Tocantins";
}

impl Jurisdiction {
    /// Parse an optional code as it arrives from a form field.
    ///
    /// The code is trimmed and upper-cased; an empty string means "no
    /// jurisdiction".
    pub fn parse_optional(code: Option<&str>) -> Result<Option<Self>> {
        match code.map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some),
        }
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim().to_ascii_uppercase();
        Jurisdiction::from_code(&code).ok_or_else(|| {
            Error::InvalidJurisdiction(format!("'{code}' is not a Brazilian state code"))
        })
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Jurisdiction {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Jurisdiction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_seven_units() {
        assert_eq!(Jurisdiction::ALL.len(), 27);
        let mut codes: Vec<_> = Jurisdiction::ALL.iter().map(|j| j.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sp".parse::<Jurisdiction>().unwrap(), Jurisdiction::SaoPaulo);
        assert_eq!(" Rj ".parse::<Jurisdiction>().unwrap(), Jurisdiction::RioDeJaneiro);
        assert_eq!(Jurisdiction::DistritoFederal.to_string(), "DF");
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "XX".parse::<Jurisdiction>().unwrap_err();
        assert!(matches!(err, Error::InvalidJurisdiction(_)));
        assert!("BR-SP".parse::<Jurisdiction>().is_err());
    }

    #[test]
    fn optional_parsing() {
        assert_eq!(Jurisdiction::parse_optional(None).unwrap(), None);
        assert_eq!(Jurisdiction::parse_optional(Some("  ")).unwrap(), None);
        assert_eq!(
            Jurisdiction::parse_optional(Some("ba")).unwrap(),
            Some(Jurisdiction::Bahia)
        );
        assert!(Jurisdiction::parse_optional(Some("zz")).is_err());
    }
}
