//! Brazil holiday lookup.
//!
//! National holidays are reported for every query; each federative unit adds
//! its own when it is the requested jurisdiction.  Carnival, Ash Wednesday
//! and Corpus Christi are facultative days (`Optional`) and Easter, Mother's
//! Day and Father's Day are `Observance`s, so none of them block a business
//! day on their own.

use crate::calendar::{HolidayCategory, HolidayLookup, HolidayRecord};
use crate::date::Date;
use crate::easter::easter_sunday_day_of_year;
use crate::jurisdiction::Jurisdiction;
use crate::weekday::Weekday;

use crate::calendar::HolidayCategory::{Observance, Optional, Statutory};

/// When a holiday falls.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// Same month and day every year.
    Fixed { month: u8, day: u8 },
    /// Offset in days from Easter Sunday.
    Easter(i16),
    /// The n-th given weekday of a month.
    NthWeekday { n: u8, weekday: Weekday, month: u8 },
}

#[derive(Debug, Clone, Copy)]
struct HolidayRule {
    rule: Rule,
    name: &'static str,
    category: HolidayCategory,
    /// First year the holiday is observed, if not always.
    since: Option<u16>,
}

impl HolidayRule {
    const fn fixed(month: u8, day: u8, name: &'static str, category: HolidayCategory) -> Self {
        Self {
            rule: Rule::Fixed { month, day },
            name,
            category,
            since: None,
        }
    }

    const fn easter(offset: i16, name: &'static str, category: HolidayCategory) -> Self {
        Self {
            rule: Rule::Easter(offset),
            name,
            category,
            since: None,
        }
    }

    const fn nth(n: u8, weekday: Weekday, month: u8, name: &'static str) -> Self {
        Self {
            rule: Rule::NthWeekday { n, weekday, month },
            name,
            category: Observance,
            since: None,
        }
    }

    const fn since(self, year: u16) -> Self {
        Self {
            since: Some(year),
            ..self
        }
    }

    fn falls_on(&self, date: Date, easter_doy: i32) -> bool {
        if self.since.is_some_and(|y| date.year() < y) {
            return false;
        }
        match self.rule {
            Rule::Fixed { month, day } => date.month() == month && date.day_of_month() == day,
            Rule::Easter(offset) => date.day_of_year() as i32 == easter_doy + offset as i32,
            Rule::NthWeekday { n, weekday, month } => {
                date.month() == month
                    && Date::nth_weekday(n, weekday, date.year(), month).is_ok_and(|d| d == date)
            }
        }
    }

    fn record(&self, date: Date) -> HolidayRecord {
        HolidayRecord::new(date, self.name, self.category)
    }
}

const NATIONAL: &[HolidayRule] = &[
    HolidayRule::fixed(1, 1, "Confraternização Universal", Statutory),
    HolidayRule::easter(-48, "Carnaval", Optional),
    HolidayRule::easter(-47, "Carnaval", Optional),
    HolidayRule::easter(-46, "Quarta-feira de Cinzas", Optional),
    HolidayRule::easter(-2, "Sexta-feira Santa", Statutory),
    HolidayRule::easter(0, "Páscoa", Observance),
    HolidayRule::fixed(4, 21, "Tiradentes", Statutory),
    HolidayRule::fixed(5, 1, "Dia do Trabalhador", Statutory),
    HolidayRule::nth(2, Weekday::Sunday, 5, "Dia das Mães"),
    HolidayRule::easter(60, "Corpus Christi", Optional),
    HolidayRule::nth(2, Weekday::Sunday, 8, "Dia dos Pais"),
    HolidayRule::fixed(9, 7, "Independência do Brasil", Statutory),
    HolidayRule::fixed(10, 12, "Nossa Senhora Aparecida", Statutory),
    HolidayRule::fixed(11, 2, "Finados", Statutory),
    HolidayRule::fixed(11, 15, "Proclamação da República", Statutory),
    HolidayRule::fixed(11, 20, "Dia Nacional de Zumbi e da Consciência Negra", Statutory)
        .since(2024),
    HolidayRule::fixed(12, 24, "Véspera de Natal", Optional),
    HolidayRule::fixed(12, 25, "Natal", Statutory),
    HolidayRule::fixed(12, 31, "Véspera de Ano Novo", Optional),
];

fn state_rules(jurisdiction: Jurisdiction) -> &'static [HolidayRule] {
    use Jurisdiction::*;
    const AC: &[HolidayRule] = &[
        HolidayRule::fixed(1, 23, "Dia do Evangélico", Statutory),
        HolidayRule::fixed(6, 15, "Aniversário do Acre", Statutory),
        HolidayRule::fixed(9, 5, "Dia da Amazônia", Statutory),
        HolidayRule::fixed(11, 17, "Assinatura do Tratado de Petrópolis", Statutory),
    ];
    const AL: &[HolidayRule] = &[
        HolidayRule::fixed(6, 24, "São João", Statutory),
        HolidayRule::fixed(6, 29, "São Pedro", Statutory),
        HolidayRule::fixed(9, 16, "Emancipação Política de Alagoas", Statutory),
    ];
    const AP: &[HolidayRule] = &[
        HolidayRule::fixed(3, 19, "Dia de São José", Statutory),
        HolidayRule::fixed(9, 13, "Criação do Território Federal do Amapá", Statutory),
    ];
    const AM: &[HolidayRule] = &[
        HolidayRule::fixed(9, 5, "Elevação do Amazonas à Categoria de Província", Statutory),
    ];
    const BA: &[HolidayRule] = &[HolidayRule::fixed(7, 2, "Independência da Bahia", Statutory)];
    const CE: &[HolidayRule] = &[
        HolidayRule::fixed(3, 19, "Dia de São José", Statutory),
        HolidayRule::fixed(3, 25, "Data Magna do Ceará", Statutory),
    ];
    const DF: &[HolidayRule] = &[
        HolidayRule::fixed(4, 21, "Fundação de Brasília", Statutory),
        HolidayRule::fixed(11, 30, "Dia do Evangélico", Statutory),
    ];
    const ES: &[HolidayRule] = &[HolidayRule::easter(8, "Nossa Senhora da Penha", Statutory)];
    const GO: &[HolidayRule] = &[HolidayRule::fixed(10, 28, "Dia do Servidor Público", Optional)];
    const MA: &[HolidayRule] = &[
        HolidayRule::fixed(7, 28, "Adesão do Maranhão à Independência do Brasil", Statutory),
    ];
    const MT: &[HolidayRule] = &[HolidayRule::fixed(11, 20, "Dia da Consciência Negra", Statutory)];
    const MS: &[HolidayRule] = &[HolidayRule::fixed(10, 11, "Criação do Estado", Statutory)];
    const MG: &[HolidayRule] = &[HolidayRule::fixed(4, 21, "Data Magna de Minas Gerais", Statutory)];
    const PA: &[HolidayRule] = &[
        HolidayRule::fixed(8, 15, "Adesão do Grão-Pará à Independência do Brasil", Statutory),
    ];
    const PB: &[HolidayRule] = &[
        HolidayRule::fixed(7, 26, "Homenagem à Memória do Ex-Presidente João Pessoa", Statutory),
        HolidayRule::fixed(8, 5, "Fundação do Estado", Statutory),
    ];
    const PR: &[HolidayRule] = &[
        HolidayRule::fixed(12, 19, "Emancipação Política do Paraná", Statutory),
    ];
    const PE: &[HolidayRule] = &[
        HolidayRule::fixed(3, 6, "Revolução Pernambucana", Statutory),
        HolidayRule::fixed(6, 24, "São João", Statutory),
    ];
    const PI: &[HolidayRule] = &[
        HolidayRule::fixed(3, 13, "Dia da Batalha do Jenipapo", Statutory),
        HolidayRule::fixed(10, 19, "Dia do Piauí", Statutory),
    ];
    const RJ: &[HolidayRule] = &[
        HolidayRule::easter(-47, "Carnaval", Statutory),
        HolidayRule::fixed(4, 23, "Dia de São Jorge", Statutory),
        HolidayRule::fixed(11, 20, "Dia da Consciência Negra", Statutory),
    ];
    const RN: &[HolidayRule] = &[
        HolidayRule::fixed(8, 7, "Dia do Rio Grande do Norte", Statutory),
        HolidayRule::fixed(10, 3, "Mártires de Cunhaú e Uruaçu", Statutory),
    ];
    const RS: &[HolidayRule] = &[HolidayRule::fixed(9, 20, "Revolução Farroupilha", Statutory)];
    const RO: &[HolidayRule] = &[
        HolidayRule::fixed(1, 4, "Criação do Estado", Statutory),
        HolidayRule::fixed(6, 18, "Dia do Evangélico", Statutory),
    ];
    const RR: &[HolidayRule] = &[HolidayRule::fixed(10, 5, "Criação do Estado", Statutory)];
    const SC: &[HolidayRule] = &[
        HolidayRule::fixed(8, 11, "Criação da Capitania, separando-se de SP", Statutory),
        HolidayRule::fixed(11, 25, "Dia de Santa Catarina", Statutory),
    ];
    const SP: &[HolidayRule] = &[
        HolidayRule::fixed(7, 9, "Revolução Constitucionalista de 1932", Statutory),
    ];
    const SE: &[HolidayRule] = &[
        HolidayRule::fixed(7, 8, "Emancipação Política de Sergipe", Statutory),
    ];
    const TO: &[HolidayRule] = &[
        HolidayRule::fixed(9, 8, "Nossa Senhora da Natividade", Statutory),
        HolidayRule::fixed(10, 5, "Criação do Estado", Statutory),
    ];

    match jurisdiction {
        Acre => AC,
        Alagoas => AL,
        Amapa => AP,
        Amazonas => AM,
        Bahia => BA,
        Ceara => CE,
        DistritoFederal => DF,
        EspiritoSanto => ES,
        Goias => GO,
        Maranhao => MA,
        MatoGrosso => MT,
        MatoGrossoDoSul => MS,
        MinasGerais => MG,
        Para => PA,
        Paraiba => PB,
        Parana => PR,
        Pernambuco => PE,
        Piaui => PI,
        RioDeJaneiro => RJ,
        RioGrandeDoNorte => RN,
        RioGrandeDoSul => RS,
        Rondonia => RO,
        Roraima => RR,
        SantaCatarina => SC,
        SaoPaulo => SP,
        Sergipe => SE,
        Tocantins => TO,
    }
}

/// Built-in Brazilian holiday calendar (national + state).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrazilHolidays;

impl HolidayLookup for BrazilHolidays {
    fn name(&self) -> &str {
        "Brazil (built-in)"
    }

    fn holidays_on(&self, date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<HolidayRecord> {
        let easter_doy = easter_sunday_day_of_year(date.year()) as i32;
        let regional = jurisdiction.map(state_rules).unwrap_or_default();
        NATIONAL
            .iter()
            .chain(regional)
            .filter(|rule| rule.falls_on(date, easter_doy))
            .map(|rule| rule.record(date))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn names(date: Date, jurisdiction: Option<Jurisdiction>) -> Vec<String> {
        BrazilHolidays
            .holidays_on(date, jurisdiction)
            .into_iter()
            .map(|h| h.name)
            .collect()
    }

    #[test]
    fn new_years_day() {
        let h = BrazilHolidays.blocking_holiday(date(2024, 1, 1), None).unwrap();
        assert_eq!(h.name, "Confraternização Universal");
        assert_eq!(h.category, HolidayCategory::Statutory);
        assert_eq!(h.date, date(2024, 1, 1));
    }

    #[test]
    fn carnival_2024_is_optional() {
        // Easter 2024: March 31
        for d in [date(2024, 2, 12), date(2024, 2, 13), date(2024, 2, 14)] {
            assert!(!BrazilHolidays.holidays_on(d, None).is_empty());
            assert!(!BrazilHolidays.is_holiday(d, None), "{d} should not block");
        }
    }

    #[test]
    fn carnival_tuesday_blocks_in_rio() {
        let tue = date(2024, 2, 13);
        let h = BrazilHolidays
            .blocking_holiday(tue, Some(Jurisdiction::RioDeJaneiro))
            .unwrap();
        assert_eq!(h.name, "Carnaval");
        assert_eq!(h.category, HolidayCategory::Statutory);
    }

    #[test]
    fn good_friday_and_corpus_christi() {
        assert_eq!(names(date(2024, 3, 29), None), ["Sexta-feira Santa"]);
        assert!(BrazilHolidays.is_holiday(date(2024, 3, 29), None));
        assert_eq!(names(date(2024, 5, 30), None), ["Corpus Christi"]);
        assert!(!BrazilHolidays.is_holiday(date(2024, 5, 30), None));
    }

    #[test]
    fn observances() {
        assert_eq!(names(date(2024, 3, 31), None), ["Páscoa"]);
        assert_eq!(names(date(2024, 5, 12), None), ["Dia das Mães"]);
        assert_eq!(names(date(2024, 8, 11), None), ["Dia dos Pais"]);
        assert!(!BrazilHolidays.is_holiday(date(2024, 5, 12), None));
    }

    #[test]
    fn black_consciousness_day_national_since_2024() {
        assert!(!BrazilHolidays.is_holiday(date(2023, 11, 20), None));
        assert!(BrazilHolidays.is_holiday(date(2024, 11, 20), None));
        // Already a state holiday in Rio before it became national
        assert!(BrazilHolidays.is_holiday(date(2023, 11, 20), Some(Jurisdiction::RioDeJaneiro)));
    }

    #[test]
    fn state_holidays_only_in_their_state() {
        let d = date(2024, 7, 9);
        assert!(!BrazilHolidays.is_holiday(d, None));
        assert!(!BrazilHolidays.is_holiday(d, Some(Jurisdiction::Bahia)));
        assert!(BrazilHolidays.is_holiday(d, Some(Jurisdiction::SaoPaulo)));
        assert!(BrazilHolidays.is_holiday(date(2024, 7, 2), Some(Jurisdiction::Bahia)));
        assert!(BrazilHolidays.is_holiday(date(2024, 9, 20), Some(Jurisdiction::RioGrandeDoSul)));
    }

    #[test]
    fn national_records_come_first() {
        // Tiradentes and the founding of Brasília share April 21
        assert_eq!(
            names(date(2024, 4, 21), Some(Jurisdiction::DistritoFederal)),
            ["Tiradentes", "Fundação de Brasília"]
        );
    }

    #[test]
    fn espirito_santo_follows_easter() {
        // Easter 2024 + 8 = April 8
        assert!(BrazilHolidays.is_holiday(date(2024, 4, 8), Some(Jurisdiction::EspiritoSanto)));
        assert!(!BrazilHolidays.is_holiday(date(2024, 4, 8), None));
    }

    #[test]
    fn every_state_has_a_table() {
        for &j in Jurisdiction::ALL {
            assert!(!state_rules(j).is_empty(), "{j} has no holidays");
        }
    }

    #[test]
    fn normal_business_day() {
        // 2023-06-15 is a Thursday
        assert!(BrazilHolidays.holidays_on(date(2023, 6, 15), None).is_empty());
    }
}
