//! Fixed-date holidays: national, São Paulo state, and the municipal dates
//! of the Campinas metropolitan region.

use cal_core::Year;
use cal_time::Month;

use crate::category::EventCategory::{MunicipalHoliday, NationalHoliday, StateHoliday};
use crate::definition::HolidayDefinition as H;
use crate::event::CalendarEvent;
use crate::source::HolidaySource;

/// Holidays recurring on the same month and day every year.
///
/// Names are unique, so `"<name>-<year>"` identifiers never collide.
#[rustfmt::skip]
pub static FIXED_HOLIDAYS: &[H] = &[
    // ── National and state ──────────────────────────────────────────────────
    H::new(Month::January, 1, "Confraternização Universal", NationalHoliday, "Início do ano civil."),
    H::new(Month::January, 25, "Aniversário de São Paulo", StateHoliday, "Feriado estadual (Data Magna da Capital)."),
    H::new(Month::April, 21, "Tiradentes", NationalHoliday, "Homenagem ao mártir da Inconfidência Mineira."),
    H::new(Month::May, 1, "Dia do Trabalhador", NationalHoliday, "Celebração das conquistas trabalhistas."),
    H::new(Month::July, 9, "Revolução Constitucionalista", StateHoliday, "Homenagem ao movimento de 1932 em SP."),
    H::new(Month::September, 7, "Independência do Brasil", NationalHoliday, "Celebração da soberania nacional."),
    H::new(Month::October, 12, "Nossa Senhora Aparecida", NationalHoliday, "Padroeira do Brasil e Dia das Crianças."),
    H::new(Month::November, 2, "Finados", NationalHoliday, "Dia de memória aos entes falecidos."),
    H::new(Month::November, 15, "Proclamação da República", NationalHoliday, "Aniversário do regime republicano no Brasil."),
    H::new(Month::November, 20, "Consciência Negra", NationalHoliday, "Homenagem a Zumbi dos Palmares e cultura negra."),
    H::new(Month::December, 25, "Natal", NationalHoliday, "Celebração cristã do nascimento de Jesus."),
    // ── Campinas metropolitan region ────────────────────────────────────────
    H::new(Month::January, 20, "São Sebastião (Valinhos)", MunicipalHoliday, "Padroeiro de Valinhos e abertura da Festa do Figo."),
    H::new(Month::February, 2, "N. Sra. da Candelária (Indaiatuba)", MunicipalHoliday, "Padroeira da cidade de Indaiatuba."),
    H::new(Month::February, 15, "Aniversário de Indaiatuba", MunicipalHoliday, "Fundação de Indaiatuba."),
    H::new(Month::February, 28, "Aniversário de Paulínia", MunicipalHoliday, "Emancipação de Paulínia."),
    H::new(Month::March, 31, "Emancipação de Hortolândia", MunicipalHoliday, "Emancipação de Hortolândia."),
    H::new(Month::April, 2, "Aniversário de Vinhedo", MunicipalHoliday, "Fundação da cidade de Vinhedo."),
    H::new(Month::April, 10, "Aniversário de Artur Nogueira", MunicipalHoliday, "Fundação de Artur Nogueira."),
    H::new(Month::May, 19, "Aniversário de Hortolândia", MunicipalHoliday, "Data da fundação da cidade."),
    H::new(Month::May, 28, "Aniversário de Valinhos", MunicipalHoliday, "Data oficial da fundação de Valinhos."),
    H::new(Month::June, 13, "Santo Antônio (Americana)", MunicipalHoliday, "Padroeiro de Americana."),
    H::new(Month::July, 14, "Aniversário de Campinas", MunicipalHoliday, "Fundação da cidade de Campinas (1774)."),
    H::new(Month::July, 26, "Aniversário de Sumaré", MunicipalHoliday, "Fundação da cidade de Sumaré."),
    H::new(Month::September, 12, "Aniversário de Jaguariúna", MunicipalHoliday, "Fundação de Jaguariúna."),
    H::new(Month::October, 3, "Emancipação de Holambra", MunicipalHoliday, "Data histórica de Holambra (Cidade das Flores)."),
    H::new(Month::November, 1, "Aniversário de Itatiba", MunicipalHoliday, "Fundação da cidade de Itatiba."),
    H::new(Month::December, 4, "Santa Bárbara (S.B.O)", MunicipalHoliday, "Padroeira de Santa Bárbara d'Oeste."),
    H::new(Month::December, 8, "Nossa Senhora da Conceição", MunicipalHoliday, "Padroeira de Campinas."),
];

/// A [`HolidaySource`] over a static table of fixed-date holidays.
#[derive(Debug, Clone, Copy)]
pub struct FixedHolidays {
    table: &'static [H],
}

impl FixedHolidays {
    /// Source over an arbitrary table.
    pub const fn new(table: &'static [H]) -> Self {
        Self { table }
    }

    /// The underlying table.
    pub fn table(&self) -> &'static [H] {
        self.table
    }
}

impl Default for FixedHolidays {
    fn default() -> Self {
        Self::new(FIXED_HOLIDAYS)
    }
}

impl HolidaySource for FixedHolidays {
    fn name(&self) -> &str {
        "fixed"
    }

    fn events_for_year(&self, year: Year) -> Vec<CalendarEvent> {
        self.table
            .iter()
            .map(|h| CalendarEvent {
                id: h.id_for(year),
                name: h.name.to_string(),
                description: h.description.to_string(),
                date: h.date_in(year),
                category: h.category,
                metadata: Default::default(),
            })
            .collect()
    }
}
