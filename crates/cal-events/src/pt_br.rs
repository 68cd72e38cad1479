//! Brazilian Portuguese labels.

use cal_time::{Date, Month, Weekday};

use crate::category::EventCategory;

/// Month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro", "Fevereiro", "Março", "Abril", "Maio", "Junho", "Julho", "Agosto", "Setembro",
    "Outubro", "Novembro", "Dezembro",
];

/// Weekday abbreviations, Sunday first.
pub const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["Dom", "Seg", "Ter", "Qua", "Qui", "Sex", "Sáb"];

/// Full month name.
pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[month.index() as usize]
}

/// Three-letter weekday abbreviation.
pub fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    WEEKDAY_ABBREVIATIONS[weekday.sunday_index() as usize]
}

/// Legend label for a category.
pub fn category_label(category: EventCategory) -> &'static str {
    match category {
        EventCategory::NationalHoliday => "Nacional",
        EventCategory::StateHoliday => "Estadual (SP)",
        EventCategory::MunicipalHoliday => "Campinas",
        EventCategory::CulturalDate => "Especial",
        EventCategory::OptionalPoint => "Ponto Facultativo",
        EventCategory::CustomEvent => "Customizado",
    }
}

/// Day and month as handed to the event-detail lookup, e.g. `"14 de Julho"`.
pub fn detail_label(date: Date) -> String {
    format!("{} de {}", date.day_of_month(), month_name(date.month()))
}
