// Availability placeholder: every tour is available, visitors are asked to get in touch
use crate::i18n::TranslationTable;
use crate::tour::Locale;
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityNotice {
    pub heading: String,
    pub message: String,
    pub button_label: String,
    // Shown when the button is pressed
    pub prompt: String,
}

pub fn month_name(month0: u32, locale: Locale) -> &'static str {
    let months = match locale {
        Locale::Es => &MONTHS_ES,
        Locale::En => &MONTHS_EN,
    };
    months[(month0 as usize) % 12]
}

impl AvailabilityNotice {
    pub fn for_date(locale: Locale, date: NaiveDate, table: &TranslationTable) -> Self {
        let (message, button_label, prompt) = match locale {
            Locale::Es => (
                "Todos nuestros tours están disponibles. Contáctanos para reservar.",
                "Verificar Disponibilidad",
                "Por favor usa el formulario de contacto para verificar disponibilidad",
            ),
            Locale::En => (
                "All our tours are available. Contact us to book.",
                "Check Availability",
                "Please use the contact form to check availability",
            ),
        };

        Self {
            heading: format!("{} {}", month_name(date.month0(), locale), date.year()),
            message: table.text_or(locale, "calendar-message", message).to_string(),
            button_label: table
                .text_or(locale, "calendar-button", button_label)
                .to_string(),
            prompt: table.text_or(locale, "calendar-prompt", prompt).to_string(),
        }
    }

    pub fn today(locale: Locale, table: &TranslationTable) -> Self {
        Self::for_date(locale, Local::now().date_naive(), table)
    }
}
