// Projection of tour records into card and detail view models
use crate::i18n::TranslationTable;
use crate::tour::{Locale, TourRecord};
use serde::Serialize;

const STAR: &str = "⭐";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourCard {
    pub id: u32,
    pub title: String,
    pub category_label: String,
    pub stars: String,
    pub rating_text: String,
    pub description: String,
    pub duration_text: String,
    pub price_text: String,
    pub image_ref: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub author: String,
    pub stars: String,
    pub comment: String,
}

// Section heading paired with its content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourDetail {
    pub id: u32,
    pub title: String,
    pub stars: String,
    pub rating_text: String,
    pub description: String,
    pub duration: LabeledValue,
    pub price: LabeledValue,
    pub schedule: LabeledValue,
    pub itinerary_label: String,
    pub itinerary: Vec<String>,
    pub includes_label: String,
    pub includes: Vec<String>,
    pub map_label: String,
    pub map_placeholder: String,
    pub testimonials_label: String,
    pub testimonials: Vec<TestimonialView>,
    pub book_label: String,
    pub booking_prompt: String,
    pub image_ref: String,
}

pub fn stars(count: usize) -> String {
    STAR.repeat(count)
}

pub fn rating_stars(rating: f64) -> String {
    stars(rating.max(0.0).floor() as usize)
}

// "4.8 (124 reseñas)"
pub fn rating_text(tour: &TourRecord, locale: Locale, table: &TranslationTable) -> String {
    let reviews = table.get(locale, "reviews").unwrap_or(match locale {
        Locale::Es => "reseñas",
        Locale::En => "reviews",
    });
    format!("{} ({} {})", tour.rating, tour.review_count, reviews)
}

// Compact form used on cards: "3h", "2h 30m", "45m"
pub fn card_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{m}m"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

pub fn detail_duration(minutes: u32, locale: Locale) -> String {
    let (hours_word, minutes_word) = match locale {
        Locale::Es => ("horas", "minutos"),
        Locale::En => ("hours", "minutes"),
    };
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{m} {minutes_word}"),
        (h, 0) => format!("{h} {hours_word}"),
        (h, m) => format!("{h} {hours_word} {m} {minutes_word}"),
    }
}

pub fn price_text(price: f64, locale: Locale) -> String {
    if price == 0.0 {
        match locale {
            Locale::Es => "Gratis".to_string(),
            Locale::En => "Free".to_string(),
        }
    } else {
        format!("${price} MXN")
    }
}

pub fn category_label(tour: &TourRecord, locale: Locale, table: &TranslationTable) -> String {
    table
        .get(locale, &tour.category.label_key())
        .unwrap_or(tour.category.code())
        .to_string()
}

pub fn card(tour: &TourRecord, locale: Locale, table: &TranslationTable) -> TourCard {
    TourCard {
        id: tour.id,
        title: tour.title.get(locale).to_string(),
        category_label: category_label(tour, locale, table),
        stars: rating_stars(tour.rating),
        rating_text: rating_text(tour, locale, table),
        description: tour.description.get(locale).to_string(),
        duration_text: card_duration(tour.duration_minutes),
        price_text: price_text(tour.price_amount, locale),
        image_ref: tour.image_ref.clone(),
    }
}

pub fn cards<'a>(
    tours: impl IntoIterator<Item = &'a TourRecord>,
    locale: Locale,
    table: &TranslationTable,
) -> Vec<TourCard> {
    tours
        .into_iter()
        .map(|tour| card(tour, locale, table))
        .collect()
}

pub fn detail(tour: &TourRecord, locale: Locale, table: &TranslationTable) -> TourDetail {
    let label = |key: &str| table.text_or(locale, key, key).to_string();

    TourDetail {
        id: tour.id,
        title: tour.title.get(locale).to_string(),
        stars: rating_stars(tour.rating),
        rating_text: rating_text(tour, locale, table),
        description: tour.description.get(locale).to_string(),
        duration: LabeledValue {
            label: label("duration"),
            value: detail_duration(tour.duration_minutes, locale),
        },
        price: LabeledValue {
            label: label("price"),
            value: price_text(tour.price_amount, locale),
        },
        schedule: LabeledValue {
            label: label("schedule"),
            value: tour.schedule.get(locale).to_string(),
        },
        itinerary_label: label("itinerary"),
        itinerary: tour.itinerary.get(locale).to_vec(),
        includes_label: label("includes"),
        includes: tour.includes.get(locale).to_vec(),
        map_label: label("map"),
        map_placeholder: label("map-placeholder"),
        testimonials_label: label("testimonials"),
        testimonials: tour
            .testimonials
            .iter()
            .map(|t| TestimonialView {
                author: t.author.clone(),
                stars: stars(t.rating as usize),
                comment: t.comment.get(locale).to_string(),
            })
            .collect(),
        book_label: label("book-now"),
        booking_prompt: label("book-prompt"),
        image_ref: tour.image_ref.clone(),
    }
}
