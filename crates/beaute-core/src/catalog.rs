//! The fixed product catalog and visit timeline shown alongside a plan.
//!
//! Booking is mocked: it confirms without contacting any reservation
//! service.

use jiff::civil::date;
use log::info;

use crate::{
    display::OperationStatus,
    models::{Product, ScheduledVisit},
};

/// Returns the salon visits on the plan timeline, earliest first.
pub fn scheduled_visits() -> Vec<ScheduledVisit> {
    vec![
        ScheduledVisit {
            date: date(2025, 9, 2),
            title: "Cut & color (Omotesando salon A)".to_string(),
            duration_minutes: 90,
        },
        ScheduledVisit {
            date: date(2025, 9, 16),
            title: "Facial (Shinjuku esthetic salon B)".to_string(),
            duration_minutes: 60,
        },
    ]
}

/// Books every visit in one go.
pub fn book_visits(visits: &[ScheduledVisit]) -> OperationStatus {
    if visits.is_empty() {
        return OperationStatus::warning("There are no visits to book".to_string());
    }
    info!("Booking {} visits (mock)", visits.len());
    OperationStatus::success(format!(
        "Booked {} visits in one click (mock booking, no reservation was made)",
        visits.len()
    ))
}

/// Returns the recommended products, personalized entries first.
pub fn recommended_products() -> Vec<Product> {
    vec![
        Product {
            name: "Intensive hair mask".to_string(),
            price: 2480,
            reason: "You mentioned damage after your last color treatment; keeps color \
                     longer and hair soft"
                .to_string(),
            href: "https://maker.example.com/hair-mask".to_string(),
            personalized: true,
            basis: Some(
                "Treatment record and counseling notes from Omotesando salon A (salon-provided data)"
                    .to_string(),
            ),
        },
        Product {
            name: "Moisturizing serum (night)".to_string(),
            price: 3980,
            reason: "Recent counseling flagged dryness and sensitivity; a low-irritation \
                     formula that works overnight"
                .to_string(),
            href: "https://maker.example.com/night-serum".to_string(),
            personalized: true,
            basis: Some(
                "Questionnaire and conversation log from Shinjuku esthetic salon B \
                 (salon-provided data)"
                    .to_string(),
            ),
        },
        Product {
            name: "UV protect".to_string(),
            price: 1980,
            reason: "Daytime damage protection; a staple for people who spend a lot of time \
                     outdoors"
                .to_string(),
            href: "https://maker.example.com/uv-protect".to_string(),
            personalized: false,
            basis: None,
        },
    ]
}
