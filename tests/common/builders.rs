//! Test builders — ergonomic constructors for `PostOffice` records, datasets,
//! and raw Telegram update payloads.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use pinseek_core::{Dataset, PostOffice};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// PostOfficeBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`PostOffice`] test fixtures.
///
/// # Example
///
/// ```rust
/// let record = PostOfficeBuilder::new("Fort SO", 400001)
///     .district("Mumbai")
///     .state("Maharashtra")
///     .coords(18.93, 72.83)
///     .build();
/// ```
pub struct PostOfficeBuilder {
    circle: String,
    region: String,
    division: String,
    office: String,
    pincode: u32,
    office_type: String,
    delivery: String,
    district: String,
    state: String,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl PostOfficeBuilder {
    pub fn new(office: impl Into<String>, pincode: u32) -> Self {
        Self {
            circle: "Delhi".to_string(),
            region: "Delhi".to_string(),
            division: "New Delhi Central".to_string(),
            office: office.into(),
            pincode,
            office_type: "SO".to_string(),
            delivery: "Delivery".to_string(),
            district: "New Delhi".to_string(),
            state: "Delhi".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn district(mut self, district: impl Into<String>) -> Self {
        self.district = district.into();
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn office_type(mut self, office_type: impl Into<String>) -> Self {
        self.office_type = office_type.into();
        self
    }

    pub fn delivery(mut self, delivery: impl Into<String>) -> Self {
        self.delivery = delivery.into();
        self
    }

    pub fn coords(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn build(self) -> PostOffice {
        PostOffice {
            circle: self.circle,
            region: self.region,
            division: self.division,
            office: self.office,
            pincode: self.pincode,
            office_type: self.office_type,
            delivery: self.delivery,
            district: self.district,
            state: self.state,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// The canonical well-known record: New Delhi GPO with coordinates.
pub fn delhi_gpo() -> PostOffice {
    PostOfficeBuilder::new("New Delhi GPO", 110001)
        .office_type("HO")
        .coords(28.6333, 77.2167)
        .build()
}

/// A plain record with builder defaults.
pub fn office(name: &str, pincode: u32) -> PostOffice {
    PostOfficeBuilder::new(name, pincode).build()
}

/// A small fixed directory with known rows across three states. Row order
/// matters: several assertions check that search preserves it.
pub fn delhi_directory() -> Dataset {
    Dataset::from_records(vec![
        delhi_gpo(),
        PostOfficeBuilder::new("Sansad Marg HO", 110001)
            .office_type("HO")
            .build(),
        PostOfficeBuilder::new("Connaught Place SO", 110001).build(),
        PostOfficeBuilder::new("Chennai GPO", 600001)
            .district("Chennai")
            .state("Tamil Nadu")
            .office_type("HO")
            .coords(13.0827, 80.2707)
            .build(),
        PostOfficeBuilder::new("Mumbai GPO", 400001)
            .district("Mumbai")
            .state("Maharashtra")
            .office_type("HO")
            .build(),
        PostOfficeBuilder::new("Darjeeling HO", 734101)
            .district("Darjeeling")
            .state("West Bengal")
            .delivery("Non Delivery")
            .build(),
    ])
}

/// Build a directory of `n` synthetic rows that all share the district
/// "Testville", so a single text query matches every row.
pub fn build_directory(n: usize) -> Dataset {
    Dataset::from_records(
        (0..n)
            .map(|i| {
                PostOfficeBuilder::new(format!("Office {i}"), 560_000 + i as u32)
                    .district("Testville")
                    .state("Karnataka")
                    .build()
            })
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Telegram update payloads
// ---------------------------------------------------------------------------

/// An inbound text-message update, shaped like the Bot API sends it.
pub fn text_update(update_id: i64, chat_id: i64, user_id: i64, text: &str) -> Value {
    json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id * 10,
            "date": 1_724_300_000,
            "chat": { "id": chat_id, "type": "private" },
            "from": { "id": user_id, "is_bot": false, "first_name": "Asha" },
            "text": text
        }
    })
}

/// An inbound button-press update carrying `data` as its callback payload.
pub fn callback_update(update_id: i64, chat_id: i64, user_id: i64, data: &str) -> Value {
    json!({
        "update_id": update_id,
        "callback_query": {
            "id": format!("cbq-{update_id}"),
            "from": { "id": user_id, "is_bot": false, "first_name": "Asha" },
            "message": {
                "message_id": update_id * 10,
                "date": 1_724_300_000,
                "chat": { "id": chat_id, "type": "private" }
            },
            "data": data
        }
    })
}
