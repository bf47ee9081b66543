//! Core types for pinseek-core.
//!
//! This module defines the record shape shared across all layers: one
//! [`PostOffice`] per dataset row. Rows are parsed into this fixed shape at
//! load time; nothing downstream ever sees an untyped cell.

/// One row of the pincode dataset — a single post office or delivery area.
///
/// Every text field is kept verbatim from the dataset. The pincode is always
/// present and integral; the coordinates are independently optional and, when
/// present, always finite (the loader drops NaN/infinite cells to `None`).
#[derive(Debug, Clone, PartialEq)]
pub struct PostOffice {
    /// Postal circle, the top administrative tier (usually one per state).
    pub circle: String,
    /// Postal region within the circle.
    pub region: String,
    /// Postal division within the region.
    pub division: String,
    /// Office name (e.g. "New Delhi GPO"). Text-searched.
    pub office: String,
    /// Postal Index Number. The exact-match key for numeric queries.
    pub pincode: u32,
    /// Office type code (HO / SO / BO).
    pub office_type: String,
    /// Delivery flag ("Delivery" / "Non Delivery").
    pub delivery: String,
    /// District the office serves. Text-searched.
    pub district: String,
    /// State or union territory. Text-searched.
    pub state: String,
    /// Latitude in decimal degrees, if the dataset has one.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, if the dataset has one.
    pub longitude: Option<f64>,
}

impl PostOffice {
    /// Google Maps link for this office, or `None` unless *both* coordinates
    /// are present. A lone latitude or longitude renders nothing — there is
    /// no meaningful partial-coordinate state.
    ///
    /// Coordinates are formatted with `f64` `Display`, which prints the
    /// shortest form that round-trips — full stored precision, no rounding.
    pub fn maps_url(&self) -> Option<String> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => {
                Some(format!("https://www.google.com/maps?q={lat},{lon}"))
            }
            _ => None,
        }
    }
}
