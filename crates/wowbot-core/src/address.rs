//! Free-text address formatting for geocoding.

use crate::types::Location;

/// Turn slot-filled location data into a single free-text address string.
///
/// Prefers the street-address slot, falling back to the business-name slot
/// when the former is empty. Appends ", {subadmin-area}" if present, then
/// ", {zip-code}" if present and `append_zip` is set. Embedded commas are
/// not escaped.
pub fn format_address(location: &Location, append_zip: bool) -> String {
    let mut addr = if location.street_address.is_empty() {
        location.business_name.clone()
    } else {
        location.street_address.clone()
    };
    if !location.subadmin_area.is_empty() {
        addr.push_str(", ");
        addr.push_str(&location.subadmin_area);
    }
    if append_zip && !location.zip_code.is_empty() {
        addr.push_str(", ");
        addr.push_str(&location.zip_code);
    }
    addr
}
