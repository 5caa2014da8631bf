//! Emergency helplines and nearby hospitals (`sathi emergency`, `GET /emergency`).

use anyhow::Result;
use healthsathi_core::emergency::{by_distance, offering, EmergencyContact, Hospital};
use healthsathi_core::Catalog;
use serde::Serialize;

use crate::search::print_json;

#[derive(Debug, Serialize)]
pub struct ContactEntry<'a> {
    #[serde(flatten)]
    pub contact: &'a EmergencyContact,
    /// `tel:` link for the number.
    pub dial: String,
}

#[derive(Debug, Serialize)]
pub struct EmergencyInfo<'a> {
    pub contacts: Vec<ContactEntry<'a>>,
    /// Nearest first.
    pub hospitals: Vec<&'a Hospital>,
}

/// Helplines in catalog order plus hospitals nearest first, optionally
/// limited to those listing `facility`.
pub fn emergency_info<'a>(catalog: &'a Catalog, facility: Option<&str>) -> EmergencyInfo<'a> {
    let contacts = catalog
        .contacts
        .iter()
        .map(|c| ContactEntry {
            contact: c,
            dial: c.dial_uri(),
        })
        .collect();

    let nearest = by_distance(&catalog.hospitals);
    let hospitals = match facility.map(str::trim).filter(|f| !f.is_empty()) {
        None => nearest,
        Some(facility) => {
            let wanted = offering(&catalog.hospitals, facility);
            nearest
                .into_iter()
                .filter(|h| wanted.iter().any(|w| w.id == h.id))
                .collect()
        }
    };

    EmergencyInfo {
        contacts,
        hospitals,
    }
}

pub fn run_emergency(catalog: &Catalog, facility: Option<&str>, json: bool) -> Result<()> {
    let info = emergency_info(catalog, facility);

    if json {
        return print_json(&info);
    }

    println!("Emergency numbers");
    for entry in &info.contacts {
        println!(
            "  {:<6} {} ({})",
            entry.contact.number, entry.contact.name, entry.contact.description
        );
    }
    println!();
    println!("Nearby hospitals");
    if info.hospitals.is_empty() {
        println!("  No results.");
    }
    for h in &info.hospitals {
        println!("  {:.1} km  {} ({:?})", h.distance_km, h.name, h.kind);
        println!("           {} | {}", h.address, h.contact);
        println!("           {}", h.facilities.join(", "));
    }
    Ok(())
}
