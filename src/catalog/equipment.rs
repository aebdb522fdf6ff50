//! Equipment rental listings.

use serde::Serialize;

use super::{selects_all, text_matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Equipment {
    pub id: u64,
    pub name: &'static str,
    pub kind: &'static str,
    pub owner: &'static str,
    pub location: &'static str,
    pub rating: f32,
    pub price_per_day: &'static str,
    pub price_per_hour: &'static str,
    pub available: bool,
    pub features: &'static [&'static str],
}

/// The fixed rental listings.
pub fn equipment() -> Vec<Equipment> {
    vec![
        Equipment {
            id: 1,
            name: "John Deere Tractor 5310",
            kind: "Tractor",
            owner: "Ramesh Agriculture Services",
            location: "Pune, Maharashtra",
            rating: 4.8,
            price_per_day: "₹2,500",
            price_per_hour: "₹350",
            available: true,
            features: &["GPS Enabled", "Air Conditioning", "PTO", "Hydraulic Lift"],
        },
        Equipment {
            id: 2,
            name: "Mahindra Harvester",
            kind: "Harvester",
            owner: "Green Valley Equipment",
            location: "Nashik, Maharashtra",
            rating: 4.6,
            price_per_day: "₹4,000",
            price_per_hour: "₹500",
            available: true,
            features: &["Auto Steering", "Grain Tank", "Chopper", "Self-Propelled"],
        },
        Equipment {
            id: 3,
            name: "Rotary Tiller",
            kind: "Tiller",
            owner: "Modern Farm Tools",
            location: "Satara, Maharashtra",
            rating: 4.9,
            price_per_day: "₹800",
            price_per_hour: "₹120",
            available: false,
            features: &["Heavy Duty", "Adjustable Depth", "Side Drive", "Oil Bath Gearbox"],
        },
        Equipment {
            id: 4,
            name: "Water Pump Set",
            kind: "Pump",
            owner: "AquaTech Solutions",
            location: "Pune, Maharashtra",
            rating: 4.7,
            price_per_day: "₹600",
            price_per_hour: "₹80",
            available: true,
            features: &["High Pressure", "Self Priming", "Portable", "Low Maintenance"],
        },
    ]
}

/// Search over name and kind, ANDed with a location facet matched by
/// containment ("pune" matches "Pune, Maharashtra").
pub fn filter_equipment<'a>(
    items: &'a [Equipment],
    query: &str,
    location: &str,
) -> Vec<&'a Equipment> {
    items
        .iter()
        .filter(|e| {
            text_matches(query, &[e.name, e.kind])
                && (selects_all(location)
                    || e.location.to_lowercase().contains(&location.to_lowercase()))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RentalStatus {
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rental {
    pub equipment: &'static str,
    pub renter: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub status: RentalStatus,
    pub amount: &'static str,
}

/// The fixed "my rentals" list.
pub fn rentals() -> Vec<Rental> {
    vec![
        Rental {
            equipment: "John Deere Tractor 5310",
            renter: "Suresh Patil",
            start_date: "2024-01-15",
            end_date: "2024-01-20",
            status: RentalStatus::Active,
            amount: "₹12,500",
        },
        Rental {
            equipment: "Rotary Tiller",
            renter: "Madhav Farmers Collective",
            start_date: "2024-01-10",
            end_date: "2024-01-12",
            status: RentalStatus::Completed,
            amount: "₹1,600",
        },
    ]
}

pub fn rentals_with_status(status: RentalStatus) -> Vec<Rental> {
    rentals().into_iter().filter(|r| r.status == status).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tractor_in_pune() {
        let all = equipment();
        let hits = filter_equipment(&all, "tractor", "pune");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Deere Tractor 5310");
        assert!(hits[0].location.contains("Pune"));
    }

    #[test]
    fn location_facet_matches_by_containment() {
        let all = equipment();
        let pune = filter_equipment(&all, "", "pune");
        assert_eq!(pune.len(), 2);

        let maharashtra = filter_equipment(&all, "", "maharashtra");
        assert_eq!(maharashtra.len(), 4);
    }

    #[test]
    fn search_covers_kind_as_well_as_name() {
        let all = equipment();
        let pumps = filter_equipment(&all, "pump", "all");
        assert_eq!(pumps.len(), 1);
        assert_eq!(pumps[0].kind, "Pump");
    }

    #[test]
    fn identity_filter_preserves_order() {
        let all = equipment();
        let ids: Vec<_> = filter_equipment(&all, "", "all")
            .iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn rentals_split_by_status() {
        assert_eq!(rentals_with_status(RentalStatus::Active).len(), 1);
        assert_eq!(rentals_with_status(RentalStatus::Completed).len(), 1);
    }
}
