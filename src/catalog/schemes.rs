//! Government scheme listings.
//!
//! The schemes view is the only one with three categorical facets
//! (state, crop, scheme type) on top of the text search; all four
//! predicates are ANDed.

use serde::Serialize;

use super::{selects_all, text_matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scheme {
    pub id: u64,
    pub name: &'static str,
    pub description: &'static str,
    pub eligibility: &'static str,
    pub benefits: &'static str,
    pub subsidy: &'static str,
    pub category: &'static str,
    pub state: &'static str,
    pub crops: &'static [&'static str],
    pub is_new: bool,
    pub expiring: bool,
}

pub const STATES: &[&str] = &[
    "All India",
    "Punjab",
    "Haryana",
    "Uttar Pradesh",
    "Maharashtra",
    "Karnataka",
    "Tamil Nadu",
    "West Bengal",
];

pub const CROPS: &[&str] = &[
    "All Crops",
    "Rice",
    "Wheat",
    "Cotton",
    "Sugarcane",
    "Organic Crops",
];

pub const TYPES: &[&str] = &[
    "All Types",
    "Direct Benefit Transfer",
    "Insurance",
    "Credit/Loan",
    "Equipment",
    "Soil Management",
    "Sustainable Agriculture",
];

/// The fixed scheme listings.
pub fn schemes() -> Vec<Scheme> {
    vec![
        Scheme {
            id: 1,
            name: "PM-KISAN Samman Nidhi Yojana",
            description: "Direct income support to farmers providing ₹6000 per year in three installments",
            eligibility: "Small and marginal farmers with landholding up to 2 hectares",
            benefits: "₹6,000 per year",
            subsidy: "100%",
            category: "Direct Benefit Transfer",
            state: "All India",
            crops: &["All Crops"],
            is_new: false,
            expiring: false,
        },
        Scheme {
            id: 2,
            name: "Pradhan Mantri Fasal Bima Yojana",
            description: "Crop insurance scheme providing financial support against crop loss",
            eligibility: "All farmers growing notified crops in notified areas",
            benefits: "Up to ₹2 lakh coverage",
            subsidy: "Premium subsidy up to 50%",
            category: "Insurance",
            state: "All India",
            crops: &["Rice", "Wheat", "Cotton", "Sugarcane"],
            is_new: false,
            expiring: false,
        },
        Scheme {
            id: 3,
            name: "Soil Health Card Scheme",
            description: "Free soil testing and nutrient management recommendations",
            eligibility: "All farmers with agricultural land",
            benefits: "Free soil testing worth ₹500",
            subsidy: "100%",
            category: "Soil Management",
            state: "All India",
            crops: &["All Crops"],
            is_new: true,
            expiring: false,
        },
        Scheme {
            id: 4,
            name: "Kisan Credit Card",
            description: "Easy access to credit for agricultural and allied activities",
            eligibility: "Farmers with valid land documents",
            benefits: "Loan up to ₹3 lakh at 4% interest",
            subsidy: "Interest subsidy 3%",
            category: "Credit/Loan",
            state: "All India",
            crops: &["All Crops"],
            is_new: false,
            expiring: false,
        },
        Scheme {
            id: 5,
            name: "Sub-Mission on Agricultural Mechanization",
            description: "Financial assistance for purchasing agricultural machinery",
            eligibility: "Individual farmers, FPOs, and cooperative societies",
            benefits: "40-50% subsidy on machinery",
            subsidy: "40-50%",
            category: "Equipment",
            state: "All India",
            crops: &["All Crops"],
            is_new: false,
            expiring: true,
        },
        Scheme {
            id: 6,
            name: "National Mission for Sustainable Agriculture",
            description: "Promoting sustainable agriculture practices and climate resilience",
            eligibility: "Farmers adopting sustainable practices",
            benefits: "Up to ₹50,000 per hectare",
            subsidy: "75%",
            category: "Sustainable Agriculture",
            state: "All India",
            crops: &["Organic Crops"],
            is_new: true,
            expiring: false,
        },
    ]
}

/// Search over name and description, ANDed with state, crop, and type
/// facets.
pub fn filter_schemes<'a>(
    schemes: &'a [Scheme],
    query: &str,
    state: &str,
    crop: &str,
    scheme_type: &str,
) -> Vec<&'a Scheme> {
    schemes
        .iter()
        .filter(|s| {
            text_matches(query, &[s.name, s.description])
                && (selects_all(state) || s.state.eq_ignore_ascii_case(state))
                && (selects_all(crop)
                    || s.crops.iter().any(|c| c.eq_ignore_ascii_case(crop)))
                && (selects_all(scheme_type) || s.category.eq_ignore_ascii_case(scheme_type))
        })
        .collect()
}

pub fn new_schemes() -> Vec<Scheme> {
    schemes().into_iter().filter(|s| s.is_new).collect()
}

pub fn expiring_schemes() -> Vec<Scheme> {
    schemes().into_iter().filter(|s| s.expiring).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_filter_returns_all_six() {
        let all = schemes();
        let hits = filter_schemes(&all, "", "All India", "All Crops", "All Types");
        assert_eq!(hits.len(), 6);
    }

    #[test]
    fn text_search_covers_description() {
        let all = schemes();
        let hits = filter_schemes(&all, "soil testing", "", "", "");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Soil Health Card Scheme");
    }

    #[test]
    fn crop_facet_matches_membership() {
        let all = schemes();
        let cotton = filter_schemes(&all, "", "", "Cotton", "");
        assert_eq!(cotton.len(), 1);
        assert_eq!(cotton[0].category, "Insurance");
    }

    #[test]
    fn all_facets_are_anded() {
        let all = schemes();
        let hits = filter_schemes(&all, "insurance", "", "Rice", "Insurance");
        assert_eq!(hits.len(), 1);

        let none = filter_schemes(&all, "insurance", "", "Organic Crops", "Insurance");
        assert!(none.is_empty());
    }

    #[test]
    fn type_facet_filters_by_category() {
        let all = schemes();
        let credit = filter_schemes(&all, "", "", "", "Credit/Loan");
        assert_eq!(credit.len(), 1);
        assert_eq!(credit[0].name, "Kisan Credit Card");
    }

    #[test]
    fn new_and_expiring_flags() {
        assert_eq!(new_schemes().len(), 2);
        let expiring = expiring_schemes();
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].category, "Equipment");
    }
}
