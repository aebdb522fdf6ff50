//! Marketplace listings and the price ticker.

use serde::Serialize;

use super::{selects_all, text_matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: u64,
    pub name: &'static str,
    pub category: &'static str,
    pub price: &'static str,
    pub seller: &'static str,
    pub location: &'static str,
    pub rating: f32,
    pub stock: &'static str,
    pub verified: bool,
    pub organic: bool,
}

/// The fixed product listings.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Fresh Tomatoes",
            category: "vegetables",
            price: "₹45/kg",
            seller: "Rajesh Kumar",
            location: "Pune, Maharashtra",
            rating: 4.8,
            stock: "500 kg available",
            verified: true,
            organic: true,
        },
        Product {
            id: 2,
            name: "Basmati Rice",
            category: "grains",
            price: "₹85/kg",
            seller: "Farmers Collective",
            location: "Haryana",
            rating: 4.9,
            stock: "10 tons available",
            verified: true,
            organic: false,
        },
        Product {
            id: 3,
            name: "Fresh Onions",
            category: "vegetables",
            price: "₹25/kg",
            seller: "Sunita Devi",
            location: "Nashik, Maharashtra",
            rating: 4.6,
            stock: "2 tons available",
            verified: true,
            organic: false,
        },
        Product {
            id: 4,
            name: "Organic Wheat",
            category: "grains",
            price: "₹32/kg",
            seller: "Green Valley Farm",
            location: "Punjab",
            rating: 4.7,
            stock: "5 tons available",
            verified: true,
            organic: true,
        },
    ]
}

/// Search over name and seller, ANDed with the category facet.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    category: &str,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| {
            text_matches(query, &[p.name, p.seller])
                && (selects_all(category) || p.category.eq_ignore_ascii_case(category))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketPrice {
    pub crop: &'static str,
    pub current_price: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

/// The fixed price ticker.
pub fn market_prices() -> Vec<MarketPrice> {
    vec![
        MarketPrice {
            crop: "Tomato",
            current_price: "₹45",
            change: "+8%",
            trend: Trend::Up,
        },
        MarketPrice {
            crop: "Onion",
            current_price: "₹25",
            change: "-3%",
            trend: Trend::Down,
        },
        MarketPrice {
            crop: "Potato",
            current_price: "₹20",
            change: "+12%",
            trend: Trend::Up,
        },
        MarketPrice {
            crop: "Rice",
            current_price: "₹85",
            change: "+5%",
            trend: Trend::Up,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_filter_returns_all_in_order() {
        let all = products();
        let filtered = filter_products(&all, "", "all");
        assert_eq!(filtered.len(), all.len());
        let ids: Vec<_> = filtered.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn search_matches_name_or_seller() {
        let all = products();
        let by_name = filter_products(&all, "tomato", "all");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Fresh Tomatoes");

        let by_seller = filter_products(&all, "sunita", "all");
        assert_eq!(by_seller.len(), 1);
        assert_eq!(by_seller[0].name, "Fresh Onions");
    }

    #[test]
    fn category_facet_is_anded_with_search() {
        let all = products();
        let grains = filter_products(&all, "", "grains");
        assert_eq!(grains.len(), 2);

        let organic_grain = filter_products(&all, "wheat", "grains");
        assert_eq!(organic_grain.len(), 1);
        assert_eq!(organic_grain[0].name, "Organic Wheat");

        let mismatch = filter_products(&all, "tomato", "grains");
        assert!(mismatch.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        let all = products();
        let once: Vec<Product> = filter_products(&all, "fresh", "vegetables")
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_products(&once, "fresh", "vegetables");
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn ticker_has_four_rows() {
        let prices = market_prices();
        assert_eq!(prices.len(), 4);
        assert_eq!(prices[0].trend, Trend::Up);
        assert_eq!(prices[1].trend, Trend::Down);
    }
}
