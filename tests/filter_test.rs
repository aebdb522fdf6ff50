use farmiq::catalog::equipment::{equipment, filter_equipment};
use farmiq::catalog::learning::{courses, filter_courses};
use farmiq::catalog::market::{Product, filter_products, products};
use farmiq::catalog::schemes::{filter_schemes, schemes};

#[test]
fn identity_filter_is_the_whole_list_in_order() {
    let all = products();
    let filtered = filter_products(&all, "", "all");
    let expected: Vec<&Product> = all.iter().collect();
    assert_eq!(filtered, expected);
}

#[test]
fn tractor_search_with_pune_location() {
    let all = equipment();
    let hits = filter_equipment(&all, "tractor", "pune");
    assert_eq!(hits.len(), 1);
    let hit = hits[0];
    assert!(hit.name.to_lowercase().contains("tractor"));
    assert!(hit.location.contains("Pune"));
}

#[test]
fn filtering_is_idempotent() {
    let all = equipment();
    let once: Vec<_> = filter_equipment(&all, "er", "maharashtra")
        .into_iter()
        .cloned()
        .collect();
    let twice: Vec<_> = filter_equipment(&once, "er", "maharashtra")
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(once, twice);
}

#[test]
fn query_and_facets_are_all_anded() {
    let all = schemes();

    // Text alone matches the credit-card scheme.
    let by_text = filter_schemes(&all, "credit", "", "", "");
    assert_eq!(by_text.len(), 1);

    // Adding a non-matching type facet empties the result.
    let none = filter_schemes(&all, "credit", "", "", "Insurance");
    assert!(none.is_empty());

    // Matching facets keep it.
    let kept = filter_schemes(&all, "credit", "All India", "All Crops", "Credit/Loan");
    assert_eq!(kept.len(), 1);
}

#[test]
fn facet_without_query_narrows_by_category() {
    let all = courses();
    let business = filter_courses(&all, "", "business");
    assert_eq!(business.len(), 1);
    assert_eq!(business[0].title, "Financial Planning for Farmers");
}

#[test]
fn empty_result_for_unmatched_query() {
    let all = products();
    assert!(filter_products(&all, "spaceship", "all").is_empty());
}
