//! Learning hub: courses, webinars, and downloadable resources.

use serde::Serialize;

use super::{selects_all, text_matches};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: u64,
    pub title: &'static str,
    pub category: &'static str,
    pub instructor: &'static str,
    pub duration: &'static str,
    pub lessons: u32,
    pub students: u32,
    pub rating: f32,
    pub progress_percent: u8,
    pub level: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

/// The fixed course list.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Modern Crop Management Techniques",
            category: "crop-management",
            instructor: "Dr. Rajesh Sharma",
            duration: "4 hours",
            lessons: 12,
            students: 1250,
            rating: 4.8,
            progress_percent: 65,
            level: "Intermediate",
            description: "Learn advanced techniques for maximizing crop yield and quality through modern farming practices.",
            tags: &["Irrigation", "Soil Health", "Pest Control"],
        },
        Course {
            id: 2,
            title: "Organic Farming Fundamentals",
            category: "organic-farming",
            instructor: "Prof. Sunita Patel",
            duration: "6 hours",
            lessons: 18,
            students: 890,
            rating: 4.9,
            progress_percent: 0,
            level: "Beginner",
            description: "Complete guide to organic farming methods, certification process, and market opportunities.",
            tags: &["Organic", "Certification", "Marketing"],
        },
        Course {
            id: 3,
            title: "Smart Irrigation Systems",
            category: "technology",
            instructor: "Eng. Amit Kumar",
            duration: "3 hours",
            lessons: 8,
            students: 650,
            rating: 4.7,
            progress_percent: 100,
            level: "Advanced",
            description: "Master modern irrigation technologies including drip systems, sensors, and automation.",
            tags: &["IoT", "Water Management", "Automation"],
        },
        Course {
            id: 4,
            title: "Financial Planning for Farmers",
            category: "business",
            instructor: "CA Priya Joshi",
            duration: "5 hours",
            lessons: 15,
            students: 1100,
            rating: 4.6,
            progress_percent: 25,
            level: "Intermediate",
            description: "Learn budgeting, investment planning, insurance, and government schemes for farmers.",
            tags: &["Finance", "Insurance", "Subsidies"],
        },
    ]
}

/// Search over title and description, ANDed with the category facet.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    query: &str,
    category: &str,
) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| {
            text_matches(query, &[c.title, c.description])
                && (selects_all(category) || c.category.eq_ignore_ascii_case(category))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WebinarStatus {
    Upcoming,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Webinar {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub speaker: &'static str,
    pub attendees: u32,
    pub status: WebinarStatus,
}

pub fn webinars() -> Vec<Webinar> {
    vec![
        Webinar {
            title: "Climate-Smart Agriculture",
            date: "2024-01-25",
            time: "7:00 PM",
            speaker: "Dr. Meera Singh",
            attendees: 450,
            status: WebinarStatus::Upcoming,
        },
        Webinar {
            title: "Precision Farming with Drones",
            date: "2024-01-20",
            time: "6:30 PM",
            speaker: "Tech. Rahul Verma",
            attendees: 320,
            status: WebinarStatus::Completed,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub title: &'static str,
    pub format: &'static str,
    pub size: &'static str,
    pub downloads: u32,
    pub category: &'static str,
}

pub fn resources() -> Vec<Resource> {
    vec![
        Resource {
            title: "Crop Disease Identification Guide",
            format: "PDF",
            size: "2.5 MB",
            downloads: 1200,
            category: "Reference",
        },
        Resource {
            title: "Seasonal Farming Calendar",
            format: "PDF",
            size: "1.8 MB",
            downloads: 890,
            category: "Planning",
        },
        Resource {
            title: "Government Schemes Handbook",
            format: "PDF",
            size: "3.2 MB",
            downloads: 2100,
            category: "Finance",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_facet() {
        let all = courses();
        let tech = filter_courses(&all, "", "technology");
        assert_eq!(tech.len(), 1);
        assert_eq!(tech[0].title, "Smart Irrigation Systems");
    }

    #[test]
    fn search_and_category_are_anded() {
        let all = courses();
        let hits = filter_courses(&all, "farming", "organic-farming");
        assert_eq!(hits.len(), 1);

        let none = filter_courses(&all, "drones", "organic-farming");
        assert!(none.is_empty());
    }

    #[test]
    fn identity_filter_keeps_course_order() {
        let all = courses();
        let ids: Vec<_> = filter_courses(&all, "", "all").iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn fixed_webinars_and_resources() {
        assert_eq!(webinars().len(), 2);
        assert_eq!(resources().len(), 3);
        assert!(resources().iter().all(|r| r.format == "PDF"));
    }
}
