//! # Professional Records
//!
//! Read-only profile data consumed by the explore and payment pages, plus the
//! explore filters.

use serde::{Deserialize, Serialize};

/// One bookable day and its time slots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Availability {
    pub day: String,
    pub slots: Vec<String>,
}

/// A professional listed on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Professional {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub category: String,
    pub rating: f32,
    pub reviews: u32,
    pub location: String,
    /// Whole US dollars per hour
    pub hourly_rate: u32,
    pub accepts_crypto: bool,
    pub about: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub availability: Vec<Availability>,
}

impl Professional {
    /// Slots offered on `day`, empty if the day is not bookable.
    pub fn slots_for(&self, day: &str) -> &[String] {
        self.availability
            .iter()
            .find(|a| a.day == day)
            .map(|a| a.slots.as_slice())
            .unwrap_or(&[])
    }

    /// First bookable day and its first slot, used to pre-fill the booking form.
    pub fn first_opening(&self) -> Option<(&str, &str)> {
        self.availability
            .iter()
            .find_map(|a| a.slots.first().map(|slot| (a.day.as_str(), slot.as_str())))
    }
}

/// Look up a professional by id.
pub fn find_professional(professionals: &[Professional], id: u32) -> Option<&Professional> {
    professionals.iter().find(|p| p.id == id)
}

/// Hourly-rate bucket offered by the explore filters. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    Any,
    UpTo50,
    From50To100,
    From100,
}

impl PriceRange {
    pub const ALL: [PriceRange; 4] = [
        PriceRange::Any,
        PriceRange::UpTo50,
        PriceRange::From50To100,
        PriceRange::From100,
    ];

    /// Form value, e.g. `"50-100"`.
    pub fn value(&self) -> &'static str {
        match self {
            PriceRange::Any => "all",
            PriceRange::UpTo50 => "0-50",
            PriceRange::From50To100 => "50-100",
            PriceRange::From100 => "100",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceRange::Any => "All Prices",
            PriceRange::UpTo50 => "$0 - $50 per hour",
            PriceRange::From50To100 => "$50 - $100 per hour",
            PriceRange::From100 => "$100+ per hour",
        }
    }

    /// Parse a form value; unknown values mean no price filter.
    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.value() == value)
            .unwrap_or_default()
    }

    pub fn contains(&self, hourly_rate: u32) -> bool {
        match self {
            PriceRange::Any => true,
            PriceRange::UpTo50 => hourly_rate <= 50,
            PriceRange::From50To100 => (50..=100).contains(&hourly_rate),
            PriceRange::From100 => hourly_rate >= 100,
        }
    }
}

/// Explore-page filters. The default filter keeps everyone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfessionalFilter {
    /// Case-insensitive match on name, title, about, or any tag
    pub search: String,
    /// Exact category; `None` for all categories
    pub category: Option<String>,
    pub price: PriceRange,
    pub crypto_only: bool,
}

impl ProfessionalFilter {
    pub fn matches(&self, professional: &Professional) -> bool {
        let needle = self.search.trim().to_lowercase();
        let found = needle.is_empty()
            || [&professional.name, &professional.title, &professional.about]
                .into_iter()
                .chain(professional.tags.iter())
                .any(|field| field.to_lowercase().contains(&needle));

        found
            && self.category.as_ref().map_or(true, |c| *c == professional.category)
            && self.price.contains(professional.hourly_rate)
            && (!self.crypto_only || professional.accepts_crypto)
    }
}

/// Professionals passing `filter`, in their original order.
pub fn filter_professionals<'a>(
    professionals: &'a [Professional],
    filter: &ProfessionalFilter,
) -> Vec<&'a Professional> {
    professionals.iter().filter(|p| filter.matches(p)).collect()
}

/// Distinct categories in first-seen order.
pub fn categories(professionals: &[Professional]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for p in professionals {
        if !seen.contains(&p.category.as_str()) {
            seen.push(&p.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tutor() -> Professional {
        Professional {
            id: 1,
            name: "Dr. Emily Johnson".to_string(),
            title: "Mathematics Professor".to_string(),
            category: "Education".to_string(),
            rating: 4.9,
            reviews: 128,
            location: "New York, NY".to_string(),
            hourly_rate: 75,
            accepts_crypto: true,
            about: String::new(),
            tags: vec![],
            availability: vec![
                Availability {
                    day: "Monday".to_string(),
                    slots: vec!["9:00 AM - 12:00 PM".to_string(), "2:00 PM - 5:00 PM".to_string()],
                },
                Availability {
                    day: "Friday".to_string(),
                    slots: vec!["9:00 AM - 12:00 PM".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_slots_for_known_and_unknown_day() {
        let p = tutor();
        assert_eq!(p.slots_for("Monday").len(), 2);
        assert!(p.slots_for("Sunday").is_empty());
    }

    #[test]
    fn test_first_opening() {
        let mut p = tutor();
        assert_eq!(p.first_opening(), Some(("Monday", "9:00 AM - 12:00 PM")));

        p.availability.clear();
        assert_eq!(p.first_opening(), None);
    }

    #[test]
    fn test_deserialize_without_optional_lists() {
        let json = r#"{
            "id": 3, "name": "Sofia Rodriguez", "title": "Spanish Language Tutor",
            "category": "Education", "rating": 4.7, "reviews": 156,
            "location": "Miami, FL", "hourly_rate": 45, "accepts_crypto": false,
            "about": "Native Spanish speaker."
        }"#;
        let p: Professional = serde_json::from_str(json).unwrap();
        assert!(!p.accepts_crypto);
        assert!(p.availability.is_empty());
        assert_eq!(find_professional(std::slice::from_ref(&p), 3).map(|p| p.hourly_rate), Some(45));
    }

    fn roster() -> Vec<Professional> {
        let mut coder = tutor();
        coder.id = 4;
        coder.name = "Alex Chen".to_string();
        coder.title = "Full-Stack Developer".to_string();
        coder.category = "Technology".to_string();
        coder.hourly_rate = 90;
        coder.tags = vec!["React".to_string(), "Node.js".to_string()];

        let mut potter = tutor();
        potter.id = 2;
        potter.name = "Marcus Williams".to_string();
        potter.title = "Pottery Artist".to_string();
        potter.category = "Crafts".to_string();
        potter.hourly_rate = 50;
        potter.accepts_crypto = false;
        potter.about = "Hand-built ceramics and wheel throwing.".to_string();

        let mut coach = tutor();
        coach.id = 5;
        coach.name = "Jessica Taylor".to_string();
        coach.title = "Yoga Instructor".to_string();
        coach.category = "Fitness".to_string();
        coach.hourly_rate = 120;

        vec![tutor(), potter, coder, coach]
    }

    fn ids(found: Vec<&Professional>) -> Vec<u32> {
        found.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_default_filter_keeps_everyone() {
        let all = roster();
        assert_eq!(ids(filter_professionals(&all, &ProfessionalFilter::default())), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let all = roster();
        let search = |term: &str| {
            let filter = ProfessionalFilter { search: term.to_string(), ..Default::default() };
            ids(filter_professionals(&all, &filter))
        };

        assert_eq!(search("alex"), vec![4]);
        assert_eq!(search("YOGA"), vec![5]);
        assert_eq!(search("ceramics"), vec![2]);
        assert_eq!(search("node.js"), vec![4]);
        assert_eq!(search("   "), vec![1, 2, 4, 5]);
        assert!(search("welding").is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        assert!(PriceRange::UpTo50.contains(50));
        assert!(PriceRange::From50To100.contains(50));
        assert!(PriceRange::From50To100.contains(100));
        assert!(!PriceRange::From50To100.contains(101));
        assert!(PriceRange::From100.contains(100));
        assert!(!PriceRange::From100.contains(99));

        let all = roster();
        let filter = ProfessionalFilter { price: PriceRange::From50To100, ..Default::default() };
        assert_eq!(ids(filter_professionals(&all, &filter)), vec![1, 2, 4]);
    }

    #[test]
    fn test_price_range_from_value() {
        assert_eq!(PriceRange::from_value("0-50"), PriceRange::UpTo50);
        assert_eq!(PriceRange::from_value("100"), PriceRange::From100);
        assert_eq!(PriceRange::from_value("bogus"), PriceRange::Any);
    }

    #[test]
    fn test_filters_combine() {
        let all = roster();
        let filter = ProfessionalFilter {
            search: String::new(),
            category: Some("Education".to_string()),
            price: PriceRange::From50To100,
            crypto_only: true,
        };
        assert_eq!(ids(filter_professionals(&all, &filter)), vec![1]);

        let crypto = ProfessionalFilter { crypto_only: true, ..Default::default() };
        assert_eq!(ids(filter_professionals(&all, &crypto)), vec![1, 4, 5]);

        let nobody = ProfessionalFilter { category: Some("Music".to_string()), ..Default::default() };
        assert!(filter_professionals(&all, &nobody).is_empty());
    }

    #[test]
    fn test_categories_first_seen_order() {
        assert_eq!(categories(&roster()), vec!["Education", "Crafts", "Technology", "Fitness"]);
    }
}
