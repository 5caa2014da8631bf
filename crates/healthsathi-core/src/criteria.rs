//! Criteria sets for each catalog item type.
//!
//! These structs are the explicit, serializable view state of the
//! directory, education, and records screens. Each field is one filter
//! dimension; the match policy for each field is fixed here:
//!
//! | Record | Field | Policy |
//! |--------|-------|--------|
//! | doctor | `specialty` | specialty id is a substring of the doctor's specialty label |
//! | doctor | `language` | any spoken language contains the value |
//! | doctor | `price` | fee falls inside the [`PriceBracket`] |
//! | doctor | `search` | name or specialty |
//! | article | `category`, `difficulty` | exact |
//! | article | `language` | case-insensitive equality |
//! | article | `search` | title or summary |
//! | video | `category` | exact |
//! | video | `language` | case-insensitive equality |
//! | video | `search` | title |
//! | record | `kind` | exact |
//! | record | `search` | title, doctor, or summary |
//!
//! The view-state names used by the screens (`priceRange`, `searchTerm`,
//! `selectedLanguage`, ...) are accepted as aliases. Any other key is an
//! error, so a misspelt dimension never turns into an inactive filter.

use serde::{Deserialize, Serialize};

use crate::filter::{contains_ci, eq_ci, search_matches, Criteria, Filter, Selection};
use crate::models::{
    vocabulary, Article, Difficulty, Doctor, HealthRecord, RecordType, Specialty, Topic, Video,
};

/// Upper bound (inclusive) of the low price bracket, in rupees.
pub const LOW_FEE_MAX: f64 = 200.0;
/// Upper bound (inclusive) of the medium price bracket, in rupees.
pub const MEDIUM_FEE_MAX: f64 = 300.0;

vocabulary! {
    /// Consultation fee bracket with fixed bounds.
    ///
    /// - `low`: fee <= 200
    /// - `medium`: 200 < fee <= 300
    /// - `high`: fee > 300
    PriceBracket, "price bracket" {
        Low => ("low", "Under ₹200"),
        Medium => ("medium", "₹200 - ₹300"),
        High => ("high", "Above ₹300"),
    }
}

impl PriceBracket {
    /// True when `fee` is a usable amount inside this bracket.
    pub fn contains(self, fee: Option<f64>) -> bool {
        debug_assert!(LOW_FEE_MAX < MEDIUM_FEE_MAX);
        let Some(fee) = fee.filter(|f| f.is_finite()) else {
            return false;
        };
        match self {
            PriceBracket::Low => fee <= LOW_FEE_MAX,
            PriceBracket::Medium => fee > LOW_FEE_MAX && fee <= MEDIUM_FEE_MAX,
            PriceBracket::High => fee > MEDIUM_FEE_MAX,
        }
    }
}

/// Doctor directory criteria.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DoctorCriteria {
    #[serde(alias = "selectedSpecialty")]
    pub specialty: Selection<Specialty>,
    #[serde(alias = "selectedLanguage")]
    pub language: Selection<String>,
    #[serde(alias = "price_range", alias = "priceRange")]
    pub price: Selection<PriceBracket>,
    #[serde(alias = "searchTerm")]
    pub search: String,
}

impl Criteria<Doctor> for DoctorCriteria {
    fn to_filter(&self) -> Filter<'_, Doctor> {
        Filter::new()
            .select(&self.specialty, |d: &Doctor, s: &Specialty| {
                contains_ci(&d.specialty, s.id())
            })
            .select(&self.language, |d: &Doctor, lang: &String| {
                d.languages.iter().any(|l| contains_ci(l, lang))
            })
            .select(&self.price, |d: &Doctor, b: &PriceBracket| {
                b.contains(d.consultation_fee)
            })
            .when(!self.search.is_empty(), move |d: &Doctor| {
                search_matches(&self.search, &[d.name.as_str(), d.specialty.as_str()])
            })
    }
}

/// Health education article criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArticleCriteria {
    #[serde(alias = "selectedCategory")]
    pub category: Selection<Topic>,
    #[serde(alias = "selectedLanguage")]
    pub language: Selection<String>,
    pub difficulty: Selection<Difficulty>,
    #[serde(alias = "searchTerm")]
    pub search: String,
}

impl Criteria<Article> for ArticleCriteria {
    fn to_filter(&self) -> Filter<'_, Article> {
        Filter::new()
            .select(&self.category, |a: &Article, t: &Topic| a.category == *t)
            .select(&self.language, |a: &Article, lang: &String| {
                eq_ci(&a.language, lang)
            })
            .select(&self.difficulty, |a: &Article, d: &Difficulty| {
                a.difficulty == *d
            })
            .when(!self.search.is_empty(), move |a: &Article| {
                search_matches(&self.search, &[a.title.as_str(), a.summary.as_str()])
            })
    }
}

/// Health education video criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideoCriteria {
    #[serde(alias = "selectedCategory")]
    pub category: Selection<Topic>,
    #[serde(alias = "selectedLanguage")]
    pub language: Selection<String>,
    #[serde(alias = "searchTerm")]
    pub search: String,
}

impl Criteria<Video> for VideoCriteria {
    fn to_filter(&self) -> Filter<'_, Video> {
        Filter::new()
            .select(&self.category, |v: &Video, t: &Topic| v.category == *t)
            .select(&self.language, |v: &Video, lang: &String| {
                eq_ci(&v.language, lang)
            })
            .when(!self.search.is_empty(), move |v: &Video| {
                search_matches(&self.search, &[v.title.as_str()])
            })
    }
}

/// Health record criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordCriteria {
    #[serde(rename = "type", alias = "filterType")]
    pub kind: Selection<RecordType>,
    #[serde(alias = "searchTerm")]
    pub search: String,
}

impl Criteria<HealthRecord> for RecordCriteria {
    fn to_filter(&self) -> Filter<'_, HealthRecord> {
        Filter::new()
            .select(&self.kind, |r: &HealthRecord, k: &RecordType| r.kind == *k)
            .when(!self.search.is_empty(), move |r: &HealthRecord| {
                search_matches(
                    &self.search,
                    &[r.title.as_str(), r.doctor.as_str(), r.summary.as_str()],
                )
            })
    }
}
