//! The in-memory catalog: every collection the HealthSathi screens read.
//!
//! [`Catalog::sample`] returns the built-in sample data. Hosts can supply
//! their own data as JSON through [`Catalog::from_json`], which validates
//! the collections before handing them out. A catalog is never mutated
//! after construction; filters borrow from it.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emergency::{ContactKind, EmergencyContact, Hospital, HospitalKind};
use crate::models::{Article, Difficulty, Doctor, HealthRecord, RecordType, Topic, Video};
use crate::symptom::Symptom;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    #[error("{collection} entry '{id}' has an empty {field}")]
    EmptyField {
        collection: &'static str,
        id: String,
        field: &'static str,
    },
}

/// All catalog collections. Missing collections deserialize as empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub doctors: Vec<Doctor>,
    pub articles: Vec<Article>,
    pub videos: Vec<Video>,
    pub records: Vec<HealthRecord>,
    pub symptoms: Vec<Symptom>,
    pub contacts: Vec<EmergencyContact>,
    pub hospitals: Vec<Hospital>,
}

impl Catalog {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check id uniqueness and required text fields for every collection.
    pub fn validate(&self) -> Result<(), CatalogError> {
        check("doctors", self.doctors.iter().map(|d| (&d.id, &d.name)), "name")?;
        check("articles", self.articles.iter().map(|a| (&a.id, &a.title)), "title")?;
        check("videos", self.videos.iter().map(|v| (&v.id, &v.title)), "title")?;
        check("records", self.records.iter().map(|r| (&r.id, &r.title)), "title")?;
        check("symptoms", self.symptoms.iter().map(|s| (&s.id, &s.name)), "name")?;
        check("contacts", self.contacts.iter().map(|c| (&c.id, &c.number)), "number")?;
        check("hospitals", self.hospitals.iter().map(|h| (&h.id, &h.name)), "name")?;
        Ok(())
    }

    /// Item counts per collection, in declaration order.
    pub fn counts(&self) -> [(&'static str, usize); 7] {
        [
            ("doctors", self.doctors.len()),
            ("articles", self.articles.len()),
            ("videos", self.videos.len()),
            ("records", self.records.len()),
            ("symptoms", self.symptoms.len()),
            ("contacts", self.contacts.len()),
            ("hospitals", self.hospitals.len()),
        ]
    }

    /// The built-in sample data.
    pub fn sample() -> Self {
        Self {
            doctors: sample_doctors(),
            articles: sample_articles(),
            videos: sample_videos(),
            records: sample_records(),
            symptoms: sample_symptoms(),
            contacts: sample_contacts(),
            hospitals: sample_hospitals(),
        }
    }
}

fn check<'a>(
    collection: &'static str,
    entries: impl Iterator<Item = (&'a String, &'a String)>,
    field: &'static str,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for (id, text) in entries {
        if id.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                collection,
                id: id.clone(),
                field: "id",
            });
        }
        if text.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                collection,
                id: id.clone(),
                field,
            });
        }
        if !seen.insert(id.as_str()) {
            return Err(CatalogError::DuplicateId {
                collection,
                id: id.clone(),
            });
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: &str,
    name: &str,
    specialty: &str,
    experience_years: u32,
    rating: f64,
    reviews: u32,
    languages: &[&str],
    availability: &str,
    fee: f64,
    location: &str,
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        experience_years,
        rating,
        reviews,
        languages: languages.iter().map(|l| l.to_string()).collect(),
        availability: availability.to_string(),
        consultation_fee: Some(fee),
        location: location.to_string(),
        verified: true,
    }
}

fn sample_doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "1",
            "Dr. Rajesh Sharma",
            "General Medicine",
            15,
            4.8,
            234,
            &["Hindi", "English", "Punjabi"],
            "Available Now",
            200.0,
            "New Delhi",
        ),
        doctor(
            "2",
            "Dr. Priya Patel",
            "Pediatrics",
            12,
            4.9,
            189,
            &["Hindi", "English", "Gujarati"],
            "Available in 30 mins",
            250.0,
            "Ahmedabad",
        ),
        doctor(
            "3",
            "Dr. Amit Kumar",
            "Cardiology",
            20,
            4.7,
            456,
            &["Hindi", "English", "Bengali"],
            "Available Tomorrow",
            400.0,
            "Kolkata",
        ),
        doctor(
            "4",
            "Dr. Sunita Singh",
            "Ophthalmology",
            8,
            4.6,
            67,
            &["Hindi", "English", "Marathi"],
            "Available Now",
            180.0,
            "Mumbai",
        ),
        doctor(
            "5",
            "Dr. Mohammed Khan",
            "Neurology",
            18,
            4.9,
            298,
            &["Hindi", "English", "Urdu"],
            "Available in 1 hour",
            350.0,
            "Hyderabad",
        ),
        doctor(
            "6",
            "Dr. Lakshmi Iyer",
            "General Medicine",
            10,
            4.5,
            156,
            &["Hindi", "English", "Tamil", "Telugu"],
            "Available Now",
            220.0,
            "Chennai",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    category: Topic,
    read_time_minutes: u32,
    author: &str,
    summary: &str,
    language: &str,
    difficulty: Difficulty,
    featured: bool,
) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        category,
        read_time_minutes,
        author: author.to_string(),
        summary: summary.to_string(),
        language: language.to_string(),
        difficulty,
        featured,
    }
}

fn sample_articles() -> Vec<Article> {
    vec![
        article(
            "1",
            "Understanding Diabetes: Prevention and Management",
            Topic::General,
            8,
            "Dr. Rajesh Kumar",
            "Learn about diabetes prevention, early symptoms, and effective management strategies for better health.",
            "English",
            Difficulty::Beginner,
            true,
        ),
        article(
            "2",
            "मानसिक स्वास्थ्य का महत्व: तनाव को कैसे करें कम",
            Topic::Mental,
            6,
            "Dr. Priya Sharma",
            "मानसिक स्वास्थ्य की देखभाल और तनाव प्रबंधन के प्रभावी तरीकों के बारे में जानें।",
            "Hindi",
            Difficulty::Beginner,
            true,
        ),
        article(
            "3",
            "Balanced Diet for Rural Communities",
            Topic::Nutrition,
            10,
            "Nutritionist Anjali Gupta",
            "Simple and affordable nutrition tips for families in rural areas using locally available ingredients.",
            "English",
            Difficulty::Beginner,
            false,
        ),
        article(
            "4",
            "गर्भावस्था में देखभाल: मां और बच्चे के लिए जरूरी बातें",
            Topic::Maternal,
            12,
            "Dr. Sunita Iyer",
            "गर्भावस्था के दौरान माँ और बच्चे की सुरक्षा के लिए आवश्यक सावधानियाँ और देखभाल।",
            "Hindi",
            Difficulty::Intermediate,
            false,
        ),
        article(
            "5",
            "Home Exercises for Better Health",
            Topic::Fitness,
            7,
            "Fitness Coach Rahul Singh",
            "Simple exercises you can do at home without any equipment to stay fit and healthy.",
            "English",
            Difficulty::Beginner,
            false,
        ),
        article(
            "6",
            "बच्चों में सामान्य बीमारियों की रोकथाम",
            Topic::Prevention,
            9,
            "Dr. Amit Patel",
            "बच्चों में होने वाली सामान्य बीमारियों से बचाव और घरेलू उपचार के तरीके।",
            "Hindi",
            Difficulty::Beginner,
            false,
        ),
    ]
}

fn video(
    id: &str,
    title: &str,
    category: Topic,
    duration: &str,
    instructor: &str,
    language: &str,
    views: u64,
) -> Video {
    Video {
        id: id.to_string(),
        title: title.to_string(),
        category,
        duration: duration.to_string(),
        instructor: instructor.to_string(),
        language: language.to_string(),
        views,
    }
}

fn sample_videos() -> Vec<Video> {
    vec![
        video(
            "1",
            "How to Check Blood Pressure at Home",
            Topic::General,
            "5:30",
            "Dr. Sarah Johnson",
            "English",
            15420,
        ),
        video(
            "2",
            "योग: तनाव कम करने के लिए आसान आसन",
            Topic::Mental,
            "12:45",
            "योग गुरु राम शर्मा",
            "Hindi",
            8750,
        ),
        video(
            "3",
            "Basic First Aid for Emergencies",
            Topic::General,
            "8:20",
            "Emergency Nurse Lisa Chen",
            "English",
            12300,
        ),
        video(
            "4",
            "स्वस्थ भोजन बनाने के आसान तरीके",
            Topic::Nutrition,
            "10:15",
            "शेफ अनिता गुप्ता",
            "Hindi",
            6890,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    kind: RecordType,
    title: &str,
    date: (i32, u32, u32),
    doctor: &str,
    hospital: &str,
    summary: &str,
    file_url: Option<&str>,
) -> HealthRecord {
    HealthRecord {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        doctor: doctor.to_string(),
        hospital: hospital.to_string(),
        summary: summary.to_string(),
        file_url: file_url.map(str::to_string),
    }
}

fn sample_records() -> Vec<HealthRecord> {
    vec![
        record(
            "1",
            RecordType::Consultation,
            "General Health Checkup",
            (2025, 1, 15),
            "Dr. Rajesh Sharma",
            "District Hospital",
            "Routine checkup - All vital signs normal. Recommended to continue current lifestyle.",
            Some("/reports/consultation-1.pdf"),
        ),
        record(
            "2",
            RecordType::LabReport,
            "Blood Test Results",
            (2025, 1, 10),
            "Dr. Priya Patel",
            "City Medical Center",
            "Complete blood count and lipid profile. Cholesterol slightly elevated.",
            Some("/reports/blood-test-1.pdf"),
        ),
        record(
            "3",
            RecordType::Prescription,
            "Medication for Hypertension",
            (2025, 1, 8),
            "Dr. Amit Kumar",
            "Primary Health Center",
            "Prescribed medication for blood pressure management. Follow up in 2 weeks.",
            Some("/reports/prescription-1.pdf"),
        ),
        record(
            "4",
            RecordType::Vaccination,
            "COVID-19 Booster Shot",
            (2024, 12, 20),
            "Dr. Sunita Singh",
            "Vaccination Center",
            "COVID-19 booster vaccination administered. No adverse reactions reported.",
            None,
        ),
        record(
            "5",
            RecordType::Vitals,
            "Monthly Vitals Check",
            (2025, 1, 1),
            "Self Recorded",
            "Home",
            "Monthly vital signs monitoring. All parameters within normal range.",
            None,
        ),
    ]
}

fn sample_symptoms() -> Vec<Symptom> {
    [
        ("1", "Fever", "General"),
        ("2", "Headache", "Neurological"),
        ("3", "Cough", "Respiratory"),
        ("4", "Sore Throat", "Respiratory"),
        ("5", "Nausea", "Digestive"),
        ("6", "Diarrhea", "Digestive"),
        ("7", "Fatigue", "General"),
        ("8", "Body Ache", "Musculoskeletal"),
        ("9", "Chest Pain", "Cardiovascular"),
        ("10", "Shortness of Breath", "Respiratory"),
        ("11", "Dizziness", "Neurological"),
        ("12", "Stomach Pain", "Digestive"),
    ]
    .into_iter()
    .map(|(id, name, category)| Symptom {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
    })
    .collect()
}

fn sample_contacts() -> Vec<EmergencyContact> {
    [
        ("1", "National Emergency", "112", "All emergency services (Police, Fire, Medical)", ContactKind::National),
        ("2", "Medical Emergency", "108", "Free ambulance service across India", ContactKind::Medical),
        ("3", "Police", "100", "Police emergency helpline", ContactKind::National),
        ("4", "Fire Brigade", "101", "Fire and rescue services", ContactKind::National),
        ("5", "Women Helpline", "1091", "24x7 women emergency helpline", ContactKind::National),
        ("6", "Child Helpline", "1098", "Child emergency and support services", ContactKind::National),
    ]
    .into_iter()
    .map(|(id, name, number, description, kind)| EmergencyContact {
        id: id.to_string(),
        name: name.to_string(),
        number: number.to_string(),
        description: description.to_string(),
        kind,
    })
    .collect()
}

fn sample_hospitals() -> Vec<Hospital> {
    let hospital = |id: &str,
                    name: &str,
                    address: &str,
                    distance_km: f64,
                    contact: &str,
                    kind: HospitalKind,
                    facilities: &[&str]| Hospital {
        id: id.to_string(),
        name: name.to_string(),
        address: address.to_string(),
        distance_km,
        contact: contact.to_string(),
        kind,
        facilities: facilities.iter().map(|f| f.to_string()).collect(),
    };
    vec![
        hospital(
            "1",
            "District Government Hospital",
            "Main Road, District Center",
            2.5,
            "+91-1234567890",
            HospitalKind::Government,
            &["Emergency", "ICU", "Surgery", "Ambulance"],
        ),
        hospital(
            "2",
            "Primary Health Center",
            "Village Main Street",
            1.2,
            "+91-1234567891",
            HospitalKind::Government,
            &["Basic Emergency", "First Aid", "Pharmacy"],
        ),
        hospital(
            "3",
            "City Medical Center",
            "Civil Lines Area",
            5.8,
            "+91-1234567892",
            HospitalKind::Private,
            &["24/7 Emergency", "ICU", "Cardiac Care", "Surgery"],
        ),
    ]
}
