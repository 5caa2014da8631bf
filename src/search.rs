//! Catalog listing commands: `doctors`, `articles`, `videos`, `records`.
//!
//! Each command applies one criteria record to its collection and prints
//! the hits in catalog order, either as a numbered text listing or as a
//! JSON array (`--json`).

use anyhow::Result;
use healthsathi_core::criteria::{ArticleCriteria, DoctorCriteria, RecordCriteria, VideoCriteria};
use healthsathi_core::filter::filter;
use healthsathi_core::models::{Article, Doctor, HealthRecord, Video};
use healthsathi_core::Catalog;
use serde::Serialize;

/// Print `items` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(items: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}

pub fn fee_label(fee: Option<f64>) -> String {
    match fee {
        Some(f) => format!("₹{}", f),
        None => "n/a".to_string(),
    }
}

pub fn run_doctors(catalog: &Catalog, criteria: &DoctorCriteria, json: bool) -> Result<()> {
    let hits = filter(&catalog.doctors, criteria);
    tracing::debug!(hits = hits.len(), ?criteria, "doctor search");

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, d) in hits.iter().enumerate() {
        print_doctor(i + 1, d);
    }
    Ok(())
}

fn print_doctor(n: usize, d: &Doctor) {
    let tick = if d.verified { " ✓" } else { "" };
    println!("{}. {}{} ({})", n, d.name, tick, d.specialty);
    println!(
        "    fee: {} | rating: {:.1} ({} reviews) | {} years",
        fee_label(d.consultation_fee),
        d.rating,
        d.reviews,
        d.experience_years
    );
    println!("    languages: {}", d.languages.join(", "));
    println!(
        "    availability: {} ({:?})",
        d.availability,
        d.availability_class()
    );
    if !d.location.is_empty() {
        println!("    location: {}", d.location);
    }
    println!("    id: {}", d.id);
    println!();
}

pub fn run_articles(catalog: &Catalog, criteria: &ArticleCriteria, json: bool) -> Result<()> {
    let hits = filter(&catalog.articles, criteria);
    tracing::debug!(hits = hits.len(), ?criteria, "article search");

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, a) in hits.iter().enumerate() {
        print_article(i + 1, a);
    }
    Ok(())
}

fn print_article(n: usize, a: &Article) {
    let star = if a.featured { " [featured]" } else { "" };
    println!("{}. {}{}", n, a.title, star);
    println!(
        "    {} | {} | {} | {} min read",
        a.category.label(),
        a.language,
        a.difficulty.label(),
        a.read_time_minutes
    );
    if !a.author.is_empty() {
        println!("    author: {}", a.author);
    }
    println!("    summary: \"{}\"", a.summary.trim());
    println!("    id: {}", a.id);
    println!();
}

pub fn run_videos(catalog: &Catalog, criteria: &VideoCriteria, json: bool) -> Result<()> {
    let hits = filter(&catalog.videos, criteria);
    tracing::debug!(hits = hits.len(), ?criteria, "video search");

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, v) in hits.iter().enumerate() {
        print_video(i + 1, v);
    }
    Ok(())
}

fn print_video(n: usize, v: &Video) {
    println!("{}. {} [{}]", n, v.title, v.duration);
    println!(
        "    {} | {} | {} views",
        v.category.label(),
        v.language,
        v.views
    );
    if !v.instructor.is_empty() {
        println!("    instructor: {}", v.instructor);
    }
    println!("    id: {}", v.id);
    println!();
}

pub fn run_records(catalog: &Catalog, criteria: &RecordCriteria, json: bool) -> Result<()> {
    let hits = filter(&catalog.records, criteria);
    tracing::debug!(hits = hits.len(), ?criteria, "record search");

    if json {
        return print_json(&hits);
    }
    if hits.is_empty() {
        println!("No results.");
        return Ok(());
    }

    for (i, r) in hits.iter().enumerate() {
        print_record(i + 1, r);
    }
    Ok(())
}

fn print_record(n: usize, r: &HealthRecord) {
    println!("{}. [{}] {}", n, r.kind.label(), r.title);
    println!("    date: {}", r.date.format("%Y-%m-%d"));
    println!("    doctor: {} | {}", r.doctor, r.hospital);
    println!("    summary: \"{}\"", r.summary.trim());
    if let Some(url) = &r.file_url {
        println!("    file: {}", url);
    }
    println!("    id: {}", r.id);
    println!();
}
