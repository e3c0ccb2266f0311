//! Renders the template shipped in the repository's `templates/` tree.

use std::path::PathBuf;

use chrono::{Local, TimeZone};

use clinicsite_core::StaffMember;
use clinicsite_renderer::{Engine, SiteContext};

fn shipped_template_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("templates")
        .join("index.html.tera")
}

fn make_roster() -> Vec<StaffMember> {
    ["Dr. Orly Peled", "Dr. Dafi Shalev"]
        .iter()
        .map(|name| StaffMember {
            name: name.to_string(),
            title: "Family Physician".to_string(),
            image: "img/portrait.jpg".to_string(),
            bio: "Sees patients weekdays.".to_string(),
        })
        .collect()
}

#[test]
fn shipped_template_renders_full_page() {
    let engine = Engine::from_template_file(&shipped_template_path()).expect("shipped template");
    let at = Local.with_ymd_and_hms(2025, 2, 14, 9, 0, 0).unwrap();
    let ctx = SiteContext::assemble("Welcome to our clinic.".to_string(), make_roster(), at);

    let html = engine.render(&ctx).expect("render");
    assert!(html.contains("Welcome to our clinic."));
    assert!(html.contains("Dr. Orly Peled"));
    assert!(html.contains("Dr. Dafi Shalev"));
    assert!(html.contains("2025-02-14 09:00:00"));
}

#[test]
fn shipped_template_handles_an_empty_roster() {
    let engine = Engine::from_template_file(&shipped_template_path()).expect("shipped template");
    let at = Local.with_ymd_and_hms(2025, 2, 14, 9, 0, 0).unwrap();
    let ctx = SiteContext::assemble("Welcome.".to_string(), vec![], at);

    // A roster shorter than the fixed list is normal; empty is the extreme.
    let html = engine.render(&ctx).expect("render");
    assert!(html.contains("Welcome."));
}
