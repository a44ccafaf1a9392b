//! Spec and certification command integration tests

mod common;

use predicates::prelude::*;

const SKILLS: &str = r#"## Languages

Rust, Python

# Certifications

<div class="cert-container">
  <a href="https://www.credly.com/badges/one" target="_blank" class="cert-card">
    <img src="/assets/images/certificates/ccp.png" width="120" height="120" alt="Cloud Practitioner">
    <span>Cloud Practitioner</span>
  </a>
</div>
"#;

#[test]
fn test_show_spec() {
    let site = common::TestSite::new();
    site.write_spec("about", "title: About", "Hello there");

    site.cmd()
        .args(["spec", "show", "about"])
        .assert()
        .success()
        .stdout(predicate::str::contains("title: About"))
        .stdout(predicate::str::contains("Hello there"));
}

#[test]
fn test_show_missing_spec() {
    let site = common::TestSite::new();

    site.cmd()
        .args(["spec", "show", "about"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Spec 'about' not found"));
}

#[test]
fn test_show_skills_content_only() {
    let site = common::TestSite::new();
    site.write_spec("skills", "title: Skills", SKILLS);

    site.cmd()
        .args(["spec", "show", "skills", "--content-only"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust, Python"))
        .stdout(predicate::str::contains("cert-card").not());
}

#[test]
fn test_save_spec_keeps_front_matter() {
    let site = common::TestSite::new();
    site.write_spec("experience", "title: Experience", "Old");

    site.cmd()
        .args(["spec", "save", "experience", "--body", "New"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved spec 'experience'"));

    assert_eq!(
        site.read_file("src/content/spec/experience.md"),
        "---\ntitle: Experience\n---\n\nNew"
    );
}

#[test]
fn test_save_skills_keeps_certifications() {
    let site = common::TestSite::new();
    site.write_spec("skills", "title: Skills", SKILLS);

    site.cmd()
        .args(["spec", "save", "skills", "--body", "## Languages\n\nRust, Go"])
        .assert()
        .success();

    let content = site.read_file("src/content/spec/skills.md");
    assert!(content.contains("Rust, Go\n\n# Certifications\n\n<div class=\"cert-container\""));

    site.cmd()
        .args(["certs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloud Practitioner"));
}

#[test]
fn test_certs_list_reads_hand_written_block() {
    let site = common::TestSite::new();
    site.write_spec("skills", "title: Skills", SKILLS);

    site.cmd()
        .args(["certs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Cloud Practitioner"))
        .stdout(predicate::str::contains("https://www.credly.com/badges/one"))
        .stdout(predicate::str::contains("/assets/images/certificates/ccp.png"));
}

#[test]
fn test_certs_add_with_upload_and_remove() {
    let site = common::TestSite::new();
    site.write_spec("skills", "title: Skills", SKILLS);
    let logo = site.write_outside("Terraform Logo.PNG", b"\x89PNG");

    site.cmd()
        .args([
            "certs",
            "add",
            "--name",
            "Terraform Associate",
            "--url",
            "https://www.credly.com/badges/two",
            "--image-file",
        ])
        .arg(&logo)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/assets/images/certificates/terraform_logo.png",
        ));

    assert!(site.file_exists("public/assets/images/certificates/terraform_logo.png"));

    let output = site.cmd().args(["certs", "list", "--json"]).output().unwrap();
    let certs: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(certs.as_array().unwrap().len(), 2);
    assert_eq!(certs[1]["name"], "Terraform Associate");
    assert_eq!(
        certs[1]["image"],
        "/assets/images/certificates/terraform_logo.png"
    );

    site.cmd()
        .args(["certs", "remove", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed certification 'Cloud Practitioner'"));

    let content = site.read_file("src/content/spec/skills.md");
    assert!(content.starts_with("---\ntitle: Skills\n---\n\n## Languages"));
    assert!(!content.contains("Cloud Practitioner"));
    assert!(content.contains("Terraform Associate"));
}

#[test]
fn test_certs_edit_unknown_id() {
    let site = common::TestSite::new();
    site.write_spec("skills", "title: Skills", SKILLS);

    site.cmd()
        .args(["certs", "edit", "9", "--name", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Certification '9' not found"));
}
