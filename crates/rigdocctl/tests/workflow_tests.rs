//! End-to-end workflow tests through the library surface.
//!
//! Cover the full user path: build an observation, run the diagnosis,
//! archive the run, read it back. No terminal interaction here; the
//! interactive picker is exercised by its own unit tests.

use rigdocctl::history::{HistoryEntry, HistoryStore, HISTORY_CAP};
use rigdocctl::rules_file;
use rigdoc_core::{format_results_text, Catalog, DiagnosisRun, Observation};
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

/// A user ticks three RAM symptoms on the built-in catalog and gets a
/// RAM-first ranking with remedy text.
#[test]
fn diagnose_and_render_ram_scenario() {
    let catalog = Catalog::builtin();
    let obs = Observation::from_symptoms([
        "Repeated long beeps at power-on (usually three)",
        "Blue screen errors naming Memory Management",
        "Machine restarts itself at random",
    ]);

    let run = DiagnosisRun::evaluate(&catalog, obs).unwrap();

    let top = run.top().unwrap();
    assert_eq!(top.cause_name, "Faulty RAM module");
    // 0.99 then 0.9: 0.99 + 0.9*0.01 = 0.999
    // then 0.5:      0.999 + 0.5*0.001 = 0.9995
    assert!((top.score - 0.9995).abs() < 1e-9);
    assert_eq!(top.matched_symptoms, 3);
    assert_eq!(top.total_symptoms, 5);

    let text = format_results_text(&run.results);
    assert!(text.contains("1. Faulty RAM module (100%, very confident)"));
    assert!(text.contains("Matched 3 of 5 known symptoms"));
    assert!(text.contains("soft eraser"));
}

/// Runs archive into the store and come back newest-last in file
/// order, with the cap enforced across appends.
#[test]
fn archive_runs_and_enforce_cap() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::new(dir.path());
    let catalog = Catalog::builtin();

    for i in 0..(HISTORY_CAP + 3) {
        let symptom = if i % 2 == 0 {
            "Power supply fan not spinning"
        } else {
            "Clicking or ticking sounds from the drive"
        };
        let run =
            DiagnosisRun::evaluate(&catalog, Observation::from_symptoms([symptom])).unwrap();
        store.append(&HistoryEntry::new(&run)).unwrap();
    }

    let entries = store.read_all().unwrap();
    assert_eq!(entries.len(), HISTORY_CAP);

    // Newest entry is last in file order; the final loop turn used
    // the even-index symptom.
    let newest = entries.last().unwrap();
    assert_eq!(
        newest.run.top().unwrap().cause_name,
        "Power supply (PSU) failure"
    );
}

/// Archived entries survive a JSON round trip with the run intact.
#[test]
fn archive_entry_json_roundtrip() {
    let catalog = Catalog::builtin();
    let mut obs = Observation::new();
    obs.observe_with_confidence("CPU fan spinning audibly loud", 0.7)
        .unwrap();
    let run = DiagnosisRun::evaluate(&catalog, obs).unwrap();
    let entry = HistoryEntry::new(&run);

    let json = serde_json::to_string(&entry).unwrap();
    let back: HistoryEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(back.id, entry.id);
    assert_eq!(back.recorded_at, entry.recorded_at);
    assert_eq!(
        back.run.observation.confidence_for("CPU fan spinning audibly loud"),
        Some(0.7)
    );
    assert_eq!(back.run.results.len(), entry.run.results.len());
}

/// A custom rules file drives the same pipeline as the built-in
/// catalog.
#[test]
fn custom_rules_file_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[cause]]
id = 10
name = "Dead CMOS battery"
remedy = "Replace the coin cell."

[[cause.symptom]]
name = "Clock resets on every boot"
weight = 0.9

[[cause]]
id = 11
name = "Loose front-panel header"
remedy = "Reseat the front-panel connectors."

[[cause.symptom]]
name = "Power button needs several presses"
weight = 0.6
"#
    )
    .unwrap();

    let catalog = rules_file::load(file.path()).unwrap();
    assert_eq!(catalog.symptoms().len(), 2);

    let run = DiagnosisRun::evaluate(
        &catalog,
        Observation::from_symptoms(["Clock resets on every boot"]),
    )
    .unwrap();

    assert_eq!(run.results.len(), 1);
    assert_eq!(run.top().unwrap().cause_id, 10);
    assert_eq!(run.top().unwrap().score, 0.9);
}
