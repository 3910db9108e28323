//! Command handlers for rigdocctl.

use crate::history::{HistoryEntry, HistoryStore};
use crate::output;
use crate::picker;
use crate::rules_file;
use anyhow::{bail, Context, Result};
use rigdoc_core::{Catalog, DiagnosisRun, Observation};
use std::path::Path;
use tracing::info;

/// Build the catalog: rules file if given, built-in otherwise.
pub fn load_catalog(rules: Option<&Path>) -> Result<Catalog> {
    match rules {
        Some(path) => {
            let catalog = rules_file::load(path)?;
            info!(path = %path.display(), causes = catalog.len(), "loaded rules file");
            Ok(catalog)
        }
        None => Ok(Catalog::builtin()),
    }
}

/// Handle symptoms command
pub fn handle_symptoms(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.symptoms())?);
        return Ok(());
    }
    output::render_symptom_list(catalog.symptoms());
    Ok(())
}

/// Handle causes command
pub fn handle_causes(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(catalog.causes())?);
        return Ok(());
    }
    output::render_causes(catalog.causes());
    Ok(())
}

/// Handle diagnose command
pub fn handle_diagnose(
    catalog: &Catalog,
    symptom_args: &[String],
    pick: bool,
    json: bool,
    no_save: bool,
) -> Result<()> {
    let observation = if pick {
        if !symptom_args.is_empty() {
            bail!("--pick and symptom arguments cannot be combined");
        }
        picker::pick_observation(catalog.symptoms())?
    } else {
        // Bad symptom arguments are user input, not an app failure;
        // present them like any other engine rejection.
        match parse_observation(catalog, symptom_args) {
            Ok(observation) => observation,
            Err(err) => {
                output::display_error(&format!("{:#}", err));
                std::process::exit(1);
            }
        }
    };

    let run = match DiagnosisRun::evaluate(catalog, observation) {
        Ok(run) => run,
        Err(err) => {
            output::display_error(&err.to_string());
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        output::render_run(&run);
    }

    if !no_save {
        let store = HistoryStore::default_location()?;
        let entry = HistoryEntry::new(&run);
        store
            .append(&entry)
            .context("Failed to archive the diagnosis run")?;
        info!(id = %entry.id, "archived diagnosis run");
    }

    Ok(())
}

/// Handle history command
pub fn handle_history(clear: bool, json: bool) -> Result<()> {
    let store = HistoryStore::default_location()?;

    if clear {
        if !picker::confirm_clear()? {
            output::display_info("History kept.");
            return Ok(());
        }
        store.clear()?;
        output::display_success("Diagnosis history cleared.");
        return Ok(());
    }

    let entries = store.read_all()?;
    if json {
        // Newest first, matching the rendered view.
        let newest_first: Vec<&HistoryEntry> = entries.iter().rev().collect();
        println!("{}", serde_json::to_string_pretty(&newest_first)?);
        return Ok(());
    }
    output::render_history(&entries);
    Ok(())
}

/// Turn CLI symptom arguments into an observation.
///
/// Each argument is a symptom name or a checklist number, optionally
/// suffixed `=CONF`. An argument matching a catalog name verbatim is
/// taken whole, so names containing '=' stay usable. Unknown names
/// still go in (the engine ignores them) but earn a warning so typos
/// surface.
fn parse_observation(catalog: &Catalog, args: &[String]) -> Result<Observation> {
    let mut observation = Observation::new();

    for arg in args {
        let arg = arg.trim();
        let (symptom, confidence) = if catalog.knows_symptom(arg) {
            (arg.to_string(), 1.0)
        } else {
            let (raw, confidence) = match arg.rsplit_once('=') {
                Some((name, conf_str)) => {
                    let confidence: f64 = conf_str.trim().parse().with_context(|| {
                        format!("Invalid confidence '{}' in '{}'", conf_str, arg)
                    })?;
                    (name.trim(), confidence)
                }
                None => (arg, 1.0),
            };
            (resolve_symptom(catalog, raw), confidence)
        };

        if !catalog.knows_symptom(&symptom) {
            output::display_warning(&format!("Unknown symptom: '{}'", symptom));
        }
        observation.observe_with_confidence(symptom, confidence)?;
    }

    Ok(observation)
}

/// Bare checklist numbers refer to the `symptoms` listing.
fn resolve_symptom(catalog: &Catalog, raw: &str) -> String {
    if let Ok(idx) = raw.parse::<usize>() {
        if idx >= 1 && idx <= catalog.symptoms().len() {
            return catalog.symptoms()[idx - 1].clone();
        }
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigdoc_core::{Cause, SymptomWeight};

    #[test]
    fn test_parse_observation_bare_names() {
        let catalog = Catalog::builtin();
        let obs = parse_observation(
            &catalog,
            &["Power supply fan not spinning".to_string()],
        )
        .unwrap();
        assert_eq!(obs.confidence_for("Power supply fan not spinning"), Some(1.0));
    }

    #[test]
    fn test_parse_observation_with_confidence() {
        let catalog = Catalog::builtin();
        let obs = parse_observation(
            &catalog,
            &["Power supply fan not spinning=0.6".to_string()],
        )
        .unwrap();
        assert_eq!(obs.confidence_for("Power supply fan not spinning"), Some(0.6));
    }

    #[test]
    fn test_parse_observation_resolves_checklist_numbers() {
        let catalog = Catalog::builtin();
        let first = catalog.symptoms()[0].clone();
        let obs = parse_observation(&catalog, &["1".to_string(), "2=0.5".to_string()]).unwrap();
        assert_eq!(obs.confidence_for(&first), Some(1.0));
        assert_eq!(obs.len(), 2);
    }

    #[test]
    fn test_parse_observation_name_containing_equals() {
        let catalog = Catalog::new(vec![Cause {
            id: 1,
            name: "Degraded array".to_string(),
            symptoms: vec![SymptomWeight {
                symptom: "RAID status=degraded".to_string(),
                weight: 0.9,
            }],
            remedy: "Swap the failed member disk.".to_string(),
        }])
        .unwrap();

        // The verbatim name wins over the '=' confidence split.
        let obs =
            parse_observation(&catalog, &["RAID status=degraded".to_string()]).unwrap();
        assert_eq!(obs.confidence_for("RAID status=degraded"), Some(1.0));

        // A trailing =CONF on the same name still parses as confidence.
        let obs =
            parse_observation(&catalog, &["RAID status=degraded=0.5".to_string()]).unwrap();
        assert_eq!(obs.confidence_for("RAID status=degraded"), Some(0.5));
    }

    #[test]
    fn test_parse_observation_rejects_bad_confidence_number() {
        let catalog = Catalog::builtin();
        let err = parse_observation(&catalog, &["1=high".to_string()]).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid confidence"));
    }

    #[test]
    fn test_parse_observation_rejects_out_of_range_confidence() {
        let catalog = Catalog::builtin();
        assert!(parse_observation(&catalog, &["1=1.5".to_string()]).is_err());
    }

    #[test]
    fn test_resolve_symptom_out_of_range_number_is_a_name() {
        let catalog = Catalog::builtin();
        // 99 is past the checklist, so it stays a literal (unknown) name.
        assert_eq!(resolve_symptom(&catalog, "99"), "99");
    }
}
