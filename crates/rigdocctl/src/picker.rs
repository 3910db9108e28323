//! Interactive symptom selection.
//!
//! Numbered checklist over all known symptoms. The user enters
//! comma-separated numbers, then optionally rates how sure they are
//! of each pick.

use anyhow::Result;
use owo_colors::OwoColorize;
use rigdoc_core::Observation;
use std::io::{self, BufRead, Write};

/// Run the checklist and build an observation from the picks.
pub fn pick_observation(symptoms: &[String]) -> Result<Observation> {
    println!();
    println!(
        "{}  {}",
        "?".bright_cyan().bold(),
        "Which symptoms do you observe?".bright_white().bold()
    );
    println!(
        "   {}",
        "(Enter numbers separated by commas, e.g., 1,3,4)".dimmed()
    );
    println!();

    for (i, symptom) in symptoms.iter().enumerate() {
        println!("   {}  {}", format!("[{:>2}]", i + 1).cyan(), symptom);
    }
    println!();

    let picks = loop {
        print!("   {}  ", "Enter numbers:".bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();

        match parse_picks(input, symptoms.len()) {
            Some(picks) => break picks,
            None => {
                println!(
                    "   {}  Please enter numbers between 1 and {}",
                    "!".yellow(),
                    symptoms.len()
                );
            }
        }
    };

    let labels: Vec<&str> = picks.iter().map(|i| symptoms[*i - 1].as_str()).collect();
    println!(
        "   {}  Selected: {}",
        "+".bright_green(),
        labels.join(", ").bright_white()
    );

    let mut observation = Observation::new();
    if ask_fully_sure()? {
        for idx in &picks {
            observation.observe(symptoms[*idx - 1].clone());
        }
    } else {
        for idx in &picks {
            let symptom = &symptoms[*idx - 1];
            let confidence = ask_confidence(symptom)?;
            observation.observe_with_confidence(symptom.clone(), confidence)?;
        }
    }

    Ok(observation)
}

/// y/N guard before deleting the archive.
pub fn confirm_clear() -> Result<bool> {
    println!();
    println!(
        "{}  {}",
        "~".yellow().bold(),
        "This deletes all archived diagnosis runs".bright_white()
    );
    println!();

    loop {
        print!("   {}  ", "Continue? [y/N]:".bright_magenta());
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" | "" => return Ok(false),
            _ => {
                println!("   {}  Please enter 'y' for yes or 'n' for no", "?".yellow());
            }
        }
    }
}

/// Parse comma-separated checklist numbers. None on any invalid part
/// or when nothing valid was picked. Repeated numbers collapse.
fn parse_picks(input: &str, max: usize) -> Option<Vec<usize>> {
    let mut picks = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let num = part.parse::<usize>().ok()?;
        if num < 1 || num > max {
            return None;
        }
        if !picks.contains(&num) {
            picks.push(num);
        }
    }
    if picks.is_empty() {
        None
    } else {
        Some(picks)
    }
}

fn ask_fully_sure() -> Result<bool> {
    loop {
        print!(
            "   {}  ",
            "Fully sure of every symptom? [Y/n]:".bright_magenta()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;

        match input.trim().to_lowercase().as_str() {
            "y" | "yes" | "" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => {
                println!("   {}  Please enter 'y' for yes or 'n' for no", "?".yellow());
            }
        }
    }
}

/// Loops until the input parses into [0, 1]. Empty input keeps 1.0.
fn ask_confidence(symptom: &str) -> Result<f64> {
    loop {
        print!(
            "   {}  '{}' (0.0-1.0, empty = 1.0):  ",
            "How sure:".bright_magenta(),
            symptom
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            return Ok(1.0);
        }
        match input.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => return Ok(value),
            _ => {
                println!("   {}  Enter a number between 0.0 and 1.0", "!".yellow());
            }
        }
    }
}
