//! Built-in fault catalog for desktop PC hardware.
//!
//! Six stock causes covering the usual suspects: power, memory,
//! storage, thermals, graphics, and the board itself. Weights are
//! expert estimates of how strongly each symptom, taken alone, points
//! at its cause.

use crate::catalog::{Catalog, Cause, SymptomWeight};

/// A static catalog row: one cause with its weighted symptoms.
struct BuiltinCause {
    id: u32,
    name: &'static str,
    symptoms: &'static [(&'static str, f64)],
    remedy: &'static str,
}

/// Built-in causes, in triage order.
const BUILTIN_CAUSES: &[BuiltinCause] = &[
    BuiltinCause {
        id: 1,
        name: "Power supply (PSU) failure",
        symptoms: &[
            ("Power indicator LED completely dead", 0.95),
            ("Power supply fan not spinning", 0.95),
            ("Machine completely dead, no response at all", 0.8),
            ("Sudden shutdowns under heavy load", 0.6),
            ("Still dead after swapping the power cable", 0.7),
        ],
        remedy: "Check the wall outlet and the power cable seating first. \
                 Jump-test the PSU by bridging the green and black pins. \
                 If the PSU fan still will not spin, replace the unit. \
                 Inspect the PSU for bulged capacitors.",
    },
    BuiltinCause {
        id: 2,
        name: "Faulty RAM module",
        symptoms: &[
            ("Repeated long beeps at power-on (usually three)", 0.99),
            ("Blue screen errors naming Memory Management", 0.9),
            ("OS install fails with corrupt-file errors", 0.7),
            ("No display output although the fans spin", 0.6),
            ("Machine restarts itself at random", 0.5),
        ],
        remedy: "Pull the RAM sticks and clean the contact pins with a \
                 soft eraser. Try the stick in a different slot. With \
                 more than one stick fitted, test them one at a time.",
    },
    BuiltinCause {
        id: 3,
        name: "Failing hard disk or SSD",
        symptoms: &[
            ("Clicking or ticking sounds from the drive", 0.99),
            ("Boot stops at Disk Boot Failure or No Bootable Device", 0.9),
            ("OS takes minutes to finish booting", 0.6),
            ("Frequent freezes while browsing files", 0.6),
            ("Files keep corrupting or disappearing", 0.7),
        ],
        remedy: "Back up important data immediately. Check drive health \
                 with a SMART tool. Swap the SATA cable, and if errors \
                 persist replace the drive, ideally with an SSD.",
    },
    BuiltinCause {
        id: 4,
        name: "Processor overheating",
        symptoms: &[
            ("CPU temperature above 85C in BIOS or monitoring tools", 1.0),
            ("CPU fan spinning audibly loud", 0.8),
            ("Case hot to the touch near the processor", 0.7),
            ("Machine slows to a crawl after running a while", 0.6),
            ("Sudden shutdowns in the middle of gaming", 0.6),
        ],
        remedy: "Blow the dust out of the heatsink. Replace the thermal \
                 paste on the CPU. Make sure case airflow is not blocked \
                 and the CPU fan actually spins up.",
    },
    BuiltinCause {
        id: 5,
        name: "Defective graphics card",
        symptoms: &[
            ("Artifacts on screen: stray lines, blocks, or garbage", 0.99),
            ("Resolution stuck low and cannot be raised", 0.8),
            ("Graphics driver crashes over and over", 0.8),
            ("Games close themselves without an error", 0.5),
            ("Black screen although system sounds still play", 0.7),
        ],
        remedy: "Reseat the graphics card and clean the PCIe slot. \
                 Install a different driver version. Watch the GPU \
                 temperature under load. If possible, test the card in \
                 another machine.",
    },
    BuiltinCause {
        id: 6,
        name: "Motherboard fault",
        symptoms: &[
            ("Capacitors on the board bulging or leaking", 0.99),
            ("BIOS clock resets even with a fresh battery", 0.8),
            ("Several rear USB or audio ports dead", 0.8),
            ("Powers on but never reaches the BIOS screen", 0.6),
            ("Hard freezes while the machine sits idle", 0.5),
        ],
        remedy: "Clear the CMOS to rule out bad settings. Inspect the \
                 board for burnt or bulged components. Heavy chipset \
                 damage usually means replacing the board.",
    },
];

fn entry_to_cause(entry: &BuiltinCause) -> Cause {
    Cause {
        id: entry.id,
        name: entry.name.to_string(),
        symptoms: entry
            .symptoms
            .iter()
            .map(|(symptom, weight)| SymptomWeight {
                symptom: symptom.to_string(),
                weight: *weight,
            })
            .collect(),
        remedy: entry.remedy.to_string(),
    }
}

impl Catalog {
    /// The built-in desktop PC catalog.
    pub fn builtin() -> Catalog {
        let causes = BUILTIN_CAUSES.iter().map(entry_to_cause).collect();
        // The table above is fixed data; a failure here is a bug in it.
        Catalog::new(causes).expect("builtin catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_constructs() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_builtin_ids_sequential() {
        let catalog = Catalog::builtin();
        let ids: Vec<u32> = catalog.causes().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_builtin_five_symptoms_per_cause() {
        let catalog = Catalog::builtin();
        for cause in catalog.causes() {
            assert_eq!(
                cause.symptoms.len(),
                5,
                "cause '{}' should list 5 symptoms",
                cause.name
            );
            assert!(!cause.remedy.is_empty());
        }
    }

    #[test]
    fn test_builtin_symptoms_distinct_across_causes() {
        // 6 causes x 5 symptoms, no string shared between causes.
        let catalog = Catalog::builtin();
        assert_eq!(catalog.symptoms().len(), 30);
    }

    #[test]
    fn test_builtin_index_sorted() {
        let catalog = Catalog::builtin();
        let index = catalog.symptoms();
        for pair in index.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_builtin_has_certain_weight() {
        // The overheat rule carries the only 1.0 weight in the table.
        let catalog = Catalog::builtin();
        let overheat = &catalog.causes()[3];
        assert_eq!(overheat.name, "Processor overheating");
        assert_eq!(
            overheat.weight_for("CPU temperature above 85C in BIOS or monitoring tools"),
            Some(1.0)
        );
    }
}
