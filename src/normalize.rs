//! Pure mapping from raw backend JSON into canonical records.
//!
//! Every adapter accepts any structurally valid JSON and never panics:
//! missing scalars become `None`, missing collections become empty. The
//! soft-fail accessors in [`crate::client`] rely on that contract.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneInfo {
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub function: Option<String>,
    pub helper_copy: Option<String>,
    pub pathways: Vec<String>,
    pub diseases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantInfo {
    pub gene: Option<String>,
    pub hgvs_p: Option<String>,
    pub mechanism: Option<String>,
    pub helper_copy: Option<String>,
    pub pathogenicity_score: Option<f64>,
    pub am_covered: Option<bool>,
    pub clinvar_prior: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathwayInfo {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub genes: Vec<String>,
    pub helper_copy: Option<String>,
    pub mechanism: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortCoverage {
    pub study: Option<String>,
    pub n_samples: Option<u64>,
    pub n_variants: Option<u64>,
    /// Per-gene coverage objects, kept in the backend's own shape.
    pub by_gene: Vec<Value>,
    pub coverage_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyProfile {
    pub name: Option<String>,
    pub version: Option<String>,
    /// Backend-defined open maps; passed through untouched.
    pub weights: Option<Value>,
    pub gates: Option<Value>,
    pub flags: Option<Value>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: Option<String>,
    pub title: Option<String>,
    pub score: Option<f64>,
    pub snippet: Option<String>,
}

/// Gene search hit; the backend's hit title is the gene symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneHit {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub score: Option<f64>,
    pub snippet: Option<String>,
}

pub fn gene_info(raw: &Value) -> GeneInfo {
    GeneInfo {
        symbol: str_field(raw, "symbol"),
        name: str_field(raw, "name"),
        function: str_field(raw, "function"),
        helper_copy: str_field(raw, "helper_copy"),
        pathways: str_list(raw, "pathways"),
        diseases: str_list(raw, "diseases"),
    }
}

pub fn variant_info(raw: &Value) -> VariantInfo {
    VariantInfo {
        gene: str_field(raw, "gene"),
        hgvs_p: str_field(raw, "hgvs_p"),
        mechanism: str_field(raw, "mechanism"),
        helper_copy: str_field(raw, "helper_copy"),
        pathogenicity_score: f64_field(raw, "pathogenicity_score"),
        am_covered: bool_field(raw, "am_covered"),
        clinvar_prior: f64_field(raw, "clinvar_prior"),
    }
}

pub fn pathway_info(raw: &Value) -> PathwayInfo {
    PathwayInfo {
        id: str_field(raw, "id"),
        name: str_field(raw, "name"),
        description: str_field(raw, "description"),
        genes: str_list(raw, "genes"),
        helper_copy: str_field(raw, "helper_copy"),
        mechanism: str_field(raw, "mechanism"),
    }
}

pub fn cohort_coverage(raw: &Value) -> CohortCoverage {
    CohortCoverage {
        study: str_field(raw, "study"),
        n_samples: u64_field(raw, "n_samples"),
        n_variants: u64_field(raw, "n_variants"),
        by_gene: value_list(raw, "by_gene"),
        coverage_summary: str_field(raw, "coverage_summary"),
    }
}

pub fn policy_profile(raw: &Value) -> PolicyProfile {
    PolicyProfile {
        name: str_field(raw, "name"),
        version: str_field(raw, "version"),
        weights: raw.get("weights").cloned(),
        gates: raw.get("gates").cloned(),
        flags: raw.get("flags").cloned(),
        notes: str_field(raw, "notes"),
    }
}

/// Projects `{ hits: [...] }` into hit records, preserving backend order.
pub fn search_hits(raw: &Value) -> Vec<SearchHit> {
    hits_array(raw)
        .iter()
        .map(|hit| SearchHit {
            id: str_field(hit, "id"),
            title: str_field(hit, "title"),
            score: f64_field(hit, "score"),
            snippet: str_field(hit, "snippet"),
        })
        .collect()
}

pub fn gene_hits(raw: &Value) -> Vec<GeneHit> {
    hits_array(raw)
        .iter()
        .map(|hit| GeneHit {
            id: str_field(hit, "id"),
            symbol: str_field(hit, "title"),
            score: f64_field(hit, "score"),
            snippet: str_field(hit, "snippet"),
        })
        .collect()
}

fn hits_array(raw: &Value) -> Vec<Value> {
    raw.get("hits")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

fn str_field(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn f64_field(raw: &Value, key: &str) -> Option<f64> {
    raw.get(key).and_then(Value::as_f64)
}

fn u64_field(raw: &Value, key: &str) -> Option<u64> {
    raw.get(key).and_then(Value::as_u64)
}

fn bool_field(raw: &Value, key: &str) -> Option<bool> {
    raw.get(key).and_then(Value::as_bool)
}

fn str_list(raw: &Value, key: &str) -> Vec<String> {
    raw.get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn value_list(raw: &Value, key: &str) -> Vec<Value> {
    raw.get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
