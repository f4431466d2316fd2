use kb_client::normalize::{
    cohort_coverage, gene_hits, gene_info, pathway_info, policy_profile, search_hits, variant_info,
};
use serde_json::json;

#[test]
fn gene_adapter_defaults_on_empty_object() {
    let info = gene_info(&json!({}));
    assert_eq!(info.symbol, None);
    assert_eq!(info.name, None);
    assert_eq!(info.function, None);
    assert_eq!(info.helper_copy, None);
    assert!(info.pathways.is_empty());
    assert!(info.diseases.is_empty());
}

#[test]
fn gene_adapter_maps_all_fields() {
    let info = gene_info(&json!({
        "symbol": "MBD4",
        "name": "Methyl-CpG-binding domain protein 4",
        "function": "Base excision repair glycosylase",
        "helper_copy": "Removes T from G:T mismatches.",
        "pathways": ["BER"],
        "diseases": ["MBD4-associated neoplasia syndrome"]
    }));
    assert_eq!(info.symbol.as_deref(), Some("MBD4"));
    assert_eq!(info.pathways, vec!["BER"]);
    assert_eq!(info.diseases.len(), 1);
}

#[test]
fn adapters_tolerate_wrong_typed_fields() {
    let info = gene_info(&json!({
        "symbol": 42,
        "pathways": "BER",
        "diseases": [1, "HBOC", null]
    }));
    assert_eq!(info.symbol, None);
    assert!(info.pathways.is_empty());
    // Non-string elements are skipped, not an error.
    assert_eq!(info.diseases, vec!["HBOC"]);
}

#[test]
fn variant_adapter_defaults_on_empty_object() {
    let info = variant_info(&json!({}));
    assert_eq!(info.gene, None);
    assert_eq!(info.pathogenicity_score, None);
    assert_eq!(info.am_covered, None);
    assert_eq!(info.clinvar_prior, None);
}

#[test]
fn pathway_adapter_defaults_genes_to_empty() {
    let info = pathway_info(&json!({"id": "BER", "name": "Base excision repair"}));
    assert_eq!(info.id.as_deref(), Some("BER"));
    assert!(info.genes.is_empty());
    assert_eq!(info.description, None);
}

#[test]
fn cohort_adapter_keeps_by_gene_objects_raw() {
    let coverage = cohort_coverage(&json!({
        "study": "TCGA-OV",
        "n_samples": 585,
        "n_variants": 12042,
        "by_gene": [
            {"gene": "BRCA1", "covered": 0.97},
            {"gene": "BRCA2", "covered": 0.95}
        ],
        "coverage_summary": "High exonic coverage"
    }));
    assert_eq!(coverage.study.as_deref(), Some("TCGA-OV"));
    assert_eq!(coverage.n_samples, Some(585));
    assert_eq!(coverage.by_gene.len(), 2);
    assert_eq!(coverage.by_gene[0]["gene"], json!("BRCA1"));
}

#[test]
fn cohort_adapter_defaults_on_empty_object() {
    let coverage = cohort_coverage(&json!({}));
    assert_eq!(coverage.n_samples, None);
    assert!(coverage.by_gene.is_empty());
}

#[test]
fn policy_adapter_passes_open_maps_through() {
    let profile = policy_profile(&json!({
        "name": "default_v2",
        "version": "2.1",
        "weights": {"clinvar": 0.4, "am": 0.6},
        "gates": {"min_coverage": 0.9},
        "flags": {"strict": true},
        "notes": "Calibrated on the 2024 cohort."
    }));
    assert_eq!(profile.name.as_deref(), Some("default_v2"));
    assert_eq!(profile.weights, Some(json!({"clinvar": 0.4, "am": 0.6})));
    assert_eq!(profile.flags, Some(json!({"strict": true})));
}

#[test]
fn policy_adapter_defaults_on_empty_object() {
    let profile = policy_profile(&json!({}));
    assert_eq!(profile.name, None);
    assert_eq!(profile.weights, None);
    assert_eq!(profile.notes, None);
}

#[test]
fn search_hits_preserve_order_and_default_missing_fields() {
    let hits = search_hits(&json!({
        "hits": [
            {"id": "variant/BRCA1_p.Arg1699Gln", "title": "BRCA1 p.Arg1699Gln", "score": 7.5},
            {"title": "BRCA2 p.Asn372His"}
        ]
    }));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].score, Some(7.5));
    assert_eq!(hits[0].snippet, None);
    assert_eq!(hits[1].id, None);
}

#[test]
fn search_hits_without_hits_field_are_empty() {
    assert!(search_hits(&json!({})).is_empty());
    assert!(search_hits(&json!({"hits": "none"})).is_empty());
}

#[test]
fn gene_hits_project_title_as_symbol() {
    let hits = gene_hits(&json!({
        "hits": [{"id": "gene/TP53", "title": "TP53", "score": 9.9, "snippet": "tumor protein"}]
    }));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].symbol.as_deref(), Some("TP53"));
    assert_eq!(hits[0].id.as_deref(), Some("gene/TP53"));
}
