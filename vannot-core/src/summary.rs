//! Summary statistics over a decoded annotation batch.
//!
//! Four independent single-pass scans. All of them tolerate entries that
//! lack any of the optional annotation sources, with one deliberate
//! exception: gene-name extraction requires `snpeff.ann` to be a
//! well-formed list when the snpeff source is present at all, and fails
//! with [`AnnotateError::MissingField`] otherwise. See DESIGN.md for why
//! that path is strict.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::annotation::AnnotationEntry;
use crate::errors::AnnotateError;

/// Collect the distinct gene names across all found entries.
///
/// Gene names are read from three places: `dbnsfp.genename` (a string or a
/// list of strings), `cadd.gene[].genename` (only list elements that are
/// objects carrying the field), and `snpeff.ann[].genename` (the strict
/// path: the list must exist and every object element must carry the
/// field).
pub fn gene_names(entries: &[AnnotationEntry]) -> Result<BTreeSet<String>, AnnotateError> {
    let mut names = BTreeSet::new();

    for entry in entries {
        if entry.notfound {
            continue;
        }

        if let Some(dbnsfp) = &entry.dbnsfp {
            match dbnsfp.get("genename") {
                Some(Value::String(name)) => {
                    names.insert(name.clone());
                }
                Some(Value::Array(list)) => {
                    for name in list.iter().filter_map(Value::as_str) {
                        names.insert(name.to_string());
                    }
                }
                _ => {}
            }
        }

        if let Some(cadd) = &entry.cadd {
            if let Some(genes) = cadd.get("gene").and_then(Value::as_array) {
                for gene in genes {
                    if let Some(name) = gene.get("genename").and_then(Value::as_str) {
                        names.insert(name.to_string());
                    }
                }
            }
        }

        if let Some(snpeff) = &entry.snpeff {
            let anns = snpeff
                .get("ann")
                .ok_or_else(|| AnnotateError::MissingField("snpeff.ann".to_string()))?
                .as_array()
                .ok_or_else(|| AnnotateError::MissingField("snpeff.ann is not a list".to_string()))?;
            for ann in anns {
                if ann.is_object() {
                    let name = ann
                        .get("genename")
                        .and_then(Value::as_str)
                        .ok_or_else(|| {
                            AnnotateError::MissingField("snpeff.ann[].genename".to_string())
                        })?;
                    names.insert(name.to_string());
                }
            }
        }
    }

    Ok(names)
}

/// Count entries whose snpeff annotation directly exposes
/// `putative_impact` equal to `MODIFIER`.
///
/// Only a top-level field on `snpeff.ann` matches; when `ann` is the usual
/// per-transcript list the field sits one level deeper and the entry does
/// not count.
pub fn count_modifier_impact(entries: &[AnnotationEntry]) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry
                .snpeff
                .as_ref()
                .and_then(|snpeff| snpeff.get("ann"))
                .and_then(|ann| ann.get("putative_impact"))
                .and_then(Value::as_str)
                == Some("MODIFIER")
        })
        .count()
}

/// Count entries carrying a dbnsfp `mutationtaster` annotation, regardless
/// of its value.
pub fn count_mutationtaster(entries: &[AnnotationEntry]) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry
                .dbnsfp
                .as_ref()
                .is_some_and(|dbnsfp| dbnsfp.get("mutationtaster").is_some())
        })
        .count()
}

/// Count entries whose cadd `consequence` is `NON_SYNONYMOUS`.
pub fn count_non_synonymous(entries: &[AnnotationEntry]) -> usize {
    entries
        .iter()
        .filter(|entry| {
            entry
                .cadd
                .as_ref()
                .and_then(|cadd| cadd.get("consequence"))
                .and_then(Value::as_str)
                == Some("NON_SYNONYMOUS")
        })
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn entries_from(value: serde_json::Value) -> Vec<AnnotationEntry> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn gene_names_from_all_three_sources() {
        let entries = entries_from(json!([
            {"dbnsfp": {"genename": "ABCC1"}},
            {"cadd": {"gene": [{"genename": "TP53"}, {"gene_id": 123}]}},
            {"snpeff": {"ann": [{"genename": "BRCA2", "effect": "intron_variant"}]}},
            {"notfound": true}
        ]));

        let names = gene_names(&entries).unwrap();
        let expected: BTreeSet<String> = ["ABCC1", "TP53", "BRCA2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn gene_names_deduplicates() {
        let entries = entries_from(json!([
            {"dbnsfp": {"genename": "ABCC1"}},
            {"dbnsfp": {"genename": "ABCC1"}},
            {"dbnsfp": {"genename": ["ABCC1", "ABCC6"]}}
        ]));

        let names = gene_names(&entries).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("ABCC6"));
    }

    #[test]
    fn gene_names_all_notfound_is_empty() {
        let entries = entries_from(json!([
            {"notfound": true},
            {"notfound": true}
        ]));
        assert!(gene_names(&entries).unwrap().is_empty());
    }

    #[test]
    fn gene_names_tolerates_missing_structure_in_dbnsfp_and_cadd() {
        let entries = entries_from(json!([
            {"dbnsfp": {"sift": {"score": 0.1}}},
            {"cadd": {"gene": {"genename": "NOT_A_LIST"}}},
            {"cadd": {"phred": 23.1}}
        ]));
        assert!(gene_names(&entries).unwrap().is_empty());
    }

    #[test]
    fn gene_names_requires_snpeff_ann_list() {
        let entries = entries_from(json!([
            {"snpeff": {"putative_impact": "MODIFIER"}}
        ]));
        let err = gene_names(&entries).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingField(_)));

        let entries = entries_from(json!([
            {"snpeff": {"ann": {"genename": "BRCA2"}}}
        ]));
        let err = gene_names(&entries).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingField(_)));
    }

    #[test]
    fn gene_names_requires_genename_on_snpeff_ann_objects() {
        let entries = entries_from(json!([
            {"snpeff": {"ann": [{"effect": "intron_variant"}]}}
        ]));
        let err = gene_names(&entries).unwrap_err();
        assert!(matches!(err, AnnotateError::MissingField(_)));

        // Non-object list elements are skipped, not errors.
        let entries = entries_from(json!([
            {"snpeff": {"ann": ["stray", {"genename": "BRCA2"}]}}
        ]));
        let names = gene_names(&entries).unwrap();
        assert!(names.contains("BRCA2"));
    }

    #[test]
    fn modifier_count_reads_only_the_top_level_field() {
        let entries = entries_from(json!([
            {"snpeff": {"ann": {"putative_impact": "MODIFIER"}}},
            {"snpeff": {"ann": [{"putative_impact": "MODIFIER"}]}},
            {"snpeff": {"ann": {"putative_impact": "HIGH"}}},
            {"dbnsfp": {"genename": "ABCC1"}}
        ]));
        assert_eq!(count_modifier_impact(&entries), 1);
    }

    #[test]
    fn modifier_count_is_zero_without_snpeff() {
        let entries = entries_from(json!([
            {"dbnsfp": {"genename": "ABCC1"}},
            {"cadd": {"consequence": "NON_SYNONYMOUS"}},
            {"notfound": true}
        ]));
        assert_eq!(count_modifier_impact(&entries), 0);
    }

    #[test]
    fn modifier_count_three_of_ten() {
        let mut raw = Vec::new();
        for i in 0..10 {
            if [0, 3, 6].contains(&i) {
                raw.push(json!({"snpeff": {"ann": {"putative_impact": "MODIFIER"}}}));
            } else {
                raw.push(json!({"snpeff": {"ann": [{"putative_impact": "MODIFIER"}]}}));
            }
        }
        let entries = entries_from(serde_json::Value::Array(raw));
        assert_eq!(count_modifier_impact(&entries), 3);
    }

    #[test]
    fn mutationtaster_counts_presence_regardless_of_value() {
        let entries = entries_from(json!([
            {"dbnsfp": {"mutationtaster": {"pred": "D"}}},
            {"dbnsfp": {"mutationtaster": null}},
            {"dbnsfp": {"sift": {"score": 0.1}}},
            {"cadd": {"mutationtaster": "not dbnsfp"}}
        ]));
        assert_eq!(count_mutationtaster(&entries), 2);
    }

    #[test]
    fn non_synonymous_requires_exact_string_match() {
        let entries = entries_from(json!([
            {"cadd": {"consequence": "NON_SYNONYMOUS"}},
            {"cadd": {"consequence": "SYNONYMOUS"}},
            {"cadd": {"consequence": ["NON_SYNONYMOUS"]}},
            {"cadd": {"phred": 10.0}}
        ]));
        assert_eq!(count_non_synonymous(&entries), 1);
    }

    #[test]
    fn counts_are_independent() {
        // One entry satisfying both predicates lands in both counts, and an
        // entry satisfying one never leaks into the other.
        let entries = entries_from(json!([
            {
                "dbnsfp": {"mutationtaster": {"pred": "D"}},
                "cadd": {"consequence": "NON_SYNONYMOUS"}
            },
            {"dbnsfp": {"mutationtaster": {"pred": "N"}}},
            {"cadd": {"consequence": "NON_SYNONYMOUS"}}
        ]));
        assert_eq!(count_mutationtaster(&entries), 2);
        assert_eq!(count_non_synonymous(&entries), 2);
    }
}
