//! Match Resolver
//!
//! Turns one input name into a [`MatchOutcome`] by consulting the taxonomy
//! index. Resolution is layered: exact scientific-name match, then
//! synonym/variant lookup, then ambiguity detection, then a fuzzy fallback
//! over the target subtree. Absence of a match is the `Unrecognized`
//! outcome, never an error; only reference-data faults raise.

use std::collections::BTreeSet;

use tnv_common::types::{Candidate, MatchOutcome, NameClass, TaxId, TaxonRecord};
use tnv_common::ReferenceDataError;

use crate::index::TaxonomyIndex;
use crate::normalize::normalize;
use crate::score::CandidateScorer;

/// Resolve a raw input name against the index.
///
/// `subtree_root` bounds the fuzzy fallback: only canonical names inside
/// that subtree are considered as suggestions, since replacement names
/// from the wrong branch would fail lineage verification anyway.
///
/// Outcome rules, applied in order to the normalized input:
///
/// 1. exactly one taxon carries it as a scientific name -> `Exact`
/// 2. every use of the name points at one taxon -> `Replacement` with
///    that taxon's canonical name
/// 3. uses point at several taxa -> `Ambiguous`, candidates ordered by
///    ascending taxid
/// 4. no use at all -> fuzzy fallback: score every canonical name in the
///    subtree, keep scores above the scorer threshold, order by
///    (score desc, shorter name first, ascending taxid). One survivor is
///    `Suggested`; several are `Ambiguous`; none is `Unrecognized`.
pub fn resolve(
    index: &TaxonomyIndex,
    raw: &str,
    subtree_root: TaxId,
    scorer: &dyn CandidateScorer,
) -> Result<MatchOutcome, ReferenceDataError> {
    let needle = normalize(raw);
    if needle.is_empty() {
        return Ok(MatchOutcome::Unrecognized);
    }

    let hits = index.hits(&needle);
    if !hits.is_empty() {
        let mut scientific = BTreeSet::new();
        let mut distinct = BTreeSet::new();
        for hit in hits {
            distinct.insert(hit.taxid);
            if hit.class == NameClass::Scientific {
                scientific.insert(hit.taxid);
            }
        }

        if scientific.len() == 1 {
            if let Some(&taxid) = scientific.iter().next() {
                return Ok(MatchOutcome::Exact {
                    taxid,
                    canonical: canonical_of(index, taxid),
                });
            }
        }

        if distinct.len() == 1 {
            if let Some(&taxid) = distinct.iter().next() {
                return Ok(MatchOutcome::Replacement {
                    taxid,
                    canonical: canonical_of(index, taxid),
                });
            }
        }

        let candidates = distinct
            .into_iter()
            .map(|taxid| Candidate {
                taxid,
                canonical: canonical_of(index, taxid),
            })
            .collect();
        return Ok(MatchOutcome::Ambiguous { candidates });
    }

    fuzzy_fallback(index, &needle, subtree_root, scorer)
}

fn canonical_of(index: &TaxonomyIndex, taxid: TaxId) -> String {
    // Build validation guarantees every hit's taxon is present.
    index.canonical_name(taxid).unwrap_or_default().to_string()
}

fn fuzzy_fallback(
    index: &TaxonomyIndex,
    needle: &str,
    subtree_root: TaxId,
    scorer: &dyn CandidateScorer,
) -> Result<MatchOutcome, ReferenceDataError> {
    let mut accepted: Vec<(f64, &TaxonRecord)> = Vec::new();

    for record in index.records() {
        if !index.is_within(record.taxid, subtree_root)? {
            continue;
        }
        let score = scorer.score(needle, &normalize(&record.scientific_name));
        if score > scorer.threshold() {
            accepted.push((score, record));
        }
    }

    accepted.sort_by(|(score_a, rec_a), (score_b, rec_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| rec_a.scientific_name.len().cmp(&rec_b.scientific_name.len()))
            .then_with(|| rec_a.taxid.cmp(&rec_b.taxid))
    });

    tracing::trace!(
        input = needle,
        scorer = scorer.name(),
        candidates = accepted.len(),
        "fuzzy fallback"
    );

    match accepted.as_slice() {
        [] => Ok(MatchOutcome::Unrecognized),
        [(_, record)] => Ok(MatchOutcome::Suggested {
            taxid: record.taxid,
            canonical: record.scientific_name.clone(),
        }),
        _ => Ok(MatchOutcome::Ambiguous {
            candidates: accepted
                .iter()
                .map(|(_, record)| Candidate {
                    taxid: record.taxid,
                    canonical: record.scientific_name.clone(),
                })
                .collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ContainmentScorer;
    use tnv_common::types::{NameEntry, Rank};

    fn taxon(taxid: u32, name: &str, parent: Option<u32>, rank: Rank) -> TaxonRecord {
        TaxonRecord {
            taxid: TaxId(taxid),
            scientific_name: name.to_string(),
            parent: parent.map(TaxId),
            rank,
        }
    }

    fn entry(name: &str, taxid: u32, class: NameClass) -> NameEntry {
        NameEntry {
            name: name.to_string(),
            taxid: TaxId(taxid),
            class,
        }
    }

    fn fixture() -> TaxonomyIndex {
        let records = vec![
            taxon(1, "root", None, Rank::NoRank),
            taxon(2, "Bacteria", Some(1), Rank::Superkingdom),
            taxon(10239, "Viruses", Some(1), Rank::Superkingdom),
            taxon(10, "Influenza A virus", Some(10239), Rank::Species),
            taxon(20, "Influenza B virus", Some(10239), Rank::Species),
            taxon(30, "Zika virus", Some(10239), Rank::Species),
            taxon(40, "Bacillus subtilis", Some(2), Rank::Species),
        ];
        let entries = vec![
            entry("Flu A", 10, NameClass::Synonym),
            entry("Flu A", 20, NameClass::Synonym),
            entry("ZIKV", 30, NameClass::Synonym),
            // A synonym colliding with another taxon's scientific name.
            entry("Zika virus", 40, NameClass::Synonym),
        ];
        TaxonomyIndex::build(records, entries).unwrap()
    }

    fn resolve_one(index: &TaxonomyIndex, raw: &str) -> MatchOutcome {
        resolve(index, raw, TaxId::VIRUSES, &ContainmentScorer).unwrap()
    }

    #[test]
    fn test_exact_match_is_case_and_whitespace_insensitive() {
        let index = fixture();
        let expected = MatchOutcome::Exact {
            taxid: TaxId(10),
            canonical: "Influenza A virus".to_string(),
        };
        assert_eq!(resolve_one(&index, "influenza a virus"), expected);
        assert_eq!(resolve_one(&index, "  Influenza  A  Virus "), expected);
    }

    #[test]
    fn test_unique_scientific_name_wins_over_synonym_collision() {
        // "Zika virus" is also a synonym of Bacillus subtilis, but only one
        // taxon carries it as a scientific name.
        let index = fixture();
        assert_eq!(
            resolve_one(&index, "Zika virus"),
            MatchOutcome::Exact {
                taxid: TaxId(30),
                canonical: "Zika virus".to_string()
            }
        );
    }

    #[test]
    fn test_unique_synonym_resolves_to_replacement() {
        let index = fixture();
        assert_eq!(
            resolve_one(&index, "zikv"),
            MatchOutcome::Replacement {
                taxid: TaxId(30),
                canonical: "Zika virus".to_string()
            }
        );
    }

    #[test]
    fn test_shared_synonym_is_ambiguous_with_ordered_candidates() {
        let index = fixture();
        assert_eq!(
            resolve_one(&index, "Flu A"),
            MatchOutcome::Ambiguous {
                candidates: vec![
                    Candidate {
                        taxid: TaxId(10),
                        canonical: "Influenza A virus".to_string()
                    },
                    Candidate {
                        taxid: TaxId(20),
                        canonical: "Influenza B virus".to_string()
                    },
                ]
            }
        );
    }

    #[test]
    fn test_fuzzy_single_containment_is_suggested() {
        let index = fixture();
        assert_eq!(
            resolve_one(&index, "zika"),
            MatchOutcome::Suggested {
                taxid: TaxId(30),
                canonical: "Zika virus".to_string()
            }
        );
    }

    #[test]
    fn test_fuzzy_multiple_containments_are_ambiguous() {
        let index = fixture();
        let outcome = resolve_one(&index, "influenza");
        match outcome {
            MatchOutcome::Ambiguous { candidates } => {
                let taxids: Vec<TaxId> = candidates.iter().map(|c| c.taxid).collect();
                // Equal scores and equal lengths; ascending taxid decides.
                assert_eq!(taxids, vec![TaxId(10), TaxId(20)]);
            }
            other => panic!("expected ambiguous outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_fuzzy_is_restricted_to_target_subtree() {
        // "subtilis" is contained only in a bacterial name, which the
        // virus-rooted fallback must not offer.
        let index = fixture();
        assert_eq!(resolve_one(&index, "subtilis"), MatchOutcome::Unrecognized);
        // With the subtree widened to the root, the same input resolves.
        assert_eq!(
            resolve(&index, "subtilis", TaxId::ROOT, &ContainmentScorer).unwrap(),
            MatchOutcome::Suggested {
                taxid: TaxId(40),
                canonical: "Bacillus subtilis".to_string()
            }
        );
    }

    #[test]
    fn test_no_overlap_is_unrecognized() {
        let index = fixture();
        assert_eq!(
            resolve_one(&index, "definitely not a taxon"),
            MatchOutcome::Unrecognized
        );
    }

    #[test]
    fn test_blank_input_is_unrecognized() {
        let index = fixture();
        assert_eq!(resolve_one(&index, ""), MatchOutcome::Unrecognized);
        assert_eq!(resolve_one(&index, "   "), MatchOutcome::Unrecognized);
    }
}
