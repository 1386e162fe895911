//! NCBI taxdump flat-file parsing
//!
//! The dump files are pipe-delimited with tab padding: fields are
//! separated by `\t|\t` and each line ends with `\t|`. Reading them with a
//! `|`-delimited CSV reader that trims whitespace handles both the
//! padding and the trailing empty field.
//!
//! `nodes.dmp` carries parentage and rank; `names.dmp` carries every name
//! string with its class. The root node lists itself as its own parent,
//! which the loader converts to `None` so the index can recognize declared
//! roots.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tnv_common::types::{NameClass, NameEntry, Rank, TaxId, TaxonRecord};
use tracing::info;

/// Errors raised while loading reference data from disk.
///
/// These are all fatal for the run: a taxdump that cannot be parsed
/// cleanly cannot back a trustworthy validation.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}:{}: {}", .path.display(), .line, .reason)]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("taxon {taxid} has no scientific name in the names file")]
    MissingScientificName { taxid: TaxId },
}

/// One row of `nodes.dmp`: parentage and rank, no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonNode {
    pub taxid: TaxId,
    pub parent: Option<TaxId>,
    pub rank: Rank,
}

fn dmp_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, IngestError> {
    ReaderBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_taxid(
    path: &Path,
    line: usize,
    record: &StringRecord,
    field: usize,
    what: &str,
) -> Result<TaxId, IngestError> {
    let raw = record.get(field).unwrap_or("");
    raw.parse::<TaxId>()
        .map_err(|_| IngestError::MalformedRecord {
            path: path.to_path_buf(),
            line,
            reason: format!("invalid {what}: {raw:?}"),
        })
}

/// Read `nodes.dmp`: taxid, parent taxid, and rank per line.
pub fn read_nodes(path: impl AsRef<Path>) -> Result<Vec<TaxonNode>, IngestError> {
    let path = path.as_ref();
    let mut reader = dmp_reader(path)?;
    let mut nodes = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let line = i + 1;
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let taxid = parse_taxid(path, line, &record, 0, "taxid")?;
        let parent = parse_taxid(path, line, &record, 1, "parent taxid")?;
        let rank = Rank::parse(record.get(2).unwrap_or(""));

        nodes.push(TaxonNode {
            taxid,
            // A self-parenting node is a declared root.
            parent: (parent != taxid).then_some(parent),
            rank,
        });
    }

    Ok(nodes)
}

/// Read `names.dmp`: every name string with the taxon it belongs to.
///
/// The dump distinguishes a dozen name classes; only "scientific name" is
/// canonical, and every other class (synonym, equivalent name, common
/// name, acronym, ...) is loaded as a synonym. Rows with an empty name
/// are skipped.
pub fn read_names(path: impl AsRef<Path>) -> Result<Vec<NameEntry>, IngestError> {
    let path = path.as_ref();
    let mut reader = dmp_reader(path)?;
    let mut entries = Vec::new();

    for (i, record) in reader.records().enumerate() {
        let line = i + 1;
        let record = record.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let taxid = parse_taxid(path, line, &record, 0, "taxid")?;
        let name = record.get(1).unwrap_or("").to_string();
        if name.is_empty() {
            continue;
        }

        // Field 2 is the "unique name" disambiguator, unused here.
        let class = match record.get(3).unwrap_or("") {
            c if c.eq_ignore_ascii_case("scientific name") => NameClass::Scientific,
            _ => NameClass::Synonym,
        };

        entries.push(NameEntry { name, taxid, class });
    }

    Ok(entries)
}

/// Load both dump files and merge them into the loader contract: full
/// taxon records (each with its canonical scientific name) plus the
/// complete name entry collection.
pub fn load_taxdump(
    nodes_path: impl AsRef<Path>,
    names_path: impl AsRef<Path>,
) -> Result<(Vec<TaxonRecord>, Vec<NameEntry>), IngestError> {
    let nodes = read_nodes(nodes_path)?;
    let entries = read_names(names_path)?;

    let mut canonical: HashMap<TaxId, &str> = HashMap::new();
    for entry in &entries {
        if entry.class == NameClass::Scientific {
            canonical.entry(entry.taxid).or_insert(entry.name.as_str());
        }
    }

    let mut records = Vec::with_capacity(nodes.len());
    for node in &nodes {
        let name = canonical
            .get(&node.taxid)
            .ok_or(IngestError::MissingScientificName { taxid: node.taxid })?;
        records.push(TaxonRecord {
            taxid: node.taxid,
            scientific_name: (*name).to_string(),
            parent: node.parent,
            rank: node.rank.clone(),
        });
    }

    info!(
        taxa = records.len(),
        names = entries.len(),
        "taxdump loaded"
    );

    Ok((records, entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dmp_file(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_nodes_parses_tab_pipe_records() {
        let file = dmp_file(&[
            "1\t|\t1\t|\tno rank\t|",
            "10239\t|\t1\t|\tsuperkingdom\t|",
            "11320\t|\t10239\t|\tspecies\t|",
        ]);

        let nodes = read_nodes(file.path()).unwrap();
        assert_eq!(
            nodes,
            vec![
                TaxonNode {
                    taxid: TaxId(1),
                    parent: None,
                    rank: Rank::NoRank
                },
                TaxonNode {
                    taxid: TaxId(10239),
                    parent: Some(TaxId(1)),
                    rank: Rank::Superkingdom
                },
                TaxonNode {
                    taxid: TaxId(11320),
                    parent: Some(TaxId(10239)),
                    rank: Rank::Species
                },
            ]
        );
    }

    #[test]
    fn test_read_nodes_reports_line_of_bad_taxid() {
        let file = dmp_file(&[
            "1\t|\t1\t|\tno rank\t|",
            "oops\t|\t1\t|\tspecies\t|",
        ]);

        let err = read_nodes(file.path()).unwrap_err();
        match err {
            IngestError::MalformedRecord { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("oops"), "reason was: {reason}");
            }
            other => panic!("expected malformed record, got {other}"),
        }
    }

    #[test]
    fn test_read_names_maps_classes() {
        let file = dmp_file(&[
            "11320\t|\tInfluenza A virus\t|\t\t|\tscientific name\t|",
            "11320\t|\tinfluenza A\t|\t\t|\tsynonym\t|",
            "11320\t|\tFLUAV\t|\t\t|\tacronym\t|",
        ]);

        let entries = read_names(file.path()).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].class, NameClass::Scientific);
        assert_eq!(entries[0].name, "Influenza A virus");
        assert_eq!(entries[1].class, NameClass::Synonym);
        assert_eq!(entries[2].class, NameClass::Synonym);
        assert!(entries.iter().all(|e| e.taxid == TaxId(11320)));
    }

    #[test]
    fn test_load_taxdump_merges_canonical_names() {
        let nodes = dmp_file(&[
            "1\t|\t1\t|\tno rank\t|",
            "10239\t|\t1\t|\tsuperkingdom\t|",
        ]);
        let names = dmp_file(&[
            "1\t|\troot\t|\t\t|\tscientific name\t|",
            "10239\t|\tViruses\t|\t\t|\tscientific name\t|",
            "10239\t|\tVira\t|\t\t|\tsynonym\t|",
        ]);

        let (records, entries) = load_taxdump(nodes.path(), names.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(entries.len(), 3);

        assert_eq!(records[0].scientific_name, "root");
        assert_eq!(records[0].parent, None);
        assert_eq!(records[1].scientific_name, "Viruses");
        assert_eq!(records[1].parent, Some(TaxId(1)));
        assert_eq!(records[1].rank, Rank::Superkingdom);
    }

    #[test]
    fn test_load_taxdump_requires_a_scientific_name_per_node() {
        let nodes = dmp_file(&["1\t|\t1\t|\tno rank\t|"]);
        let names = dmp_file(&["1\t|\tthe root\t|\t\t|\tsynonym\t|"]);

        let err = load_taxdump(nodes.path(), names.path()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingScientificName { taxid: TaxId(1) }
        ));
    }
}
