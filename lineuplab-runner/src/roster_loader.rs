//! Roster loading — aggregates stat records from CSV or JSON sources.
//!
//! A source is a single stats file or a directory; a directory aggregates
//! every `.csv`/`.json` file immediately inside it (no recursion, other
//! files are ignored). Records for the same player name are merged by
//! summing their counts, so a season can be split across files. Players
//! are returned sorted by name, which keeps enumeration order stable
//! across runs.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use lineuplab_core::domain::{Outcome, Player, PlayerGroup, Roster};

/// Errors from roster loading. All fail the load; none leave a partially
/// usable roster behind.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("stats source not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("malformed stats in {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One CSV stat row: a player and their per-outcome appearance counts.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    name: String,
    group: String,
    #[serde(default)]
    out: u64,
    #[serde(default)]
    walk: u64,
    #[serde(default)]
    single: u64,
    #[serde(default)]
    double: u64,
    #[serde(default)]
    triple: u64,
    #[serde(default)]
    hr: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRecord {
    name: String,
    group: String,
    counts: JsonCounts,
}

#[derive(Debug, Default, Deserialize)]
struct JsonCounts {
    #[serde(default)]
    out: u64,
    #[serde(default)]
    walk: u64,
    #[serde(default)]
    single: u64,
    #[serde(default)]
    double: u64,
    #[serde(default)]
    triple: u64,
    #[serde(default)]
    hr: u64,
}

#[derive(Debug, Default)]
struct Accumulator {
    // Name → (group, counts). BTreeMap so roster order is name-sorted.
    players: BTreeMap<String, (PlayerGroup, [u64; Outcome::ALL.len()])>,
}

impl Accumulator {
    fn add(
        &mut self,
        path: &Path,
        name: &str,
        group_token: &str,
        counts: [u64; Outcome::ALL.len()],
    ) -> Result<(), LoadError> {
        let group = PlayerGroup::from_token(group_token).ok_or_else(|| LoadError::Malformed {
            path: path.to_path_buf(),
            reason: format!("unrecognized group '{group_token}' for player '{name}'"),
        })?;
        let entry = self
            .players
            .entry(name.to_string())
            .or_insert((group, [0; Outcome::ALL.len()]));
        if entry.0 != group {
            return Err(LoadError::Malformed {
                path: path.to_path_buf(),
                reason: format!("player '{name}' appears in both groups"),
            });
        }
        for (total, count) in entry.1.iter_mut().zip(counts) {
            *total += count;
        }
        Ok(())
    }

    fn into_roster(self, source: &Path) -> Result<Roster, LoadError> {
        if self.players.is_empty() {
            return Err(LoadError::Malformed {
                path: source.to_path_buf(),
                reason: "no player records found".to_string(),
            });
        }
        let mut players = Vec::with_capacity(self.players.len());
        for (name, (group, counts)) in self.players {
            let player =
                Player::new(name, group, counts).map_err(|e| LoadError::Malformed {
                    path: source.to_path_buf(),
                    reason: e.to_string(),
                })?;
            players.push(player);
        }
        Ok(Roster::new(players))
    }
}

/// Load and aggregate a roster from a stats file or directory.
pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let metadata = fs::metadata(path).map_err(|_| LoadError::NotFound(path.to_path_buf()))?;

    let mut acc = Accumulator::default();
    if metadata.is_dir() {
        let entries = fs::read_dir(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && has_stats_extension(p))
            .collect();
        files.sort();
        for file in &files {
            ingest_file(&mut acc, file)?;
        }
    } else {
        ingest_file(&mut acc, path)?;
    }
    acc.into_roster(path)
}

fn has_stats_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("csv") | Some("json")
    )
}

fn ingest_file(acc: &mut Accumulator, path: &Path) -> Result<(), LoadError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => ingest_csv(acc, path),
        Some("json") => ingest_json(acc, path),
        other => Err(LoadError::Malformed {
            path: path.to_path_buf(),
            reason: format!("unsupported stats format '{}'", other.unwrap_or("")),
        }),
    }
}

fn ingest_csv(acc: &mut Accumulator, path: &Path) -> Result<(), LoadError> {
    let file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);
    for record in reader.deserialize::<CsvRecord>() {
        let record = record.map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        acc.add(
            path,
            &record.name,
            &record.group,
            [
                record.out,
                record.walk,
                record.single,
                record.double,
                record.triple,
                record.hr,
            ],
        )?;
    }
    Ok(())
}

fn ingest_json(acc: &mut Accumulator, path: &Path) -> Result<(), LoadError> {
    let mut file = fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let records: Vec<JsonRecord> =
        serde_json::from_str(&contents).map_err(|e| LoadError::Malformed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    for record in records {
        let c = record.counts;
        acc.add(
            path,
            &record.name,
            &record.group,
            [c.out, c.walk, c.single, c.double, c.triple, c.hr],
        )?;
    }
    Ok(())
}
