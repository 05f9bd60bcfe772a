use serde::{Deserialize, Serialize};

use crate::error::{ChexError, Result};
use crate::hash::digest::digest;
use crate::policy::{DuplicatePolicy, HashAlgo};

/// One tracked file: the name the collaborator reported for it, plus the
/// lowercase-hex content digest. Immutable once built.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub name: String,
    pub digest: String,
}

/// Ordered table of records; insertion order is upload order. Names are
/// unique within one table.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct BaselineTable {
    pub records: Vec<FileRecord>,
}

impl BaselineTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Digest for `name`, if tracked. Names compare as opaque strings.
    pub fn digest_of(&self, name: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.digest.as_str())
    }

    /// Insert honoring the duplicate policy. Last-wins overwrites the
    /// existing record in place, so the first occurrence keeps its position.
    pub(crate) fn insert(
        &mut self,
        name: String,
        digest: String,
        dups: DuplicatePolicy,
    ) -> Result<()> {
        match self.records.iter_mut().find(|r| r.name == name) {
            Some(existing) => match dups {
                DuplicatePolicy::LastWins => {
                    existing.digest = digest;
                    Ok(())
                }
                DuplicatePolicy::FirstWins => Ok(()),
                DuplicatePolicy::Reject => Err(ChexError::DuplicateName(name)),
            },
            None => {
                self.records.push(FileRecord { name, digest });
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BaselineOptions {
    pub algo: HashAlgo,
    pub duplicates: DuplicatePolicy,
}

/// Fingerprint an upload batch into a baseline table.
pub fn build_baseline(
    batch: &[(String, Vec<u8>)],
    opts: Option<&BaselineOptions>,
) -> Result<BaselineTable> {
    let opts = opts.copied().unwrap_or_default();
    let mut table = BaselineTable::default();
    for (name, bytes) in batch {
        let d = digest(opts.algo, bytes);
        table.insert(name.clone(), d, opts.duplicates)?;
    }
    Ok(table)
}
