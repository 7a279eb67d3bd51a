use crate::error::DraftError;
use crate::graph::GraphDocument;
use ahash::AHashMap;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// A captured draft: the graph document plus its capture time in epoch
/// milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub graph_data: GraphDocument,
    pub timestamp: u64,
}

/// The local draft store, keyed by package identifier.
#[derive(Debug, Clone, Default)]
pub struct DraftCache {
    drafts: AHashMap<String, DraftRecord>,
}

// The document crosses the binary boundary as JSON text: node payloads are
// schemaless values a non-self-describing format cannot decode.
#[derive(Serialize, Deserialize)]
struct StoredRecord {
    document_json: String,
    timestamp: u64,
}

impl DraftCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a draft for `package_id`, stamping it with the current
    /// wall-clock time. An existing draft for the package is replaced.
    pub fn store(&mut self, package_id: impl Into<String>, document: GraphDocument) {
        self.drafts.insert(
            package_id.into(),
            DraftRecord {
                graph_data: document,
                timestamp: epoch_millis(),
            },
        );
    }

    pub fn get(&self, package_id: &str) -> Option<&DraftRecord> {
        self.drafts.get(package_id)
    }

    pub fn remove(&mut self, package_id: &str) -> Option<DraftRecord> {
        self.drafts.remove(package_id)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Saves the cache to a compact binary artifact.
    pub fn save(&self, path: &str) -> Result<(), DraftError> {
        let mut stored: AHashMap<&str, StoredRecord> = AHashMap::with_capacity(self.drafts.len());
        for (package_id, record) in &self.drafts {
            let document_json = record
                .graph_data
                .to_json()
                .map_err(|e| DraftError::Encode(e.to_string()))?;
            stored.insert(
                package_id.as_str(),
                StoredRecord {
                    document_json,
                    timestamp: record.timestamp,
                },
            );
        }
        let bytes =
            encode_to_vec(&stored, standard()).map_err(|e| DraftError::Encode(e.to_string()))?;
        let mut file = fs::File::create(path).map_err(|e| DraftError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| DraftError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a cache from its binary artifact, reporting what went wrong.
    pub fn from_file(path: &str) -> Result<Self, DraftError> {
        let mut file = fs::File::open(path).map_err(|e| DraftError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| DraftError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decodes a cache from its binary form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DraftError> {
        let (stored, _): (AHashMap<String, StoredRecord>, _) =
            decode_from_slice(bytes, standard()).map_err(|e| DraftError::Decode(e.to_string()))?;
        let mut drafts = AHashMap::with_capacity(stored.len());
        for (package_id, record) in stored {
            let graph_data = GraphDocument::from_json(&record.document_json)
                .map_err(|e| DraftError::Decode(e.to_string()))?;
            drafts.insert(
                package_id,
                DraftRecord {
                    graph_data,
                    timestamp: record.timestamp,
                },
            );
        }
        Ok(Self { drafts })
    }

    /// Loads a cache, degrading a missing or corrupt artifact to an empty
    /// cache. The host decides whether to surface a restore prompt.
    pub fn load_or_default(path: &str) -> Self {
        Self::from_file(path).unwrap_or_default()
    }
}

/// Milliseconds since the Unix epoch; zero if the clock sits before it.
fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}
