use std::hash::{DefaultHasher, Hash, Hasher};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

const SUFFIX_LEN: usize = 9;
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Milliseconds since the Unix epoch; zero if the clock sits before it.
pub(crate) fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

/// Allocates node identifiers of the form `node_{millis}_{suffix}`.
///
/// The creation time keeps ids readable; the suffix hashes a per-instance
/// counter, the process id and the sub-millisecond clock so two nodes
/// created in the same millisecond still come out distinct.
#[derive(Debug, Default)]
pub struct IdGenerator {
    counter: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_node_id(&mut self) -> String {
        self.counter += 1;
        format!("node_{}_{}", epoch_millis(), self.suffix())
    }

    fn suffix(&self) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or(0);
        let mut hasher = DefaultHasher::new();
        (self.counter, process::id(), nanos).hash(&mut hasher);
        base36(hasher.finish())
    }
}

/// Lowest `SUFFIX_LEN` base-36 digits of a hash, zero-padded.
fn base36(mut value: u64) -> String {
    let mut out = [b'0'; SUFFIX_LEN];
    for slot in out.iter_mut().rev() {
        *slot = BASE36_DIGITS[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8_lossy(&out).into_owned()
}
