use xxhash_rust::xxh3::xxh3_64;

/// Gantry derives identifiers from these hashes and writes them into build
/// output and caches, so they must be stable across runs, machines and
/// platforms. Speed is secondary.
pub fn hash_string(s: &str) -> String {
  let res = xxh3_64(s.as_bytes());
  format!("{:016x}", res)
}
