//! Reading knowledge bases from text.
use anyhow::{Context, Error};

use proplogic::KnowledgeBase;

/// Parses one sentence per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn read_kb(contents: &str) -> Result<KnowledgeBase, Error> {
    let mut kb = KnowledgeBase::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        kb.tell(line)
            .with_context(|| format!("line {}: Could not parse '{}'", index + 1, line))?;
    }
    Ok(kb)
}
