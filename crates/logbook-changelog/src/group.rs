//! Grouping entries by type

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::types::{Entry, TypeGroup};

/// Partition entries by their header label.
///
/// Groups come out in the order their label is first seen and keep the
/// relative order of their entries. Entries without a type land in `Misc`.
#[instrument(skip(entries), fields(entry_count = entries.len()))]
pub fn group_by_header(entries: &[Entry]) -> Vec<TypeGroup<'_>> {
    let mut groups: Vec<TypeGroup<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let label = entry.header.label();
        let slot = *index.entry(label).or_insert_with(|| {
            groups.push(TypeGroup {
                label,
                entries: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].entries.push(entry);
    }

    debug!(group_count = groups.len(), "entries grouped");
    groups
}
