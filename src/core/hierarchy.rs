use crate::core::model::Employee;
use std::collections::{BTreeMap, BTreeSet};

/// Group records into department → {teams}. Duplicate teams collapse; the
/// BTree ordering gives ascending lexicographic iteration at both levels.
pub fn team_hierarchy(records: &[Employee]) -> BTreeMap<String, BTreeSet<String>> {
    let mut tree: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for record in records {
        tree.entry(record.department.clone())
            .or_default()
            .insert(record.team.clone());
    }
    tree
}
