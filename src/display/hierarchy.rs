use std::collections::{BTreeMap, BTreeSet};

/// Render the department → teams tree as indented text. Iteration order of
/// the BTree structures already gives the required ascending ordering.
pub fn render_hierarchy(tree: &BTreeMap<String, BTreeSet<String>>) -> String {
    let mut output = String::from("Team hierarchy:\n");
    for (department, teams) in tree {
        output.push_str(&format!("- {}\n", department));
        for team in teams {
            output.push_str(&format!("  - {}\n", team));
        }
    }
    output
}
