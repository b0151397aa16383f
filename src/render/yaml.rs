//! Line-wise key substitution for the poky.yaml template
//!
//! A line is rewritten only when its text before the first colon, trimmed,
//! exactly matches a placeholder key. Everything else passes through
//! byte-for-byte.

use std::collections::HashMap;

/// Render the config template against the replacement table
pub fn render_config(template: &str, replacements: &HashMap<String, String>) -> String {
  let mut out = String::with_capacity(template.len());

  for raw in template.split_inclusive('\n') {
    let line = raw.strip_suffix('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).unwrap_or(raw);
    let key = line.split(':').next().unwrap_or(line).trim();

    match replacements.get(key) {
      Some(value) => {
        out.push_str(&format!("{} : \"{}\"\n", key, value));
      }
      None => out.push_str(raw),
    }
  }

  out
}
