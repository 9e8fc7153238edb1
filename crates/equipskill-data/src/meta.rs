//! Note-tag metadata extraction
//!
//! Notes carry tags like `<UTA_ExpandEquipTypeWId:1-3>`. A tag with a colon
//! stores its value; a bare `<Flag>` stores `"true"`.

use crate::error::Result;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const TAG_PATTERN: &str = r"<([^<>:]+)(:?)([^>]*)>";
const FLAG_VALUE: &str = "true";

fn tag_regex() -> Result<&'static Regex> {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    if let Some(re) = TAG_RE.get() {
        return Ok(re);
    }
    let re = Regex::new(TAG_PATTERN)?;
    Ok(TAG_RE.get_or_init(|| re))
}

/// Extract every `<Key:value>` / `<Key>` tag from a note; later tags win
pub fn extract_meta(note: &str) -> Result<HashMap<String, String>> {
    let re = tag_regex()?;
    let mut meta = HashMap::new();

    for caps in re.captures_iter(note) {
        let (Some(key), Some(colon), Some(value)) = (caps.get(1), caps.get(2), caps.get(3))
        else {
            continue;
        };
        let value = if colon.as_str().is_empty() {
            FLAG_VALUE.to_string()
        } else {
            value.as_str().to_string()
        };
        meta.insert(key.as_str().to_string(), value);
    }

    Ok(meta)
}
