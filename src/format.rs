use std::sync::LazyLock;

use regex::{Captures, Regex};

static ID_UNSAFE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9-]+").unwrap());

/// Brazilian currency label: `R$ 12,50`. No thousands grouping.
pub fn currency(value: f64) -> String {
    format!("R$ {:.2}", value).replace('.', ",")
}

/// Partnership length label: `1 ano`, `3 anos`.
pub fn years(count: u32) -> String {
    if count == 1 {
        "1 ano".to_string()
    } else {
        format!("{} anos", count)
    }
}

/// Element id derived from an item id, e.g. `details-bolo-de-fuba`.
///
/// Every byte outside `[A-Za-z0-9-]` (including `_`) becomes `_XX`, so
/// distinct item ids always give distinct element ids.
pub fn element_id(prefix: &str, item_id: &str) -> String {
    let safe = ID_UNSAFE_RE.replace_all(item_id, |caps: &Captures| {
        caps[0].bytes().map(|b| format!("_{:02X}", b)).collect::<String>()
    });
    format!("{}-{}", prefix, safe)
}
