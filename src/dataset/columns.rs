use super::DataLoadError;
use csv::StringRecord;

/// A column the loader knows about, with the header spellings it accepts.
pub(crate) struct Column {
    pub canonical: &'static str,
    pub required: bool,
    aliases: &'static [&'static str],
}

impl Column {
    fn is_alias(&self, header: &str) -> bool {
        self.aliases.contains(&header)
    }
}

/// Known columns. Aliases cover the headers of the `Food_Recipe_cleaned.csv` export.
pub(crate) const COLUMNS: &[Column] = &[
    Column {
        canonical: "name",
        required: true,
        aliases: &["title"],
    },
    Column {
        canonical: "ingredients",
        required: true,
        aliases: &["ingredients_name"],
    },
    Column {
        canonical: "diet",
        required: true,
        aliases: &[],
    },
    Column {
        canonical: "meal_type",
        required: true,
        aliases: &["course", "meal"],
    },
    Column {
        canonical: "cuisine",
        required: true,
        aliases: &[],
    },
    Column {
        canonical: "prep_time_minutes",
        required: true,
        aliases: &["prep_time (in mins)", "prep_time"],
    },
    Column {
        canonical: "cook_time_minutes",
        required: true,
        aliases: &["cook_time (in mins)", "cook_time"],
    },
    Column {
        canonical: "image_url",
        required: true,
        aliases: &["image"],
    },
    Column {
        canonical: "category",
        required: false,
        aliases: &["tags", "categories"],
    },
    Column {
        canonical: "description",
        required: false,
        aliases: &[],
    },
    Column {
        canonical: "instructions",
        required: false,
        aliases: &[],
    },
];

/// Prefix given to headers that name a column another header already supplies.
const SHADOWED_PREFIX: &str = "shadowed:";

/// Rewrites source headers to canonical column names.
///
/// Matching is case-insensitive and ignores surrounding whitespace. A header
/// spelled exactly like a canonical name wins over any alias of it, wherever
/// it appears; among aliases the leftmost wins. Headers that lose are renamed
/// with a prefix no column uses, and unknown headers pass through unchanged,
/// so row deserialisation ignores both.
pub(crate) fn canonical_headers(headers: &StringRecord) -> Result<StringRecord, DataLoadError> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let mut assigned: Vec<Option<&'static str>> = vec![None; normalized.len()];
    let mut claimed: Vec<&'static str> = Vec::new();

    for (slot, header) in assigned.iter_mut().zip(&normalized) {
        if let Some(column) = COLUMNS.iter().find(|c| c.canonical == header.as_str()) {
            if !claimed.contains(&column.canonical) {
                claimed.push(column.canonical);
                *slot = Some(column.canonical);
            }
        }
    }

    for (slot, header) in assigned.iter_mut().zip(&normalized) {
        if slot.is_some() {
            continue;
        }
        if let Some(column) = COLUMNS.iter().find(|c| c.is_alias(header)) {
            if !claimed.contains(&column.canonical) {
                claimed.push(column.canonical);
                *slot = Some(column.canonical);
            }
        }
    }

    let mut canonical = StringRecord::with_capacity(headers.as_slice().len(), headers.len());
    for ((header, normalized), slot) in headers.iter().zip(&normalized).zip(&assigned) {
        match slot {
            Some(column) => canonical.push_field(column),
            None if is_known(normalized) => {
                canonical.push_field(&format!("{}{}", SHADOWED_PREFIX, header))
            }
            None => canonical.push_field(header),
        }
    }

    if let Some(missing) = COLUMNS
        .iter()
        .find(|column| column.required && !claimed.contains(&column.canonical))
    {
        return Err(DataLoadError::MissingColumn(missing.canonical.to_string()));
    }

    Ok(canonical)
}

fn is_known(header: &str) -> bool {
    COLUMNS
        .iter()
        .any(|c| c.canonical == header || c.is_alias(header))
}
