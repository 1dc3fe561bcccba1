use std::sync::OnceLock;

/// A report output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

impl Language {
    pub fn is_rtl(&self) -> bool {
        is_rtl(self.code)
    }
}

/// Always listed first, in this order.
const PINNED: &[Language] = &[
    Language { code: "ar", name: "Arabic" },
    Language { code: "en", name: "English" },
    Language { code: "fr", name: "French" },
];

/// Listed after the pinned entries, sorted by display name.
const OTHERS: &[Language] = &[
    Language { code: "bn", name: "Bengali" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "cs", name: "Czech" },
    Language { code: "da", name: "Danish" },
    Language { code: "nl", name: "Dutch" },
    Language { code: "fi", name: "Finnish" },
    Language { code: "de", name: "German" },
    Language { code: "el", name: "Greek" },
    Language { code: "he", name: "Hebrew" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "hu", name: "Hungarian" },
    Language { code: "id", name: "Indonesian" },
    Language { code: "it", name: "Italian" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
    Language { code: "ms", name: "Malay" },
    Language { code: "no", name: "Norwegian" },
    Language { code: "fa", name: "Persian" },
    Language { code: "pl", name: "Polish" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "ro", name: "Romanian" },
    Language { code: "ru", name: "Russian" },
    Language { code: "es", name: "Spanish" },
    Language { code: "sw", name: "Swahili" },
    Language { code: "sv", name: "Swedish" },
    Language { code: "tl", name: "Filipino (Tagalog)" },
    Language { code: "th", name: "Thai" },
    Language { code: "tr", name: "Turkish" },
    Language { code: "uk", name: "Ukrainian" },
    Language { code: "ur", name: "Urdu" },
    Language { code: "vi", name: "Vietnamese" },
];

const RTL_CODES: &[&str] = &["ar", "fa", "he", "ur"];

/// Right-to-left membership, case-insensitive on the code.
pub fn is_rtl(code: &str) -> bool {
    let code = code.trim().to_lowercase();
    RTL_CODES.contains(&code.as_str())
}

/// Pinned languages followed by the rest in display-name order.
pub fn catalog() -> &'static [Language] {
    static CATALOG: OnceLock<Vec<Language>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut others = OTHERS.to_vec();
        others.sort_by(|a, b| a.name.cmp(b.name));
        PINNED.iter().copied().chain(others).collect()
    })
}

pub fn default_language() -> Language {
    PINNED[0]
}

pub fn find(code: &str) -> Option<Language> {
    let code = code.trim().to_lowercase();
    catalog().iter().find(|l| l.code == code).copied()
}

/// Case-insensitive substring match against code or name. A blank query keeps
/// the whole catalog.
pub fn filter(query: &str) -> Vec<Language> {
    let q = query.trim().to_lowercase();
    catalog()
        .iter()
        .filter(|l| q.is_empty() || l.name.to_lowercase().contains(&q) || l.code.contains(&q))
        .copied()
        .collect()
}
