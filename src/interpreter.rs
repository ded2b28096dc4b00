// Turns raw query text into a structured FilterDescriptor.
use crate::model::{Category, FilterDescriptor};
use regex::Regex;

/// Category synonym table. Iteration order is the tie-break when a term
/// could match more than one category, so the declaration order matters.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Mobiles, &["mobile", "phones", "phone", "smartphone", "smartphones"]),
    (Category::Laptops, &["laptop", "laptops", "notebook", "notebooks"]),
    (Category::Earphones, &["earphone", "earphones", "headphone", "headphones", "earbud", "earbuds"]),
    (Category::Speakers, &["speaker", "speakers"]),
    (Category::Tablets, &["tablet", "tablets", "ipad"]),
    (Category::Smartwatches, &["smartwatch", "smartwatches", "watch", "watches"]),
];

/// First category whose keyword set contains `term` exactly, or whose
/// canonical name occurs inside `term`. `term` must already be lowercase.
pub fn detect_category(term: &str) -> Option<Category> {
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.contains(&term) || term.contains(category.as_str()) {
            return Some(*category);
        }
    }
    None
}

pub struct QueryInterpreter {
    filter_tokens: Regex,
    under_price: Regex,
    above_price: Regex,
}

impl QueryInterpreter {
    pub fn new() -> Self {
        Self {
            filter_tokens: Regex::new(r"\b(best|under\s+\d+|above\s+\d+|gaming)\b")
                .expect("valid filter token regex"),
            under_price: Regex::new(r"under\s+(\d+)").expect("valid price regex"),
            above_price: Regex::new(r"above\s+(\d+)").expect("valid price regex"),
        }
    }

    /// Interprets a raw query. Never fails: an empty or unrecognized query
    /// simply yields an empty descriptor and the downstream fallback copes.
    pub fn interpret(&self, query: &str) -> FilterDescriptor {
        let lowered = query.to_lowercase();

        // Strip recognized filter tokens, then collapse whitespace. The
        // residual is what the user is actually asking for.
        let stripped = self.filter_tokens.replace_all(&lowered, "");
        let cleaned_term = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

        let max_price = self
            .under_price
            .captures(&lowered)
            .and_then(|c| c[1].parse::<f64>().ok());
        let min_price = self
            .above_price
            .captures(&lowered)
            .and_then(|c| c[1].parse::<f64>().ok());

        FilterDescriptor {
            category: detect_category(&cleaned_term),
            max_price,
            min_price,
            is_best_query: lowered.contains("best"),
            is_gaming_query: lowered.contains("gaming"),
            cleaned_term,
        }
    }
}
