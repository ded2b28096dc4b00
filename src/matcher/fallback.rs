// Synthetic result used when the catalog yields no matches.
use crate::interpreter::detect_category;
use crate::model::Product;
use crate::utils::capitalize_first;
use rand::Rng;
use regex::Regex;

const FALLBACK_PRICE_MIN: u32 = 500;
const FALLBACK_PRICE_MAX: u32 = 5000;

/// Builds exactly one presentable stand-in product for a query that
/// matched nothing.
///
/// Unlike the interpreter, only the price tokens are stripped here;
/// "best"/"gaming" stay in the synthesized name. That asymmetry is kept
/// on purpose (see DESIGN.md).
pub fn fallback_product(raw_query: &str) -> Product {
    let price_tokens =
        Regex::new(r"\b(under\s+\d+|above\s+\d+)\b").expect("valid price token regex");
    let lowered = raw_query.to_lowercase();
    let stripped = price_tokens.replace_all(&lowered, "");
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    let category = detect_category(&cleaned);
    let specs = match category {
        Some(cat) => format!(
            "Sorry, we don't have any {cat} in our database yet. Try our earphones \
             for a great audio experience or check out our laptops for productivity!"
        ),
        None => {
            "No matching products found. Try searching for mobiles, laptops, or earphones!"
                .to_string()
        }
    };

    let mut rng = rand::rng();
    Product {
        name: format!("Sample {}", capitalize_first(&cleaned)),
        category,
        price: f64::from(rng.random_range(FALLBACK_PRICE_MIN..=FALLBACK_PRICE_MAX)),
        rating: 4.0,
        specs,
        tags: Vec::new(),
        link: "#".to_string(),
    }
}
