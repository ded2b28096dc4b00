use crate::catalog::Catalog;
use crate::model::{Category, FilterDescriptor, Product};
use regex::Regex;
use std::collections::HashSet;

/// Results are always truncated to this many items.
pub const TOP_N: usize = 3;

/// Processor families that qualify a laptop as gaming-capable.
const GAMING_PROCESSORS: &[&str] = &["i5", "i7", "i9", "ryzen 5", "ryzen 7"];

const MIN_GAMING_RAM_GB: u32 = 8;

/// Trait defining the interface for a catalog matcher.
pub trait Matcher {
    fn search(&self, catalog: &Catalog, descriptor: &FilterDescriptor) -> Vec<Product>;
}

/// Implementation of the catalog matcher and ranker.
pub struct RankerImpl {
    ram_spec: Regex,
}

impl RankerImpl {
    pub fn new() -> Self {
        Self {
            ram_spec: Regex::new(r"(\d+)\s*gb\s*ram").expect("valid RAM spec regex"),
        }
    }

    /// The four-clause filter predicate. All clauses must hold.
    fn matches(&self, product: &Product, descriptor: &FilterDescriptor) -> bool {
        let name_lower = product.name.to_lowercase();

        let matches_category = descriptor
            .category
            .is_none_or(|wanted| product.category == Some(wanted));

        // A detected category makes the category clause authoritative; an
        // empty residual means "browse everything"; otherwise the residual
        // must occur in the product name.
        let matches_term = descriptor.category.is_some()
            || descriptor.cleaned_term.is_empty()
            || name_lower.contains(&descriptor.cleaned_term);

        let matches_price = descriptor.max_price.is_none_or(|max| product.price <= max)
            && descriptor.min_price.is_none_or(|min| product.price >= min);

        let matches_gaming = if descriptor.is_gaming_query
            && product.category == Some(Category::Laptops)
        {
            self.is_gaming_capable(product, &name_lower)
        } else {
            true
        };

        matches_category && matches_term && matches_price && matches_gaming
    }

    /// Gaming laptops must be tagged or named as such, carry at least
    /// 8 GB RAM in their specs, and mention a qualifying processor.
    fn is_gaming_capable(&self, product: &Product, name_lower: &str) -> bool {
        let marked_gaming =
            product.tags.iter().any(|t| t == "gaming") || name_lower.contains("gaming");
        if !marked_gaming {
            return false;
        }

        let specs_lower = product.specs.to_lowercase();
        let has_enough_ram = self
            .ram_spec
            .captures(&specs_lower)
            .and_then(|c| c[1].parse::<u32>().ok())
            .is_some_and(|gb| gb >= MIN_GAMING_RAM_GB);
        let has_good_processor = GAMING_PROCESSORS.iter().any(|p| specs_lower.contains(p));

        has_enough_ram && has_good_processor
    }
}

impl Matcher for RankerImpl {
    /// Filters, deduplicates by name (first occurrence in catalog order
    /// wins), sorts and truncates to the top 3.
    ///
    /// Price-bounded queries sort ascending by price, everything else
    /// descending by rating. Both branches rely on the stable sort so
    /// equal keys keep their catalog order.
    fn search(&self, catalog: &Catalog, descriptor: &FilterDescriptor) -> Vec<Product> {
        let mut results: Vec<Product> = catalog
            .products()
            .iter()
            .filter(|p| self.matches(p, descriptor))
            .cloned()
            .collect();

        let mut seen_names = HashSet::new();
        results.retain(|p| seen_names.insert(p.name.clone()));

        if descriptor.max_price.is_some() || descriptor.min_price.is_some() {
            results.sort_by(|a, b| a.price.total_cmp(&b.price));
        } else {
            results.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        }

        results.truncate(TOP_N);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::QueryInterpreter;

    fn product(name: &str, category: Category, price: f64, rating: f64) -> Product {
        Product {
            name: name.to_string(),
            category: Some(category),
            price,
            rating,
            specs: String::new(),
            tags: Vec::new(),
            link: "#".to_string(),
        }
    }

    fn laptop(name: &str, price: f64, specs: &str, tags: &[&str]) -> Product {
        Product {
            name: name.to_string(),
            category: Some(Category::Laptops),
            price,
            rating: 4.2,
            specs: specs.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            link: "#".to_string(),
        }
    }

    fn search(catalog: &Catalog, query: &str) -> Vec<Product> {
        let descriptor = QueryInterpreter::new().interpret(query);
        RankerImpl::new().search(catalog, &descriptor)
    }

    #[test]
    fn under_queries_sort_ascending_by_price() {
        let catalog = Catalog::from_products(vec![
            product("JBL Go 3", Category::Speakers, 449.0, 4.2),
            product("Mi Compact BT", Category::Speakers, 399.0, 4.0),
            product("Zebronics Zeb-County", Category::Speakers, 299.0, 3.9),
        ]);
        let results = search(&catalog, "speakers under 500");
        let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![299.0, 399.0, 449.0]);
    }

    #[test]
    fn unbounded_queries_sort_descending_by_rating() {
        let catalog = Catalog::from_products(vec![
            product("Redmi Note 13", Category::Mobiles, 16999.0, 4.3),
            product("Pixel 8a", Category::Mobiles, 52999.0, 4.6),
            product("Galaxy M15", Category::Mobiles, 13999.0, 4.1),
        ]);
        let results = search(&catalog, "best phones");
        let ratings: Vec<f64> = results.iter().map(|p| p.rating).collect();
        assert_eq!(ratings, vec![4.6, 4.3, 4.1]);
    }

    #[test]
    fn duplicate_names_keep_first_catalog_entry() {
        let catalog = Catalog::from_products(vec![
            product("JBL Go 3", Category::Speakers, 449.0, 4.2),
            product("JBL Go 3", Category::Speakers, 2999.0, 4.2),
        ]);
        let results = search(&catalog, "speakers");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].price, 449.0);
    }

    #[test]
    fn results_never_exceed_top_n() {
        let products = (0..10)
            .map(|i| product(&format!("Tablet {i}"), Category::Tablets, 10000.0 + i as f64, 4.0))
            .collect();
        let catalog = Catalog::from_products(products);
        assert_eq!(search(&catalog, "tablets").len(), TOP_N);
    }

    #[test]
    fn gaming_laptop_scenario_includes_capable_machine() {
        let catalog = Catalog::from_products(vec![
            laptop("Alpha Gaming Pro", 55000.0, "16GB RAM, Intel i7", &["gaming"]),
            laptop("Office Slim 14", 35000.0, "8 GB RAM, Intel i3", &[]),
        ]);
        let results = search(&catalog, "gaming laptop under 60000");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Alpha Gaming Pro");
    }

    #[test]
    fn gaming_filter_rejects_low_ram() {
        let catalog = Catalog::from_products(vec![laptop(
            "Budget Gaming Book",
            40000.0,
            "4 GB RAM, Intel i5",
            &["gaming"],
        )]);
        assert!(search(&catalog, "gaming laptop").is_empty());
    }

    #[test]
    fn gaming_filter_rejects_unqualified_processor() {
        let catalog = Catalog::from_products(vec![laptop(
            "Celeron Gaming Lite",
            30000.0,
            "8 GB RAM, Intel Celeron",
            &["gaming"],
        )]);
        assert!(search(&catalog, "gaming laptop").is_empty());
    }

    #[test]
    fn gaming_filter_accepts_gaming_in_name_without_tag() {
        let catalog = Catalog::from_products(vec![laptop(
            "Nitro Gaming 5",
            62000.0,
            "16 GB RAM, Ryzen 7 7735HS",
            &[],
        )]);
        assert_eq!(search(&catalog, "gaming laptop").len(), 1);
    }

    #[test]
    fn gaming_intent_leaves_other_categories_alone() {
        let catalog = Catalog::from_products(vec![product(
            "Gaming Earbuds X",
            Category::Earphones,
            1999.0,
            4.0,
        )]);
        let descriptor = QueryInterpreter::new().interpret("gaming earphones");
        let results = RankerImpl::new().search(&catalog, &descriptor);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn residual_term_searches_product_names_when_no_category() {
        let catalog = Catalog::from_products(vec![
            product("boAt Airdopes 141", Category::Earphones, 1299.0, 4.1),
            product("JBL Go 3", Category::Speakers, 2499.0, 4.2),
        ]);
        let results = search(&catalog, "boat airdopes");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "boAt Airdopes 141");
    }

    #[test]
    fn empty_query_browses_whole_catalog_by_rating() {
        let catalog = Catalog::from_products(vec![
            product("Redmi Note 13", Category::Mobiles, 16999.0, 4.3),
            product("Pixel 8a", Category::Mobiles, 52999.0, 4.6),
            product("JBL Go 3", Category::Speakers, 2499.0, 4.2),
            product("Lenovo Tab M10", Category::Tablets, 13999.0, 4.1),
        ]);
        let results = search(&catalog, "");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "Pixel 8a");
    }

    #[test]
    fn contradictory_bounds_match_nothing() {
        let catalog = Catalog::from_products(vec![product(
            "JBL Go 3",
            Category::Speakers,
            2499.0,
            4.2,
        )]);
        assert!(search(&catalog, "speakers above 5000 under 1000").is_empty());
    }

    #[test]
    fn equal_sort_keys_preserve_catalog_order() {
        let catalog = Catalog::from_products(vec![
            product("Echo Dot 5", Category::Speakers, 4499.0, 4.2),
            product("Nest Mini", Category::Speakers, 4499.0, 4.2),
        ]);
        let results = search(&catalog, "speakers under 5000");
        assert_eq!(results[0].name, "Echo Dot 5");
        assert_eq!(results[1].name, "Nest Mini");
    }

    #[test]
    fn identical_queries_are_idempotent() {
        let catalog = Catalog::from_products(vec![
            product("Redmi Note 13", Category::Mobiles, 16999.0, 4.3),
            product("Galaxy M15", Category::Mobiles, 13999.0, 4.1),
        ]);
        let first: Vec<String> = search(&catalog, "mobiles under 20000")
            .iter()
            .map(|p| p.name.clone())
            .collect();
        let second: Vec<String> = search(&catalog, "mobiles under 20000")
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(first, second);
    }
}
