// Renders ranked results into the response markup.
//
// All display randomness (synthesized original price, discount percent,
// source label) lives here so the search pipeline stays deterministic.
use crate::model::Product;
use crate::utils::{capitalize_first, format_price};
use chrono::Local;
use rand::Rng;

/// Source labels shown next to each item. One is drawn independently
/// per item on every render.
const SOURCE_LABELS: &[&str] = &["Deals Database", "Price Tracker", "Bargain Hub"];

const TOP_RATED_THRESHOLD: f64 = 4.5;
const BEST_VALUE_RATIO: f64 = 5000.0;
const BEST_VALUE_MIN_RATING: f64 = 4.0;

pub fn render_results(raw_query: &str, results: &[Product]) -> String {
    let mut rng = rand::rng();
    let mut message = String::from("<div class='text-gray-800'>");
    message.push_str(&format!(
        "<p class='text-2xl font-bold text-purple-600 mb-6 animate-bounce'>\
         ✨ Real-Time Deals on {} in India! ✨</p>",
        capitalize_first(raw_query)
    ));
    message.push_str("<div class='space-y-6'>");

    for (index, item) in results.iter().enumerate() {
        let highlight = if index == 0 {
            "bg-gradient-to-r from-yellow-200 to-orange-200 border-l-4 border-orange-500 shadow-lg"
        } else {
            "bg-white shadow-md"
        };

        // Synthesized strikethrough price, 10-30% above the real one.
        let markup_percent = rng.random_range(10..=30) as f64;
        let original_price = item.price * (1.0 + markup_percent / 100.0);
        let discount = ((original_price - item.price) / original_price * 100.0).round();
        let source = SOURCE_LABELS[rng.random_range(0..SOURCE_LABELS.len())];

        message.push_str(&format!(
            "<div class='p-5 rounded-lg {highlight} transition-all hover:shadow-xl hover:-translate-y-1'>"
        ));
        message.push_str(&format!(
            "<p class='font-bold text-xl text-teal-700'>{}</p>",
            item.name
        ));
        message.push_str(&format!(
            "<p class='text-gray-800'>💸 ₹{} <span class='line-through text-gray-400'>₹{}</span> (-{discount}%)</p>",
            format_price(item.price),
            format_price(original_price),
        ));
        message.push_str(&format!(
            "<p class='text-gray-800'><a href='{}' class='text-blue-600 hover:underline' target='_blank'>{source}</a></p>",
            item.link
        ));
        message.push_str(&format!(
            "<p class='text-sm text-gray-600 mt-1'>{}</p>",
            item.specs
        ));
        message.push_str(&format!(
            "<p class='text-sm text-yellow-600 mt-1'>⭐ {}/5</p>",
            item.rating
        ));

        if item.rating >= TOP_RATED_THRESHOLD {
            message.push_str("<p class='text-green-600 font-bold mt-2'>🌟 Top Rated 🌟</p>");
        }
        if item.price / item.rating < BEST_VALUE_RATIO && item.rating >= BEST_VALUE_MIN_RATING {
            message.push_str("<p class='text-blue-600 font-bold mt-2'>💰 Best Value 💰</p>");
        }
        if index == 0 {
            message.push_str("<p class='text-red-600 font-bold mt-2 animate-pulse'>🎉 Hot Deal Alert! 🎉</p>");
        }
        message.push_str("</div>");
    }

    message.push_str("</div>");
    message.push_str(&format!(
        "<p class='mt-6 text-purple-600 font-semibold text-lg'>Grab these now! 🚀 Fetched: {}</p>",
        Local::now().format("%d %b %Y, %I:%M %p")
    ));
    message.push_str("</div>");
    message
}
