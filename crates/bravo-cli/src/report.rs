//! Plain-text rendering of verdicts, search results, and deal lists.

use bravo_core::{ProductKey, Special, SpecialIntel, Store, WatchedItem};
use bravo_intel::{
    compute_verdict, format_discount, format_price, prediction_text, search, SaleSignal,
    SearchOptions, SearchResult, Verdict, WatchlistView,
};
use rust_decimal::Decimal;

use crate::snapshot::Snapshot;

fn signal_line(intel: Option<&SpecialIntel>) -> String {
    let signal = SaleSignal::from_intel(intel);
    match signal.detail {
        Some(detail) => format!("{} {} ({detail})", signal.display.dots(), signal.label),
        None => format!("{} {}", signal.display.dots(), signal.label),
    }
}

pub(crate) fn verdict_lines(
    name: &str,
    verdict: &Verdict,
    special: Option<&Special>,
    intel: Option<&SpecialIntel>,
) -> Vec<String> {
    let mut lines = vec![
        format!("{:<10} {name}", verdict.kind.label()),
        verdict.headline.clone(),
        verdict.detail.clone(),
    ];

    if let Some(special) = special {
        let price = match special.original_price {
            Some(original) => format!(
                "{} (was {})",
                format_price(special.current_price),
                format_price(original)
            ),
            None => format_price(special.current_price),
        };
        lines.push(format!("Price:      {price}"));
    }
    if let Some(save) = verdict.save_amount.filter(|s| *s > Decimal::ZERO) {
        lines.push(format!("Save:       {}", format_price(save)));
    }

    lines.push(format!("Signal:     {}", signal_line(intel)));
    if special.is_none() {
        let prediction = prediction_text(
            intel.and_then(|i| i.expected_days_until_next),
            intel.and_then(|i| i.days_since_last_special),
        );
        lines.push(format!("Next sale:  {prediction}"));
    }
    lines
}

pub(crate) fn print_verdict(snapshot: &Snapshot, key: &ProductKey) {
    let index = snapshot.index();
    let special = index.special(key);
    let intel = index.intel(key);
    let verdict = compute_verdict(special, intel);
    let name = special
        .map(|s| s.name.as_str())
        .or_else(|| intel.map(|i| i.name.as_str()))
        .unwrap_or(key.product_id.as_str());

    for line in verdict_lines(name, &verdict, special, intel) {
        println!("{line}");
    }
}

pub(crate) fn search_row(row: &SearchResult) -> String {
    let verdict = compute_verdict(row.special.as_ref(), row.intel.as_ref());
    let price = row
        .special
        .as_ref()
        .map(|s| format_price(s.current_price))
        .unwrap_or_else(|| "-".to_string());
    let off = format_discount(row.special.as_ref().and_then(|s| s.discount_pct));
    format!(
        "{:<11}{:<14}{:<42}{:<10}{:<6}{}",
        row.store.display_name(),
        row.key.product_id,
        truncate(&row.name, 40),
        price,
        off,
        verdict.kind.label()
    )
}

pub(crate) fn print_search(snapshot: &Snapshot, query: &str, options: &SearchOptions) {
    let rows = search(query, &snapshot.specials, &snapshot.intel, options);
    if rows.is_empty() {
        println!("no results for \"{}\"", query.trim());
        return;
    }

    println!("{:<11}{:<14}{:<42}{:<10}{:<6}VERDICT", "STORE", "ID", "NAME", "PRICE", "OFF");
    for row in &rows {
        println!("{}", search_row(row));
    }
    println!("{} result{}", rows.len(), if rows.len() == 1 { "" } else { "s" });
}

pub(crate) fn print_watching(snapshot: &Snapshot, items: &[WatchedItem]) {
    if items.is_empty() {
        println!("nothing watched yet; add items to the watchlist file");
        return;
    }

    let index = snapshot.index();
    let view = WatchlistView::build(items, &index);
    println!("{} item{} tracked", items.len(), if items.len() == 1 { "" } else { "s" });

    let on_sale: Vec<_> = view.on_sale().collect();
    if !on_sale.is_empty() {
        println!();
        println!("ON SALE NOW ({})", on_sale.len());
        for entry in on_sale {
            println!(
                "  [{}] {} ({}): {}",
                entry.verdict.kind,
                entry.item.name,
                entry.item.store.display_name(),
                entry.verdict.headline
            );
        }
    }

    let waiting = view.waiting();
    if !waiting.is_empty() {
        println!();
        println!("WAITING ({})", waiting.len());
        for entry in waiting {
            println!(
                "  {} ({}): {}",
                entry.item.name,
                entry.item.store.display_name(),
                entry.prediction
            );
        }
    }

    let count = view.savings_count();
    if count > 0 {
        println!();
        println!(
            "{} in savings across {count} item{} on sale",
            format_price(view.total_savings()),
            if count == 1 { "" } else { "s" }
        );
    }
}

fn print_special_list(specials: &[&Special]) {
    for special in specials {
        println!(
            "{:<11}{:<42}{:<10}{}",
            special.store.display_name(),
            truncate(&special.name, 40),
            format_price(special.current_price),
            format_discount(special.discount_pct)
        );
    }
}

pub(crate) fn print_top_deals(snapshot: &Snapshot, limit: usize) {
    let deals = bravo_intel::top_discounts(&snapshot.specials, limit);
    if deals.is_empty() {
        println!("no discounted specials in the current snapshot");
        return;
    }
    print_special_list(&deals);
}

pub(crate) fn print_rare_deals(snapshot: &Snapshot, limit: usize) {
    let deals = bravo_intel::rare_deals(&snapshot.specials, &snapshot.intel, limit);
    if deals.is_empty() {
        println!("no rare deals on special right now");
        return;
    }
    print_special_list(&deals);
}

pub(crate) fn print_browse(
    snapshot: &Snapshot,
    store: Option<Store>,
    category: Option<&str>,
    limit: usize,
) {
    let specials = bravo_intel::current_specials(&snapshot.specials, store, category);
    if specials.is_empty() {
        println!("no specials match");
        return;
    }
    let shown = specials.len().min(limit);
    print_special_list(&specials[..shown]);
    if specials.len() > shown {
        println!("showing {shown} of {}; raise --limit for more", specials.len());
    }
}

pub(crate) fn print_categories(snapshot: &Snapshot) {
    for category in bravo_intel::categories(&snapshot.specials) {
        println!("{category}");
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
