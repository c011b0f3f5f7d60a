//! Market insights page: a read-only table of hardcoded market prices.
//!
//! The rows (and the decorative search box) are carried over from the
//! deployed portal unchanged.

#[cfg(test)]
#[path = "market_insight_test.rs"]
mod market_insight_test;

use leptos::prelude::*;

/// Price movement marker for a market row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trend {
    Up,
    Down,
    Stable,
}

struct MarketEntry {
    crop: &'static str,
    market: &'static str,
    price: &'static str,
    trend: Trend,
}

const MARKET_DATA: [MarketEntry; 5] = [
    MarketEntry { crop: "Wheat", market: "Delhi Mandi", price: "₹2100/quintal", trend: Trend::Up },
    MarketEntry { crop: "Rice", market: "Karnal Mandi", price: "₹3500/quintal", trend: Trend::Stable },
    MarketEntry { crop: "Potato", market: "Agra Mandi", price: "₹800/quintal", trend: Trend::Down },
    MarketEntry { crop: "Tomato", market: "Nashik Mandi", price: "₹1200/quintal", trend: Trend::Up },
    MarketEntry { crop: "Onion", market: "Lasalgaon Mandi", price: "₹1500/quintal", trend: Trend::Up },
];

fn trend_label(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲ Up",
        Trend::Down => "▼ Down",
        Trend::Stable => "● Stable",
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "trend trend--up",
        Trend::Down => "trend trend--down",
        Trend::Stable => "trend trend--stable",
    }
}

/// Market insights page.
#[component]
pub fn MarketInsightPage() -> impl IntoView {
    view! {
        <div class="market-page">
            <main class="market-page__main">
                <h1>"Market Insights"</h1>

                <div class="market-page__table-card">
                    <div class="market-page__table-header">
                        <h2>"Live Market Prices"</h2>
                        <input type="text" placeholder="Search crop..." class="market-page__search"/>
                    </div>
                    <table class="market-page__table">
                        <thead>
                            <tr>
                                <th>"Crop"</th>
                                <th>"Market"</th>
                                <th>"Price"</th>
                                <th>"Trend"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {MARKET_DATA
                                .iter()
                                .map(|entry| {
                                    view! {
                                        <tr>
                                            <td>{entry.crop}</td>
                                            <td>{entry.market}</td>
                                            <td class="market-page__price">{entry.price}</td>
                                            <td>
                                                <span class=trend_class(entry.trend)>
                                                    {trend_label(entry.trend)}
                                                </span>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </main>
        </div>
    }
}
