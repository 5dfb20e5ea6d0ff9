//! Keyword-based target-market inference
//!
//! Fallback for ICT programs that lack structured semantic data: scans the
//! program title and keyword list for per-market signal words and infers a
//! target market only on an unambiguous majority. The inferred signal is
//! soft and never hard-blocks a match.

use std::collections::HashMap;

/// Signal keywords for one target market
pub struct MarketSignals {
    pub market: &'static str,
    pub signals: &'static [&'static str],
}

/// Per-market signal tables
pub static MARKET_SIGNALS: &[MarketSignals] = &[
    MarketSignals {
        market: "CONSUMER",
        signals: &["소비자", "B2C", "일반인", "개인용", "생활밀착", "리빙"],
    },
    MarketSignals {
        market: "ENTERPRISE",
        signals: &["기업", "B2B", "산업체", "중소기업", "비즈니스", "업무용"],
    },
    MarketSignals {
        market: "GOVERNMENT",
        signals: &["공공", "정부", "지자체", "행정", "B2G", "공공기관"],
    },
    MarketSignals {
        market: "INDUSTRIAL",
        signals: &["산업용", "공장", "제조현장", "스마트팩토리", "설비", "산업현장"],
    },
];

/// A market is inferred only when its signal count reaches this floor
pub const MIN_SIGNAL_COUNT: usize = 2;

/// Infer a target market from free text
///
/// Counts signal-keyword occurrences across the title and each keyword
/// string. A market is inferred only when its count is at least
/// [`MIN_SIGNAL_COUNT`] and strictly exceeds every other market's count;
/// ties yield no inference.
pub fn infer_market(title: &str, keywords: &[String]) -> Option<&'static str> {
    let mut counts: HashMap<&'static str, usize> = HashMap::new();

    for table in MARKET_SIGNALS {
        let mut count = 0;
        for signal in table.signals {
            count += title.matches(signal).count();
            count += keywords.iter().filter(|kw| kw.contains(signal)).count();
        }
        counts.insert(table.market, count);
    }

    let (&best_market, &best_count) = counts.iter().max_by_key(|(_, count)| **count)?;
    if best_count < MIN_SIGNAL_COUNT {
        return None;
    }
    let tied = counts
        .iter()
        .filter(|(market, count)| **market != best_market && **count == best_count)
        .count();
    if tied > 0 {
        return None;
    }
    Some(best_market)
}
