//! Weighted keyword rules for industry classification
//!
//! Per-industry keyword lists with integer weights, scanned by substring
//! match against program titles and descriptions. Korean has no case
//! distinction, so matching is byte-exact.
//!
//! The override table resolves ministry/keyword disagreements for known
//! narrower-vs-broader industry pairs: the narrower industry wins only with
//! enough keyword evidence (or one decisive keyword); otherwise the broader
//! ministry default stands.

use crate::models::Industry;

/// Keyword rules for one industry
pub struct IndustryKeywords {
    pub industry: Industry,
    /// (keyword, weight) pairs; higher weight = stronger signal
    pub keywords: &'static [(&'static str, u32)],
}

/// Keyword table, in scan order
///
/// Scan order doubles as the tie-break: a later industry must strictly
/// out-score an earlier one to win.
pub static KEYWORD_RULES: &[IndustryKeywords] = &[
    IndustryKeywords {
        industry: Industry::BioHealth,
        keywords: &[
            ("신약", 3),
            ("치료제", 3),
            ("의료기기", 3),
            ("재생의료", 3),
            ("바이오", 2),
            ("의약품", 2),
            ("임상", 2),
            ("백신", 2),
            ("제약", 2),
            ("헬스케어", 2),
            ("유전자", 2),
            ("진단", 1),
            ("보건", 1),
        ],
    },
    IndustryKeywords {
        industry: Industry::Ict,
        keywords: &[
            ("인공지능", 3),
            ("소프트웨어", 2),
            ("빅데이터", 2),
            ("클라우드", 2),
            ("사물인터넷", 2),
            ("정보통신", 2),
            ("블록체인", 2),
            ("메타버스", 2),
            ("정보보호", 2),
            ("AI", 2),
            ("IoT", 2),
            ("디지털", 1),
            ("플랫폼", 1),
            ("네트워크", 1),
        ],
    },
    IndustryKeywords {
        industry: Industry::Energy,
        keywords: &[
            ("태양광", 3),
            ("풍력", 3),
            ("수소", 3),
            ("연료전지", 3),
            ("이차전지", 3),
            ("원자력", 3),
            ("신재생", 3),
            ("에너지", 2),
            ("전력", 2),
            ("ESS", 2),
        ],
    },
    IndustryKeywords {
        industry: Industry::Agriculture,
        keywords: &[
            ("농업", 3),
            ("스마트팜", 3),
            ("농산물", 2),
            ("농식품", 2),
            ("농촌", 2),
            ("종자", 2),
            ("작물", 2),
            ("축산", 2),
            ("재배", 1),
        ],
    },
    IndustryKeywords {
        industry: Industry::Veterinary,
        keywords: &[
            ("동물의약품", 3),
            ("동물용의약품", 3),
            ("수의", 3),
            ("가축방역", 3),
            ("동물질병", 3),
            ("반려동물", 2),
            ("구제역", 2),
            ("조류인플루엔자", 2),
            ("동물", 1),
        ],
    },
    IndustryKeywords {
        industry: Industry::Forestry,
        keywords: &[
            ("산림", 3),
            ("임업", 3),
            ("목재", 2),
            ("조림", 2),
            ("산불", 2),
            ("수목", 2),
        ],
    },
    IndustryKeywords {
        industry: Industry::MarineFisheries,
        keywords: &[
            ("수산", 3),
            ("어업", 3),
            ("해양수산", 3),
            ("양식", 2),
            ("어선", 2),
            ("해조류", 2),
            ("수산물", 2),
        ],
    },
    IndustryKeywords {
        industry: Industry::MarineSecurity,
        keywords: &[
            ("해양경비", 3),
            ("해상치안", 3),
            ("불법조업", 2),
            ("해난구조", 2),
            ("해양안전", 2),
            ("연안경비", 2),
        ],
    },
    IndustryKeywords {
        industry: Industry::Defense,
        keywords: &[
            ("무기체계", 3),
            ("방산", 3),
            ("국방", 3),
            ("군수", 2),
            ("방위", 2),
            ("전장", 2),
        ],
    },
    IndustryKeywords {
        industry: Industry::Manufacturing,
        keywords: &[
            ("뿌리산업", 2),
            ("반도체", 2),
            ("디스플레이", 2),
            ("제조", 2),
            ("금형", 2),
            ("소재", 1),
            ("부품", 1),
            ("장비", 1),
            ("공정", 1),
            ("용접", 1),
        ],
    },
    IndustryKeywords {
        industry: Industry::Environment,
        keywords: &[
            ("미세먼지", 2),
            ("탄소중립", 2),
            ("폐기물", 2),
            ("재활용", 2),
            ("수질", 2),
            ("대기오염", 2),
            ("환경", 2),
            ("생태", 1),
        ],
    },
];

/// Override rule: the narrower industry may beat the broader default
pub struct OverrideRule {
    pub narrower: Industry,
    pub broader: Industry,
    /// Distinct matched keywords the narrower industry needs to win
    pub min_keyword_matches: usize,
    /// Any one of these keywords wins alone
    pub decisive: &'static [&'static str],
}

/// Exhaustive override table (narrower-over-broader pairs)
pub static OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        narrower: Industry::Veterinary,
        broader: Industry::BioHealth,
        min_keyword_matches: 2,
        decisive: &["동물의약품", "동물용의약품", "수의"],
    },
    OverrideRule {
        narrower: Industry::Veterinary,
        broader: Industry::Agriculture,
        min_keyword_matches: 2,
        decisive: &["동물의약품", "동물용의약품", "수의", "가축방역"],
    },
    OverrideRule {
        narrower: Industry::Forestry,
        broader: Industry::Agriculture,
        min_keyword_matches: 2,
        decisive: &["산림", "임업"],
    },
    OverrideRule {
        narrower: Industry::MarineFisheries,
        broader: Industry::MarineSecurity,
        min_keyword_matches: 2,
        decisive: &["수산", "어업", "양식"],
    },
];

/// Find the override rule for a narrower/broader pair, if one exists
pub fn override_rule(narrower: Industry, broader: Industry) -> Option<&'static OverrideRule> {
    OVERRIDE_RULES
        .iter()
        .find(|rule| rule.narrower == narrower && rule.broader == broader)
}
