//! Ministry-based industry lookup
//!
//! Static mapping from administering government ministry names to industry
//! categories. The table is immutable for the process lifetime; changing an
//! entry requires a redeploy, never a runtime mutation.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Industry;

/// Fixed confidence contributed by a ministry match
pub const MINISTRY_CONFIDENCE: f64 = 0.3;

static MINISTRY_INDUSTRY_MAP: LazyLock<HashMap<&'static str, Industry>> = LazyLock::new(|| {
    HashMap::from([
        ("보건복지부", Industry::BioHealth),
        ("식품의약품안전처", Industry::BioHealth),
        ("질병관리청", Industry::BioHealth),
        ("과학기술정보통신부", Industry::Ict),
        ("방송통신위원회", Industry::Ict),
        ("산업통상자원부", Industry::Manufacturing),
        ("중소벤처기업부", Industry::General),
        ("농림축산식품부", Industry::Agriculture),
        ("농촌진흥청", Industry::Agriculture),
        ("산림청", Industry::Forestry),
        ("해양수산부", Industry::MarineFisheries),
        ("해양경찰청", Industry::MarineSecurity),
        ("환경부", Industry::Environment),
        ("기상청", Industry::Environment),
        ("국방부", Industry::Defense),
        ("방위사업청", Industry::Defense),
    ])
});

/// Resolve a ministry name to its default industry
///
/// Returns `None` for blank input or ministries outside the table; the
/// classifier then falls back to keyword evidence alone.
pub fn lookup(ministry: &str) -> Option<Industry> {
    let name = ministry.trim();
    if name.is_empty() {
        return None;
    }
    MINISTRY_INDUSTRY_MAP.get(name).copied()
}
