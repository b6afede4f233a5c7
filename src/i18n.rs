use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const YES: &str = "general.yes";
    pub const NO: &str = "general.no";
    pub const CONFIG_WRITTEN: &str = "general.config_written";

    pub const BESS_HEADING: &str = "bess.heading";
    pub const BESS_FUEL_SAVED: &str = "bess.fuel_saved";
    pub const BESS_ENERGY_SAVED: &str = "bess.energy_saved";
    pub const BESS_CO2_SAVED: &str = "bess.co2_saved";
    pub const BESS_EFFICIENCY_RATIO: &str = "bess.efficiency_ratio";

    pub const CII_HEADING: &str = "cii.heading";
    pub const CII_ATTAINED: &str = "cii.attained";
    pub const CII_RATING: &str = "cii.rating";
    pub const CII_ATTAINED_WITH_BESS: &str = "cii.attained_with_bess";
    pub const CII_RATING_WITH_BESS: &str = "cii.rating_with_bess";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const ROI_ANNUAL_SAVINGS: &str = "roi.annual_savings";
    pub const ROI_PAYBACK: &str = "roi.payback";
    pub const ROI_YEARS: &str = "roi.years";
    pub const ROI_NEVER_RECOVERS: &str = "roi.never_recovers";
    pub const ROI_SERIES_HEADING: &str = "roi.series_heading";

    pub const EEXI_HEADING: &str = "eexi.heading";
    pub const EEXI_ATTAINED: &str = "eexi.attained";
    pub const EEXI_COMPLIANT: &str = "eexi.compliant";

    pub const SAVINGS_HEADING: &str = "savings.heading";
    pub const SAVINGS_DAILY: &str = "savings.daily";
    pub const SAVINGS_ANNUAL: &str = "savings.annual";
    pub const SAVINGS_COST: &str = "savings.cost";

    pub const CHART_PAYBACK_TITLE: &str = "chart.payback.title";
    pub const CHART_PAYBACK_X: &str = "chart.payback.x_label";
    pub const CHART_PAYBACK_Y: &str = "chart.payback.y_label";
    pub const CHART_PAYBACK_CUMULATIVE: &str = "chart.payback.cumulative";
    pub const CHART_PAYBACK_CAPEX: &str = "chart.payback.capex";
    pub const CHART_PAYBACK_MARKER: &str = "chart.payback.marker";

    pub const CHART_FUEL_TITLE: &str = "chart.fuel.title";
    pub const CHART_FUEL_Y: &str = "chart.fuel.y_label";
    pub const CHART_FUEL_ORIGINAL: &str = "chart.fuel.original";
    pub const CHART_FUEL_SAVED: &str = "chart.fuel.saved";
    pub const CHART_FUEL_CO2: &str = "chart.fuel.co2";

    pub const CHART_EEXI_TITLE: &str = "chart.eexi.title";
    pub const CHART_EEXI_Y: &str = "chart.eexi.y_label";
    pub const CHART_EEXI_ATTAINED: &str = "chart.eexi.attained";
    pub const CHART_EEXI_REFERENCE: &str = "chart.eexi.reference";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir.and_then(|dir| load_overrides(dir, lang_code));
        if let Some(dir) = pack_dir {
            log::debug!(
                "language pack {dir} for {lang_code}: loaded={}",
                overrides.is_some()
            );
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 언어팩 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어 문자열로 폴백한다.
    pub fn t(&self, key: &str) -> &str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }

    /// 예/아니오 표기.
    pub fn yes_no(&self, value: bool) -> &str {
        self.t(if value { keys::YES } else { keys::NO })
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| normalize_locale_string(&value))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능한) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        YES => "예",
        NO => "아니오",
        CONFIG_WRITTEN => "설정 파일을 저장했습니다:",
        BESS_HEADING => "배터리 효율",
        BESS_FUEL_SAVED => "연료 절감량",
        BESS_ENERGY_SAVED => "절감 에너지",
        BESS_CO2_SAVED => "CO₂ 절감량",
        BESS_EFFICIENCY_RATIO => "효율비",
        CII_HEADING => "탄소집약도지수 (CII)",
        CII_ATTAINED => "달성 CII",
        CII_RATING => "예상 등급",
        CII_ATTAINED_WITH_BESS => "BESS 적용 후 CII",
        CII_RATING_WITH_BESS => "BESS 적용 후 등급",
        ROI_HEADING => "투자수익 (ROI)",
        ROI_ANNUAL_SAVINGS => "연간 순절감액 (OPEX 차감)",
        ROI_PAYBACK => "회수기간",
        ROI_YEARS => "년",
        ROI_NEVER_RECOVERS => "회수기간이 무한대입니다 — 절감액으로 CAPEX 를 회수할 수 없습니다.",
        ROI_SERIES_HEADING => "기간별 회수 진행",
        EEXI_HEADING => "현존선 에너지효율지수 (EEXI)",
        EEXI_ATTAINED => "달성 EEXI",
        EEXI_COMPLIANT => "IMO 기준 충족",
        SAVINGS_HEADING => "절감률 기반 연료·비용 절감 추정",
        SAVINGS_DAILY => "일일 연료 절감량",
        SAVINGS_ANNUAL => "연간 연료 절감량",
        SAVINGS_COST => "연간 비용 절감액",
        CHART_PAYBACK_TITLE => "기간별 투자 회수",
        CHART_PAYBACK_X => "년",
        CHART_PAYBACK_Y => "USD",
        CHART_PAYBACK_CUMULATIVE => "누적 절감액",
        CHART_PAYBACK_CAPEX => "CAPEX",
        CHART_PAYBACK_MARKER => "회수",
        CHART_FUEL_TITLE => "연료 및 CO₂ 절감",
        CHART_FUEL_Y => "일일 톤수",
        CHART_FUEL_ORIGINAL => "기존 연료 사용량 (t/d)",
        CHART_FUEL_SAVED => "연료 절감량 (t/d)",
        CHART_FUEL_CO2 => "CO₂ 절감량 (t/d)",
        CHART_EEXI_TITLE => "EEXI 달성값 vs IMO 기준",
        CHART_EEXI_Y => "gCO₂/ton·nm",
        CHART_EEXI_ATTAINED => "달성 EEXI",
        CHART_EEXI_REFERENCE => "IMO 기준",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        YES => "Yes",
        NO => "No",
        CONFIG_WRITTEN => "Configuration written to:",
        BESS_HEADING => "Battery Efficiency",
        BESS_FUEL_SAVED => "Fuel Saved",
        BESS_ENERGY_SAVED => "Energy Saved",
        BESS_CO2_SAVED => "CO₂ Saved",
        BESS_EFFICIENCY_RATIO => "Efficiency Ratio",
        CII_HEADING => "Carbon Intensity Indicator (CII)",
        CII_ATTAINED => "Attained CII",
        CII_RATING => "Estimated Rating",
        CII_ATTAINED_WITH_BESS => "Attained CII with BESS",
        CII_RATING_WITH_BESS => "Estimated Rating with BESS",
        ROI_HEADING => "Return on Investment (ROI)",
        ROI_ANNUAL_SAVINGS => "Annual Net Savings (after OPEX)",
        ROI_PAYBACK => "Payback Period",
        ROI_YEARS => "years",
        ROI_NEVER_RECOVERS => "Payback period is infinite — savings never recover CAPEX.",
        ROI_SERIES_HEADING => "Payback Progress Over Time",
        EEXI_HEADING => "Energy Efficiency Existing Ship Index (EEXI)",
        EEXI_ATTAINED => "Attained EEXI",
        EEXI_COMPLIANT => "IMO Compliant",
        SAVINGS_HEADING => "Percent-Based Fuel & Cost Savings Estimate",
        SAVINGS_DAILY => "Daily Fuel Savings",
        SAVINGS_ANNUAL => "Annual Fuel Savings",
        SAVINGS_COST => "Estimated Annual Cost Savings",
        CHART_PAYBACK_TITLE => "Payback Over Time",
        CHART_PAYBACK_X => "Years",
        CHART_PAYBACK_Y => "USD",
        CHART_PAYBACK_CUMULATIVE => "Cumulative Savings",
        CHART_PAYBACK_CAPEX => "CAPEX",
        CHART_PAYBACK_MARKER => "Payback",
        CHART_FUEL_TITLE => "Fuel & CO₂ Savings",
        CHART_FUEL_Y => "Tonnes per Day",
        CHART_FUEL_ORIGINAL => "Original Fuel Use (t/d)",
        CHART_FUEL_SAVED => "Fuel Saved (t/d)",
        CHART_FUEL_CO2 => "CO₂ Saved (t/d)",
        CHART_EEXI_TITLE => "EEXI Attainment vs IMO Standard",
        CHART_EEXI_Y => "gCO₂/ton·nm",
        CHART_EEXI_ATTAINED => "Attained EEXI",
        CHART_EEXI_REFERENCE => "IMO Reference",
        _ => "[missing translation]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lang_accepts_region_variants() {
        assert_eq!(normalize_lang("ko-KR").as_deref(), Some("ko"));
        assert_eq!(normalize_lang(" EN_us ").as_deref(), Some("en"));
        assert_eq!(normalize_lang("auto"), None);
        assert_eq!(normalize_lang("fr"), None);
    }

    #[test]
    fn locale_string_strips_encoding() {
        assert_eq!(normalize_locale_string("ko_KR.UTF-8").as_deref(), Some("ko"));
        assert_eq!(normalize_locale_string("C.UTF-8"), None);
    }

    #[test]
    fn nested_pack_keys_are_flattened() {
        let map = parse_toml_to_map("[bess]\nheading = \"Batterie\"\n").expect("pack");
        assert_eq!(map.get("bess.heading").map(String::as_str), Some("Batterie"));
    }
}
