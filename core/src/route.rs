#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageView {
    #[default]
    Full,
    Profile,
    Counter,
}

impl PageView {
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("full") || value.eq_ignore_ascii_case("all") {
            Some(PageView::Full)
        } else if value.eq_ignore_ascii_case("profile") {
            Some(PageView::Profile)
        } else if value.eq_ignore_ascii_case("counter") || value.eq_ignore_ascii_case("stats") {
            Some(PageView::Counter)
        } else {
            None
        }
    }

    pub fn shows_profile(self) -> bool {
        matches!(self, PageView::Full | PageView::Profile)
    }

    pub fn shows_counter(self) -> bool {
        matches!(self, PageView::Full | PageView::Counter)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectsMode {
    #[default]
    On,
    Off,
}

impl EffectsMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "on" | "1" | "true" => Some(EffectsMode::On),
            "off" | "0" | "false" => Some(EffectsMode::Off),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InitConfig {
    pub view: PageView,
    pub effects: EffectsMode,
}

impl InitConfig {
    /// Builds the config from `location.hash` and `location.search`. Keys in
    /// the hash take precedence; unknown values fall back to the defaults.
    pub fn from_location(hash: &str, search: &str) -> Self {
        let hash_pairs = split_pairs(hash.trim().trim_start_matches('#'), ';');
        let query_pairs = split_pairs(search.trim().trim_start_matches('?'), '&');
        let lookup = |key: &str| {
            find_value(&hash_pairs, key).or_else(|| find_value(&query_pairs, key))
        };
        let view = lookup("view")
            .and_then(PageView::parse)
            .unwrap_or_default();
        let effects = lookup("effects")
            .and_then(EffectsMode::parse)
            .unwrap_or_default();
        Self { view, effects }
    }
}

fn split_pairs(raw: &str, separator: char) -> Vec<(&str, &str)> {
    raw.split(separator)
        .filter_map(|chunk| {
            let chunk = chunk.trim();
            if chunk.is_empty() {
                return None;
            }
            let mut iter = chunk.splitn(2, '=');
            let key = iter.next().unwrap_or("").trim();
            let value = iter.next().unwrap_or("").trim();
            if key.is_empty() {
                None
            } else {
                Some((key, value))
            }
        })
        .collect()
}

fn find_value<'a>(pairs: &[(&str, &'a str)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
        .map(|(_, value)| *value)
}
