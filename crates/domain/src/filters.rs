// crates/domain/src/filters.rs
//! Search filters of the video library page and their query-string form.
//!
//! Parsing is lenient: a malformed parameter never rejects the whole query,
//! it falls back to that parameter's default and the rest still applies.

pub mod query;
pub mod sort_key;

pub use sort_key::SortKey;

use chrono::TimeDelta;
use log::debug;
use vidshelf_shared_kernel::{CodecError, CodecResult, Either};

use crate::codec::Decoder;
use crate::config::SliderConfig;
use crate::range::{DurationRange, SizeRange, duration, size};

/// The facts about a downloaded video the filters look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMeta {
    pub site: String,
    /// Size in MiB.
    pub size: u64,
    pub duration: TimeDelta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFilters {
    pub term: Option<String>,
    pub sort: SortKey,
    pub sites: Vec<String>,
    pub size: SizeRange,
    pub duration: DurationRange,
}

impl Default for VideoFilters {
    fn default() -> Self {
        Self {
            term: None,
            sort: SortKey::default(),
            sites: Vec::new(),
            size: size::any(),
            duration: duration::any(),
        }
    }
}

impl VideoFilters {
    /// Renders `q`, `sort`, one `site` per entry, then `size` and `duration`.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::with_capacity(self.sites.len() + 4);
        if let Some(term) = &self.term {
            params.push(format!("q={}", query::encode_component(term)));
        }
        params.push(format!("sort={}", self.sort));
        params.extend(
            self.sites
                .iter()
                .map(|site| format!("site={}", query::encode_component(site))),
        );
        params.push(format!("size={}", size::encode(&self.size)));
        params.push(format!("duration={}", duration::encode(&self.duration)));
        params.join("&")
    }

    /// Never fails; see the module docs for the fallback rules.
    pub fn from_query_string(input: &str) -> Self {
        let mut filters = Self::default();
        for (key, value) in query::pairs(input) {
            match key {
                "q" => match query::decode_component(value) {
                    Some(term) => filters.term = Some(term).filter(|term| !term.trim().is_empty()),
                    None => debug!("ignoring unreadable search term '{value}'"),
                },
                "sort" => {
                    filters.sort = value.parse().unwrap_or_else(|err| {
                        debug!("falling back to default sort: {err}");
                        SortKey::default()
                    });
                }
                "site" => match query::decode_component(value) {
                    Some(site) if !site.is_empty() => filters.sites.push(site),
                    _ => debug!("ignoring unreadable site filter '{value}'"),
                },
                "size" => {
                    let decoded = size::decoder().decode_either(value);
                    filters.size = or_fallback("size", decoded, size::any);
                }
                "duration" => {
                    let decoded = duration::decoder().decode_either(value);
                    filters.duration = or_fallback("duration", decoded, duration::any);
                }
                other => debug!("ignoring unknown query parameter '{other}'"),
            }
        }
        filters
    }

    /// Slider positions for both ranges, open ends drawn at the configured maxima.
    pub fn slider_values(&self, config: &SliderConfig) -> ([u64; 2], [f64; 2]) {
        (
            size::to_slider(&self.size, config.size_maximum),
            duration::to_slider(&self.duration, config.duration_maximum()),
        )
    }

    /// Replaces both ranges from slider positions.
    ///
    /// # Errors
    /// Returns an error if a duration position is below zero or not a finite
    /// number; the filters are left untouched in that case.
    pub fn apply_sliders(
        &mut self,
        size_values: [u64; 2],
        duration_values: [f64; 2],
        config: &SliderConfig,
    ) -> CodecResult<()> {
        let size = size::from_slider(size_values, config.size_maximum)?;
        let duration = duration::from_slider(duration_values, config.duration_maximum())?;
        self.size = size;
        self.duration = duration;
        Ok(())
    }

    pub fn matches(&self, video: &VideoMeta) -> bool {
        self.size.contains(&video.size)
            && self.duration.contains(&video.duration)
            && (self.sites.is_empty() || self.sites.iter().any(|site| site == &video.site))
    }
}

fn or_fallback<A>(param: &str, decoded: Either<CodecError, A>, fallback: fn() -> A) -> A {
    decoded.fold(
        |err| {
            debug!("falling back to default {param} range: {err}");
            fallback()
        },
        |value| value,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VideoFilters {
        VideoFilters {
            term: Some("cats & dogs".to_string()),
            sort: SortKey::Longest,
            sites: vec!["vimeo".to_string(), "archive.org".to_string()],
            size: SizeRange::bounded(10, 700),
            duration: DurationRange::unbounded(TimeDelta::minutes(5)),
        }
    }

    #[test]
    fn query_string_layout() {
        assert_eq!(
            sample().to_query_string(),
            "q=cats%20%26%20dogs&sort=longest&site=vimeo&site=archive.org&size=10-700&duration=5-"
        );
        assert_eq!(VideoFilters::default().to_query_string(), "sort=newest&size=0-&duration=0-");
    }

    #[test]
    fn query_string_round_trip() {
        let filters = sample();
        assert_eq!(VideoFilters::from_query_string(&filters.to_query_string()), filters);
    }

    #[test]
    fn malformed_ranges_fall_back_to_defaults() {
        let filters = VideoFilters::from_query_string("?size=abc-10&duration=5-30&sort=sideways");
        assert_eq!(filters.size, size::any());
        assert_eq!(
            filters.duration,
            DurationRange::bounded(TimeDelta::minutes(5), TimeDelta::minutes(30))
        );
        assert_eq!(filters.sort, SortKey::Newest);
    }

    #[test]
    fn unknown_and_blank_params_are_ignored() {
        let filters = VideoFilters::from_query_string("page=3&q=+&site=");
        assert_eq!(filters, VideoFilters::default());
    }

    #[test]
    fn undecodable_search_term_is_dropped() {
        let filters = VideoFilters::from_query_string("q=%FF&sort=shortest");
        assert_eq!(filters.term, None);
        assert_eq!(filters.sort, SortKey::Shortest);
    }

    #[test]
    fn sliders_round_trip_through_config() {
        let config = SliderConfig::default();
        let mut filters = sample();
        let (size_values, duration_values) = filters.slider_values(&config);
        assert_eq!(size_values, [10, 700]);
        assert_eq!(duration_values, [5.0, 120.0]);

        filters.apply_sliders([0, 4096], [0.0, 30.0], &config).unwrap();
        assert_eq!(filters.size, SizeRange::unbounded(0));
        assert_eq!(
            filters.duration,
            DurationRange::bounded(TimeDelta::zero(), TimeDelta::minutes(30))
        );

        assert!(filters.apply_sliders([1, 2], [f64::NAN, 3.0], &config).is_err());
        assert_eq!(filters.size, SizeRange::unbounded(0));
    }

    #[test]
    fn negative_duration_sliders_keep_the_query_readable() {
        let config = SliderConfig::default();
        let mut filters = VideoFilters::default();
        let result = filters.apply_sliders([0, 10], [-5.0, 30.0], &config);
        assert!(matches!(result, Err(CodecError::Negative { .. })));
        assert_eq!(filters, VideoFilters::default());

        filters.apply_sliders([0, 10], [5.0, 30.0], &config).unwrap();
        let query = filters.to_query_string();
        assert_eq!(query, "sort=newest&size=0-10&duration=5-30");
        assert_eq!(VideoFilters::from_query_string(&query), filters);
    }

    #[test]
    fn matches_ranges_and_sites() {
        let filters = sample();
        let video = VideoMeta {
            site: "vimeo".to_string(),
            size: 300,
            duration: TimeDelta::minutes(12),
        };
        assert!(filters.matches(&video));
        assert!(!filters.matches(&VideoMeta {
            size: 900,
            ..video.clone()
        }));
        assert!(!filters.matches(&VideoMeta {
            duration: TimeDelta::minutes(2),
            ..video.clone()
        }));
        assert!(!filters.matches(&VideoMeta {
            site: "other".to_string(),
            ..video
        }));
    }
}
