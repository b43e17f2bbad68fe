//! Years-of-experience estimation

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

/// Earliest start year accepted from a date range
pub const MIN_RANGE_START: i32 = 1990;

// "5 years of experience", "10+ yrs exp"
static YEARS_OF_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s*\+?\s*(?:years?|yrs?)\s*(?:of)?\s*(?:experience|exp)")
        .expect("Invalid experience regex")
});

// "3 years using django", "4+ years in fintech"
static YEARS_WITH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{1,2})\s*\+?\s*(?:years?|yrs?)\s*(?:in|with|using)")
        .expect("Invalid experience regex")
});

// "2019 - 2023", "2019–present", "2019 — current"
static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{4})\s*[-\u{2013}\u{2014}]\s*([0-9]{4}|present|current)")
        .expect("Invalid date range regex")
});

/// Takes the largest plausible figure found by any heuristic.
pub struct ExperienceExtractor {
    current_year: i32,
}

impl ExperienceExtractor {
    pub fn new(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    pub fn extract(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();

        let stated = Self::stated_years(&YEARS_OF_EXPERIENCE, &lowered)
            .chain(Self::stated_years(&YEARS_WITH, &lowered));
        let ranges = self.range_durations(&lowered);

        let years = stated.chain(ranges).max().unwrap_or(0);
        debug!("Estimated {} years of experience", years);
        years
    }

    fn stated_years<'a>(pattern: &'a Regex, text: &'a str) -> impl Iterator<Item = u32> + 'a {
        pattern
            .captures_iter(text)
            .filter_map(|cap| cap.get(1))
            .filter_map(|m| m.as_str().parse::<u32>().ok())
    }

    /// Durations of every accepted date range in the text.
    pub fn range_durations(&self, text: &str) -> Vec<u32> {
        DATE_RANGE
            .captures_iter(text)
            .filter_map(|cap| {
                let start = cap.get(1)?.as_str().parse::<i32>().ok()?;
                let end = match cap.get(2)?.as_str() {
                    "present" | "current" => self.current_year,
                    year => year.parse::<i32>().ok()?,
                };
                self.range_duration(start, end)
            })
            .collect()
    }

    fn range_duration(&self, start: i32, end: i32) -> Option<u32> {
        if start >= MIN_RANGE_START && start <= end && end <= self.current_year {
            u32::try_from(end - start).ok()
        } else {
            None
        }
    }
}
