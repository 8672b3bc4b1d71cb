use crate::search::KeywordReport;

/// Summary of a search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub messages: usize,
    pub keywords: usize,
    pub matches: usize,
    pub exact: usize,
    pub fuzzy: usize,
}

impl SearchStats {
    /// Tallies a report produced from `messages` messages.
    pub fn from_report(messages: usize, report: &[KeywordReport]) -> Self {
        let mut stats = Self {
            messages,
            keywords: report.len(),
            ..Self::default()
        };
        for m in report.iter().flat_map(|entry| &entry.matches) {
            stats.matches += 1;
            if m.is_exact() {
                stats.exact += 1;
            } else {
                stats.fuzzy += 1;
            }
        }
        stats
    }

    /// Share of matches that are exact, in percent.
    pub fn exact_ratio(&self) -> f64 {
        if self.matches == 0 {
            return 0.0;
        }
        self.exact as f64 / self.matches as f64 * 100.0
    }
}
