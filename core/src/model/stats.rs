use serde::{Deserialize, Serialize};

/// Aggregate day counts for one report window.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub total_days: u32,
    pub working_days: u32,
    pub off_days: u32,
    /// Holidays falling on a worked weekday.
    pub relevant_holidays: u32,
    pub total_holidays: u32,
    pub vacations_on_working_day: u32,
    pub vacations_on_holiday: u32,
    pub total_vacations: u32,
}

impl ReportStats {
    /// Counter names and values, in report order.
    pub fn entries(&self) -> [(&'static str, u32); 8] {
        [
            ("total_days", self.total_days),
            ("working_days", self.working_days),
            ("off_days", self.off_days),
            ("relevant_holidays", self.relevant_holidays),
            ("total_holidays", self.total_holidays),
            ("vacations_on_working_day", self.vacations_on_working_day),
            ("vacations_on_holiday", self.vacations_on_holiday),
            ("total_vacations", self.total_vacations),
        ]
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    pub fn weeks(&self) -> f64 {
        self.total_days as f64 / 7.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_and_lookup() {
        let stats = ReportStats {
            total_days: 14,
            working_days: 10,
            off_days: 4,
            ..Default::default()
        };
        assert_eq!(stats.entries()[0], ("total_days", 14));
        assert_eq!(stats.get("off_days"), Some(4));
        assert_eq!(stats.get("vacations_on_holiday"), Some(0));
        assert_eq!(stats.get("bogus"), None);
        assert_eq!(stats.weeks(), 2.0);
    }
}
