//! Date and range availability against a rule table.

use std::fmt;

use serde::Serialize;
use stayquote_calendar::{StayDate, nights};
use stayquote_rules::RuleTable;
use tracing::debug;

/// Why a candidate range cannot be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum RangeRejection {
    /// Check-out is not after check-in.
    Empty,
    /// Package tables only: no rule covers the check-in night.
    StartUncovered,
    /// Package tables only: `night` belongs to a different rule than the
    /// check-in night.
    CrossesRules {
        /// First night outside the check-in rule.
        night: StayDate,
    },
    /// `night` is in the past, blacked out or (package tables) uncovered.
    Unavailable {
        /// First unavailable night.
        night: StayDate,
    },
}

impl fmt::Display for RangeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeRejection::Empty => f.write_str("check-out must be after check-in"),
            RangeRejection::StartUncovered => f.write_str("no pricing period covers check-in"),
            RangeRejection::CrossesRules { night } => {
                write!(f, "night of {night} belongs to another pricing period")
            }
            RangeRejection::Unavailable { night } => write!(f, "night of {night} is unavailable"),
        }
    }
}

/// Answers availability questions for one rule table as of one day.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a RuleTable,
    today: StayDate,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver treating every day before `today` as past.
    pub fn new(table: &'a RuleTable, today: StayDate) -> Self {
        Self { table, today }
    }

    /// Returns the rule table.
    pub fn table(&self) -> &'a RuleTable {
        self.table
    }

    /// Returns the first bookable day.
    pub fn today(&self) -> StayDate {
        self.today
    }

    /// Whether a single day could be picked: today or later, not blacked
    /// out, and for package tables covered by a rule.
    pub fn is_date_available(&self, date: StayDate) -> bool {
        if date < self.today || self.table.is_blackout(date) {
            return false;
        }
        match self.table {
            RuleTable::Simple(_) => true,
            RuleTable::Package(_) => self.table.find_rule_index(date).is_some(),
        }
    }

    /// Whether every night in `[start, end)` can be booked together.
    pub fn is_range_bookable(&self, start: StayDate, end: StayDate) -> bool {
        self.check_range(start, end).is_ok()
    }

    /// Checks every night in `[start, end)`, reporting the first failure.
    ///
    /// Package tables additionally require every night to fall under the
    /// rule covering `start`: a stay never straddles two pricing periods.
    /// A failing range is rejected whole, never clipped.
    pub fn check_range(&self, start: StayDate, end: StayDate) -> Result<(), RangeRejection> {
        let result = self.scan_range(start, end);
        if let Err(reason) = &result {
            debug!(%start, %end, %reason, "range rejected");
        }
        result
    }

    fn scan_range(&self, start: StayDate, end: StayDate) -> Result<(), RangeRejection> {
        if end <= start {
            return Err(RangeRejection::Empty);
        }
        match self.table {
            RuleTable::Simple(_) => {
                for night in nights(start, end) {
                    if !self.is_date_available(night) {
                        return Err(RangeRejection::Unavailable { night });
                    }
                }
            }
            RuleTable::Package(_) => {
                let rule = self
                    .table
                    .find_rule_index(start)
                    .ok_or(RangeRejection::StartUncovered)?;
                for night in nights(start, end) {
                    if self.table.find_rule_index(night) != Some(rule) {
                        return Err(RangeRejection::CrossesRules { night });
                    }
                    if !self.is_date_available(night) {
                        return Err(RangeRejection::Unavailable { night });
                    }
                }
            }
        }
        Ok(())
    }
}
