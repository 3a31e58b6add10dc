// ABOUTME: Steps of the avatar-selection wizard
// Fixed order and progress percentages live in static tables; navigation is index arithmetic

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Steps in the avatar-selection wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Welcome,
    Church,
    Community,
    Companion,
    Confirmation,
    Complete,
}

/// Every step, in the only order the wizard walks them
const ORDER: [WizardStep; 6] = [
    WizardStep::Welcome,
    WizardStep::Church,
    WizardStep::Community,
    WizardStep::Companion,
    WizardStep::Confirmation,
    WizardStep::Complete,
];

/// Progress percentage for each entry of `ORDER`
const PROGRESS: [u8; 6] = [0, 25, 50, 75, 100, 100];

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &ORDER
    }

    /// Position of this step in the fixed order (0-indexed)
    pub fn index(self) -> usize {
        // Discriminants follow declaration order, which is ORDER
        self as usize
    }

    /// Progress through the wizard as a percentage
    pub fn progress(self) -> u8 {
        PROGRESS[self.index()]
    }

    /// Get the next step, if any
    pub fn next(self) -> Option<Self> {
        ORDER.get(self.index() + 1).copied()
    }

    /// Get the previous step, if any.
    ///
    /// `Complete` has no way back: once the flow is finished the only way to
    /// revisit a step is an explicit jump.
    pub fn previous(self) -> Option<Self> {
        match self {
            Self::Welcome | Self::Complete => None,
            _ => ORDER.get(self.index() - 1).copied(),
        }
    }

    /// Whether this is the absorbing final step
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Get display title for this step
    pub fn title(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Church => "Church",
            Self::Community => "Community",
            Self::Companion => "Companion",
            Self::Confirmation => "Confirm",
            Self::Complete => "Complete",
        }
    }

    /// Get description for this step
    pub fn description(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome to the Narrative Builder",
            Self::Church => "Step 1: Select Church Avatar",
            Self::Community => "Step 2: Select Community Avatar",
            Self::Companion => "Step 3: Select Companion",
            Self::Confirmation => "Confirm your selections",
            Self::Complete => "Your avatars are ready",
        }
    }

    /// Lowercase identifier used on the command line and in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Church => "church",
            Self::Community => "community",
            Self::Companion => "companion",
            Self::Confirmation => "confirmation",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WizardStep {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ORDER
            .iter()
            .copied()
            .find(|step| step.as_str() == wanted)
            .ok_or_else(|| format!("Unknown wizard step '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_navigation() {
        let step = WizardStep::Welcome;
        assert_eq!(step.next(), Some(WizardStep::Church));
        assert_eq!(step.previous(), None);

        let step = WizardStep::Confirmation;
        assert_eq!(step.next(), Some(WizardStep::Complete));
        assert_eq!(step.previous(), Some(WizardStep::Companion));

        let step = WizardStep::Complete;
        assert_eq!(step.next(), None);
        assert_eq!(step.previous(), None);
    }

    #[test]
    fn test_order_matches_discriminants() {
        for (idx, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.index(), idx);
        }
        assert!(WizardStep::Welcome < WizardStep::Church);
        assert!(WizardStep::Confirmation < WizardStep::Complete);
    }

    #[test]
    fn test_progress_table() {
        let expected = [0, 25, 50, 75, 100, 100];
        let actual: Vec<u8> = WizardStep::all().iter().map(|s| s.progress()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for step in WizardStep::all() {
            assert_eq!(step.to_string().parse::<WizardStep>(), Ok(*step));
        }
        assert_eq!(" Church ".parse::<WizardStep>(), Ok(WizardStep::Church));
        assert!("summary".parse::<WizardStep>().is_err());
    }
}
