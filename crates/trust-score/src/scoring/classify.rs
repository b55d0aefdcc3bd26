use serde::{Deserialize, Serialize};

/// Sensitivity tier of information a provider may be trusted to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataClass {
    Restricted,
    Confidential,
    Internal,
    Declassified,
}

impl DataClass {
    pub fn label(self) -> &'static str {
        match self {
            DataClass::Restricted => "restricted",
            DataClass::Confidential => "confidential",
            DataClass::Internal => "internal",
            DataClass::Declassified => "declassified",
        }
    }
}

/// Eligibility band derived from a final trust score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationBand {
    Super,
    Excellent,
    Good,
    NotConsiderable,
}

impl ClassificationBand {
    pub fn label(self) -> &'static str {
        match self {
            ClassificationBand::Super => "Super",
            ClassificationBand::Excellent => "Excellent",
            ClassificationBand::Good => "Good",
            ClassificationBand::NotConsiderable => "Not considerable",
        }
    }

    pub fn eligible_data_classes(self) -> &'static [DataClass] {
        match self {
            ClassificationBand::Super => &[
                DataClass::Restricted,
                DataClass::Confidential,
                DataClass::Internal,
                DataClass::Declassified,
            ],
            ClassificationBand::Excellent => &[
                DataClass::Confidential,
                DataClass::Internal,
                DataClass::Declassified,
            ],
            ClassificationBand::Good => &[DataClass::Internal, DataClass::Declassified],
            ClassificationBand::NotConsiderable => &[DataClass::Declassified],
        }
    }

    pub fn allows(self, class: DataClass) -> bool {
        self.eligible_data_classes().contains(&class)
    }

    pub fn verdict(self) -> &'static str {
        match self {
            ClassificationBand::Super => "Cloud security score is super! Good for storing restricted, confidential, internal and declassified information.",
            ClassificationBand::Excellent => "Cloud security score is excellent! Good for storing confidential, internal and declassified information.",
            ClassificationBand::Good => "Cloud security score is good. Good for storing internal and declassified information.",
            ClassificationBand::NotConsiderable => "Cloud security score is not considerable. Cloud service is good for only declassified information.",
        }
    }
}

/// Map a trust score to its band. Thresholds are exclusive lower bounds.
pub fn classify(score: f64) -> ClassificationBand {
    if score > 9.0 {
        ClassificationBand::Super
    } else if score > 8.0 {
        ClassificationBand::Excellent
    } else if score > 7.0 {
        ClassificationBand::Good
    } else {
        ClassificationBand::NotConsiderable
    }
}
