use super::domain::MetricDefinition;

const MANDATORY_MERIT: f64 = 25.0;
const OPTIONAL_MERIT: f64 = 24.0;

const MANDATORY_METRICS: [&str; 6] = [
    "SSL/TLS",
    "Encryption",
    "Access_Control",
    "Input_Sanitization",
    "Digital_Signatures",
    "Password_Hashing",
];

const OPTIONAL_METRICS: [&str; 19] = [
    "Weak_Passwords",
    "Unsuccessful_Logons",
    "Unauthorized_User_Access_Presentation",
    "Information_Modification_Presentation",
    "Multihead_Approval_For_Information_Modification",
    "Consistency_Metric_Score",
    "No_Of_Policy_Violations",
    "No_Of_Wrong_Roles_Assignment",
    "No_Of_Delayed_Software_Updates",
    "No_Of_Delayed_Backups",
    "Network_Failover",
    "High_Availability",
    "No_Of_Incidents_Blocked",
    "No_Of_Viruses_Blocked",
    "No_Of_Patches_Applied",
    "No_Of_Spam_Blocked",
    "No_Of_Virus_Infections",
    "No_Of_Port_Probes",
    "Traffic_Analysis_Score",
];

pub(crate) fn standard_definitions() -> Vec<MetricDefinition> {
    MANDATORY_METRICS
        .iter()
        .map(|name| MetricDefinition::mandatory(*name, MANDATORY_MERIT))
        .chain(
            OPTIONAL_METRICS
                .iter()
                .map(|name| MetricDefinition::optional(*name, OPTIONAL_MERIT)),
        )
        .collect()
}
