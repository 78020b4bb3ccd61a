#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum FirewallStatus {
    Active,
    Inactive,
    #[default]
    Unknown,
}

impl FirewallStatus {
    /// Reads the `Status:` line printed by `ufw status`.
    pub fn parse(output: &str) -> FirewallStatus {
        if output.contains("Status: active") {
            FirewallStatus::Active
        } else if output.contains("Status: inactive") {
            FirewallStatus::Inactive
        } else {
            FirewallStatus::Unknown
        }
    }

    pub fn is_active(&self) -> bool {
        *self == FirewallStatus::Active
    }
}
