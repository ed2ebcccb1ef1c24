use crate::company::Company;
use crate::core::constants::{DEVELOP_DAYS, HIRE_DAYS, INVESTMENT_DAYS, MARKETING_DAYS};

/// Result of a transition: the new company plus a message for the event log.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub company: Company,
    pub message: String,
    /// False when a cash-gated action was refused or an investment pitch
    /// failed. `company` is then unchanged.
    pub success: bool,
}

impl ActionOutcome {
    pub fn succeeded(company: Company, message: impl Into<String>) -> Self {
        Self {
            company,
            message: message.into(),
            success: true,
        }
    }

    pub fn failed(company: &Company, message: impl Into<String>) -> Self {
        Self {
            company: company.clone(),
            message: message.into(),
            success: false,
        }
    }
}

/// Player-triggered actions on the company tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    HireEmployee,
    DevelopProduct,
    LaunchMarketingCampaign,
    SeekInvestment,
}

impl Action {
    pub fn all() -> [Action; 4] {
        [
            Action::HireEmployee,
            Action::DevelopProduct,
            Action::LaunchMarketingCampaign,
            Action::SeekInvestment,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Action::HireEmployee => "Hire Employee",
            Action::DevelopProduct => "Develop Product",
            Action::LaunchMarketingCampaign => "Marketing Campaign",
            Action::SeekInvestment => "Seek Investment",
        }
    }

    /// Calendar days the action takes. Refused hires and campaigns take no
    /// time; a failed investment pitch still does.
    pub fn days(&self, outcome: &ActionOutcome) -> i64 {
        match self {
            Action::HireEmployee if outcome.success => HIRE_DAYS,
            Action::LaunchMarketingCampaign if outcome.success => MARKETING_DAYS,
            Action::HireEmployee | Action::LaunchMarketingCampaign => 0,
            Action::DevelopProduct => DEVELOP_DAYS,
            Action::SeekInvestment => INVESTMENT_DAYS,
        }
    }
}
