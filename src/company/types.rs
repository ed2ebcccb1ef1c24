use crate::core::constants::{
    DEFAULT_ALLOCATION_PERCENT, DEFAULT_EMPLOYEE_BENEFITS_PERCENT, DEFAULT_MARKETING_BUDGET_PERCENT,
    DEFAULT_RD_INVESTMENT_PERCENT, INITIAL_CUSTOMER_SATISFACTION, PERCENT_MAX,
};
use crate::data::{GameConfig, Scenario};
use serde::{Deserialize, Serialize};

/// Clamps a value into the 0-100 percentage range.
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, PERCENT_MAX)
}

/// Returns the largest value `edited` may take so that it plus `others`
/// stays within 100.
fn rebalance(requested: f64, others: f64) -> f64 {
    let requested = clamp_percent(requested);
    let room = (PERCENT_MAX - others).max(0.0);
    requested.min(room)
}

/// Team effort areas that receive a share of the allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationArea {
    Engineering,
    Marketing,
    Sales,
    Support,
}

impl AllocationArea {
    pub fn all() -> [AllocationArea; 4] {
        [
            AllocationArea::Engineering,
            AllocationArea::Marketing,
            AllocationArea::Sales,
            AllocationArea::Support,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            AllocationArea::Engineering => "Engineering",
            AllocationArea::Marketing => "Marketing",
            AllocationArea::Sales => "Sales",
            AllocationArea::Support => "Support",
        }
    }
}

/// Percentage split of team effort. The four areas should sum to at most 100;
/// [`Allocation::set`] keeps that true for edits made through it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub engineering: f64,
    pub marketing: f64,
    pub sales: f64,
    pub support: f64,
}

impl Default for Allocation {
    fn default() -> Self {
        Self {
            engineering: DEFAULT_ALLOCATION_PERCENT,
            marketing: DEFAULT_ALLOCATION_PERCENT,
            sales: DEFAULT_ALLOCATION_PERCENT,
            support: DEFAULT_ALLOCATION_PERCENT,
        }
    }
}

impl Allocation {
    pub fn get(&self, area: AllocationArea) -> f64 {
        match area {
            AllocationArea::Engineering => self.engineering,
            AllocationArea::Marketing => self.marketing,
            AllocationArea::Sales => self.sales,
            AllocationArea::Support => self.support,
        }
    }

    fn slot(&mut self, area: AllocationArea) -> &mut f64 {
        match area {
            AllocationArea::Engineering => &mut self.engineering,
            AllocationArea::Marketing => &mut self.marketing,
            AllocationArea::Sales => &mut self.sales,
            AllocationArea::Support => &mut self.support,
        }
    }

    pub fn total(&self) -> f64 {
        AllocationArea::all().iter().map(|a| self.get(*a)).sum()
    }

    /// Sets one area. If the total would exceed 100, the edited area is
    /// reduced by the excess.
    pub fn set(&mut self, area: AllocationArea, value: f64) {
        let others = self.total() - self.get(area);
        *self.slot(area) = rebalance(value, others);
    }

    /// Adjusts one area by `delta`, with the same rebalancing as [`Allocation::set`].
    pub fn adjust(&mut self, area: AllocationArea, delta: f64) {
        self.set(area, self.get(area) + delta);
    }
}

/// Financial levers shown on the finance tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinancialLever {
    RdInvestment,
    MarketingBudget,
    EmployeeBenefits,
}

impl FinancialLever {
    pub fn all() -> [FinancialLever; 3] {
        [
            FinancialLever::RdInvestment,
            FinancialLever::MarketingBudget,
            FinancialLever::EmployeeBenefits,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            FinancialLever::RdInvestment => "R&D Investment",
            FinancialLever::MarketingBudget => "Marketing Budget",
            FinancialLever::EmployeeBenefits => "Employee Benefits",
        }
    }
}

/// Financial decisions collected by the finance tab.
///
/// No transition reads these yet; they are kept on the session so the
/// player's choices survive tab switches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Financials {
    pub rd_investment: f64,
    pub marketing_budget: f64,
    pub employee_benefits: f64,
}

impl Default for Financials {
    fn default() -> Self {
        Self {
            rd_investment: DEFAULT_RD_INVESTMENT_PERCENT,
            marketing_budget: DEFAULT_MARKETING_BUDGET_PERCENT,
            employee_benefits: DEFAULT_EMPLOYEE_BENEFITS_PERCENT,
        }
    }
}

impl Financials {
    pub fn get(&self, lever: FinancialLever) -> f64 {
        match lever {
            FinancialLever::RdInvestment => self.rd_investment,
            FinancialLever::MarketingBudget => self.marketing_budget,
            FinancialLever::EmployeeBenefits => self.employee_benefits,
        }
    }

    pub fn total(&self) -> f64 {
        FinancialLever::all().iter().map(|l| self.get(*l)).sum()
    }

    pub fn set(&mut self, lever: FinancialLever, value: f64) {
        let others = self.total() - self.get(lever);
        let value = rebalance(value, others);
        match lever {
            FinancialLever::RdInvestment => self.rd_investment = value,
            FinancialLever::MarketingBudget => self.marketing_budget = value,
            FinancialLever::EmployeeBenefits => self.employee_benefits = value,
        }
    }

    pub fn adjust(&mut self, lever: FinancialLever, delta: f64) {
        self.set(lever, self.get(lever) + delta);
    }
}

/// A player's simulated business at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub cash: f64,
    pub revenue: f64,
    pub burn_rate: f64,
    pub employees: u32,
    /// 0-100
    pub product_progress: f64,
    /// 0-100
    pub features: f64,
    /// 0-100
    pub user_experience: f64,
    /// 0-100
    pub performance: f64,
    /// Grows by a fixed step per campaign, no ceiling
    pub marketing_effectiveness: f64,
    /// 0-100
    pub customer_satisfaction: f64,
    pub product_name: String,
    pub industry_trend: f64,
    pub allocation: Allocation,
}

impl Company {
    /// Initial company for a scenario. Burn rate starts at one salary per
    /// founding employee.
    pub fn from_scenario(scenario: &Scenario, config: &GameConfig) -> Self {
        Self {
            cash: scenario.initial_cash,
            revenue: 0.0,
            burn_rate: scenario.initial_employees as f64 * config.burn_rate_per_employee,
            employees: scenario.initial_employees,
            product_progress: 0.0,
            features: 0.0,
            user_experience: 0.0,
            performance: 0.0,
            marketing_effectiveness: 0.0,
            customer_satisfaction: INITIAL_CUSTOMER_SATISFACTION,
            product_name: scenario.product_name.clone(),
            industry_trend: scenario.industry_trend,
            allocation: Allocation::default(),
        }
    }

    /// Net monthly cash flow (revenue minus burn).
    pub fn net_cash_flow(&self) -> f64 {
        self.revenue - self.burn_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario {
            id: "test".to_string(),
            name: "Test Co".to_string(),
            description: "A test".to_string(),
            initial_cash: 250_000.0,
            initial_employees: 4,
            product_name: "Widget".to_string(),
            industry_trend: 1.3,
        }
    }

    #[test]
    fn test_from_scenario_initial_values() {
        let config = GameConfig::default();
        let company = Company::from_scenario(&scenario(), &config);

        assert_eq!(company.cash, 250_000.0);
        assert_eq!(company.revenue, 0.0);
        assert_eq!(company.employees, 4);
        assert_eq!(company.burn_rate, 4.0 * config.burn_rate_per_employee);
        assert_eq!(company.customer_satisfaction, 70.0);
        assert_eq!(company.product_name, "Widget");
        assert_eq!(company.industry_trend, 1.3);
        assert_eq!(company.allocation, Allocation::default());
        assert_eq!(company.allocation.total(), 100.0);
    }

    #[test]
    fn test_allocation_set_reduces_edited_area_on_overflow() {
        let mut allocation = Allocation::default();
        allocation.set(AllocationArea::Engineering, 60.0);

        // Others hold 75, so engineering can only take 25
        assert_eq!(allocation.engineering, 25.0);
        assert_eq!(allocation.total(), 100.0);
    }

    #[test]
    fn test_allocation_set_within_budget() {
        let mut allocation = Allocation::default();
        allocation.set(AllocationArea::Sales, 5.0);
        allocation.set(AllocationArea::Support, 70.0);

        assert_eq!(allocation.sales, 5.0);
        assert_eq!(allocation.support, 45.0);
        assert!(allocation.total() <= 100.0);
    }

    #[test]
    fn test_allocation_set_clamps_range() {
        let mut allocation = Allocation {
            engineering: 0.0,
            marketing: 0.0,
            sales: 0.0,
            support: 0.0,
        };
        allocation.set(AllocationArea::Marketing, 150.0);
        assert_eq!(allocation.marketing, 100.0);
        allocation.set(AllocationArea::Marketing, -20.0);
        assert_eq!(allocation.marketing, 0.0);
    }

    #[test]
    fn test_allocation_adjust() {
        let mut allocation = Allocation::default();
        allocation.adjust(AllocationArea::Support, -5.0);
        allocation.adjust(AllocationArea::Engineering, 10.0);

        assert_eq!(allocation.support, 20.0);
        assert_eq!(allocation.engineering, 30.0);
    }

    #[test]
    fn test_financials_rebalance() {
        let mut financials = Financials::default();
        assert_eq!(financials.total(), 75.0);

        financials.set(FinancialLever::EmployeeBenefits, 80.0);
        assert_eq!(financials.employee_benefits, 50.0);
        assert_eq!(financials.total(), 100.0);
    }

    #[test]
    fn test_company_serializes_camel_case() {
        let company = Company::from_scenario(&scenario(), &GameConfig::default());
        let json = serde_json::to_value(&company).unwrap();
        assert!(json.get("burnRate").is_some());
        assert!(json.get("customerSatisfaction").is_some());
        assert_eq!(json["allocation"]["engineering"], 25.0);
    }
}
