//! Typed handles for the numeric fields of [`Company`].
//!
//! Random events name the fields they touch by their camelCase key. Those
//! keys resolve through this table to a getter/setter pair, so unknown or
//! non-numeric keys (`productName`, `allocation`) simply fail to resolve.

use super::types::{clamp_percent, Company};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Cash,
    Revenue,
    BurnRate,
    Employees,
    ProductProgress,
    Features,
    UserExperience,
    Performance,
    MarketingEffectiveness,
    CustomerSatisfaction,
    IndustryTrend,
}

impl CompanyField {
    pub fn all() -> [CompanyField; 11] {
        [
            CompanyField::Cash,
            CompanyField::Revenue,
            CompanyField::BurnRate,
            CompanyField::Employees,
            CompanyField::ProductProgress,
            CompanyField::Features,
            CompanyField::UserExperience,
            CompanyField::Performance,
            CompanyField::MarketingEffectiveness,
            CompanyField::CustomerSatisfaction,
            CompanyField::IndustryTrend,
        ]
    }

    /// Key used in data files.
    pub fn key(&self) -> &'static str {
        match self {
            CompanyField::Cash => "cash",
            CompanyField::Revenue => "revenue",
            CompanyField::BurnRate => "burnRate",
            CompanyField::Employees => "employees",
            CompanyField::ProductProgress => "productProgress",
            CompanyField::Features => "features",
            CompanyField::UserExperience => "userExperience",
            CompanyField::Performance => "performance",
            CompanyField::MarketingEffectiveness => "marketingEffectiveness",
            CompanyField::CustomerSatisfaction => "customerSatisfaction",
            CompanyField::IndustryTrend => "industryTrend",
        }
    }

    pub fn from_key(key: &str) -> Option<CompanyField> {
        Self::all().into_iter().find(|f| f.key() == key)
    }

    /// True for fields that must stay within 0-100.
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            CompanyField::ProductProgress
                | CompanyField::Features
                | CompanyField::UserExperience
                | CompanyField::Performance
                | CompanyField::CustomerSatisfaction
        )
    }

    pub fn get(&self, company: &Company) -> f64 {
        match self {
            CompanyField::Cash => company.cash,
            CompanyField::Revenue => company.revenue,
            CompanyField::BurnRate => company.burn_rate,
            CompanyField::Employees => company.employees as f64,
            CompanyField::ProductProgress => company.product_progress,
            CompanyField::Features => company.features,
            CompanyField::UserExperience => company.user_experience,
            CompanyField::Performance => company.performance,
            CompanyField::MarketingEffectiveness => company.marketing_effectiveness,
            CompanyField::CustomerSatisfaction => company.customer_satisfaction,
            CompanyField::IndustryTrend => company.industry_trend,
        }
    }

    /// Writes `value`, clamping percentage fields and rounding the
    /// employee count to a non-negative integer.
    pub fn set(&self, company: &mut Company, value: f64) {
        let value = if self.is_percentage() {
            clamp_percent(value)
        } else {
            value
        };
        match self {
            CompanyField::Cash => company.cash = value,
            CompanyField::Revenue => company.revenue = value,
            CompanyField::BurnRate => company.burn_rate = value,
            CompanyField::Employees => company.employees = value.round().max(0.0) as u32,
            CompanyField::ProductProgress => company.product_progress = value,
            CompanyField::Features => company.features = value,
            CompanyField::UserExperience => company.user_experience = value,
            CompanyField::Performance => company.performance = value,
            CompanyField::MarketingEffectiveness => company.marketing_effectiveness = value,
            CompanyField::CustomerSatisfaction => company.customer_satisfaction = value,
            CompanyField::IndustryTrend => company.industry_trend = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::Allocation;

    fn company() -> Company {
        Company {
            cash: 1000.0,
            revenue: 200.0,
            burn_rate: 50.0,
            employees: 3,
            product_progress: 40.0,
            features: 20.0,
            user_experience: 10.0,
            performance: 5.0,
            marketing_effectiveness: 30.0,
            customer_satisfaction: 70.0,
            product_name: "Widget".to_string(),
            industry_trend: 1.5,
            allocation: Allocation::default(),
        }
    }

    #[test]
    fn test_key_round_trip_for_every_field() {
        for field in CompanyField::all() {
            assert_eq!(CompanyField::from_key(field.key()), Some(field));
        }
    }

    #[test]
    fn test_non_numeric_keys_do_not_resolve() {
        assert_eq!(CompanyField::from_key("productName"), None);
        assert_eq!(CompanyField::from_key("allocation"), None);
        assert_eq!(CompanyField::from_key("morale"), None);
        assert_eq!(CompanyField::from_key("Cash"), None);
    }

    #[test]
    fn test_set_clamps_percentage_fields() {
        let mut c = company();
        CompanyField::CustomerSatisfaction.set(&mut c, 130.0);
        assert_eq!(c.customer_satisfaction, 100.0);
        CompanyField::Performance.set(&mut c, -12.0);
        assert_eq!(c.performance, 0.0);
    }

    #[test]
    fn test_set_does_not_clamp_money() {
        let mut c = company();
        CompanyField::Cash.set(&mut c, -5000.0);
        assert_eq!(c.cash, -5000.0);
        CompanyField::MarketingEffectiveness.set(&mut c, 250.0);
        assert_eq!(c.marketing_effectiveness, 250.0);
    }

    #[test]
    fn test_employees_rounded_and_floored() {
        let mut c = company();
        CompanyField::Employees.set(&mut c, 4.6);
        assert_eq!(c.employees, 5);
        CompanyField::Employees.set(&mut c, -2.0);
        assert_eq!(c.employees, 0);
    }

    #[test]
    fn test_get_reads_each_field() {
        let c = company();
        assert_eq!(CompanyField::Employees.get(&c), 3.0);
        assert_eq!(CompanyField::IndustryTrend.get(&c), 1.5);
        assert_eq!(CompanyField::BurnRate.get(&c), 50.0);
    }
}
