use crate::core::constants::{
    CUSTOM_DEFAULT_CASH, CUSTOM_DEFAULT_EMPLOYEES, CUSTOM_DEFAULT_TREND, CUSTOM_SCENARIO_ID_PREFIX,
    MAX_INDUSTRY_TREND, MIN_INDUSTRY_TREND,
};
use serde::{Deserialize, Serialize};

/// Immutable starting-condition template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub initial_cash: f64,
    pub initial_employees: u32,
    pub product_name: String,
    pub industry_trend: f64,
}

/// Raw text entered in the custom scenario form.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomScenarioDraft {
    pub name: String,
    pub description: String,
    pub initial_cash: String,
    pub initial_employees: String,
    pub product_name: String,
    pub industry_trend: String,
}

impl Default for CustomScenarioDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            initial_cash: format!("{}", CUSTOM_DEFAULT_CASH),
            initial_employees: format!("{}", CUSTOM_DEFAULT_EMPLOYEES),
            product_name: String::new(),
            industry_trend: format!("{:.1}", CUSTOM_DEFAULT_TREND),
        }
    }
}

fn required(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} is required", label));
    }
    Ok(trimmed.to_string())
}

impl CustomScenarioDraft {
    /// Parses and validates the draft into a scenario with id
    /// `custom-{created_at_millis}`.
    pub fn build(&self, created_at_millis: i64) -> Result<Scenario, String> {
        let name = required(&self.name, "Startup name")?;
        let description = required(&self.description, "Description")?;
        let product_name = required(&self.product_name, "Product name")?;

        let initial_cash: f64 = self
            .initial_cash
            .trim()
            .parse()
            .map_err(|_| "Initial cash must be a number".to_string())?;
        if !initial_cash.is_finite() {
            return Err("Initial cash must be a number".to_string());
        }
        if initial_cash < 0.0 {
            return Err("Initial cash cannot be negative".to_string());
        }

        let initial_employees: u32 = self
            .initial_employees
            .trim()
            .parse()
            .map_err(|_| "Initial employees must be a whole number".to_string())?;
        if initial_employees < 1 {
            return Err("At least one employee is required".to_string());
        }

        let industry_trend: f64 = self
            .industry_trend
            .trim()
            .parse()
            .map_err(|_| "Industry trend must be a number".to_string())?;
        if !(MIN_INDUSTRY_TREND..=MAX_INDUSTRY_TREND).contains(&industry_trend) {
            return Err(format!(
                "Industry trend must be between {:.1} and {:.1}",
                MIN_INDUSTRY_TREND, MAX_INDUSTRY_TREND
            ));
        }

        Ok(Scenario {
            id: format!("{}{}", CUSTOM_SCENARIO_ID_PREFIX, created_at_millis),
            name,
            description,
            initial_cash,
            initial_employees,
            product_name,
            industry_trend,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> CustomScenarioDraft {
        CustomScenarioDraft {
            name: "Garage Labs".to_string(),
            description: "Two founders and a dream".to_string(),
            product_name: "Gizmo".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let draft = CustomScenarioDraft::default();
        assert_eq!(draft.initial_cash, "1000000");
        assert_eq!(draft.initial_employees, "1");
        assert_eq!(draft.industry_trend, "1.5");
    }

    #[test]
    fn test_build_valid_draft() {
        let scenario = filled_draft().build(1_700_000_000_000).unwrap();
        assert_eq!(scenario.id, "custom-1700000000000");
        assert_eq!(scenario.name, "Garage Labs");
        assert_eq!(scenario.initial_cash, 1_000_000.0);
        assert_eq!(scenario.initial_employees, 1);
        assert_eq!(scenario.industry_trend, 1.5);
    }

    #[test]
    fn test_build_trims_text() {
        let mut draft = filled_draft();
        draft.product_name = "  Gizmo  ".to_string();
        assert_eq!(draft.build(0).unwrap().product_name, "Gizmo");
    }

    #[test]
    fn test_build_requires_text_fields() {
        let mut draft = filled_draft();
        draft.description = "   ".to_string();
        assert_eq!(draft.build(0).unwrap_err(), "Description is required");
    }

    #[test]
    fn test_build_rejects_negative_cash() {
        let mut draft = filled_draft();
        draft.initial_cash = "-1".to_string();
        assert_eq!(
            draft.build(0).unwrap_err(),
            "Initial cash cannot be negative"
        );
    }

    #[test]
    fn test_build_rejects_non_finite_cash() {
        for value in ["inf", "-inf", "NaN"] {
            let mut draft = filled_draft();
            draft.initial_cash = value.to_string();
            assert_eq!(
                draft.build(0).unwrap_err(),
                "Initial cash must be a number",
                "input {value}"
            );
        }
    }

    #[test]
    fn test_build_rejects_zero_employees() {
        let mut draft = filled_draft();
        draft.initial_employees = "0".to_string();
        assert!(draft.build(0).is_err());
        draft.initial_employees = "two".to_string();
        assert!(draft.build(0).is_err());
    }

    #[test]
    fn test_build_rejects_trend_out_of_range() {
        let mut draft = filled_draft();
        draft.industry_trend = "2.5".to_string();
        assert!(draft.build(0).is_err());
        draft.industry_trend = "0.9".to_string();
        assert!(draft.build(0).is_err());
        draft.industry_trend = "2.0".to_string();
        assert!(draft.build(0).is_ok());
    }

    #[test]
    fn test_parse_scenario_json() {
        let json = r#"{
            "id": "saas",
            "name": "SaaS Startup",
            "description": "Subscriptions",
            "initialCash": 1000000,
            "initialEmployees": 3,
            "productName": "CloudDesk",
            "industryTrend": 1.2
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.initial_employees, 3);
        assert_eq!(scenario.product_name, "CloudDesk");
    }
}
