// Data files
pub const SCENARIOS_FILE: &str = "scenarios.json";
pub const EVENTS_FILE: &str = "events.json";
pub const CONFIG_FILE: &str = "game-config.json";

// Tick and timing
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
pub const INPUT_POLL_MS: u64 = 50;

// Calendar days each action takes
pub const HIRE_DAYS: i64 = 7;
pub const DEVELOP_DAYS: i64 = 14;
pub const MARKETING_DAYS: i64 = 30;
pub const INVESTMENT_DAYS: i64 = 21;

// Percentages
pub const PERCENT_MAX: f64 = 100.0;
pub const DEFAULT_ALLOCATION_PERCENT: f64 = 25.0;
pub const DEFAULT_RD_INVESTMENT_PERCENT: f64 = 20.0;
pub const DEFAULT_MARKETING_BUDGET_PERCENT: f64 = 30.0;
pub const DEFAULT_EMPLOYEE_BENEFITS_PERCENT: f64 = 25.0;
pub const SLIDER_STEP_PERCENT: f64 = 5.0;
pub const INITIAL_CUSTOMER_SATISFACTION: f64 = 70.0;

// Product development: points = engineering share * employees * 5
pub const DEVELOPMENT_POINTS_PER_EMPLOYEE: f64 = 5.0;
pub const FEATURES_SHARE: f64 = 0.5;
pub const USER_EXPERIENCE_SHARE: f64 = 0.3;
pub const PERFORMANCE_SHARE: f64 = 0.2;

// Marketing
pub const MARKETING_EFFECTIVENESS_STEP: f64 = 10.0;
pub const MARKETING_REVENUE_BASE: f64 = 50_000.0;

// Investment: 30% success, amount in [1M, 6M)
pub const INVESTMENT_SUCCESS_THRESHOLD: f64 = 0.7;
pub const INVESTMENT_MIN: u64 = 1_000_000;
pub const INVESTMENT_SPREAD: u64 = 5_000_000;

// Monthly customer satisfaction: support share * 2 - 1
pub const SATISFACTION_SUPPORT_WEIGHT: f64 = 2.0;
pub const SATISFACTION_MONTHLY_DECAY: f64 = 1.0;

// Custom scenarios
pub const CUSTOM_SCENARIO_ID_PREFIX: &str = "custom-";
pub const CUSTOM_DEFAULT_CASH: f64 = 1_000_000.0;
pub const CUSTOM_DEFAULT_EMPLOYEES: u32 = 1;
pub const CUSTOM_DEFAULT_TREND: f64 = 1.5;
pub const MIN_INDUSTRY_TREND: f64 = 1.0;
pub const MAX_INDUSTRY_TREND: f64 = 2.0;
