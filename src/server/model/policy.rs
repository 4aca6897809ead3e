use rust_decimal::Decimal;

/// Parameters for creating a cancellation policy with its threshold rules.
#[derive(Debug, Clone)]
pub struct CreatePolicyParams {
    pub name: String,
    pub processing_fee: Decimal,
    pub waive_processing_fee: bool,
    pub rules: Vec<CreatePolicyRuleParams>,
}

/// One day-threshold tier of a policy being created.
#[derive(Debug, Clone)]
pub struct CreatePolicyRuleParams {
    pub days_before_check_in: i32,
    pub refund_percentage: Decimal,
    pub deduction_amount: Option<Decimal>,
    pub deduction_percentage: Option<Decimal>,
}
