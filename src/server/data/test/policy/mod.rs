use super::*;

use crate::server::model::policy::{CreatePolicyParams, CreatePolicyRuleParams};

/// Tests creating a policy with rules and loading it normalized for the
/// refund calculator.
///
/// Expected: rules ordered by descending threshold
#[tokio::test]
async fn creates_and_normalizes_policy() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_policy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CancellationPolicyRepository::new(db);
    let (created, rules) = repo
        .create(CreatePolicyParams {
            name: "flexible".to_string(),
            processing_fee: dec("100"),
            waive_processing_fee: false,
            rules: vec![
                CreatePolicyRuleParams {
                    days_before_check_in: 0,
                    refund_percentage: dec("0"),
                    deduction_amount: None,
                    deduction_percentage: None,
                },
                CreatePolicyRuleParams {
                    days_before_check_in: 30,
                    refund_percentage: dec("100"),
                    deduction_amount: None,
                    deduction_percentage: None,
                },
                CreatePolicyRuleParams {
                    days_before_check_in: 7,
                    refund_percentage: dec("50"),
                    deduction_amount: Some(dec("500")),
                    deduction_percentage: None,
                },
            ],
        })
        .await?;
    assert_eq!(rules.len(), 3);

    let policy = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(policy.name, "flexible");
    assert_eq!(policy.processing_fee, dec("100"));
    let thresholds: Vec<i64> = policy.rules.iter().map(|r| r.days_before_check_in).collect();
    assert_eq!(thresholds, vec![30, 7, 0]);
    assert_eq!(policy.rules[1].deduction_amount, Some(dec("500")));

    Ok(())
}

/// Tests that a missing policy reads as None; the caller turns that into a
/// not-found error rather than defaulting.
///
/// Expected: Ok(None)
#[tokio::test]
async fn missing_policy_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_policy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CancellationPolicyRepository::new(db);

    assert!(repo.get_by_id(404).await?.is_none());

    Ok(())
}
