//! Cancellation policy factory.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a policy with the given `(days_before_check_in, refund_percentage)`
/// tiers and a flat processing fee.
pub async fn create_policy(
    db: &DatabaseConnection,
    tiers: &[(i32, Decimal)],
    processing_fee: Decimal,
) -> Result<entity::cancellation_policy::Model, DbErr> {
    let policy = entity::cancellation_policy::ActiveModel {
        name: ActiveValue::Set(format!("Policy {}", next_id())),
        processing_fee: ActiveValue::Set(processing_fee),
        waive_processing_fee: ActiveValue::Set(false),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    for (days_before_check_in, refund_percentage) in tiers {
        entity::cancellation_policy_rule::ActiveModel {
            policy_id: ActiveValue::Set(policy.id),
            days_before_check_in: ActiveValue::Set(*days_before_check_in),
            refund_percentage: ActiveValue::Set(*refund_percentage),
            deduction_amount: ActiveValue::Set(None),
            deduction_percentage: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(policy)
}
