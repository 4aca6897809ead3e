use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    model::policy::CreatePolicyParams,
    pricing::refund::{CancellationPolicy, PolicyRule},
};

pub struct CancellationPolicyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CancellationPolicyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a policy and its threshold rules.
    ///
    /// # Returns
    /// - `Ok((Model, Vec<Model>))`: The created policy and its rules
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        params: CreatePolicyParams,
    ) -> Result<
        (
            entity::cancellation_policy::Model,
            Vec<entity::cancellation_policy_rule::Model>,
        ),
        DbErr,
    > {
        let policy = entity::cancellation_policy::ActiveModel {
            name: ActiveValue::Set(params.name),
            processing_fee: ActiveValue::Set(params.processing_fee),
            waive_processing_fee: ActiveValue::Set(params.waive_processing_fee),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut rules = Vec::with_capacity(params.rules.len());
        for rule in params.rules {
            let created = entity::cancellation_policy_rule::ActiveModel {
                policy_id: ActiveValue::Set(policy.id),
                days_before_check_in: ActiveValue::Set(rule.days_before_check_in),
                refund_percentage: ActiveValue::Set(rule.refund_percentage),
                deduction_amount: ActiveValue::Set(rule.deduction_amount),
                deduction_percentage: ActiveValue::Set(rule.deduction_percentage),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            rules.push(created);
        }

        Ok((policy, rules))
    }

    /// Loads a policy normalized for the refund calculator, rules ordered by
    /// descending threshold.
    ///
    /// # Returns
    /// - `Ok(Some(CancellationPolicy))`: The policy with its rules
    /// - `Ok(None)`: Policy not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<CancellationPolicy>, DbErr> {
        let Some(policy) = entity::prelude::CancellationPolicy::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let rules = entity::prelude::CancellationPolicyRule::find()
            .filter(entity::cancellation_policy_rule::Column::PolicyId.eq(id))
            .order_by_desc(entity::cancellation_policy_rule::Column::DaysBeforeCheckIn)
            .all(self.db)
            .await?
            .into_iter()
            .map(|rule| PolicyRule {
                days_before_check_in: i64::from(rule.days_before_check_in),
                refund_percentage: rule.refund_percentage,
                deduction_amount: rule.deduction_amount,
                deduction_percentage: rule.deduction_percentage,
            })
            .collect();

        Ok(Some(CancellationPolicy {
            id: policy.id,
            name: policy.name,
            rules,
            processing_fee: policy.processing_fee,
            waive_processing_fee: policy.waive_processing_fee,
        }))
    }

    /// Lists all policies with their rules.
    pub async fn list(
        &self,
    ) -> Result<
        Vec<(
            entity::cancellation_policy::Model,
            Vec<entity::cancellation_policy_rule::Model>,
        )>,
        DbErr,
    > {
        let policies = entity::prelude::CancellationPolicy::find()
            .order_by_asc(entity::cancellation_policy::Column::Id)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(policies.len());
        for policy in policies {
            let rules = entity::prelude::CancellationPolicyRule::find()
                .filter(entity::cancellation_policy_rule::Column::PolicyId.eq(policy.id))
                .order_by_desc(entity::cancellation_policy_rule::Column::DaysBeforeCheckIn)
                .all(self.db)
                .await?;
            result.push((policy, rules));
        }
        Ok(result)
    }
}
