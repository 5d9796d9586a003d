//! Pure predicate data: operators, conditions, and condition sets.
//!
//! Conditions are plain values, deliberately decoupled from any editing
//! surface. Editing is modeled as discrete commands (`with_condition`,
//! `without_condition`, `with_updated`) that produce a new `FilterSet`.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::ColumnType;

/// Comparison operator for a filter condition.
///
/// The first six apply to numeric columns, the rest to textual columns.
/// [`FilterOperator::for_type`] returns the valid set for a column type; the
/// UI layer uses it to populate operator choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
}

impl FilterOperator {
    /// The operators valid for a column of the given type.
    pub fn for_type(column_type: ColumnType) -> &'static [FilterOperator] {
        use FilterOperator::*;
        match column_type {
            ColumnType::Numeric => &[Eq, Ne, Gt, Gte, Lt, Lte],
            ColumnType::Textual => &[
                Contains, NotContains, Equals, NotEquals, StartsWith, EndsWith, IsEmpty,
                IsNotEmpty,
            ],
        }
    }

    /// Whether this operator compares against a condition value.
    pub fn needs_value(&self) -> bool {
        !matches!(self, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)
    }

    /// Display label for operator pickers.
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Ne => "\u{2260}",
            FilterOperator::Gt => ">",
            FilterOperator::Gte => "\u{2265}",
            FilterOperator::Lt => "<",
            FilterOperator::Lte => "\u{2264}",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "does not contain",
            FilterOperator::Equals => "equals",
            FilterOperator::NotEquals => "does not equal",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::IsEmpty => "is empty",
            FilterOperator::IsNotEmpty => "is not empty",
        }
    }
}

/// A single row predicate: column, operator, comparison value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Zero-based column index the predicate reads.
    pub column: usize,
    /// Comparison operator.
    pub operator: FilterOperator,
    /// Comparison value; empty (and ignored) for operators that need none.
    pub value: String,
}

impl FilterCondition {
    /// Create a condition. The value is cleared when the operator needs none.
    pub fn new(column: usize, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            column,
            operator,
            value: value.into(),
        }
        .normalized()
    }

    fn normalized(mut self) -> Self {
        if !self.operator.needs_value() {
            self.value.clear();
        }
        self
    }
}

/// How conditions in a set combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterLogic {
    /// Every condition must hold.
    #[default]
    And,
    /// At least one condition must hold.
    Or,
}

/// Identifier for a condition within a [`FilterSet`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ConditionId(u64);

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "condition_{}", self.0)
    }
}

/// An ordered collection of conditions plus combination logic.
///
/// Ids are assigned from a monotonic counter and never reused, so removing a
/// condition cannot silently retarget a stale reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    logic: FilterLogic,
    #[serde(with = "indexmap::map::serde_seq")]
    conditions: IndexMap<ConditionId, FilterCondition>,
    next_id: u64,
}

impl FilterSet {
    /// Create an empty set with the given logic.
    pub fn new(logic: FilterLogic) -> Self {
        Self {
            logic,
            conditions: IndexMap::new(),
            next_id: 0,
        }
    }

    /// The combination logic.
    pub fn logic(&self) -> FilterLogic {
        self.logic
    }

    /// Number of conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Whether the set has no conditions.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Conditions in insertion order.
    pub fn conditions(&self) -> impl Iterator<Item = &FilterCondition> {
        self.conditions.values()
    }

    /// Ids and conditions in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (ConditionId, &FilterCondition)> {
        self.conditions.iter().map(|(id, condition)| (*id, condition))
    }

    /// Look up a condition by id.
    pub fn get(&self, id: ConditionId) -> Option<&FilterCondition> {
        self.conditions.get(&id)
    }

    /// Id of the most recently added condition.
    pub fn last_id(&self) -> Option<ConditionId> {
        self.conditions.keys().last().copied()
    }

    /// Replace the combination logic.
    pub fn with_logic(mut self, logic: FilterLogic) -> Self {
        self.logic = logic;
        self
    }

    /// Append a condition, assigning it the next id.
    pub fn with_condition(mut self, condition: FilterCondition) -> Self {
        let id = ConditionId(self.next_id);
        self.next_id += 1;
        self.conditions.insert(id, condition.normalized());
        self
    }

    /// Remove a condition by id, preserving the order of the rest.
    pub fn without_condition(mut self, id: ConditionId) -> Self {
        self.conditions.shift_remove(&id);
        self
    }

    /// Replace the condition stored under `id`. Unknown ids are ignored.
    pub fn with_updated(mut self, id: ConditionId, condition: FilterCondition) -> Self {
        if let Some(slot) = self.conditions.get_mut(&id) {
            *slot = condition.normalized();
        }
        self
    }
}
