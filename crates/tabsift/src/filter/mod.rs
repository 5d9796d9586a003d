//! Row filtering: predicate data model and evaluation engine.

mod condition;
mod engine;

pub use condition::{ConditionId, FilterCondition, FilterLogic, FilterOperator, FilterSet};
pub use engine::{FilterEngine, RowLimit, apply_filter, apply_limit, evaluate};
