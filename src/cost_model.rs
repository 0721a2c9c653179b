//! This module contains the `EditCosts` cost model.
//!
use pa_types::Cost;
use serde::{Deserialize, Serialize};

use crate::{config::ConfigError, operation::EditOp};

pub const COPY_COST: Cost = 0;
pub const REPLACE_COST: Cost = 1;
pub const TWIDDLE_COST: Cost = 100;
pub const DELETE_COST: Cost = 1;
pub const INSERT_COST: Cost = 1;
pub const KILL_COST: Cost = 100;

/// The cost of each [`EditOp`].
///
/// All costs are non-negative. This is checked on construction, so an
/// `EditCosts` value is always valid.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawCosts", into = "RawCosts")]
pub struct EditCosts {
    copy: Cost,
    replace: Cost,
    twiddle: Cost,
    delete: Cost,
    insert: Cost,
    kill: Cost,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            copy: COPY_COST,
            replace: REPLACE_COST,
            twiddle: TWIDDLE_COST,
            delete: DELETE_COST,
            insert: INSERT_COST,
            kill: KILL_COST,
        }
    }
}

impl EditCosts {
    pub fn new(
        copy: Cost,
        replace: Cost,
        twiddle: Cost,
        delete: Cost,
        insert: Cost,
        kill: Cost,
    ) -> Result<Self, ConfigError> {
        Self::default()
            .with(EditOp::Copy, copy)?
            .with(EditOp::Replace, replace)?
            .with(EditOp::Twiddle, twiddle)?
            .with(EditOp::Delete, delete)?
            .with(EditOp::Insert, insert)?
            .with(EditOp::Kill, kill)
    }

    /// Every operation except copy costs 1.
    pub fn new_unit() -> Self {
        Self {
            copy: 0,
            replace: 1,
            twiddle: 1,
            delete: 1,
            insert: 1,
            kill: 1,
        }
    }

    /// Returns a copy with the cost of `op` replaced.
    pub fn with(mut self, op: EditOp, cost: Cost) -> Result<Self, ConfigError> {
        if cost < 0 {
            return Err(ConfigError::NegativeCost { op, cost });
        }
        *self.cost_mut(op) = cost;
        Ok(self)
    }

    pub fn cost(&self, op: EditOp) -> Cost {
        match op {
            EditOp::Copy => self.copy,
            EditOp::Replace => self.replace,
            EditOp::Twiddle => self.twiddle,
            EditOp::Delete => self.delete,
            EditOp::Insert => self.insert,
            EditOp::Kill => self.kill,
        }
    }

    fn cost_mut(&mut self, op: EditOp) -> &mut Cost {
        match op {
            EditOp::Copy => &mut self.copy,
            EditOp::Replace => &mut self.replace,
            EditOp::Twiddle => &mut self.twiddle,
            EditOp::Delete => &mut self.delete,
            EditOp::Insert => &mut self.insert,
            EditOp::Kill => &mut self.kill,
        }
    }
}

/// Unchecked mirror of `EditCosts` used for (de)serialization.
/// Missing fields take their default value.
#[derive(Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawCosts {
    copy: Cost,
    replace: Cost,
    twiddle: Cost,
    delete: Cost,
    insert: Cost,
    kill: Cost,
}

impl Default for RawCosts {
    fn default() -> Self {
        EditCosts::default().into()
    }
}

impl From<EditCosts> for RawCosts {
    fn from(c: EditCosts) -> Self {
        RawCosts {
            copy: c.copy,
            replace: c.replace,
            twiddle: c.twiddle,
            delete: c.delete,
            insert: c.insert,
            kill: c.kill,
        }
    }
}

impl TryFrom<RawCosts> for EditCosts {
    type Error = ConfigError;

    fn try_from(c: RawCosts) -> Result<Self, Self::Error> {
        EditCosts::new(c.copy, c.replace, c.twiddle, c.delete, c.insert, c.kill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cm = EditCosts::default();
        assert_eq!(cm.cost(EditOp::Copy), 0);
        assert_eq!(cm.cost(EditOp::Replace), 1);
        assert_eq!(cm.cost(EditOp::Twiddle), 100);
        assert_eq!(cm.cost(EditOp::Delete), 1);
        assert_eq!(cm.cost(EditOp::Insert), 1);
        assert_eq!(cm.cost(EditOp::Kill), 100);
    }

    #[test]
    fn override_one_cost() {
        let cm = EditCosts::default().with(EditOp::Twiddle, 1).unwrap();
        assert_eq!(cm.cost(EditOp::Twiddle), 1);
        assert_eq!(cm.cost(EditOp::Kill), 100);
    }

    #[test]
    fn negative_cost_is_rejected() {
        let err = EditCosts::default().with(EditOp::Delete, -1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NegativeCost {
                op: EditOp::Delete,
                cost: -1
            }
        ));
        assert!(EditCosts::new(0, 1, 1, 1, -3, 1).is_err());
    }

    #[test]
    fn json_fills_missing_fields() {
        let cm: EditCosts = serde_json::from_str(r#"{ "kill": 3 }"#).unwrap();
        assert_eq!(cm, EditCosts::default().with(EditOp::Kill, 3).unwrap());
        assert!(serde_json::from_str::<EditCosts>(r#"{ "insert": -2 }"#).is_err());
        assert!(serde_json::from_str::<EditCosts>(r#"{ "swap": 2 }"#).is_err());
    }
}
