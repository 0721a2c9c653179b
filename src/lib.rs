//! Edit distance with two operations on top of Levenshtein: `Twiddle` swaps
//! two adjacent symbols, and `Kill` discards the remainder of the starting
//! word at a flat cost.
//!
//! ```
//! use edit_distance::prelude::*;
//!
//! let ed = EditDistance::new("HOME", "HOUSE");
//! assert_eq!(ed.distance(), 2);
//! assert_eq!(ed.operations()[0].op, EditOp::Copy);
//! ```

pub mod cli;
pub mod config;
pub mod cost_model;
pub mod cost_only;
pub mod engine;
pub mod generate;
pub mod matrix;
pub mod operation;
pub mod script;
pub mod traceback;


pub mod prelude {
    pub use pa_types::{seq_to_string, Cost, Seq, Sequence};

    pub use crate::cli::{Cli, EngineArgs};
    pub use crate::config::{ConfigError, EngineConfig};
    pub use crate::cost_model::EditCosts;
    pub use crate::cost_only::edit_distance;
    pub use crate::engine::EditDistance;
    pub use crate::generate::{
        generate_pair, setup_sequences, setup_sequences_with_model, setup_sequences_with_seed,
        ErrorModel, GenerateOptions,
    };
    pub use crate::matrix::Matrix;
    pub use crate::operation::{AppliedOp, EditOp};
    pub use crate::script::{replay, verify, EditScript};
}
