//! Derived statistical quantities for statlab.
//!
//! The hypothesis-testing and study-design tools consume these on every
//! parameter change: z-scores, tail p-values from a test statistic, and the
//! required-sample-size / achieved-power pair. Everything reduces to the
//! distribution functions in `sl-prob`.

pub mod power;
pub mod pvalue;
pub mod score;

pub use power::{achieved_power, required_sample_size};
pub use pvalue::{Tail, p_value};
pub use score::z_score;
