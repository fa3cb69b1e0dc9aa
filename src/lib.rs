//! Snake bodies that trail their head along the exact path it traveled.
//!
//! A [`ChainFollower`] keeps a newest-first history of head positions, resamples it at fixed
//! arc-length intervals every fixed step and eases each segment toward its sample with a bounded
//! turn rate. [`ChainFollowerPlugin`] drives followers living on Bevy entities.

pub mod math;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod follower;
pub use follower::*;

mod history;
pub use history::*;

mod plugin;
pub use plugin::*;

mod sampler;
pub use sampler::*;

mod smoother;
pub use smoother::*;
