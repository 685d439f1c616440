pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod target;
#[cfg(feature = "rt")]
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{CountdownSection, DisplaySection, SavaConfig, MAX_REFRESH_SECS};
pub use countdown::{compute_remaining, CountdownState, RemainingDuration};
pub use error::{Result, SavaError};
pub use target::{TargetInstant, TargetZone, DELIVERY_MILESTONE};
#[cfg(feature = "rt")]
pub use ticker::{CountdownTicker, DEFAULT_REFRESH};
