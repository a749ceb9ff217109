//! Generic resource table controller
//!
//! One `ResourceTableState` per open table screen. The UI forwards user
//! actions to the state transitions and hands any returned `ApiCall` to
//! `dispatch`, which keeps going until no follow-up is requested.

mod dispatch;
mod state;

pub use dispatch::{dispatch, drive, ResourceApi, TableCell};
pub use state::{Alert, AlertKind, ApiCall, FormMode, InFlight, LoadState, ResourceTableState};
