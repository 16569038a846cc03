pub mod session;

pub use session::{NewWorkSession, WorkSession, WorkSessionUpdate};
