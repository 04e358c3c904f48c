pub mod info_message;
pub mod running;
pub mod sports_walking;
pub mod swimming;
pub mod training;

pub use info_message::InfoMessage;
pub use running::Running;
pub use sports_walking::SportsWalking;
pub use swimming::Swimming;
pub use training::{Session, Training};
