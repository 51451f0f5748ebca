//! Domain layer
//!
//! Pure business logic: the shuffle engine, the session registry and the
//! interfaces (traits) the outer layers implement.

pub mod entity;
pub mod error;
pub mod event;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod shuffle;
pub mod value_object;

pub use entity::{RoomSnapshot, SessionUser};
pub use error::{MessagePushError, ValueObjectError};
pub use event::{FilterChange, SessionEvent};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::SessionRegistry;
pub use repository::SessionRepository;
pub use shuffle::{Show, shuffle_episodes, shuffle_episodes_with_rng};
pub use value_object::{ConnectionId, RoomName, Timestamp, TitleId, UserName};
