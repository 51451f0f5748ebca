//! UseCase 層
//!
//! 1 つの操作につき 1 つの構造体。Repository と MessagePusher は trait 経由で受け取ります。

mod add_choice;
mod broadcast;
mod connect_client;
mod disconnect_client;
mod enter_session;
pub mod error;
mod get_room_detail;
mod get_rooms;
mod relay_filter;
mod shuffle_playlist;

pub use add_choice::AddChoiceUseCase;
pub use connect_client::ConnectClientUseCase;
pub use disconnect_client::DisconnectClientUseCase;
pub use enter_session::EnterSessionUseCase;
pub use error::{AddChoiceError, BroadcastError, GetRoomDetailError};
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use relay_filter::RelayFilterUseCase;
pub use shuffle_playlist::ShufflePlaylistUseCase;
