//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    AddChoiceUseCase, ConnectClientUseCase, DisconnectClientUseCase, EnterSessionUseCase,
    GetRoomDetailUseCase, GetRoomsUseCase, RelayFilterUseCase, ShufflePlaylistUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_client_usecase: Arc<ConnectClientUseCase>,
    pub disconnect_client_usecase: Arc<DisconnectClientUseCase>,
    pub enter_session_usecase: Arc<EnterSessionUseCase>,
    pub add_choice_usecase: Arc<AddChoiceUseCase>,
    pub relay_filter_usecase: Arc<RelayFilterUseCase>,
    pub shuffle_playlist_usecase: Arc<ShufflePlaylistUseCase>,
    pub get_rooms_usecase: Arc<GetRoomsUseCase>,
    pub get_room_detail_usecase: Arc<GetRoomDetailUseCase>,
}
