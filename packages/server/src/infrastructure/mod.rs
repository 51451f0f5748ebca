//! Infrastructure 層
//!
//! ドメイン層の trait の具体的な実装と、ワイヤ形式（DTO）を提供します。

pub mod dto;
pub mod message_pusher;
pub mod repository;
