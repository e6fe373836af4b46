//! Telegram Bot API objects as they appear on the wire, decoded with serde.

mod shape;

pub mod boost;
pub mod business;
pub mod chat;
pub mod content;
pub mod entity;
pub mod envelope;
pub mod gift;
pub mod inline;
pub mod markup;
pub mod media;
pub mod member;
pub mod message;
pub mod passport;
pub mod payment;
pub mod primitives;
pub mod reaction;
pub mod reply;
pub mod response;
pub mod service;
pub mod story;
pub mod suggested;
pub mod update;
pub mod user;

pub use chat::Chat;
pub use envelope::{Rule, Violation};
pub use message::{MaybeInaccessibleMessage, Message, MessageKind};
pub use primitives::{ChatId, True};
pub use response::{ApiError, ApiResponse, ResponseParameters};
pub use update::{Update, UpdateKind, UpdateType};
pub use user::User;
