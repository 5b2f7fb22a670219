//! Content item and reaction DTOs.

use serde::Deserialize;

use portal_core::content::{ContentItem, Reaction};

use super::{DecodeError, require_positive};

/// A post as served by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl TryFrom<ItemDto> for ContentItem {
    type Error = DecodeError;

    fn try_from(dto: ItemDto) -> Result<Self, Self::Error> {
        Ok(ContentItem {
            id: require_positive("id", dto.id)?,
            owner_id: require_positive("userId", dto.user_id)?,
            title: dto.title,
            body: dto.body,
        })
    }
}

/// A comment as served by the provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionDto {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl TryFrom<ReactionDto> for Reaction {
    type Error = DecodeError;

    fn try_from(dto: ReactionDto) -> Result<Self, Self::Error> {
        Ok(Reaction {
            id: require_positive("id", dto.id)?,
            parent_item_id: require_positive("postId", dto.post_id)?,
            author_name: dto.name,
            author_email: dto.email,
            body: dto.body,
        })
    }
}
