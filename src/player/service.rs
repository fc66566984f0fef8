use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::PlayerModel,
    repository::PlayerRepository,
    types::{PlayerCreateRequest, PlayerResponse, PlayerUpdateRequest},
};
use crate::shared::AppError;

/// Service for handling player business logic
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Registers a new player with zeroed aggregates
    #[instrument(skip(self))]
    pub async fn create_player(
        &self,
        request: PlayerCreateRequest,
    ) -> Result<PlayerResponse, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Player name is required".to_string()));
        }

        let player = PlayerModel::new(name.to_string());
        debug!(player_id = %player.id, "Generated player ID");

        self.repository.create_player(&player).await?;

        info!(player_id = %player.id, name = %player.name, "Player created successfully");

        Ok(player.into())
    }

    /// Lists all players, or those matching a name search
    #[instrument(skip(self))]
    pub async fn list_players(&self, search: Option<String>) -> Result<Vec<PlayerResponse>, AppError> {
        let players = match search.as_deref().map(str::trim) {
            Some(query) if !query.is_empty() => self.repository.search_players(query).await?,
            _ => self.repository.list_players().await?,
        };

        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }

    /// Fetches a single player by ID
    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        let player = self
            .repository
            .get_player(player_id)
            .await?
            .ok_or(AppError::NotFound("Player not found".to_string()))?;

        Ok(player.into())
    }

    /// Renames a player
    #[instrument(skip(self))]
    pub async fn update_player(
        &self,
        player_id: &str,
        request: PlayerUpdateRequest,
    ) -> Result<PlayerResponse, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Player name is required".to_string()));
        }

        let mut player = self
            .repository
            .get_player(player_id)
            .await?
            .ok_or(AppError::NotFound("Player not found".to_string()))?;

        player.name = name.to_string();
        player.updated_at = chrono::Utc::now();

        let updated = self.repository.update_player(&player).await?;

        info!(player_id = %player_id, name = %updated.name, "Player renamed");

        Ok(updated.into())
    }

    /// Soft-deletes a player by tagging the name; history stays intact so
    /// past match results keep resolving
    #[instrument(skip(self))]
    pub async fn delete_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        let mut player = self
            .repository
            .get_player(player_id)
            .await?
            .ok_or(AppError::NotFound("Player not found".to_string()))?;

        if !player.is_deleted() {
            player.name = format!("[DELETED] {}", player.name);
            player.updated_at = chrono::Utc::now();
        }

        let deleted = self.repository.update_player(&player).await?;

        info!(player_id = %player_id, "Player soft-deleted");

        Ok(deleted.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::repository::InMemoryPlayerRepository;

    fn service() -> (Arc<InMemoryPlayerRepository>, PlayerService) {
        let repo = Arc::new(InMemoryPlayerRepository::new());
        (repo.clone(), PlayerService::new(repo))
    }

    #[tokio::test]
    async fn test_create_player_success() {
        let (_repo, service) = service();

        let response = service
            .create_player(PlayerCreateRequest {
                name: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "alice");
        assert_eq!(response.total_points, 0);
        assert!(!response.id.is_empty());
    }

    #[tokio::test]
    async fn test_create_player_trims_whitespace() {
        let (_repo, service) = service();

        let response = service
            .create_player(PlayerCreateRequest {
                name: "  alice  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "alice");
    }

    #[tokio::test]
    async fn test_create_player_rejects_blank_name() {
        let (_repo, service) = service();

        let result = service
            .create_player(PlayerCreateRequest {
                name: "   ".to_string(),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_players_with_search() {
        let (_repo, service) = service();
        service
            .create_player(PlayerCreateRequest {
                name: "alice".to_string(),
            })
            .await
            .unwrap();
        service
            .create_player(PlayerCreateRequest {
                name: "bob".to_string(),
            })
            .await
            .unwrap();

        let all = service.list_players(None).await.unwrap();
        assert_eq!(all.len(), 2);

        let filtered = service.list_players(Some("ali".to_string())).await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "alice");

        // Blank search falls back to the full listing
        let blank = service.list_players(Some("  ".to_string())).await.unwrap();
        assert_eq!(blank.len(), 2);
    }

    #[tokio::test]
    async fn test_get_missing_player_is_not_found() {
        let (_repo, service) = service();

        let result = service.get_player("missing").await;
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_player_renames() {
        let (_repo, service) = service();
        let created = service
            .create_player(PlayerCreateRequest {
                name: "alice".to_string(),
            })
            .await
            .unwrap();

        let updated = service
            .update_player(
                &created.id,
                PlayerUpdateRequest {
                    name: "alicia".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "alicia");
    }

    #[tokio::test]
    async fn test_delete_player_tags_name_once() {
        let (_repo, service) = service();
        let created = service
            .create_player(PlayerCreateRequest {
                name: "alice".to_string(),
            })
            .await
            .unwrap();

        let deleted = service.delete_player(&created.id).await.unwrap();
        assert_eq!(deleted.name, "[DELETED] alice");

        // Deleting again must not stack the tag
        let deleted_again = service.delete_player(&created.id).await.unwrap();
        assert_eq!(deleted_again.name, "[DELETED] alice");
    }
}
