use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use super::types::{
    GameLeaderboardEntry, LeaderboardEntry, OverallStats, PlayerRecentGame, PlayerStatsResponse,
    PositionCount,
};
use crate::game::repository::GameRepository;
use crate::matches::repository::MatchRepository;
use crate::player::models::PlayerModel;
use crate::player::repository::PlayerRepository;
use crate::shared::AppError;

const RECENT_FORM_GAMES: usize = 5;
const RECENT_GAMES_DETAIL: usize = 10;

/// Read-model service deriving leaderboards and statistics from player
/// aggregates and recorded match results
pub struct LeaderboardService {
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
}

impl LeaderboardService {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            game_repository,
            match_repository,
        }
    }

    /// Main leaderboard: players ordered by total points, enriched with
    /// derived rates and recent form
    #[instrument(skip(self))]
    pub async fn leaderboard(
        &self,
        limit: usize,
        min_games: Option<i32>,
    ) -> Result<Vec<LeaderboardEntry>, AppError> {
        let mut players = self.player_repository.list_players().await?;

        if let Some(min) = min_games {
            players.retain(|p| p.games_played >= min);
        }

        players.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        players.truncate(limit);

        let mut entries = Vec::with_capacity(players.len());
        for player in players {
            let recent_form = self.recent_form(&player.id).await?;
            entries.push(Self::leaderboard_entry(player, recent_form));
        }

        Ok(entries)
    }

    /// The player's finishing positions over their last games, most recent
    /// first
    #[instrument(skip(self))]
    pub async fn recent_form(&self, player_id: &str) -> Result<Vec<i32>, AppError> {
        let rows = self
            .match_repository
            .results_for_player(player_id, RECENT_FORM_GAMES)
            .await?;

        Ok(rows.into_iter().map(|(_, result)| result.position).collect())
    }

    /// Detailed statistics for one player: the aggregate row, recent games
    /// and position frequencies
    #[instrument(skip(self))]
    pub async fn player_stats(&self, player_id: &str) -> Result<PlayerStatsResponse, AppError> {
        let player = self
            .player_repository
            .get_player(player_id)
            .await?
            .ok_or(AppError::NotFound("Player not found".to_string()))?;

        let rows = self
            .match_repository
            .results_for_player(player_id, RECENT_GAMES_DETAIL)
            .await?;

        let mut recent_games = Vec::with_capacity(rows.len());
        for (game_match, result) in rows {
            let game_name = self
                .game_repository
                .get_game(&game_match.game_id)
                .await?
                .map(|g| g.name)
                .unwrap_or_default();

            recent_games.push(PlayerRecentGame {
                match_id: game_match.id,
                game_name,
                match_name: game_match.match_name,
                position: result.position,
                points_awarded: result.points_awarded,
                total_players: game_match.total_players,
                completed_at: game_match.completed_at,
            });
        }

        let all_results = self
            .match_repository
            .all_results_for_player(player_id)
            .await?;

        let mut counts: HashMap<i32, u32> = HashMap::new();
        for result in &all_results {
            *counts.entry(result.position).or_insert(0) += 1;
        }
        let mut position_stats: Vec<PositionCount> = counts
            .into_iter()
            .map(|(position, count)| PositionCount { position, count })
            .collect();
        position_stats.sort_by_key(|s| s.position);

        Ok(PlayerStatsResponse {
            player,
            recent_games,
            position_stats,
        })
    }

    /// Leaderboard restricted to one game, aggregated from its completed
    /// match results
    #[instrument(skip(self))]
    pub async fn game_leaderboard(
        &self,
        game_id: &str,
        limit: usize,
    ) -> Result<Vec<GameLeaderboardEntry>, AppError> {
        self.game_repository
            .get_game(game_id)
            .await?
            .ok_or(AppError::NotFound("Game not found".to_string()))?;

        let results = self.match_repository.results_for_game(game_id).await?;

        #[derive(Default)]
        struct Acc {
            total_points: i32,
            games_played: u32,
            wins: u32,
            podiums: u32,
        }

        let mut per_player: HashMap<String, Acc> = HashMap::new();
        for result in &results {
            let acc = per_player.entry(result.player_id.clone()).or_default();
            acc.total_points += result.points_awarded;
            acc.games_played += 1;
            if result.position == 1 {
                acc.wins += 1;
            }
            if result.position <= 3 {
                acc.podiums += 1;
            }
        }

        let mut entries = Vec::with_capacity(per_player.len());
        for (player_id, acc) in per_player {
            let player_name = self
                .player_repository
                .get_player(&player_id)
                .await?
                .map(|p| p.name)
                .unwrap_or_default();

            let games = acc.games_played as f64;
            entries.push(GameLeaderboardEntry {
                player_id,
                player_name,
                total_points: acc.total_points,
                games_played: acc.games_played,
                wins: acc.wins,
                podiums: acc.podiums,
                win_rate: if games > 0.0 {
                    acc.wins as f64 / games * 100.0
                } else {
                    0.0
                },
                podium_rate: if games > 0.0 {
                    acc.podiums as f64 / games * 100.0
                } else {
                    0.0
                },
                average_points: if games > 0.0 {
                    acc.total_points as f64 / games
                } else {
                    0.0
                },
            });
        }

        entries.sort_by(|a, b| b.total_points.cmp(&a.total_points));
        entries.truncate(limit);

        Ok(entries)
    }

    /// Headline numbers for the dashboard
    #[instrument(skip(self))]
    pub async fn overall_stats(&self) -> Result<OverallStats, AppError> {
        let players = self.player_repository.list_players().await?;
        let matches = self
            .match_repository
            .recent_completed_matches(usize::MAX)
            .await?;

        let top_score = players.iter().map(|p| p.total_points).max().unwrap_or(0);
        let total_points: i64 = players.iter().map(|p| p.total_points as i64).sum();
        let total_games: i64 = players.iter().map(|p| p.games_played as i64).sum();

        let avg = if total_games > 0 {
            total_points as f64 / total_games as f64
        } else {
            0.0
        };

        Ok(OverallStats {
            total_players: players.len(),
            total_matches: matches.len(),
            top_score,
            avg_points_per_game: (avg * 10.0).round() / 10.0,
        })
    }

    fn leaderboard_entry(player: PlayerModel, recent_form: Vec<i32>) -> LeaderboardEntry {
        let games = player.games_played as f64;
        LeaderboardEntry {
            win_rate: if games > 0.0 {
                player.wins as f64 / games * 100.0
            } else {
                0.0
            },
            podium_rate: if games > 0.0 {
                player.podiums as f64 / games * 100.0
            } else {
                0.0
            },
            average_points: if games > 0.0 {
                player.total_points as f64 / games
            } else {
                0.0
            },
            id: player.id,
            name: player.name,
            total_points: player.total_points,
            games_played: player.games_played,
            wins: player.wins,
            podiums: player.podiums,
            recent_form,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::models::{GameModel, GameTypeModel};
    use crate::game::repository::InMemoryGameRepository;
    use crate::matches::repository::InMemoryMatchRepository;
    use crate::matches::types::MatchResultEntry;
    use crate::matches::MatchService;
    use crate::player::repository::InMemoryPlayerRepository;

    struct Fixture {
        leaderboard: LeaderboardService,
        matches: MatchService,
        game: GameModel,
        players: Vec<PlayerModel>,
    }

    async fn fixture(player_count: usize) -> Fixture {
        let match_repo = Arc::new(InMemoryMatchRepository::new());
        let player_repo = Arc::new(InMemoryPlayerRepository::new());
        let game_repo = Arc::new(InMemoryGameRepository::new());

        let game_type = GameTypeModel::new("Board".to_string(), None);
        game_repo.create_game_type(&game_type).await.unwrap();
        let game = GameModel::new("Catan".to_string(), game_type.id.clone(), None, None, None);
        game_repo.create_game(&game).await.unwrap();

        let mut players = Vec::new();
        for i in 0..player_count {
            let player = PlayerModel::new(format!("player-{}", i + 1));
            player_repo.create_player(&player).await.unwrap();
            players.push(player);
        }

        Fixture {
            leaderboard: LeaderboardService::new(
                player_repo.clone(),
                game_repo.clone(),
                match_repo.clone(),
            ),
            matches: MatchService::new(match_repo, player_repo, game_repo),
            game,
            players,
        }
    }

    async fn play(fx: &Fixture, positions: &[i32]) {
        let results: Vec<MatchResultEntry> = fx
            .players
            .iter()
            .zip(positions)
            .map(|(player, position)| MatchResultEntry {
                player_id: player.id.clone(),
                position: *position,
            })
            .collect();

        fx.matches
            .submit_match(crate::matches::types::MatchSubmitRequest {
                game_id: fx.game.id.clone(),
                match_name: None,
                results,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_leaderboard_orders_by_total_points() {
        let fx = fixture(3).await;
        play(&fx, &[2, 1, 3]).await;
        play(&fx, &[2, 1, 3]).await;

        let board = fx.leaderboard.leaderboard(50, None).await.unwrap();
        assert_eq!(board.len(), 3);
        assert_eq!(board[0].name, "player-2");
        assert_eq!(board[0].total_points, 2);
        assert_eq!(board[0].wins, 2);
        assert_eq!(board[0].win_rate, 100.0);
        assert_eq!(board[2].name, "player-3");
        assert_eq!(board[2].total_points, -2);
    }

    #[tokio::test]
    async fn test_leaderboard_min_games_filter() {
        let fx = fixture(3).await;
        play(&fx, &[1, 2, 3]).await;

        let board = fx.leaderboard.leaderboard(50, Some(2)).await.unwrap();
        assert!(board.is_empty());

        play(&fx, &[1, 2, 3]).await;
        let board = fx.leaderboard.leaderboard(50, Some(2)).await.unwrap();
        assert_eq!(board.len(), 3);
    }

    #[tokio::test]
    async fn test_recent_form_is_most_recent_first_and_capped() {
        let fx = fixture(2).await;
        // player-1 finishes 1,2,1,2,1,2 across six games
        for i in 0..6 {
            if i % 2 == 0 {
                play(&fx, &[1, 2]).await;
            } else {
                play(&fx, &[2, 1]).await;
            }
        }

        let form = fx.leaderboard.recent_form(&fx.players[0].id).await.unwrap();
        assert_eq!(form.len(), 5);
        // Last game was i=5 (odd), so player-1 finished 2nd most recently
        assert_eq!(form, vec![2, 1, 2, 1, 2]);
    }

    #[tokio::test]
    async fn test_player_stats_counts_positions() {
        let fx = fixture(2).await;
        play(&fx, &[1, 2]).await;
        play(&fx, &[1, 2]).await;
        play(&fx, &[2, 1]).await;

        let stats = fx
            .leaderboard
            .player_stats(&fx.players[0].id)
            .await
            .unwrap();

        assert_eq!(stats.player.games_played, 3);
        assert_eq!(stats.recent_games.len(), 3);
        assert_eq!(stats.recent_games[0].game_name, "Catan");

        assert_eq!(stats.position_stats.len(), 2);
        assert_eq!(stats.position_stats[0].position, 1);
        assert_eq!(stats.position_stats[0].count, 2);
        assert_eq!(stats.position_stats[1].position, 2);
        assert_eq!(stats.position_stats[1].count, 1);
    }

    #[tokio::test]
    async fn test_player_stats_missing_player() {
        let fx = fixture(0).await;

        let result = fx.leaderboard.player_stats("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_game_leaderboard_aggregates_results() {
        let fx = fixture(3).await;
        play(&fx, &[1, 2, 3]).await;
        play(&fx, &[3, 1, 2]).await;

        let board = fx
            .leaderboard
            .game_leaderboard(&fx.game.id, 20)
            .await
            .unwrap();

        assert_eq!(board.len(), 3);
        // player-2 finished 2nd then 1st: 0 + 1 = 1 point, 1 win, 2 podiums
        assert_eq!(board[0].player_name, "player-2");
        assert_eq!(board[0].total_points, 1);
        assert_eq!(board[0].wins, 1);
        assert_eq!(board[0].podiums, 2);
        assert_eq!(board[0].games_played, 2);
    }

    #[tokio::test]
    async fn test_game_leaderboard_unknown_game() {
        let fx = fixture(0).await;

        let result = fx.leaderboard.game_leaderboard("missing", 20).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_overall_stats() {
        let fx = fixture(3).await;
        play(&fx, &[1, 2, 3]).await;
        play(&fx, &[1, 2, 3]).await;

        let stats = fx.leaderboard.overall_stats().await.unwrap();
        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.total_matches, 2);
        assert_eq!(stats.top_score, 2);
        // Zero-sum distribution: the average points per game is always 0
        assert_eq!(stats.avg_points_per_game, 0.0);
    }

    #[tokio::test]
    async fn test_overall_stats_empty() {
        let fx = fixture(0).await;

        let stats = fx.leaderboard.overall_stats().await.unwrap();
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.total_matches, 0);
        assert_eq!(stats.top_score, 0);
        assert_eq!(stats.avg_points_per_game, 0.0);
    }
}
