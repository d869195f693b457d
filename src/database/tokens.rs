use async_trait::async_trait;
use uuid::Uuid;

use super::generate_token;
use super::hash_token;
use super::Authenticator;
use super::Database;
use crate::Result;

#[async_trait]
impl Authenticator for Database {
    async fn authenticate(&self, token: &str) -> Result<Option<Uuid>> {
        let owner = sqlx::query_scalar::<_, Uuid>(
            "SELECT owner_id FROM access_tokens WHERE token_hash = $1",
        )
        .bind(hash_token(token))
        .fetch_optional(&self.pool)
        .await?;

        Ok(owner)
    }

    async fn issue_token(&self, owner: Uuid) -> Result<String> {
        let token = generate_token();

        sqlx::query("INSERT INTO access_tokens (token_hash, owner_id) VALUES ($1, $2)")
            .bind(hash_token(&token))
            .bind(owner)
            .execute(&self.pool)
            .await?;

        tracing::info!("Issued access token for {}", owner);
        Ok(token)
    }
}
