use sea_orm::DatabaseConnection;

/// Shared router state. The connection is a pool handle, cheap to clone
/// and safe to use from concurrent requests.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}
