use crate::utils::gateway::SearchGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: SearchGateway,
}
