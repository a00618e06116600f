mod mock_auth_model;
mod recording_sink;

pub use mock_auth_model::MockAuthModel;
pub use recording_sink::RecordingSink;
