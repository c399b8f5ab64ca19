pub mod lineup_json;

pub use lineup_json::{
    build_call_up_json, list_formations_json, replay_gestures_json, ApiError, ApiResponse,
    BuildCallUpRequest, ReplayRequest, ReplayResponse, API_VERSION,
};
