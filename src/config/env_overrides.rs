use super::Config;
use crate::guide::GuideMode;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("ARAPOST_API_URL").or_else(|_| std::env::var("API_URL"))
            && !url.trim().is_empty()
        {
            self.api_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Ok(raw) = std::env::var("ARAPOST_PROJECT_ID")
            && let Ok(project_id) = raw.trim().parse::<i64>()
            && project_id > 0
        {
            self.project_id = project_id;
        }

        if let Ok(raw) = std::env::var("ARAPOST_SESSION_TTL_SECS")
            && let Ok(ttl) = raw.trim().parse::<u64>()
            && ttl > 0
        {
            self.guide.session_ttl_secs = ttl;
        }

        if let Ok(raw) = std::env::var("ARAPOST_GUIDE_MODE")
            && let Ok(mode) = raw.trim().parse::<GuideMode>()
        {
            self.guide.default_mode = mode;
        }

        if let Ok(path) = std::env::var("ARAPOST_SESSION_FILE")
            && !path.trim().is_empty()
        {
            self.guide.session_file = Some(path);
        }
    }
}
