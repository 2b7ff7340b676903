use crate::consts::{SESSION_COOKIE, USER_AGENT};
use crate::error::FetchError;
use crate::session::SessionToken;
use crate::utils::debug_log;

use super::{Day, FetchOutcome, InputSource};

const NOT_FOUND: u16 = 404;

/// Fetches inputs from the puzzle site over HTTP
pub(crate) struct HttpSource {
    agent: ureq::Agent,
    base_url: String,
    year: u16,
    token: SessionToken,
}

impl HttpSource {
    pub(crate) fn new(base_url: &str, year: u16, token: SessionToken) -> Self {
        // Status codes are classified in `fetch_day`, not by ureq.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            year,
            token,
        }
    }

    pub(crate) fn day_url(&self, day: Day) -> String {
        format!("{}/{}/day/{}/input", self.base_url, self.year, day)
    }
}

impl InputSource for HttpSource {
    fn fetch_day(&self, day: Day) -> Result<FetchOutcome, FetchError> {
        let url = self.day_url(day);
        debug_log!("GET {url}");

        let response = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Cookie", format!("{SESSION_COOKIE}={}", self.token.as_str()))
            .call()
            .map_err(|source| FetchError::Transport {
                day: day.number(),
                source,
            })?;

        let status = response.status().as_u16();
        debug_log!("Day {day}: HTTP {status}");

        if status == NOT_FOUND {
            return Ok(FetchOutcome::NotFound);
        }
        if !response.status().is_success() {
            return Err(FetchError::Status {
                day: day.number(),
                status,
            });
        }

        let body = response
            .into_body()
            .read_to_string()
            .map_err(|source| FetchError::Body {
                day: day.number(),
                source,
            })?;
        debug_log!("Day {day}: {} bytes", body.len());

        Ok(FetchOutcome::Available(body))
    }
}
